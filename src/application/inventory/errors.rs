use thiserror::Error;

/// 呼び出し側が分岐に使うエラー種別
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// 一意キーでの検索が一致しなかった
    NotFound,
    /// 一意キーが衝突した（書き込みは行われていない）
    AlreadyExists,
    /// リポジトリ側の障害
    Repository,
}

/// 在庫管理アプリケーション層のエラー
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 図書館が見つからない
    #[error("{0}")]
    LibraryNotFound(String),

    /// 資料が見つからない
    #[error("{0}")]
    CheckableNotFound(String),

    /// 同じキーのリソースが既に存在する
    #[error("{0}")]
    ResourceExists(String),

    /// リポジトリのエラー
    #[error("Repository error")]
    RepositoryError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ApplicationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApplicationError::LibraryNotFound(_) | ApplicationError::CheckableNotFound(_) => {
                ErrorKind::NotFound
            }
            ApplicationError::ResourceExists(_) => ErrorKind::AlreadyExists,
            ApplicationError::RepositoryError(_) => ErrorKind::Repository,
        }
    }
}

/// アプリケーション層の Result型
pub type Result<T> = std::result::Result<T, ApplicationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_variants_share_kind() {
        assert_eq!(
            ApplicationError::LibraryNotFound("Central not found!".into()).kind(),
            ErrorKind::NotFound
        );
        assert_eq!(
            ApplicationError::CheckableNotFound("XXX not found!".into()).kind(),
            ErrorKind::NotFound
        );
    }

    #[test]
    fn test_message_is_carried_verbatim() {
        let err = ApplicationError::ResourceExists(
            "Library with name: Central already exists!".into(),
        );
        assert_eq!(err.kind(), ErrorKind::AlreadyExists);
        assert_eq!(err.to_string(), "Library with name: Central already exists!");
    }

    #[test]
    fn test_repository_error_keeps_source() {
        use std::error::Error as _;

        let io = std::io::Error::other("connection reset");
        let err = ApplicationError::RepositoryError(Box::new(io));
        assert_eq!(err.kind(), ErrorKind::Repository);
        assert_eq!(err.source().unwrap().to_string(), "connection reset");
    }
}
