use crate::domain::{Checkable, CheckableKind};
use crate::ports::CheckableRepository;
use std::sync::Arc;

use super::errors::{ApplicationError, Result};

/// 資料サービス
///
/// 資料の取得・検索・登録を担う。依存するリポジトリは生成時に渡す。
#[derive(Clone)]
pub struct CheckableService {
    checkable_repository: Arc<dyn CheckableRepository>,
}

impl CheckableService {
    pub fn new(checkable_repository: Arc<dyn CheckableRepository>) -> Self {
        Self {
            checkable_repository,
        }
    }

    /// すべての資料を取得する
    pub async fn get_all(&self) -> Result<Vec<Checkable>> {
        self.checkable_repository
            .find_all()
            .await
            .map_err(ApplicationError::RepositoryError)
    }

    /// isbnで資料を取得する
    ///
    /// # エラー
    /// - CheckableNotFound: isbnに一致する資料がない
    pub async fn get_by_isbn(&self, isbn: &str) -> Result<Checkable> {
        self.checkable_repository
            .find_by_isbn(isbn)
            .await
            .map_err(ApplicationError::RepositoryError)?
            .ok_or_else(|| {
                ApplicationError::CheckableNotFound(format!(
                    "Checkable with isbn: {} not found!",
                    isbn
                ))
            })
    }

    /// バリアント名で資料を1件取得する
    ///
    /// ドメインのバリアントでない名前（例: "List"）は、在庫のない
    /// バリアントと同じ経路で`CheckableNotFound`になる。
    pub async fn get_by_type(&self, type_name: &str) -> Result<Checkable> {
        let found = match type_name.parse::<CheckableKind>() {
            Ok(kind) => self
                .checkable_repository
                .find_by_type(kind)
                .await
                .map_err(ApplicationError::RepositoryError)?,
            Err(_) => None,
        };

        found.ok_or_else(|| {
            ApplicationError::CheckableNotFound(format!(
                "Checkable of type: {} not found!",
                type_name
            ))
        })
    }

    /// 資料を登録する
    ///
    /// 同じisbnの資料が既にある場合は保存せずに`ResourceExists`を返す。
    pub async fn save(&self, checkable: Checkable) -> Result<()> {
        let existing = self
            .checkable_repository
            .find_all()
            .await
            .map_err(ApplicationError::RepositoryError)?;

        if existing.iter().any(|c| c.has_isbn(checkable.isbn())) {
            return Err(ApplicationError::ResourceExists(format!(
                "Checkable with isbn: {} already exists!",
                checkable.isbn()
            )));
        }

        self.checkable_repository
            .save(checkable)
            .await
            .map_err(ApplicationError::RepositoryError)
    }
}
