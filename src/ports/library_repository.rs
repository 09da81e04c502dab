use crate::domain::Library;
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 図書館リポジトリポート
///
/// 図書館集約（在庫明細・図書館カードを含む）の永続化を抽象化する。
/// 名前の一意性はこのポートでは保証しない。
#[async_trait]
pub trait LibraryRepository: Send + Sync {
    /// すべての図書館を取得する（順序はストア定義）
    async fn find_all(&self) -> Result<Vec<Library>>;

    /// 名前が完全一致する図書館を取得する
    async fn find_by_name(&self, name: &str) -> Result<Option<Library>>;

    /// 図書館を保存する
    async fn save(&self, library: Library) -> Result<()>;
}
