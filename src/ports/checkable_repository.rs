use crate::domain::{Checkable, CheckableKind};
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 資料リポジトリポート
#[async_trait]
pub trait CheckableRepository: Send + Sync {
    /// すべての資料を取得する（順序はストア定義）
    async fn find_all(&self) -> Result<Vec<Checkable>>;

    /// isbnで資料を取得する
    async fn find_by_isbn(&self, isbn: &str) -> Result<Option<Checkable>>;

    /// 指定バリアントの資料を1件取得する
    ///
    /// 複数ある場合はストア順で最初のもの。
    async fn find_by_type(&self, kind: CheckableKind) -> Result<Option<Checkable>>;

    /// 資料を保存する
    async fn save(&self, checkable: Checkable) -> Result<()>;
}
