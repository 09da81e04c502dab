use crate::domain::{self, CheckableAmount, Library, LibraryAvailableCheckouts, OverdueCheckout};
use crate::ports::{Clock, LibraryRepository};
use chrono::{DateTime, Utc};
use std::sync::Arc;

use super::checkable_service::CheckableService;
use super::errors::{ApplicationError, Result};

/// 図書館サービス
///
/// 図書館の取得・登録と、図書館・資料・貸出記録をまたぐ照会を担う。
///
/// # 一貫性
///
/// 保存時の名前重複チェックは利便のためのもので、並行する保存に対して
/// 原子的ではない。厳密な一意性はストア側（主キー等）で保証すること。
#[derive(Clone)]
pub struct LibraryService {
    library_repository: Arc<dyn LibraryRepository>,
    checkable_service: CheckableService,
    clock: Arc<dyn Clock>,
}

impl LibraryService {
    pub fn new(
        library_repository: Arc<dyn LibraryRepository>,
        checkable_service: CheckableService,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            library_repository,
            checkable_service,
            clock,
        }
    }

    /// すべての図書館を取得する
    pub async fn get_libraries(&self) -> Result<Vec<Library>> {
        self.library_repository
            .find_all()
            .await
            .map_err(ApplicationError::RepositoryError)
    }

    /// 名前で図書館を取得する
    ///
    /// # エラー
    /// - LibraryNotFound: 名前が完全一致する図書館がない
    pub async fn get_library_by_name(&self, name: &str) -> Result<Library> {
        self.library_repository
            .find_by_name(name)
            .await
            .map_err(ApplicationError::RepositoryError)?
            .ok_or_else(|| ApplicationError::LibraryNotFound(format!("{} not found!", name)))
    }

    /// 図書館を登録する
    ///
    /// 同名の図書館が既にある場合は保存せずに`ResourceExists`を返す。
    pub async fn save(&self, library: Library) -> Result<()> {
        let libraries = self.get_libraries().await?;

        if libraries.iter().any(|l| l.name == library.name) {
            return Err(ApplicationError::ResourceExists(format!(
                "Library with name: {} already exists!",
                library.name
            )));
        }

        self.library_repository
            .save(library)
            .await
            .map_err(ApplicationError::RepositoryError)
    }

    /// 図書館が保有する資料の冊数を取得する
    ///
    /// isbnは図書館の在庫に関係なく、全体で有効でなければならない。
    /// 全体には存在するがこの図書館に在庫がない場合は冊数0を返す。
    ///
    /// # エラー
    /// - CheckableNotFound: isbnがどこにも存在しない
    /// - LibraryNotFound: 図書館が存在しない
    pub async fn get_checkable_amount(
        &self,
        library_name: &str,
        isbn: &str,
    ) -> Result<CheckableAmount> {
        let checkable = self.checkable_service.get_by_isbn(isbn).await?;
        let library = self.get_library_by_name(library_name).await?;

        let amount = library
            .stock_of(isbn)
            .next()
            .map(|line| CheckableAmount::new(line.checkable.clone(), line.amount))
            .unwrap_or_else(|| CheckableAmount::new(checkable, 0));

        Ok(amount)
    }

    /// 資料を在庫している図書館を列挙する
    ///
    /// 在庫明細が一致するごとに1件返す。在庫明細がない図書館は含めない。
    /// 図書館順、図書館内の在庫順。
    ///
    /// # エラー
    /// - CheckableNotFound: isbnがどこにも存在しない
    pub async fn get_libraries_with_available_checkout(
        &self,
        isbn: &str,
    ) -> Result<Vec<LibraryAvailableCheckouts>> {
        self.checkable_service.get_by_isbn(isbn).await?;
        let libraries = self.get_libraries().await?;

        let available = libraries
            .iter()
            .flat_map(|library| {
                library.stock_of(isbn).map(move |line| {
                    LibraryAvailableCheckouts::new(line.amount, library.name.as_str())
                })
            })
            .collect();

        Ok(available)
    }

    /// 図書館の延滞貸出を列挙する
    ///
    /// 評価時刻は呼び出し開始時に1回だけ取得し、走査全体で同じ時刻を使う。
    ///
    /// # エラー
    /// - LibraryNotFound: 図書館が存在しない
    pub async fn get_overdue_checkouts(&self, library_name: &str) -> Result<Vec<OverdueCheckout>> {
        let now = self.clock.now();
        self.get_overdue_checkouts_at(library_name, now).await
    }

    /// 指定時刻で延滞貸出を列挙する
    pub async fn get_overdue_checkouts_at(
        &self,
        library_name: &str,
        now: DateTime<Utc>,
    ) -> Result<Vec<OverdueCheckout>> {
        let library = self.get_library_by_name(library_name).await?;
        Ok(domain::overdue_checkouts(&library, now))
    }
}
