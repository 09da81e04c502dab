use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Checkable, LibraryCardId, OverdueCheckout, PatronId};

/// 利用者
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patron {
    pub patron_id: PatronId,
    pub name: String,
}

impl Patron {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            patron_id: PatronId::new(),
            name: name.into(),
        }
    }
}

/// 貸出記録
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checkout {
    pub checkable: Checkable,
    pub checkout_date: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
}

impl Checkout {
    pub fn new(
        checkable: Checkable,
        checkout_date: DateTime<Utc>,
        due_date: DateTime<Utc>,
    ) -> Self {
        Self {
            checkable,
            checkout_date,
            due_date,
        }
    }

    /// 延滞判定
    ///
    /// 返却期限が`now`より厳密に前の場合のみ延滞。
    /// 期限ちょうどは延滞ではない。
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        self.due_date < now
    }
}

/// 図書館カード
///
/// 1つの図書館に属し、1人の利用者が所有する。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryCard {
    pub card_id: LibraryCardId,
    pub patron: Patron,
    pub checkouts: Vec<Checkout>,
}

impl LibraryCard {
    pub fn new(patron: Patron, checkouts: Vec<Checkout>) -> Self {
        Self {
            card_id: LibraryCardId::new(),
            patron,
            checkouts,
        }
    }
}

/// 在庫明細 - 図書館が保有する資料とその冊数
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckableAmount {
    pub checkable: Checkable,
    pub amount: u32,
}

impl CheckableAmount {
    pub fn new(checkable: Checkable, amount: u32) -> Self {
        Self { checkable, amount }
    }
}

/// 図書館
///
/// 名前が一意キー。一意性は保存時にサービス層で確認する。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Library {
    pub name: String,
    #[serde(default)]
    pub checkables: Vec<CheckableAmount>,
    #[serde(default)]
    pub library_cards: Vec<LibraryCard>,
}

impl Library {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            checkables: Vec::new(),
            library_cards: Vec::new(),
        }
    }

    pub fn with_checkables(mut self, checkables: Vec<CheckableAmount>) -> Self {
        self.checkables = checkables;
        self
    }

    pub fn with_library_cards(mut self, library_cards: Vec<LibraryCard>) -> Self {
        self.library_cards = library_cards;
        self
    }

    /// isbnが一致する在庫明細を在庫順に返す
    pub fn stock_of<'a>(&'a self, isbn: &'a str) -> impl Iterator<Item = &'a CheckableAmount> {
        self.checkables
            .iter()
            .filter(move |line| line.checkable.has_isbn(isbn))
    }
}

/// 純粋関数：図書館の延滞貸出を列挙する
///
/// すべてのカード・すべての貸出を同じ`now`で評価する。
/// カード順、カード内の貸出順で返す。
pub fn overdue_checkouts(library: &Library, now: DateTime<Utc>) -> Vec<OverdueCheckout> {
    library
        .library_cards
        .iter()
        .flat_map(|card| {
            card.checkouts
                .iter()
                .filter(move |checkout| checkout.is_overdue(now))
                .map(move |checkout| OverdueCheckout::new(card.patron.clone(), checkout.clone()))
        })
        .collect()
}
