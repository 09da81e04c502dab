use serde::{Deserialize, Serialize};

use super::{Checkout, Patron};

/// ある資料を在庫している図書館と、その冊数
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryAvailableCheckouts {
    pub available: u32,
    pub library_name: String,
}

impl LibraryAvailableCheckouts {
    pub fn new(available: u32, library_name: impl Into<String>) -> Self {
        Self {
            available,
            library_name: library_name.into(),
        }
    }
}

/// 延滞している貸出と、その利用者
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverdueCheckout {
    pub patron: Patron,
    pub checkout: Checkout,
}

impl OverdueCheckout {
    pub fn new(patron: Patron, checkout: Checkout) -> Self {
        Self { patron, checkout }
    }
}
