use serde::{Deserialize, Serialize};

use crate::domain::{CheckableAmount, Library, LibraryCard};

/// 図書館登録リクエスト（POST /libraries）
#[derive(Debug, Deserialize)]
pub struct CreateLibraryRequest {
    pub name: String,
    #[serde(default)]
    pub checkables: Vec<CheckableAmount>,
    #[serde(default)]
    pub library_cards: Vec<LibraryCard>,
}

impl CreateLibraryRequest {
    pub fn into_library(self) -> Library {
        Library::new(self.name)
            .with_checkables(self.checkables)
            .with_library_cards(self.library_cards)
    }
}

/// 登録成功レスポンス
#[derive(Debug, Serialize, Deserialize)]
pub struct CreatedResponse {
    /// 登録されたリソースのキー（図書館名またはisbn）
    pub key: String,
}

/// エラーレスポンス
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
        }
    }
}
