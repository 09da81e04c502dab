use serde::{Deserialize, Serialize};

/// メディアの種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MediaType {
    Book,
    Music,
    Video,
}

/// メディア（書籍・音楽・映像）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Media {
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub media_type: MediaType,
}

impl Media {
    pub fn new(
        isbn: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        media_type: MediaType,
    ) -> Self {
        Self {
            isbn: isbn.into(),
            title: title.into(),
            author: author.into(),
            media_type,
        }
    }
}

/// 理科実験キット
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScienceKit {
    pub isbn: String,
    pub title: String,
}

impl ScienceKit {
    pub fn new(isbn: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            isbn: isbn.into(),
            title: title.into(),
        }
    }
}

/// チケット（博物館・公園の入場券など）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    pub isbn: String,
    pub title: String,
}

impl Ticket {
    pub fn new(isbn: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            isbn: isbn.into(),
            title: title.into(),
        }
    }
}

/// 貸出可能な資料
///
/// 閉じたバリアント集合。すべてのバリアントがisbnを識別子として持つ。
/// 同一性はisbnのみで判定する。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Checkable {
    Media(Media),
    ScienceKit(ScienceKit),
    Ticket(Ticket),
}

impl Checkable {
    pub fn isbn(&self) -> &str {
        match self {
            Checkable::Media(media) => &media.isbn,
            Checkable::ScienceKit(kit) => &kit.isbn,
            Checkable::Ticket(ticket) => &ticket.isbn,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Checkable::Media(media) => &media.title,
            Checkable::ScienceKit(kit) => &kit.title,
            Checkable::Ticket(ticket) => &ticket.title,
        }
    }

    pub fn kind(&self) -> CheckableKind {
        match self {
            Checkable::Media(_) => CheckableKind::Media,
            Checkable::ScienceKit(_) => CheckableKind::ScienceKit,
            Checkable::Ticket(_) => CheckableKind::Ticket,
        }
    }

    /// isbnが一致するか
    pub fn has_isbn(&self, isbn: &str) -> bool {
        self.isbn() == isbn
    }
}

impl From<Media> for Checkable {
    fn from(media: Media) -> Self {
        Checkable::Media(media)
    }
}

impl From<ScienceKit> for Checkable {
    fn from(kit: ScienceKit) -> Self {
        Checkable::ScienceKit(kit)
    }
}

impl From<Ticket> for Checkable {
    fn from(ticket: Ticket) -> Self {
        Checkable::Ticket(ticket)
    }
}

/// 資料のバリアントを表すタグ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CheckableKind {
    Media,
    ScienceKit,
    Ticket,
}

impl CheckableKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckableKind::Media => "Media",
            CheckableKind::ScienceKit => "ScienceKit",
            CheckableKind::Ticket => "Ticket",
        }
    }
}

impl std::fmt::Display for CheckableKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CheckableKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Media" => Ok(CheckableKind::Media),
            "ScienceKit" => Ok(CheckableKind::ScienceKit),
            "Ticket" => Ok(CheckableKind::Ticket),
            _ => Err(format!("Invalid checkable type: {}", s)),
        }
    }
}
