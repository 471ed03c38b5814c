use crate::error::LibrisError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub type BookId = u64;

/// Availability of a book. Serialized with the labels used in existing catalog files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BookStatus {
    #[default]
    #[serde(rename = "в наличии")]
    Available,
    #[serde(rename = "выдана")]
    CheckedOut,
}

impl BookStatus {
    pub const ALL: [BookStatus; 2] = [BookStatus::Available, BookStatus::CheckedOut];

    pub fn label(&self) -> &'static str {
        match self {
            BookStatus::Available => "в наличии",
            BookStatus::CheckedOut => "выдана",
        }
    }

    /// Quoted, comma separated labels, for messages.
    pub fn labels() -> String {
        Self::ALL
            .iter()
            .map(|s| format!("'{}'", s.label()))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for BookStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for BookStatus {
    type Err = LibrisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some(status) = Self::ALL.into_iter().find(|st| st.label() == trimmed) {
            return Ok(status);
        }
        match trimmed.to_lowercase().as_str() {
            "available" => Ok(BookStatus::Available),
            "checked-out" | "checked out" | "checked_out" => Ok(BookStatus::CheckedOut),
            _ => Err(LibrisError::InvalidStatus(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    #[serde(rename = "book_id")]
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub year: i32,
    #[serde(default)]
    pub status: BookStatus,
}

impl Book {
    pub fn new(id: BookId, title: impl Into<String>, author: impl Into<String>, year: i32) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            year,
            status: BookStatus::default(),
        }
    }

    pub fn with_status(mut self, status: BookStatus) -> Self {
        self.status = status;
        self
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {} | Title: {} | Author: {} | Year: {} | Status: {}",
            self.id, self.title, self.author, self.year, self.status
        )
    }
}
