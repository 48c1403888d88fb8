use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::core::domain::Identifiable;

// BookDto is a data transfer object for Catalog service. `available` is either the
// count reported by the backend or, once loans are known, the computed one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDto {
    pub book_id: i64,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub published_year: Option<i32>,
    pub quantity: i64,
    pub available: i64,
}

impl BookDto {
    pub fn new(title: &str, author: &str, isbn: &str, quantity: i64) -> BookDto {
        BookDto {
            book_id: 0,
            title: title.to_string(),
            author: author.to_string(),
            isbn: isbn.to_string(),
            published_year: None,
            quantity,
            available: quantity,
        }
    }

    // case-insensitive on title and author, plain substring on isbn
    pub fn matches_term(&self, term: &str) -> bool {
        if term.is_empty() {
            return true;
        }
        let lower = term.to_lowercase();
        self.title.to_lowercase().contains(&lower) ||
            self.author.to_lowercase().contains(&lower) ||
            self.isbn.contains(term)
    }
}

impl Identifiable for BookDto {
    fn id(&self) -> i64 {
        self.book_id
    }
}

impl Book for BookDto {
    fn title(&self) -> &str {
        self.title.as_str()
    }

    fn total_quantity(&self) -> i64 {
        self.quantity
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            book_id: other.id,
            title: other.title.to_string(),
            author: other.author.to_string(),
            isbn: other.isbn.to_string(),
            published_year: other.published_year,
            quantity: other.total_quantity,
            available: other.available_quantity.unwrap_or(other.total_quantity),
        }
    }
}

impl From<&BookDto> for BookEntity {
    fn from(other: &BookDto) -> Self {
        Self {
            id: other.book_id,
            title: other.title.to_string(),
            author: other.author.to_string(),
            isbn: other.isbn.to_string(),
            published_year: other.published_year,
            total_quantity: other.quantity,
            available_quantity: Some(other.available),
        }
    }
}
