use std::collections::HashMap;
use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::core::domain::Identifiable;

// Publication year sent when the librarian leaves it blank
pub const DEFAULT_PUBLICATION_YEAR: i32 = 2024;

// BookEntity is a title of the catalog as the catalog service stores it. A single
// entity stands for all the physical copies counted by `total_quantity`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookEntity {
    #[serde(default)]
    pub id: i64,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "autor", default)]
    pub author: String,
    #[serde(default)]
    pub isbn: String,
    #[serde(rename = "anoPublicacao", default)]
    pub published_year: Option<i32>,
    #[serde(rename = "quantidadeTotal", default)]
    pub total_quantity: i64,
    #[serde(rename = "quantidadeDisponivel", default)]
    pub available_quantity: Option<i64>,
}

impl BookEntity {
    pub fn new(title: &str, author: &str, isbn: &str, total_quantity: i64) -> Self {
        Self {
            id: 0,
            title: title.to_string(),
            author: author.to_string(),
            isbn: isbn.to_string(),
            published_year: None,
            total_quantity,
            available_quantity: Some(total_quantity),
        }
    }

    // exact match on isbn, title and author, the keys the catalog views filter on
    pub fn matches(&self, predicate: &HashMap<String, String>) -> bool {
        predicate.iter().all(|(k, v)| match k.as_str() {
            "id" => self.id.to_string() == *v,
            "isbn" => self.isbn == *v,
            "title" => self.title == *v,
            "author" => self.author == *v,
            _ => true,
        })
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Book for BookEntity {
    fn title(&self) -> &str {
        self.title.as_str()
    }

    fn total_quantity(&self) -> i64 {
        self.total_quantity
    }
}

// BookPayload is the body of create and update calls on the catalog service.
#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookPayload {
    pub titulo: String,
    pub autor: String,
    pub isbn: String,
    pub ano_publicacao: i32,
    pub quantidade_total: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantidade_disponivel: Option<i64>,
}

impl BookPayload {
    // a new title starts with every copy available
    pub fn for_create(book: &BookEntity) -> Self {
        let quantity = book.total_quantity.max(0);
        Self {
            titulo: book.title.to_string(),
            autor: book.author.to_string(),
            isbn: book.isbn.to_string(),
            ano_publicacao: book.published_year.unwrap_or(DEFAULT_PUBLICATION_YEAR),
            quantidade_total: quantity,
            quantidade_disponivel: Some(quantity),
        }
    }

    // the service keeps its own available count on update
    pub fn for_update(book: &BookEntity) -> Self {
        Self {
            quantidade_disponivel: None,
            ..Self::for_create(book)
        }
    }
}
