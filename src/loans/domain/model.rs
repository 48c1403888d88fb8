use std::collections::HashMap;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::core::library::LoanStatus;
use crate::utils::date::serializer;

// LoanEntity is one record of the loan history cache. Field names follow the
// history kept by the browser front-end.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct LoanEntity {
    pub id: i64,
    #[serde(rename = "usuarioId")]
    pub user_id: i64,
    #[serde(rename = "livroId")]
    pub book_id: i64,
    #[serde(rename = "dataEmprestimo", with = "serializer")]
    pub loan_date: NaiveDate,
    #[serde(rename = "dataDevolucaoPrevista", with = "serializer")]
    pub due_date: NaiveDate,
    pub status: LoanStatus,
}

impl LoanEntity {
    pub fn new(user_id: i64, book_id: i64, loan_date: NaiveDate, due_date: NaiveDate) -> Self {
        Self {
            id: 0,
            user_id,
            book_id,
            loan_date,
            due_date,
            status: LoanStatus::Active,
        }
    }

    // an Active loan past its expected return date shows as Overdue
    pub fn display_status(&self, today: NaiveDate) -> LoanStatus {
        if self.status == LoanStatus::Active && self.due_date < today {
            LoanStatus::Overdue
        } else {
            self.status
        }
    }

    pub fn matches(&self, predicate: &HashMap<String, String>) -> bool {
        predicate.iter().all(|(k, v)| match k.as_str() {
            "id" => self.id.to_string() == *v,
            "user_id" => self.user_id.to_string() == *v,
            "book_id" => self.book_id.to_string() == *v,
            "status" => self.status == LoanStatus::from(v.to_string()),
            _ => true,
        })
    }
}

impl Identifiable for LoanEntity {
    fn id(&self) -> i64 {
        self.id
    }
}

// open loans held by a user, not counting `ignore_loan_id`
pub fn open_loans_of_user(loans: &[LoanEntity], user_id: i64, ignore_loan_id: Option<i64>) -> usize {
    loans.iter()
        .filter(|l| l.user_id == user_id && l.status.is_open() && Some(l.id) != ignore_loan_id)
        .count()
}

// copies of a book left once the open loans, other than `ignore_loan_id`, are taken out
pub fn available_copies(total_quantity: i64, loans: &[LoanEntity], book_id: i64, ignore_loan_id: Option<i64>) -> i64 {
    let lent = loans.iter()
        .filter(|l| l.book_id == book_id && l.status.is_open() && Some(l.id) != ignore_loan_id)
        .count() as i64;
    total_quantity - lent
}

pub fn next_loan_id(loans: &[LoanEntity]) -> i64 {
    loans.iter().map(|l| l.id).max().map(|id| id + 1).unwrap_or(1)
}
