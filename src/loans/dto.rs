use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::core::library::{LibraryError, LibraryResult, LoanStatus};
use crate::loans::domain::model::LoanEntity;
use crate::utils::date::serializer;

pub const REMOVED_USER: &str = "Removed user";
pub const REMOVED_BOOK: &str = "Removed book";

// LoanDto is a loan as the loans view lists it: names resolved and status derived.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct LoanDto {
    pub loan_id: i64,
    pub user_id: i64,
    pub book_id: i64,
    pub user_name: String,
    pub book_title: String,
    #[serde(with = "serializer")]
    pub loan_date: NaiveDate,
    #[serde(with = "serializer")]
    pub due_date: NaiveDate,
    pub status: LoanStatus,
    pub display_status: LoanStatus,
}

impl LoanDto {
    pub fn from_entity(entity: &LoanEntity, user_name: Option<&str>, book_title: Option<&str>,
                       today: NaiveDate) -> Self {
        Self {
            loan_id: entity.id,
            user_id: entity.user_id,
            book_id: entity.book_id,
            user_name: user_name.unwrap_or(REMOVED_USER).to_string(),
            book_title: book_title.unwrap_or(REMOVED_BOOK).to_string(),
            loan_date: entity.loan_date,
            due_date: entity.due_date,
            status: entity.status,
            display_status: entity.display_status(today),
        }
    }

    pub fn is_overdue(&self) -> bool {
        self.display_status == LoanStatus::Overdue
    }

    // case-insensitive on user name, book title and the shown status
    pub fn matches_term(&self, term: &str) -> bool {
        let lower = term.trim().to_lowercase();
        self.user_name.to_lowercase().contains(&lower) ||
            self.book_title.to_lowercase().contains(&lower) ||
            self.display_status.to_string().to_lowercase().contains(&lower)
    }
}

impl Identifiable for LoanDto {
    fn id(&self) -> i64 {
        self.loan_id
    }
}

// LoanForm is what the librarian submits to register a loan or, with `loan_id`, to edit one.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct LoanForm {
    pub loan_id: Option<i64>,
    pub user_id: Option<i64>,
    pub book_id: Option<i64>,
    pub loan_date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
    pub status: LoanStatus,
}

impl LoanForm {
    pub fn new(user_id: i64, book_id: i64) -> Self {
        Self {
            loan_id: None,
            user_id: Some(user_id),
            book_id: Some(book_id),
            loan_date: None,
            due_date: None,
            status: LoanStatus::Active,
        }
    }
}

// Overdue is derived from the due date, a librarian only chooses Active or Returned.
pub fn submitted_status(value: &str) -> LibraryResult<LoanStatus> {
    match LoanStatus::try_from(value)? {
        LoanStatus::Overdue => Err(LibraryError::validation(
            "a loan can only be submitted as Active or Returned", None)),
        status => Ok(status),
    }
}

impl From<&LoanEntity> for LoanForm {
    fn from(other: &LoanEntity) -> Self {
        Self {
            loan_id: Some(other.id),
            user_id: Some(other.user_id),
            book_id: Some(other.book_id),
            loan_date: Some(other.loan_date),
            due_date: Some(other.due_date),
            status: other.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use crate::core::library::LoanStatus;
    use crate::loans::domain::model::LoanEntity;
    use crate::core::library::LibraryError;
    use crate::loans::dto::{LoanDto, LoanForm, submitted_status};

    #[tokio::test]
    async fn test_should_resolve_removed_references() {
        let mut entity = LoanEntity::new(1, 2,
                                         NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                                         NaiveDate::from_ymd_opt(2024, 1, 31).unwrap());
        entity.id = 5;
        let loan = LoanDto::from_entity(&entity, None, Some("Dom Casmurro"),
                                        NaiveDate::from_ymd_opt(2024, 2, 10).unwrap());
        assert_eq!("Removed user", loan.user_name.as_str());
        assert_eq!(LoanStatus::Active, loan.status);
        assert!(loan.is_overdue());
        assert!(loan.matches_term("OVERDUE"));
        assert!(loan.matches_term("casmurro"));
        assert!(loan.matches_term("removed"));
        assert!(!loan.matches_term("returned"));
    }

    #[tokio::test]
    async fn test_should_build_edit_form() {
        let mut entity = LoanEntity::new(1, 2,
                                         NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                                         NaiveDate::from_ymd_opt(2024, 1, 31).unwrap());
        entity.id = 5;
        let form = LoanForm::from(&entity);
        assert_eq!(Some(5), form.loan_id);
        assert_eq!(None, LoanForm::new(1, 2).loan_id);
    }

    #[tokio::test]
    async fn test_should_accept_only_choosable_statuses() {
        assert_eq!(LoanStatus::Active, submitted_status("ativo").unwrap());
        assert_eq!(LoanStatus::Returned, submitted_status("Returned").unwrap());
        let err = submitted_status("atrasado").expect_err("overdue is derived");
        assert_eq!("a loan can only be submitted as Active or Returned", err.message());
        assert!(matches!(submitted_status("devolvdo"), Err(LibraryError::Validation { .. })));
    }
}
