use std::collections::HashMap;
use async_trait::async_trait;
use chrono::NaiveDate;
use tracing::{info, warn};
use crate::books::domain::StockAdjustment;
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::domain::Configuration;
use crate::core::library::{LibraryError, LibraryResult, LoanStatus};
use crate::loans::domain::LoanService;
use crate::loans::domain::model::{available_copies, LoanEntity, open_loans_of_user};
use crate::loans::dto::{LoanDto, LoanForm};
use crate::loans::repository::LoanRepository;
use crate::patrons::domain::PatronService;
use crate::utils::date;

pub struct LoanServiceImpl {
    max_active_loans: usize,
    loan_days: i64,
    sync_stock: bool,
    today: Option<NaiveDate>,
    loan_repository: Box<dyn LoanRepository>,
    catalog_service: Box<dyn CatalogService>,
    patron_service: Box<dyn PatronService>,
}

impl LoanServiceImpl {
    pub fn new(config: &Configuration, loan_repository: Box<dyn LoanRepository>,
               catalog_service: Box<dyn CatalogService>, patron_service: Box<dyn PatronService>) -> Self {
        Self {
            max_active_loans: config.max_active_loans,
            loan_days: config.loan_days,
            sync_stock: config.sync_stock,
            today: None,
            loan_repository,
            catalog_service,
            patron_service,
        }
    }

    // pins the current date, overdue derivation and default loan dates use it
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(date::today)
    }

    // returns the selected user and book once the form passes every rule
    async fn validate(&self, form: &LoanForm, loans: &[LoanEntity]) -> LibraryResult<(i64, i64)> {
        let (user_id, book_id) = match (form.user_id, form.book_id) {
            (Some(user_id), Some(book_id)) if user_id > 0 && book_id > 0 => (user_id, book_id),
            _ => return Err(LibraryError::validation("select a user and a book", None)),
        };
        if !form.status.is_open() {
            return Ok((user_id, book_id));
        }

        self.patron_service.find_user_by_id(user_id).await?;
        let open = open_loans_of_user(loans, user_id, form.loan_id);
        if open >= self.max_active_loans {
            warn!(user_id, open, "loan rejected, user at the limit");
            return Err(LibraryError::validation(
                format!("this user already has {} open loans, a book must be returned first",
                        self.max_active_loans).as_str(), None));
        }

        let book = self.catalog_service.find_book_by_id(book_id).await?;
        if available_copies(book.quantity, loans, book_id, form.loan_id) <= 0 {
            warn!(book_id, "loan rejected, no copies left");
            return Err(LibraryError::validation(
                format!("the book \"{}\" is not available in stock", book.title).as_str(), None));
        }
        Ok((user_id, book_id))
    }

    // mirrors on the catalog service the copy taken or given back by a loan change
    async fn sync(&self, previous: Option<&LoanEntity>, next: Option<&LoanEntity>) -> LibraryResult<()> {
        if !self.sync_stock {
            return Ok(());
        }
        let before = held_book(previous);
        let after = held_book(next);
        if before == after {
            return Ok(());
        }
        // the copy is taken first, a failure there leaves the backend untouched
        if let Some(book_id) = after {
            self.catalog_service.adjust_stock(book_id, StockAdjustment::Decrement).await?;
        }
        if let Some(book_id) = before {
            if let Err(err) = self.catalog_service.adjust_stock(book_id, StockAdjustment::Increment).await {
                if let Some(taken) = after {
                    warn!(book_id = taken, error = %err, "giving back the copy taken for the new book");
                    if let Err(undo) = self.catalog_service.adjust_stock(taken, StockAdjustment::Increment).await {
                        warn!(book_id = taken, error = %undo, "could not give back the copy");
                    }
                }
                return Err(err);
            }
        }
        Ok(())
    }

    async fn resolve(&self, loans: &[LoanEntity]) -> LibraryResult<Vec<LoanDto>> {
        let users: HashMap<i64, String> = self.patron_service.list_users().await?
            .into_iter().map(|u| (u.user_id, u.name)).collect();
        let books: HashMap<i64, String> = self.catalog_service.list_books().await?
            .into_iter().map(|b| (b.book_id, b.title)).collect();
        let today = self.today();
        Ok(loans.iter().map(|l| LoanDto::from_entity(
            l,
            users.get(&l.user_id).map(String::as_str),
            books.get(&l.book_id).map(String::as_str),
            today)).collect())
    }

    async fn resolve_one(&self, loan: &LoanEntity) -> LibraryResult<LoanDto> {
        self.resolve(std::slice::from_ref(loan)).await?.pop()
            .ok_or_else(|| LibraryError::runtime("loan could not be resolved", None))
    }
}

fn held_book(loan: Option<&LoanEntity>) -> Option<i64> {
    loan.filter(|l| l.status.is_open()).map(|l| l.book_id)
}

#[async_trait]
impl LoanService for LoanServiceImpl {
    async fn submit_loan(&self, form: &LoanForm) -> LibraryResult<LoanDto> {
        let loans = self.loan_repository.list().await?;
        let previous = match form.loan_id {
            Some(id) => Some(loans.iter().find(|l| l.id == id).cloned()
                .ok_or_else(|| LibraryError::not_found(format!("loan not found for {}", id).as_str()))?),
            None => None,
        };
        let (user_id, book_id) = self.validate(form, &loans).await?;

        let loan_date = form.loan_date.unwrap_or_else(|| self.today());
        let loan = LoanEntity {
            id: form.loan_id.unwrap_or(0),
            user_id,
            book_id,
            loan_date,
            due_date: form.due_date.unwrap_or_else(|| date::due_date(loan_date, self.loan_days)),
            status: form.status,
        };
        self.sync(previous.as_ref(), Some(&loan)).await?;
        let stored = match previous {
            Some(_) => self.loan_repository.update(&loan).await?,
            None => self.loan_repository.create(&loan).await?,
        };
        self.resolve_one(&stored).await
    }

    async fn return_loan(&self, id: i64) -> LibraryResult<LoanDto> {
        let existing = self.loan_repository.get(id).await?;
        if existing.status == LoanStatus::Returned {
            return self.resolve_one(&existing).await;
        }
        let mut form = LoanForm::from(&existing);
        form.status = LoanStatus::Returned;
        let returned = self.submit_loan(&form).await?;
        info!(loan_id = id, "loan returned");
        Ok(returned)
    }

    async fn remove_loan(&self, id: i64) -> LibraryResult<()> {
        let existing = self.loan_repository.get(id).await?;
        self.sync(Some(&existing), None).await?;
        self.loan_repository.delete(id).await.map(|_| ())
    }

    async fn find_loan_by_id(&self, id: i64) -> LibraryResult<LoanDto> {
        let loan = self.loan_repository.get(id).await?;
        self.resolve_one(&loan).await
    }

    async fn list_loans(&self, term: Option<&str>) -> LibraryResult<Vec<LoanDto>> {
        let loans = self.loan_repository.list().await?;
        let all = self.resolve(&loans).await?;
        match term.map(str::trim).filter(|t| !t.is_empty()) {
            Some(term) => Ok(all.into_iter().filter(|l| l.matches_term(term)).collect()),
            None => Ok(all),
        }
    }

    async fn books_with_stock(&self, ignore_loan_id: Option<i64>) -> LibraryResult<Vec<BookDto>> {
        let books = self.catalog_service.list_books().await?;
        let loans = self.loan_repository.list().await?;
        Ok(books.into_iter().map(|mut book| {
            book.available = available_copies(book.quantity, &loans, book.book_id, ignore_loan_id);
            book
        }).collect())
    }
}
