use std::collections::HashSet;
use std::fmt;
use std::fmt::{Display, Formatter};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::core::library::LoanStatus;
use crate::loans::dto::LoanDto;
use crate::utils::date::serializer;

pub const MONTHS: [&str; 12] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun",
    "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"];

const RECENT_ACTIVITIES: usize = 5;

#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum ActivityKind {
    Loan,
    Returned,
    Late,
}

impl Display for ActivityKind {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            ActivityKind::Loan => write!(f, "Loan"),
            ActivityKind::Returned => write!(f, "Returned"),
            ActivityKind::Late => write!(f, "Late"),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct ActivityDto {
    pub loan_id: i64,
    pub kind: ActivityKind,
    pub text: String,
    #[serde(with = "serializer")]
    pub date: NaiveDate,
}

impl ActivityDto {
    // a stored return wins, otherwise a loan past its due date reads as late
    pub fn from_loan(loan: &LoanDto, today: NaiveDate) -> Self {
        let (kind, text) = if loan.status == LoanStatus::Returned {
            (ActivityKind::Returned, format!("Book returned: {}", loan.book_title))
        } else if loan.due_date < today {
            (ActivityKind::Late, format!("Late: {}", loan.user_name))
        } else {
            (ActivityKind::Loan, format!("Loan: {}", loan.book_title))
        };
        Self {
            loan_id: loan.loan_id,
            kind,
            text,
            date: loan.loan_date,
        }
    }
}

// DashboardDto gathers the counters and the recent activity of the dashboard view.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct DashboardDto {
    pub titles: usize,
    pub copies: i64,
    pub active_loans: usize,
    pub overdue_loans: usize,
    pub penalized_users: usize,
    pub loans_per_month: Vec<usize>,
    pub recent: Vec<ActivityDto>,
}

impl DashboardDto {
    pub fn compute(books: &[BookDto], loans: &[LoanDto], today: NaiveDate) -> Self {
        let overdue: Vec<&LoanDto> = loans.iter()
            .filter(|l| l.status == LoanStatus::Active && l.due_date < today)
            .collect();
        let penalized: HashSet<i64> = overdue.iter().map(|l| l.user_id).collect();

        let mut loans_per_month = vec![0; MONTHS.len()];
        for loan in loans {
            loans_per_month[loan.loan_date.month0() as usize] += 1;
        }

        Self {
            titles: books.len(),
            copies: books.iter().map(|b| b.quantity.max(0)).sum(),
            active_loans: loans.iter().filter(|l| l.status == LoanStatus::Active).count(),
            overdue_loans: overdue.len(),
            penalized_users: penalized.len(),
            loans_per_month,
            recent: loans.iter().rev().take(RECENT_ACTIVITIES)
                .map(|l| ActivityDto::from_loan(l, today)).collect(),
        }
    }
}
