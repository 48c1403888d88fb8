pub mod auth;
pub mod books;
pub mod catalog;
pub mod core;
pub mod dashboard;
pub mod loans;
pub mod patrons;
pub mod users;
pub mod utils;
