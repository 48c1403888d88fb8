use crate::core::domain::Identifiable;

pub mod model;

pub trait Book: Identifiable {
    fn title(&self) -> &str;
    // nominal number of copies owned by the library
    fn total_quantity(&self) -> i64;
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum StockAdjustment {
    Increment,
    Decrement,
}
