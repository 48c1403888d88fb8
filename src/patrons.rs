use crate::core::domain::Identifiable;
use crate::core::library::Role;

pub mod command;
pub mod controller;
pub mod domain;
pub mod dto;
pub mod factory;

pub trait Patron: Identifiable {
    fn name(&self) -> &str;
    fn is_role(&self, match_role: Role) -> bool;
    // accounts allowed to run the admin front-end
    fn is_staff(&self) -> bool {
        self.is_role(Role::Admin) || self.is_role(Role::Librarian)
    }
}
