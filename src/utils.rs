pub mod cpf;
pub mod date;
pub mod http;
#[cfg(test)]
pub(crate) mod fake_backend;
