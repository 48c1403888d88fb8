use crate::auth::session::current_token;
use crate::books::repository::BookRepository;
use crate::books::repository::http_book_repository::HttpBookRepository;
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;
use crate::utils::http::{build_http_client, RestClient};

pub async fn create_book_repository(config: &Configuration) -> LibraryResult<Box<dyn BookRepository>> {
    let token = current_token(config).await?;
    let client = RestClient::new(build_http_client()?, config.catalog_url.as_str(), token);
    Ok(Box::new(HttpBookRepository::new(client, "livros")))
}
