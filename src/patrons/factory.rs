use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;
use crate::patrons::domain::PatronService;
use crate::patrons::domain::service::PatronServiceImpl;
use crate::users::factory;

pub async fn create_patron_service(config: &Configuration) -> LibraryResult<Box<dyn PatronService>> {
    let user_repo = factory::create_user_repository(config).await?;
    Ok(Box::new(PatronServiceImpl::new(user_repo)))
}
