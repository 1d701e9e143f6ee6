use crate::books::factory;
use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;
use crate::library::domain::LibraryService;
use crate::library::domain::service::LibraryServiceImpl;

pub async fn create_library_service(config: &Configuration, store: RepositoryStore) -> Box<dyn LibraryService> {
    let book_repo = factory::create_book_repository(config, store).await;
    Box::new(LibraryServiceImpl::new(config, book_repo))
}
