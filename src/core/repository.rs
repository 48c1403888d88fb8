use async_trait::async_trait;
use std::collections::HashMap;
use crate::core::library::LibraryResult;

#[async_trait]
pub trait Repository<Entity>: Sync + Send {
    // create an entity, the store assigns the identifier
    async fn create(&self, entity: &Entity) -> LibraryResult<Entity>;

    // updates an entity
    async fn update(&self, entity: &Entity) -> LibraryResult<Entity>;

    // get an entity
    async fn get(&self, id: i64) -> LibraryResult<Entity>;

    // delete an entity
    async fn delete(&self, id: i64) -> LibraryResult<usize>;

    // find all entities matching every predicate, an empty predicate returns everything
    async fn query(&self, predicate: &HashMap<String, String>) -> LibraryResult<Vec<Entity>>;
}
