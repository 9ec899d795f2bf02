mod command;
mod query;

use self::command::StoreCommandRepository;
use self::query::StoreQueryRepository;

use crate::{
    abstract_trait::{DynStoreCommandRepository, DynStoreQueryRepository},
    config::ConnectionPool,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct StoreRepository {
    pub query: DynStoreQueryRepository,
    pub command: DynStoreCommandRepository,
}

impl StoreRepository {
    pub fn new(pool: ConnectionPool) -> Self {
        let query = Arc::new(StoreQueryRepository::new(pool.clone())) as DynStoreQueryRepository;

        let command =
            Arc::new(StoreCommandRepository::new(pool.clone())) as DynStoreCommandRepository;

        Self { query, command }
    }
}
