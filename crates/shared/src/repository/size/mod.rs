mod command;
mod query;

use self::command::SizeCommandRepository;
use self::query::SizeQueryRepository;

use crate::{
    abstract_trait::{DynSizeCommandRepository, DynSizeQueryRepository},
    config::ConnectionPool,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct SizeRepository {
    pub query: DynSizeQueryRepository,
    pub command: DynSizeCommandRepository,
}

impl SizeRepository {
    pub fn new(pool: ConnectionPool) -> Self {
        let query = Arc::new(SizeQueryRepository::new(pool.clone())) as DynSizeQueryRepository;

        let command =
            Arc::new(SizeCommandRepository::new(pool.clone())) as DynSizeCommandRepository;

        Self { query, command }
    }
}
