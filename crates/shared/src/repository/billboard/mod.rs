mod command;
mod query;

use self::command::BillboardCommandRepository;
use self::query::BillboardQueryRepository;

use crate::{
    abstract_trait::{DynBillboardCommandRepository, DynBillboardQueryRepository},
    config::ConnectionPool,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct BillboardRepository {
    pub query: DynBillboardQueryRepository,
    pub command: DynBillboardCommandRepository,
}

impl BillboardRepository {
    pub fn new(pool: ConnectionPool) -> Self {
        let query =
            Arc::new(BillboardQueryRepository::new(pool.clone())) as DynBillboardQueryRepository;

        let command = Arc::new(BillboardCommandRepository::new(pool.clone()))
            as DynBillboardCommandRepository;

        Self { query, command }
    }
}
