mod command;
mod query;

use self::command::ColorCommandRepository;
use self::query::ColorQueryRepository;

use crate::{
    abstract_trait::{DynColorCommandRepository, DynColorQueryRepository},
    config::ConnectionPool,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct ColorRepository {
    pub query: DynColorQueryRepository,
    pub command: DynColorCommandRepository,
}

impl ColorRepository {
    pub fn new(pool: ConnectionPool) -> Self {
        let query = Arc::new(ColorQueryRepository::new(pool.clone())) as DynColorQueryRepository;

        let command =
            Arc::new(ColorCommandRepository::new(pool.clone())) as DynColorCommandRepository;

        Self { query, command }
    }
}
