mod command;
mod query;

pub use self::command::ProductCommandRepository;
pub use self::query::ProductQueryRepository;

use crate::abstract_trait::product::repository::{
    DynProductCommandRepository, DynProductQueryRepository,
};
use shared::config::ConnectionPool;
use std::sync::Arc;

/// Both halves of the `products` storage access, sharing one pool.
#[derive(Clone)]
pub struct ProductRepository {
    pub query: DynProductQueryRepository,
    pub command: DynProductCommandRepository,
}

impl ProductRepository {
    pub fn new(pool: ConnectionPool) -> Self {
        let query =
            Arc::new(ProductQueryRepository::new(pool.clone())) as DynProductQueryRepository;

        let command = Arc::new(ProductCommandRepository::new(pool)) as DynProductCommandRepository;

        Self { query, command }
    }
}
