use crate::{
    abstract_trait::product::service::{DynProductCommandService, DynProductQueryService},
    repository::ProductRepository,
    service::{ProductCommandService, ProductQueryService},
};
use prometheus_client::registry::Registry;
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct DependenciesInject {
    pub product_query: DynProductQueryService,
    pub product_command: DynProductCommandService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("product_query", &"ProductQueryService")
            .field("product_command", &"ProductCommandService")
            .finish()
    }
}

#[derive(Clone)]
pub struct DependenciesInjectDeps {
    pub repository: ProductRepository,
}

impl DependenciesInject {
    pub fn new(deps: DependenciesInjectDeps, registry: &mut Registry) -> Self {
        let DependenciesInjectDeps { repository } = deps;

        let product_query = Arc::new(ProductQueryService::new(repository.query, registry))
            as DynProductQueryService;

        let product_command = Arc::new(ProductCommandService::new(repository.command, registry))
            as DynProductCommandService;

        Self {
            product_query,
            product_command,
        }
    }
}
