use crate::{
    di::{DependenciesInject, DependenciesInjectDeps},
    repository::ProductRepository,
};
use prometheus_client::registry::Registry;
use shared::{
    config::ConnectionPool,
    utils::{SystemMetrics, run_metrics_collector},
};
use std::{fmt, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
    pub registry: Arc<Mutex<Registry>>,
    pub system_metrics: Arc<SystemMetrics>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("di_container", &self.di_container)
            .field("system_metrics", &self.system_metrics)
            .finish()
    }
}

impl AppState {
    /// Wires the Postgres-backed repositories and starts the system metrics collector.
    pub fn new(pool: ConnectionPool) -> Self {
        let state = Self::with_repository(ProductRepository::new(pool));

        tokio::spawn(run_metrics_collector(state.system_metrics.clone()));

        state
    }

    pub fn with_repository(repository: ProductRepository) -> Self {
        let mut registry = Registry::default();
        let system_metrics = Arc::new(SystemMetrics::new());

        let deps = DependenciesInjectDeps { repository };
        let di_container = DependenciesInject::new(deps, &mut registry);

        system_metrics.register(&mut registry);

        Self {
            di_container,
            registry: Arc::new(Mutex::new(registry)),
            system_metrics,
        }
    }
}
