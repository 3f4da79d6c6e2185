use crate::{
    abstract_trait::product::{
        repository::DynProductQueryRepository, service::ProductQueryServiceTrait,
    },
    domain::response::product::ProductView,
};
use async_trait::async_trait;
use opentelemetry::{
    Context, KeyValue,
    global::{self, BoxedTracer},
    trace::{Span, SpanKind, TraceContextExt, Tracer},
};
use prometheus_client::registry::Registry;
use shared::{
    errors::ServiceError,
    utils::{Method, Metrics, Status as StatusUtils, TracingContext},
};
use tokio::time::Instant;
use tracing::{error, info};

#[derive(Clone)]
pub struct ProductQueryService {
    pub query: DynProductQueryRepository,
    pub metrics: Metrics,
}

impl ProductQueryService {
    pub fn new(query: DynProductQueryRepository, registry: &mut Registry) -> Self {
        let metrics = Metrics::new();
        metrics.register(registry, "product_query_service", "ProductQueryService");

        Self { query, metrics }
    }

    fn get_tracer(&self) -> BoxedTracer {
        global::tracer("product-query-service")
    }

    fn start_tracing(&self, operation_name: &str, attributes: Vec<KeyValue>) -> TracingContext {
        let start_time = Instant::now();
        let tracer = self.get_tracer();
        let mut span = tracer
            .span_builder(operation_name.to_string())
            .with_kind(SpanKind::Server)
            .with_attributes(attributes)
            .start(&tracer);

        info!("Starting operation: {operation_name}");

        span.add_event(
            "Operation started",
            vec![KeyValue::new("operation", operation_name.to_string())],
        );

        let cx = Context::current_with_span(span);
        TracingContext { cx, start_time }
    }

    fn complete_tracing_success(&self, tracing_ctx: &TracingContext, message: &str) {
        self.complete_tracing_internal(tracing_ctx, true, message);
    }

    fn complete_tracing_error(&self, tracing_ctx: &TracingContext, error_message: &str) {
        self.complete_tracing_internal(tracing_ctx, false, error_message);
    }

    fn complete_tracing_internal(&self, tracing_ctx: &TracingContext, is_success: bool, message: &str) {
        let status_str = if is_success { "SUCCESS" } else { "ERROR" };
        let status = if is_success {
            StatusUtils::Success
        } else {
            StatusUtils::Error
        };
        let elapsed = tracing_ctx.start_time.elapsed().as_secs_f64();

        tracing_ctx.cx.span().add_event(
            "Operation completed",
            vec![
                KeyValue::new("status", status_str),
                KeyValue::new("duration_secs", elapsed.to_string()),
                KeyValue::new("message", message.to_string()),
            ],
        );

        if is_success {
            info!("✅ Operation completed successfully: {message}");
        } else {
            error!("❌ Operation failed: {message}");
        }

        self.metrics.record(Method::Get, status, elapsed);

        tracing_ctx.cx.span().end();
    }
}

#[async_trait]
impl ProductQueryServiceTrait for ProductQueryService {
    async fn find_all(&self) -> Result<Vec<ProductView>, ServiceError> {
        info!("🔍 Finding all products");

        let tracing_ctx = self.start_tracing(
            "FindAllProducts",
            vec![KeyValue::new("component", "product")],
        );

        let products = match self.query.find_all().await {
            Ok(products) => products,
            Err(e) => {
                self.complete_tracing_error(&tracing_ctx, "Failed to fetch products");
                return Err(ServiceError::Repo(e));
            }
        };

        let views: Vec<ProductView> = products.into_iter().map(ProductView::from).collect();

        self.complete_tracing_success(
            &tracing_ctx,
            &format!("Fetched {} products", views.len()),
        );

        Ok(views)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<ProductView>, ServiceError> {
        info!("🆔 Finding product by ID: {id}");

        let tracing_ctx = self.start_tracing(
            "FindProductById",
            vec![
                KeyValue::new("component", "product"),
                KeyValue::new("product.id", id.to_string()),
            ],
        );

        match self.query.find_by_id(id).await {
            Ok(Some(product)) => {
                self.complete_tracing_success(&tracing_ctx, "Product found");
                Ok(Some(ProductView::from(product)))
            }
            Ok(None) => {
                info!("ℹ️ Product with ID {id} not found");
                self.complete_tracing_success(&tracing_ctx, "Product not found");
                Ok(None)
            }
            Err(e) => {
                self.complete_tracing_error(&tracing_ctx, &format!("Failed to fetch product {id}"));
                Err(ServiceError::Repo(e))
            }
        }
    }
}
