use crate::{
    abstract_trait::product::{
        repository::DynProductCommandRepository, service::ProductCommandServiceTrait,
    },
    domain::{requests::product::ProductCreateInput, response::product::ProductView},
    model::product::Product as ProductModel,
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
pub struct ProductCommandService {
    pub command: DynProductCommandRepository,
    pub metrics: Metrics,
}

impl ProductCommandService {
    pub fn new(command: DynProductCommandRepository, registry: &mut Registry) -> Self {
        let metrics = Metrics::new();
        metrics.register(registry, "product_command_service", "ProductCommandService");

        Self { command, metrics }
    }

    fn get_tracer(&self) -> BoxedTracer {
        global::tracer("product-command-service")
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

    fn complete_tracing_success(&self, tracing_ctx: &TracingContext, method: Method, message: &str) {
        self.complete_tracing_internal(tracing_ctx, method, true, message);
    }

    fn complete_tracing_error(
        &self,
        tracing_ctx: &TracingContext,
        method: Method,
        error_message: &str,
    ) {
        self.complete_tracing_internal(tracing_ctx, method, false, error_message);
    }

    fn complete_tracing_internal(
        &self,
        tracing_ctx: &TracingContext,
        method: Method,
        is_success: bool,
        message: &str,
    ) {
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

        self.metrics.record(method, status, elapsed);

        tracing_ctx.cx.span().end();
    }
}

#[async_trait]
impl ProductCommandServiceTrait for ProductCommandService {
    async fn create_product(&self, req: &ProductCreateInput) -> Result<ProductView, ServiceError> {
        info!("🏗️ Creating new product: {}", req.name);

        let tracing_ctx = self.start_tracing(
            "CreateProduct",
            vec![
                KeyValue::new("component", "product"),
                KeyValue::new("product.name", req.name.clone()),
            ],
        );

        let model = ProductModel::from(req.clone());

        let product = match self.command.create_product(&model).await {
            Ok(product) => product,
            Err(e) => {
                self.complete_tracing_error(
                    &tracing_ctx,
                    Method::Post,
                    &format!("Failed to create product {}", req.name),
                );
                return Err(ServiceError::Repo(e));
            }
        };

        self.complete_tracing_success(
            &tracing_ctx,
            Method::Post,
            &format!("Product created with ID {}", product.id),
        );

        Ok(ProductView::from(product))
    }

    async fn update_product(&self, req: &ProductView) -> Result<Option<ProductView>, ServiceError> {
        info!("🔄 Updating product ID: {}", req.id);

        let tracing_ctx = self.start_tracing(
            "UpdateProduct",
            vec![
                KeyValue::new("component", "product"),
                KeyValue::new("product.id", req.id.to_string()),
            ],
        );

        let model = ProductModel::from(req.clone());

        match self.command.update_product(&model).await {
            Ok(Some(product)) => {
                self.complete_tracing_success(&tracing_ctx, Method::Put, "Product updated");
                Ok(Some(ProductView::from(product)))
            }
            Ok(None) => {
                self.complete_tracing_success(&tracing_ctx, Method::Put, "Product not found");
                Ok(None)
            }
            Err(e) => {
                self.complete_tracing_error(
                    &tracing_ctx,
                    Method::Put,
                    &format!("Failed to update product {}", req.id),
                );
                Err(ServiceError::Repo(e))
            }
        }
    }

    async fn delete_product(&self, id: i32) -> Result<bool, ServiceError> {
        info!("🗑️ Deleting product ID: {id}");

        let tracing_ctx = self.start_tracing(
            "DeleteProduct",
            vec![
                KeyValue::new("component", "product"),
                KeyValue::new("product.id", id.to_string()),
            ],
        );

        match self.command.delete_product(id).await {
            Ok(deleted) => {
                let message = if deleted {
                    "Product deleted"
                } else {
                    "Product not found"
                };
                self.complete_tracing_success(&tracing_ctx, Method::Delete, message);
                Ok(deleted)
            }
            Err(e) => {
                self.complete_tracing_error(
                    &tracing_ctx,
                    Method::Delete,
                    &format!("Failed to delete product {id}"),
                );
                Err(ServiceError::Repo(e))
            }
        }
    }
}
