use std::sync::Arc;

use customer_api::config::ApiConfig;
use customer_api_customers::CustomerService;
use customer_api_infra::InMemoryCustomerService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    customer_api_observability::init();

    let config = ApiConfig::from_env()?;

    // No persistent backend yet; customers live for the lifetime of the process.
    let service: Arc<dyn CustomerService> = Arc::new(InMemoryCustomerService::new());
    let app = customer_api::app::build_app(service);

    customer_api::server::serve(&config, app).await
}
