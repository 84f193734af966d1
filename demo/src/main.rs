use anyhow::Result;
use ddd_events::customer::handler::{
    SendConsoleLogAddressHandler, SendConsoleLogOneHandler, SendConsoleLogTwoHandler,
};
use ddd_events::customer::{Address, Customer, CustomerChangeAddress, CustomerCreated};
use ddd_events::entity::Entity;
use ddd_events::eventing::{DispatcherConfig, EventDispatcher};
use ddd_events::product::handler::SendEmailWhenProductIsCreatedHandler;
use ddd_events::product::{Product, ProductCreated};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 可选：DISPATCHER_CONFIG='{"failure_policy":"isolate"}'
    let config = match std::env::var("DISPATCHER_CONFIG") {
        Ok(raw) => serde_json::from_str::<DispatcherConfig>(&raw)?,
        Err(_) => DispatcherConfig::default(),
    };
    tracing::info!(?config, "dispatcher config");

    let mut dispatcher = EventDispatcher::with_config(config);
    dispatcher.register_for::<CustomerCreated>(Arc::new(SendConsoleLogOneHandler));
    dispatcher.register_for::<CustomerCreated>(Arc::new(SendConsoleLogTwoHandler));
    dispatcher.register_for::<CustomerChangeAddress>(Arc::new(SendConsoleLogAddressHandler));
    dispatcher.register_for::<ProductCreated>(Arc::new(SendEmailWhenProductIsCreatedHandler));

    let mut customer = Customer::new("1", "Customer 1")?;
    customer.change_address(Address::new("Street 1", 123, "13330-250", "São Paulo")?)?;
    customer.activate()?;
    customer.take_events().publish(&dispatcher)?;

    let mut product = Product::new("p1", "Product 1", "Product 1 description", 10.0)?;
    product.take_events().publish(&dispatcher)?;

    tracing::info!(registry = ?dispatcher, "done");
    Ok(())
}
