use anyhow::Result as AnyResult;
use ddd_events::customer::handler::{
    SendConsoleLogAddressHandler, SendConsoleLogOneHandler, SendConsoleLogTwoHandler,
};
use ddd_events::customer::{Address, Customer, CustomerCreated};
use ddd_events::domain_event::Event;
use ddd_events::entity::Entity;
use ddd_events::eventing::{EventDispatcher, EventHandler};
use ddd_events::product::handler::SendEmailWhenProductIsCreatedHandler;
use ddd_events::product::{Product, ProductCreated};
use serde_json::json;
use std::sync::{Arc, Mutex};

type CallLog = Arc<Mutex<Vec<(String, Event)>>>;

/// 记录每次调用（处理器名 + 事件）的监视处理器
struct Spy {
    name: String,
    calls: CallLog,
}

impl Spy {
    fn new(name: &str, calls: &CallLog) -> Arc<Self> {
        Arc::new(Self {
            name: name.to_string(),
            calls: calls.clone(),
        })
    }
}

impl EventHandler for Spy {
    fn handler_name(&self) -> &str {
        &self.name
    }

    fn handle(&self, event: &Event) -> AnyResult<()> {
        self.calls
            .lock()
            .unwrap()
            .push((self.name.clone(), event.clone()));
        Ok(())
    }
}

fn names(calls: &CallLog) -> Vec<String> {
    calls.lock().unwrap().iter().map(|(n, _)| n.clone()).collect()
}

#[test]
fn register_appends_handler_to_event_type() {
    let mut dispatcher = EventDispatcher::new();
    let handler: Arc<dyn EventHandler> = Arc::new(SendEmailWhenProductIsCreatedHandler);

    dispatcher.register("ProductCreatedEvent", handler.clone());

    let handlers = dispatcher.handlers_for("ProductCreatedEvent").unwrap();
    assert_eq!(handlers.len(), 1);
    assert!(Arc::ptr_eq(&handlers[0], &handler));
    assert!(dispatcher.event_handlers().contains_key("ProductCreatedEvent"));
}

#[test]
fn register_same_handler_twice_invokes_twice() {
    let calls = CallLog::default();
    let spy: Arc<dyn EventHandler> = Spy::new("a", &calls);
    let mut dispatcher = EventDispatcher::new();

    dispatcher.register("Evt", spy.clone());
    dispatcher.register("Evt", spy.clone());
    dispatcher.notify(&Event::new("Evt", json!({}))).unwrap();

    assert_eq!(dispatcher.handlers_for("Evt").unwrap().len(), 2);
    assert_eq!(names(&calls), vec!["a", "a"]);
}

#[test]
fn unregister_keeps_empty_entry() {
    let mut dispatcher = EventDispatcher::new();
    let handler: Arc<dyn EventHandler> = Arc::new(SendEmailWhenProductIsCreatedHandler);
    dispatcher.register("ProductCreatedEvent", handler.clone());

    dispatcher.unregister("ProductCreatedEvent", &handler);

    let handlers = dispatcher.handlers_for("ProductCreatedEvent");
    assert!(handlers.is_some());
    assert!(handlers.unwrap().is_empty());
}

#[test]
fn unregister_unknown_type_or_handler_is_noop() {
    let calls = CallLog::default();
    let registered: Arc<dyn EventHandler> = Spy::new("a", &calls);
    let stranger: Arc<dyn EventHandler> = Spy::new("a", &calls);
    let mut dispatcher = EventDispatcher::new();
    dispatcher.register("Evt", registered.clone());

    dispatcher.unregister("Missing", &registered);
    dispatcher.unregister("Evt", &stranger);

    assert!(dispatcher.handlers_for("Missing").is_none());
    assert_eq!(dispatcher.handlers_for("Evt").unwrap().len(), 1);
}

#[test]
fn unregister_all_removes_every_entry() {
    let mut dispatcher = EventDispatcher::new();
    let handler: Arc<dyn EventHandler> = Arc::new(SendEmailWhenProductIsCreatedHandler);
    dispatcher.register("ProductCreatedEvent", handler.clone());
    dispatcher.register("CustomerCreatedEvent", Arc::new(SendConsoleLogOneHandler));
    dispatcher.unregister("ProductCreatedEvent", &handler);

    dispatcher.unregister_all();

    assert!(dispatcher.handlers_for("ProductCreatedEvent").is_none());
    assert!(dispatcher.handlers_for("CustomerCreatedEvent").is_none());
    assert!(dispatcher.event_handlers().is_empty());
}

#[test]
fn notify_calls_handlers_in_registration_order() {
    let calls = CallLog::default();
    let mut dispatcher = EventDispatcher::new();
    dispatcher.register("CustomerCreatedEvent", Spy::new("log1", &calls));
    dispatcher.register("CustomerCreatedEvent", Spy::new("log2", &calls));
    dispatcher.register("ProductCreatedEvent", Spy::new("other", &calls));

    let event = Event::from_payload(&CustomerCreated {
        id: "1".into(),
        name: "Customer name".into(),
    })
    .unwrap();
    dispatcher.notify(&event).unwrap();

    assert_eq!(names(&calls), vec!["log1", "log2"]);
}

#[test]
fn notify_passes_exact_payload() {
    let calls = CallLog::default();
    let mut dispatcher = EventDispatcher::new();
    dispatcher.register_for::<ProductCreated>(Spy::new("email", &calls));

    let event = Event::from_payload(&ProductCreated {
        name: "Product 1".into(),
        description: "Product 1 description".into(),
        price: 10.0,
    })
    .unwrap();
    dispatcher.notify(&event).unwrap();

    let calls = calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    let received = &calls[0].1;
    assert_eq!(received, &event);
    assert_eq!(
        received.payload(),
        &json!({
            "name": "Product 1",
            "description": "Product 1 description",
            "price": 10.0,
        })
    );
}

#[test]
fn notify_unregistered_type_is_noop() {
    let calls = CallLog::default();
    let mut dispatcher = EventDispatcher::new();
    dispatcher.register("ProductCreatedEvent", Spy::new("email", &calls));

    dispatcher
        .notify(&Event::new("NeverRegistered", json!({})))
        .unwrap();

    assert!(calls.lock().unwrap().is_empty());
}

#[test]
fn notify_after_unregister_all_invokes_nothing() {
    let calls = CallLog::default();
    let mut dispatcher = EventDispatcher::new();
    dispatcher.register("Evt", Spy::new("a", &calls));
    dispatcher.unregister_all();

    dispatcher.notify(&Event::new("Evt", json!({}))).unwrap();

    assert!(calls.lock().unwrap().is_empty());
}

#[test]
fn log_handlers_fan_out_on_name_only_customer_payload() {
    let calls = CallLog::default();
    let mut dispatcher = EventDispatcher::new();
    dispatcher.register("CustomerCreatedEvent", Arc::new(SendConsoleLogOneHandler));
    dispatcher.register("CustomerCreatedEvent", Arc::new(SendConsoleLogTwoHandler));
    dispatcher.register("CustomerCreatedEvent", Spy::new("after", &calls));

    let event = Event::new("CustomerCreatedEvent", json!({ "name": "Customer name" }));
    dispatcher.notify(&event).unwrap();

    assert_eq!(names(&calls), vec!["after"]);
}

#[test]
fn email_handler_accepts_partial_product_payload() {
    let calls = CallLog::default();
    let mut dispatcher = EventDispatcher::new();
    dispatcher.register_for::<ProductCreated>(Arc::new(SendEmailWhenProductIsCreatedHandler));
    dispatcher.register_for::<ProductCreated>(Spy::new("after", &calls));

    dispatcher
        .notify(&Event::new("ProductCreatedEvent", json!({ "name": "Product 1" })))
        .unwrap();

    assert_eq!(names(&calls), vec!["after"]);
}

#[test]
fn customer_lifecycle_publishes_domain_events() {
    let calls = CallLog::default();
    let mut dispatcher = EventDispatcher::new();
    dispatcher.register("CustomerCreatedEvent", Spy::new("created", &calls));
    dispatcher.register("CustomerChangeAddressEvent", Spy::new("address", &calls));
    dispatcher.register("CustomerChangeAddressEvent", Arc::new(SendConsoleLogAddressHandler));

    let mut customer = Customer::new("1", "Customer 1").unwrap();
    customer
        .change_address(Address::new("Street 1", 123, "13330-250", "São Paulo").unwrap())
        .unwrap();
    customer.take_events().publish(&dispatcher).unwrap();

    assert_eq!(names(&calls), vec!["created", "address"]);
    let calls = calls.lock().unwrap();
    assert_eq!(calls[1].1.field("id"), Some(&json!("1")));
    assert_eq!(calls[1].1.field("name"), Some(&json!("Customer 1")));
    assert_eq!(
        calls[1].1.field("address"),
        Some(&json!({
            "street": "Street 1",
            "number": 123,
            "zip": "13330-250",
            "city": "São Paulo",
        }))
    );
}

#[test]
fn product_creation_reaches_email_handler() {
    let mut dispatcher = EventDispatcher::new();
    dispatcher.register_for::<ProductCreated>(Arc::new(SendEmailWhenProductIsCreatedHandler));

    let mut product = Product::new("p1", "Product 1", "Product 1 description", 10.0).unwrap();

    product.take_events().publish(&dispatcher).unwrap();
}
