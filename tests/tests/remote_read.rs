use tests::{init_tracing, record, MemDriver, SentRequest, StubTransport};

use crosstitch::{risk, stmt, transport::Headers, Config, Service};
use crosstitch_core::schema::EntityId;

use pretty_assertions::assert_eq;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

struct Fixture {
    service: Service,
    partners: EntityId,
    read_log: Arc<Mutex<Vec<stmt::Select>>>,
    requests: Arc<Mutex<Vec<SentRequest>>>,
    fail: Arc<AtomicBool>,
}

fn fixture() -> Fixture {
    let schema = risk::schema().unwrap();
    let partners = schema.entity_by_name(risk::BUSINESS_PARTNERS).unwrap().id;

    let transport = StubTransport::new();
    transport.insert(record! {
        "BusinessPartner" => "BP01",
        "FirstName" => "Jane",
        "LastName" => "Doe",
        "BusinessPartnerFullName" => "Jane Doe",
    });
    transport.insert(record! {
        "BusinessPartner" => "BP02",
        "FirstName" => "John",
        "LastName" => "Smith",
        "BusinessPartnerFullName" => "John Smith",
    });
    transport.insert(record! {
        "BusinessPartner" => "BP03",
        "FirstName" => "",
        "LastName" => "Nameless",
        "BusinessPartnerFullName" => "",
    });

    let driver = MemDriver::new();
    let read_log = driver.read_log_handle();
    let requests = transport.requests_handle();
    let fail = transport.failure_switch();

    let service = risk::service(driver, transport, Config::new("test-key")).unwrap();

    Fixture {
        service,
        partners,
        read_log,
        requests,
        fail,
    }
}

#[tokio::test]
async fn direct_read_hides_nameless_partners() {
    init_tracing();
    let f = fixture();

    let rows = f
        .service
        .read(stmt::Select::new(f.partners, stmt::Filter::default()))
        .await
        .unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(
        rows[0].get("BusinessPartner"),
        Some(&stmt::Value::from("BP01"))
    );
    assert_eq!(
        rows[1].get("BusinessPartner"),
        Some(&stmt::Value::from("BP02"))
    );

    // Remote entities never touch the local store.
    assert!(f.read_log.lock().unwrap().is_empty());
}

#[tokio::test]
async fn credential_attached_to_remote_call() {
    init_tracing();
    let f = fixture();

    f.service
        .read(stmt::Select::new(f.partners, stmt::Filter::default()))
        .await
        .unwrap();

    let requests = f.requests.lock().unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].headers.get("apikey"), Some("test-key"));
}

#[tokio::test]
async fn inbound_headers_carried_through() {
    init_tracing();
    let f = fixture();

    let mut headers = Headers::new();
    headers.insert("accept-language", "en");

    f.service
        .read_with_headers(
            stmt::Select::new(f.partners, stmt::Filter::default()),
            headers,
        )
        .await
        .unwrap();

    let requests = f.requests.lock().unwrap();
    assert_eq!(requests[0].headers.get("accept-language"), Some("en"));
    assert_eq!(requests[0].headers.get("apikey"), Some("test-key"));
}

#[tokio::test]
async fn caller_filter_composes_with_validity_filter() {
    init_tracing();
    let f = fixture();

    let rows = f
        .service
        .read(stmt::Select::new(
            f.partners,
            stmt::Expr::eq(stmt::Expr::field("BusinessPartner"), "BP02"),
        ))
        .await
        .unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].get("FirstName"), Some(&stmt::Value::from("John")));
}

#[tokio::test]
async fn transport_failure_propagates() {
    init_tracing();
    let f = fixture();
    f.fail.store(true, Ordering::SeqCst);

    let err = f
        .service
        .read(stmt::Select::new(f.partners, stmt::Filter::default()))
        .await
        .unwrap_err();

    assert!(err.is_transport(), "actual={err:?}");
}
