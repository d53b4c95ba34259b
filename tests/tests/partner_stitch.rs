use tests::{init_tracing, record, MemDriver, SentRequest, StubTransport};

use crosstitch::{risk, stmt, Config, Service};
use crosstitch_core::schema::EntityId;

use pretty_assertions::assert_eq;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

struct Fixture {
    service: Service,
    risks: EntityId,
    read_log: Arc<Mutex<Vec<stmt::Select>>>,
    requests: Arc<Mutex<Vec<SentRequest>>>,
    fail: Arc<AtomicBool>,
}

fn fixture() -> Fixture {
    let schema = risk::schema().unwrap();
    let risks = schema.entity_by_name(risk::RISKS).unwrap().id;

    let driver = MemDriver::new();
    driver.insert(
        risks,
        record! {
            "id" => 1_i64,
            "title" => "CPU overload",
            "prio_code" => "H",
            "impact" => 100_000_i64,
            "bp_id" => "BP01",
        },
    );
    driver.insert(
        risks,
        record! {
            "id" => 2_i64,
            "title" => "Stale data",
            "prio_code" => "M",
            "impact" => 90_000_i64,
            "bp_id" => "BP02",
        },
    );
    driver.insert(
        risks,
        record! {
            "id" => 3_i64,
            "title" => "Shared partner",
            "prio_code" => "L",
            "impact" => 50_000_i64,
            "bp_id" => "BP01",
        },
    );
    driver.insert(
        risks,
        record! {
            "id" => 4_i64,
            "title" => "Unassigned",
            "prio_code" => "H",
            "impact" => 200_000_i64,
            "bp_id" => stmt::Value::Null,
        },
    );
    driver.insert(
        risks,
        record! {
            "id" => 5_i64,
            "title" => "Dangling reference",
            "prio_code" => "M",
            "impact" => 10_000_i64,
            "bp_id" => "BP09",
        },
    );
    driver.insert(
        risks,
        record! {
            "id" => 6_i64,
            "title" => "Nameless partner",
            "prio_code" => "L",
            "impact" => 10_000_i64,
            "bp_id" => "BP03",
        },
    );

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
    // The sandbox-style junk record; the mandatory read filter must hide it.
    transport.insert(record! {
        "BusinessPartner" => "BP03",
        "FirstName" => "",
        "LastName" => "Nameless",
        "BusinessPartnerFullName" => "",
    });

    let read_log = driver.read_log_handle();
    let requests = transport.requests_handle();
    let fail = transport.failure_switch();

    let service = risk::service(driver, transport, Config::new("test-key")).unwrap();

    Fixture {
        service,
        risks,
        read_log,
        requests,
        fail,
    }
}

fn expand_select(risks: EntityId, filter: impl Into<stmt::Filter>) -> stmt::Select {
    let mut select = stmt::Select::new(risks, filter);
    select.returning = stmt::Returning::columns([
        stmt::Column::field("id"),
        stmt::Column::field("title"),
        stmt::Column::field("prio_code"),
        stmt::Column::field("impact"),
        stmt::Column::expand("businessPartner"),
    ]);
    select
}

#[tokio::test]
async fn expand_attaches_partner_and_computed_fields() {
    init_tracing();
    let f = fixture();

    let rows = f
        .service
        .read(expand_select(
            f.risks,
            stmt::Expr::eq(stmt::Expr::field("id"), 1_i64),
        ))
        .await
        .unwrap();

    assert_eq!(rows.len(), 1);
    let row = &rows[0];

    let partner = row
        .get("businessPartner")
        .and_then(stmt::Value::as_record)
        .expect("partner record attached");
    assert_eq!(partner.get("FirstName"), Some(&stmt::Value::from("Jane")));
    assert_eq!(partner.get("LastName"), Some(&stmt::Value::from("Doe")));

    assert_eq!(row.get("criticality"), Some(&stmt::Value::I64(1)));
    assert_eq!(row.get("priorityCriticality"), Some(&stmt::Value::I64(1)));
}

#[tokio::test]
async fn one_batched_lookup_for_many_rows() {
    init_tracing();
    let f = fixture();

    let rows = f
        .service
        .read(expand_select(f.risks, stmt::Filter::default()))
        .await
        .unwrap();
    assert_eq!(rows.len(), 6);

    let requests = f.requests.lock().unwrap();
    assert_eq!(requests.len(), 1, "expected exactly one remote call");

    let sent = &requests[0];
    assert_eq!(sent.headers.get("apikey"), Some("test-key"));

    // The lookup batches the distinct non-null keys and carries the
    // mandatory validity filter.
    let Some(stmt::Expr::And(and)) = sent.stmt.filter.expr() else {
        panic!("expected And filter; actual={:#?}", sent.stmt.filter.expr());
    };
    let stmt::Expr::InList(in_list) = &and.operands[0] else {
        panic!("expected in-list; actual={:#?}", and.operands[0]);
    };
    assert_eq!(
        in_list.list,
        vec![
            stmt::Expr::value("BP01"),
            stmt::Expr::value("BP02"),
            stmt::Expr::value("BP09"),
            stmt::Expr::value("BP03"),
        ]
    );
    assert_eq!(and.operands.len(), 3);
}

#[tokio::test]
async fn unmatched_key_stitched_as_null() {
    init_tracing();
    let f = fixture();

    let rows = f
        .service
        .read(expand_select(
            f.risks,
            stmt::Expr::eq(stmt::Expr::field("id"), 5_i64),
        ))
        .await
        .unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].get("businessPartner"), Some(&stmt::Value::Null));
}

#[tokio::test]
async fn null_foreign_key_skips_lookup() {
    init_tracing();
    let f = fixture();

    let rows = f
        .service
        .read(expand_select(
            f.risks,
            stmt::Expr::eq(stmt::Expr::field("id"), 4_i64),
        ))
        .await
        .unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].get("businessPartner"), Some(&stmt::Value::Null));

    // No keys to resolve, so the remote system is never contacted.
    assert!(f.requests.lock().unwrap().is_empty());
}

#[tokio::test]
async fn empty_primary_result_skips_lookup() {
    init_tracing();
    let f = fixture();

    let rows = f
        .service
        .read(expand_select(
            f.risks,
            stmt::Expr::eq(stmt::Expr::field("id"), 999_i64),
        ))
        .await
        .unwrap();

    assert!(rows.is_empty());
    assert!(f.requests.lock().unwrap().is_empty());
}

#[tokio::test]
async fn validity_filter_excludes_nameless_partner() {
    init_tracing();
    let f = fixture();

    let rows = f
        .service
        .read(expand_select(
            f.risks,
            stmt::Expr::eq(stmt::Expr::field("id"), 6_i64),
        ))
        .await
        .unwrap();

    // BP03 exists remotely but fails the validity filter; the row reads as
    // having no partner.
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].get("businessPartner"), Some(&stmt::Value::Null));
}

#[tokio::test]
async fn transport_failure_fails_the_read() {
    init_tracing();
    let f = fixture();
    f.fail.store(true, Ordering::SeqCst);

    let err = f
        .service
        .read(expand_select(f.risks, stmt::Filter::default()))
        .await
        .unwrap_err();

    assert!(err.is_transport(), "actual={err:?}");
}

#[tokio::test]
async fn foreign_key_column_restored_in_projection() {
    init_tracing();
    let f = fixture();

    f.service
        .read(expand_select(
            f.risks,
            stmt::Expr::eq(stmt::Expr::field("id"), 1_i64),
        ))
        .await
        .unwrap();

    let log = f.read_log.lock().unwrap();
    assert_eq!(log.len(), 1);

    let columns = log[0].returning.as_columns().expect("explicit projection");
    assert!(
        columns.iter().all(|column| !column.is_expand()),
        "expansion reached the local store; columns={columns:#?}"
    );
    assert!(
        columns
            .iter()
            .any(|column| column.as_field() == Some("bp_id")),
        "foreign-key column missing from projection; columns={columns:#?}"
    );
}
