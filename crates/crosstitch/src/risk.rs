//! The Risk / Business Partner catalog and service assembly.
//!
//! Risks live in the local store; Business Partners are reachable only
//! through the remote API and cannot participate in native joins. The
//! service built here lets callers expand `businessPartner` on a Risks read
//! anyway, resolved behind the scenes by the remote-expand stage.

use crate::{Config, Derive, Service};

use crosstitch_core::{
    driver::Driver,
    schema::{EntityBuilder, Schema},
    stmt::{Expr, Type},
    transport::Transport,
    Result,
};

pub const RISKS: &str = "Risks";
pub const BUSINESS_PARTNERS: &str = "BusinessPartners";

/// The two-system entity catalog.
pub fn schema() -> Result<Schema> {
    Schema::builder()
        .entity(
            EntityBuilder::new(RISKS)
                .field("id", Type::I64)
                .field("title", Type::String)
                .field("prio_code", Type::String)
                .field("impact", Type::I64)
                .field("bp_id", Type::String)
                .belongs_to("businessPartner", BUSINESS_PARTNERS, "bp_id", "BusinessPartner")
                .virtual_field("criticality", Type::I64)
                .virtual_field("priorityCriticality", Type::I64),
        )
        .entity(
            EntityBuilder::new(BUSINESS_PARTNERS)
                .remote()
                .collection("A_BusinessPartner")
                .field("BusinessPartner", Type::String)
                .field("FirstName", Type::String)
                .field("LastName", Type::String)
                .field("BusinessPartnerFullName", Type::String),
        )
        .build()
}

/// The sandbox returns many business partners with empty names; nothing
/// that reaches a caller may include them.
pub fn validity_filter() -> Expr {
    Expr::and(
        Expr::ne(Expr::field("FirstName"), ""),
        Expr::ne(Expr::field("LastName"), ""),
    )
}

/// Assembles the risk service: the Risks chain derives computed fields and
/// resolves the cross-system expansion; the BusinessPartners chain forwards
/// straight to the remote collection.
pub fn service(driver: impl Driver, transport: impl Transport, config: Config) -> Result<Service> {
    let mut builder = Service::builder();
    builder
        .schema(schema()?)
        .driver(driver)
        .transport(transport)
        .config(config)
        .read_filter(BUSINESS_PARTNERS, validity_filter())
        .handler(RISKS, Derive);
    builder.build()
}
