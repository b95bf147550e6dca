//! Synchronous client for the FastBill invoicing API.
//!
//! # Overview
//! Every FastBill call is a JSON `POST` to one entry point; the `SERVICE`
//! field in the body picks the operation. This crate builds those envelopes,
//! sends them through a caller-supplied [`Transport`], repairs the one known
//! JSON malformation in replies, checks the reply against the operation's
//! success predicate and maps the result onto typed entities.
//!
//! # Design
//! - [`FastBillClient`] is immutable after construction; it holds the entry
//!   point URL, the basic-auth header and the transport.
//! - The request/response halves ([`FastBillClient::build_request`],
//!   [`FastBillClient::parse_response`]) are pure, so a host can run the
//!   round-trip itself.
//! - Mutations take `&mut` entities and write server-assigned fields back
//!   onto them; queries return entities in server order.
//!
//! ```no_run
//! use fastbill::{ClientConfig, Filter, MyFastBillClient, Props};
//!
//! # fn main() -> fastbill::Result<()> {
//! let client = MyFastBillClient::from_config(ClientConfig::from_env()?)?;
//! let customers = client.get_customers(&Filter::new().with("city", "Berlin"), &Props::new())?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod envelope;
pub mod error;
pub mod http;
mod resources;
pub mod response;
pub mod types;

pub use client::{
    Automatic, AutomaticClient, FastBillClient, MyFastBill, MyFastBillClient, Variant,
};
pub use config::ClientConfig;
pub use envelope::{Filter, Props, RequestEnvelope, ResponseEnvelope};
pub use error::{BadRequest, FastBillError, Result, TransportError, ValidationFailure};
pub use http::{HttpRequest, HttpResponse, Transport};
#[cfg(feature = "ureq")]
pub use http::UreqTransport;
pub use types::{
    Article, Contact, Customer, EmailRecipients, Expense, Invoice, InvoiceItem, Model, Project,
    Subscription, VatItem,
};
