//! One method per FastBill service.
//!
//! Mutations send the entity as `DATA`, require `STATUS == "success"` and
//! write server-assigned fields back onto the caller's entity. Queries send
//! `FILTER` plus optional props and map the named collection in server
//! order.

mod articles;
mod contacts;
mod customers;
mod expenses;
mod invoices;
mod projects;
mod subscriptions;
