//! Outbound adapters: everything the service calls into.

pub mod persistence;
