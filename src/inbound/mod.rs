//! Inbound adapters: everything that calls into the service.

pub mod http;
