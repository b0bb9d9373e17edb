//! Inbound adapters translating external requests into registry calls.

pub mod http;
