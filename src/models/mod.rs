//! Data models for the Zendesk API.
//!
//! This module contains the request and response types exchanged with
//! the Zendesk Tickets API.

mod ticket;

pub use ticket::*;
