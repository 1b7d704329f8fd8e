//! # frontdesk
//!
//! frontdesk is an MCP (Model Context Protocol) server that files customer
//! support tickets in Zendesk.
//!
//! It exposes a single `new_ticket` tool so AI assistants can open a ticket
//! on behalf of an end user from a conversation.
//!
//! ## Architecture
//!
//! - [`config`] - Configuration loading from environment variables
//! - [`error`] - Error types with token sanitization
//! - [`zendesk_client`] - HTTP client for the Zendesk Tickets API
//! - [`submitter`] - Per-call configuration, submission and result mapping
//! - [`server`] - MCP server implementation with tool routing
//! - [`models`] - Zendesk request and response types
//! - [`tools`] - Tool input parameter structs
//!
//! ## Configuration
//!
//! Three environment variables are read on every `new_ticket` call:
//!
//! - `ZENDESK_URL`: account URL or subdomain (`https://acme.zendesk.com`,
//!   `acme.zendesk.com` or `acme`)
//! - `ZENDESK_EMAIL`: email of the agent owning the API token
//! - `ZENDESK_TOKEN`: Zendesk API token
//!
//! Optional:
//! - `RUST_LOG`: Log level (e.g., `frontdesk=debug`)
//!
//! ## Delivery
//!
//! Each call sends exactly one request. There are no retries and no
//! deduplication: two identical calls create two tickets.
//!
//! ## Example
//!
//! ```ignore
//! use frontdesk::submitter::TicketSubmitter;
//! use frontdesk::tools::TicketRequest;
//!
//! async fn example() {
//!     let submitter = TicketSubmitter::from_env();
//!     let request = TicketRequest {
//!         requester_name: "Jane Doe".into(),
//!         requester_email: "jane@example.com".into(),
//!         subject: "Cannot log in".into(),
//!         description: "The password reset link has expired.".into(),
//!     };
//!
//!     match submitter.new_ticket(&request).await {
//!         Ok(text) => println!("{}", text),
//!         Err(text) => eprintln!("{}", text),
//!     }
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod error;
pub mod models;
pub mod server;
pub mod submitter;
pub mod tools;
pub mod zendesk_client;
