//! MCP tool inputs for frontdesk.
//!
//! This module contains the parameter types for the MCP tools that
//! expose Zendesk operations.

mod inputs;

pub use inputs::*;
