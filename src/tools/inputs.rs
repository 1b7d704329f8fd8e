//! Tool input parameter structs for MCP tools.
//!
//! This module defines the input types for each MCP tool, with
//! JSON Schema derivation for MCP tool discovery.
//!
//! Ticket text is forwarded to Zendesk exactly as given; whitespace is
//! only ignored when checking that a field is present.

use rmcp::schemars::{self, JsonSchema};
use serde::Deserialize;

/// The four fields of a new support ticket.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct TicketRequest {
    /// Full name of the person the ticket is filed for.
    pub requester_name: String,

    /// Email address of the person the ticket is filed for.
    pub requester_email: String,

    /// One-line summary of the issue.
    pub subject: String,

    /// Full description of the issue. Becomes the ticket's first comment.
    pub description: String,
}

impl TicketRequest {
    /// Returns the name of the first field that is empty or whitespace only.
    pub fn first_empty_field(&self) -> Option<&'static str> {
        [
            ("requester_name", &self.requester_name),
            ("requester_email", &self.requester_email),
            ("subject", &self.subject),
            ("description", &self.description),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
    }
}

/// Input parameters for the new_ticket tool.
///
/// The ticket fields are nested under `values`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct NewTicketInput {
    /// Ticket fields: requester_name, requester_email, subject, description.
    pub values: TicketRequest,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TicketRequest {
        TicketRequest {
            requester_name: "  Test User ".to_string(),
            requester_email: "test@example.com\n".to_string(),
            subject: " Cannot log in".to_string(),
            description: "Password reset link expired.  ".to_string(),
        }
    }

    #[test]
    fn test_first_empty_field() {
        assert_eq!(sample().first_empty_field(), None);

        let mut input = sample();
        input.subject = "   ".to_string();
        assert_eq!(input.first_empty_field(), Some("subject"));
    }

    #[test]
    fn test_first_empty_field_does_not_alter_values() {
        let input = sample();
        assert_eq!(input.first_empty_field(), None);
        assert_eq!(input.requester_name, "  Test User ");
        assert_eq!(input.description, "Password reset link expired.  ");
    }

    #[test]
    fn test_new_ticket_input_deserialize() {
        let json = r#"{
            "values": {
                "requester_name": "Test User",
                "requester_email": "test@example.com",
                "subject": "Test Ticket",
                "description": "Created from a test."
            }
        }"#;
        let input: NewTicketInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.values.requester_name, "Test User");
        assert_eq!(input.values.subject, "Test Ticket");
    }

    #[test]
    fn test_new_ticket_input_requires_all_fields() {
        let json = r#"{
            "values": {
                "requester_name": "Test User",
                "subject": "Test Ticket",
                "description": "No email given."
            }
        }"#;
        let err = serde_json::from_str::<NewTicketInput>(json).unwrap_err();
        assert!(err.to_string().contains("requester_email"));
    }

    #[test]
    fn test_new_ticket_input_schema_lists_required_fields() {
        let schema = serde_json::to_value(schemars::schema_for!(NewTicketInput)).unwrap();
        let text = schema.to_string();
        for field in ["requester_name", "requester_email", "subject", "description"] {
            assert!(text.contains(field), "schema missing {}", field);
        }
    }
}
