//! MCP server implementation for frontdesk.
//!
//! This module defines the `DeskServer` struct that implements the MCP
//! `ServerHandler` trait, exposing Zendesk ticket creation as a tool.

use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ServerHandler,
};

use crate::submitter::TicketSubmitter;
use crate::tools::NewTicketInput;

/// The frontdesk MCP server.
#[derive(Clone)]
pub struct DeskServer {
    /// Files tickets; reads configuration on every call.
    submitter: TicketSubmitter,
    /// Tool router for MCP tool dispatch.
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl DeskServer {
    /// Creates a new server instance.
    ///
    /// # Arguments
    ///
    /// * `submitter` - The ticket submitter backing the `new_ticket` tool
    pub fn new(submitter: TicketSubmitter) -> Self {
        Self {
            submitter,
            tool_router: Self::tool_router(),
        }
    }

    /// A simple ping tool to verify the server is running.
    ///
    /// Returns "pong" on success.
    #[tool(description = "Test connectivity to the frontdesk MCP server. Returns 'pong' if the server is running correctly.")]
    fn ping(&self) -> String {
        tracing::debug!("ping tool called");
        "pong".to_string()
    }

    /// Create a Zendesk customer support ticket.
    ///
    /// Every call files a new ticket; repeating a call files a duplicate.
    #[tool(description = "Create Zendesk customer support tickets. Requires requester_name, requester_email, subject and description under 'values'. Returns the new ticket ID.")]
    async fn new_ticket(
        &self,
        Parameters(input): Parameters<NewTicketInput>,
    ) -> Result<String, String> {
        tracing::debug!(
            subject = %input.values.subject,
            requester = %input.values.requester_email,
            "new_ticket tool called"
        );

        if let Some(field) = input.values.first_empty_field() {
            return Err(format!("{} is required and cannot be empty.", field));
        }

        self.submitter.new_ticket(&input.values).await
    }
}

#[tool_handler]
impl ServerHandler for DeskServer {
    /// Returns server information for the MCP initialize handshake.
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "frontdesk files customer support tickets in Zendesk. \
                 Use new_ticket with the requester's name and email, a subject \
                 and a description. Each call creates a new ticket, so do not \
                 repeat a call that already succeeded. Start with 'ping' to \
                 verify connectivity."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigSource, EMAIL_VAR, TOKEN_VAR, URL_VAR};
    use crate::tools::TicketRequest;
    use std::collections::HashMap;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_vars() -> HashMap<String, String> {
        [
            (URL_VAR, "acme"),
            (EMAIL_VAR, "agent@acme.com"),
            (TOKEN_VAR, "test_token_12345"),
        ]
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
    }

    fn test_server(api_root: &str) -> DeskServer {
        let submitter = TicketSubmitter::new(ConfigSource::Vars(test_vars())).with_api_root(api_root);
        DeskServer::new(submitter)
    }

    fn test_input() -> NewTicketInput {
        NewTicketInput {
            values: TicketRequest {
                requester_name: " Test User via MCP ".to_string(),
                requester_email: "test-mcp@example.com".to_string(),
                subject: "Test Ticket from MCP".to_string(),
                description: "Created by calling the new_ticket tool.".to_string(),
            },
        }
    }

    #[test]
    fn test_server_creation() {
        let server = DeskServer::new(TicketSubmitter::from_env());
        let info = server.get_info();
        assert!(info.instructions.is_some());
    }

    #[test]
    fn test_server_info_has_tools_capability() {
        let server = DeskServer::new(TicketSubmitter::from_env());
        let info = server.get_info();
        assert!(info.capabilities.tools.is_some());
    }

    #[test]
    fn test_ping_tool_returns_pong() {
        let server = DeskServer::new(TicketSubmitter::from_env());
        assert_eq!(server.ping(), "pong");
    }

    #[tokio::test]
    async fn test_new_ticket_tool_success() {
        let mock = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v2/tickets.json"))
            .and(wiremock::matchers::body_partial_json(serde_json::json!({
                "ticket": { "requester": { "name": " Test User via MCP " } }
            })))
            .respond_with(
                ResponseTemplate::new(201)
                    .set_body_json(serde_json::json!({ "ticket": { "id": 1001 } })),
            )
            .expect(1)
            .mount(&mock)
            .await;

        let server = test_server(&mock.uri());
        let text = server.new_ticket(Parameters(test_input())).await.unwrap();
        assert!(text.contains("#1001"));
    }

    #[tokio::test]
    async fn test_new_ticket_tool_sends_description_verbatim() {
        let description = "    $ make deploy\n    error: exit 2\n\n";
        let mock = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v2/tickets.json"))
            .and(wiremock::matchers::body_json(serde_json::json!({
                "ticket": {
                    "subject": "Test Ticket from MCP",
                    "comment": { "body": description },
                    "requester": {
                        "name": " Test User via MCP ",
                        "email": "test-mcp@example.com"
                    }
                }
            })))
            .respond_with(
                ResponseTemplate::new(201)
                    .set_body_json(serde_json::json!({ "ticket": { "id": 1002 } })),
            )
            .expect(1)
            .mount(&mock)
            .await;

        let mut input = test_input();
        input.values.description = description.to_string();

        let server = test_server(&mock.uri());
        let text = server.new_ticket(Parameters(input)).await.unwrap();
        assert!(text.contains("#1002"));
    }

    #[tokio::test]
    async fn test_new_ticket_tool_rejects_blank_field() {
        let mock = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(201))
            .expect(0)
            .mount(&mock)
            .await;

        let mut input = test_input();
        input.values.description = "   ".to_string();

        let server = test_server(&mock.uri());
        let err = server.new_ticket(Parameters(input)).await.unwrap_err();
        assert_eq!(err, "description is required and cannot be empty.");
    }

    #[tokio::test]
    async fn test_new_ticket_tool_reports_remote_error() {
        let mock = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(422).set_body_string("Invalid email"))
            .mount(&mock)
            .await;

        let server = test_server(&mock.uri());
        let err = server.new_ticket(Parameters(test_input())).await.unwrap_err();
        assert!(err.contains("422"));
        assert!(err.contains("Invalid email"));
    }
}
