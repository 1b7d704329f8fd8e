//! Ticket submission for the `new_ticket` tool.
//!
//! `TicketSubmitter` reads configuration, builds a `ZendeskClient` and files
//! one ticket per call. Its `new_ticket` method is the tool boundary: every
//! failure comes back as an `Err(String)` for the agent to read, never as a
//! panic or a propagated error.

use crate::config::{Config, ConfigSource};
use crate::error::DeskError;
use crate::models::CreatedTicket;
use crate::tools::TicketRequest;
use crate::zendesk_client::ZendeskClient;

/// Files Zendesk tickets, reading configuration fresh on every call.
#[derive(Clone)]
pub struct TicketSubmitter {
    /// Where configuration comes from.
    source: ConfigSource,
    /// Replaces the host derived from `ZENDESK_URL`, when set.
    api_root: Option<String>,
}

impl TicketSubmitter {
    /// Creates a submitter with an explicit configuration source.
    pub fn new(source: ConfigSource) -> Self {
        Self {
            source,
            api_root: None,
        }
    }

    /// Creates a submitter that reads the process environment.
    pub fn from_env() -> Self {
        Self::new(ConfigSource::Environment)
    }

    /// Sends requests to `api_root` instead of `https://<subdomain>.zendesk.com`.
    #[must_use]
    pub fn with_api_root(mut self, api_root: impl Into<String>) -> Self {
        self.api_root = Some(api_root.into());
        self
    }

    fn client(&self, config: &Config) -> Result<ZendeskClient, DeskError> {
        match &self.api_root {
            Some(root) => ZendeskClient::with_api_root(config, root),
            None => ZendeskClient::new(config),
        }
    }

    /// Creates a ticket.
    ///
    /// Configuration is loaded before anything else, so a missing variable
    /// fails without touching the network.
    pub async fn submit(&self, request: &TicketRequest) -> Result<CreatedTicket, DeskError> {
        let config = self.source.load()?;
        self.submit_with(&config, request).await
    }

    async fn submit_with(
        &self,
        config: &Config,
        request: &TicketRequest,
    ) -> Result<CreatedTicket, DeskError> {
        let client = self.client(config)?;
        client.create_ticket(request).await
    }

    /// Creates a ticket and renders the outcome for the agent.
    ///
    /// `Ok` carries the success text with the new ticket id; `Err` carries a
    /// sanitized description of whatever went wrong. Configuration is read
    /// once per call and the same token is used for the request and for
    /// redaction.
    pub async fn new_ticket(&self, request: &TicketRequest) -> Result<String, String> {
        let config = match self.source.load() {
            Ok(config) => config,
            // No token was read, so there is nothing to redact.
            Err(e) => return Err(Self::report(&e, "")),
        };

        match self.submit_with(&config, request).await {
            Ok(ticket) => Ok(ticket.summary()),
            Err(e) => Err(Self::report(&e, &config.api_token)),
        }
    }

    /// Logs a failure and renders it with the API token stripped.
    fn report(error: &DeskError, api_token: &str) -> String {
        let sanitized = error.sanitized_display(api_token);
        tracing::error!(
            error = %sanitized,
            kind = ?error.kind(),
            "Failed to create ticket"
        );
        format!("Failed to create ticket: {}", sanitized)
    }
}
