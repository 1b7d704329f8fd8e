//! HTTP client for the Zendesk Tickets API.
//!
//! This module provides the `ZendeskClient` struct for making authenticated
//! requests to the Zendesk REST API.
//!
//! # Delivery
//!
//! Every `create_ticket` call issues exactly one POST. There is no retry
//! and no idempotency key, so calling it twice with the same input files
//! two tickets.
//!
//! # Security
//!
//! The API token is never logged. Error bodies are sanitized before they
//! leave this module.

use base64::Engine;
use reqwest::{Client, StatusCode};
use url::Url;

use crate::config::Config;
use crate::error::DeskError;
use crate::models::{CreateTicketRequest, CreateTicketResponse, CreatedTicket};
use crate::tools::TicketRequest;

/// Hostname suffix shared by every Zendesk account.
const ZENDESK_DOMAIN: &str = "zendesk.com";

/// Path of the ticket creation endpoint, relative to the API root.
const TICKETS_PATH: &str = "/api/v2/tickets.json";

/// Maximum length for HTTP error response bodies kept in errors.
const MAX_ERROR_BODY_LEN: usize = 500;

/// HTTP client for the Zendesk API.
///
/// # Example
///
/// ```ignore
/// let config = Config::from_env()?;
/// let client = ZendeskClient::new(&config)?;
///
/// let ticket = client.create_ticket(&request).await?;
/// println!("Created ticket #{}", ticket.id);
/// ```
#[derive(Clone)]
pub struct ZendeskClient {
    /// The underlying HTTP client (cloning is cheap).
    http: Client,

    /// Account root, e.g. `https://acme.zendesk.com`.
    api_root: String,

    /// Agent email used for token authentication.
    email: String,

    /// API token for authentication.
    /// SECURITY: Never log this value!
    api_token: String,
}

impl ZendeskClient {
    /// Creates a client for the account named by `config.base_url`.
    ///
    /// # Errors
    ///
    /// Returns `DeskError::Config` if no usable subdomain can be derived
    /// from the base URL, or `DeskError::HttpClient` if the HTTP client
    /// fails to initialize.
    pub fn new(config: &Config) -> Result<Self, DeskError> {
        let api_root = Self::account_root(&config.base_url)?;
        Self::with_api_root(config, &api_root)
    }

    /// Creates a client that talks to `api_root` instead of the derived
    /// `https://<subdomain>.zendesk.com` host.
    ///
    /// Credentials still come from `config`.
    pub fn with_api_root(config: &Config, api_root: &str) -> Result<Self, DeskError> {
        let http = Client::builder()
            .user_agent(concat!("frontdesk/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(DeskError::HttpClient)?;

        Ok(Self {
            http,
            api_root: api_root.trim_end_matches('/').to_string(),
            email: config.email.clone(),
            api_token: config.api_token.clone(),
        })
    }

    /// Extracts the account subdomain from a configured base URL.
    ///
    /// Accepts `https://acme.zendesk.com`, `http://acme.zendesk.com`,
    /// `acme.zendesk.com` and bare `acme`. The subdomain is everything
    /// before the first `.` once the scheme and trailing slashes are gone.
    pub fn subdomain(base_url: &str) -> Result<String, DeskError> {
        let url = base_url.trim();
        let url = url
            .strip_prefix("https://")
            .or_else(|| url.strip_prefix("http://"))
            .unwrap_or(url)
            .trim_end_matches('/');

        let subdomain = url.split('.').next().unwrap_or_default();

        if subdomain.is_empty() {
            return Err(DeskError::invalid_config(
                "ZENDESK_URL does not contain a Zendesk subdomain",
            ));
        }
        if !subdomain
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-')
        {
            return Err(DeskError::invalid_config(format!(
                "ZENDESK_URL subdomain may only contain letters, digits and '-', got: {:?}",
                subdomain.chars().take(50).collect::<String>()
            )));
        }

        Ok(subdomain.to_string())
    }

    /// Returns `https://<subdomain>.zendesk.com` for a configured base URL.
    fn account_root(base_url: &str) -> Result<String, DeskError> {
        let subdomain = Self::subdomain(base_url)?;
        let root = format!("https://{}.{}", subdomain, ZENDESK_DOMAIN);

        // Malformed hosts must not reach reqwest.
        Url::parse(&root).map_err(|e| {
            DeskError::invalid_config(format!("ZENDESK_URL yields an invalid URL: {}", e))
        })?;

        Ok(root)
    }

    /// Returns the ticket creation endpoint for a configured base URL.
    ///
    /// # Example
    ///
    /// ```ignore
    /// assert_eq!(
    ///     ZendeskClient::tickets_endpoint("acme")?,
    ///     "https://acme.zendesk.com/api/v2/tickets.json"
    /// );
    /// ```
    pub fn tickets_endpoint(base_url: &str) -> Result<String, DeskError> {
        Ok(format!("{}{}", Self::account_root(base_url)?, TICKETS_PATH))
    }

    /// Returns the agent UI URL for a ticket.
    pub fn ticket_web_url(&self, ticket_id: u64) -> String {
        format!("{}/agent/tickets/{}", self.api_root, ticket_id)
    }

    /// Builds the `Authorization` header value for token authentication.
    fn basic_auth_header(&self) -> String {
        let credentials = format!("{}/token:{}", self.email, self.api_token);
        let encoded = base64::engine::general_purpose::STANDARD.encode(credentials);
        format!("Basic {}", encoded)
    }

    /// Creates a ticket.
    ///
    /// # Returns
    ///
    /// The new ticket's id and agent URL.
    ///
    /// # Errors
    ///
    /// - `DeskError::HttpStatus` if Zendesk answers with anything but 201
    /// - `DeskError::Http` if the request fails in transit
    /// - `DeskError::Serialization` if the 201 body cannot be parsed
    pub async fn create_ticket(&self, request: &TicketRequest) -> Result<CreatedTicket, DeskError> {
        let url = format!("{}{}", self.api_root, TICKETS_PATH);
        let body = CreateTicketRequest::new(
            &request.subject,
            &request.description,
            &request.requester_name,
            &request.requester_email,
        );

        tracing::debug!(
            url = %url,
            requester = %request.requester_email,
            "Making Zendesk API request"
        );

        // `.json()` also sets `Content-Type: application/json`.
        let response = self
            .http
            .post(&url)
            .header("Authorization", self.basic_auth_header())
            .json(&body)
            .send()
            .await
            .map_err(DeskError::Http)?;
        let status = response.status();

        if status != StatusCode::CREATED {
            return Err(self.handle_http_error(status, response).await);
        }

        let text = response.text().await.map_err(DeskError::Http)?;

        tracing::trace!(body = %text, "Zendesk API response");

        let parsed: CreateTicketResponse = serde_json::from_str(&text)?;
        let id = parsed.ticket.id;

        tracing::info!(ticket_id = id, "Zendesk ticket created");

        Ok(CreatedTicket {
            id,
            url: self.ticket_web_url(id),
        })
    }

    /// Converts a non-201 response into `DeskError::HttpStatus`.
    async fn handle_http_error(&self, status: StatusCode, response: reqwest::Response) -> DeskError {
        let body = response.text().await.unwrap_or_default();
        let body = DeskError::sanitize_message(&body, &self.api_token);
        let body = truncate_body(body);

        tracing::warn!(status = %status, "Zendesk rejected ticket creation");

        DeskError::HttpStatus { status, body }
    }
}

/// Truncates an error body to `MAX_ERROR_BODY_LEN` characters.
fn truncate_body(body: String) -> String {
    match body.char_indices().nth(MAX_ERROR_BODY_LEN) {
        Some((cut, _)) => format!("{}...[truncated]", &body[..cut]),
        None => body,
    }
}
