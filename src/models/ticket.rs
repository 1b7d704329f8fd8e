//! Ticket models for the Zendesk Tickets API.
//!
//! This module defines the request envelope sent to
//! `POST /api/v2/tickets.json` and the subset of the response that
//! frontdesk reads back.

use serde::{Deserialize, Serialize};

/// Request body for creating a ticket.
///
/// Serializes as `{"ticket": {...}}`, the envelope Zendesk expects.
#[derive(Debug, Clone, Serialize)]
pub struct CreateTicketRequest {
    /// The ticket to create.
    pub ticket: NewTicket,
}

/// The ticket fields frontdesk sets on creation.
#[derive(Debug, Clone, Serialize)]
pub struct NewTicket {
    /// Ticket subject line.
    pub subject: String,

    /// First comment; its body becomes the ticket description.
    pub comment: TicketComment,

    /// The end user the ticket is filed for.
    pub requester: Requester,
}

/// A ticket comment.
#[derive(Debug, Clone, Serialize)]
pub struct TicketComment {
    /// Comment text.
    pub body: String,
}

/// Requester identity. Zendesk creates the user if the email is unknown.
#[derive(Debug, Clone, Serialize)]
pub struct Requester {
    /// Display name.
    pub name: String,

    /// Email address.
    pub email: String,
}

impl CreateTicketRequest {
    /// Builds a create request from the four caller-supplied fields.
    pub fn new(
        subject: impl Into<String>,
        description: impl Into<String>,
        requester_name: impl Into<String>,
        requester_email: impl Into<String>,
    ) -> Self {
        Self {
            ticket: NewTicket {
                subject: subject.into(),
                comment: TicketComment {
                    body: description.into(),
                },
                requester: Requester {
                    name: requester_name.into(),
                    email: requester_email.into(),
                },
            },
        }
    }
}

/// Response body of a successful ticket creation.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTicketResponse {
    /// The created ticket.
    pub ticket: TicketRecord,
}

/// The parts of a Zendesk ticket record frontdesk uses.
#[derive(Debug, Clone, Deserialize)]
pub struct TicketRecord {
    /// Ticket number.
    pub id: u64,
}

/// A ticket that Zendesk has accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedTicket {
    /// Ticket number assigned by Zendesk.
    pub id: u64,

    /// Agent UI link for the ticket.
    pub url: String,
}

impl CreatedTicket {
    /// The success text returned to the agent.
    pub fn summary(&self) -> String {
        format!(
            "Ticket created successfully: ID #{}\nView it at: {}",
            self.id, self.url
        )
    }
}
