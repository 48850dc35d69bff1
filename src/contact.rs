//! Contact form submission: the request/response contract with the endpoint
//! and the submit-control lifecycle. The HTTP call itself lives in the
//! frontend; this state never touches the network, so the guarantee that the
//! control always recovers after a submission is testable in isolation.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use serde::{Deserialize, Serialize};

pub const CONTACT_ENDPOINT: &str = "/api/contact";

/// How long a settle message stays visible before auto-dismissing.
pub const STATUS_DISMISS_MS: u32 = 5_000;

const SUCCESS_TEXT: &str = "Message sent successfully!";
const FAILURE_TEXT: &str = "Failed to send message. Please try again.";

/// JSON body POSTed to the contact endpoint.
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Response envelope from the contact endpoint.
#[derive(Clone, Debug, Deserialize)]
pub struct ContactResponse {
    pub ok: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SubmitError {
    /// The endpoint answered with a non-success status code.
    Status(u16),
    /// The endpoint rejected the message, or the transport failed.
    Rejected,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum StatusKind {
    Success,
    Error,
}

impl StatusKind {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// Transient inline feedback shown under the form.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct StatusMessage {
    pub text: &'static str,
    pub kind: StatusKind,
}

/// Submission lifecycle for the contact form.
///
/// `begin` disables the submit control for the duration of one in-flight
/// request; `settle` always re-enables it, whatever the outcome, and raises
/// the feedback message. Each settle gets a ticket so a stale auto-dismiss
/// cannot clear a newer message.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct SubmitState {
    sending: bool,
    status: Option<StatusMessage>,
    ticket: u64,
}

impl SubmitState {
    /// Enters the sending state. Returns `false` (and changes nothing) if a
    /// submission is already in flight.
    pub fn begin(&mut self) -> bool {
        if self.sending {
            return false;
        }

        self.sending = true;
        self.status = None;
        true
    }

    /// Leaves the sending state and surfaces the outcome. Returns the ticket
    /// to pass to [`SubmitState::dismiss`] once the display window elapses.
    pub fn settle(&mut self, outcome: Result<(), SubmitError>) -> u64 {
        self.sending = false;
        self.status = Some(match outcome {
            Ok(()) => StatusMessage {
                text: SUCCESS_TEXT,
                kind: StatusKind::Success,
            },
            Err(_) => StatusMessage {
                text: FAILURE_TEXT,
                kind: StatusKind::Error,
            },
        });
        self.ticket += 1;
        self.ticket
    }

    /// Clears the status raised by the settle that issued `ticket`; a ticket
    /// from an older settle is ignored.
    pub fn dismiss(&mut self, ticket: u64) {
        if self.ticket == ticket {
            self.status = None;
        }
    }

    pub fn is_sending(&self) -> bool {
        self.sending
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }
}
