/*
 * Contact Module
 *
 * Simulated contact form. Nothing is sent anywhere: submitting shows a
 * "sending" state for two seconds, then "sent" for three, then resets.
 */

use std::time::{Duration, Instant};

use thiserror::Error;
use tracing::info;

pub const SENDING_FOR: Duration = Duration::from_secs(2);
pub const SENT_FOR: Duration = Duration::from_secs(3);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("a message is already being sent")]
    Busy,
    #[error("{0} is required")]
    MissingField(&'static str),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactStatus {
    Idle,
    Sending { since: Instant },
    Sent { since: Instant },
}

#[derive(Clone, Debug)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    status: ContactStatus,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            message: String::new(),
            status: ContactStatus::Idle,
        }
    }
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> ContactStatus {
        self.status
    }

    pub fn submit(&mut self, now: Instant) -> Result<(), ContactError> {
        if self.status != ContactStatus::Idle {
            return Err(ContactError::Busy);
        }
        for (field, value) in [("name", &self.name), ("email", &self.email), ("message", &self.message)] {
            if value.trim().is_empty() {
                return Err(ContactError::MissingField(field));
            }
        }
        info!(name = %self.name.trim(), "contact form submitted");
        self.status = ContactStatus::Sending { since: now };
        Ok(())
    }

    /// Advance the timers. Returning to idle clears the fields.
    pub fn update(&mut self, now: Instant) {
        match self.status {
            ContactStatus::Sending { since } if now.saturating_duration_since(since) >= SENDING_FOR => {
                self.status = ContactStatus::Sent { since: since + SENDING_FOR };
            }
            ContactStatus::Sent { since } if now.saturating_duration_since(since) >= SENT_FOR => {
                self.status = ContactStatus::Idle;
                self.name.clear();
                self.email.clear();
                self.message.clear();
            }
            _ => {}
        }
    }

    pub fn button_label(&self) -> &'static str {
        match self.status {
            ContactStatus::Idle => "Send Message",
            ContactStatus::Sending { .. } => "Sending...",
            ContactStatus::Sent { .. } => "Message Sent!",
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.status == ContactStatus::Idle
    }
}
