//! Contact form state machine.
//!
//! Four text fields (name, email, subject, message), each with one rule and at
//! most one error string. The form cycles through three phases:
//!
//! ```text
//!             submit (all valid)           submit deadline
//!   Editing ─────────────────────▶ Submitting ──────────────▶ Submitted
//!      ▲                                                          │
//!      └──────────────────────── reset deadline ──────────────────┘
//! ```
//!
//! Time is explicit. [`ContactForm::submit`] and [`ContactForm::advance`] take
//! the current [`Instant`]; the host decides when to call `advance` (for
//! example at [`ContactForm::next_deadline`]). Delivery is delegated to a
//! [`SubmitGateway`], which is called exactly once per accepted submission
//! with a snapshot of the values taken at submit time.
//!
//! Validation failures are data, never errors: the host reads them through
//! [`ContactForm::visible_error`], which only reports errors for touched
//! fields.

use crate::config::FormConfig;
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;
use std::time::{Duration, Instant};
use thiserror::Error;

pub const NAME_MIN_CHARS: usize = 2;
pub const MESSAGE_MIN_CHARS: usize = 10;
pub const MESSAGE_MAX_CHARS: usize = 500;

/// Fraction of [`MESSAGE_MAX_CHARS`] past which the counter warns.
const NEAR_LIMIT_RATIO: f64 = 0.8;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

// =============================================================================
// Fields & rules
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    /// Form control name (`name="..."`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Subject => "Subject",
            Self::Message => "Message",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Run one field's rule. `None` means valid; otherwise the message for the
/// first failing check, required-ness first.
///
/// Blankness is judged on the trimmed value, lengths on the raw value in
/// characters.
pub fn validate_field(field: Field, value: &str) -> Option<&'static str> {
    let blank = value.trim().is_empty();
    let len = value.chars().count();
    match field {
        Field::Name if blank => Some("Name is required"),
        Field::Name if len < NAME_MIN_CHARS => Some("Name is too short"),
        Field::Email if blank => Some("Email is required"),
        Field::Email if !EMAIL_RE.is_match(value) => Some("Please enter a valid email"),
        Field::Subject if blank => Some("Subject is required"),
        Field::Message if blank => Some("Message is required"),
        Field::Message if len < MESSAGE_MIN_CHARS => {
            Some("Message is too short (minimum 10 characters)")
        }
        Field::Message if len > MESSAGE_MAX_CHARS => {
            Some("Message is too long (maximum 500 characters)")
        }
        _ => None,
    }
}

/// The four field values. This is what a gateway receives.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactValues {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactValues {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
        }
    }
}

// =============================================================================
// Gateway
// =============================================================================

#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("delivery failed: {0}")]
    Transport(String),
    #[error("delivery rejected with status {0}")]
    Rejected(u16),
}

/// Receives accepted submissions.
///
/// Any `FnMut(&ContactValues)` closure is a gateway that always succeeds.
pub trait SubmitGateway {
    fn deliver(&mut self, values: &ContactValues) -> Result<(), GatewayError>;
}

impl<F> SubmitGateway for F
where
    F: FnMut(&ContactValues),
{
    fn deliver(&mut self, values: &ContactValues) -> Result<(), GatewayError> {
        self(values);
        Ok(())
    }
}

/// Gateway that only logs. Used when no endpoint is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogGateway;

impl SubmitGateway for LogGateway {
    fn deliver(&mut self, values: &ContactValues) -> Result<(), GatewayError> {
        tracing::info!(
            name = %values.name,
            email = %values.email,
            subject = %values.subject,
            "contact submission"
        );
        Ok(())
    }
}

/// POSTs submissions as JSON to an endpoint.
#[cfg(feature = "http")]
pub struct HttpGateway {
    client: reqwest::blocking::Client,
    endpoint: String,
}

#[cfg(feature = "http")]
impl HttpGateway {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, GatewayError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GatewayError::Transport(e.to_string()))?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }
}

#[cfg(feature = "http")]
impl SubmitGateway for HttpGateway {
    fn deliver(&mut self, values: &ContactValues) -> Result<(), GatewayError> {
        let resp = self
            .client
            .post(&self.endpoint)
            .json(values)
            .send()
            .map_err(|e| GatewayError::Transport(e.to_string()))?;
        let status = resp.status();
        if !status.is_success() {
            return Err(GatewayError::Rejected(status.as_u16()));
        }
        Ok(())
    }
}

// =============================================================================
// State machine
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    Editing,
    /// Accepted; `snapshot` is delivered at `deadline`.
    Submitting {
        deadline: Instant,
        snapshot: ContactValues,
    },
    /// Delivered; the form resets at `reset_at`.
    Submitted { reset_at: Instant },
}

/// Result of a submit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Every rule passed; the form is now submitting.
    Accepted,
    /// At least one rule failed; all fields are now touched.
    Invalid,
    /// The form is locked (submitting or showing the sent view).
    Ignored,
}

/// A timer transition fired by [`ContactForm::advance`].
#[derive(Debug)]
pub enum FormEvent {
    Delivered,
    /// The gateway failed. The form still shows the sent view and resets.
    DeliveryFailed(GatewayError),
    Reset,
}

/// Character counter for the message field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageCounter {
    pub len: usize,
    pub max: usize,
    pub near_limit: bool,
}

#[derive(Debug, Clone)]
pub struct ContactForm {
    values: ContactValues,
    errors: [Option<&'static str>; 4],
    touched: [bool; 4],
    phase: Phase,
    submit_delay: Duration,
    reset_delay: Duration,
}

impl ContactForm {
    pub fn new(submit_delay: Duration, reset_delay: Duration) -> Self {
        Self {
            values: ContactValues::default(),
            errors: [None; 4],
            touched: [false; 4],
            phase: Phase::Editing,
            submit_delay,
            reset_delay,
        }
    }

    pub fn from_config(config: &FormConfig) -> Self {
        Self::new(config.submit_delay(), config.reset_delay())
    }

    /// Whether edits and submits are currently refused.
    fn locked(&self) -> bool {
        !matches!(self.phase, Phase::Editing)
    }

    /// Replace a field's value. An existing error on that field is cleared,
    /// not re-checked. Returns false if the form is locked.
    pub fn change(&mut self, field: Field, value: impl Into<String>) -> bool {
        if self.locked() {
            return false;
        }
        self.values.set(field, value.into());
        self.errors[field.index()] = None;
        true
    }

    /// Mark a field touched and run its rule.
    pub fn blur(&mut self, field: Field) {
        if self.locked() {
            return;
        }
        self.touched[field.index()] = true;
        self.errors[field.index()] = validate_field(field, self.values.get(field));
    }

    /// Validate everything and, if it all passes, start submitting.
    pub fn submit(&mut self, now: Instant) -> SubmitOutcome {
        if self.locked() {
            tracing::debug!("submit ignored while {}", self.phase_name());
            return SubmitOutcome::Ignored;
        }
        for field in Field::ALL {
            self.errors[field.index()] = validate_field(field, self.values.get(field));
        }
        if self.errors.iter().any(Option::is_some) {
            self.touched = [true; 4];
            tracing::debug!(
                invalid = self.errors.iter().filter(|e| e.is_some()).count(),
                "submit rejected"
            );
            return SubmitOutcome::Invalid;
        }
        self.phase = Phase::Submitting {
            deadline: now + self.submit_delay,
            snapshot: self.values.clone(),
        };
        tracing::debug!(delay = ?self.submit_delay, "submitting");
        SubmitOutcome::Accepted
    }

    /// Fire every timer due at `now`, in order.
    ///
    /// A submit deadline delivers the snapshot and schedules the reset
    /// relative to the deadline, so one late call can fire both.
    pub fn advance(&mut self, now: Instant, gateway: &mut dyn SubmitGateway) -> Vec<FormEvent> {
        let mut events = Vec::new();
        loop {
            match &self.phase {
                Phase::Submitting { deadline, snapshot } if *deadline <= now => {
                    let reset_at = *deadline + self.reset_delay;
                    match gateway.deliver(snapshot) {
                        Ok(()) => events.push(FormEvent::Delivered),
                        Err(err) => {
                            tracing::warn!("contact delivery failed: {err}");
                            events.push(FormEvent::DeliveryFailed(err));
                        }
                    }
                    self.phase = Phase::Submitted { reset_at };
                    tracing::debug!("submitted");
                }
                Phase::Submitted { reset_at } if *reset_at <= now => {
                    self.reset();
                    events.push(FormEvent::Reset);
                    tracing::debug!("form reset");
                }
                _ => break,
            }
        }
        events
    }

    /// When `advance` next has work to do.
    pub fn next_deadline(&self) -> Option<Instant> {
        match &self.phase {
            Phase::Editing => None,
            Phase::Submitting { deadline, .. } => Some(*deadline),
            Phase::Submitted { reset_at } => Some(*reset_at),
        }
    }

    fn reset(&mut self) {
        self.values = ContactValues::default();
        self.errors = [None; 4];
        self.touched = [false; 4];
        self.phase = Phase::Editing;
    }

    fn phase_name(&self) -> &'static str {
        match self.phase {
            Phase::Editing => "editing",
            Phase::Submitting { .. } => "submitting",
            Phase::Submitted { .. } => "submitted",
        }
    }

    // -------------------------------------------------------------------------
    // Host view
    // -------------------------------------------------------------------------

    pub fn values(&self) -> &ContactValues {
        &self.values
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn error(&self, field: Field) -> Option<&'static str> {
        self.errors[field.index()]
    }

    /// The error to display: only once the field has been touched.
    pub fn visible_error(&self, field: Field) -> Option<&'static str> {
        if self.is_touched(field) {
            self.error(field)
        } else {
            None
        }
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.touched[field.index()]
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.phase, Phase::Submitting { .. })
    }

    pub fn is_submitted(&self) -> bool {
        matches!(self.phase, Phase::Submitted { .. })
    }

    pub fn message_counter(&self) -> MessageCounter {
        let len = self.values.message.chars().count();
        MessageCounter {
            len,
            max: MESSAGE_MAX_CHARS,
            near_limit: len as f64 > MESSAGE_MAX_CHARS as f64 * NEAR_LIMIT_RATIO,
        }
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::from_config(&FormConfig::default())
    }
}
