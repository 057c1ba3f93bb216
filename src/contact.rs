//! Contact/inquiry form: field validation and the submission state machine.
//!
//! Validation is a pure function from field values to a set of field-level
//! errors; errors are translation keys (`contact.validation.*`) so the HTTP
//! layer renders them in the active language. All fields are evaluated on
//! every pass, never short-circuited, so the full error set is available to
//! the caller at once.
//!
//! Submission runs through a small state machine: Idle → Submitting →
//! Success, with Failed reachable only through a delivery that reports an
//! error. Delivery itself sits behind [`InquiryDelivery`]; the production
//! collaborator is [`SimulatedDelivery`], a fixed delay that always
//! succeeds.

use regex::Regex;
use serde::Deserialize;
use std::future::Future;
use std::sync::OnceLock;
use std::time::Duration;
use thiserror::Error;
use tracing::{info, warn};

/// The enumerated subject options of the contact form, in display order.
/// These are input-control values; the validator never checks them.
pub const SUBJECTS: [&str; 5] = ["webDesign", "development", "seo", "marketing", "other"];

/// Default subject preselected in an empty form.
pub const DEFAULT_SUBJECT: &str = "webDesign";

/// Raw field values of the contact form.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ContactFields {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default = "default_subject")]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

fn default_subject() -> String {
    DEFAULT_SUBJECT.to_string()
}

impl Default for ContactFields {
    fn default() -> Self {
        Self {
            name: String::new(),
            phone: String::new(),
            email: String::new(),
            subject: default_subject(),
            message: String::new(),
        }
    }
}

/// The form's inputs, used to address values and error entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Phone,
    Email,
    Subject,
    Message,
}

/// Field-level validation errors. Each entry pairs a field with the
/// translation key of its message; a field appears at most once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    entries: Vec<(Field, &'static str)>,
}

impl FieldErrors {
    /// No errors recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of fields with an error.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// The error message key for a field, if it failed its last pass.
    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, key)| *key)
    }

    /// Remove a single field's error entry, keeping the others.
    pub fn clear(&mut self, field: Field) {
        self.entries.retain(|(f, _)| *f != field);
    }

    fn record(&mut self, field: Field, message_key: &'static str) {
        self.entries.push((field, message_key));
    }
}

// Validation patterns (compiled once)
static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
static PHONE_REGEX: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap()
    })
}

fn phone_regex() -> &'static Regex {
    // Loose international shape: optional +, optional (1-4 digits), then
    // up to three digit groups separated by space/hyphen/dot
    PHONE_REGEX.get_or_init(|| {
        Regex::new(r"^[+]?[(]?[0-9]{1,4}[)]?[-\s.]?[0-9]{1,4}[-\s.]?[0-9]{1,9}$").unwrap()
    })
}

/// Validate all form fields in one pass.
///
/// Rules:
/// - `name`: required after trimming whitespace
/// - `email`: must match the email pattern; the empty string fails the
///   pattern and reports the same "invalid" message
/// - `phone`: optional; checked only when non-empty
/// - `message`: required after trimming whitespace
/// - `subject`: never validated
pub fn validate(fields: &ContactFields) -> FieldErrors {
    let mut errors = FieldErrors::default();

    if fields.name.trim().is_empty() {
        errors.record(Field::Name, "contact.validation.nameRequired");
    }

    if !email_regex().is_match(&fields.email) {
        errors.record(Field::Email, "contact.validation.emailInvalid");
    }

    if !fields.phone.is_empty() && !phone_regex().is_match(&fields.phone) {
        errors.record(Field::Phone, "contact.validation.phoneInvalid");
    }

    if fields.message.trim().is_empty() {
        errors.record(Field::Message, "contact.validation.messageRequired");
    }

    errors
}

/// Where the form is in its submission lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionStatus {
    /// Accepting input; possibly showing validation errors.
    Idle,
    /// A delivery is in flight; further submits are rejected.
    Submitting,
    /// The inquiry was delivered; fields are cleared.
    Success,
    /// Delivery reported an error; the visitor may retry.
    Failed,
}

/// A typed delivery failure, carried back to the form for the retry
/// affordance.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DeliveryError {
    #[error("inquiry delivery timed out")]
    Timeout,
    #[error("inquiry delivery rejected: {0}")]
    Rejected(String),
}

/// Asynchronous delivery of a validated inquiry.
pub trait InquiryDelivery {
    fn deliver(
        &self,
        inquiry: &ContactFields,
    ) -> impl Future<Output = Result<(), DeliveryError>> + Send;
}

/// Delivery stand-in: waits a fixed delay and succeeds. There is no backend
/// in the current scope.
#[derive(Debug, Clone)]
pub struct SimulatedDelivery {
    delay: Duration,
}

impl SimulatedDelivery {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl InquiryDelivery for SimulatedDelivery {
    async fn deliver(&self, inquiry: &ContactFields) -> Result<(), DeliveryError> {
        tokio::time::sleep(self.delay).await;
        info!(subject = %inquiry.subject, "inquiry ready for backend");
        Ok(())
    }
}

/// One contact form instance: field values, error set, submission status.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    fields: ContactFields,
    errors: FieldErrors,
    status: SubmissionStatus,
}

impl Default for SubmissionStatus {
    fn default() -> Self {
        SubmissionStatus::Idle
    }
}

impl ContactForm {
    /// An empty form in the Idle state with the default subject selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// A form pre-populated with submitted values (SSR re-render path).
    pub fn with_fields(fields: ContactFields) -> Self {
        Self {
            fields,
            errors: FieldErrors::default(),
            status: SubmissionStatus::Idle,
        }
    }

    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    /// Update one field's value. If the field currently has a recorded
    /// error, the error is cleared immediately, regardless of whether the
    /// new value would validate; the authoritative check re-runs at the
    /// next submit.
    pub fn set_field(&mut self, field: Field, value: &str) {
        match field {
            Field::Name => self.fields.name = value.to_string(),
            Field::Phone => self.fields.phone = value.to_string(),
            Field::Email => self.fields.email = value.to_string(),
            Field::Subject => self.fields.subject = value.to_string(),
            Field::Message => self.fields.message = value.to_string(),
        }
        self.errors.clear(field);
    }

    /// Attempt to submit the form.
    ///
    /// An invalid form stays Idle with the full error set populated. A
    /// valid form transitions Idle → Submitting, runs the delivery, and
    /// lands in Success (fields cleared) or Failed (fields kept for retry).
    /// A submit after Success is rejected unchanged; a submit from Failed
    /// retries. Overlapping submits cannot happen at all, since the form is
    /// exclusively borrowed for the whole delivery.
    pub async fn submit(&mut self, delivery: &impl InquiryDelivery) -> SubmissionStatus {
        if self.status == SubmissionStatus::Success {
            warn!("submit rejected: form already delivered");
            return self.status;
        }

        let errors = validate(&self.fields);
        if !errors.is_empty() {
            self.errors = errors;
            self.status = SubmissionStatus::Idle;
            return self.status;
        }

        self.errors = FieldErrors::default();
        self.status = SubmissionStatus::Submitting;

        match delivery.deliver(&self.fields).await {
            Ok(()) => {
                self.fields = ContactFields::default();
                self.status = SubmissionStatus::Success;
            }
            Err(error) => {
                warn!(%error, "inquiry delivery failed");
                self.status = SubmissionStatus::Failed;
            }
        }

        self.status
    }

    /// "Send another message": return from Success to an empty Idle form.
    pub fn send_another(&mut self) {
        self.fields = ContactFields::default();
        self.errors = FieldErrors::default();
        self.status = SubmissionStatus::Idle;
    }
}
