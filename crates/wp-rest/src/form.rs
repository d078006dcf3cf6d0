//! Form Drafts
//!
//! Unsaved form input, its validation errors and the submit cycle:
//! validate, send one write, then reset on success or keep the draft and
//! report the failure.

use std::collections::BTreeMap;
use std::fmt::Display;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::client::WpClient;
use crate::endpoint::Endpoint;
use crate::transport::Transport;

/// Which control a field is edited with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Line,
    /// Text area with the given number of rows
    Multiline(u32),
    /// One of a fixed set of `(value, label)` options
    Choice(&'static [(&'static str, &'static str)]),
}

/// One input of a form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub required: bool,
    pub kind: FieldKind,
}

impl FieldSpec {
    pub const fn required(name: &'static str, label: &'static str) -> Self {
        Self { name, label, required: true, kind: FieldKind::Line }
    }

    pub const fn optional(name: &'static str, label: &'static str) -> Self {
        Self { name, label, required: false, kind: FieldKind::Line }
    }

    pub const fn multiline(self, rows: u32) -> Self {
        Self { kind: FieldKind::Multiline(rows), ..self }
    }

    pub const fn choices(self, options: &'static [(&'static str, &'static str)]) -> Self {
        Self { kind: FieldKind::Choice(options), ..self }
    }
}

/// Field values being edited, plus per-field validation messages
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Draft {
    values: BTreeMap<String, String>,
    errors: BTreeMap<String, String>,
}

impl Draft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: &str) -> &str {
        self.values.get(field).map(String::as_str).unwrap_or("")
    }

    /// Update a field. Editing a field clears its validation error.
    pub fn set(&mut self, field: &str, value: impl Into<String>) {
        self.values.insert(field.to_string(), value.into());
        self.errors.remove(field);
    }

    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn errors(&self) -> &BTreeMap<String, String> {
        &self.errors
    }

    /// Check required fields, replacing the error set. Returns `true` when valid.
    pub fn validate(&mut self, fields: &[FieldSpec]) -> bool {
        self.errors = fields
            .iter()
            .filter(|f| f.required && self.get(f.name).trim().is_empty())
            .map(|f| (f.name.to_string(), format!("{} required", f.name)))
            .collect();
        self.errors.is_empty()
    }

    /// JSON body for the write: declared fields with non-empty values.
    pub fn payload(&self, fields: &[FieldSpec]) -> Value {
        let map: Map<String, Value> = fields
            .iter()
            .filter_map(|f| {
                let value = self.get(f.name).trim();
                (!value.is_empty()).then(|| (f.name.to_string(), Value::String(value.to_string())))
            })
            .collect();
        Value::Object(map)
    }

    pub fn reset(&mut self) {
        self.values.clear();
        self.errors.clear();
    }
}

/// What a completed submit did
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome<R> {
    /// Validation failed; nothing was sent
    Invalid,
    /// A submit is already in flight; nothing was sent
    Busy,
    Created(R),
    Failed(String),
}

/// A draft bound to its field list, with the submit lifecycle
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    pub draft: Draft,
    fields: &'static [FieldSpec],
    defaults: &'static [(&'static str, &'static str)],
    submitting: bool,
    submit_error: Option<String>,
}

impl FormState {
    pub fn new(fields: &'static [FieldSpec]) -> Self {
        Self {
            draft: Draft::new(),
            fields,
            defaults: &[],
            submitting: false,
            submit_error: None,
        }
    }

    /// Values the draft starts with, and returns to after a successful submit.
    pub fn with_defaults(mut self, defaults: &'static [(&'static str, &'static str)]) -> Self {
        self.defaults = defaults;
        self.apply_defaults();
        self
    }

    fn apply_defaults(&mut self) {
        for (field, value) in self.defaults {
            self.draft.set(field, *value);
        }
    }

    pub fn fields(&self) -> &'static [FieldSpec] {
        self.fields
    }

    pub fn submitting(&self) -> bool {
        self.submitting
    }

    pub fn submit_error(&self) -> Option<&str> {
        self.submit_error.as_deref()
    }

    /// Validate and, if valid, mark the form as submitting.
    ///
    /// Returns the payload to send, or `Err` with the reason nothing should be sent.
    pub fn begin_submit<R>(&mut self) -> Result<Value, SubmitOutcome<R>> {
        if self.submitting {
            return Err(SubmitOutcome::Busy);
        }
        if !self.draft.validate(self.fields) {
            log::debug!("[form] blocked by {} validation error(s)", self.draft.errors().len());
            return Err(SubmitOutcome::Invalid);
        }
        self.submitting = true;
        self.submit_error = None;
        Ok(self.draft.payload(self.fields))
    }

    /// Apply the write result: reset on success, keep the draft on failure.
    pub fn complete_submit<R, E: Display>(&mut self, result: Result<R, E>) -> SubmitOutcome<R> {
        self.submitting = false;
        match result {
            Ok(record) => {
                self.draft.reset();
                self.apply_defaults();
                SubmitOutcome::Created(record)
            }
            Err(err) => {
                let message = err.to_string();
                log::warn!("[form] submit failed: {}", message);
                self.submit_error = Some(message.clone());
                SubmitOutcome::Failed(message)
            }
        }
    }
}

/// Validate, write once, and apply the outcome. `on_created` runs exactly
/// once, after the draft has been reset, when the write succeeds.
pub async fn submit<T, R>(
    client: &WpClient<T>,
    endpoint: &Endpoint,
    form: &mut FormState,
    on_created: impl FnOnce(&R),
) -> SubmitOutcome<R>
where
    T: Transport,
    R: DeserializeOwned,
{
    let payload = match form.begin_submit() {
        Ok(payload) => payload,
        Err(outcome) => return outcome,
    };
    let result = client.create::<R>(endpoint, &payload).await;
    let outcome = form.complete_submit(result);
    if let SubmitOutcome::Created(record) = &outcome {
        on_created(record);
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;
    use crate::mock::MockTransport;
    use crate::models::Post;
    use serde_json::json;
    use std::cell::Cell;

    const FIELDS: &[FieldSpec] = &[
        FieldSpec::required("title", "Title"),
        FieldSpec::optional("content", "Content"),
    ];

    fn client(mock: MockTransport) -> WpClient<MockTransport> {
        WpClient::new(mock, ApiConfig::new("https://example.com"))
    }

    #[test]
    fn test_required_field_errors() {
        let mut draft = Draft::new();
        draft.set("content", "body only");
        assert!(!draft.validate(FIELDS));
        assert_eq!(draft.errors().len(), 1);
        assert_eq!(draft.error("title"), Some("title required"));
    }

    #[test]
    fn test_whitespace_counts_as_empty() {
        let mut draft = Draft::new();
        draft.set("title", "   ");
        assert!(!draft.validate(FIELDS));
    }

    #[test]
    fn test_editing_clears_field_error() {
        let mut draft = Draft::new();
        draft.validate(FIELDS);
        draft.set("title", "T");
        assert!(draft.error("title").is_none());
    }

    #[test]
    fn test_payload_skips_empty_fields() {
        let mut draft = Draft::new();
        draft.set("title", " Hi ");
        draft.set("content", "");
        draft.set("unlisted", "ignored");
        assert_eq!(draft.payload(FIELDS), json!({"title": "Hi"}));
    }

    #[test]
    fn test_post_form_fields() {
        let kinds: Vec<(&str, &str, FieldKind)> =
            Post::FORM_FIELDS.iter().map(|f| (f.name, f.label, f.kind)).collect();
        assert_eq!(kinds[0], ("title", "Title", FieldKind::Line));
        assert_eq!(kinds[1], ("content", "Content", FieldKind::Multiline(8)));
        assert!(matches!(kinds[3], ("status", "Status", FieldKind::Choice(options)) if options.len() == 2));
        assert_eq!(Post::FORM_FIELDS.iter().filter(|f| f.required).count(), 1);
    }

    #[test]
    fn test_second_submit_while_in_flight_is_busy() {
        let mut form = FormState::new(FIELDS);
        form.draft.set("title", "Once");
        assert!(form.begin_submit::<Post>().is_ok());
        assert_eq!(form.begin_submit::<Post>(), Err(SubmitOutcome::Busy));
    }

    #[test]
    fn test_defaults_restored_after_success() {
        const DEFAULTS: &[(&str, &str)] = &[("status", "draft")];
        let mut form = FormState::new(Post::FORM_FIELDS).with_defaults(DEFAULTS);
        form.draft.set("title", "T");
        form.draft.set("status", "publish");
        form.begin_submit::<Post>().unwrap();
        form.complete_submit::<_, String>(Ok(Post::default()));
        assert_eq!(form.draft.get("status"), "draft");
        assert_eq!(form.draft.get("title"), "");
    }

    #[tokio::test]
    async fn test_empty_title_sends_nothing() {
        let client = client(MockTransport::new());
        let mut form = FormState::new(FIELDS);
        let refreshed = Cell::new(0);

        let outcome: SubmitOutcome<Post> =
            submit(&client, &Endpoint::posts(), &mut form, |_| refreshed.set(refreshed.get() + 1)).await;

        assert_eq!(outcome, SubmitOutcome::Invalid);
        assert_eq!(form.draft.error("title"), Some("title required"));
        assert!(client.transport().requests().is_empty());
        assert_eq!(refreshed.get(), 0);
    }

    #[tokio::test]
    async fn test_valid_submit_resets_and_refreshes_once() {
        let client = client(MockTransport::new().respond(201, r#"{"id":2,"title":"New Post"}"#));
        let mut form = FormState::new(FIELDS);
        form.draft.set("title", "New Post");
        let refreshed = Cell::new(0);

        let outcome: SubmitOutcome<Post> =
            submit(&client, &Endpoint::posts(), &mut form, |_| refreshed.set(refreshed.get() + 1)).await;

        match outcome {
            SubmitOutcome::Created(post) => assert_eq!(post.id, 2.into()),
            other => panic!("unexpected outcome: {:?}", other),
        }
        let requests = client.transport().requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].body, Some(json!({"title": "New Post"})));
        assert_eq!(form.draft, Draft::new());
        assert!(!form.submitting());
        assert_eq!(refreshed.get(), 1);
    }

    #[tokio::test]
    async fn test_failed_submit_keeps_draft() {
        let client = client(
            MockTransport::new().respond(403, r#"{"code":"rest_forbidden","message":"Not allowed"}"#),
        );
        let mut form = FormState::new(FIELDS);
        form.draft.set("title", "Keep me");
        let refreshed = Cell::new(0);

        let outcome: SubmitOutcome<Post> =
            submit(&client, &Endpoint::posts(), &mut form, |_| refreshed.set(refreshed.get() + 1)).await;

        assert_eq!(outcome, SubmitOutcome::Failed("Not allowed (HTTP 403)".to_string()));
        assert_eq!(form.draft.get("title"), "Keep me");
        assert_eq!(form.submit_error(), Some("Not allowed (HTTP 403)"));
        assert!(!form.submitting());
        assert_eq!(client.transport().requests().len(), 1);
        assert_eq!(refreshed.get(), 0);
    }

    #[tokio::test]
    async fn test_retry_after_failure_clears_message() {
        let client = client(
            MockTransport::new()
                .fail("offline")
                .respond(201, r#"{"id":5,"title":"Second try"}"#),
        );
        let mut form = FormState::new(FIELDS);
        form.draft.set("title", "Second try");

        let first: SubmitOutcome<Post> = submit(&client, &Endpoint::posts(), &mut form, |_| {}).await;
        assert!(matches!(first, SubmitOutcome::Failed(_)));

        let second: SubmitOutcome<Post> = submit(&client, &Endpoint::posts(), &mut form, |_| {}).await;
        assert!(matches!(second, SubmitOutcome::Created(_)));
        assert!(form.submit_error().is_none());
    }
}
