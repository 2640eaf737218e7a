//! The contact form driven the way the binary and the page drive it:
//! settings from disk, an explicit clock, a recording gateway.

use std::fs;
use std::time::{Duration, Instant};
use studio_site::config;
use studio_site::contact::{
    ContactForm, ContactValues, Field, FormEvent, GatewayError, Phase, SubmitGateway,
    SubmitOutcome,
};
use studio_site::output;
use studio_site::render::render_form;
use tempfile::TempDir;

fn fill(form: &mut ContactForm, name: &str, email: &str, subject: &str, message: &str) {
    form.change(Field::Name, name);
    form.change(Field::Email, email);
    form.change(Field::Subject, subject);
    form.change(Field::Message, message);
}

fn form_from_settings(toml: &str) -> ContactForm {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("site.toml"), toml).unwrap();
    let site = config::load_config(tmp.path()).unwrap();
    ContactForm::from_config(&site.form)
}

struct Refusing;

impl SubmitGateway for Refusing {
    fn deliver(&mut self, _: &ContactValues) -> Result<(), GatewayError> {
        Err(GatewayError::Rejected(503))
    }
}

#[test]
fn full_cycle_with_configured_delays() {
    let mut form = form_from_settings("[form]\nsubmit_delay_ms = 200\nreset_delay_ms = 1000\n");
    let t0 = Instant::now();
    fill(
        &mut form,
        "Ada Lovelace",
        "ada@example.com",
        "Engines",
        "I would like to talk about analytical engines.",
    );

    assert_eq!(form.submit(t0), SubmitOutcome::Accepted);
    assert_eq!(form.next_deadline(), Some(t0 + Duration::from_millis(200)));
    assert!(render_form(&form).into_string().contains("Sending..."));

    // Edits while submitting are refused and do not reach the gateway.
    assert!(!form.change(Field::Name, "Someone Else"));

    let mut delivered = Vec::new();
    let mut record = |v: &ContactValues| delivered.push(v.clone());

    let early = form.advance(t0 + Duration::from_millis(199), &mut record);
    assert!(early.is_empty());

    let events = form.advance(t0 + Duration::from_millis(200), &mut record);
    assert!(matches!(events.as_slice(), [FormEvent::Delivered]));
    assert!(form.is_submitted());
    assert!(render_form(&form).into_string().contains("Message Sent!"));
    assert_eq!(output::format_submit_events(&events), vec!["Message sent"]);

    let events = form.advance(t0 + Duration::from_millis(1200), &mut record);
    assert!(matches!(events.as_slice(), [FormEvent::Reset]));
    assert_eq!(*form.phase(), Phase::Editing);
    assert_eq!(*form.values(), ContactValues::default());

    assert_eq!(delivered.len(), 1);
    assert_eq!(delivered[0].name, "Ada Lovelace");
}

#[test]
fn rejected_submission_reports_every_invalid_field() {
    let mut form = ContactForm::default();
    fill(&mut form, "A", "not-an-email", "Hello", "short");

    assert_eq!(form.submit(Instant::now()), SubmitOutcome::Invalid);
    assert_eq!(form.next_deadline(), None);
    assert_eq!(
        output::format_submit_errors(&form),
        vec![
            "Not sent: 3 fields need attention".to_string(),
            "    Name: Name is too short".to_string(),
            "    Email: Please enter a valid email".to_string(),
            "    Message: Message is too short (minimum 10 characters)".to_string(),
        ]
    );

    let html = render_form(&form).into_string();
    assert!(html.contains("Please enter a valid email"));
    assert!(html.contains("Send Message"));
}

#[test]
fn gateway_failure_still_completes_the_cycle() {
    let mut form = form_from_settings("[form]\nsubmit_delay_ms = 0\nreset_delay_ms = 0\n");
    let t0 = Instant::now();
    fill(
        &mut form,
        "Grace",
        "grace@example.com",
        "Compilers",
        "Let us discuss compilers at length.",
    );
    assert_eq!(form.submit(t0), SubmitOutcome::Accepted);

    let events = form.advance(t0, &mut Refusing);
    assert_eq!(events.len(), 2);
    assert!(matches!(events[0], FormEvent::DeliveryFailed(GatewayError::Rejected(503))));
    assert!(matches!(events[1], FormEvent::Reset));
    assert_eq!(
        output::format_submit_events(&events),
        vec!["Message not delivered: delivery rejected with status 503"]
    );
    assert_eq!(*form.phase(), Phase::Editing);
}
