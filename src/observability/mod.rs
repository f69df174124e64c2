//! Observability for aerometa
//!
//! Structured JSON logging of metadata lifecycle events.
//!
//! # Principles
//!
//! 1. Observability is read-only
//! 2. No side effects on validation outcomes
//! 3. No async or background threads
//! 4. Deterministic output
//!
//! # Usage
//!
//! ```ignore
//! use aerometa::observability::{log_event_with_fields, Event};
//!
//! log_event_with_fields(Event::AliasValidated, &[("alias", "logs")]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};

/// Log a lifecycle event
pub fn log_event(event: Event) {
    Logger::log(event.severity(), event.as_str(), &[]);
}

/// Log a lifecycle event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(event.severity(), event.as_str(), fields);
}

/// Render a lifecycle event the way `log_event_with_fields` writes it
#[cfg(test)]
fn capture_event(event: Event, fields: &[(&str, &str)]) -> String {
    logger::capture_log(event.severity(), event.as_str(), fields)
}
