//! In-memory event capture for log assertions
//!
//! Every test in a binary shares one global capture. Dispatch events carry
//! the menu name, so a test gives its menu a unique name and queries by it.
//!
//! ```
//! use almag_core::logging_facility::test_capture::{init_test_capture, EventQuery};
//!
//! let capture = init_test_capture();
//! tracing::warn!(op = "dispatch", menu = "doc-menu", event = "rejected", "Rejected");
//!
//! let query = EventQuery::new()
//!     .level(tracing::Level::WARN)
//!     .menu("doc-menu")
//!     .event("rejected");
//! assert_eq!(capture.count(&query), 1);
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, Mutex, OnceLock};

use almag_core_types::schema::{
    FIELD_COMMAND, FIELD_COMPONENT, FIELD_EVENT, FIELD_MENU, FIELD_MESSAGE, FIELD_OP,
};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

/// One recorded event: its level and every field rendered as text
#[derive(Clone, Debug)]
pub struct CapturedEvent {
    pub level: Level,
    fields: BTreeMap<String, String>,
}

impl CapturedEvent {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn op(&self) -> Option<&str> {
        self.field(FIELD_OP)
    }

    pub fn event(&self) -> Option<&str> {
        self.field(FIELD_EVENT)
    }

    pub fn menu(&self) -> Option<&str> {
        self.field(FIELD_MENU)
    }

    pub fn command(&self) -> Option<&str> {
        self.field(FIELD_COMMAND)
    }

    pub fn component(&self) -> Option<&str> {
        self.field(FIELD_COMPONENT)
    }

    /// Formatted message, empty when the event had none
    pub fn message(&self) -> &str {
        self.field(FIELD_MESSAGE).unwrap_or_default()
    }
}

impl Visit for CapturedEvent {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.fields.insert(field.name().to_string(), value.to_string());
    }

    // Integers, bools and `format_args!` messages all render through Debug
    // exactly as their Display form.
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.fields
            .insert(field.name().to_string(), format!("{:?}", value));
    }
}

/// Filter over captured events; unset criteria match anything
#[derive(Debug, Clone, Default)]
pub struct EventQuery<'a> {
    level: Option<Level>,
    op: Option<&'a str>,
    event: Option<&'a str>,
    menu: Option<&'a str>,
    command: Option<&'a str>,
}

impl<'a> EventQuery<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn level(mut self, level: Level) -> Self {
        self.level = Some(level);
        self
    }

    pub fn op(mut self, op: &'a str) -> Self {
        self.op = Some(op);
        self
    }

    pub fn event(mut self, event: &'a str) -> Self {
        self.event = Some(event);
        self
    }

    pub fn menu(mut self, menu: &'a str) -> Self {
        self.menu = Some(menu);
        self
    }

    pub fn command(mut self, command: &'a str) -> Self {
        self.command = Some(command);
        self
    }

    pub fn matches(&self, captured: &CapturedEvent) -> bool {
        fn wanted(expected: Option<&str>, actual: Option<&str>) -> bool {
            expected.is_none() || expected == actual
        }

        self.level.map_or(true, |level| level == captured.level)
            && wanted(self.op, captured.op())
            && wanted(self.event, captured.event())
            && wanted(self.menu, captured.menu())
            && wanted(self.command, captured.command())
    }
}

/// Shared capture buffer, also usable directly as a `Layer`
#[derive(Clone, Default)]
pub struct TestCapture {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl<S: Subscriber> Layer<S> for TestCapture {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut captured = CapturedEvent {
            level: *event.metadata().level(),
            fields: BTreeMap::new(),
        };
        event.record(&mut captured);

        if let Ok(mut events) = self.events.lock() {
            events.push(captured);
        }
    }
}

impl TestCapture {
    /// Snapshot of everything recorded so far
    pub fn events(&self) -> Vec<CapturedEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }

    /// Events accepted by `query`, in emission order
    pub fn find(&self, query: &EventQuery<'_>) -> Vec<CapturedEvent> {
        self.events()
            .into_iter()
            .filter(|e| query.matches(e))
            .collect()
    }

    pub fn count(&self, query: &EventQuery<'_>) -> usize {
        self.find(query).len()
    }

    /// The only event accepted by `query`
    ///
    /// # Panics
    ///
    /// Panics unless exactly one captured event matches.
    pub fn single(&self, query: &EventQuery<'_>) -> CapturedEvent {
        let mut found = self.find(query);
        assert_eq!(
            found.len(),
            1,
            "expected exactly one event for {:?}, found {}",
            query,
            found.len()
        );
        found.remove(0)
    }
}

static GLOBAL_CAPTURE: OnceLock<TestCapture> = OnceLock::new();

/// Install the capture as the global subscriber and return its handle
///
/// # Panics
///
/// Panics if a different global subscriber was installed first.
pub fn init_test_capture() -> TestCapture {
    GLOBAL_CAPTURE
        .get_or_init(|| {
            let capture = TestCapture::default();
            tracing_subscriber::registry().with(capture.clone()).init();
            capture
        })
        .clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn captured(level: Level, fields: &[(&str, &str)]) -> CapturedEvent {
        CapturedEvent {
            level,
            fields: fields
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    #[test]
    fn test_empty_query_matches_everything() {
        assert!(EventQuery::new().matches(&captured(Level::TRACE, &[])));
    }

    #[test]
    fn test_query_requires_every_set_criterion() {
        let event = captured(
            Level::WARN,
            &[("op", "dispatch"), ("menu", "m1"), ("event", "rejected")],
        );

        assert!(EventQuery::new().menu("m1").event("rejected").matches(&event));
        assert!(!EventQuery::new().menu("m2").event("rejected").matches(&event));
        assert!(!EventQuery::new().level(Level::INFO).menu("m1").matches(&event));
        assert!(!EventQuery::new().command("SetTilt").matches(&event));
    }

    #[test]
    fn test_message_defaults_to_empty() {
        let event = captured(Level::INFO, &[("command", "SetTilt")]);
        assert_eq!(event.command(), Some("SetTilt"));
        assert_eq!(event.message(), "");
    }
}
