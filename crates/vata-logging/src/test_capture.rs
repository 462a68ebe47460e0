//! In-memory event capture for tests
//!
//! [`init_test_capture`] installs a layer that records every event with its
//! fields rendered as strings. Tests then look events up by `op` and `event`.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, OnceLock};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;
use vata_core_types::schema::{FIELD_EVENT, FIELD_OP};

/// One recorded event
///
/// `op` and `event` are lifted out of `fields`; everything else, including
/// `component`, stays in `fields` in its `Display` or `Debug` rendering.
#[derive(Clone, Debug)]
pub struct CapturedEvent {
    pub level: Level,
    pub op: Option<String>,
    pub event: Option<String>,
    pub fields: HashMap<String, String>,
}

impl CapturedEvent {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    fn is(&self, op: &str, event: &str) -> bool {
        self.op.as_deref() == Some(op) && self.event.as_deref() == Some(event)
    }
}

#[derive(Default)]
struct Fields(HashMap<String, String>);

// Integers and bools fall back to `record_debug`, which renders them plainly.
impl Visit for Fields {
    fn record_str(&mut self, field: &Field, value: &str) {
        let name = field.name().to_string();
        self.0.insert(name, value.to_string());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        let name = field.name().to_string();
        self.0.insert(name, format!("{:?}", value));
    }
}

/// Layer appending every event to a buffer shared with a [`TestCapture`]
pub struct TestCaptureLayer {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl TestCaptureLayer {
    pub fn new() -> (Self, TestCapture) {
        let events = Arc::new(Mutex::new(Vec::new()));
        let handle = TestCapture {
            events: Arc::clone(&events),
        };
        (Self { events }, handle)
    }
}

impl<S> Layer<S> for TestCaptureLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = Fields::default();
        event.record(&mut visitor);
        let Fields(mut fields) = visitor;

        let captured = CapturedEvent {
            level: *event.metadata().level(),
            op: fields.remove(FIELD_OP),
            event: fields.remove(FIELD_EVENT),
            fields,
        };
        if let Ok(mut events) = self.events.lock() {
            events.push(captured);
        }
    }
}

/// Handle to the captured events
#[derive(Clone)]
pub struct TestCapture {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl TestCapture {
    /// Everything captured so far, in emission order
    pub fn events(&self) -> Vec<CapturedEvent> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }

    /// Events whose `op` and `event` fields both match
    pub fn matching(&self, op: &str, event: &str) -> Vec<CapturedEvent> {
        self.events()
            .into_iter()
            .filter(|e| e.is(op, event))
            .collect()
    }
}

static GLOBAL_CAPTURE: OnceLock<TestCapture> = OnceLock::new();

/// Install the capture layer as the global subscriber (once) and return its handle
///
/// All tests in one binary share the buffer, so use an `op` name or field
/// value unique to the test when querying.
///
/// # Example
///
/// ```
/// use vata_logging::log_op_start;
/// use vata_logging::test_capture::init_test_capture;
///
/// let capture = init_test_capture();
/// log_op_start!("doc_example_op");
/// assert_eq!(capture.matching("doc_example_op", "start").len(), 1);
/// ```
pub fn init_test_capture() -> TestCapture {
    GLOBAL_CAPTURE
        .get_or_init(|| {
            let (layer, capture) = TestCaptureLayer::new();
            tracing_subscriber::registry().with(layer).try_init().ok();
            capture
        })
        .clone()
}
