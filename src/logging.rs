//! Browser Console Logging
//!
//! `tracing` events from the site and the content engine, forwarded to the
//! devtools console at the matching severity.

use std::fmt::{self, Write};

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::Registry;
use wasm_bindgen::JsValue;

/// Forwards events at or above `max_level` to `console.*`
pub struct ConsoleLayer {
    max_level: Level,
}

impl ConsoleLayer {
    pub fn new(max_level: Level) -> Self {
        Self { max_level }
    }
}

impl<S: Subscriber> Layer<S> for ConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let meta = event.metadata();
        // Levels compare by verbosity: TRACE is the greatest
        if *meta.level() > self.max_level {
            return;
        }

        let mut line = ConsoleLine::default();
        event.record(&mut line);
        let text = JsValue::from_str(&line.render(meta.target()));

        match *meta.level() {
            Level::ERROR => web_sys::console::error_1(&text),
            Level::WARN => web_sys::console::warn_1(&text),
            Level::INFO => web_sys::console::info_1(&text),
            _ => web_sys::console::debug_1(&text),
        }
    }
}

/// Message plus `key=value` fields of one event
#[derive(Default)]
struct ConsoleLine {
    message: String,
    fields: String,
}

impl ConsoleLine {
    fn render(&self, target: &str) -> String {
        format!("[{}] {}{}", target, self.message, self.fields)
    }
}

impl Visit for ConsoleLine {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            let _ = write!(self.fields, " {}={}", field.name(), value);
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{:?}", value);
        } else {
            let _ = write!(self.fields, " {}={:?}", field.name(), value);
        }
    }
}

/// Install the console subscriber; a second call is a no-op
pub fn init(max_level: Level) {
    let subscriber = Registry::default().with(ConsoleLayer::new(max_level));
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        web_sys::console::warn_1(&JsValue::from_str("[Logging] subscriber already installed"));
    }
}
