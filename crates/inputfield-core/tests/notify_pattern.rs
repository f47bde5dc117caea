//! Integration tests for the property + signal notification pattern.

use std::sync::Arc;

use inputfield_core::property::Property;
use inputfield_core::signal::Signal;
use parking_lot::Mutex;

fn setup() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

struct Designator {
    value: Property<String>,
    value_changed: Signal<String>,
}

impl Designator {
    fn new() -> Self {
        Self {
            value: Property::new("€".to_string()),
            value_changed: Signal::new(),
        }
    }

    fn set_value(&self, value: &str) {
        if self.value.set(value.to_string()) {
            self.value_changed.emit(value.to_string());
        }
    }
}

#[test]
fn test_setter_emits_only_on_change() {
    setup();
    let designator = Designator::new();
    let seen = Arc::new(Mutex::new(Vec::new()));

    let seen_clone = seen.clone();
    designator.value_changed.connect(move |v| {
        seen_clone.lock().push(v.clone());
    });

    designator.set_value("€");
    designator.set_value("EUR");
    designator.set_value("EUR");
    designator.set_value("$");

    assert_eq!(*seen.lock(), vec!["EUR".to_string(), "$".to_string()]);
}

#[test]
fn test_blocked_signal_still_updates_property() {
    setup();
    let designator = Designator::new();
    let count = Arc::new(Mutex::new(0));

    let count_clone = count.clone();
    designator.value_changed.connect(move |_| {
        *count_clone.lock() += 1;
    });

    designator.value_changed.set_blocked(true);
    designator.set_value("USD");
    designator.value_changed.set_blocked(false);

    assert_eq!(designator.value.get(), "USD");
    assert_eq!(*count.lock(), 0);
}
