//! Section document validation
//!
//! Checks the types of the fields each section knows about at the current
//! schema version. Unknown fields are accepted so newer clients can add
//! settings without breaking older stores.

use crate::constants::{APP_THEMES, APP_UNITS};
use cfb_domain::{ConfigSection, ValidationResult};
use serde_json::{Map, Value};

/// Validate a section document
pub fn validate_section(section: ConfigSection, document: &Value) -> ValidationResult {
    let Some(doc) = document.as_object() else {
        return ValidationResult::invalid([format!("{section} section must be a JSON object")]);
    };

    let mut checker = Checker {
        doc,
        messages: Vec::new(),
    };
    match section {
        ConfigSection::App => {
            checker.duration("refreshInterval");
            checker.string("language");
            checker.one_of("theme", &APP_THEMES);
            checker.one_of("units", &APP_UNITS);
        }
        ConfigSection::Platform => {
            checker.duration("widgetRefresh");
            checker.boolean("locationUpdates");
            checker.optional_string("pushRegistrationToken");
            checker.boolean("pushEnabled");
        }
        ConfigSection::Work => {
            checker.duration("alertWindow");
            checker.unsigned("escalationMinutes");
            checker.quiet_hours("quietHours");
            checker.string("timezone");
        }
    }
    ValidationResult::from_messages(checker.messages)
}

struct Checker<'a> {
    doc: &'a Map<String, Value>,
    messages: Vec<String>,
}

impl Checker<'_> {
    fn string(&mut self, key: &str) {
        if let Some(value) = self.doc.get(key) {
            if !value.is_string() {
                self.messages.push(format!("{key} must be a string"));
            }
        }
    }

    fn optional_string(&mut self, key: &str) {
        if let Some(value) = self.doc.get(key) {
            if !(value.is_string() || value.is_null()) {
                self.messages.push(format!("{key} must be a string or null"));
            }
        }
    }

    fn boolean(&mut self, key: &str) {
        if let Some(value) = self.doc.get(key) {
            if !value.is_boolean() {
                self.messages.push(format!("{key} must be a boolean"));
            }
        }
    }

    fn unsigned(&mut self, key: &str) {
        if let Some(value) = self.doc.get(key) {
            if !value.is_u64() {
                self.messages
                    .push(format!("{key} must be a non-negative integer"));
            }
        }
    }

    fn one_of(&mut self, key: &str, allowed: &[&str]) {
        if let Some(value) = self.doc.get(key) {
            match value.as_str() {
                Some(s) if allowed.contains(&s) => {}
                _ => self
                    .messages
                    .push(format!("{key} must be one of: {}", allowed.join(", "))),
            }
        }
    }

    fn duration(&mut self, key: &str) {
        if let Some(value) = self.doc.get(key) {
            let parsed = value
                .as_str()
                .map(humantime::parse_duration)
                .is_some_and(|r| r.is_ok());
            if !parsed {
                self.messages
                    .push(format!("{key} must be a duration such as \"15m\""));
            }
        }
    }

    fn quiet_hours(&mut self, key: &str) {
        let Some(value) = self.doc.get(key) else {
            return;
        };
        let valid = value.as_object().is_some_and(|hours| {
            ["start", "end"]
                .iter()
                .all(|k| hours.get(*k).and_then(Value::as_str).is_some_and(is_clock_time))
        });
        if !valid {
            self.messages
                .push(format!("{key} must have \"start\" and \"end\" times as HH:MM"));
        }
    }
}

/// `HH:MM` on a 24-hour clock
fn is_clock_time(s: &str) -> bool {
    let Some((hours, minutes)) = s.split_once(':') else {
        return false;
    };
    let in_range = |part: &str, max: u32| {
        part.len() == 2 && part.parse::<u32>().is_ok_and(|v| v <= max)
    };
    in_range(hours, 23) && in_range(minutes, 59)
}
