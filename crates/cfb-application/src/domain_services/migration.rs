//! Schema migration engine
//!
//! Each configuration section has a chain of pure steps, one per schema
//! version bump. Restoring an older backup runs every step from the
//! backup's version up to [`CURRENT_SCHEMA_VERSION`] in order. Fields
//! missing from an old document receive defaults; present fields are
//! carried over, renamed or reformatted.
//!
//! | Section | v1 → v2 | v2 → v3 |
//! |---------|---------|---------|
//! | app | `refreshIntervalMs` → `refreshInterval`, default `language` | `darkMode` → `theme`, default `units` |
//! | platform | `widgetRefreshMs` → `widgetRefresh`, default `locationUpdates` | `pushToken` → `pushRegistrationToken`, default `pushEnabled` |
//! | work | `alertWindowMs` → `alertWindow`, default `escalationMinutes` | default `quietHours`, `timezone` |

use cfb_domain::ConfigSection;
use cfb_domain::constants::{CURRENT_SCHEMA_VERSION, MIN_SUPPORTED_SCHEMA_VERSION};
use cfb_domain::error::{Error, Result};
use serde_json::{Map, Value, json};

type Document = Map<String, Value>;

/// One version bump for one section
type MigrationStep = fn(Document) -> Document;

/// Steps indexed by source version: `steps[0]` migrates v1 to v2
static APP_STEPS: [MigrationStep; 2] = [app_v1_to_v2, app_v2_to_v3];
static PLATFORM_STEPS: [MigrationStep; 2] = [platform_v1_to_v2, platform_v2_to_v3];
static WORK_STEPS: [MigrationStep; 2] = [work_v1_to_v2, work_v2_to_v3];

/// Migrates configuration documents between schema versions
pub struct SchemaMigrator;

impl SchemaMigrator {
    /// Check that documents of `version` can be brought to the current schema
    pub fn ensure_supported(version: u32) -> Result<()> {
        if version < MIN_SUPPORTED_SCHEMA_VERSION {
            return Err(Error::migration(format!(
                "Schema version {version} predates the oldest supported version {MIN_SUPPORTED_SCHEMA_VERSION}"
            )));
        }
        if version > CURRENT_SCHEMA_VERSION {
            return Err(Error::migration(format!(
                "Schema version {version} is newer than the current version {CURRENT_SCHEMA_VERSION}"
            )));
        }
        Ok(())
    }

    /// Bring `document` from `from_version` to the current schema
    ///
    /// A document already at the current version is returned unchanged.
    pub fn migrate_section(
        section: ConfigSection,
        document: Value,
        from_version: u32,
    ) -> Result<Value> {
        Self::ensure_supported(from_version)?;
        if from_version == CURRENT_SCHEMA_VERSION {
            return Ok(document);
        }

        let Value::Object(mut doc) = document else {
            return Err(Error::migration(format!(
                "{section} section is not a structured document"
            )));
        };

        let steps = Self::steps(section);
        let first = (from_version - MIN_SUPPORTED_SCHEMA_VERSION) as usize;
        for step in &steps[first..] {
            doc = step(doc);
        }
        Ok(Value::Object(doc))
    }

    fn steps(section: ConfigSection) -> &'static [MigrationStep] {
        match section {
            ConfigSection::App => &APP_STEPS,
            ConfigSection::Platform => &PLATFORM_STEPS,
            ConfigSection::Work => &WORK_STEPS,
        }
    }
}

/// Format a millisecond count as a compact duration string
///
/// Uses the largest of `d`, `h`, `m`, `s` that divides the value exactly and
/// falls back to `ms`: `900000` → `"15m"`, `5400000` → `"90m"`, `1500` → `"1500ms"`.
pub fn format_compact_duration(millis: u64) -> String {
    const UNITS: [(u64, &str); 4] = [
        (86_400_000, "d"),
        (3_600_000, "h"),
        (60_000, "m"),
        (1_000, "s"),
    ];

    if millis == 0 {
        return "0s".to_string();
    }
    UNITS
        .iter()
        .find(|(size, _)| millis % size == 0)
        .map(|(size, unit)| format!("{}{unit}", millis / size))
        .unwrap_or_else(|| format!("{millis}ms"))
}

// ============================================================================
// Field helpers
// ============================================================================

/// Replace a legacy millisecond field with a compact duration field
fn reformat_duration(doc: &mut Document, legacy: &str, current: &str, default: &str) {
    let legacy_value = doc.remove(legacy);
    if doc.contains_key(current) {
        return;
    }
    let formatted = legacy_value
        .as_ref()
        .and_then(Value::as_u64)
        .map(format_compact_duration)
        .unwrap_or_else(|| default.to_string());
    doc.insert(current.to_string(), Value::String(formatted));
}

fn rename_field(doc: &mut Document, legacy: &str, current: &str) {
    if let Some(value) = doc.remove(legacy) {
        doc.entry(current.to_string()).or_insert(value);
    }
}

fn default_field(doc: &mut Document, key: &str, value: Value) {
    doc.entry(key.to_string()).or_insert(value);
}

// ============================================================================
// App section
// ============================================================================

fn app_v1_to_v2(mut doc: Document) -> Document {
    reformat_duration(&mut doc, "refreshIntervalMs", "refreshInterval", "15m");
    default_field(&mut doc, "language", json!("en"));
    doc
}

fn app_v2_to_v3(mut doc: Document) -> Document {
    if let Some(dark) = doc.remove("darkMode").as_ref().and_then(Value::as_bool) {
        let theme = if dark { "dark" } else { "light" };
        default_field(&mut doc, "theme", json!(theme));
    }
    default_field(&mut doc, "theme", json!("system"));
    default_field(&mut doc, "units", json!("metric"));
    doc
}

// ============================================================================
// Platform section
// ============================================================================

fn platform_v1_to_v2(mut doc: Document) -> Document {
    reformat_duration(&mut doc, "widgetRefreshMs", "widgetRefresh", "30m");
    default_field(&mut doc, "locationUpdates", json!(false));
    doc
}

fn platform_v2_to_v3(mut doc: Document) -> Document {
    rename_field(&mut doc, "pushToken", "pushRegistrationToken");
    default_field(&mut doc, "pushEnabled", json!(true));
    doc
}

// ============================================================================
// Work section
// ============================================================================

fn work_v1_to_v2(mut doc: Document) -> Document {
    reformat_duration(&mut doc, "alertWindowMs", "alertWindow", "1h");
    default_field(&mut doc, "escalationMinutes", json!(30));
    doc
}

fn work_v2_to_v3(mut doc: Document) -> Document {
    default_field(
        &mut doc,
        "quietHours",
        json!({ "start": "22:00", "end": "07:00" }),
    );
    default_field(&mut doc, "timezone", json!("UTC"));
    doc
}
