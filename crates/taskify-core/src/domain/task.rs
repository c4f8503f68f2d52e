//! Task record: the serialized unit of the shared snapshot.
//!
//! The app and the widget may run different schema versions, so a record
//! keeps the JSON object exactly as it was read. The known fields are read
//! leniently through accessors; the only writes are the two completion
//! flags, and only on records that are actually completed here. Every other
//! record is written back unchanged.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::TaskKey;

const KEY: &str = "key";
const TITLE: &str = "title";
const IS_COMPLETED: &str = "isCompleted";
const COMPLETED_FROM_WIDGET: &str = "completedFromWidget";

/// One task as stored in the shared snapshot.
///
/// Wire shape (camelCase):
/// `{"key": 1, "title": "Buy milk", "isCompleted": false, "completedFromWidget": true, ...}`
///
/// Any JSON object is a valid record; a non-object element is not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskRecord {
    fields: Map<String, Value>,
}

impl TaskRecord {
    pub fn new(key: TaskKey, title: impl Into<String>) -> Self {
        let mut fields = Map::new();
        fields.insert(KEY.to_string(), Value::from(key.value()));
        fields.insert(TITLE.to_string(), Value::from(title.into()));
        fields.insert(IS_COMPLETED.to_string(), Value::Bool(false));
        Self { fields }
    }

    pub fn completed(mut self) -> Self {
        self.fields
            .insert(IS_COMPLETED.to_string(), Value::Bool(true));
        self
    }

    /// Set an arbitrary field, e.g. one only a newer app version knows.
    pub fn with_field(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(name.to_string(), value.into());
        self
    }

    /// Integers, integral floats (`3.0`) and numeric strings (`"3"`) are
    /// accepted. Anything else, or no key at all, is `TaskKey::ABSENT`.
    pub fn key(&self) -> TaskKey {
        self.fields
            .get(KEY)
            .and_then(key_from_value)
            .map_or(TaskKey::ABSENT, TaskKey::new)
    }

    /// Display title. Scalars are stringified; anything else is empty.
    pub fn title(&self) -> Cow<'_, str> {
        match self.fields.get(TITLE) {
            Some(Value::String(s)) => Cow::Borrowed(s),
            Some(Value::Number(n)) => Cow::Owned(n.to_string()),
            Some(Value::Bool(b)) => Cow::Owned(b.to_string()),
            _ => Cow::Borrowed(""),
        }
    }

    pub fn is_completed(&self) -> bool {
        self.fields.get(IS_COMPLETED).is_some_and(lenient_bool)
    }

    /// Provenance flag. Only the action relay sets it.
    pub fn completed_from_widget(&self) -> bool {
        self.fields
            .get(COMPLETED_FROM_WIDGET)
            .is_some_and(lenient_bool)
    }

    /// Raw value of any field, known or not.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Mark as completed by a tap on the widget. Touches only the two flags.
    pub fn complete_from_widget(&mut self) {
        self.fields
            .insert(IS_COMPLETED.to_string(), Value::Bool(true));
        self.fields
            .insert(COMPLETED_FROM_WIDGET.to_string(), Value::Bool(true));
    }

    /// Has a key that can be addressed by a completion command.
    pub fn is_addressable(&self) -> bool {
        !self.key().is_absent()
    }
}

fn key_from_value(value: &Value) -> Option<i64> {
    match value {
        // i64::MAX as f64 rounds up to 2^63, which is out of range
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn lenient_bool(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::String(s) => s.eq_ignore_ascii_case("true"),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> TaskRecord {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn missing_fields_take_defaults() {
        let r = record(json!({ "key": 5 }));
        assert_eq!(r.key(), TaskKey::new(5));
        assert_eq!(r.title(), "");
        assert!(!r.is_completed());
        assert!(!r.completed_from_widget());
    }

    #[test]
    fn missing_or_fractional_key_is_absent() {
        let r = record(json!({ "title": "x" }));
        assert!(r.key().is_absent());
        assert!(!r.is_addressable());

        assert!(record(json!({ "key": 1.5 })).key().is_absent());
        assert!(record(json!({ "key": "uuid-7" })).key().is_absent());
    }

    #[test]
    fn integral_float_and_string_keys_are_accepted() {
        assert_eq!(record(json!({ "key": 3.0 })).key(), TaskKey::new(3));
        assert_eq!(record(json!({ "key": "8" })).key(), TaskKey::new(8));
    }

    #[test]
    fn key_of_two_pow_63_does_not_collide_with_i64_max() {
        let r = record(json!({ "key": 9_223_372_036_854_775_808.0_f64 }));
        assert!(r.key().is_absent());
        assert_eq!(record(json!({ "key": i64::MAX })).key(), TaskKey::new(i64::MAX));
    }

    #[test]
    fn non_scalar_title_reads_empty_but_is_kept() {
        let raw = json!({ "key": 2, "title": { "text": "Gym", "lang": "en" } });
        let r = record(raw.clone());
        assert_eq!(r.title(), "");
        assert_eq!(serde_json::to_value(&r).unwrap(), raw);
    }

    #[test]
    fn reencode_is_identical_for_any_object() {
        let raw = json!({
            "title": "legacy",
            "completedFromWidget": "yes",
            "dueDate": "2026-10-18",
            "priority": 2
        });
        assert_eq!(serde_json::to_value(record(raw.clone())).unwrap(), raw);
    }

    #[test]
    fn non_object_is_rejected() {
        assert!(serde_json::from_value::<TaskRecord>(json!(1)).is_err());
        assert!(serde_json::from_value::<TaskRecord>(json!([{}])).is_err());
    }

    #[test]
    fn completion_sets_only_the_two_flags() {
        let mut r = record(json!({ "key": "4", "title": 7, "extra": [1, 2] }));
        r.complete_from_widget();
        assert_eq!(
            serde_json::to_value(&r).unwrap(),
            json!({
                "key": "4",
                "title": 7,
                "extra": [1, 2],
                "isCompleted": true,
                "completedFromWidget": true
            })
        );
    }

    #[test]
    fn new_records_use_integer_keys() {
        let out = serde_json::to_value(TaskRecord::new(TaskKey::new(1), "a")).unwrap();
        assert_eq!(out, json!({ "key": 1, "title": "a", "isCompleted": false }));
    }
}
