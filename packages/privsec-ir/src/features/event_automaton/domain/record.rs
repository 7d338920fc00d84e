//! Event records

use serde::Serialize;

use super::token::{EventKind, SetterKind};

/// One delimited group of builder settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EventRecord {
    pub event_type: Option<EventKind>,
    pub field_name: Option<String>,
    pub comparator: Option<String>,
    pub threshold: Option<String>,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub radius: Option<String>,
    pub place_name: Option<String>,
    pub lists: Option<String>,
    pub caller: Option<String>,
    pub path: Option<String>,
    pub duration: Option<String>,
    pub interval: Option<String>,
    pub location_precision: Option<String>,
    pub recurrence: Option<String>,
    pub optimization_constraints: Vec<String>,
}

impl EventRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one setter token; false for names outside the dispatch table
    pub fn apply_setter(&mut self, kind: &SetterKind, values: &[String]) -> bool {
        let first = values.first().cloned();
        match kind {
            SetterKind::Field => self.field_name = first,
            SetterKind::Comparator => self.comparator = first,
            SetterKind::FieldConstraints => self.threshold = first,
            SetterKind::Latitude => self.latitude = first,
            SetterKind::Longitude => self.longitude = first,
            SetterKind::Radius => self.radius = first,
            SetterKind::PlaceName => self.place_name = first,
            SetterKind::ContactList => self.lists = first,
            SetterKind::PhoneNumber => self.caller = first,
            SetterKind::Path => self.path = first,
            SetterKind::LocationPrecision => self.location_precision = first,
            SetterKind::NotificationResponsiveness => self.recurrence = first,
            SetterKind::SamplingMode => self.apply_sampling_mode(values),
            SetterKind::OptimizationConstraints => {
                self.optimization_constraints.extend(values.iter().cloned())
            }
            SetterKind::Unrecognized(_) => return false,
        }
        true
    }

    /// Audio: duration | interval, duration
    /// Geolocation: interval | interval, locationPrecision
    fn apply_sampling_mode(&mut self, values: &[String]) {
        match (self.event_type, values) {
            (Some(EventKind::Audio), [duration]) => self.duration = Some(duration.clone()),
            (Some(EventKind::Audio), [interval, duration]) => {
                self.interval = Some(interval.clone());
                self.duration = Some(duration.clone());
            }
            (Some(EventKind::Geolocation), [interval]) => self.interval = Some(interval.clone()),
            (Some(EventKind::Geolocation), [interval, precision]) => {
                self.interval = Some(interval.clone());
                self.location_precision = Some(precision.clone());
            }
            _ => {}
        }
    }
}

/// A closed record and its rendered sentence
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventDescription {
    pub record: EventRecord,
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_sampling_mode_audio() {
        let mut record = EventRecord {
            event_type: Some(EventKind::Audio),
            ..EventRecord::default()
        };
        record.apply_setter(&SetterKind::SamplingMode, &strings(&["1000L"]));
        assert_eq!(record.duration.as_deref(), Some("1000L"));
        assert_eq!(record.interval, None);

        record.apply_setter(&SetterKind::SamplingMode, &strings(&["500L", "2000L"]));
        assert_eq!(record.interval.as_deref(), Some("500L"));
        assert_eq!(record.duration.as_deref(), Some("2000L"));
    }

    #[test]
    fn test_sampling_mode_geolocation() {
        let mut record = EventRecord {
            event_type: Some(EventKind::Geolocation),
            ..EventRecord::default()
        };
        record.apply_setter(&SetterKind::SamplingMode, &strings(&["10000L", "\"building\""]));
        assert_eq!(record.interval.as_deref(), Some("10000L"));
        assert_eq!(record.location_precision.as_deref(), Some("\"building\""));
        assert_eq!(record.duration, None);
    }

    #[test]
    fn test_sampling_mode_without_event_type_is_ignored() {
        let mut record = EventRecord::new();
        record.apply_setter(&SetterKind::SamplingMode, &strings(&["1L", "2L"]));
        assert_eq!(record, EventRecord::new());
    }

    #[test]
    fn test_optimization_constraints_append() {
        let mut record = EventRecord::new();
        record.apply_setter(&SetterKind::OptimizationConstraints, &strings(&["a", "b"]));
        record.apply_setter(&SetterKind::OptimizationConstraints, &strings(&["c"]));
        assert_eq!(record.optimization_constraints, strings(&["a", "b", "c"]));
    }

    #[test]
    fn test_unrecognized_setter_reports_false() {
        let mut record = EventRecord::new();
        assert!(!record.apply_setter(&SetterKind::Unrecognized("setX".to_string()), &[]));
        assert!(record.apply_setter(&SetterKind::Comparator, &strings(&["\"gt\""])));
        assert_eq!(record.comparator.as_deref(), Some("\"gt\""));
    }
}
