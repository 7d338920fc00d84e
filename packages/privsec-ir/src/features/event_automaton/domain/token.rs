//! Tokens emitted by the trace scanner

use serde::{Deserialize, Serialize};
use std::fmt;

/// Event families of the builder API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Audio,
    Geolocation,
    Contact,
    Message,
    Image,
}

impl EventKind {
    pub const ALL: [EventKind; 5] = [
        EventKind::Audio,
        EventKind::Geolocation,
        EventKind::Contact,
        EventKind::Message,
        EventKind::Image,
    ];

    /// Token label (`AudioEvent`)
    pub fn label(&self) -> &'static str {
        match self {
            EventKind::Audio => "AudioEvent",
            EventKind::Geolocation => "GeolocationEvent",
            EventKind::Contact => "ContactEvent",
            EventKind::Message => "MessageEvent",
            EventKind::Image => "ImageEvent",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.label() == label)
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Builder setters the fold understands
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SetterKind {
    Field,
    Comparator,
    FieldConstraints,
    Latitude,
    Longitude,
    Radius,
    PlaceName,
    ContactList,
    PhoneNumber,
    Path,
    SamplingMode,
    LocationPrecision,
    NotificationResponsiveness,
    OptimizationConstraints,
    /// Setter-shaped name outside the dispatch table
    Unrecognized(String),
}

static SETTER_TABLE: [(&str, SetterKind); 14] = [
    ("setField", SetterKind::Field),
    ("setComparator", SetterKind::Comparator),
    ("setFieldConstraints", SetterKind::FieldConstraints),
    ("setLatitude", SetterKind::Latitude),
    ("setLongitude", SetterKind::Longitude),
    ("setRadius", SetterKind::Radius),
    ("setPlaceName", SetterKind::PlaceName),
    ("setContactList", SetterKind::ContactList),
    ("setPhoneNumber", SetterKind::PhoneNumber),
    ("setPath", SetterKind::Path),
    ("setSamplingMode", SetterKind::SamplingMode),
    ("setLocationPrecision", SetterKind::LocationPrecision),
    ("setNotificationResponsiveness", SetterKind::NotificationResponsiveness),
    ("addOptimizationConstraints", SetterKind::OptimizationConstraints),
];

impl SetterKind {
    pub fn from_method_name(name: &str) -> Self {
        SETTER_TABLE
            .iter()
            .find(|(method, _)| *method == name)
            .map(|(_, kind)| kind.clone())
            .unwrap_or_else(|| SetterKind::Unrecognized(name.to_string()))
    }

    pub fn method_name(&self) -> &str {
        match self {
            SetterKind::Unrecognized(name) => name,
            known => SETTER_TABLE
                .iter()
                .find(|(_, kind)| kind == known)
                .map(|(method, _)| *method)
                .unwrap_or_default(),
        }
    }
}

/// `set*` or `addOptimizationConstraints`
pub fn is_setter_shaped(name: &str) -> bool {
    name.starts_with("set") || name == "addOptimizationConstraints"
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "setter", rename_all = "snake_case")]
pub enum TokenKey {
    /// Record separator: a new record starts
    Begin,
    /// Record separator: end of the method's trace
    End,
    EventType,
    Setter(SetterKind),
}

/// `(key, values)` in program order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub key: TokenKey,
    pub values: Vec<String>,
}

impl Token {
    pub fn begin() -> Self {
        Self {
            key: TokenKey::Begin,
            values: Vec::new(),
        }
    }

    pub fn end() -> Self {
        Self {
            key: TokenKey::End,
            values: Vec::new(),
        }
    }

    /// Event type token; an unknown builder type carries no value
    pub fn event_type(kind: Option<EventKind>) -> Self {
        Self {
            key: TokenKey::EventType,
            values: kind.map(|k| k.label().to_string()).into_iter().collect(),
        }
    }

    pub fn setter(kind: SetterKind, values: Vec<String>) -> Self {
        Self {
            key: TokenKey::Setter(kind),
            values,
        }
    }

    /// Setter token from a method name and literal texts
    pub fn named(method: &str, values: &[&str]) -> Self {
        Self::setter(
            SetterKind::from_method_name(method),
            values.iter().map(|v| v.to_string()).collect(),
        )
    }

    pub fn is_separator(&self) -> bool {
        matches!(self.key, TokenKey::Begin | TokenKey::End)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = match &self.key {
            TokenKey::Begin => "BEGIN",
            TokenKey::End => "END",
            TokenKey::EventType => "EventType",
            TokenKey::Setter(kind) => kind.method_name(),
        };
        if self.values.is_empty() {
            f.write_str(key)
        } else {
            write!(f, "{}: {}", key, self.values.join(" "))
        }
    }
}
