//! Description templates
//!
//! One sentence per `(event type, field name)` case. Attribute values are
//! printed without their quotes. A record with no matching case, or missing an
//! attribute its case needs, renders the unmatched notice.

use tracing::debug;

use crate::features::event_automaton::domain::{EventKind, EventRecord};
use crate::shared::constants::rendering::UNMATCHED_NOTICE;

fn bare(value: &Option<String>) -> Option<String> {
    value.as_ref().map(|v| v.replace('"', ""))
}

/// Canonical sentence for a closed record
pub fn render_record(record: &EventRecord) -> String {
    match describe(record) {
        Some(text) => text,
        None => {
            debug!("Unmatched event shape: {:?}", record);
            UNMATCHED_NOTICE.to_string()
        }
    }
}

fn describe(record: &EventRecord) -> Option<String> {
    let field = bare(&record.field_name)?;
    let comparator = bare(&record.comparator);
    let threshold = bare(&record.threshold);

    match (record.event_type?, field.as_str()) {
        (EventKind::Audio, field) => Some(format!(
            "The app checks when {} is {} {}dB.",
            field, comparator?, threshold?
        )),

        (EventKind::Geolocation, "latlon") => {
            let comparator = comparator?;
            if let Some(place) = bare(&record.place_name) {
                Some(format!("The app checks when the user is {} {}.", comparator, place))
            } else if comparator == "updated" {
                Some("The app checks when location is updated.".to_string())
            } else {
                Some(format!("The app checks when the user {} a geofence.", comparator))
            }
        }
        (EventKind::Geolocation, "speed") => Some(format!(
            "The app checks when speed is {} {}m/s.",
            comparator?, threshold?
        )),
        (EventKind::Geolocation, "city") => {
            Some("The app checks when the user enters a new city.".to_string())
        }
        (EventKind::Geolocation, "postcode") => {
            Some("The app checks when post code is updated.".to_string())
        }
        (EventKind::Geolocation, "direction") => {
            Some("The app checks when the user makes a turn.".to_string())
        }
        (EventKind::Geolocation, "distance") => Some(format!(
            "The app checks when distance to destination is {} {}m.",
            comparator?, threshold?
        )),

        (EventKind::Contact, "caller") => Some(if comparator? == "from" {
            "The app checks when caller is from a certain phone number.".to_string()
        } else {
            "The app checks when caller is in a list.".to_string()
        }),
        (EventKind::Contact, "calls") => Some("The app checks when new calls arrive.".to_string()),
        (EventKind::Contact, "emails") => {
            Some("The app checks when the contacts' emails are in a list.".to_string())
        }
        (EventKind::Contact, "contacts") => {
            Some("The app checks when contact lists are updated.".to_string())
        }
        (EventKind::Contact, "logs") => Some(
            "The app checks when call logs contain a record from a certain phone number."
                .to_string(),
        ),

        (EventKind::Message, "sender") => Some(if comparator? == "from" {
            "The app checks when sender is from a certain phone number.".to_string()
        } else {
            "The app checks when sender is in a list.".to_string()
        }),
        (EventKind::Message, "messages") => {
            Some("The app checks when new messages arrive.".to_string())
        }
        (EventKind::Message, "messageLists") => {
            Some("The app checks when text messages are updated.".to_string())
        }

        (EventKind::Image, "mediaLibrary") => {
            Some("The app checks when media library is updated.".to_string())
        }
        (EventKind::Image, "fileOrFolder") => {
            Some("The app checks when the file or folder content is updated.".to_string())
        }
        (EventKind::Image, "images") => {
            Some("The app checks when the image has a human face.".to_string())
        }

        _ => None,
    }
}
