//! Data structures exchanged between participants over the room data channel.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, de};
use serde_json::Value;

use crate::errors::{BroadcastError, PayloadError};

/// The kinds of notification a participant can publish to the room.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationType {
    ParticipantJoined,
    HandRaised,
    ScreenRecordingStarted,
    ReactionReceived,
}

impl fmt::Display for NotificationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NotificationType::ParticipantJoined => "ParticipantJoined",
            NotificationType::HandRaised => "HandRaised",
            NotificationType::ScreenRecordingStarted => "ScreenRecordingStarted",
            NotificationType::ReactionReceived => "ReactionReceived",
        };
        f.write_str(name)
    }
}

fn empty_if_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Body of a [`NotificationType::ReactionReceived`] notification. A missing
/// or null emoji decodes to `""`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct ReactionData {
    #[serde(default, deserialize_with = "empty_if_null")]
    pub emoji: String,
}

/// A notification as it travels on the wire: `{ "type": ..., "data": ... }`.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "type", content = "data")]
pub enum NotificationPayload {
    ParticipantJoined,
    HandRaised,
    ScreenRecordingStarted,
    ReactionReceived(ReactionData),
}

/// The wire shape before the body is checked against the notification type.
#[derive(Deserialize)]
struct WirePayload {
    #[serde(rename = "type")]
    kind: NotificationType,
    #[serde(default)]
    data: Value,
}

impl TryFrom<WirePayload> for NotificationPayload {
    type Error = serde_json::Error;

    fn try_from(wire: WirePayload) -> Result<Self, Self::Error> {
        Ok(match wire.kind {
            NotificationType::ParticipantJoined => NotificationPayload::ParticipantJoined,
            NotificationType::HandRaised => NotificationPayload::HandRaised,
            NotificationType::ScreenRecordingStarted => NotificationPayload::ScreenRecordingStarted,
            // A reaction without a body still shows, with a blank emoji.
            NotificationType::ReactionReceived => NotificationPayload::ReactionReceived(
                match wire.data {
                    Value::Null => ReactionData::default(),
                    data => serde_json::from_value(data)?,
                },
            ),
        })
    }
}

impl<'de> Deserialize<'de> for NotificationPayload {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        WirePayload::deserialize(deserializer)?
            .try_into()
            .map_err(de::Error::custom)
    }
}

impl NotificationPayload {
    pub fn reaction(emoji: impl Into<String>) -> Self {
        NotificationPayload::ReactionReceived(ReactionData {
            emoji: emoji.into(),
        })
    }

    pub fn kind(&self) -> NotificationType {
        match self {
            NotificationPayload::ParticipantJoined => NotificationType::ParticipantJoined,
            NotificationPayload::HandRaised => NotificationType::HandRaised,
            NotificationPayload::ScreenRecordingStarted => NotificationType::ScreenRecordingStarted,
            NotificationPayload::ReactionReceived(_) => NotificationType::ReactionReceived,
        }
    }

    /// Serialize to the UTF-8 JSON bytes handed to the data channel.
    pub fn encode(&self) -> Result<Vec<u8>, BroadcastError> {
        Ok(serde_json::to_vec(self)?)
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, PayloadError> {
        let text = std::str::from_utf8(bytes)?;
        Ok(serde_json::from_str(text)?)
    }
}

/// The remote participant a notification came from, as known to the room.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct ParticipantInfo {
    pub identity: String,
    #[serde(default)]
    pub name: Option<String>,
}

impl ParticipantInfo {
    pub fn new(identity: impl Into<String>, name: Option<String>) -> Self {
        Self {
            identity: identity.into(),
            name,
        }
    }

    /// The display name, if the participant has a non-empty one.
    pub fn display_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reaction_wire_shape() {
        let payload = NotificationPayload::reaction("🎉");
        let value: serde_json::Value = serde_json::from_slice(&payload.encode().unwrap()).unwrap();

        assert_eq!(
            value,
            serde_json::json!({ "type": "ReactionReceived", "data": { "emoji": "🎉" } })
        );
    }

    #[test]
    fn missing_emoji_decodes_to_empty_string() {
        let payload =
            NotificationPayload::decode(br#"{"type":"ReactionReceived","data":{}}"#).unwrap();
        assert_eq!(payload, NotificationPayload::reaction(""));
    }

    #[test]
    fn undefined_emoji_decodes_to_empty_string() {
        for wire in [
            br#"{"type":"ReactionReceived"}"#.as_slice(),
            br#"{"type":"ReactionReceived","data":null}"#.as_slice(),
            br#"{"type":"ReactionReceived","data":{"emoji":null}}"#.as_slice(),
        ] {
            assert_eq!(
                NotificationPayload::decode(wire).unwrap(),
                NotificationPayload::reaction(""),
                "{}",
                String::from_utf8_lossy(wire)
            );
        }
    }

    #[test]
    fn reaction_with_wrong_body_type_is_rejected() {
        assert!(matches!(
            NotificationPayload::decode(br#"{"type":"ReactionReceived","data":{"emoji":5}}"#),
            Err(PayloadError::Json(_))
        ));
    }

    #[test]
    fn decode_rejects_garbage() {
        assert!(matches!(
            NotificationPayload::decode(b"not json"),
            Err(PayloadError::Json(_))
        ));
        assert!(matches!(
            NotificationPayload::decode(&[0xff, 0xfe, 0x00]),
            Err(PayloadError::Utf8(_))
        ));
    }

    #[test]
    fn other_notification_kinds_decode() {
        let payload = NotificationPayload::decode(br#"{"type":"HandRaised"}"#).unwrap();
        assert_eq!(payload.kind(), NotificationType::HandRaised);
        assert_eq!(payload.kind().to_string(), "HandRaised");
    }

    #[test]
    fn empty_display_name_is_treated_as_missing() {
        assert_eq!(ParticipantInfo::new("p1", Some(String::new())).display_name(), None);
        assert_eq!(ParticipantInfo::new("p1", None).display_name(), None);
        assert_eq!(
            ParticipantInfo::new("p1", Some("Alice".into())).display_name(),
            Some("Alice")
        );
    }
}
