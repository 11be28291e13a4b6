//! Turning inbound data channel messages into UI notifications.

use crate::data::{NotificationPayload, ParticipantInfo};
use crate::errors::PayloadError;
use crate::log;
use crate::toast::ToastContent;

/// Decodes a message received from `sender`.
///
/// Reactions become a [`ToastContent`] for the toast region (which also fires
/// the floating emoji). Other notification types are handled elsewhere and
/// yield `None`.
pub fn dispatch(
    data: &[u8],
    sender: Option<&ParticipantInfo>,
) -> Result<Option<ToastContent>, PayloadError> {
    let payload = NotificationPayload::decode(data)?;

    match payload {
        NotificationPayload::ReactionReceived(reaction) => {
            log::debug!(
                sender = sender.map(|p| p.identity.as_str()),
                emoji = reaction.emoji.as_str(),
                "Reaction received"
            );
            Ok(Some(ToastContent::reaction(sender.cloned(), reaction.emoji)))
        }
        other => {
            log::trace!(kind = %other.kind(), "Ignoring notification");
            Ok(None)
        }
    }
}
