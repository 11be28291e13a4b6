//! Publishing notifications to the other participants of a room.

use crate::data::NotificationPayload;
use crate::errors::BroadcastError;
use crate::log;

/// Delivery options for [`DataPublisher::publish_data`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PublishOptions {
    pub reliable: bool,
}

impl PublishOptions {
    pub const RELIABLE: PublishOptions = PublishOptions { reliable: true };
}

/// The room's data channel, as seen by the local participant.
///
/// Ordering and retransmission are up to the implementation; this crate only
/// asks for reliable delivery and never retries on its own.
#[async_trait::async_trait(?Send)]
pub trait DataPublisher {
    async fn publish_data(
        &self,
        data: Vec<u8>,
        options: PublishOptions,
    ) -> Result<(), BroadcastError>;
}

/// Encodes `payload` and hands it to `publisher` as a single reliable message.
/// Transport errors are returned as-is.
pub async fn publish_notification<P>(
    publisher: &P,
    payload: &NotificationPayload,
) -> Result<(), BroadcastError>
where
    P: DataPublisher + ?Sized,
{
    let data = payload.encode()?;
    publisher.publish_data(data, PublishOptions::RELIABLE).await
}

/// Broadcasts an emoji reaction to the room.
pub async fn send_reaction<P>(publisher: &P, emoji: &str) -> Result<(), BroadcastError>
where
    P: DataPublisher + ?Sized,
{
    let payload = NotificationPayload::reaction(emoji);
    match publish_notification(publisher, &payload).await {
        Ok(()) => {
            log::info!(emoji, "Reaction sent");
            Ok(())
        }
        Err(err) => {
            log::error!(emoji, error = %err, "Failed to send reaction");
            Err(err)
        }
    }
}
