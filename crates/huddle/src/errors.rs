//! Shared error types and utilities for the huddle project.
#[cfg(not(target_arch = "wasm32"))]
pub use color_eyre::Report;

#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[cfg(not(target_arch = "wasm32"))]
    #[error("Failed to install color_eyre")]
    ColorEyre(#[from] color_eyre::Report),
    #[error("Failed to install tracing-subscriber")]
    TracingSubscriber(#[from] Box<dyn std::error::Error + Send + Sync>),
}

/// Errors raised while handing a notification to the room data channel.
#[derive(Debug, thiserror::Error)]
pub enum BroadcastError {
    #[error("Failed to serialize notification: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("Failed to publish data: {0}")]
    Send(String),
    #[error("Room data channel closed")]
    ChannelClosed,
}

/// Errors raised while decoding an inbound data channel payload.
#[derive(Debug, thiserror::Error)]
pub enum PayloadError {
    #[error("Payload is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),
    #[error("Invalid notification payload: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised while loading the localization bundles.
#[derive(Debug, thiserror::Error)]
pub enum TranslationError {
    #[error("Invalid language tag: {0}")]
    LanguageTag(#[from] unic_langid::LanguageIdentifierError),
    #[error("Failed to load translations: {0}")]
    Embed(#[from] i18n_embed::I18nEmbedError),
}
