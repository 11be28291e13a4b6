//! Toast contents and the queue of toasts currently shown.

use crate::config::ToastSettings;
use crate::data::ParticipantInfo;
use crate::i18n::{Translations, fl};
use crate::id::{IdAllocator, ToastId, ToastMarker};
use crate::log;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Reaction,
}

/// What a toast announces: who did it, and the message (the emoji, for reactions).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastContent {
    pub kind: ToastKind,
    pub participant: Option<ParticipantInfo>,
    pub message: Option<String>,
}

impl ToastContent {
    pub fn reaction(participant: Option<ParticipantInfo>, emoji: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Reaction,
            participant,
            message: Some(emoji.into()),
        }
    }

    /// The emoji to animate; a missing message becomes a blank glyph.
    pub fn emoji(&self) -> &str {
        self.message.as_deref().unwrap_or_default()
    }
}

/// Renders "{name} reacted {emoji}" in the active locale. A missing or empty
/// participant name falls back to the localized default name.
pub fn reaction_description(translations: &Translations, content: &ToastContent) -> String {
    let loader = translations.loader();
    let name = match content.participant.as_ref().and_then(|p| p.display_name()) {
        Some(name) => name.to_string(),
        None => fl!(loader, "default-name"),
    };

    fl!(loader, "reaction-description", name = name, emoji = content.emoji())
}

#[derive(Debug, Clone, PartialEq)]
pub struct QueuedToast {
    pub id: ToastId,
    pub content: ToastContent,
    pub created_at: f64,
}

/// Visible toasts, oldest first. Each toast closes itself after the timeout,
/// and the oldest ones are evicted when more than `max_visible` are queued.
#[derive(Debug, Clone, Default)]
pub struct ToastQueue {
    settings: ToastSettings,
    ids: IdAllocator<ToastMarker>,
    toasts: Vec<QueuedToast>,
}

impl ToastQueue {
    pub fn new(settings: ToastSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    pub fn settings(&self) -> &ToastSettings {
        &self.settings
    }

    pub fn add(&mut self, content: ToastContent, now: f64) -> ToastId {
        let id = self.ids.next_id();
        self.toasts.push(QueuedToast {
            id,
            content,
            created_at: now,
        });

        let overflow = self.toasts.len().saturating_sub(self.settings.max_visible);
        if overflow > 0 {
            let evicted: Vec<ToastId> = self.toasts.drain(..overflow).map(|t| t.id).collect();
            log::debug!(?evicted, "Evicted toasts over the visible limit");
        }

        id
    }

    /// Closes a toast. Closing an unknown id is a no-op.
    pub fn close(&mut self, id: ToastId) -> Option<QueuedToast> {
        let index = self.toasts.iter().position(|t| t.id == id)?;
        Some(self.toasts.remove(index))
    }

    /// Removes every toast whose timeout has elapsed at `now`.
    pub fn expire(&mut self, now: f64) -> Vec<ToastId> {
        let timeout = self.settings.timeout_ms;
        let mut expired = Vec::new();
        self.toasts.retain(|toast| {
            let alive = now - toast.created_at < timeout;
            if !alive {
                expired.push(toast.id);
            }
            alive
        });
        expired
    }

    pub fn visible(&self) -> &[QueuedToast] {
        &self.toasts
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}
