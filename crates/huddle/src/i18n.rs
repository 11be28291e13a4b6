//! Localization for huddle.
//!
//! Fluent bundles live under `i18n/<language>/huddle.ftl` and are embedded
//! at compile time with `rust-embed`. `en-US` is the fallback and reference
//! bundle; `i18n.toml` points `fl!` at it so message ids and their variables
//! are checked at compile time.
//!
//! ```ignore
//! let translations = Translations::for_language("fr-FR")?;
//! let label = translations.t("reactions-button", &[]);
//! let text = fl!(translations.loader(), "reaction-description", name = "Alice", emoji = "👍");
//! ```

use std::fmt;

use fluent::FluentArgs;
use i18n_embed::LanguageLoader;
use i18n_embed::fluent::FluentLanguageLoader;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

use crate::errors::TranslationError;
use crate::log;

pub use i18n_embed_fl::fl;

/// Fluent domain; every bundle is named `{DOMAIN}.ftl`.
const DOMAIN: &str = "huddle";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

pub fn fallback_language() -> LanguageIdentifier {
    "en-US".parse().expect("valid fallback language identifier")
}

/// Embedded language tags, sorted.
pub fn available_languages() -> Vec<String> {
    let mut languages = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    languages.sort();
    languages.dedup();
    languages
}

/// The user's preferred languages, most preferred first.
#[cfg(target_arch = "wasm32")]
pub fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

/// The user's preferred languages, most preferred first.
#[cfg(not(target_arch = "wasm32"))]
pub fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}

/// A negotiated set of Fluent bundles.
pub struct Translations {
    loader: FluentLanguageLoader,
}

impl Translations {
    /// Loads the best embedded match for `requested`, in preference order.
    /// The fallback bundle is always loaded behind it.
    pub fn negotiate(requested: &[LanguageIdentifier]) -> Result<Self, TranslationError> {
        let translations = Self::empty();
        let selected = i18n_embed::select(&translations.loader, &Localizations, requested)?;
        // Bidi isolation marks would end up around names and emoji in toasts.
        translations.loader.set_use_isolating(false);

        log::debug!(?requested, ?selected, "Loaded translations");
        Ok(translations)
    }

    /// Negotiates against a single BCP 47 tag such as `fr-FR`.
    pub fn for_language(tag: &str) -> Result<Self, TranslationError> {
        let language: LanguageIdentifier = tag.parse()?;
        Self::negotiate(&[language])
    }

    /// Negotiates against [`requested_languages`].
    pub fn from_requested() -> Result<Self, TranslationError> {
        Self::negotiate(&requested_languages())
    }

    /// A loader with no bundles; every lookup renders as its message id.
    pub fn empty() -> Self {
        Self {
            loader: FluentLanguageLoader::new(DOMAIN, fallback_language()),
        }
    }

    /// The loader behind these translations, for use with [`fl!`].
    pub fn loader(&self) -> &FluentLanguageLoader {
        &self.loader
    }

    pub fn language(&self) -> LanguageIdentifier {
        self.loader
            .current_languages()
            .into_iter()
            .next()
            .unwrap_or_else(fallback_language)
    }

    pub fn has(&self, id: &str) -> bool {
        self.loader.has(id)
    }

    /// Formats message `id` with `args`. A missing message renders as `id`.
    pub fn t(&self, id: &str, args: &[(&str, &str)]) -> String {
        if !self.loader.has(id) {
            log::warn!(language = %self.language(), id, "Missing translation");
            return id.to_string();
        }

        if args.is_empty() {
            return self.loader.get(id);
        }

        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, *value);
        }
        self.loader.get_args_fluent(id, Some(&fluent_args))
    }
}

impl PartialEq for Translations {
    fn eq(&self, other: &Self) -> bool {
        self.loader.current_languages() == other.loader.current_languages()
    }
}

impl fmt::Debug for Translations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Translations")
            .field("languages", &self.loader.current_languages())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn english() -> Translations {
        Translations::for_language("en-US").unwrap()
    }

    #[test]
    fn bundles_are_embedded() {
        let languages = available_languages();
        assert!(languages.iter().any(|l| l == "en-US"));
        assert!(languages.iter().any(|l| l == "fr-FR"));
    }

    #[test]
    fn every_bundle_has_the_reaction_messages() {
        for tag in available_languages() {
            let translations = Translations::for_language(&tag).unwrap();
            assert_eq!(translations.language().to_string(), tag);
            for id in ["default-name", "reaction-description", "reactions-button"] {
                assert!(translations.has(id), "{tag} is missing {id}");
            }
        }
    }

    #[test]
    fn formats_variables() {
        let text = english().t("reaction-description", &[("name", "Alice"), ("emoji", "👍")]);
        assert_eq!(text, "Alice reacted 👍");
    }

    #[test]
    fn fl_macro_uses_the_loader() {
        let translations = english();
        let text = fl!(translations.loader(), "reaction-description", name = "Bob", emoji = "🎉");
        assert_eq!(text, "Bob reacted 🎉");
    }

    #[test]
    fn missing_message_renders_its_id() {
        assert_eq!(english().t("no-such-message", &[]), "no-such-message");
        assert_eq!(Translations::empty().t("default-name", &[]), "default-name");
    }

    #[test]
    fn negotiates_french() {
        let french = Translations::for_language("fr-FR").unwrap();
        assert_eq!(french.language(), "fr-FR".parse::<LanguageIdentifier>().unwrap());
        assert_eq!(french.t("default-name", &[]), "Un participant");
    }

    #[test]
    fn unknown_language_falls_back_to_english() {
        let translations = Translations::for_language("de-DE").unwrap();
        assert_eq!(translations.language(), fallback_language());
        assert_eq!(translations.t("default-name", &[]), "A participant");
    }

    #[test]
    fn invalid_tag_is_an_error() {
        assert!(matches!(
            Translations::for_language("!!"),
            Err(TranslationError::LanguageTag(_))
        ));
    }
}
