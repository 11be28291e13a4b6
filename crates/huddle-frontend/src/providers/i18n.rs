use std::rc::Rc;

use yew::prelude::*;

use huddle::i18n::Translations;
use huddle::log;

/// Loads `language` when given, otherwise negotiates against
/// `navigator.languages`.
fn load_translations(language: Option<&str>) -> Translations {
    let loaded = match language {
        Some(tag) => Translations::for_language(tag),
        None => Translations::from_requested(),
    };

    loaded.unwrap_or_else(|err| {
        log::error!(language, error = %err, "Failed to load translations");
        Translations::empty()
    })
}

#[derive(Properties, PartialEq)]
pub struct I18nProviderProps {
    /// A BCP 47 tag such as `fr-FR` that overrides the browser's languages.
    #[prop_or_default]
    pub language: Option<AttrValue>,
    pub children: Children,
}

#[function_component(I18nProvider)]
pub fn i18n_provider(props: &I18nProviderProps) -> Html {
    let translations = use_memo(props.language.clone(), |language| {
        load_translations(language.as_deref())
    });

    html! {
        <ContextProvider<Rc<Translations>> context={translations}>
            {props.children.clone()}
        </ContextProvider<Rc<Translations>>>
    }
}

#[hook]
pub fn use_translation() -> Rc<Translations> {
    use_context::<Rc<Translations>>().expect("use_translation must be used within an I18nProvider")
}
