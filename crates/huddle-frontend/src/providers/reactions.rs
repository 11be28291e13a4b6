use std::collections::HashMap;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use huddle::config::EffectTiming;
use huddle::effect::Viewport;
use huddle::id::OverlayId;
use huddle::overlay::ReactionOverlays;

use crate::components::EmojiPortal;

/// Fallback when the window size cannot be read.
const DEFAULT_VIEWPORT: Viewport = Viewport {
    width: 1280.0,
    height: 720.0,
};

fn current_viewport() -> Viewport {
    let Some(window) = web_sys::window() else {
        return DEFAULT_VIEWPORT;
    };

    let width = window.inner_width().ok().and_then(|w| w.as_f64());
    let height = window.inner_height().ok().and_then(|h| h.as_f64());
    match (width, height) {
        (Some(width), Some(height)) => Viewport::new(width, height),
        _ => DEFAULT_VIEWPORT,
    }
}

#[derive(Clone, PartialEq)]
pub struct ReactionsContext {
    /// Starts a new floating emoji overlay for the given emoji.
    pub trigger: Callback<String>,
}

#[derive(Properties, PartialEq)]
pub struct ReactionsProviderProps {
    #[prop_or_default]
    pub timing: EffectTiming,
    pub children: Children,
}

/// Owns every reaction overlay on screen. Each overlay removes itself once its
/// last emoji has faded; pending removals are cancelled on unmount.
#[function_component(ReactionsProvider)]
pub fn reactions_provider(props: &ReactionsProviderProps) -> Html {
    let overlays = use_mut_ref(|| ReactionOverlays::new(props.timing));
    let timers = use_mut_ref(HashMap::<OverlayId, Timeout>::new);
    let force_update = use_force_update();

    let trigger = {
        let overlays = overlays.clone();
        let timers = timers.clone();
        let force_update = force_update.clone();

        Callback::from(move |emoji: String| {
            let mut random = js_sys::Math::random;
            let id = overlays
                .borrow_mut()
                .spawn(&emoji, current_viewport(), &mut random);
            // Includes slack for the first animation frame, where each emoji
            // starts its clock.
            let removal_ms = overlays.borrow().timing().removal_delay_ms();

            let remove = {
                let overlays = overlays.clone();
                let force_update = force_update.clone();
                move || {
                    overlays.borrow_mut().remove(id);
                    force_update.force_update();
                }
            };

            let mut timers = timers.borrow_mut();
            // A Timeout must not be dropped from inside its own callback, so
            // fired timers are pruned here instead.
            timers.retain(|id, _| overlays.borrow().contains(*id));
            timers.insert(id, Timeout::new(removal_ms.ceil() as u32, remove));

            force_update.force_update();
        })
    };

    {
        let overlays = overlays.clone();
        let timers = timers.clone();
        use_effect_with((), move |_| {
            move || {
                timers.borrow_mut().clear();
                overlays.borrow_mut().clear();
            }
        });
    }

    let context = ReactionsContext { trigger };
    let portals: Html = overlays
        .borrow()
        .iter()
        .map(|burst| html! { <EmojiPortal key={burst.id().get()} burst={burst.clone()} /> })
        .collect();

    html! {
        <ContextProvider<ReactionsContext> context={context}>
            {for props.children.iter()}
            {portals}
        </ContextProvider<ReactionsContext>>
    }
}

#[hook]
pub fn use_reactions() -> ReactionsContext {
    use_context::<ReactionsContext>().expect("use_reactions must be used within ReactionsProvider")
}
