use yew::prelude::*;

use huddle::toast::{QueuedToast, reaction_description};

use crate::providers::{use_reactions, use_translation};

#[derive(Properties, PartialEq)]
pub struct ToastReactionProps {
    pub toast: QueuedToast,
    pub on_close: Callback<()>,
}

/// Announces a reaction from another participant and plays its floating emoji.
#[function_component(ToastReaction)]
pub fn toast_reaction(props: &ToastReactionProps) -> Html {
    let t = use_translation();
    let reactions = use_reactions();

    {
        let emoji = props.toast.content.emoji().to_string();
        let trigger = reactions.trigger.clone();
        use_effect_with(props.toast.id, move |_| {
            trigger.emit(emoji);
        });
    }

    let description = reaction_description(&t, &props.toast.content);
    let on_close = props.on_close.reform(|_: MouseEvent| ());

    html! {
        <div
            role="status"
            aria-live="polite"
            class="flex items-start justify-between gap-3 p-3.5 w-[150px] md:w-[260px] rounded-lg bg-gray-900 text-white shadow-lg"
        >
            <p class="text-sm text-pretty text-start">{ description }</p>
            <button
                class="text-gray-400 hover:text-white"
                aria-label="Dismiss"
                onclick={on_close}
            >
                { "×" }
            </button>
        </div>
    }
}
