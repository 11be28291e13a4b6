use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::Node;
use yew::prelude::*;

use huddle::async_callback;
use huddle::broadcast::send_reaction;
use huddle::picker::{PointerTarget, ReactionPicker};

use crate::providers::{use_reactions, use_room_context, use_translation};

const TOGGLE_CLASSES: &str = "h-10 w-10 flex items-center justify-center rounded-md bg-gray-800 hover:bg-gray-700 text-white text-xl focus:outline-none focus:ring-2 focus:ring-blue-500";
const TOGGLE_SELECTED_CLASSES: &str = "h-10 w-10 flex items-center justify-center rounded-md bg-blue-600 hover:bg-blue-700 text-white text-xl focus:outline-none focus:ring-2 focus:ring-blue-500";
const PALETTE_CLASSES: &str = "absolute bottom-full left-1/2 -translate-x-1/2 mb-2 flex gap-2 p-2 rounded-lg bg-gray-800 shadow-lg z-50";
const EMOJI_CLASSES: &str =
    "text-2xl p-1 rounded cursor-pointer border-none bg-transparent text-white hover:bg-gray-700";

/// Whether a DOM event happened inside the element behind `container`.
fn pointer_target(container: &NodeRef, event: &Event) -> PointerTarget {
    let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
    container
        .cast::<Node>()
        .map(|node| node.contains(target.as_ref()))
        .unwrap_or(false)
        .into()
}

/// Control bar button that opens the reaction palette and broadcasts the
/// chosen emoji to the room.
#[function_component(ReactionsButton)]
pub fn reactions_button() -> Html {
    let t = use_translation();
    let room = use_room_context();
    let reactions = use_reactions();
    let picker = use_state(ReactionPicker::default);
    let container_ref = use_node_ref();

    // Close on any pointer-down outside the control while the palette is open.
    {
        let picker = picker.clone();
        let container_ref = container_ref.clone();
        use_effect_with(picker.is_open(), move |is_open| {
            let listener = is_open
                .then(|| web_sys::window().and_then(|window| window.document()))
                .flatten()
                .map(|document| {
                    EventListener::new(&document, "pointerdown", move |event| {
                        let mut next = (*picker).clone();
                        next.on_pointer_down(pointer_target(&container_ref, event));
                        if next != *picker {
                            picker.set(next);
                        }
                    })
                });

            move || drop(listener)
        });
    }

    let on_toggle = {
        let picker = picker.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*picker).clone();
            next.toggle();
            picker.set(next);
        })
    };

    let publish = async_callback!([room] |emoji: String| {
        // Outcome is logged by `send_reaction`; nothing to recover locally.
        let _ = send_reaction(&room, &emoji).await;
    });

    let on_select = {
        let picker = picker.clone();
        Callback::from(move |emoji: String| {
            let mut next = (*picker).clone();
            next.close();
            picker.set(next);

            publish.emit(emoji.clone());
            reactions.trigger.emit(emoji);
        })
    };

    let label = t.t("reactions-button", &[]);
    let toggle_classes = if picker.is_open() {
        TOGGLE_SELECTED_CLASSES
    } else {
        TOGGLE_CLASSES
    };

    html! {
        <div ref={container_ref} class="relative">
            <button
                class={toggle_classes}
                aria-label={label.clone()}
                aria-pressed={picker.is_open().to_string()}
                title={label}
                onclick={on_toggle}
            >
                { "☺" }
            </button>

            {
                if picker.is_open() {
                    html! {
                        <div class={PALETTE_CLASSES} role="menu">
                            {
                                for picker.palette().iter().map(|emoji| {
                                    let on_select = on_select.clone();
                                    let value = emoji.clone();
                                    html! {
                                        <button
                                            key={emoji.clone()}
                                            class={EMOJI_CLASSES}
                                            role="menuitem"
                                            onclick={Callback::from(move |_: MouseEvent| on_select.emit(value.clone()))}
                                        >
                                            { emoji }
                                        </button>
                                    }
                                })
                            }
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
