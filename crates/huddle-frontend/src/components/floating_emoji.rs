use yew::create_portal;
use yew::prelude::*;

use huddle::effect::{self, Frame};
use huddle::overlay::ReactionBurst;

use crate::hooks::use_animation_frame;

const EMOJI_STYLE: &str = "font-size: 3rem; position: absolute; display: inline-block;";
const LAYER_STYLE: &str =
    "position: fixed; top: 0; left: 0; width: 100%; height: 100%; pointer-events: none; z-index: 9999;";

#[derive(Properties, PartialEq)]
pub struct FloatingEmojiProps {
    pub instance: effect::FloatingEmoji,
}

/// One emoji rising and fading out, driven by the display refresh loop.
#[function_component(FloatingEmoji)]
pub fn floating_emoji(props: &FloatingEmojiProps) -> Html {
    let model = use_mut_ref(|| props.instance.clone());
    let frame = use_state(|| Frame::HIDDEN);

    let on_frame = {
        let model = model.clone();
        let frame = frame.clone();
        Callback::from(move |timestamp: f64| {
            let tick = model.borrow_mut().tick(timestamp);
            frame.set(tick.frame);
            tick.keep_going
        })
    };
    use_animation_frame(on_frame);

    let position = model.borrow().position();
    let style = format!(
        "{EMOJI_STYLE} transform: {}; opacity: {};",
        frame.transform(position),
        frame.opacity
    );

    html! {
        <span style={style} aria-hidden="true">
            { props.instance.emoji() }
        </span>
    }
}

#[derive(Properties, PartialEq)]
pub struct EmojiPortalProps {
    pub burst: ReactionBurst,
}

/// Full-screen layer mounted on `document.body`, outside the normal layout.
#[function_component(EmojiPortal)]
pub fn emoji_portal(props: &EmojiPortalProps) -> Html {
    let Some(body) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body())
    else {
        return html! {};
    };

    let layer = html! {
        <div style={LAYER_STYLE}>
            {
                for props.burst.instances().iter().map(|instance| html! {
                    <FloatingEmoji key={instance.id().get()} instance={instance.clone()} />
                })
            }
        </div>
    };

    create_portal(layer, body.into())
}
