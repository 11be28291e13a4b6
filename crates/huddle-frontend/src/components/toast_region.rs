use yew::prelude::*;

use huddle::id::ToastId;
use huddle::toast::{QueuedToast, ToastKind};

use crate::components::ToastReaction;

#[derive(Properties, PartialEq)]
pub struct ToastRegionProps {
    pub toasts: Vec<QueuedToast>,
    pub on_close: Callback<ToastId>,
}

#[function_component(ToastRegion)]
pub fn toast_region(props: &ToastRegionProps) -> Html {
    if props.toasts.is_empty() {
        return html! {};
    }

    html! {
        <div class="fixed bottom-20 right-4 z-50 flex flex-col gap-3" aria-label="Notifications">
            {
                for props.toasts.iter().map(|toast| {
                    let id = toast.id;
                    let on_close = props.on_close.reform(move |_: ()| id);
                    match toast.content.kind {
                        ToastKind::Reaction => html! {
                            <ToastReaction key={id.get()} toast={toast.clone()} on_close={on_close} />
                        },
                    }
                })
            }
        </div>
    }
}
