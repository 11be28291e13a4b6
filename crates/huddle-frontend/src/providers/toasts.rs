use gloo_timers::callback::Interval;
use yew::prelude::*;

use huddle::config::ToastSettings;
use huddle::id::ToastId;
use huddle::log;
use huddle::toast::{ToastContent, ToastQueue};

use crate::components::ToastRegion;

/// How often expired toasts are swept, in ms.
const SWEEP_INTERVAL_MS: u32 = 250;

/// Milliseconds since page load, on the same clock as animation frames.
pub fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|window| window.performance())
        .map(|performance| performance.now())
        .unwrap_or_default()
}

#[derive(Clone, PartialEq)]
pub struct ToastContext {
    pub push: Callback<ToastContent>,
    pub close: Callback<ToastId>,
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    #[prop_or_default]
    pub settings: ToastSettings,
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let queue = use_mut_ref(|| ToastQueue::new(props.settings));
    let force_update = use_force_update();

    let push = {
        let queue = queue.clone();
        let force_update = force_update.clone();
        Callback::from(move |content: ToastContent| {
            let id = queue.borrow_mut().add(content, now_ms());
            log::debug!(toast = %id, "Toast queued");
            force_update.force_update();
        })
    };

    let close = {
        let queue = queue.clone();
        let force_update = force_update.clone();
        Callback::from(move |id: ToastId| {
            if queue.borrow_mut().close(id).is_some() {
                force_update.force_update();
            }
        })
    };

    {
        let queue = queue.clone();
        let force_update = force_update.clone();
        use_effect_with((), move |_| {
            let interval = Interval::new(SWEEP_INTERVAL_MS, move || {
                if !queue.borrow_mut().expire(now_ms()).is_empty() {
                    force_update.force_update();
                }
            });

            move || drop(interval)
        });
    }

    let toasts = queue.borrow().visible().to_vec();
    let context = ToastContext {
        push,
        close: close.clone(),
    };

    html! {
        <ContextProvider<ToastContext> context={context}>
            {props.children.clone()}
            <ToastRegion toasts={toasts} on_close={close} />
        </ContextProvider<ToastContext>>
    }
}

#[hook]
pub fn use_toasts() -> ToastContext {
    use_context::<ToastContext>().expect("use_toasts must be used within a ToastProvider")
}
