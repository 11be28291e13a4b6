mod components;
mod hooks;
mod providers;

use yew::prelude::*;

use huddle::config::ReactionsConfig;
use huddle::log;

use components::ReactionsButton;
use hooks::ConnectionState;
use providers::{I18nProvider, ReactionsProvider, RoomProvider, ToastProvider, use_room_context};

/// The room relay the data channel connects to. Override at build time with
/// `HUDDLE_ROOM_URL`.
const ROOM_RELAY_URL: &str = match option_env!("HUDDLE_ROOM_URL") {
    Some(url) => url,
    None => "ws://127.0.0.1:3030/api/v1/room",
};

#[function_component(ControlBar)]
fn control_bar() -> Html {
    let room = use_room_context();

    let (dot, label) = match &room.state {
        ConnectionState::Connected => ("bg-green-500", "Connected".to_string()),
        ConnectionState::Connecting => ("bg-yellow-500", "Connecting...".to_string()),
        ConnectionState::Disconnected => ("bg-gray-500", "Disconnected".to_string()),
        ConnectionState::Error(err) => ("bg-red-500", format!("Error: {err}")),
    };

    html! {
        <div class="fixed bottom-0 inset-x-0 flex items-center justify-center gap-4 p-4 bg-gray-900">
            <div class="flex items-center space-x-2">
                <div class={classes!("w-3", "h-3", "rounded-full", dot)}></div>
                <span class="text-sm text-gray-300">{ label }</span>
            </div>
            <ReactionsButton />
        </div>
    }
}

#[function_component(App)]
fn app() -> Html {
    let config = use_memo((), |_| ReactionsConfig::default());

    html! {
        <I18nProvider>
            <ReactionsProvider timing={config.effect}>
                <ToastProvider settings={config.toast}>
                    <RoomProvider url={ROOM_RELAY_URL}>
                        <div class="min-h-screen bg-gray-950" />
                        <ControlBar />
                    </RoomProvider>
                </ToastProvider>
            </ReactionsProvider>
        </I18nProvider>
    }
}

fn main() {
    log::setup().expect("Failed to setup logging");
    yew::Renderer::<App>::new().render();
}
