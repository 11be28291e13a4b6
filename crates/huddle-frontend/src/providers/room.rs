use yew::prelude::*;

use huddle::data::ParticipantInfo;
use huddle::dispatch::dispatch;
use huddle::log;

use crate::hooks::{RoomHandle, use_room};
use crate::providers::use_toasts;

#[derive(Properties, PartialEq)]
pub struct RoomProviderProps {
    pub url: AttrValue,
    pub children: Children,
}

/// Joins the room relay and routes inbound notifications to the toast region.
/// Must be rendered inside a [`ToastProvider`](crate::providers::ToastProvider).
#[function_component(RoomProvider)]
pub fn room_provider(props: &RoomProviderProps) -> Html {
    let toasts = use_toasts();

    let on_data = Callback::from(move |(data, sender): (Vec<u8>, Option<ParticipantInfo>)| {
        match dispatch(&data, sender.as_ref()) {
            Ok(Some(content)) => toasts.push.emit(content),
            Ok(None) => {}
            Err(err) => log::warn!(error = %err, "Ignoring undecodable room data"),
        }
    });

    let room = use_room(&props.url, on_data);

    html! {
        <ContextProvider<RoomHandle> context={room}>
            {props.children.clone()}
        </ContextProvider<RoomHandle>>
    }
}

#[hook]
pub fn use_room_context() -> RoomHandle {
    use_context::<RoomHandle>().expect("use_room_context must be used within a RoomProvider")
}
