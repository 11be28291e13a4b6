use futures::stream::SplitSink;
use futures::{SinkExt, StreamExt};
use gloo_net::websocket::{Message, futures::WebSocket};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use huddle::broadcast::{DataPublisher, PublishOptions};
use huddle::data::ParticipantInfo;
use huddle::errors::BroadcastError;
use huddle::log;
use huddle::serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq)]
pub enum ConnectionState {
    Disconnected,
    Connecting,
    Connected,
    Error(String),
}

/// A message forwarded by the room relay, tagged with who published it.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(crate = "huddle::serde")]
pub struct ReceivedData {
    pub participant: Option<ParticipantInfo>,
    pub payload: String,
}

pub type DataCallback = Callback<(Vec<u8>, Option<ParticipantInfo>)>;

type Sink = SplitSink<WebSocket, Message>;

/// The local participant's end of the room data channel.
///
/// Cloning is cheap; all clones share the same socket.
#[derive(Clone)]
pub struct RoomHandle {
    pub state: ConnectionState,
    sender: Rc<RefCell<Option<Sink>>>,
}

impl PartialEq for RoomHandle {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state && Rc::ptr_eq(&self.sender, &other.sender)
    }
}

#[async_trait::async_trait(?Send)]
impl DataPublisher for RoomHandle {
    async fn publish_data(
        &self,
        data: Vec<u8>,
        options: PublishOptions,
    ) -> Result<(), BroadcastError> {
        // The relay socket is ordered and reliable, so both delivery modes map onto it.
        log::trace!(bytes = data.len(), reliable = options.reliable, "Publishing data");

        let mut write = self
            .sender
            .borrow_mut()
            .take()
            .ok_or(BroadcastError::ChannelClosed)?;

        let result = write
            .send(Message::Bytes(data))
            .await
            .map_err(|e| BroadcastError::Send(e.to_string()));

        *self.sender.borrow_mut() = Some(write);
        result
    }
}

fn decode_frame(message: Message) -> Option<(Vec<u8>, Option<ParticipantInfo>)> {
    match message {
        Message::Bytes(bytes) => Some((bytes, None)),
        Message::Text(text) => match huddle::serde_json::from_str::<ReceivedData>(&text) {
            Ok(received) => Some((received.payload.into_bytes(), received.participant)),
            Err(err) => {
                log::warn!(error = %err, "Dropping malformed relay frame");
                None
            }
        },
    }
}

/// Connects to the room relay at `url` for as long as the calling component is
/// mounted. Inbound messages are handed to `on_data`.
#[hook]
pub fn use_room(url: &str, on_data: DataCallback) -> RoomHandle {
    let state = use_state(|| ConnectionState::Disconnected);
    let sender: Rc<RefCell<Option<Sink>>> = use_mut_ref(|| None);
    let on_data_ref = use_mut_ref(|| on_data.clone());
    *on_data_ref.borrow_mut() = on_data;

    {
        let state = state.clone();
        let sender = sender.clone();

        use_effect_with(url.to_string(), move |url| {
            state.set(ConnectionState::Connecting);

            match WebSocket::open(url) {
                Ok(ws) => {
                    log::info!(url = url.as_str(), "Connected to room relay");
                    state.set(ConnectionState::Connected);

                    let (write, mut read) = ws.split();
                    *sender.borrow_mut() = Some(write);

                    let state = state.clone();
                    let sender = sender.clone();
                    spawn_local(async move {
                        while let Some(msg) = read.next().await {
                            match msg {
                                Ok(message) => {
                                    if let Some(received) = decode_frame(message) {
                                        let callback = on_data_ref.borrow().clone();
                                        callback.emit(received);
                                    }
                                }
                                Err(e) => {
                                    log::error!("Room relay error: {e:?}");
                                    state.set(ConnectionState::Error(format!(
                                        "WebSocket error: {e:?}"
                                    )));
                                    break;
                                }
                            }
                        }

                        *sender.borrow_mut() = None;
                        state.set(ConnectionState::Disconnected);
                    });
                }
                Err(e) => {
                    log::error!("Failed to connect to room relay: {e:?}");
                    state.set(ConnectionState::Error(format!("Failed to connect: {e:?}")));
                }
            }

            // Closing the write half closes the socket, which ends the read loop.
            move || {
                if let Some(mut write) = sender.borrow_mut().take() {
                    spawn_local(async move {
                        let _ = write.close().await;
                    });
                }
            }
        });
    }

    RoomHandle {
        state: (*state).clone(),
        sender,
    }
}
