//! WebSocket lifecycle for the synchronization channel.
//!
//! `connect` opens the channel and spawns one local task that pumps both
//! directions until the channel dies. There is no reconnection: close and
//! error are terminal states, and the user reloads to start over.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures become session status transitions; malformed
//! inbound text is logged and dropped so the receive loop never dies on
//! bad data.

use futures::StreamExt;
use futures::channel::mpsc;
use gloo_net::websocket::futures::WebSocket;
use gloo_net::websocket::Message;
use leptos::prelude::{RwSignal, Update};

use wire::ClientMessage;

use crate::net::sync::{self, UpdateSink};
use crate::net::{BootstrapMode, SyncConfig};
use crate::state::session::Session;

/// Outbound handle onto the socket task's send queue.
///
/// Cheap to clone; all clones feed the same channel. Sends are
/// fire-and-forget and fail only when the socket task has exited.
#[derive(Clone)]
pub struct WsSender {
    tx: mpsc::UnboundedSender<String>,
}

impl UpdateSink for WsSender {
    fn send(&mut self, msg: &ClientMessage) -> bool {
        self.tx.unbounded_send(wire::encode_client_message(msg)).is_ok()
    }
}

/// Open the synchronization channel, carrying the human-verification
/// token as the WebSocket subprotocol, and spawn the pump task.
///
/// Returns the outbound handle. Status transitions land on the session
/// signal; the caller never hears about the socket again.
pub fn connect(session: RwSignal<Session>, token: &str, config: SyncConfig) -> WsSender {
    let (tx, rx) = mpsc::unbounded::<String>();
    let ws = if token.is_empty() {
        WebSocket::open(&config.websocket_url)
    } else {
        WebSocket::open_with_protocols(&config.websocket_url, &[token])
    };
    match ws {
        Ok(ws) => {
            leptos::task::spawn_local(run(session, config, ws, rx));
        }
        Err(err) => {
            leptos::logging::warn!("websocket open failed: {err:?}");
            session.update(sync::on_error);
        }
    }
    WsSender { tx }
}

/// Pump the channel until it dies, dispatching inbound messages in
/// arrival order.
async fn run(
    session: RwSignal<Session>,
    config: SyncConfig,
    ws: WebSocket,
    mut rx: mpsc::UnboundedReceiver<String>,
) {
    session.update(sync::on_open);

    if config.bootstrap == BootstrapMode::HttpFetch {
        match crate::net::api::fetch_grid_snapshot(&config.pixels_url).await {
            Ok(body) => session.update(|s| sync::load_snapshot(s, &body)),
            Err(err) => leptos::logging::warn!("snapshot bootstrap failed: {err}"),
        }
    }

    let (mut ws_write, mut ws_read) = ws.split();

    // Forward queued outbound messages onto the socket.
    let send_task = async {
        use futures::SinkExt;
        while let Some(text) = rx.next().await {
            if ws_write.send(Message::Text(text)).await.is_err() {
                break;
            }
        }
    };

    // Dispatch inbound messages strictly in arrival order.
    let recv_task = async {
        while let Some(msg) = ws_read.next().await {
            match msg {
                Ok(Message::Text(text)) => match wire::decode_server_message(&text) {
                    Ok(decoded) => session.update(|s| sync::on_message(s, decoded)),
                    Err(err) => {
                        leptos::logging::warn!("ignoring malformed server message: {err}");
                    }
                },
                Ok(Message::Bytes(_)) => {}
                Err(err) => {
                    leptos::logging::warn!("websocket receive error: {err}");
                    session.update(sync::on_error);
                    break;
                }
            }
        }
    };

    futures::future::select(Box::pin(send_task), Box::pin(recv_task)).await;

    // Clean close, unless an error already ended the session.
    session.update(sync::on_close);
}
