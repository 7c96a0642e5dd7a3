//! Push-channel protocol and WebSocket handling
//!
//! The browser and server exchange JSON envelopes of the form
//! `{ "event": <name>, "data": <payload> }` over a single WebSocket.
//! Replies go only to the requesting client.

use crate::error::VillagePulseError;
use crate::models::{LocationQuery, VillageRecord};
use crate::village;
use crate::web::AppState;
use anyhow::Result;
use axum::{
    extract::{
        ConnectInfo, State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use futures::{SinkExt, StreamExt};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use tracing::{debug, error, info, warn};

/// Events the browser may push to the server.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum ClientEvent {
    /// A user selected a location on the map
    CustomLocation(LocationQuery),
}

/// Events the server pushes back to the requesting client.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum ServerEvent {
    /// Synthesized data for the selected location; always one element
    VillageUpdate(Vec<VillageRecord>),
}

/// Dispatch one inbound text frame and produce the reply event.
pub async fn dispatch<R: RngExt + Send>(
    state: &AppState,
    text: &str,
    rng: &mut R,
) -> Result<ServerEvent> {
    let event: ClientEvent = serde_json::from_str(text)
        .map_err(|e| VillagePulseError::channel(format!("malformed event payload: {e}")))?;

    match event {
        ClientEvent::CustomLocation(query) => {
            debug!("Location selected: {} at {:?}", query.name, query.coords);
            let records =
                village::build_village_update(state.environment.as_ref(), &query, rng).await;
            Ok(ServerEvent::VillageUpdate(records))
        }
    }
}

/// WebSocket handler function for axum
pub async fn ws_handler(
    ws: WebSocketUpgrade,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    State(state): State<AppState>,
) -> impl IntoResponse {
    info!("New push-channel connection from {}", addr);
    ws.on_upgrade(move |socket| handle_socket(socket, state, addr))
}

/// Process one WebSocket connection to completion.
async fn handle_socket(socket: WebSocket, state: AppState, addr: SocketAddr) {
    let (mut sender, mut receiver) = socket.split();
    let mut rng = StdRng::from_rng(&mut rand::rng());

    while let Some(msg) = receiver.next().await {
        match msg {
            Ok(Message::Text(text)) => match dispatch(&state, &text, &mut rng).await {
                Ok(reply) => match serde_json::to_string(&reply) {
                    Ok(body) => {
                        if let Err(e) = sender.send(Message::Text(body.into())).await {
                            warn!("Failed to send reply to {}: {}", addr, e);
                            break;
                        }
                    }
                    Err(e) => error!("Failed to serialize reply for {}: {}", addr, e),
                },
                Err(e) => {
                    error!("Failed to process event from {}: {}", addr, e);
                    let error_msg = format!("error: {e}");
                    if let Err(e) = sender.send(Message::Text(error_msg.into())).await {
                        warn!("Failed to send error message to {}: {}", addr, e);
                        break;
                    }
                }
            },
            Ok(Message::Binary(_)) => {
                warn!(
                    "Received binary message from {}, but only text messages are supported",
                    addr
                );
            }
            Ok(Message::Ping(payload)) => {
                if let Err(e) = sender.send(Message::Pong(payload)).await {
                    warn!("Failed to send pong to {}: {}", addr, e);
                    break;
                }
            }
            Ok(Message::Pong(_)) => {}
            Ok(Message::Close(_)) => {
                info!("Push-channel connection from {} closed", addr);
                break;
            }
            Err(e) => {
                error!("WebSocket error from {}: {}", addr, e);
                break;
            }
        }
    }

    info!("Push-channel connection from {} terminated", addr);
}
