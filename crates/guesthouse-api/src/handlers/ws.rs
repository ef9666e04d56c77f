//! Admin change-feed WebSocket handler.

use axum::extract::ws::{Message, WebSocket};
use axum::extract::{Query, State, WebSocketUpgrade};
use axum::response::Response;
use futures::{SinkExt, StreamExt};
use tokio::sync::broadcast::error::RecvError;
use tracing::{info, warn};

use guesthouse_realtime::message::ChangeMessage;

use crate::dto::request::WsQuery;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/admin/ws?token={session token}
///
/// Streams booking change envelopes to an authenticated dashboard. The
/// client reacts by refetching; no booking data travels on this channel.
pub async fn ws_upgrade(
    State(state): State<AppState>,
    ws: WebSocketUpgrade,
    Query(query): Query<WsQuery>,
) -> Result<Response, ApiError> {
    // Authenticate before upgrade.
    state.admin_service.authorize(&query.token)?;

    Ok(ws.on_upgrade(move |socket| handle_ws_connection(state, socket)))
}

/// Handles an established WebSocket connection.
async fn handle_ws_connection(state: AppState, socket: WebSocket) {
    let mut events = state.feed.subscribe();
    let (mut ws_tx, mut ws_rx) = socket.split();

    info!("Admin change-feed connection established");

    loop {
        tokio::select! {
            event = events.recv() => match event {
                Ok(event) => {
                    let envelope = ChangeMessage::from(event);
                    let text = match serde_json::to_string(&envelope) {
                        Ok(text) => text,
                        Err(e) => {
                            warn!(error = %e, "Failed to serialize change message");
                            continue;
                        }
                    };
                    if ws_tx.send(Message::Text(text.into())).await.is_err() {
                        break;
                    }
                }
                // A lagged dashboard missed events; it refetches on the
                // next message anyway, so just keep going.
                Err(RecvError::Lagged(_)) => continue,
                Err(RecvError::Closed) => break,
            },
            inbound = ws_rx.next() => match inbound {
                Some(Ok(Message::Close(_))) | None => break,
                Some(Err(e)) => {
                    warn!(error = %e, "WebSocket error");
                    break;
                }
                Some(Ok(_)) => {}
            },
        }
    }

    info!("Admin change-feed connection closed");
}
