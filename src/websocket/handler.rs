use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::Response,
};
use futures_util::{SinkExt, StreamExt};
use tokio::sync::mpsc;
use tracing::{debug, error, info};

use crate::types::{ClientMessage, Market, PriceUpdateData, ServerMessage};
use crate::AppState;

/// WebSocket upgrade handler.
pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<AppState>) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

async fn handle_socket(socket: WebSocket, state: AppState) {
    let (mut sender, mut receiver) = socket.split();

    // Channel carrying serialized messages to this client
    let (tx, mut rx) = mpsc::unbounded_channel::<String>();

    let client_id = state.hub.register(tx);
    info!("WebSocket client connected: {}", client_id);

    let send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sender.send(Message::Text(msg)).await.is_err() {
                break;
            }
        }
    });

    send_initial_data(&state, client_id).await;

    while let Some(result) = receiver.next().await {
        match result {
            Ok(Message::Text(text)) => {
                if let Ok(ClientMessage::Ping) = serde_json::from_str(&text) {
                    state.hub.send_to(client_id, &ServerMessage::Pong);
                } else {
                    debug!("Ignoring message from {}: {}", client_id, text);
                }
            }
            Ok(Message::Close(_)) => {
                info!("WebSocket client disconnecting: {}", client_id);
                break;
            }
            Ok(Message::Ping(_)) => {
                // Pong is handled automatically by axum
            }
            Err(e) => {
                error!("WebSocket error for {}: {}", client_id, e);
                break;
            }
            _ => {}
        }
    }

    state.hub.unregister(client_id);
    send_task.abort();
    info!("WebSocket client disconnected: {}", client_id);
}

/// Deliver the snapshot a fresh client needs to paint the dashboard:
/// current prices for both markets and the recent signal history.
async fn send_initial_data(state: &AppState, client_id: uuid::Uuid) {
    let (xauusd, btcusd) = tokio::join!(
        state.market_data.price(Market::XauUsd),
        state.market_data.price(Market::BtcUsd),
    );

    state.hub.send_to(
        client_id,
        &ServerMessage::PriceUpdate {
            data: PriceUpdateData {
                xauusd: Some(xauusd),
                btcusd: Some(btcusd),
            },
        },
    );

    let recent = state.signal_store.recent(10);
    if !recent.is_empty() {
        state
            .hub
            .send_to(client_id, &ServerMessage::InitialSignals { data: recent });
    }
}
