use axum::extract::ws::{Message, WebSocket};
use tracing::{debug, info};

/// Handle a realtime client. No route publishes events over the gateway
/// yet, so the loop only drains inbound frames to keep the connection
/// open until the peer closes it.
pub async fn handle_connection(mut socket: WebSocket) {
    info!("realtime client connected");

    while let Some(Ok(frame)) = socket.recv().await {
        match frame {
            Message::Close(_) => break,
            other => debug!("ignoring realtime frame: {:?}", other),
        }
    }

    info!("realtime client disconnected");
}
