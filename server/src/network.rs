//! UDP transport: one socket, one receive task.
//!
//! The receive task decodes datagrams and posts intents into the
//! shared [`InputMailbox`]; the driver sends state snapshots back to
//! the last endpoint that sent a valid message. Malformed datagrams
//! and send failures are logged and otherwise ignored; they never
//! touch simulation state.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use game::input::InputMailbox;
use tokio::net::UdpSocket;
use tokio::task::JoinHandle;

use crate::protocol::{intent_from_input, ClientMessage, ServerMessage};

const UDP_BUFFER_SIZE: usize = 1024;

pub struct Transport {
    socket: Arc<UdpSocket>,
    last_client: Arc<Mutex<Option<SocketAddr>>>,
    reset_requested: Arc<AtomicBool>,
}

impl Transport {
    pub async fn bind(port: u16) -> std::io::Result<Self> {
        let socket = UdpSocket::bind(("0.0.0.0", port)).await?;
        log::info!("listening on UDP port {}", port);
        Ok(Self {
            socket: Arc::new(socket),
            last_client: Arc::new(Mutex::new(None)),
            reset_requested: Arc::new(AtomicBool::new(false)),
        })
    }

    /// Spawn the receive loop as an owned task. Dropping the handle
    /// via `abort` is the shutdown path; there is no callback holding
    /// a reference to freed state.
    pub fn spawn_receiver(&self, mailbox: InputMailbox) -> JoinHandle<()> {
        let socket = Arc::clone(&self.socket);
        let last_client = Arc::clone(&self.last_client);
        let reset_requested = Arc::clone(&self.reset_requested);

        tokio::spawn(async move {
            let mut buf = [0u8; UDP_BUFFER_SIZE];
            loop {
                let (len, src) = match socket.recv_from(&mut buf).await {
                    Ok(result) => result,
                    Err(e) => {
                        log::error!("recv error: {}", e);
                        continue;
                    }
                };

                let msg = match ClientMessage::decode(&buf[..len]) {
                    Ok(msg) => msg,
                    Err(e) => {
                        log::debug!("dropping malformed datagram from {}: {}", src, e);
                        continue;
                    }
                };

                *last_client.lock().unwrap() = Some(src);
                match intent_from_input(&msg) {
                    Some(intent) => mailbox.post(intent),
                    None => reset_requested.store(true, Ordering::Relaxed),
                }
            }
        })
    }

    /// Endpoint of the last valid sender, if any client has spoken.
    pub fn last_client(&self) -> Option<SocketAddr> {
        *self.last_client.lock().unwrap()
    }

    /// Consume a pending reset request.
    pub fn take_reset_request(&self) -> bool {
        self.reset_requested.swap(false, Ordering::Relaxed)
    }

    pub async fn send_state(&self, msg: &ServerMessage, target: SocketAddr) {
        let payload = match msg.encode() {
            Ok(json) => json,
            Err(e) => {
                log::error!("failed to encode state: {}", e);
                return;
            }
        };
        if let Err(e) = self.socket.send_to(payload.as_bytes(), target).await {
            log::warn!("send to {} failed: {}", target, e);
        }
    }
}
