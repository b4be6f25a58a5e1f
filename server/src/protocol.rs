//! Wire messages: JSON datagrams between client and server.
//!
//! The simulation core never sees these types; datagrams are decoded
//! here and converted to [`InputIntent`], snapshots are encoded here
//! on the way out.

use game::input::InputIntent;
use game::simulation::Snapshot;
use serde::{Deserialize, Serialize};

/// Messages from the client. Absent flags default to false, so a
/// client may send only the keys it holds.
#[derive(Deserialize, Debug, Clone)]
#[serde(tag = "type")]
pub enum ClientMessage {
    #[serde(rename = "input")]
    Input {
        #[serde(default)]
        move_forward: bool,
        #[serde(default)]
        move_backward: bool,
        #[serde(default)]
        move_left: bool,
        #[serde(default)]
        move_right: bool,
        #[serde(default)]
        jump: bool,
    },
    /// Restart the session at spawn (the world is kept).
    #[serde(rename = "reset")]
    Reset,
}

/// Messages to the client.
#[derive(Serialize, Debug, Clone)]
#[serde(tag = "type")]
pub enum ServerMessage {
    #[serde(rename = "state")]
    State {
        x: f32,
        y: f32,
        z: f32,
        vx: f32,
        vy: f32,
        vz: f32,
        airborne: bool,
        won: bool,
    },
}

impl ClientMessage {
    pub fn decode(payload: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(payload)
    }
}

impl ServerMessage {
    pub fn encode(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

pub fn intent_from_input(msg: &ClientMessage) -> Option<InputIntent> {
    match *msg {
        ClientMessage::Input {
            move_forward,
            move_backward,
            move_left,
            move_right,
            jump,
        } => Some(InputIntent {
            move_forward,
            move_backward,
            move_left,
            move_right,
            jump_requested: jump,
        }),
        ClientMessage::Reset => None,
    }
}

impl From<Snapshot> for ServerMessage {
    fn from(snap: Snapshot) -> Self {
        ServerMessage::State {
            x: snap.position.x,
            y: snap.position.y,
            z: snap.position.z,
            vx: snap.velocity.x,
            vy: snap.velocity.y,
            vz: snap.velocity.z,
            airborne: snap.airborne,
            won: snap.won,
        }
    }
}
