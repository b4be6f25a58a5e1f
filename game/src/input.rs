//! Per-tick input intents and the network-to-simulation handoff slot.

use std::sync::{Arc, Mutex};

/// What the client wants this tick. Movement flags are level signals
/// (held keys); `jump_requested` is an edge signal that is consumed by
/// exactly one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputIntent {
    pub move_forward: bool,
    pub move_backward: bool,
    pub move_left: bool,
    pub move_right: bool,
    pub jump_requested: bool,
}

/// Single-slot mailbox between the network task and the simulation
/// loop. The writer overwrites the slot with the latest intent; the
/// reader copies it once per tick.
///
/// A jump edge posted between two reads survives overwrites until it
/// is taken, so a jump packet is never silently dropped by a later
/// movement-only packet.
#[derive(Clone, Default)]
pub struct InputMailbox {
    slot: Arc<Mutex<InputIntent>>,
}

impl InputMailbox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the latest intent, preserving an unconsumed jump edge.
    pub fn post(&self, intent: InputIntent) {
        let mut slot = self.slot.lock().unwrap();
        let pending_jump = slot.jump_requested;
        *slot = intent;
        slot.jump_requested |= pending_jump;
    }

    /// Copy the current intent and consume the jump edge. Movement
    /// flags stay latched until the next `post`.
    pub fn take(&self) -> InputIntent {
        let mut slot = self.slot.lock().unwrap();
        let intent = *slot;
        slot.jump_requested = false;
        intent
    }
}
