//! Platform adapter boundary (spec.md §4.9 / §6 Upward).
//!
//! Two surfaces meet here: the lifecycle hooks the [`crate::dispatcher::Dispatcher`]
//! calls *into* the host program ([`Platform`]), and the output-side
//! commands (set LEDs/color/rumble) the host program issues back *into* the
//! core. The latter cross an execution-context boundary in the upstream
//! firmware (host on a second core/task); here that boundary is a bounded
//! lock-free SPSC queue ([`crossbeam_queue::ArrayQueue`]) of [`Command`],
//! matching spec.md §5's "lock-free single-producer/single-consumer queue
//! (default depth 16)".

use crate::bt::Addr;
use crate::gamepad::VirtualGamepad;
use crate::vendor::ControllerType;

/// Out-of-band events the core reports outside the regular gamepad-data
/// stream.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum OobEvent {
    /// The controller's dedicated system/guide button was pressed, used by
    /// platforms to open a menu rather than feed it through as input.
    GamepadSystemButton,
}

/// Keys the stack queries the platform for via [`Platform::get_property`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum PropertyKey {
    /// If the platform returns `1`, every stored link key is dropped before
    /// the stack's first outgoing connect attempt (spec.md §7).
    DeleteStoredKeys,
}

/// Lifecycle and data hooks the [`crate::dispatcher::Dispatcher`] calls into
/// the host program. Every method has a no-op default so a host only
/// overrides what it cares about.
pub trait Platform: Send {
    /// Called once before the stack starts driving any Bluetooth activity.
    fn on_init(&mut self) {}

    /// Called once stack initialization (radio bring-up, GAP inquiry timer
    /// start) has finished.
    fn on_init_complete(&mut self) {}

    /// A device reached `L2capControlConnected`/`L2capInterruptConnected`
    /// (link established, not yet classified or ready).
    fn on_device_connected(&mut self, _device: Addr) {}

    /// A device's slot was freed (last L2CAP channel closed). Fires even
    /// for silently-declined incoming connections' eventual cleanup.
    fn on_device_disconnected(&mut self, _device: Addr) {}

    /// A device reached `DeviceReady`: classified, seated, and its parser's
    /// `setup` hook has run.
    fn on_device_ready(&mut self, _device: Addr, _controller_type: ControllerType) {}

    /// An inbound report was decoded; `gamepad` reflects only the fields
    /// with their `updated_states` bit set, unless `controller_type` is a
    /// full-report family.
    fn on_gamepad_data(&mut self, _device: Addr, _gamepad: &VirtualGamepad) {}

    /// An out-of-band event fired for `device`.
    fn on_oob_event(&mut self, _device: Addr, _event: OobEvent) {}

    /// Returns the integer value for `key`. Default: `0` (i.e.
    /// `DeleteStoredKeys` defaults to "do not delete").
    fn get_property(&self, _key: PropertyKey) -> i32 {
        0
    }
}

/// An output-side command the host program issues back into the core,
/// carried across the platform bridge queue.
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Command {
    /// `uni_hid_parser::set_player_leds` — bitmask, one bit per seat.
    SetPlayerLeds { device: Addr, leds: u8 },
    /// `uni_hid_parser::set_lightbar_color` — DualShock 4/5 RGB lightbar.
    SetLightbarColor { device: Addr, r: u8, g: u8, b: u8 },
    /// `uni_hid_parser::set_rumble`. `force` is 0..255, `duration_ms` the
    /// pulse length before the device auto-clears to zero force.
    SetRumble { device: Addr, force: u8, duration_ms: u16 },
    /// Drops the stored link key for `device`, marshaled through the BT
    /// stack's "execute on main thread" primitive when called off-loop.
    DeleteStoredKeys { device: Addr },
    /// Toggles whether new incoming connections are accepted.
    SetAcceptIncoming(bool),
}

/// Bounded SPSC bridge carrying [`Command`]s from the host's execution
/// context into the event loop. The event loop drains it lazily whenever a
/// gamepad-data event fires, per spec.md §5.
pub struct CommandQueue {
    inner: crossbeam_queue::ArrayQueue<Command>,
}

impl CommandQueue {
    /// Creates a queue with the given depth (spec.md default: 16).
    #[must_use]
    pub fn new(depth: usize) -> Self {
        Self { inner: crossbeam_queue::ArrayQueue::new(depth.max(1)) }
    }

    /// Pushes a command from the host side. Returns the command back on
    /// overflow (the queue does not block).
    pub fn push(&self, cmd: Command) -> Result<(), Command> {
        self.inner.push(cmd)
    }

    /// Pops the next command, drained from the event-loop side.
    pub fn pop(&self) -> Option<Command> {
        self.inner.pop()
    }

    /// Drains every currently queued command.
    pub fn drain(&self) -> Vec<Command> {
        let mut out = Vec::new();
        while let Some(cmd) = self.inner.pop() {
            out.push(cmd);
        }
        out
    }
}

impl std::fmt::Debug for CommandQueue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandQueue").field("len", &self.inner.len()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_platform_get_property_is_zero() {
        struct Noop;
        impl Platform for Noop {}
        assert_eq!(Noop.get_property(PropertyKey::DeleteStoredKeys), 0);
    }

    #[test]
    fn command_queue_overflow_returns_command() {
        let q = CommandQueue::new(1);
        let addr = Addr::ZERO;
        q.push(Command::SetPlayerLeds { device: addr, leds: 1 }).unwrap();
        let overflowed = q.push(Command::SetPlayerLeds { device: addr, leds: 2 });
        assert!(overflowed.is_err());
    }

    #[test]
    fn command_queue_drain_empties_in_order() {
        let q = CommandQueue::new(4);
        let addr = Addr::ZERO;
        q.push(Command::SetRumble { device: addr, force: 1, duration_ms: 10 }).unwrap();
        q.push(Command::SetRumble { device: addr, force: 2, duration_ms: 20 }).unwrap();
        let drained = q.drain();
        assert_eq!(drained.len(), 2);
        assert!(q.pop().is_none());
    }
}
