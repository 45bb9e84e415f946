//! Per-vendor report parsers (spec.md §4.5).
//!
//! Each controller family gets its own submodule providing up to five
//! hooks: `setup`, `init_report`, `parse_usage`, `parse_raw`, and the
//! output-side `set_player_leds`/`set_lightbar_color`/`set_rumble`. Rather
//! than storing function pointers on [`crate::device::Connection`] (spec.md
//! §9's "avoid virtual dispatch... if the target language can use a closed
//! enum"), hooks are plain functions dispatched by a `match` on
//! `controller_type` in this module's top-level functions, and per-device
//! state lives in the [`ParserState`] tagged union rather than an opaque
//! byte buffer.
//!
//! Hooks that return `Vec<u8>` hand the caller (the dispatcher) a payload
//! to send on the device's control channel; the dispatcher is responsible
//! for the actual `l2cap_send`/enqueue-on-busy mechanics (spec.md §4.6).

pub mod ds3;
pub mod ds4;
pub mod ds5;
pub mod generic;
pub mod icade;
pub mod switch;
pub mod usage;
pub mod wii;
pub mod xboxone;

use crate::device::Connection;
use crate::error::Result;
use crate::hid::Field;
use crate::vendor::ControllerType;

/// Per-connection parser scratch: a tagged union with one variant per
/// family that needs more state than "replay the HID descriptor"
/// (spec.md §9). Reassignment is illegal — classification happens once, at
/// `Connection::set_vid_pid` / heuristic classification time.
#[derive(Clone, Debug)]
pub enum ParserState {
    /// Descriptor-driven families with no extra state: Android, Nimbus,
    /// SmartTVRemote, OUYA, EightBitDo, Generic, Apple, MobileTouch,
    /// SteamController(V2), Xbox360, XInput* families, keyboard/mouse
    /// fallbacks.
    None,
    Ds3(ds3::Ds3State),
    Ds4(ds4::Ds4State),
    Ds5(ds5::Ds5State),
    Switch(switch::SwitchState),
    Wii(wii::WiiState),
    XboxOne(xboxone::XboxOneState),
    Icade(icade::IcadeState),
}

impl Default for ParserState {
    fn default() -> Self {
        Self::None
    }
}

/// Constructs the correct [`ParserState`] variant for a freshly classified
/// `controller_type`. Called exactly once, when a `Connection` first learns
/// its type; calling it again on an already-assigned scratch is the
/// "reassignment is illegal" violation spec.md §3 describes, so callers
/// must check `parser_scratch` is still [`ParserState::None`] first (or, for
/// heuristic reclassification in place, replace the whole connection).
#[must_use]
pub fn initial_state(controller_type: ControllerType, vid: u16, pid: u16) -> ParserState {
    match controller_type {
        ControllerType::PS3 => ParserState::Ds3(ds3::Ds3State::default()),
        ControllerType::PS4 | ControllerType::XInputPS4 => ParserState::Ds4(ds4::Ds4State::default()),
        ControllerType::PS5 => ParserState::Ds5(ds5::Ds5State::default()),
        ControllerType::SwitchPro
        | ControllerType::SwitchJoyConLeft
        | ControllerType::SwitchJoyConRight
        | ControllerType::SwitchJoyConPair => ParserState::Switch(switch::SwitchState::default()),
        ControllerType::Wii => ParserState::Wii(wii::WiiState::default()),
        ControllerType::XboxOne => ParserState::XboxOne(xboxone::XboxOneState::default()),
        ControllerType::ICade => ParserState::Icade(icade::IcadeState::for_vid_pid(vid, pid)),
        _ => ParserState::None,
    }
}

/// Runs the family's `setup` hook once, right after classification and
/// seat assignment. Returns a handshake payload to send on the control
/// channel, if the family needs one.
pub fn setup(conn: &mut Connection) -> Option<Vec<u8>> {
    match conn.controller_type {
        ControllerType::PS3 => ds3::setup(conn),
        ControllerType::PS4 | ControllerType::XInputPS4 => ds4::setup(conn),
        ControllerType::PS5 => ds5::setup(conn),
        ControllerType::SwitchPro
        | ControllerType::SwitchJoyConLeft
        | ControllerType::SwitchJoyConRight
        | ControllerType::SwitchJoyConPair => switch::setup(conn),
        ControllerType::Wii => wii::setup(conn),
        ControllerType::XboxOne => xboxone::setup(conn),
        _ => None,
    }
}

/// Runs before each inbound input report. Most families clear
/// `updated_states`; full-report families are a no-op here since the mask
/// was set once and never cleared.
pub fn init_report(conn: &mut Connection) {
    if conn.controller_type.is_full_report() {
        if conn.virtual_gamepad.updated_states.is_empty() {
            conn.virtual_gamepad.mark_all_updated();
        }
        return;
    }
    conn.virtual_gamepad.clear_updated();
}

/// Feeds one decoded HID field to the assigned family's `parse_usage` hook,
/// for devices with a usable descriptor.
pub fn parse_usage(conn: &mut Connection, field: &Field) {
    match conn.controller_type {
        ControllerType::XboxOne => xboxone::parse_usage(conn, field),
        ControllerType::Android
        | ControllerType::Nimbus
        | ControllerType::SmartTVRemote
        | ControllerType::OUYA
        | ControllerType::EightBitDo
        | ControllerType::Generic
        | ControllerType::Apple
        | ControllerType::MobileTouch
        | ControllerType::SteamController
        | ControllerType::SteamControllerV2
        | ControllerType::Xbox360
        | ControllerType::XInputSwitch
        | ControllerType::SwitchInputOnly => generic::parse_usage(conn, field),
        _ => {}
    }
}

/// Feeds a full raw input report to the assigned family's `parse_raw` hook,
/// for devices without a usable descriptor (PS3, PS4 report 0x11, PS5
/// report 0x31, Switch, Wii).
pub fn parse_raw(conn: &mut Connection, report: &[u8]) -> Result<()> {
    match conn.controller_type {
        ControllerType::PS3 => ds3::parse_raw(conn, report),
        ControllerType::PS4 | ControllerType::XInputPS4 => ds4::parse_raw(conn, report),
        ControllerType::PS5 => ds5::parse_raw(conn, report),
        ControllerType::SwitchPro
        | ControllerType::SwitchJoyConLeft
        | ControllerType::SwitchJoyConRight
        | ControllerType::SwitchJoyConPair => switch::parse_raw(conn, report),
        ControllerType::Wii => wii::parse_raw(conn, report),
        ControllerType::ICade => icade::parse_raw(conn, report),
        _ => Ok(()),
    }
}

/// Builds the output report for setting player-indicator LEDs, if the
/// family supports it.
pub fn set_player_leds(conn: &mut Connection, leds: u8) -> Option<Vec<u8>> {
    match conn.controller_type {
        ControllerType::PS3 => ds3::set_player_leds(conn, leds),
        ControllerType::PS4 | ControllerType::XInputPS4 => ds4::set_player_leds(conn, leds),
        ControllerType::PS5 => ds5::set_player_leds(conn, leds),
        ControllerType::SwitchPro
        | ControllerType::SwitchJoyConLeft
        | ControllerType::SwitchJoyConRight
        | ControllerType::SwitchJoyConPair => switch::set_player_leds(conn, leds),
        ControllerType::Wii => wii::set_player_leds(conn, leds),
        _ => None,
    }
}

/// Builds the output report for setting the RGB lightbar color (DualShock
/// 4/DualSense only).
pub fn set_lightbar_color(conn: &mut Connection, r: u8, g: u8, b: u8) -> Option<Vec<u8>> {
    match conn.controller_type {
        ControllerType::PS4 | ControllerType::XInputPS4 => ds4::set_lightbar_color(conn, r, g, b),
        ControllerType::PS5 => ds5::set_lightbar_color(conn, r, g, b),
        _ => None,
    }
}

/// Builds the output report for a rumble pulse. Returns `Ok(None)` for
/// families with no rumble support, and
/// [`crate::Error::RumbleInProgress`] if a pulse is already in flight on a
/// single-flight family (testable property 7).
pub fn set_rumble(conn: &mut Connection, force: u8, duration_ms: u16) -> Result<Option<Vec<u8>>> {
    match conn.controller_type {
        ControllerType::PS4 | ControllerType::XInputPS4 => ds4::set_rumble(conn, force, duration_ms),
        ControllerType::PS5 => ds5::set_rumble(conn, force, duration_ms),
        ControllerType::XboxOne => Ok(Some(xboxone::rumble_report(force, force))),
        _ => Ok(None),
    }
}

/// Clears a family's `rumble_in_progress` flag when its one-shot timer
/// fires, returning a zero-force report to send if the family needs an
/// explicit "stop" packet (DS4/DS5).
pub fn clear_rumble(conn: &mut Connection) -> Option<Vec<u8>> {
    match conn.controller_type {
        ControllerType::PS4 | ControllerType::XInputPS4 => ds4::clear_rumble(conn),
        ControllerType::PS5 => ds5::clear_rumble(conn),
        _ => None,
    }
}
