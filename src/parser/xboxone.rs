//! Xbox One parser.
//!
//! Descriptor-driven like [`crate::parser::generic`], but two firmware
//! revisions expose brake/accelerator and the Back button on different
//! usage pages, so a per-device firmware guess steers [`parse_usage`].

use crate::device::Connection;
use crate::gamepad::{Buttons, MiscButtons};
use crate::hid::Field;
use crate::normalize::{normalize_axis, normalize_pedal};
use crate::parser::usage::{consumer, generic_desktop, simulation, BUTTON_PAGE};

/// Firmware revision, steering which usage pages carry brake/accelerator
/// and the Back button.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum XboxOneFirmware {
    /// Legacy: brake/accelerator on generic-desktop Z/Rz, no consumer-page
    /// Back button usage.
    #[default]
    V3_1,
    /// Android-style: brake/accelerator on the Simulation Controls page,
    /// Back button is consumer-page "AC Back" (0x0224).
    V4_8,
}

/// HID descriptor length above which firmware 4.8 is assumed at
/// classification time. Spec.md's Open Questions flag this heuristic as
/// fragile and recommend flipping on first occurrence of a firmware-4.8-only
/// usage instead; [`parse_usage`] does exactly that via `BUTTON_USAGE_0F`.
pub const FIRMWARE_4_8_DESCRIPTOR_LEN_THRESHOLD: usize = 330;

/// Button-page usage that only firmware-4.8 descriptors emit; its
/// appearance flips [`XboxOneState::firmware`] to
/// [`XboxOneFirmware::V4_8`] even if the initial length-based guess said
/// otherwise.
const BUTTON_USAGE_0F: u16 = 0x0F;

#[derive(Clone, Copy, Debug, Default)]
pub struct XboxOneState {
    pub firmware: XboxOneFirmware,
}

/// Guesses firmware revision from HID descriptor length, per spec.md
/// §4.5 (acknowledged fragile; see [`FIRMWARE_4_8_DESCRIPTOR_LEN_THRESHOLD`]).
#[must_use]
pub fn detect_firmware(descriptor_len: usize) -> XboxOneFirmware {
    if descriptor_len > FIRMWARE_4_8_DESCRIPTOR_LEN_THRESHOLD {
        XboxOneFirmware::V4_8
    } else {
        XboxOneFirmware::V3_1
    }
}

fn scratch(conn: &mut Connection) -> &mut XboxOneState {
    match &mut conn.parser_scratch {
        crate::parser::ParserState::XboxOne(s) => s,
        other => {
            *other = crate::parser::ParserState::XboxOne(XboxOneState::default());
            match other {
                crate::parser::ParserState::XboxOne(s) => s,
                _ => unreachable!(),
            }
        }
    }
}

pub fn setup(conn: &mut Connection) -> Option<Vec<u8>> {
    scratch(conn).firmware = detect_firmware(conn.hid_descriptor.len());
    None
}

pub fn parse_usage(conn: &mut Connection, field: &Field) {
    if field.usage_page == BUTTON_PAGE && field.usage == BUTTON_USAGE_0F {
        scratch(conn).firmware = XboxOneFirmware::V4_8;
    }
    let firmware = scratch(conn).firmware;

    match (field.usage_page, field.usage) {
        (p, generic_desktop::X) if p == generic_desktop::PAGE => {
            conn.virtual_gamepad.set_axis_x(normalize_axis(&field.globals, field.value));
        }
        (p, generic_desktop::Y) if p == generic_desktop::PAGE => {
            conn.virtual_gamepad.set_axis_y(normalize_axis(&field.globals, field.value));
        }
        (p, generic_desktop::RX) if p == generic_desktop::PAGE => {
            conn.virtual_gamepad.set_axis_rx(normalize_axis(&field.globals, field.value));
        }
        (p, generic_desktop::RY) if p == generic_desktop::PAGE => {
            conn.virtual_gamepad.set_axis_ry(normalize_axis(&field.globals, field.value));
        }
        (p, generic_desktop::Z) if p == generic_desktop::PAGE && matches!(firmware, XboxOneFirmware::V3_1) => {
            conn.virtual_gamepad.set_brake(normalize_pedal(&field.globals, field.value) as u32);
        }
        (p, generic_desktop::RZ) if p == generic_desktop::PAGE && matches!(firmware, XboxOneFirmware::V3_1) => {
            conn.virtual_gamepad.set_accelerator(normalize_pedal(&field.globals, field.value) as u32);
        }
        (p, simulation::BRAKE) if p == simulation::PAGE && matches!(firmware, XboxOneFirmware::V4_8) => {
            conn.virtual_gamepad.set_brake(normalize_pedal(&field.globals, field.value) as u32);
        }
        (p, simulation::ACCELERATOR) if p == simulation::PAGE && matches!(firmware, XboxOneFirmware::V4_8) => {
            conn.virtual_gamepad.set_accelerator(normalize_pedal(&field.globals, field.value) as u32);
        }
        (p, consumer::AC_BACK) if p == consumer::PAGE && matches!(firmware, XboxOneFirmware::V4_8) => {
            let mut misc = conn.virtual_gamepad.misc_buttons;
            misc.set(MiscButtons::BACK, field.value != 0);
            conn.virtual_gamepad.set_misc_buttons(misc);
        }
        (p, usage) if p == BUTTON_PAGE => apply_button(conn, usage, field.value != 0),
        _ => {}
    }
}

fn apply_button(conn: &mut Connection, usage: u16, pressed: bool) {
    let mut buttons = conn.virtual_gamepad.buttons;
    let mut misc = conn.virtual_gamepad.misc_buttons;
    match usage {
        1 => buttons.set(Buttons::A, pressed),
        2 => buttons.set(Buttons::B, pressed),
        3 => buttons.set(Buttons::X, pressed),
        4 => buttons.set(Buttons::Y, pressed),
        5 => buttons.set(Buttons::SHOULDER_L, pressed),
        6 => buttons.set(Buttons::SHOULDER_R, pressed),
        7 => misc.set(MiscButtons::BACK, pressed), // pre-4.8 Back/View
        8 => misc.set(MiscButtons::MENU, pressed),
        9 => buttons.set(Buttons::THUMB_L, pressed),
        10 => buttons.set(Buttons::THUMB_R, pressed),
        _ => {}
    }
    conn.virtual_gamepad.set_buttons(buttons);
    conn.virtual_gamepad.set_misc_buttons(misc);
}

/// 11-byte fixed output report id 0x03 carrying actuator flags and
/// left/right/trigger-left/trigger-right force magnitudes `0..=100`.
#[must_use]
pub fn rumble_report(left: u8, right: u8) -> Vec<u8> {
    let mut buf = vec![0u8; 11];
    buf[0] = 0x03;
    buf[1] = 0x0F; // enable all four actuators
    buf[2] = 0; // trigger-left
    buf[3] = 0; // trigger-right
    buf[4] = left.min(100);
    buf[5] = right.min(100);
    buf[6] = 0xFF; // duration (255 = continuous until replaced)
    buf[7] = 0x00; // start delay
    buf[8] = 0x01; // loop count
    buf
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bt::Addr;
    use crate::hid::Globals;

    fn new_conn() -> Connection {
        let mut c = Connection::new(Addr([1, 0, 0, 0, 0, 0]), 8);
        c.controller_type = crate::vendor::ControllerType::XboxOne;
        c.parser_scratch = crate::parser::ParserState::XboxOne(XboxOneState::default());
        c
    }

    #[test]
    fn firmware_guess_from_descriptor_length() {
        assert_eq!(detect_firmware(100), XboxOneFirmware::V3_1);
        assert_eq!(detect_firmware(400), XboxOneFirmware::V4_8);
    }

    #[test]
    fn button_0f_flips_firmware_to_v4_8() {
        let mut conn = new_conn();
        let field = Field {
            usage_page: BUTTON_PAGE,
            usage: BUTTON_USAGE_0F,
            value: 1,
            globals: Globals::default(),
        };
        parse_usage(&mut conn, &field);
        match &conn.parser_scratch {
            crate::parser::ParserState::XboxOne(s) => assert_eq!(s.firmware, XboxOneFirmware::V4_8),
            _ => unreachable!(),
        }
    }

    #[test]
    fn rumble_report_clamps_force_to_100() {
        let r = rumble_report(200, 50);
        assert_eq!(r[4], 100);
        assert_eq!(r[5], 50);
        assert_eq!(r.len(), 11);
    }
}
