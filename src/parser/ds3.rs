//! DualShock 3 (PlayStation 3) parser.
//!
//! No usable HID descriptor is fetched for these pads in practice — every
//! field comes from [`parse_raw`] against the fixed report-0x01 layout.

use crate::device::Connection;
use crate::error::Result;
use crate::gamepad::{Buttons, Dpad, MiscButtons};

/// Magic "enable reports" feature report. Without sending this first the
/// controller stays silent.
pub const ENABLE_REPORTS: [u8; 6] = [0x53, 0xF4, 0x42, 0x03, 0x00, 0x00];

/// Deferred LED-update state: the controller ignores an LED write issued
/// before its stream-reports packet has taken effect, so the first write is
/// deferred until the *second* `parse_raw` call after classification. The
/// upstream comment calls this empirically necessary; it is reproduced
/// as-is rather than optimized away.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Ds3LedFsm {
    #[default]
    Initial,
    RequiresLedUpdate,
    LedUpdated,
}

#[derive(Clone, Debug, Default)]
pub struct Ds3State {
    pub led_fsm: Ds3LedFsm,
    pub pending_leds: u8,
}

pub fn setup(_conn: &mut Connection) -> Option<Vec<u8>> {
    Some(ENABLE_REPORTS.to_vec())
}

fn scratch(conn: &mut Connection) -> &mut Ds3State {
    match &mut conn.parser_scratch {
        crate::parser::ParserState::Ds3(s) => s,
        other => {
            *other = crate::parser::ParserState::Ds3(Ds3State::default());
            match other {
                crate::parser::ParserState::Ds3(s) => s,
                _ => unreachable!(),
            }
        }
    }
}

const TRANSACTION_TYPE_MASK: u8 = 0x0F;
const TRANSACTION_TYPE_INPUT: u8 = 0x01;

pub fn parse_raw(conn: &mut Connection, report: &[u8]) -> Result<()> {
    if report.is_empty() || report[0] & TRANSACTION_TYPE_MASK != TRANSACTION_TYPE_INPUT {
        return Ok(());
    }
    if report.len() < 20 {
        return Err(crate::error::Error::UnexpectedReport {
            report_id: report[0],
            len: report.len(),
            expected: ">= 20",
        });
    }

    conn.virtual_gamepad.clear_updated();

    let b2 = report[2];
    let b3 = report[3];
    let b4 = report[4];

    let mut dpad = Dpad::empty();
    dpad.set(Dpad::UP, b2 & 0x10 != 0);
    dpad.set(Dpad::RIGHT, b2 & 0x20 != 0);
    dpad.set(Dpad::DOWN, b2 & 0x40 != 0);
    dpad.set(Dpad::LEFT, b2 & 0x80 != 0);
    conn.virtual_gamepad.set_dpad(dpad);

    let mut buttons = Buttons::empty();
    buttons.set(Buttons::TRIGGER_L, b3 & 0x01 != 0);
    buttons.set(Buttons::TRIGGER_R, b3 & 0x02 != 0);
    buttons.set(Buttons::SHOULDER_L, b3 & 0x04 != 0);
    buttons.set(Buttons::SHOULDER_R, b3 & 0x08 != 0);
    buttons.set(Buttons::Y, b3 & 0x10 != 0); // Triangle
    buttons.set(Buttons::B, b3 & 0x20 != 0); // Circle
    buttons.set(Buttons::A, b3 & 0x40 != 0); // Cross
    buttons.set(Buttons::X, b3 & 0x80 != 0); // Square
    buttons.set(Buttons::THUMB_L, b2 & 0x02 != 0);
    buttons.set(Buttons::THUMB_R, b2 & 0x04 != 0);
    conn.virtual_gamepad.set_buttons(buttons);

    let mut misc = MiscButtons::empty();
    misc.set(MiscButtons::BACK, b2 & 0x01 != 0); // Select
    misc.set(MiscButtons::HOME, b2 & 0x08 != 0); // Start
    misc.set(MiscButtons::SYSTEM, b4 & 0x01 != 0); // PS button
    conn.virtual_gamepad.set_misc_buttons(misc);

    let centered = |raw: u8| (i32::from(raw) - 0x80) * 1024 / 256;
    conn.virtual_gamepad.set_axis_x(centered(report[6]));
    conn.virtual_gamepad.set_axis_y(centered(report[7]));
    conn.virtual_gamepad.set_axis_rx(centered(report[8]));
    conn.virtual_gamepad.set_axis_ry(centered(report[9]));

    conn.virtual_gamepad.set_brake(u32::from(report[18]) * 4);
    conn.virtual_gamepad.set_accelerator(u32::from(report[19]) * 4);

    let state = scratch(conn);
    match state.led_fsm {
        Ds3LedFsm::Initial => state.led_fsm = Ds3LedFsm::RequiresLedUpdate,
        Ds3LedFsm::RequiresLedUpdate => {
            let leds = state.pending_leds;
            state.led_fsm = Ds3LedFsm::LedUpdated;
            if leds != 0 {
                let payload = led_report(leds);
                let _ = conn.enqueue_outgoing(conn.control_cid, payload);
            }
        }
        Ds3LedFsm::LedUpdated => {}
    }

    Ok(())
}

fn led_report(leds: u8) -> Vec<u8> {
    let mut buf = vec![0u8; 49];
    buf[0] = 0x52;
    buf[1] = 0x01;
    buf[11] = leds << 1;
    buf
}

pub fn set_player_leds(conn: &mut Connection, leds: u8) -> Option<Vec<u8>> {
    let state = scratch(conn);
    match state.led_fsm {
        Ds3LedFsm::LedUpdated => Some(led_report(leds)),
        _ => {
            state.pending_leds = leds;
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bt::Addr;

    fn new_conn() -> Connection {
        let mut c = Connection::new(Addr([1, 0, 0, 0, 0, 0]), 8);
        c.controller_type = crate::vendor::ControllerType::PS3;
        c.parser_scratch = crate::parser::ParserState::Ds3(Ds3State::default());
        c
    }

    fn sample_report() -> Vec<u8> {
        let mut r = vec![0u8; 20];
        r[0] = 0x01;
        r[6] = 0x80;
        r[7] = 0x80;
        r[8] = 0x80;
        r[9] = 0x80;
        r
    }

    #[test]
    fn setup_sends_enable_reports_magic() {
        let payload = setup(&mut new_conn()).unwrap();
        assert_eq!(payload, ENABLE_REPORTS);
    }

    #[test]
    fn parse_raw_decodes_centered_sticks() {
        let mut conn = new_conn();
        parse_raw(&mut conn, &sample_report()).unwrap();
        assert_eq!(conn.virtual_gamepad.axis_x, 0);
    }

    #[test]
    fn led_update_deferred_to_second_input_report() {
        let mut conn = new_conn();
        // First call: still Initial -> becomes RequiresLedUpdate, no send.
        parse_raw(&mut conn, &sample_report()).unwrap();
        assert!(set_player_leds(&mut conn, 0x01).is_none());
        // Second call: RequiresLedUpdate -> LedUpdated, flushes pending_leds.
        parse_raw(&mut conn, &sample_report()).unwrap();
        assert!(conn.has_pending_outgoing(conn.control_cid));
    }

    #[test]
    fn wrong_transaction_type_is_ignored() {
        let mut conn = new_conn();
        let mut r = sample_report();
        r[0] = 0x02;
        parse_raw(&mut conn, &r).unwrap();
        assert!(conn.virtual_gamepad.updated_states.is_empty());
    }
}
