//! DualShock 4 (PlayStation 4) parser.
//!
//! The pad ships input report 0x01 (no gyro/touchpad) until it sees an
//! output report 0x11; from then on it switches to the "full" 0x11 input
//! report this parser expects exclusively.

use crate::device::Connection;
use crate::error::{Error, Result};
use crate::gamepad::{Buttons, MiscButtons};
use crate::normalize::{hat_to_dpad, Hat};

#[derive(Clone, Debug, Default)]
pub struct Ds4State {
    pub rumble_in_progress: bool,
}

const REPORT_ID: u8 = 0x11;
const REPORT_LEN: usize = 78;
const OUTPUT_BODY_LEN: usize = 74; // report id + body, CRC appended after
const BTHDR: u8 = 0xA2;

fn scratch(conn: &mut Connection) -> &mut Ds4State {
    match &mut conn.parser_scratch {
        crate::parser::ParserState::Ds4(s) => s,
        other => {
            *other = crate::parser::ParserState::Ds4(Ds4State::default());
            match other {
                crate::parser::ParserState::Ds4(s) => s,
                _ => unreachable!(),
            }
        }
    }
}

/// Appends a little-endian CRC32 over `[0xA2, body...]` (testable
/// property 5 / scenario 11). `crc32fast::hash` implements the standard
/// reflected CRC-32 (poly 0xEDB88320, init/final XOR 0xFFFFFFFF) this
/// construction relies on.
fn append_crc(body: &mut Vec<u8>) {
    let mut seeded = Vec::with_capacity(body.len() + 1);
    seeded.push(BTHDR);
    seeded.extend_from_slice(body);
    let crc = crc32fast::hash(&seeded);
    body.extend_from_slice(&crc.to_le_bytes());
}

fn output_report(flags: u8, rumble_small: u8, rumble_large: u8, r: u8, g: u8, b: u8) -> Vec<u8> {
    let mut body = vec![0u8; OUTPUT_BODY_LEN];
    body[0] = REPORT_ID;
    body[3] = flags;
    body[6] = rumble_small;
    body[7] = rumble_large;
    body[8] = r;
    body[9] = g;
    body[10] = b;
    append_crc(&mut body);
    body
}

const FLAG_RUMBLE: u8 = 0x01;
const FLAG_LED_COLOR: u8 = 0x02;
const FLAG_LED_BLINK: u8 = 0x04;

pub fn setup(_conn: &mut Connection) -> Option<Vec<u8>> {
    Some(output_report(FLAG_RUMBLE | FLAG_LED_COLOR | FLAG_LED_BLINK, 0, 0, 0, 0, 255))
}

pub fn parse_raw(conn: &mut Connection, report: &[u8]) -> Result<()> {
    if report.is_empty() || report[0] != REPORT_ID {
        return Err(Error::UnexpectedReport {
            report_id: report.first().copied().unwrap_or(0),
            len: report.len(),
            expected: "0x11",
        });
    }
    if report.len() != REPORT_LEN {
        return Err(Error::UnexpectedReport { report_id: REPORT_ID, len: report.len(), expected: "78" });
    }

    conn.virtual_gamepad.mark_all_updated();

    let centered = |raw: u8| (i32::from(raw) - 0x7F) * 4;
    conn.virtual_gamepad.axis_x = centered(report[3]);
    conn.virtual_gamepad.axis_y = centered(report[4]);
    conn.virtual_gamepad.axis_rx = centered(report[5]);
    conn.virtual_gamepad.axis_ry = centered(report[6]);

    let hat = report[8] & 0x0F;
    conn.virtual_gamepad.dpad = crate::gamepad::Dpad::from_bits_truncate(hat_to_dpad(Hat(hat)));

    let mut buttons = Buttons::empty();
    buttons.set(Buttons::X, report[8] & 0x10 != 0); // Square
    buttons.set(Buttons::A, report[8] & 0x20 != 0); // Cross
    buttons.set(Buttons::B, report[8] & 0x40 != 0); // Circle
    buttons.set(Buttons::Y, report[8] & 0x80 != 0); // Triangle
    buttons.set(Buttons::SHOULDER_L, report[9] & 0x01 != 0);
    buttons.set(Buttons::SHOULDER_R, report[9] & 0x02 != 0);
    buttons.set(Buttons::TRIGGER_L, report[9] & 0x04 != 0);
    buttons.set(Buttons::TRIGGER_R, report[9] & 0x08 != 0);
    buttons.set(Buttons::THUMB_L, report[9] & 0x40 != 0);
    buttons.set(Buttons::THUMB_R, report[9] & 0x80 != 0);
    conn.virtual_gamepad.buttons = buttons;

    let mut misc = MiscButtons::empty();
    misc.set(MiscButtons::BACK, report[9] & 0x10 != 0); // Share
    misc.set(MiscButtons::MENU, report[9] & 0x20 != 0); // Options
    misc.set(MiscButtons::SYSTEM, report[10] & 0x01 != 0); // PS
    conn.virtual_gamepad.misc_buttons = misc;

    conn.virtual_gamepad.brake = u32::from(report[11]) * 4;
    conn.virtual_gamepad.accelerator = u32::from(report[12]) * 4;

    conn.virtual_gamepad.battery = report[30] & 0x0F;

    Ok(())
}

pub fn set_player_leds(_conn: &mut Connection, _leds: u8) -> Option<Vec<u8>> {
    // DS4 has no physical player-number LEDs separate from the lightbar;
    // upstream maps seat assignment onto the lightbar color instead.
    None
}

pub fn set_lightbar_color(_conn: &mut Connection, r: u8, g: u8, b: u8) -> Option<Vec<u8>> {
    Some(output_report(FLAG_LED_COLOR, 0, 0, r, g, b))
}

pub fn set_rumble(conn: &mut Connection, force: u8, _duration_ms: u16) -> Result<Option<Vec<u8>>> {
    let state = scratch(conn);
    if state.rumble_in_progress {
        return Err(Error::RumbleInProgress(conn.remote_addr));
    }
    state.rumble_in_progress = true;
    Ok(Some(output_report(FLAG_RUMBLE, force, force, 0, 0, 0)))
}

pub fn clear_rumble(conn: &mut Connection) -> Option<Vec<u8>> {
    let state = scratch(conn);
    state.rumble_in_progress = false;
    Some(output_report(FLAG_RUMBLE, 0, 0, 0, 0, 0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bt::Addr;

    fn new_conn() -> Connection {
        let mut c = Connection::new(Addr([1, 0, 0, 0, 0, 0]), 8);
        c.controller_type = crate::vendor::ControllerType::PS4;
        c.parser_scratch = crate::parser::ParserState::Ds4(Ds4State::default());
        c
    }

    #[test]
    fn crc32_matches_known_vector() {
        // scenario 11: body of zeros -> CRC32-LE 0x8C4963E6 over {0xA2, 0x11, 73 zero bytes}.
        let mut seeded = vec![0xA2u8, 0x11];
        seeded.extend(std::iter::repeat(0u8).take(73));
        let crc = crc32fast::hash(&seeded);
        assert_eq!(crc, 0x8C49_63E6);
    }

    #[test]
    fn output_report_is_78_bytes_with_matching_crc() {
        let report = output_report(0, 0, 0, 0, 0, 0);
        assert_eq!(report.len(), REPORT_LEN);
        let crc = u32::from_le_bytes(report[74..78].try_into().unwrap());
        assert_eq!(crc, 0x8C49_63E6);
    }

    #[test]
    fn parse_raw_rejects_wrong_report_id() {
        let mut conn = new_conn();
        let report = vec![0u8; REPORT_LEN];
        let err = parse_raw(&mut conn, &report).unwrap_err();
        assert!(matches!(err, Error::UnexpectedReport { .. }));
    }

    #[test]
    fn parse_raw_rejects_wrong_length() {
        let mut conn = new_conn();
        let mut report = vec![0u8; 10];
        report[0] = REPORT_ID;
        let err = parse_raw(&mut conn, &report).unwrap_err();
        assert!(matches!(err, Error::UnexpectedReport { .. }));
    }

    #[test]
    fn parse_raw_is_full_report_mask() {
        let mut conn = new_conn();
        let mut report = vec![0u8; REPORT_LEN];
        report[0] = REPORT_ID;
        parse_raw(&mut conn, &report).unwrap();
        assert_eq!(conn.virtual_gamepad.updated_states, crate::gamepad::UpdatedStates::ALL);
    }

    #[test]
    fn rumble_is_single_flight() {
        let mut conn = new_conn();
        set_rumble(&mut conn, 100, 500).unwrap();
        let err = set_rumble(&mut conn, 50, 500).unwrap_err();
        assert!(matches!(err, Error::RumbleInProgress(_)));
        clear_rumble(&mut conn);
        assert!(set_rumble(&mut conn, 50, 500).is_ok());
    }
}
