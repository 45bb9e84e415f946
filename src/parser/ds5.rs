//! DualSense (PlayStation 5) parser.
//!
//! Same axis/button layout as DualShock 4, shifted two bytes to make room
//! for the sequence-tagged extended header that report 0x31 carries.

use crate::device::Connection;
use crate::error::{Error, Result};
use crate::gamepad::{Buttons, MiscButtons};
use crate::normalize::{hat_to_dpad, Hat};

#[derive(Clone, Debug, Default)]
pub struct Ds5State {
    /// High nibble of the output report's sequence-tag byte; increments on
    /// every output report and wraps at 15.
    pub seq_tag: u8,
    pub rumble_in_progress: bool,
}

const REPORT_ID: u8 = 0x31;
const REPORT_LEN: usize = 78;
const OUTPUT_BODY_LEN: usize = 74;
const BTHDR: u8 = 0xA2;
/// DS4 fields are read at `offset`; DualSense shifts everything by two
/// bytes for the extended header.
const SHIFT: usize = 2;

fn scratch(conn: &mut Connection) -> &mut Ds5State {
    match &mut conn.parser_scratch {
        crate::parser::ParserState::Ds5(s) => s,
        other => {
            *other = crate::parser::ParserState::Ds5(Ds5State::default());
            match other {
                crate::parser::ParserState::Ds5(s) => s,
                _ => unreachable!(),
            }
        }
    }
}

fn append_crc(body: &mut Vec<u8>) {
    let mut seeded = Vec::with_capacity(body.len() + 1);
    seeded.push(BTHDR);
    seeded.extend_from_slice(body);
    let crc = crc32fast::hash(&seeded);
    body.extend_from_slice(&crc.to_le_bytes());
}

fn output_report(
    seq_tag: u8,
    disable_welcome_flash: bool,
    rumble_small: u8,
    rumble_large: u8,
    r: u8,
    g: u8,
    b: u8,
) -> Vec<u8> {
    let mut body = vec![0u8; OUTPUT_BODY_LEN];
    body[0] = REPORT_ID;
    body[1] = seq_tag << 4;
    body[2] = 0x01 | if disable_welcome_flash { 0x02 } else { 0 };
    body[5] = rumble_small;
    body[6] = rumble_large;
    body[47] = r;
    body[48] = g;
    body[49] = b;
    append_crc(&mut body);
    body
}

fn next_seq(conn: &mut Connection) -> u8 {
    let state = scratch(conn);
    let seq = state.seq_tag;
    state.seq_tag = (state.seq_tag + 1) % 16;
    seq
}

pub fn setup(conn: &mut Connection) -> Option<Vec<u8>> {
    let seq = next_seq(conn);
    Some(output_report(seq, true, 0, 0, 0, 0, 255))
}

pub fn parse_raw(conn: &mut Connection, report: &[u8]) -> Result<()> {
    if report.is_empty() || report[0] != REPORT_ID {
        return Err(Error::UnexpectedReport {
            report_id: report.first().copied().unwrap_or(0),
            len: report.len(),
            expected: "0x31",
        });
    }
    if report.len() != REPORT_LEN {
        return Err(Error::UnexpectedReport { report_id: REPORT_ID, len: report.len(), expected: "78" });
    }

    conn.virtual_gamepad.mark_all_updated();

    let at = |i: usize| report[i + SHIFT];
    let centered = |raw: u8| (i32::from(raw) - 0x7F) * 4;
    conn.virtual_gamepad.axis_x = centered(at(3));
    conn.virtual_gamepad.axis_y = centered(at(4));
    conn.virtual_gamepad.axis_rx = centered(at(5));
    conn.virtual_gamepad.axis_ry = centered(at(6));

    let hat = at(8) & 0x0F;
    conn.virtual_gamepad.dpad = crate::gamepad::Dpad::from_bits_truncate(hat_to_dpad(Hat(hat)));

    let mut buttons = Buttons::empty();
    buttons.set(Buttons::X, at(8) & 0x10 != 0);
    buttons.set(Buttons::A, at(8) & 0x20 != 0);
    buttons.set(Buttons::B, at(8) & 0x40 != 0);
    buttons.set(Buttons::Y, at(8) & 0x80 != 0);
    buttons.set(Buttons::SHOULDER_L, at(9) & 0x01 != 0);
    buttons.set(Buttons::SHOULDER_R, at(9) & 0x02 != 0);
    buttons.set(Buttons::TRIGGER_L, at(9) & 0x04 != 0);
    buttons.set(Buttons::TRIGGER_R, at(9) & 0x08 != 0);
    buttons.set(Buttons::THUMB_L, at(9) & 0x40 != 0);
    buttons.set(Buttons::THUMB_R, at(9) & 0x80 != 0);
    conn.virtual_gamepad.buttons = buttons;

    let mut misc = MiscButtons::empty();
    misc.set(MiscButtons::BACK, at(9) & 0x10 != 0);
    misc.set(MiscButtons::MENU, at(9) & 0x20 != 0);
    misc.set(MiscButtons::SYSTEM, at(10) & 0x01 != 0);
    conn.virtual_gamepad.misc_buttons = misc;

    conn.virtual_gamepad.brake = u32::from(at(11)) * 4;
    conn.virtual_gamepad.accelerator = u32::from(at(12)) * 4;

    Ok(())
}

pub fn set_player_leds(_conn: &mut Connection, _leds: u8) -> Option<Vec<u8>> {
    None
}

pub fn set_lightbar_color(conn: &mut Connection, r: u8, g: u8, b: u8) -> Option<Vec<u8>> {
    let seq = next_seq(conn);
    Some(output_report(seq, false, 0, 0, r, g, b))
}

pub fn set_rumble(conn: &mut Connection, force: u8, _duration_ms: u16) -> Result<Option<Vec<u8>>> {
    {
        let state = scratch(conn);
        if state.rumble_in_progress {
            return Err(Error::RumbleInProgress(conn.remote_addr));
        }
        state.rumble_in_progress = true;
    }
    let seq = next_seq(conn);
    Ok(Some(output_report(seq, false, force, force, 0, 0, 0)))
}

pub fn clear_rumble(conn: &mut Connection) -> Option<Vec<u8>> {
    scratch(conn).rumble_in_progress = false;
    let seq = next_seq(conn);
    Some(output_report(seq, false, 0, 0, 0, 0, 0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bt::Addr;

    fn new_conn() -> Connection {
        let mut c = Connection::new(Addr([1, 0, 0, 0, 0, 0]), 8);
        c.controller_type = crate::vendor::ControllerType::PS5;
        c.parser_scratch = crate::parser::ParserState::Ds5(Ds5State::default());
        c
    }

    #[test]
    fn setup_disables_welcome_flash() {
        let mut conn = new_conn();
        let payload = setup(&mut conn).unwrap();
        assert_eq!(payload[0], REPORT_ID);
        assert_eq!(payload[2], 0x03);
    }

    #[test]
    fn seq_tag_wraps_at_sixteen() {
        let mut conn = new_conn();
        for i in 0..16u8 {
            assert_eq!(next_seq(&mut conn), i);
        }
        assert_eq!(next_seq(&mut conn), 0);
    }

    #[test]
    fn parse_raw_shifts_by_two_bytes_vs_ds4() {
        let mut conn = new_conn();
        let mut report = vec![0u8; REPORT_LEN];
        report[0] = REPORT_ID;
        report[3 + SHIFT] = 0x7F; // centered axis_x -> 0
        parse_raw(&mut conn, &report).unwrap();
        assert_eq!(conn.virtual_gamepad.axis_x, 0);
    }

    #[test]
    fn rumble_single_flight() {
        let mut conn = new_conn();
        set_rumble(&mut conn, 200, 100).unwrap();
        assert!(set_rumble(&mut conn, 10, 10).is_err());
    }
}
