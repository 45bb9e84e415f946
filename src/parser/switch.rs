//! Nintendo Switch Pro / Joy-Con parser.
//!
//! Drives the SPI-calibration-dump-and-subcommand handshake described in
//! spec.md §4.5 before input reports are meaningfully decoded, and applies
//! the resulting per-stick calibration to every subsequent report.

use crate::device::Connection;
use crate::error::{Error, Result};
use crate::gamepad::{Buttons, Dpad, MiscButtons};

/// Handshake state, in the order spec.md §4.5 lists it. `DumpFlash` and
/// `ReadUserCalibration` are optional and skipped here (no on-device user
/// calibration override support); factory calibration is mandatory.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum SwitchFsm {
    #[default]
    Setup,
    ReqDevInfo,
    ReadFactoryCalibration,
    SetFullReport,
    EnableImu,
    SetHomeLight,
    UpdateLed,
    Ready,
}

/// Per-stick (min, center, max) calibration recovered from the factory SPI
/// dump at address 0x603D.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct StickCalibration {
    pub min: i32,
    pub center: i32,
    pub max: i32,
}

impl Default for StickCalibration {
    /// Neutral 12-bit-range calibration used until the factory dump
    /// arrives, so early reports still decode to something sane.
    fn default() -> Self {
        Self { min: 0, center: 2048, max: 4095 }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Calibration {
    pub left_x: StickCalibration,
    pub left_y: StickCalibration,
    pub right_x: StickCalibration,
    pub right_y: StickCalibration,
}

#[derive(Clone, Debug, Default)]
pub struct SwitchState {
    pub fsm: SwitchFsm,
    pub packet_counter: u8,
    pub calibration: Calibration,
    /// Whether Button A was held at the initial `ReqDevInfo` reply — the
    /// hidden gesture that enables IMU/motion mode.
    pub imu_enabled: bool,
    /// True once a report has arrived on the 0x3F compatibility fallback
    /// id, meaning setup has not completed or this is a clone.
    pub compatibility_mode: bool,
}

/// Scales a raw 12-bit stick value through its factory calibration to
/// `±512`, per spec.md §4.5's `calibrate_axis`.
#[must_use]
pub fn calibrate_axis(v: i32, cal: StickCalibration) -> i32 {
    let raw = if v > cal.center {
        let denom = (cal.max - cal.center).max(1);
        (v - cal.center) * 512 / denom
    } else {
        let denom = (cal.center - cal.min).max(1);
        (v - cal.center) * 512 / denom
    };
    raw.clamp(-512, 512)
}

fn scratch(conn: &mut Connection) -> &mut SwitchState {
    match &mut conn.parser_scratch {
        crate::parser::ParserState::Switch(s) => s,
        other => {
            *other = crate::parser::ParserState::Switch(SwitchState::default());
            match other {
                crate::parser::ParserState::Switch(s) => s,
                _ => unreachable!(),
            }
        }
    }
}

const SUBCOMMAND_REPORT_ID: u8 = 0x01;
const SUBCOMMAND_REPLY_ID: u8 = 0x21;
const INPUT_REPORT_FULL: u8 = 0x30;
const INPUT_REPORT_COMPAT: u8 = 0x3F;

const SUBCMD_REQ_DEV_INFO: u8 = 0x02;
const SUBCMD_SPI_READ: u8 = 0x10;
const SUBCMD_SET_INPUT_REPORT_MODE: u8 = 0x03;
const SUBCMD_ENABLE_IMU: u8 = 0x40;
const SUBCMD_SET_PLAYER_LIGHTS: u8 = 0x30;
const SUBCMD_SET_HOME_LIGHT: u8 = 0x38;

/// Neutral (non-vibrating) rumble data block sent in every subcommand
/// packet's rumble slot.
const NEUTRAL_RUMBLE: [u8; 4] = [0x00, 0x01, 0x40, 0x40];

fn next_counter(conn: &mut Connection) -> u8 {
    let state = scratch(conn);
    let c = state.packet_counter;
    state.packet_counter = (state.packet_counter + 1) % 16;
    c
}

fn subcommand_packet(counter: u8, subcommand: u8, data: &[u8]) -> Vec<u8> {
    let mut buf = vec![0u8; 10];
    buf[0] = SUBCOMMAND_REPORT_ID;
    buf[1] = counter;
    buf[2..6].copy_from_slice(&NEUTRAL_RUMBLE);
    buf[6..10].copy_from_slice(&NEUTRAL_RUMBLE);
    buf.push(subcommand);
    buf.extend_from_slice(data);
    buf
}

pub fn setup(conn: &mut Connection) -> Option<Vec<u8>> {
    scratch(conn).fsm = SwitchFsm::ReqDevInfo;
    let counter = next_counter(conn);
    Some(subcommand_packet(counter, SUBCMD_REQ_DEV_INFO, &[]))
}

/// Advances the handshake FSM on a 0x21 subcommand reply. `held_a` reflects
/// whether Button A was down in this reply's button bytes (only meaningful
/// for the `ReqDevInfo` reply).
fn advance_fsm(conn: &mut Connection, subcommand_id: u8, status_ok: bool, held_a: bool) -> Option<Vec<u8>> {
    if !status_ok {
        return None;
    }
    let state_fsm = scratch(conn).fsm;
    match (state_fsm, subcommand_id) {
        (SwitchFsm::ReqDevInfo, SUBCMD_REQ_DEV_INFO) => {
            scratch(conn).imu_enabled = held_a;
            scratch(conn).fsm = SwitchFsm::ReadFactoryCalibration;
            let counter = next_counter(conn);
            // SPI read: address 0x603D, 18 bytes.
            let mut data = vec![0x3D, 0x60, 0x00, 0x00, 18u8];
            data.truncate(5);
            Some(subcommand_packet(counter, SUBCMD_SPI_READ, &data))
        }
        (SwitchFsm::ReadFactoryCalibration, SUBCMD_SPI_READ) => {
            scratch(conn).fsm = SwitchFsm::SetFullReport;
            let counter = next_counter(conn);
            Some(subcommand_packet(counter, SUBCMD_SET_INPUT_REPORT_MODE, &[INPUT_REPORT_FULL]))
        }
        (SwitchFsm::SetFullReport, SUBCMD_SET_INPUT_REPORT_MODE) => {
            scratch(conn).fsm = SwitchFsm::EnableImu;
            let counter = next_counter(conn);
            let enable = u8::from(scratch(conn).imu_enabled);
            Some(subcommand_packet(counter, SUBCMD_ENABLE_IMU, &[enable]))
        }
        (SwitchFsm::EnableImu, SUBCMD_ENABLE_IMU) => {
            scratch(conn).fsm = SwitchFsm::SetHomeLight;
            let counter = next_counter(conn);
            Some(subcommand_packet(counter, SUBCMD_SET_HOME_LIGHT, &[0x01]))
        }
        (SwitchFsm::SetHomeLight, SUBCMD_SET_HOME_LIGHT) => {
            scratch(conn).fsm = SwitchFsm::UpdateLed;
            let counter = next_counter(conn);
            Some(subcommand_packet(counter, SUBCMD_SET_PLAYER_LIGHTS, &[0x01]))
        }
        (SwitchFsm::UpdateLed, SUBCMD_SET_PLAYER_LIGHTS) => {
            scratch(conn).fsm = SwitchFsm::Ready;
            None
        }
        _ => None,
    }
}

/// Unpacks 18 bytes of factory SPI calibration data (spec.md §4.5) into
/// per-stick (min, center, max) triples.
#[must_use]
pub fn parse_factory_calibration(data: &[u8]) -> Calibration {
    fn unpack12(b: &[u8]) -> (i32, i32) {
        let a = i32::from(b[0]) | ((i32::from(b[1]) & 0x0F) << 8);
        let bb = (i32::from(b[1]) >> 4) | (i32::from(b[2]) << 4);
        (a, bb)
    }
    if data.len() < 18 {
        return Calibration::default();
    }
    let (lx_max, ly_max) = unpack12(&data[0..3]);
    let (lx_center, ly_center) = unpack12(&data[3..6]);
    let (lx_min, ly_min) = unpack12(&data[6..9]);
    let (rx_center, ry_center) = unpack12(&data[9..12]);
    let (rx_min, ry_min) = unpack12(&data[12..15]);
    let (rx_max, ry_max) = unpack12(&data[15..18]);
    Calibration {
        left_x: StickCalibration { min: lx_min, center: lx_center, max: lx_max },
        left_y: StickCalibration { min: ly_min, center: ly_center, max: ly_max },
        right_x: StickCalibration { min: rx_min, center: rx_center, max: rx_max },
        right_y: StickCalibration { min: ry_min, center: ry_center, max: ry_max },
    }
}

fn unpack_stick_bytes(b: &[u8]) -> (i32, i32) {
    let x = i32::from(b[0]) | ((i32::from(b[1]) & 0x0F) << 8);
    let y = (i32::from(b[1]) >> 4) | (i32::from(b[2]) << 4);
    (x, y)
}

pub fn parse_raw(conn: &mut Connection, report: &[u8]) -> Result<()> {
    if report.is_empty() {
        return Ok(());
    }
    match report[0] {
        SUBCOMMAND_REPLY_ID => {
            if report.len() < 15 {
                return Ok(());
            }
            let status_ok = report[13] & 0x80 != 0;
            let subcommand_id = report[14];
            if subcommand_id == SUBCMD_SPI_READ && report.len() >= 20 + 18 {
                let data = &report[20..20 + 18];
                scratch(conn).calibration = parse_factory_calibration(data);
            }
            let held_a = report.len() > 3 && report[3] & 0x08 != 0;
            if let Some(payload) = advance_fsm(conn, subcommand_id, status_ok, held_a) {
                let _ = conn.enqueue_outgoing(conn.control_cid, payload);
            }
            Ok(())
        }
        INPUT_REPORT_FULL | INPUT_REPORT_COMPAT => {
            if report[0] == INPUT_REPORT_COMPAT {
                scratch(conn).compatibility_mode = true;
            }
            if report.len() < 12 {
                return Err(Error::UnexpectedReport {
                    report_id: report[0],
                    len: report.len(),
                    expected: ">= 12",
                });
            }
            conn.virtual_gamepad.clear_updated();

            let b3 = report[3];
            let b4 = report[4];
            let b5 = report[5];

            let mut buttons = Buttons::empty();
            buttons.set(Buttons::A, b3 & 0x08 != 0);
            buttons.set(Buttons::B, b3 & 0x04 != 0);
            buttons.set(Buttons::X, b3 & 0x02 != 0);
            buttons.set(Buttons::Y, b3 & 0x01 != 0);
            buttons.set(Buttons::SHOULDER_R, b3 & 0x40 != 0);
            buttons.set(Buttons::TRIGGER_R, b3 & 0x80 != 0);
            buttons.set(Buttons::SHOULDER_L, b5 & 0x40 != 0);
            buttons.set(Buttons::TRIGGER_L, b5 & 0x80 != 0);
            buttons.set(Buttons::THUMB_L, b4 & 0x08 != 0);
            buttons.set(Buttons::THUMB_R, b4 & 0x04 != 0);
            conn.virtual_gamepad.set_buttons(buttons);

            let mut dpad = Dpad::empty();
            dpad.set(Dpad::DOWN, b5 & 0x01 != 0);
            dpad.set(Dpad::UP, b5 & 0x02 != 0);
            dpad.set(Dpad::RIGHT, b5 & 0x04 != 0);
            dpad.set(Dpad::LEFT, b5 & 0x08 != 0);
            conn.virtual_gamepad.set_dpad(dpad);

            let mut misc = MiscButtons::empty();
            misc.set(MiscButtons::BACK, b4 & 0x01 != 0); // Minus
            misc.set(MiscButtons::MENU, b4 & 0x02 != 0); // Plus
            misc.set(MiscButtons::SYSTEM, b4 & 0x10 != 0); // Home
            conn.virtual_gamepad.set_misc_buttons(misc);

            if report.len() >= 12 {
                let cal = scratch(conn).calibration;
                let (lx, ly) = unpack_stick_bytes(&report[6..9]);
                let (rx, ry) = unpack_stick_bytes(&report[9..12]);
                conn.virtual_gamepad.set_axis_x(calibrate_axis(lx, cal.left_x));
                conn.virtual_gamepad.set_axis_y(-calibrate_axis(ly, cal.left_y));
                conn.virtual_gamepad.set_axis_rx(calibrate_axis(rx, cal.right_x));
                conn.virtual_gamepad.set_axis_ry(-calibrate_axis(ry, cal.right_y));
            }

            conn.virtual_gamepad.set_battery(report.get(2).copied().unwrap_or(0) >> 4);

            Ok(())
        }
        _ => Ok(()),
    }
}

pub fn set_player_leds(conn: &mut Connection, leds: u8) -> Option<Vec<u8>> {
    let counter = next_counter(conn);
    Some(subcommand_packet(counter, SUBCMD_SET_PLAYER_LIGHTS, &[leds]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bt::Addr;

    fn new_conn() -> Connection {
        let mut c = Connection::new(Addr([1, 0, 0, 0, 0, 0]), 8);
        c.controller_type = crate::vendor::ControllerType::SwitchPro;
        c.parser_scratch = crate::parser::ParserState::Switch(SwitchState::default());
        c
    }

    #[test]
    fn calibrate_axis_clamps_to_range() {
        let cal = StickCalibration { min: 500, center: 2048, max: 3600 };
        assert_eq!(calibrate_axis(2048, cal), 0);
        assert_eq!(calibrate_axis(3600, cal), 512);
        assert_eq!(calibrate_axis(500, cal), -512);
        assert_eq!(calibrate_axis(5000, cal), 512); // clamps beyond max
    }

    #[test]
    fn packet_counter_wraps_at_sixteen() {
        let mut conn = new_conn();
        for i in 0..16u8 {
            assert_eq!(next_counter(&mut conn), i);
        }
        assert_eq!(next_counter(&mut conn), 0);
    }

    #[test]
    fn setup_begins_req_dev_info() {
        let mut conn = new_conn();
        let payload = setup(&mut conn).unwrap();
        assert_eq!(payload[0], SUBCOMMAND_REPORT_ID);
        assert_eq!(payload[10], SUBCMD_REQ_DEV_INFO);
        match &conn.parser_scratch {
            crate::parser::ParserState::Switch(s) => assert_eq!(s.fsm, SwitchFsm::ReqDevInfo),
            _ => unreachable!(),
        }
    }

    #[test]
    fn compatibility_fallback_report_id_sets_flag() {
        let mut conn = new_conn();
        let mut report = vec![0u8; 12];
        report[0] = INPUT_REPORT_COMPAT;
        parse_raw(&mut conn, &report).unwrap();
        match &conn.parser_scratch {
            crate::parser::ParserState::Switch(s) => assert!(s.compatibility_mode),
            _ => unreachable!(),
        }
    }

    #[test]
    fn heuristic_packet_matches_vendor_classifier() {
        let mut packet = vec![0u8; 13];
        packet[0] = 0xA1;
        packet[1] = 0x3F;
        assert!(crate::vendor::classify_by_packet(&packet));
    }
}
