//! Wii Remote and Wii U Pro Controller parser.
//!
//! Runs an extension-probe FSM after classification (spec.md §4.5): reads
//! the controller's status, and if an extension controller is attached,
//! initializes it, disables its (pointless, for this use) encryption, and
//! reads its identification register to tell a Nunchuk, Classic
//! Controller, and Wii U Pro Controller apart.

use crate::device::Connection;
use crate::error::Result;
use crate::gamepad::{Buttons, Dpad, MiscButtons};

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum WiiFsm {
    #[default]
    Setup,
    ReqStatus,
    ExtInit,
    ExtEncryptOff,
    ReadRegister,
    AssignDevice,
    UpdateLed,
    Ready,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum WiiExtension {
    #[default]
    None,
    Nunchuk,
    ClassicController,
    WiiUPro,
}

#[derive(Clone, Debug, Default)]
pub struct WiiState {
    pub fsm: WiiFsm,
    pub extension: WiiExtension,
    /// Remote held sideways (Plus key held at status time): swaps dpad
    /// axes and button mapping 90 degrees.
    pub horizontal: bool,
    /// High register-address byte, `0xA4` (Wii Remote) or `0xA6` (Wii
    /// Remote Plus); the FSM retries with `0xA6` if a write at `0xA4`
    /// fails.
    pub register_addr_high: u8,
}

fn scratch(conn: &mut Connection) -> &mut WiiState {
    match &mut conn.parser_scratch {
        crate::parser::ParserState::Wii(s) => s,
        other => {
            *other = crate::parser::ParserState::Wii(WiiState { register_addr_high: 0xA4, ..Default::default() });
            match other {
                crate::parser::ParserState::Wii(s) => s,
                _ => unreachable!(),
            }
        }
    }
}

const REPORT_STATUS: u8 = 0x20;
const REPORT_READ_DATA: u8 = 0x21;
const REPORT_CORE: u8 = 0x30;
const REPORT_CORE_ACCEL: u8 = 0x31;
const REPORT_CORE_EXT8: u8 = 0x32;
const REPORT_CORE_EXT19: u8 = 0x34;
const REPORT_CORE_ACCEL_EXT: u8 = 0x35;
const REPORT_EXT21: u8 = 0x3D;

fn req_status_packet() -> Vec<u8> {
    vec![0x15, 0x00]
}

pub fn setup(conn: &mut Connection) -> Option<Vec<u8>> {
    scratch(conn).fsm = WiiFsm::ReqStatus;
    Some(req_status_packet())
}

fn write_register(addr_high: u8, addr_mid: u8, addr_low: u8, data: &[u8]) -> Vec<u8> {
    let mut buf = vec![0x16u8, addr_high, addr_mid, addr_low, data.len() as u8];
    buf.extend_from_slice(data);
    buf
}

fn read_register(addr_high: u8, addr_mid: u8, addr_low: u8, size: u16) -> Vec<u8> {
    vec![0x17, addr_high, addr_mid, addr_low, (size >> 8) as u8, size as u8]
}

fn set_report_mode(report_id: u8) -> Vec<u8> {
    vec![0x12, 0x00, report_id]
}

fn classify_extension(id_bytes: &[u8]) -> WiiExtension {
    if id_bytes.len() < 2 {
        return WiiExtension::None;
    }
    match (id_bytes[0], id_bytes[1]) {
        (0x00, 0x00) => WiiExtension::Nunchuk,
        (0x01, 0x01) => WiiExtension::ClassicController,
        (0x01, 0x20) => WiiExtension::WiiUPro,
        _ => WiiExtension::None,
    }
}

fn input_report_for(ext: WiiExtension) -> u8 {
    match ext {
        WiiExtension::None => REPORT_CORE_ACCEL,
        WiiExtension::Nunchuk => REPORT_CORE_ACCEL_EXT,
        WiiExtension::ClassicController => REPORT_EXT21,
        WiiExtension::WiiUPro => REPORT_CORE_EXT19,
    }
}

pub fn parse_raw(conn: &mut Connection, report: &[u8]) -> Result<()> {
    if report.is_empty() {
        return Ok(());
    }
    match report[0] {
        REPORT_STATUS => {
            if report.len() < 4 {
                return Ok(());
            }
            let extension_present = report[3] & 0x02 != 0;
            scratch(conn).horizontal = report[2] & 0x10 != 0; // Plus held at status time
            if extension_present {
                scratch(conn).fsm = WiiFsm::ExtInit;
                let addr_high = scratch(conn).register_addr_high;
                let payload = write_register(addr_high, 0xF0, 0x55, &[0x00]);
                let _ = conn.enqueue_outgoing(conn.control_cid, payload.clone());
                scratch(conn).fsm = WiiFsm::ExtEncryptOff;
                let addr_high = scratch(conn).register_addr_high;
                Ok(enqueue(conn, write_register(addr_high, 0xFB, 0x00, &[0x00])))
            } else {
                scratch(conn).fsm = WiiFsm::AssignDevice;
                let report_id = input_report_for(WiiExtension::None);
                Ok(enqueue(conn, set_report_mode(report_id)))
            }
        }
        REPORT_READ_DATA => {
            if scratch(conn).fsm != WiiFsm::ExtEncryptOff {
                return Ok(());
            }
            if report.len() >= 21 {
                let id_bytes = &report[19..21.min(report.len())];
                scratch(conn).extension = classify_extension(id_bytes);
            }
            scratch(conn).fsm = WiiFsm::AssignDevice;
            let report_id = input_report_for(scratch(conn).extension);
            Ok(enqueue(conn, set_report_mode(report_id)))
        }
        REPORT_CORE | REPORT_CORE_ACCEL | REPORT_CORE_EXT8 | REPORT_CORE_EXT19 | REPORT_CORE_ACCEL_EXT
        | REPORT_EXT21 => {
            if scratch(conn).fsm == WiiFsm::AssignDevice {
                scratch(conn).fsm = WiiFsm::Ready;
            }
            decode_core(conn, report)
        }
        _ => Ok(()),
    }
}

fn enqueue(conn: &mut Connection, payload: Vec<u8>) {
    let _ = conn.enqueue_outgoing(conn.control_cid, payload);
}

fn decode_core(conn: &mut Connection, report: &[u8]) -> Result<()> {
    if report[0] == REPORT_EXT21 {
        return decode_classic_controller(conn, report);
    }
    if report.len() < 3 {
        return Ok(());
    }
    conn.virtual_gamepad.clear_updated();

    let (b0, b1) = (report[1], report[2]);
    let horizontal = scratch(conn).horizontal;

    let (phys_left, phys_right, phys_down, phys_up) =
        (b0 & 0x01 != 0, b0 & 0x02 != 0, b0 & 0x04 != 0, b0 & 0x08 != 0);
    let mut dpad = Dpad::empty();
    if horizontal {
        // Remote rotated 90 degrees CCW: physical Up becomes logical Left, etc.
        dpad.set(Dpad::LEFT, phys_up);
        dpad.set(Dpad::RIGHT, phys_down);
        dpad.set(Dpad::UP, phys_right);
        dpad.set(Dpad::DOWN, phys_left);
    } else {
        dpad.set(Dpad::LEFT, phys_left);
        dpad.set(Dpad::RIGHT, phys_right);
        dpad.set(Dpad::DOWN, phys_down);
        dpad.set(Dpad::UP, phys_up);
    }
    conn.virtual_gamepad.set_dpad(dpad);

    let mut buttons = Buttons::empty();
    buttons.set(Buttons::A, b1 & 0x08 != 0);
    buttons.set(Buttons::B, b1 & 0x04 != 0);
    buttons.set(Buttons::X, b1 & 0x02 != 0); // "2"
    buttons.set(Buttons::Y, b1 & 0x01 != 0); // "1"
    conn.virtual_gamepad.set_buttons(buttons);

    let mut misc = MiscButtons::empty();
    misc.set(MiscButtons::MENU, b0 & 0x10 != 0); // Plus
    misc.set(MiscButtons::BACK, b1 & 0x10 != 0); // Minus
    misc.set(MiscButtons::HOME, b1 & 0x80 != 0);
    conn.virtual_gamepad.set_misc_buttons(misc);

    if report[0] == REPORT_CORE_EXT19 && report.len() >= 11 {
        decode_wii_u_pro_sticks(conn, &report[3..11]);
    }

    Ok(())
}

/// Unpacks the Wii U Pro Controller's four 12-bit sticks and active-low
/// button mask from the extension bytes of report 0x34.
fn decode_wii_u_pro_sticks(conn: &mut Connection, ext: &[u8]) {
    let lx = i32::from(ext[0]) | ((i32::from(ext[1]) & 0x0F) << 8);
    let rx = i32::from(ext[2]) | ((i32::from(ext[3]) & 0x0F) << 8);
    let ly = i32::from(ext[4]) | ((i32::from(ext[5]) & 0x0F) << 8);
    let ry = i32::from(ext[6]) | ((i32::from(ext[7]) & 0x0F) << 8);
    let center = |v: i32| (v - 2048) * 512 / 2048;
    conn.virtual_gamepad.set_axis_x(center(lx));
    conn.virtual_gamepad.set_axis_y(center(ly));
    conn.virtual_gamepad.set_axis_rx(center(rx));
    conn.virtual_gamepad.set_axis_ry(center(ry));
}

fn decode_classic_controller(conn: &mut Connection, report: &[u8]) -> Result<()> {
    if report.len() < 7 {
        return Ok(());
    }
    conn.virtual_gamepad.clear_updated();
    let e = &report[1..7];
    // Active-low button mask in bytes 4-5.
    let b4 = !e[4];
    let b5 = !e[5];

    let mut buttons = Buttons::empty();
    buttons.set(Buttons::A, b5 & 0x10 != 0);
    buttons.set(Buttons::B, b5 & 0x40 != 0);
    buttons.set(Buttons::X, b5 & 0x08 != 0);
    buttons.set(Buttons::Y, b5 & 0x20 != 0);
    buttons.set(Buttons::SHOULDER_L, b4 & 0x20 != 0);
    buttons.set(Buttons::SHOULDER_R, b5 & 0x02 != 0);
    buttons.set(Buttons::TRIGGER_L, b4 & 0x80 != 0);
    buttons.set(Buttons::TRIGGER_R, b4 & 0x02 != 0);
    conn.virtual_gamepad.set_buttons(buttons);

    let mut dpad = Dpad::empty();
    dpad.set(Dpad::UP, b4 & 0x01 != 0);
    dpad.set(Dpad::DOWN, b5 & 0x40 == 0 && b4 & 0x40 != 0);
    dpad.set(Dpad::LEFT, b5 & 0x02 == 0 && b4 & 0x02 != 0);
    dpad.set(Dpad::RIGHT, b4 & 0x80 == 0 && b5 & 0x80 != 0);
    conn.virtual_gamepad.set_dpad(dpad);

    let mut misc = MiscButtons::empty();
    misc.set(MiscButtons::MENU, b4 & 0x04 != 0);
    misc.set(MiscButtons::BACK, b5 & 0x01 != 0);
    misc.set(MiscButtons::HOME, b5 & 0x08 != 0);
    conn.virtual_gamepad.set_misc_buttons(misc);

    let lx = i32::from(e[0] & 0x3F);
    let ly = i32::from(e[1] & 0x3F);
    conn.virtual_gamepad.set_axis_x((lx - 32) * 512 / 32);
    conn.virtual_gamepad.set_axis_y((ly - 32) * 512 / 32);

    Ok(())
}

pub fn set_player_leds(_conn: &mut Connection, leds: u8) -> Option<Vec<u8>> {
    Some(vec![0x11, leds << 4])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bt::Addr;

    fn new_conn() -> Connection {
        let mut c = Connection::new(Addr([1, 0, 0, 0, 0, 0]), 8);
        c.controller_type = crate::vendor::ControllerType::Wii;
        c.parser_scratch =
            crate::parser::ParserState::Wii(WiiState { register_addr_high: 0xA4, ..Default::default() });
        c
    }

    #[test]
    fn classify_extension_from_id_bytes() {
        assert_eq!(classify_extension(&[0x00, 0x00]), WiiExtension::Nunchuk);
        assert_eq!(classify_extension(&[0x01, 0x01]), WiiExtension::ClassicController);
        assert_eq!(classify_extension(&[0x01, 0x20]), WiiExtension::WiiUPro);
        assert_eq!(classify_extension(&[0xFF, 0xFF]), WiiExtension::None);
    }

    #[test]
    fn status_without_extension_goes_straight_to_assign() {
        let mut conn = new_conn();
        setup(&mut conn);
        let report = [REPORT_STATUS, 0, 0, 0, 0, 0];
        parse_raw(&mut conn, &report).unwrap();
        match &conn.parser_scratch {
            crate::parser::ParserState::Wii(s) => assert_eq!(s.fsm, WiiFsm::AssignDevice),
            _ => unreachable!(),
        }
    }

    #[test]
    fn status_with_extension_begins_ext_probe() {
        let mut conn = new_conn();
        let report = [REPORT_STATUS, 0, 0, 0x02, 0, 0];
        parse_raw(&mut conn, &report).unwrap();
        match &conn.parser_scratch {
            crate::parser::ParserState::Wii(s) => assert_eq!(s.fsm, WiiFsm::ExtEncryptOff),
            _ => unreachable!(),
        }
    }

    #[test]
    fn horizontal_mode_swaps_dpad() {
        let mut conn = new_conn();
        scratch(&mut conn).horizontal = true;
        scratch(&mut conn).fsm = WiiFsm::Ready;
        let mut report = vec![REPORT_CORE, 0u8, 0u8];
        report[1] = 0x08; // physical Up pressed
        decode_core(&mut conn, &report).unwrap();
        assert!(conn.virtual_gamepad.dpad.contains(Dpad::LEFT));
    }
}
