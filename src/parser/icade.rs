//! iCade (arcade cabinet and "8-bitty") parser.
//!
//! iCade cabinets speak Bluetooth HID keyboard, not a gamepad report: each
//! direction and button is a press/release pair of ASCII scancodes. Both
//! models share the scancode table but remap a few of them to different
//! virtual buttons, selected by `(vid, pid)` at classification time.

use crate::device::Connection;
use crate::error::Result;
use crate::gamepad::{Buttons, Dpad, MiscButtons};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum IcadeModel {
    Cabinet,
    EightBitty,
}

#[derive(Clone, Debug)]
pub struct IcadeState {
    pub model: IcadeModel,
}

impl IcadeState {
    /// Selects a model by `(vid, pid)`, per spec.md §4.5.
    #[must_use]
    pub fn for_vid_pid(vid: u16, pid: u16) -> Self {
        let model = if (vid, pid) == (0x15E4, 0x2EDB) { IcadeModel::EightBitty } else { IcadeModel::Cabinet };
        Self { model }
    }
}

/// One scancode's effect: which bit to set/clear, and on which field.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Target {
    Dpad(Dpad),
    Button(Buttons),
    Misc(MiscButtons),
}

fn scancode_target(model: IcadeModel, scancode: u8) -> Option<(Target, bool)> {
    use Target::{Button, Dpad as D, Misc};
    let (target, press) = match scancode {
        b'w' => (D(Dpad::UP), true),
        b'e' => (D(Dpad::UP), false),
        b'd' => (D(Dpad::RIGHT), true),
        b'c' => (D(Dpad::RIGHT), false),
        b'x' => (D(Dpad::DOWN), true),
        b'z' => (D(Dpad::DOWN), false),
        b'a' => (D(Dpad::LEFT), true),
        b'q' => (D(Dpad::LEFT), false),
        b'y' => (Button(Buttons::A), true),
        b't' => (Button(Buttons::A), false),
        b'h' => (Button(Buttons::B), true),
        b'r' => (Button(Buttons::B), false),
        b'u' => (Button(Buttons::X), true),
        b'f' => (Button(Buttons::X), false),
        b'j' => (Button(Buttons::Y), true),
        b'n' => (Button(Buttons::Y), false),
        b'i' => (Button(Buttons::SHOULDER_L), true),
        b'm' => (Button(Buttons::SHOULDER_L), false),
        b'k' => (Button(Buttons::SHOULDER_R), true),
        b'p' => (Button(Buttons::SHOULDER_R), false),
        b'o' => (Misc(MiscButtons::MENU), true),
        b'l' => (Misc(MiscButtons::MENU), false),
        _ => return None,
    };
    // The 8-bitty swaps A<->B and X<->Y relative to the Cabinet mapping
    // (spec.md §4.5), matching its physical button labeling.
    let target = if model == IcadeModel::EightBitty {
        match target {
            Button(Buttons::A) => Button(Buttons::B),
            Button(Buttons::B) => Button(Buttons::A),
            Button(Buttons::X) => Button(Buttons::Y),
            Button(Buttons::Y) => Button(Buttons::X),
            other => other,
        }
    } else {
        target
    };
    Some((target, press))
}

fn scratch(conn: &Connection) -> IcadeModel {
    match &conn.parser_scratch {
        crate::parser::ParserState::Icade(s) => s.model,
        _ => IcadeModel::Cabinet,
    }
}

/// Decodes one HID keyboard scancode report: a press is a non-zero byte in
/// the report, a release is the corresponding byte going back to zero.
/// Real iCade input is a standard boot-keyboard report; this takes each
/// non-zero byte in `report` as one scancode.
pub fn parse_raw(conn: &mut Connection, report: &[u8]) -> Result<()> {
    let model = scratch(conn);
    conn.virtual_gamepad.clear_updated();
    let mut dpad = conn.virtual_gamepad.dpad;
    let mut buttons = conn.virtual_gamepad.buttons;
    let mut misc = conn.virtual_gamepad.misc_buttons;
    for &scancode in report {
        if scancode == 0 {
            continue;
        }
        if let Some((target, press)) = scancode_target(model, scancode) {
            match target {
                Target::Dpad(bit) => dpad.set(bit, press),
                Target::Button(bit) => buttons.set(bit, press),
                Target::Misc(bit) => misc.set(bit, press),
            }
        }
    }
    conn.virtual_gamepad.set_dpad(dpad);
    conn.virtual_gamepad.set_buttons(buttons);
    conn.virtual_gamepad.set_misc_buttons(misc);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bt::Addr;
    use crate::vendor::ControllerType;

    fn new_conn(model: IcadeModel) -> Connection {
        let mut c = Connection::new(Addr([1, 0, 0, 0, 0, 0]), 8);
        c.controller_type = ControllerType::ICade;
        c.parser_scratch = crate::parser::ParserState::Icade(IcadeState { model });
        c
    }

    #[test]
    fn cabinet_press_release_pair_toggles_dpad() {
        let mut conn = new_conn(IcadeModel::Cabinet);
        parse_raw(&mut conn, &[b'w']).unwrap();
        assert!(conn.virtual_gamepad.dpad.contains(Dpad::UP));
        parse_raw(&mut conn, &[b'e']).unwrap();
        assert!(!conn.virtual_gamepad.dpad.contains(Dpad::UP));
    }

    #[test]
    fn eight_bitty_swaps_a_and_b() {
        let mut conn = new_conn(IcadeModel::EightBitty);
        parse_raw(&mut conn, &[b'y']).unwrap();
        assert!(conn.virtual_gamepad.buttons.contains(Buttons::B));
        assert!(!conn.virtual_gamepad.buttons.contains(Buttons::A));
    }
}
