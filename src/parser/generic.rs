//! Plain HID-descriptor-walking parser shared by the families with no
//! vendor-specific handshake: Android, Nimbus, Smart TV Remote, OUYA,
//! 8BitDo, Generic, Apple/MFi, Steam Controller (and V2), mobile touch
//! pads, Xbox 360, and the XInput-over-Switch / Switch-input-only
//! variants. Each differs only in a button-number remap; 8BitDo swaps
//! A/B and X/Y to match its physical labeling relative to the Android
//! baseline (spec.md §4.5).

use crate::device::Connection;
use crate::gamepad::{Buttons, MiscButtons};
use crate::hid::Field;
use crate::normalize::{dpad_from_usage, hat_to_dpad, normalize_axis, normalize_hat, normalize_pedal};
use crate::parser::usage::{generic_desktop, simulation, BUTTON_PAGE};
use crate::vendor::ControllerType;

fn button_for(controller_type: ControllerType, usage: u16) -> Option<Buttons> {
    let swapped = controller_type == ControllerType::EightBitDo;
    let slot = match usage {
        1 => Buttons::A,
        2 => Buttons::B,
        3 => Buttons::X,
        4 => Buttons::Y,
        5 => Buttons::SHOULDER_L,
        6 => Buttons::SHOULDER_R,
        7 => Buttons::TRIGGER_L,
        8 => Buttons::TRIGGER_R,
        9 => Buttons::THUMB_L,
        10 => Buttons::THUMB_R,
        _ => return None,
    };
    Some(if swapped {
        match slot {
            Buttons::A => Buttons::B,
            Buttons::B => Buttons::A,
            Buttons::X => Buttons::Y,
            Buttons::Y => Buttons::X,
            other => other,
        }
    } else {
        slot
    })
}

pub fn parse_usage(conn: &mut Connection, field: &Field) {
    let controller_type = conn.controller_type;
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
        (p, generic_desktop::Z) if p == generic_desktop::PAGE => {
            conn.virtual_gamepad.set_brake(normalize_pedal(&field.globals, field.value) as u32);
        }
        (p, generic_desktop::RZ) if p == generic_desktop::PAGE => {
            conn.virtual_gamepad.set_accelerator(normalize_pedal(&field.globals, field.value) as u32);
        }
        (p, simulation::BRAKE) if p == simulation::PAGE => {
            conn.virtual_gamepad.set_brake(normalize_pedal(&field.globals, field.value) as u32);
        }
        (p, simulation::ACCELERATOR) if p == simulation::PAGE => {
            conn.virtual_gamepad.set_accelerator(normalize_pedal(&field.globals, field.value) as u32);
        }
        (p, generic_desktop::HAT_SWITCH) if p == generic_desktop::PAGE => {
            let hat = normalize_hat(&field.globals, field.value);
            let bits = hat_to_dpad(hat);
            conn.virtual_gamepad.set_dpad(crate::gamepad::Dpad::from_bits_truncate(bits));
        }
        (p, u)
            if p == generic_desktop::PAGE
                && matches!(
                    u,
                    generic_desktop::DPAD_UP
                        | generic_desktop::DPAD_DOWN
                        | generic_desktop::DPAD_RIGHT
                        | generic_desktop::DPAD_LEFT
                ) =>
        {
            let mut dpad_state = conn.virtual_gamepad.dpad.bits();
            dpad_from_usage(u, field.value, &mut dpad_state);
            conn.virtual_gamepad.set_dpad(crate::gamepad::Dpad::from_bits_truncate(dpad_state));
        }
        (p, generic_desktop::SYSTEM_MAIN_MENU) if p == generic_desktop::PAGE => {
            let mut misc = conn.virtual_gamepad.misc_buttons;
            misc.set(MiscButtons::SYSTEM, field.value != 0);
            conn.virtual_gamepad.set_misc_buttons(misc);
        }
        (p, u) if p == BUTTON_PAGE => {
            if let Some(bit) = button_for(controller_type, u) {
                let mut buttons = conn.virtual_gamepad.buttons;
                buttons.set(bit, field.value != 0);
                conn.virtual_gamepad.set_buttons(buttons);
            } else if u == 11 {
                let mut misc = conn.virtual_gamepad.misc_buttons;
                misc.set(MiscButtons::BACK, field.value != 0);
                conn.virtual_gamepad.set_misc_buttons(misc);
            } else if u == 12 {
                let mut misc = conn.virtual_gamepad.misc_buttons;
                misc.set(MiscButtons::MENU, field.value != 0);
                conn.virtual_gamepad.set_misc_buttons(misc);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bt::Addr;
    use crate::device::Connection;
    use crate::hid::Globals;

    fn new_conn(controller_type: ControllerType) -> Connection {
        let mut c = Connection::new(Addr([1, 0, 0, 0, 0, 0]), 8);
        c.controller_type = controller_type;
        c
    }

    fn field(page: u16, usage: u16, value: i32) -> Field {
        Field { usage_page: page, usage, value, globals: Globals { logical_minimum: 0, logical_maximum: 1, ..Default::default() } }
    }

    #[test]
    fn android_button_one_is_a() {
        let mut conn = new_conn(ControllerType::Android);
        parse_usage(&mut conn, &field(BUTTON_PAGE, 1, 1));
        assert!(conn.virtual_gamepad.buttons.contains(Buttons::A));
    }

    #[test]
    fn eightbitdo_swaps_a_and_b() {
        let mut conn = new_conn(ControllerType::EightBitDo);
        parse_usage(&mut conn, &field(BUTTON_PAGE, 1, 1));
        assert!(conn.virtual_gamepad.buttons.contains(Buttons::B));
        assert!(!conn.virtual_gamepad.buttons.contains(Buttons::A));
    }

    #[test]
    fn dpad_usage_sets_and_clears_bit() {
        let mut conn = new_conn(ControllerType::Generic);
        parse_usage(&mut conn, &field(generic_desktop::PAGE, generic_desktop::DPAD_UP, 1));
        assert!(conn.virtual_gamepad.dpad.contains(crate::gamepad::Dpad::UP));
        parse_usage(&mut conn, &field(generic_desktop::PAGE, generic_desktop::DPAD_UP, 0));
        assert!(!conn.virtual_gamepad.dpad.contains(crate::gamepad::Dpad::UP));
    }
}
