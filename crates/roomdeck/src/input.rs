use egui::Key;

use crate::room::RoomCommand;

/// Meters per move key press
pub const MOVE_STEP: f32 = 0.4;
/// Radians per rotate key press
pub const ROTATE_STEP: f32 = 0.2;

/// Keyboard shortcut for a key press, if it has one.
pub fn key_command(key: Key) -> Option<RoomCommand> {
    let (dx, dz) = match key {
        Key::ArrowUp | Key::W => (0.0, -MOVE_STEP),
        Key::ArrowDown | Key::S => (0.0, MOVE_STEP),
        Key::ArrowLeft | Key::A => (-MOVE_STEP, 0.0),
        Key::ArrowRight | Key::D => (MOVE_STEP, 0.0),
        Key::Q => return Some(RoomCommand::RotateSelected(ROTATE_STEP)),
        Key::E => return Some(RoomCommand::RotateSelected(-ROTATE_STEP)),
        _ => return None,
    };
    Some(RoomCommand::MoveSelected { dx, dz })
}

/// Key commands pressed this frame, in event order.
pub fn key_commands(input: &egui::InputState) -> Vec<RoomCommand> {
    input
        .events
        .iter()
        .filter_map(|event| match event {
            egui::Event::Key {
                key, pressed: true, ..
            } => key_command(*key),
            _ => None,
        })
        .collect()
}
