//! Canvas and control panel widgets

use egui::{Align2, Color32, FontId, PointerButton, Pos2, Rect, Response, RichText, Ui};
use strum::IntoEnumIterator;

use crate::backend::RenderBackend;
use crate::catalog::FurnitureType;
use crate::input;
use crate::room::{RoomCommand, RoomState};

mod colors {
    use egui::Color32;

    pub const NOTICE: Color32 = Color32::from_rgb(0xfb, 0xbf, 0x24);
    pub const OVERLAY_TEXT: Color32 = Color32::from_rgba_premultiplied(180, 180, 190, 180);
}

/// Debug overlay contents
pub struct DebugInfo {
    pub frames: u64,
}

/// Turn pointer and keyboard input over the room canvas into commands and
/// apply them. Runs before anything that reads the room is drawn, so the
/// canvas and the status panel show the same state.
pub fn handle_canvas_input(
    ui: &Ui,
    response: &Response,
    room: &mut RoomState,
    backend: &mut dyn RenderBackend,
) {
    if response.hovered()
        && ui.input(|i| i.pointer.button_pressed(PointerButton::Primary))
        && let Some(pos) = ui.input(|i| i.pointer.interact_pos())
    {
        room.pick_at(pos, response.rect, backend);
    }

    if response.dragged_by(PointerButton::Secondary) {
        backend.on_orbit_drag(response.drag_delta());
    }

    if response.hovered() {
        let scroll = ui.input(|i| i.raw_scroll_delta.y);
        if scroll.abs() > 0.0 {
            // wheel up zooms in
            backend.on_zoom(-scroll);
        }
    }

    if !ui.ctx().wants_keyboard_input() {
        for cmd in ui.input(input::key_commands) {
            room.apply(cmd, backend);
        }
    }
}

/// Paint one frame of the room into `rect`.
pub fn paint_room_view(
    ui: &Ui,
    rect: Rect,
    room: &RoomState,
    backend: &mut dyn RenderBackend,
    debug: Option<DebugInfo>,
) {
    let painter = ui.painter_at(rect);
    backend.render_frame(&room.scene, &painter, rect);

    if let Some(debug) = debug {
        draw_debug_overlay(&painter, rect, room, backend, &debug);
    }
}

fn draw_debug_overlay(
    painter: &egui::Painter,
    rect: Rect,
    room: &RoomState,
    backend: &dyn RenderBackend,
    debug: &DebugInfo,
) {
    let text = format!(
        "{} | items: {} | frame {}",
        backend.kind(),
        room.scene.len(),
        debug.frames
    );
    painter.text(
        Pos2::new(rect.left() + 10.0, rect.top() + 10.0),
        Align2::LEFT_TOP,
        text,
        FontId::monospace(12.0),
        colors::OVERLAY_TEXT,
    );
}

/// Add buttons, swap toggle, edit buttons and the selection status.
pub fn render_controls_panel(
    ui: &mut Ui,
    room: &RoomState,
    notice: Option<&str>,
) -> Option<RoomCommand> {
    let mut action = None;
    let status = room.status();

    ui.heading("Roomdeck");

    if let Some(notice) = notice {
        ui.label(RichText::new(notice).color(colors::NOTICE));
    }

    ui.separator();
    ui.label("Add furniture");
    ui.horizontal_wrapped(|ui| {
        for kind in FurnitureType::iter() {
            if ui.button(kind.label()).clicked() {
                action = Some(RoomCommand::Add(kind));
            }
        }
    });

    ui.separator();
    if ui
        .selectable_label(status.swap.is_armed(), status.swap.to_string())
        .clicked()
    {
        action = Some(RoomCommand::ToggleSwapMode);
    }

    ui.horizontal(|ui| {
        if ui.button("Duplicate").clicked() {
            action = Some(RoomCommand::DuplicateSelected);
        }
        if ui.button("Remove").clicked() {
            action = Some(RoomCommand::RemoveSelected);
        }
    });

    ui.separator();
    egui::Grid::new("roomdeck_status")
        .num_columns(2)
        .show(ui, |ui| {
            ui.label("Selected");
            ui.strong(&status.selected);
            ui.end_row();

            ui.label("Position");
            ui.strong(&status.position);
            ui.end_row();
        });

    ui.separator();
    ui.small("Arrows / WASD move, Q / E rotate");
    ui.small("Right-drag orbits, scroll zooms (3D)");

    action
}

/// Placeholder while the backend is still being chosen.
pub fn show_searching(ui: &mut Ui) {
    ui.centered_and_justified(|ui| {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.label(RichText::new("Loading 3D renderer...").color(Color32::GRAY));
        });
    });
}
