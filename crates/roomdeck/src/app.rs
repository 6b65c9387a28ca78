use tracing::info;

use crate::backend::RenderBackend;
use crate::loader::CapabilityLoader;
use crate::room::{RoomCommand, RoomState};
use crate::selector::{BackendSelector, Capability3D, SelectorState};
use crate::view::{self, DebugInfo};
use crate::{Args, RoomdeckOptions};

/// Continuous repaint driver. Each tick runs after the frame has been
/// updated and painted, and asks egui for another frame until stopped.
#[derive(Debug)]
pub struct RenderLoop {
    running: bool,
    frames: u64,
}

impl Default for RenderLoop {
    fn default() -> Self {
        Self {
            running: true,
            frames: 0,
        }
    }
}

impl RenderLoop {
    /// Schedule the next frame. Returns false once stopped.
    pub fn tick(&mut self, ctx: &egui::Context) -> bool {
        if !self.running {
            return false;
        }
        self.frames += 1;
        ctx.request_repaint();
        true
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

pub struct RoomdeckApp {
    room: RoomState,
    selector: BackendSelector,
    backend: Option<Box<dyn RenderBackend>>,
    notice: Option<&'static str>,
    options: RoomdeckOptions,
    render_loop: RenderLoop,
}

impl RoomdeckApp {
    /// Start the app, searching `loader` for 3D unless the arguments force
    /// the isometric view.
    pub fn new(args: &Args, loader: CapabilityLoader<Capability3D>) -> Self {
        let selector = if args.options.contains(RoomdeckOptions::ForceIsometric) {
            BackendSelector::isometric_only(args.scale)
        } else {
            BackendSelector::start(loader, args.scale)
        };
        Self::with_selector(selector, args.options)
    }

    pub fn with_selector(selector: BackendSelector, options: RoomdeckOptions) -> Self {
        Self {
            room: RoomState::new(),
            selector,
            backend: None,
            notice: None,
            options,
            render_loop: RenderLoop::default(),
        }
    }

    pub fn room(&self) -> &RoomState {
        &self.room
    }

    pub fn backend(&self) -> Option<&dyn RenderBackend> {
        self.backend.as_deref()
    }

    pub fn notice(&self) -> Option<&'static str> {
        self.notice
    }

    pub fn selector_state(&self) -> SelectorState {
        self.selector.state()
    }

    pub fn render_loop_mut(&mut self) -> &mut RenderLoop {
        &mut self.render_loop
    }

    /// Apply a command once a backend exists. Before that, input is inert.
    pub fn apply(&mut self, cmd: RoomCommand) {
        if let Some(backend) = self.backend.as_deref_mut() {
            self.room.apply(cmd, backend);
        }
    }

    fn poll_backend(&mut self) {
        let Some(resolution) = self.selector.poll() else {
            return;
        };
        let mut backend = resolution.backend;
        self.room.seed(backend.as_mut());
        info!("{} backend ready", backend.kind());
        self.notice = resolution.notice;
        self.backend = Some(backend);
    }

    /// One frame: canvas input first, then the control panel, then the
    /// room itself.
    pub fn update(&mut self, ui: &mut egui::Ui) {
        self.poll_backend();

        let (panel_rect, canvas_rect) = split_panel(ui.available_rect_before_wrap());
        let canvas = ui.interact(
            canvas_rect,
            ui.id().with("room_canvas"),
            egui::Sense::click_and_drag(),
        );
        if let Some(backend) = self.backend.as_deref_mut() {
            view::handle_canvas_input(ui, &canvas, &mut self.room, backend);
        }

        ui.painter()
            .rect_filled(panel_rect, 0.0, ui.visuals().panel_fill);
        ui.painter().vline(
            panel_rect.right(),
            panel_rect.y_range(),
            ui.visuals().widgets.noninteractive.bg_stroke,
        );
        let cmd = ui
            .scope_builder(
                egui::UiBuilder::new().max_rect(panel_rect.shrink(PANEL_MARGIN)),
                |ui| view::render_controls_panel(ui, &self.room, self.notice),
            )
            .inner;
        if let Some(cmd) = cmd {
            self.apply(cmd);
        }

        let debug = self
            .options
            .contains(RoomdeckOptions::Debug)
            .then(|| DebugInfo {
                frames: self.render_loop.frames(),
            });

        match self.backend.as_deref_mut() {
            Some(backend) => view::paint_room_view(ui, canvas_rect, &self.room, backend, debug),
            None => {
                ui.scope_builder(egui::UiBuilder::new().max_rect(canvas_rect), view::show_searching);
            }
        }

        self.render_loop.tick(ui.ctx());
    }
}

const PANEL_WIDTH: f32 = 220.0;
const PANEL_MARGIN: f32 = 8.0;

/// Control panel on the left, room canvas filling the rest.
fn split_panel(rect: egui::Rect) -> (egui::Rect, egui::Rect) {
    let split = (rect.left() + PANEL_WIDTH).min(rect.right());
    let panel = egui::Rect::from_min_max(rect.min, egui::pos2(split, rect.bottom()));
    let canvas = egui::Rect::from_min_max(egui::pos2(split, rect.top()), rect.max);
    (panel, canvas)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stopped_loop_stops_scheduling() {
        let ctx = egui::Context::default();
        let mut rl = RenderLoop::default();
        assert!(rl.tick(&ctx));
        assert!(rl.tick(&ctx));
        rl.stop();
        assert!(!rl.tick(&ctx));
        assert_eq!(rl.frames(), 2);
        assert!(!rl.is_running());
    }

    #[test]
    fn panel_takes_fixed_width_on_the_left() {
        let rect = egui::Rect::from_min_size(egui::pos2(0.0, 10.0), egui::vec2(1000.0, 600.0));
        let (panel, canvas) = split_panel(rect);
        assert_eq!(panel.width(), PANEL_WIDTH);
        assert_eq!(canvas.left(), panel.right());
        assert_eq!(canvas.right(), 1000.0);
        assert_eq!(canvas.height(), 600.0);

        let narrow = egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(100.0, 50.0));
        let (_, canvas) = split_panel(narrow);
        assert_eq!(canvas.width(), 0.0);
    }
}
