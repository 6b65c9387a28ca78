use roomdeck::{Args, RoomdeckApp};
use tracing::info;

use crate::{capability, setup};

/// Window shell around the room app.
pub struct Chrome {
    app: RoomdeckApp,
}

impl Chrome {
    pub fn new(cc: &eframe::CreationContext<'_>, args: &Args) -> Self {
        setup::setup_cc(&cc.egui_ctx, args.options);
        info!(
            "starting roomdeck with options {:?}, wgpu: {}",
            args.options,
            cc.wgpu_render_state.is_some()
        );
        let loader = capability::default_loader(cc.wgpu_render_state.as_ref());
        Self::with_app(RoomdeckApp::new(args, loader))
    }

    pub fn with_app(app: RoomdeckApp) -> Self {
        Self { app }
    }
}

impl eframe::App for Chrome {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| self.app.update(ui));
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        let frames = self.app.render_loop_mut().frames();
        self.app.render_loop_mut().stop();
        info!("roomdeck exiting after {frames} frames");
    }
}
