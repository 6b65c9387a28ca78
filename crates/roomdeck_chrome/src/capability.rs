//! 3D capability sources backed by eframe's wgpu render state.

use eframe::egui_wgpu::RenderState;
use renderbud::ShadingModel;
use renderbud::egui::EguiRenderer;
use roomdeck::{Capability3D, CapabilityLoader, CapabilitySource, room_scene};
use tracing::debug;

/// Builds the room renderer on the window's own wgpu device. Fails when
/// the window runs on the glow renderer and has no wgpu state.
pub struct RenderStateSource {
    name: &'static str,
    render_state: Option<RenderState>,
    shading: ShadingModel,
}

impl RenderStateSource {
    pub fn new(name: &'static str, render_state: Option<RenderState>, shading: ShadingModel) -> Self {
        Self {
            name,
            render_state,
            shading,
        }
    }

    pub fn shading(&self) -> ShadingModel {
        self.shading
    }
}

impl CapabilitySource<Capability3D> for RenderStateSource {
    fn name(&self) -> &str {
        self.name
    }

    fn acquire(&mut self) -> Result<Capability3D, String> {
        let rs = self
            .render_state
            .as_ref()
            .ok_or_else(|| "window has no wgpu render state".to_owned())?;

        let info = rs.adapter.get_info();
        debug!("{} source using {:?}", self.name, info);

        let renderer =
            EguiRenderer::new(rs, room_scene(), self.shading).map_err(|err| err.to_string())?;

        Ok(Capability3D::new(
            format!("{} ({:?}, {:?})", info.name, info.backend, self.shading),
            renderer,
        ))
    }
}

/// Lit pipeline first, then the unlit one for devices that reject it.
pub fn default_loader(render_state: Option<&RenderState>) -> CapabilityLoader<Capability3D> {
    CapabilityLoader::new()
        .with_source(RenderStateSource::new(
            "wgpu-lit",
            render_state.cloned(),
            ShadingModel::Lit,
        ))
        .with_source(RenderStateSource::new(
            "wgpu-unlit",
            render_state.cloned(),
            ShadingModel::Unlit,
        ))
}
