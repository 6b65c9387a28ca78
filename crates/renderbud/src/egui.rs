use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use egui::{Color32, Painter, Rect};
use glam::{Vec2, Vec3};

use crate::{Camera, RenderError, Renderer, Scene, ShadingModel};

#[derive(Clone)]
pub struct EguiRenderer {
    pub renderer: Arc<Mutex<Renderer>>,
}

/// Marker type for the egui paint callback that renders the full scene.
#[derive(Copy, Clone)]
pub struct SceneRender;

fn color32(c: Vec3) -> Color32 {
    let c = (c.clamp(Vec3::ZERO, Vec3::ONE) * 255.0).round();
    Color32::from_rgb(c.x as u8, c.y as u8, c.z as u8)
}

impl EguiRenderer {
    /// Build the renderer on eframe's device and register it as a paint
    /// callback resource.
    pub fn new(
        rs: &egui_wgpu::RenderState,
        scene: Scene,
        shading: ShadingModel,
    ) -> Result<Self, RenderError> {
        let renderer = Renderer::new(&rs.device, rs.target_format, scene, shading)?;
        let egui_renderer = Self {
            renderer: Arc::new(Mutex::new(renderer)),
        };

        rs.renderer
            .write()
            .callback_resources
            .insert(egui_renderer.clone());

        Ok(egui_renderer)
    }

    /// Lock the renderer, recovering from a poisoned lock.
    pub fn lock(&self) -> MutexGuard<'_, Renderer> {
        self.renderer.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Queue one frame of the scene into `rect`: the clear color through
    /// the painter, then the GPU pass as a paint callback.
    pub fn paint(&self, painter: &Painter, rect: Rect, camera: &Camera) {
        let background = {
            let mut renderer = self.lock();
            renderer.set_camera(*camera, Vec2::new(rect.width(), rect.height()));
            renderer.scene().background
        };

        painter.rect_filled(rect, 0.0, color32(background));
        painter.add(egui_wgpu::Callback::new_paint_callback(rect, SceneRender));
    }
}

impl egui_wgpu::CallbackTrait for SceneRender {
    fn prepare(
        &self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        _screen_descriptor: &egui_wgpu::ScreenDescriptor,
        _egui_encoder: &mut wgpu::CommandEncoder,
        resources: &mut egui_wgpu::CallbackResources,
    ) -> Vec<wgpu::CommandBuffer> {
        if let Some(egui_renderer) = resources.get::<EguiRenderer>() {
            egui_renderer.lock().prepare(device, queue);
        }
        Vec::new()
    }

    fn paint(
        &self,
        _info: egui::PaintCallbackInfo,
        render_pass: &mut wgpu::RenderPass<'_>,
        resources: &egui_wgpu::CallbackResources,
    ) {
        if let Some(egui_renderer) = resources.get::<EguiRenderer>() {
            egui_renderer.lock().render_pass(render_pass);
        }
    }
}
