//! A small box-scene renderer. Boxes live in a CPU-side [`Scene`] that also
//! answers picking rays; [`Renderer`] draws that scene with wgpu into a
//! render pass it is handed, typically egui's through [`egui::SceneRender`].

use glam::{Mat4, Vec2, Vec3, Vec4};
use tracing::debug;
use wgpu::util::DeviceExt;

mod camera;
mod mesh;
mod scene;
mod world;

#[cfg(feature = "egui")]
pub mod egui;

pub use camera::{Camera, Ray};
pub use scene::{Grid, Lighting, PointLight, Scene};
pub use world::{BoxMesh, Facing, Material, MeshId, Transform, World, rgb8};

use mesh::{LineVertex, Vertex};

/// Must match the depth attachment of the pass the renderer draws into.
pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth24Plus;

/// Fragment shading used for boxes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ShadingModel {
    /// Ambient, key light and point light.
    #[default]
    Lit,
    /// Flat material color. Used when the lit pipeline can't be built.
    Unlit,
}

impl ShadingModel {
    fn fragment_entry(self) -> &'static str {
        match self {
            ShadingModel::Lit => "fs_lit",
            ShadingModel::Unlit => "fs_unlit",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("{shading:?} pipeline rejected by the device: {reason}")]
    Pipeline {
        shading: ShadingModel,
        reason: String,
    },
}

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct Globals {
    view_proj: Mat4,
    key_light: Vec4,
    ambient: Vec4,
    point_pos: Vec4,
    point_color: Vec4,
}

impl Globals {
    fn new(scene: &Scene, camera: &Camera, viewport: Vec2) -> Self {
        let l = &scene.lighting;
        let (point_pos, point_color) = match l.point {
            Some(p) => (
                p.position.extend(p.range),
                (p.color * p.intensity).extend(p.decay),
            ),
            None => (Vec4::ZERO, Vec4::ZERO),
        };
        Self {
            view_proj: camera.view_proj(viewport.x, viewport.y),
            key_light: l.key_dir.normalize_or_zero().extend(l.key_intensity),
            ambient: Vec4::new(l.ambient, 0.0, 0.0, 0.0),
            point_pos,
            point_color,
        }
    }
}

/// Per-box instance data: unit cube to world, plus material.
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct BoxInstance {
    model: Mat4,
    color: Vec4,
    emissive: Vec4,
}

impl BoxInstance {
    fn from_mesh(mesh: &BoxMesh) -> Self {
        Self {
            model: mesh.world_matrix() * Mat4::from_scale(mesh.size),
            color: mesh.material.color.extend(1.0),
            emissive: mesh.material.emissive.extend(0.0),
        }
    }

    fn desc<'a>() -> wgpu::VertexBufferLayout<'a> {
        const ATTRS: [wgpu::VertexAttribute; 6] = wgpu::vertex_attr_array![
            2 => Float32x4,
            3 => Float32x4,
            4 => Float32x4,
            5 => Float32x4,
            6 => Float32x4,
            7 => Float32x4
        ];
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<BoxInstance>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &ATTRS,
        }
    }
}

const INITIAL_INSTANCES: usize = 64;

struct GridBuffer {
    buffer: wgpu::Buffer,
    vertex_count: u32,
}

pub struct Renderer {
    scene: Scene,
    camera: Camera,
    /// Viewport size in points; only the aspect ratio matters.
    viewport: Vec2,

    globals_buf: wgpu::Buffer,
    globals_bg: wgpu::BindGroup,
    box_pipeline: wgpu::RenderPipeline,
    line_pipeline: wgpu::RenderPipeline,

    cube_verts: wgpu::Buffer,
    cube_indices: wgpu::Buffer,
    num_cube_indices: u32,

    instance_buf: wgpu::Buffer,
    instance_capacity: usize,
    instances: Vec<BoxInstance>,

    grid: Option<GridBuffer>,
}

fn make_globals_bgl(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("globals_bgl"),
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        }],
    })
}

fn make_instance_buffer(device: &wgpu::Device, capacity: usize) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("box_instances"),
        size: (capacity * std::mem::size_of::<BoxInstance>()) as wgpu::BufferAddress,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

#[allow(clippy::too_many_arguments)]
fn make_pipeline(
    device: &wgpu::Device,
    label: &str,
    layout: &wgpu::PipelineLayout,
    shader: &wgpu::ShaderModule,
    format: wgpu::TextureFormat,
    (vs, fs): (&str, &str),
    buffers: &[wgpu::VertexBufferLayout<'_>],
    primitive: wgpu::PrimitiveState,
    blend: wgpu::BlendState,
    depth_write_enabled: bool,
) -> wgpu::RenderPipeline {
    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(label),
        cache: None,
        layout: Some(layout),
        vertex: wgpu::VertexState {
            module: shader,
            compilation_options: wgpu::PipelineCompilationOptions::default(),
            entry_point: Some(vs),
            buffers,
        },
        fragment: Some(wgpu::FragmentState {
            module: shader,
            compilation_options: wgpu::PipelineCompilationOptions::default(),
            entry_point: Some(fs),
            targets: &[Some(wgpu::ColorTargetState {
                format,
                blend: Some(blend),
                write_mask: wgpu::ColorWrites::ALL,
            })],
        }),
        primitive,
        depth_stencil: Some(wgpu::DepthStencilState {
            format: DEPTH_FORMAT,
            depth_write_enabled,
            depth_compare: wgpu::CompareFunction::Less,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        multisample: wgpu::MultisampleState::default(),
        multiview: None,
    })
}

impl Renderer {
    /// Build pipelines and buffers for `scene`. Validation errors raised
    /// while creating them are reported instead of surfacing later as a
    /// device error.
    pub fn new(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        scene: Scene,
        shading: ShadingModel,
    ) -> Result<Self, RenderError> {
        device.push_error_scope(wgpu::ErrorFilter::Validation);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("renderbud_shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shader.wgsl").into()),
        });

        let globals_bgl = make_globals_bgl(device);
        let globals_buf = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("globals"),
            size: std::mem::size_of::<Globals>() as wgpu::BufferAddress,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let globals_bg = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("globals_bg"),
            layout: &globals_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: globals_buf.as_entire_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("pipeline_layout"),
            bind_group_layouts: &[&globals_bgl],
            push_constant_ranges: &[],
        });

        let box_pipeline = make_pipeline(
            device,
            "box_pipeline",
            &pipeline_layout,
            &shader,
            format,
            ("vs_box", shading.fragment_entry()),
            &[Vertex::desc(), BoxInstance::desc()],
            wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                cull_mode: Some(wgpu::Face::Back),
                ..Default::default()
            },
            wgpu::BlendState::REPLACE,
            true,
        );

        let line_pipeline = make_pipeline(
            device,
            "grid_pipeline",
            &pipeline_layout,
            &shader,
            format,
            ("vs_line", "fs_line"),
            &[LineVertex::desc()],
            wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::LineList,
                ..Default::default()
            },
            wgpu::BlendState::ALPHA_BLENDING,
            false,
        );

        let (verts, indices) = mesh::unit_cube();
        let cube_verts = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("cube_verts"),
            contents: bytemuck::cast_slice(&verts),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let cube_indices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("cube_indices"),
            contents: bytemuck::cast_slice(&indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        let grid = scene.grid().map(|grid| {
            let lines = mesh::grid_lines(&grid);
            GridBuffer {
                buffer: device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("grid_lines"),
                    contents: bytemuck::cast_slice(&lines),
                    usage: wgpu::BufferUsages::VERTEX,
                }),
                vertex_count: lines.len() as u32,
            }
        });

        if let Some(err) = pollster::block_on(device.pop_error_scope()) {
            return Err(RenderError::Pipeline {
                shading,
                reason: err.to_string(),
            });
        }
        debug!("renderbud pipelines ready ({shading:?}, {format:?})");

        Ok(Self {
            scene,
            camera: Camera::new(Vec3::new(8.0, 7.0, 10.0), Vec3::ZERO),
            viewport: Vec2::new(1.0, 1.0),
            globals_buf,
            globals_bg,
            box_pipeline,
            line_pipeline,
            cube_verts,
            cube_indices,
            num_cube_indices: indices.len() as u32,
            instance_buf: make_instance_buffer(device, INITIAL_INSTANCES),
            instance_capacity: INITIAL_INSTANCES,
            instances: Vec::with_capacity(INITIAL_INSTANCES),
            grid,
        })
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    /// Camera and viewport used by the next [`Renderer::prepare`].
    pub fn set_camera(&mut self, camera: Camera, viewport: Vec2) {
        self.camera = camera;
        self.viewport = viewport;
    }

    /// Upload globals and the per-box instances for this frame, growing the
    /// instance buffer when the scene outgrew it.
    pub fn prepare(&mut self, device: &wgpu::Device, queue: &wgpu::Queue) {
        let globals = Globals::new(&self.scene, &self.camera, self.viewport);
        queue.write_buffer(&self.globals_buf, 0, bytemuck::bytes_of(&globals));

        self.instances.clear();
        self.instances.extend(
            self.scene
                .drawn_meshes(self.camera.eye)
                .map(|(_, mesh)| BoxInstance::from_mesh(mesh)),
        );

        if self.instances.len() > self.instance_capacity {
            self.instance_capacity = self.instances.len().next_power_of_two();
            self.instance_buf = make_instance_buffer(device, self.instance_capacity);
        }

        if !self.instances.is_empty() {
            queue.write_buffer(&self.instance_buf, 0, bytemuck::cast_slice(&self.instances));
        }
    }

    /// Draw boxes, then the translucent grid over them.
    pub fn render_pass(&self, rpass: &mut wgpu::RenderPass<'_>) {
        rpass.set_bind_group(0, &self.globals_bg, &[]);

        if !self.instances.is_empty() {
            rpass.set_pipeline(&self.box_pipeline);
            rpass.set_vertex_buffer(0, self.cube_verts.slice(..));
            rpass.set_vertex_buffer(1, self.instance_buf.slice(..));
            rpass.set_index_buffer(self.cube_indices.slice(..), wgpu::IndexFormat::Uint16);
            rpass.draw_indexed(0..self.num_cube_indices, 0, 0..self.instances.len() as u32);
        }

        if let Some(grid) = &self.grid {
            rpass.set_pipeline(&self.line_pipeline);
            rpass.set_vertex_buffer(0, grid.buffer.slice(..));
            rpass.draw(0..grid.vertex_count, 0..1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instance_scales_unit_cube_to_box_size() {
        let mut scene = Scene::new();
        let id = scene.create_box(
            Vec3::new(2.0, 1.0, 4.0),
            Material::from_rgb8(255, 0, 0),
            Facing::Solid,
        );
        scene.set_transform(id, Transform::from_translation(Vec3::new(1.0, 0.5, 0.0)));
        scene.set_emissive(id, rgb8(0x1e, 0x40, 0xaf));
        let mesh = scene.world().get(id).unwrap();

        let inst = BoxInstance::from_mesh(mesh);
        let corner = inst.model.transform_point3(Vec3::splat(0.5));
        assert!((corner - Vec3::new(2.0, 1.0, 2.0)).length() < 1e-5);
        assert_eq!(inst.color, Vec4::new(1.0, 0.0, 0.0, 1.0));
        assert_eq!(inst.emissive.truncate(), rgb8(0x1e, 0x40, 0xaf));
    }

    #[test]
    fn globals_pack_point_light() {
        let camera = Camera::new(Vec3::new(0.0, 5.0, 10.0), Vec3::ZERO);
        let viewport = Vec2::new(800.0, 600.0);

        let dark = Globals::new(&Scene::new(), &camera, viewport);
        assert_eq!(dark.point_color, Vec4::ZERO);
        assert!((dark.key_light.truncate().length() - 1.0).abs() < 1e-5);
        assert_eq!(dark.key_light.w, 0.6);

        let lamp = PointLight {
            position: Vec3::new(-3.0, 4.0, 2.0),
            color: Vec3::ONE,
            intensity: 0.5,
            range: 25.0,
            decay: 1.6,
        };
        let scene = Scene::new().with_lighting(Lighting {
            point: Some(lamp),
            ..Lighting::default()
        });
        let lit = Globals::new(&scene, &camera, viewport);
        assert_eq!(lit.point_pos, Vec4::new(-3.0, 4.0, 2.0, 25.0));
        assert_eq!(lit.point_color, Vec4::new(0.5, 0.5, 0.5, 1.6));
        assert_eq!(lit.view_proj, camera.view_proj(800.0, 600.0));
    }

    #[test]
    fn uniform_layouts_have_no_padding() {
        assert_eq!(std::mem::size_of::<Globals>(), 64 + 4 * 16);
        assert_eq!(std::mem::size_of::<BoxInstance>(), 64 + 2 * 16);
        assert_eq!(std::mem::size_of::<LineVertex>(), 7 * 4);
    }
}
