use glam::Vec3;

use crate::scene::Grid;

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub pos: Vec3,
    pub normal: Vec3,
}

impl Vertex {
    pub fn desc<'a>() -> wgpu::VertexBufferLayout<'a> {
        const ATTRS: [wgpu::VertexAttribute; 2] =
            wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &ATTRS,
        }
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LineVertex {
    pub pos: [f32; 3],
    pub color: [f32; 4],
}

impl LineVertex {
    pub fn desc<'a>() -> wgpu::VertexBufferLayout<'a> {
        const ATTRS: [wgpu::VertexAttribute; 2] =
            wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x4];
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<LineVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &ATTRS,
        }
    }
}

/// Face normal plus two in-plane axes with `u x v == normal`, so corners
/// walked -u-v, +u-v, +u+v, -u+v wind counter-clockwise seen from outside.
const CUBE_FACES: [(Vec3, Vec3, Vec3); 6] = [
    (Vec3::X, Vec3::Y, Vec3::Z),
    (Vec3::NEG_X, Vec3::Z, Vec3::Y),
    (Vec3::Y, Vec3::Z, Vec3::X),
    (Vec3::NEG_Y, Vec3::X, Vec3::Z),
    (Vec3::Z, Vec3::X, Vec3::Y),
    (Vec3::NEG_Z, Vec3::Y, Vec3::X),
];

/// Unit cube centered on the origin. Boxes are this cube scaled by their
/// size in the instance transform.
pub fn unit_cube() -> (Vec<Vertex>, Vec<u16>) {
    let mut verts = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(36);

    for (normal, u, v) in CUBE_FACES {
        let base = verts.len() as u16;
        let center = normal * 0.5;
        for (su, sv) in [(-0.5, -0.5), (0.5, -0.5), (0.5, 0.5), (-0.5, 0.5)] {
            verts.push(Vertex {
                pos: center + u * su + v * sv,
                normal,
            });
        }
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    (verts, indices)
}

/// Line list for the floor grid, lifted slightly off y=0 so it does not
/// fight with the floor top.
pub fn grid_lines(grid: &Grid) -> Vec<LineVertex> {
    let steps = (2.0 * grid.half_extent / grid.spacing).round() as i32;
    let h = grid.half_extent;
    let color = grid.color.extend(grid.opacity).to_array();
    let mut verts = Vec::with_capacity((steps as usize + 1) * 4);

    for i in 0..=steps {
        let v = -h + i as f32 * grid.spacing;
        for pos in [
            Vec3::new(-h, 0.01, v),
            Vec3::new(h, 0.01, v),
            Vec3::new(v, 0.01, -h),
            Vec3::new(v, 0.01, h),
        ] {
            verts.push(LineVertex {
                pos: pos.to_array(),
                color,
            });
        }
    }
    verts
}
