use egui::{Color32, Painter, Pos2, Rect, Shape, Stroke};
use glam::Vec3;

use super::geometry::{BoxPoints, draw_order};
use super::shading::{self, LEFT_SHADE, RIGHT_SHADE, TOP_SHADE};
use super::IsoProjection;
use crate::scene::{EntityId, SceneModel};

/// Grid lines run from `-GRID_EXTENT` to `GRID_EXTENT` on both axes.
pub const GRID_EXTENT: i32 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaceKind {
    Left,
    Right,
    Top,
    /// Selection overlay on the top face
    Highlight,
}

/// One primitive in paint order.
#[derive(Debug, Clone, PartialEq)]
pub enum IsoShape {
    GridLine([Pos2; 2]),
    Face {
        entity: EntityId,
        kind: FaceKind,
        points: [Pos2; 4],
        fill: Color32,
        stroke: Stroke,
    },
}

fn grid_lines(proj: &IsoProjection, out: &mut Vec<IsoShape>) {
    let e = GRID_EXTENT as f32;
    for i in -GRID_EXTENT..=GRID_EXTENT {
        let i = i as f32;
        out.push(IsoShape::GridLine([
            proj.project(Vec3::new(-e, 0.0, i)),
            proj.project(Vec3::new(e, 0.0, i)),
        ]));
        out.push(IsoShape::GridLine([
            proj.project(Vec3::new(i, 0.0, -e)),
            proj.project(Vec3::new(i, 0.0, e)),
        ]));
    }
}

/// Build the full frame: floor grid, then every box back to front with its
/// left, right and top faces, plus the overlay on `highlighted`.
pub fn draw_list(
    scene: &SceneModel,
    proj: &IsoProjection,
    highlighted: Option<EntityId>,
) -> Vec<IsoShape> {
    let mut out = Vec::with_capacity((GRID_EXTENT as usize * 2 + 1) * 2 + scene.len() * 3 + 1);
    grid_lines(proj, &mut out);

    for entity in draw_order(scene) {
        let pts = BoxPoints::of(entity, proj);
        let base = entity.kind.color();

        for (kind, points, amount) in [
            (FaceKind::Left, pts.left_face(), LEFT_SHADE),
            (FaceKind::Right, pts.right_face(), RIGHT_SHADE),
            (FaceKind::Top, pts.top_face(), TOP_SHADE),
        ] {
            out.push(IsoShape::Face {
                entity: entity.id,
                kind,
                points,
                fill: shading::shade(base, amount),
                stroke: shading::outline_stroke(),
            });
        }

        if highlighted == Some(entity.id) {
            out.push(IsoShape::Face {
                entity: entity.id,
                kind: FaceKind::Highlight,
                points: pts.top_face(),
                fill: shading::highlight_fill(),
                stroke: shading::highlight_stroke(),
            });
        }
    }

    out
}

pub fn paint(painter: &Painter, viewport: Rect, shapes: Vec<IsoShape>) {
    painter.rect_filled(viewport, 0.0, shading::BACKGROUND);

    let grid = Stroke::new(1.0, shading::GRID);
    painter.extend(shapes.into_iter().map(|shape| match shape {
        IsoShape::GridLine(line) => Shape::line_segment(line, grid),
        IsoShape::Face {
            points,
            fill,
            stroke,
            ..
        } => Shape::convex_polygon(points.to_vec(), fill, stroke),
    }));
}
