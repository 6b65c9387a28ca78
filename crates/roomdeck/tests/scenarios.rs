use egui::{Painter, Pos2, Rect, vec2};
use glam::Vec3;
use pretty_assertions::assert_eq;
use roomdeck::isometric::IsoProjection;
use roomdeck::{
    BackendIsometric, BackendKind, BackendSelector, Capability3D, CapabilityLoader, EntityId,
    FnSource, FurnitureEntity, FurnitureType, RenderBackend, RoomCommand, RoomState, SceneModel,
    SelectorState, SwapState,
};

/// Backend that only records what the room asked of it.
#[derive(Default)]
struct RecordingBackend {
    added: Vec<EntityId>,
    removed: Vec<EntityId>,
    highlighted: Option<EntityId>,
}

impl RenderBackend for RecordingBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Isometric
    }

    fn add(&mut self, entity: &FurnitureEntity) {
        self.added.push(entity.id);
    }

    fn remove(&mut self, id: EntityId) {
        self.removed.push(id);
    }

    fn highlight(&mut self, id: EntityId, on: bool) {
        if on {
            self.highlighted = Some(id);
        } else if self.highlighted == Some(id) {
            self.highlighted = None;
        }
    }

    fn pick(&self, _scene: &SceneModel, _pointer: Pos2, _viewport: Rect) -> Option<EntityId> {
        None
    }

    fn render_frame(&mut self, _scene: &SceneModel, _painter: &Painter, _viewport: Rect) {}
}

fn viewport() -> Rect {
    Rect::from_min_size(Pos2::ZERO, vec2(1280.0, 800.0))
}

#[test]
fn add_sofa_then_move_right() {
    let mut room = RoomState::new();
    let mut backend = RecordingBackend::default();

    room.apply(RoomCommand::Add(FurnitureType::Sofa), &mut backend);
    let sofa = room.selected().expect("new sofa is selected");
    room.apply(RoomCommand::Pick(Some(sofa)), &mut backend);
    room.apply(RoomCommand::MoveSelected { dx: 1.0, dz: 0.0 }, &mut backend);

    assert_eq!(
        room.scene.get(sofa).unwrap().position,
        Vec3::new(1.0, 0.5, 0.0)
    );
    assert_eq!(backend.highlighted, Some(sofa));
    assert_eq!(room.status().position, "1.0, 0.0");
}

#[test]
fn duplicate_table_selects_clone() {
    let mut room = RoomState::new();
    let mut backend = RecordingBackend::default();

    room.apply(RoomCommand::Add(FurnitureType::Table), &mut backend);
    let table = room.selected().unwrap();
    room.apply(RoomCommand::DuplicateSelected, &mut backend);

    let clone = room.selected().unwrap();
    assert_ne!(clone, table);
    let e = room.scene.get(clone).unwrap();
    assert_eq!(e.kind, FurnitureType::Table);
    assert_eq!(e.position, Vec3::new(0.8, 0.35, 0.8));
    assert_eq!(backend.added, vec![table, clone]);
    assert_eq!(backend.highlighted, Some(clone));
}

#[test]
fn removing_only_item_shows_placeholders() {
    let mut room = RoomState::new();
    let mut backend = RecordingBackend::default();

    room.apply(RoomCommand::Add(FurnitureType::Bed), &mut backend);
    let bed = room.selected().unwrap();
    room.apply(RoomCommand::RemoveSelected, &mut backend);

    assert!(room.scene.is_empty());
    assert_eq!(room.selected(), None);
    assert_eq!(backend.removed, vec![bed]);

    let status = room.status();
    assert_eq!(status.selected, "none");
    assert_eq!(status.position, "-");
}

#[test]
fn moves_never_leave_the_room() {
    let mut room = RoomState::new();
    let mut backend = RecordingBackend::default();
    room.seed(&mut backend);

    let ids = backend.added.clone();
    for (n, id) in ids.iter().enumerate() {
        room.apply(RoomCommand::Pick(Some(*id)), &mut backend);
        for step in 0..60 {
            let dir = if (step + n) % 3 == 0 { -1.0 } else { 1.0 };
            room.apply(
                RoomCommand::MoveSelected {
                    dx: 0.4 * dir,
                    dz: -0.4 * dir,
                },
                &mut backend,
            );
            room.apply(RoomCommand::RotateSelected(0.2 * dir), &mut backend);
        }
    }

    for e in room.scene.iter() {
        assert!((-7.0..=7.0).contains(&e.position.x));
        assert!((-7.0..=7.0).contains(&e.position.z));
        assert_eq!(e.position.y, e.kind.size().height / 2.0);
    }
}

#[test]
fn swap_twice_restores_layout() {
    let mut room = RoomState::new();
    let mut backend = RecordingBackend::default();
    room.seed(&mut backend);
    let ids = backend.added.clone();
    let before: Vec<Vec3> = room.scene.iter().map(|e| e.position).collect();

    for _ in 0..2 {
        room.apply(RoomCommand::ToggleSwapMode, &mut backend);
        room.apply(RoomCommand::Pick(Some(ids[0])), &mut backend);
        room.apply(RoomCommand::Pick(Some(ids[1])), &mut backend);
        assert_eq!(room.swap(), SwapState::Off);
    }

    let after: Vec<Vec3> = room.scene.iter().map(|e| e.position).collect();
    assert_eq!(before, after);
}

#[test]
fn exhausted_sources_fall_back_to_a_pickable_isometric_room() {
    let loader: CapabilityLoader<Capability3D> = CapabilityLoader::new()
        .with_source(FnSource::new("primary", || Err("no adapter".to_owned())))
        .with_source(FnSource::new("secondary", || Err("no adapter".to_owned())));
    let mut selector = BackendSelector::start(loader, 32.0);

    let resolution = loop {
        if let Some(res) = selector.poll() {
            break res;
        }
        std::thread::yield_now();
    };
    assert_eq!(selector.state(), SelectorState::ReadyIsometric);
    assert!(resolution.notice.is_some());

    let mut backend = resolution.backend;
    assert_eq!(backend.kind(), BackendKind::Isometric);

    let mut room = RoomState::new();
    room.seed(backend.as_mut());
    assert_eq!(room.scene.len(), 3);

    // every default item is hit at the projected center of its top face
    let proj = IsoProjection::for_viewport(viewport(), 32.0);
    let ids: Vec<EntityId> = room.scene.iter().map(|e| e.id).collect();
    for id in &ids {
        let e = room.scene.get(*id).unwrap();
        let at = proj.project(Vec3::new(e.position.x, e.size().height, e.position.z));
        room.pick_at(at, viewport(), backend.as_mut());
        assert_eq!(room.selected(), Some(*id));
    }

    // and the frame paints without a GPU
    let ctx = egui::Context::default();
    let output = ctx.run(egui::RawInput::default(), |ctx| {
        let painter = ctx.layer_painter(egui::LayerId::background());
        backend.render_frame(&room.scene, &painter, viewport());
    });
    assert!(!output.shapes.is_empty());
}

#[test]
fn isometric_highlight_follows_selection() {
    let mut room = RoomState::new();
    let mut backend = BackendIsometric::default();
    room.seed(&mut backend);
    let ids: Vec<EntityId> = room.scene.iter().map(|e| e.id).collect();

    room.apply(RoomCommand::Pick(Some(ids[0])), &mut backend);
    assert_eq!(backend.highlighted(), Some(ids[0]));
    room.apply(RoomCommand::Pick(Some(ids[2])), &mut backend);
    assert_eq!(backend.highlighted(), Some(ids[2]));
    room.apply(RoomCommand::Pick(None), &mut backend);
    assert_eq!(backend.highlighted(), None);
}

#[test]
fn removing_armed_sofa_then_picking_table_selects_table() {
    let mut room = RoomState::new();
    let mut backend = RecordingBackend::default();
    room.seed(&mut backend);
    let sofa = backend.added[0];
    let table = backend.added[1];

    room.apply(RoomCommand::ToggleSwapMode, &mut backend);
    room.apply(RoomCommand::Pick(Some(sofa)), &mut backend);
    room.apply(RoomCommand::RemoveSelected, &mut backend);
    room.apply(RoomCommand::Pick(Some(table)), &mut backend);

    assert_eq!(table, EntityId(2));
    assert_eq!(room.selected(), Some(table));
    assert_eq!(backend.highlighted, Some(table));
    assert_eq!(room.status().selected, "table");
    assert_eq!(backend.removed, vec![sofa]);
}
