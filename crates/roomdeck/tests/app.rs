use poll_promise::Promise;
use roomdeck::{
    BackendKind, BackendSelector, DEGRADED_NOTICE, FurnitureType, RoomCommand, RoomdeckApp,
    RoomdeckOptions, SelectorState,
};

fn run_frame(ctx: &egui::Context, app: &mut RoomdeckApp) {
    run_frame_with(ctx, app, egui::RawInput::default());
}

fn run_frame_with(
    ctx: &egui::Context,
    app: &mut RoomdeckApp,
    input: egui::RawInput,
) -> egui::FullOutput {
    ctx.run(input, |ctx| {
        egui::CentralPanel::default().show(ctx, |ui| app.update(ui));
    })
}

fn collect_text(shape: &egui::Shape, out: &mut Vec<String>) {
    match shape {
        egui::Shape::Text(text) => out.push(text.galley.text().to_owned()),
        egui::Shape::Vec(shapes) => {
            for shape in shapes {
                collect_text(shape, out);
            }
        }
        _ => {}
    }
}

/// Every string painted in a frame.
fn painted_text(output: &egui::FullOutput) -> Vec<String> {
    let mut out = Vec::new();
    for clipped in &output.shapes {
        collect_text(&clipped.shape, &mut out);
    }
    out
}

fn key_press(key: egui::Key) -> egui::RawInput {
    egui::RawInput {
        events: vec![egui::Event::Key {
            key,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers: egui::Modifiers::NONE,
        }],
        ..Default::default()
    }
}

#[test]
fn isometric_app_seeds_default_layout_on_first_frame() {
    let mut app = RoomdeckApp::with_selector(
        BackendSelector::isometric_only(32.0),
        RoomdeckOptions::Debug,
    );
    assert!(app.backend().is_none());

    let ctx = egui::Context::default();
    run_frame(&ctx, &mut app);

    assert_eq!(app.selector_state(), SelectorState::ReadyIsometric);
    assert_eq!(app.backend().map(|b| b.kind()), Some(BackendKind::Isometric));
    assert_eq!(app.notice(), Some(DEGRADED_NOTICE));
    assert_eq!(app.room().scene.len(), 3);

    app.apply(RoomCommand::Add(FurnitureType::Shelf));
    run_frame(&ctx, &mut app);
    assert_eq!(app.room().scene.len(), 4);
    assert_eq!(app.room().status().selected, "shelf");
}

#[test]
fn commands_are_inert_while_searching() {
    let (_sender, promise) = Promise::new();
    let mut app = RoomdeckApp::with_selector(
        BackendSelector::from_promise(promise, 32.0),
        RoomdeckOptions::default(),
    );

    let ctx = egui::Context::default();
    run_frame(&ctx, &mut app);
    app.apply(RoomCommand::Add(FurnitureType::Sofa));

    assert_eq!(app.selector_state(), SelectorState::Acquiring);
    assert!(app.backend().is_none());
    assert!(app.room().scene.is_empty());
}

#[test]
fn render_loop_counts_frames_until_stopped() {
    let mut app = RoomdeckApp::with_selector(
        BackendSelector::isometric_only(32.0),
        RoomdeckOptions::default(),
    );
    let ctx = egui::Context::default();
    run_frame(&ctx, &mut app);
    run_frame(&ctx, &mut app);
    assert_eq!(app.render_loop_mut().frames(), 2);

    app.render_loop_mut().stop();
    run_frame(&ctx, &mut app);
    assert_eq!(app.render_loop_mut().frames(), 2);
}

#[test]
fn status_panel_shows_key_moves_in_the_same_frame() {
    let mut app = RoomdeckApp::with_selector(
        BackendSelector::isometric_only(32.0),
        RoomdeckOptions::default(),
    );
    let ctx = egui::Context::default();
    run_frame(&ctx, &mut app);
    app.apply(RoomCommand::Add(FurnitureType::Shelf));
    let text = painted_text(&run_frame_with(&ctx, &mut app, egui::RawInput::default()));
    assert!(text.iter().any(|t| t == "0.0, 0.0"));

    let output = run_frame_with(&ctx, &mut app, key_press(egui::Key::ArrowRight));
    assert_eq!(app.room().status().position, "0.4, 0.0");

    let text = painted_text(&output);
    assert!(text.iter().any(|t| t == "0.4, 0.0"));
    assert!(!text.iter().any(|t| t == "0.0, 0.0"));
}
