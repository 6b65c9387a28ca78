#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release
use roomdeck::Args;
use roomdeck_chrome::{
    Chrome,
    data_path::{DataPath, DataPathType},
    setup::{RENDERER_FALLBACKS, WINDOW_TITLE, generate_native_options},
};

use tracing::{error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "roomdeck=info,roomdeck_chrome=info,renderbud=info";

fn setup_logging(path: &DataPath) -> Option<WorkerGuard> {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    // Log to stdout (if you run with `RUST_LOG=debug`).
    let console_layer = fmt::layer().with_target(true).with_writer(std::io::stdout);

    let log_path = path.path(DataPathType::Log);
    if let Err(err) = std::fs::create_dir_all(&log_path) {
        tracing_subscriber::registry()
            .with(console_layer)
            .with(env_filter)
            .init();
        warn!("could not create {}: {err}, logging to stdout only", log_path.display());
        return None;
    }

    use tracing_appender::{
        non_blocking,
        rolling::{RollingFileAppender, Rotation},
    };

    let file_appender = RollingFileAppender::new(
        Rotation::DAILY,
        log_path,
        format!("roomdeck-{}.log", env!("CARGO_PKG_VERSION")),
    );
    let (non_blocking_writer, guard) = non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_ansi(false)
        .with_writer(non_blocking_writer);

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .with(env_filter)
        .init();

    Some(guard)
}

fn main() {
    let raw: Vec<String> = std::env::args().skip(1).collect();
    let (args, unrecognized) = Args::parse(&raw);

    let path = args
        .datapath
        .as_ref()
        .map(DataPath::new)
        .unwrap_or_default();

    // need guard to live for lifetime of program
    let _guard = setup_logging(&path);

    for arg in &unrecognized {
        warn!("unrecognized argument '{arg}'");
    }
    info!("roomdeck {} starting", env!("CARGO_PKG_VERSION"));

    for renderer in RENDERER_FALLBACKS {
        let args = args.clone();
        let res = eframe::run_native(
            WINDOW_TITLE,
            generate_native_options(renderer),
            Box::new(move |cc| Ok(Box::new(Chrome::new(cc, &args)))),
        );

        match res {
            Ok(()) => return,
            Err(err) => warn!("{renderer:?} window failed to start: {err}"),
        }
    }

    error!("roomdeck could not open a window");
}
