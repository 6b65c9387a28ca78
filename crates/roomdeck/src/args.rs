use std::collections::BTreeSet;

use tracing::error;

use crate::RoomdeckOptions;
use crate::isometric::DEFAULT_SCALE;

#[derive(Debug, Clone)]
pub struct Args {
    pub options: RoomdeckOptions,
    /// Isometric pixels per meter
    pub scale: f32,
    pub datapath: Option<String>,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            options: RoomdeckOptions::default(),
            scale: DEFAULT_SCALE,
            datapath: None,
        }
    }
}

impl Args {
    // parse arguments, return set of unrecognized args
    pub fn parse(args: &[String]) -> (Self, BTreeSet<String>) {
        let mut unrecognized_args = BTreeSet::new();
        let mut res = Args::default();

        let mut i = 0;
        let len = args.len();
        while i < len {
            let arg = &args[i];

            if arg == "--light" {
                res.options.set(RoomdeckOptions::LightTheme, true);
            } else if arg == "--dark" {
                res.options.set(RoomdeckOptions::LightTheme, false);
            } else if arg == "--debug" {
                res.options.set(RoomdeckOptions::Debug, true);
            } else if arg == "--isometric" || arg == "--no-3d" {
                res.options.set(RoomdeckOptions::ForceIsometric, true);
            } else if arg == "--scale" {
                i += 1;
                let Some(scale) = args.get(i) else {
                    error!("scale argument missing?");
                    continue;
                };
                match scale.parse::<f32>() {
                    Ok(s) if s.is_finite() && s > 0.0 => res.scale = s,
                    _ => error!("invalid --scale '{scale}', expected a positive number"),
                }
            } else if arg == "--datapath" {
                i += 1;
                let Some(path) = args.get(i) else {
                    error!("datapath argument missing?");
                    continue;
                };
                res.datapath = Some(path.clone());
            } else {
                unrecognized_args.insert(arg.clone());
            }

            i += 1;
        }

        (res, unrecognized_args)
    }
}
