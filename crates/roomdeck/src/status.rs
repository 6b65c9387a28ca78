use strum_macros::Display;

use crate::scene::FurnitureEntity;

pub const NO_SELECTION_LABEL: &str = "none";
pub const NO_POSITION_LABEL: &str = "-";

/// Shown once when the 3D capability could not be acquired.
pub const DEGRADED_NOTICE: &str =
    "Could not load the 3D renderer, running in simplified isometric mode.";

/// Swap-mode indicator shown next to the swap toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum SwapStatus {
    #[strum(to_string = "Swap mode: OFF")]
    Off,
    #[strum(to_string = "Swap mode: ON")]
    AwaitingFirst,
    #[strum(to_string = "Swap mode: choose second")]
    AwaitingSecond,
}

impl SwapStatus {
    pub fn is_armed(self) -> bool {
        self != Self::Off
    }
}

/// Everything the status panel displays.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusReport {
    pub selected: String,
    pub position: String,
    pub swap: SwapStatus,
}

impl StatusReport {
    pub fn new(selected: Option<&FurnitureEntity>, swap: SwapStatus) -> Self {
        match selected {
            Some(e) => Self {
                selected: e.kind.label().to_owned(),
                position: format!("{:.1}, {:.1}", e.position.x, e.position.z),
                swap,
            },
            None => Self {
                selected: NO_SELECTION_LABEL.to_owned(),
                position: NO_POSITION_LABEL.to_owned(),
                swap,
            },
        }
    }

    pub fn has_selection(&self) -> bool {
        self.selected != NO_SELECTION_LABEL
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::FurnitureType;
    use crate::scene::EntityId;
    use glam::Vec3;
    use pretty_assertions::assert_eq;

    #[test]
    fn formats_position_to_one_decimal() {
        let e = FurnitureEntity {
            id: EntityId(1),
            kind: FurnitureType::Bed,
            position: Vec3::new(-2.26, 0.4, 3.04),
            rotation: 0.0,
        };
        let report = StatusReport::new(Some(&e), SwapStatus::Off);
        assert_eq!(report.selected, "bed");
        assert_eq!(report.position, "-2.3, 3.0");
        assert!(report.has_selection());
    }

    #[test]
    fn placeholders_without_selection() {
        let report = StatusReport::new(None, SwapStatus::AwaitingFirst);
        assert_eq!(report.selected, "none");
        assert_eq!(report.position, "-");
        assert_eq!(report.swap.to_string(), "Swap mode: ON");
    }
}
