use egui::Color32;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::spatial::BoxSize;

/// The kinds of furniture that can be placed.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, IntoStaticStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum FurnitureType {
    Sofa,
    Table,
    Bed,
    Shelf,
}

/// Immutable catalog entry for a furniture type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatalogEntry {
    pub size: BoxSize,
    pub color: Color32,
}

impl FurnitureType {
    pub const fn entry(self) -> CatalogEntry {
        match self {
            Self::Sofa => CatalogEntry {
                size: BoxSize::new(2.2, 1.0, 1.0),
                color: Color32::from_rgb(0x38, 0xbd, 0xf8),
            },
            Self::Table => CatalogEntry {
                size: BoxSize::new(1.6, 0.7, 1.0),
                color: Color32::from_rgb(0xf5, 0x9e, 0x0b),
            },
            Self::Bed => CatalogEntry {
                size: BoxSize::new(2.4, 0.8, 1.6),
                color: Color32::from_rgb(0xf4, 0x72, 0xb6),
            },
            Self::Shelf => CatalogEntry {
                size: BoxSize::new(1.2, 1.8, 0.6),
                color: Color32::from_rgb(0xa7, 0x8b, 0xfa),
            },
        }
    }

    pub fn size(self) -> BoxSize {
        self.entry().size
    }

    pub fn color(self) -> Color32 {
        self.entry().color
    }

    /// Lowercase type name used in status output.
    pub fn label(self) -> &'static str {
        self.into()
    }
}
