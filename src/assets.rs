use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::error::NotFoundError;

/// The fixed set of sprite sheets bundled with the tileset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SheetId {
    Cities,
    Earth,
    Explosions,
    ExtraUnits,
    Fog,
    Grid,
    Roads,
    Select,
    Tiles,
    Units,
}

impl SheetId {
    pub const ALL: [SheetId; 10] = [
        SheetId::Cities,
        SheetId::Earth,
        SheetId::Explosions,
        SheetId::ExtraUnits,
        SheetId::Fog,
        SheetId::Grid,
        SheetId::Roads,
        SheetId::Select,
        SheetId::Tiles,
        SheetId::Units,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SheetId::Cities => "cities",
            SheetId::Earth => "earth",
            SheetId::Explosions => "explosions",
            SheetId::ExtraUnits => "extra_units",
            SheetId::Fog => "fog",
            SheetId::Grid => "grid",
            SheetId::Roads => "roads",
            SheetId::Select => "select",
            SheetId::Tiles => "tiles",
            SheetId::Units => "units",
        }
    }

    /// Name of the bundled image file, e.g. `extra_units.png`.
    pub fn file_name(self) -> String {
        format!("{}.png", self.name())
    }

    fn embedded_bytes(self) -> &'static [u8] {
        match self {
            SheetId::Cities => include_bytes!("../assets/cities.png"),
            SheetId::Earth => include_bytes!("../assets/earth.png"),
            SheetId::Explosions => include_bytes!("../assets/explosions.png"),
            SheetId::ExtraUnits => include_bytes!("../assets/extra_units.png"),
            SheetId::Fog => include_bytes!("../assets/fog.png"),
            SheetId::Grid => include_bytes!("../assets/grid.png"),
            SheetId::Roads => include_bytes!("../assets/roads.png"),
            SheetId::Select => include_bytes!("../assets/select.png"),
            SheetId::Tiles => include_bytes!("../assets/tiles.png"),
            SheetId::Units => include_bytes!("../assets/units.png"),
        }
    }
}

impl fmt::Display for SheetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SheetId {
    type Err = NotFoundError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SheetId::ALL
            .into_iter()
            .find(|id| id.name() == s)
            .ok_or_else(|| NotFoundError::Sheet(s.to_string()))
    }
}

/// One embedded sprite sheet: its identifier and the encoded image bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetAsset {
    pub id: SheetId,
    pub bytes: &'static [u8],
}

impl SheetAsset {
    pub fn name(&self) -> &'static str {
        self.id.name()
    }
}

/// Read-only view over every embedded sheet.
///
/// The bytes are whatever was bundled at build time; nothing is decoded or
/// checked here.
#[derive(Debug, Clone)]
pub struct AssetRegistry {
    sheets: Vec<SheetAsset>,
}

impl AssetRegistry {
    pub fn new() -> Self {
        let sheets = SheetId::ALL
            .into_iter()
            .map(|id| SheetAsset { id, bytes: id.embedded_bytes() })
            .collect();
        Self { sheets }
    }

    /// Process-wide registry, built on first use.
    pub fn embedded() -> &'static AssetRegistry {
        static REGISTRY: OnceLock<AssetRegistry> = OnceLock::new();
        REGISTRY.get_or_init(AssetRegistry::new)
    }

    pub fn get(&self, name: &str) -> Result<&'static [u8], NotFoundError> {
        let id = name.parse::<SheetId>()?;
        Ok(self.sheet(id).bytes)
    }

    pub fn sheet(&self, id: SheetId) -> SheetAsset {
        self.sheets
            .iter()
            .copied()
            .find(|s| s.id == id)
            .unwrap_or(SheetAsset { id, bytes: id.embedded_bytes() })
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.sheets.iter().map(|s| s.name())
    }

    pub fn iter(&self) -> impl Iterator<Item = &SheetAsset> {
        self.sheets.iter()
    }
}

impl Default for AssetRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

    #[test]
    fn every_sheet_is_a_non_empty_png() {
        let reg = AssetRegistry::new();
        for name in reg.names() {
            let bytes = reg.get(name).unwrap();
            assert!(!bytes.is_empty(), "{name} is empty");
            assert_eq!(&bytes[..8], &PNG_SIGNATURE, "{name} is not a PNG");
        }
        assert_eq!(reg.iter().count(), 10);
    }

    #[test]
    fn unknown_sheet_is_not_found() {
        let reg = AssetRegistry::new();
        assert_eq!(reg.get("maps"), Err(NotFoundError::Sheet("maps".into())));
        assert!(reg.get("Tiles").is_err());
        assert!(reg.get("tiles.png").is_err());
    }

    #[test]
    fn names_round_trip() {
        for id in SheetId::ALL {
            assert_eq!(id.name().parse::<SheetId>(), Ok(id));
            assert_eq!(id.to_string(), id.name());
        }
        assert_eq!(SheetId::ExtraUnits.file_name(), "extra_units.png");
    }

    #[test]
    fn embedded_registry_is_shared() {
        let a = AssetRegistry::embedded();
        let b = AssetRegistry::embedded();
        assert!(std::ptr::eq(a, b));
        assert_eq!(a.get("tiles").unwrap(), AssetRegistry::new().get("tiles").unwrap());
    }
}
