pub mod assets;
pub mod catalog;
pub mod coords;
pub mod description;
pub mod error;
pub mod grid;
mod tables;

// Re-exports for convenience in tests and integration users.
pub use assets::{AssetRegistry, SheetAsset, SheetId};
pub use catalog::{SpriteLocation, TileCatalog};
pub use coords::{CellCoord, GridGeometry, PixelRect};
pub use description::{CatalogDescription, GridDescription, TileDescription};
pub use error::{DescriptionError, NotFoundError};
pub use grid::{TagConflict, TileCellEntry, TileGrid};
