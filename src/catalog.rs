use std::sync::OnceLock;

use tracing::debug;

use crate::assets::SheetId;
use crate::coords::{CellCoord, PixelRect};
use crate::description::{CatalogDescription, GridDescription};
use crate::error::{DescriptionError, NotFoundError};
use crate::grid::TileGrid;
use crate::tables::GRIDS;

/// Where a tag's sprite lives: which grid and sheet, and the pixels to cut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteLocation<'a> {
    pub grid: &'a str,
    pub sheet: SheetId,
    pub cell: CellCoord,
    pub rect: PixelRect,
}

/// Read-only set of named grids.
///
/// Built once, then only queried; safe to share between threads.
#[derive(Debug, Clone)]
pub struct TileCatalog {
    grids: Vec<TileGrid>,
}

impl TileCatalog {
    /// Fresh copy of the built-in trident grids.
    pub fn trident() -> Self {
        let grids: Vec<TileGrid> = GRIDS
            .iter()
            .map(|t| TileGrid::from_table(t.name, t.sheet, t.geometry, t.rows))
            .collect();
        let catalog = Self { grids };
        catalog.log_built("builtin");
        catalog
    }

    /// Process-wide built-in catalog, built on first use.
    pub fn builtin() -> &'static TileCatalog {
        static CATALOG: OnceLock<TileCatalog> = OnceLock::new();
        CATALOG.get_or_init(TileCatalog::trident)
    }

    pub fn from_grids(grids: Vec<TileGrid>) -> Result<Self, DescriptionError> {
        for (i, g) in grids.iter().enumerate() {
            if grids[..i].iter().any(|other| other.name() == g.name()) {
                return Err(DescriptionError::DuplicateGrid(g.name().to_string()));
            }
        }
        let catalog = Self { grids };
        catalog.log_built("grids");
        Ok(catalog)
    }

    pub fn from_description(desc: &CatalogDescription) -> Result<Self, DescriptionError> {
        let grids = desc
            .grids
            .iter()
            .map(GridDescription::compile)
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_grids(grids)
    }

    pub fn from_json(s: &str) -> Result<Self, DescriptionError> {
        Self::from_description(&CatalogDescription::from_json(s)?)
    }

    pub fn to_description(&self) -> CatalogDescription {
        CatalogDescription {
            grids: self.grids.iter().map(GridDescription::from_grid).collect(),
        }
    }

    pub fn to_json_pretty(&self) -> Result<String, DescriptionError> {
        self.to_description().to_json_pretty()
    }

    fn log_built(&self, source: &str) {
        debug!(
            source,
            grids = self.grids.len(),
            entries = self.grids.iter().map(TileGrid::len).sum::<usize>(),
            "tile catalog built"
        );
    }

    pub fn list_grids(&self) -> Vec<&str> {
        self.grids.iter().map(TileGrid::name).collect()
    }

    pub fn grids(&self) -> &[TileGrid] {
        &self.grids
    }

    pub fn grid(&self, name: &str) -> Result<&TileGrid, NotFoundError> {
        self.grids
            .iter()
            .find(|g| g.name() == name)
            .ok_or_else(|| NotFoundError::Grid(name.to_string()))
    }

    pub fn contains(&self, grid: &str, tag: &str) -> bool {
        self.grid(grid).is_ok_and(|g| g.contains(tag))
    }

    /// First declared cell of `tag` in `grid`.
    pub fn resolve_cell(&self, grid: &str, tag: &str) -> Result<CellCoord, NotFoundError> {
        self.grid(grid)?.resolve_cell(tag)
    }

    pub fn rectangle_for(&self, grid: &str, row: u32, column: u32) -> Result<PixelRect, NotFoundError> {
        Ok(self.grid(grid)?.rect_for(CellCoord::new(row, column)))
    }

    pub fn resolve_rect(&self, grid: &str, tag: &str) -> Result<SpriteLocation<'_>, NotFoundError> {
        let g = self.grid(grid)?;
        Ok(Self::locate(g, g.resolve_cell(tag)?))
    }

    /// Looks `tag` up in every grid in declaration order; the first grid that
    /// declares it wins.
    pub fn find(&self, tag: &str) -> Result<SpriteLocation<'_>, NotFoundError> {
        self.grids
            .iter()
            .find_map(|g| g.resolve_cell(tag).ok().map(|cell| Self::locate(g, cell)))
            .ok_or_else(|| NotFoundError::AnyGrid(tag.to_string()))
    }

    pub fn tags_at(&self, grid: &str, row: u32, column: u32) -> Result<Vec<&str>, NotFoundError> {
        Ok(self.grid(grid)?.tags_at(CellCoord::new(row, column)))
    }

    pub fn resolve_all(&self, grid: &str, tag: &str) -> Result<Vec<CellCoord>, NotFoundError> {
        let g = self.grid(grid)?;
        let cells = g.resolve_all(tag);
        if cells.is_empty() {
            return Err(NotFoundError::Tag { grid: grid.to_string(), tag: tag.to_string() });
        }
        Ok(cells)
    }

    fn locate(g: &TileGrid, cell: CellCoord) -> SpriteLocation<'_> {
        SpriteLocation { grid: g.name(), sheet: g.sheet(), cell, rect: g.rect_for(cell) }
    }
}

impl Default for TileCatalog {
    fn default() -> Self {
        Self::trident()
    }
}
