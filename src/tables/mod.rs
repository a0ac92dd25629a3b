//! Compiled-in cell tables of the trident tileset.
//!
//! Tags and coordinates are consumed verbatim by rulesets and renderers; do
//! not normalise them. `"ts.oilColumn: "` in `grid_main` is kept as shipped.

mod grid_main;
mod grid_nuke;
mod grid_ocean;

use crate::assets::SheetId;
use crate::coords::GridGeometry;

pub(crate) use grid_main::GRID_MAIN;
pub(crate) use grid_nuke::GRID_NUKE;
pub(crate) use grid_ocean::GRID_OCEAN;

/// `(row, column, tag)`
pub(crate) type CellRow = (u32, u32, &'static str);

pub(crate) struct GridTable {
    pub name: &'static str,
    pub sheet: SheetId,
    pub geometry: GridGeometry,
    pub rows: &'static [CellRow],
}

/// Every built-in grid, in declaration order.
pub(crate) const GRIDS: [GridTable; 3] = [
    GridTable {
        name: "grid_main",
        sheet: SheetId::Tiles,
        geometry: GridGeometry::new(0, 0, 30, 30),
        rows: GRID_MAIN,
    },
    GridTable {
        name: "grid_nuke",
        sheet: SheetId::Tiles,
        geometry: GridGeometry::new(510, 30, 90, 90),
        rows: GRID_NUKE,
    },
    GridTable {
        name: "grid_ocean",
        sheet: SheetId::Tiles,
        geometry: GridGeometry::new(0, 210, 15, 15),
        rows: GRID_OCEAN,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_sizes() {
        assert_eq!(GRID_MAIN.len(), 543);
        assert_eq!(GRID_NUKE.len(), 1);
        assert_eq!(GRID_OCEAN.len(), 128);
    }

    #[test]
    fn no_empty_tags() {
        for t in &GRIDS {
            for (row, column, tag) in t.rows {
                assert!(!tag.is_empty(), "{} ({row}, {column})", t.name);
            }
        }
    }

    #[test]
    fn no_tag_repeats_within_a_grid() {
        for t in &GRIDS {
            let mut seen = std::collections::HashSet::new();
            for (_, _, tag) in t.rows {
                assert!(seen.insert(*tag), "{} repeats {tag}", t.name);
            }
        }
    }
}
