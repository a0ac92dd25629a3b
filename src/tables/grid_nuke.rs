//! Cells of the `[grid_nuke]` section.

use super::CellRow;

pub(crate) const GRID_NUKE: &[CellRow] = &[
    (0, 0, "explode.nuke"),
];
