//! Cells of the `[grid_ocean]` section.

use super::CellRow;

pub(crate) const GRID_OCEAN: &[CellRow] = &[
    // coast cells: u/r/d/l quadrant, three neighbour bits
    (0, 0, "t.l0.coast_cell_u000"),
    (0, 0, "t.l0.coast_cell_u001"),
    (0, 0, "t.l0.coast_cell_u100"),
    (0, 0, "t.l0.coast_cell_u101"),

    (0, 1, "t.l0.coast_cell_u010"),
    (0, 1, "t.l0.coast_cell_u011"),
    (0, 1, "t.l0.coast_cell_u110"),
    (0, 1, "t.l0.coast_cell_u111"),

    (0, 2, "t.l0.coast_cell_r000"),
    (0, 2, "t.l0.coast_cell_r001"),
    (0, 2, "t.l0.coast_cell_r100"),
    (0, 2, "t.l0.coast_cell_r101"),

    (0, 3, "t.l0.coast_cell_r010"),
    (0, 3, "t.l0.coast_cell_r011"),
    (0, 3, "t.l0.coast_cell_r110"),
    (0, 3, "t.l0.coast_cell_r111"),

    (0, 4, "t.l0.coast_cell_l000"),
    (0, 4, "t.l0.coast_cell_l001"),
    (0, 4, "t.l0.coast_cell_l100"),
    (0, 4, "t.l0.coast_cell_l101"),

    (0, 5, "t.l0.coast_cell_l010"),
    (0, 5, "t.l0.coast_cell_l011"),
    (0, 5, "t.l0.coast_cell_l110"),
    (0, 5, "t.l0.coast_cell_l111"),

    (0, 6, "t.l0.coast_cell_d000"),
    (0, 6, "t.l0.coast_cell_d001"),
    (0, 6, "t.l0.coast_cell_d100"),
    (0, 6, "t.l0.coast_cell_d101"),

    (0, 7, "t.l0.coast_cell_d010"),
    (0, 7, "t.l0.coast_cell_d011"),
    (0, 7, "t.l0.coast_cell_d110"),
    (0, 7, "t.l0.coast_cell_d111"),

    (0, 8, "t.l0.floor_cell_u000"),
    (0, 8, "t.l0.floor_cell_u001"),
    (0, 8, "t.l0.floor_cell_u100"),
    (0, 8, "t.l0.floor_cell_u101"),

    (0, 9, "t.l0.floor_cell_u010"),
    (0, 9, "t.l0.floor_cell_u011"),
    (0, 9, "t.l0.floor_cell_u110"),
    (0, 9, "t.l0.floor_cell_u111"),

    (0, 10, "t.l0.floor_cell_r000"),
    (0, 10, "t.l0.floor_cell_r001"),
    (0, 10, "t.l0.floor_cell_r100"),
    (0, 10, "t.l0.floor_cell_r101"),

    (0, 11, "t.l0.floor_cell_r010"),
    (0, 11, "t.l0.floor_cell_r011"),
    (0, 11, "t.l0.floor_cell_r110"),
    (0, 11, "t.l0.floor_cell_r111"),

    (0, 12, "t.l0.floor_cell_l000"),
    (0, 12, "t.l0.floor_cell_l001"),
    (0, 12, "t.l0.floor_cell_l100"),
    (0, 12, "t.l0.floor_cell_l101"),

    (0, 13, "t.l0.floor_cell_l010"),
    (0, 13, "t.l0.floor_cell_l011"),
    (0, 13, "t.l0.floor_cell_l110"),
    (0, 13, "t.l0.floor_cell_l111"),

    (0, 14, "t.l0.floor_cell_d000"),
    (0, 14, "t.l0.floor_cell_d001"),
    (0, 14, "t.l0.floor_cell_d100"),
    (0, 14, "t.l0.floor_cell_d101"),

    (0, 15, "t.l0.floor_cell_d010"),
    (0, 15, "t.l0.floor_cell_d011"),
    (0, 15, "t.l0.floor_cell_d110"),
    (0, 15, "t.l0.floor_cell_d111"),

    (0, 16, "t.l0.lake_cell_u000"),
    (0, 16, "t.l0.lake_cell_u001"),
    (0, 16, "t.l0.lake_cell_u100"),
    (0, 16, "t.l0.lake_cell_u101"),

    (0, 17, "t.l0.lake_cell_u010"),
    (0, 17, "t.l0.lake_cell_u011"),
    (0, 17, "t.l0.lake_cell_u110"),
    (0, 17, "t.l0.lake_cell_u111"),

    (0, 18, "t.l0.lake_cell_r000"),
    (0, 18, "t.l0.lake_cell_r001"),
    (0, 18, "t.l0.lake_cell_r100"),
    (0, 18, "t.l0.lake_cell_r101"),

    (0, 19, "t.l0.lake_cell_r010"),
    (0, 19, "t.l0.lake_cell_r011"),
    (0, 19, "t.l0.lake_cell_r110"),
    (0, 19, "t.l0.lake_cell_r111"),

    (0, 20, "t.l0.lake_cell_l000"),
    (0, 20, "t.l0.lake_cell_l001"),
    (0, 20, "t.l0.lake_cell_l100"),
    (0, 20, "t.l0.lake_cell_l101"),

    (0, 21, "t.l0.lake_cell_l010"),
    (0, 21, "t.l0.lake_cell_l011"),
    (0, 21, "t.l0.lake_cell_l110"),
    (0, 21, "t.l0.lake_cell_l111"),

    (0, 22, "t.l0.lake_cell_d000"),
    (0, 22, "t.l0.lake_cell_d001"),
    (0, 22, "t.l0.lake_cell_d100"),
    (0, 22, "t.l0.lake_cell_d101"),

    (0, 23, "t.l0.lake_cell_d010"),
    (0, 23, "t.l0.lake_cell_d011"),
    (0, 23, "t.l0.lake_cell_d110"),
    (0, 23, "t.l0.lake_cell_d111"),

    (0, 24, "t.l0.inaccessible_cell_u000"),
    (0, 24, "t.l0.inaccessible_cell_u001"),
    (0, 24, "t.l0.inaccessible_cell_u100"),
    (0, 24, "t.l0.inaccessible_cell_u101"),

    (0, 25, "t.l0.inaccessible_cell_u010"),
    (0, 25, "t.l0.inaccessible_cell_u011"),
    (0, 25, "t.l0.inaccessible_cell_u110"),
    (0, 25, "t.l0.inaccessible_cell_u111"),

    (0, 26, "t.l0.inaccessible_cell_r000"),
    (0, 26, "t.l0.inaccessible_cell_r001"),
    (0, 26, "t.l0.inaccessible_cell_r100"),
    (0, 26, "t.l0.inaccessible_cell_r101"),

    (0, 27, "t.l0.inaccessible_cell_r010"),
    (0, 27, "t.l0.inaccessible_cell_r011"),
    (0, 27, "t.l0.inaccessible_cell_r110"),
    (0, 27, "t.l0.inaccessible_cell_r111"),

    (0, 28, "t.l0.inaccessible_cell_l000"),
    (0, 28, "t.l0.inaccessible_cell_l001"),
    (0, 28, "t.l0.inaccessible_cell_l100"),
    (0, 28, "t.l0.inaccessible_cell_l101"),

    (0, 29, "t.l0.inaccessible_cell_l010"),
    (0, 29, "t.l0.inaccessible_cell_l011"),
    (0, 29, "t.l0.inaccessible_cell_l110"),
    (0, 29, "t.l0.inaccessible_cell_l111"),

    (0, 30, "t.l0.inaccessible_cell_d000"),
    (0, 30, "t.l0.inaccessible_cell_d001"),
    (0, 30, "t.l0.inaccessible_cell_d100"),
    (0, 30, "t.l0.inaccessible_cell_d101"),

    (0, 31, "t.l0.inaccessible_cell_d010"),
    (0, 31, "t.l0.inaccessible_cell_d011"),
    (0, 31, "t.l0.inaccessible_cell_d110"),
    (0, 31, "t.l0.inaccessible_cell_d111"),
];
