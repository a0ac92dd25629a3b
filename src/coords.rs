use serde::{Deserialize, Serialize};

/// Zero-based (row, column) position inside a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellCoord {
    pub row: u32,
    pub column: u32,
}

impl CellCoord {
    pub fn new(row: u32, column: u32) -> Self {
        Self { row, column }
    }
}

impl From<(u32, u32)> for CellCoord {
    fn from((row, column): (u32, u32)) -> Self {
        Self { row, column }
    }
}

/// Pixel rectangle on a sheet. `x`/`y` is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl PixelRect {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// Exclusive right edge.
    pub fn right(&self) -> u32 {
        self.x.saturating_add(self.width)
    }

    /// Exclusive bottom edge.
    pub fn bottom(&self) -> u32 {
        self.y.saturating_add(self.height)
    }

    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    pub fn as_tuple(&self) -> (u32, u32, u32, u32) {
        (self.x, self.y, self.width, self.height)
    }
}

/// Origin and cell size of one grid over its sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridGeometry {
    pub origin_x: u32,
    pub origin_y: u32,
    pub cell_width: u32,
    pub cell_height: u32,
}

impl GridGeometry {
    pub const fn new(origin_x: u32, origin_y: u32, cell_width: u32, cell_height: u32) -> Self {
        Self { origin_x, origin_y, cell_width, cell_height }
    }

    pub fn rect_for(&self, cell: CellCoord) -> PixelRect {
        let x = self
            .origin_x
            .saturating_add(cell.column.saturating_mul(self.cell_width));
        let y = self
            .origin_y
            .saturating_add(cell.row.saturating_mul(self.cell_height));
        PixelRect { x, y, width: self.cell_width, height: self.cell_height }
    }

    /// Cell covering the pixel, or `None` left of / above the origin or when
    /// the cell size is zero.
    pub fn cell_at(&self, x: u32, y: u32) -> Option<CellCoord> {
        if x < self.origin_x || y < self.origin_y || self.cell_width == 0 || self.cell_height == 0 {
            return None;
        }
        Some(CellCoord {
            row: (y - self.origin_y) / self.cell_height,
            column: (x - self.origin_x) / self.cell_width,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_for_offsets_by_origin() {
        let main = GridGeometry::new(0, 0, 30, 30);
        assert_eq!(main.rect_for(CellCoord::new(0, 2)), PixelRect::new(60, 0, 30, 30));
        let nuke = GridGeometry::new(510, 30, 90, 90);
        assert_eq!(nuke.rect_for(CellCoord::new(0, 0)), PixelRect::new(510, 30, 90, 90));
        let ocean = GridGeometry::new(0, 210, 15, 15);
        assert_eq!(ocean.rect_for(CellCoord::new(0, 31)), PixelRect::new(465, 210, 15, 15));
    }

    #[test]
    fn rect_edges_and_contains() {
        let r = PixelRect::new(60, 0, 30, 30);
        assert_eq!(r.right(), 90);
        assert_eq!(r.bottom(), 30);
        assert!(r.contains(60, 0));
        assert!(r.contains(89, 29));
        assert!(!r.contains(90, 0));
        assert!(!r.contains(59, 10));
    }

    #[test]
    fn cell_at_inverts_rect_for() {
        let g = GridGeometry::new(0, 210, 15, 15);
        let c = CellCoord::new(3, 7);
        let r = g.rect_for(c);
        assert_eq!(g.cell_at(r.x, r.y), Some(c));
        assert_eq!(g.cell_at(r.right() - 1, r.bottom() - 1), Some(c));
        assert_eq!(g.cell_at(0, 209), None);
    }

    #[test]
    fn huge_cells_saturate() {
        let g = GridGeometry::new(10, 10, u32::MAX, u32::MAX);
        let r = g.rect_for(CellCoord::new(2, 2));
        assert_eq!(r.x, u32::MAX);
        assert_eq!(r.y, u32::MAX);
    }

    #[test]
    fn zero_cell_size_has_no_cells() {
        let g = GridGeometry::new(0, 0, 0, 30);
        assert_eq!(g.cell_at(5, 5), None);
    }
}
