use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::assets::SheetId;
use crate::coords::{CellCoord, GridGeometry};
use crate::error::DescriptionError;
use crate::grid::{TileCellEntry, TileGrid};

/// Declarative form of a set of grids, one section per grid.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CatalogDescription {
	pub grids: Vec<GridDescription>,
}

/// One `[grid_*]` section: header geometry plus its tiles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridDescription {
	pub name: String,
	pub sheet: String,
	#[serde(default)]
	pub topleft_x: u32,
	#[serde(default)]
	pub topleft_y: u32,
	pub dx: u32,
	pub dy: u32,
	#[serde(default)]
	pub tiles: Vec<TileDescription>,
}

/// A cell and every tag bound to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileDescription {
	pub row: u32,
	pub column: u32,
	pub tags: Vec<String>,
}

impl CatalogDescription {
	pub fn from_json(s: &str) -> Result<Self, DescriptionError> {
		Ok(serde_json::from_str(s)?)
	}

	pub fn from_reader(r: impl Read) -> Result<Self, DescriptionError> {
		Ok(serde_json::from_reader(r)?)
	}

	pub fn to_json_pretty(&self) -> Result<String, DescriptionError> {
		Ok(serde_json::to_string_pretty(self)?)
	}
}

impl GridDescription {
	pub fn geometry(&self) -> GridGeometry {
		GridGeometry::new(self.topleft_x, self.topleft_y, self.dx, self.dy)
	}

	/// Expands every tile into one entry per tag, in listed order.
	pub fn compile(&self) -> Result<TileGrid, DescriptionError> {
		let sheet: SheetId = self.sheet.parse().map_err(|_| DescriptionError::UnknownSheet {
			grid: self.name.clone(),
			sheet: self.sheet.clone(),
		})?;
		let mut entries = Vec::new();
		for t in &self.tiles {
			if t.tags.is_empty() {
				return Err(DescriptionError::NoTags { grid: self.name.clone(), row: t.row, column: t.column });
			}
			entries.extend(t.tags.iter().map(|tag| TileCellEntry::new(t.row, t.column, tag.as_str())));
		}
		TileGrid::new(self.name.clone(), sheet, self.geometry(), entries)
	}

	/// Inverse of [`GridDescription::compile`]. Consecutive entries on the same
	/// cell are folded into one tile.
	pub fn from_grid(grid: &TileGrid) -> Self {
		let mut tiles: Vec<TileDescription> = Vec::new();
		for e in grid.entries() {
			match tiles.last_mut() {
				Some(last) if CellCoord::new(last.row, last.column) == e.cell => last.tags.push(e.tag.clone()),
				_ => tiles.push(TileDescription { row: e.cell.row, column: e.cell.column, tags: vec![e.tag.clone()] }),
			}
		}
		let g = grid.geometry();
		Self {
			name: grid.name().to_string(),
			sheet: grid.sheet().name().to_string(),
			topleft_x: g.origin_x,
			topleft_y: g.origin_y,
			dx: g.cell_width,
			dy: g.cell_height,
			tiles,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn parse_and_compile_grid() {
		let desc_json = json!({
			"grids": [
				{
					"name": "grid_nuke",
					"sheet": "tiles",
					"topleft_x": 510,
					"topleft_y": 30,
					"dx": 90,
					"dy": 90,
					"tiles": [
						{ "row": 0, "column": 0, "tags": ["explode.nuke"] }
					]
				}
			]
		});
		let desc: CatalogDescription = serde_json::from_value(desc_json).unwrap();
		let grid = desc.grids[0].compile().unwrap();
		assert_eq!(grid.name(), "grid_nuke");
		assert_eq!(grid.geometry(), GridGeometry::new(510, 30, 90, 90));
		assert_eq!(grid.resolve_cell("explode.nuke").unwrap(), CellCoord::new(0, 0));
	}

	#[test]
	fn multi_tag_tiles_expand_in_order() {
		let desc: CatalogDescription = serde_json::from_value(json!({
			"grids": [{
				"name": "g", "sheet": "units", "dx": 30, "dy": 30,
				"tiles": [{ "row": 8, "column": 17, "tags": ["unit.cultivate", "unit.irrigate"] }]
			}]
		}))
		.unwrap();
		let grid = desc.grids[0].compile().unwrap();
		assert_eq!(grid.len(), 2);
		assert_eq!(grid.entries()[1].tag, "unit.irrigate");
		assert_eq!(grid.geometry().origin_x, 0);
	}

	#[test]
	fn rejects_bad_sections() {
		let mut g = GridDescription {
			name: "g".into(),
			sheet: "maps".into(),
			topleft_x: 0,
			topleft_y: 0,
			dx: 10,
			dy: 10,
			tiles: vec![TileDescription { row: 1, column: 2, tags: vec![] }],
		};
		assert!(matches!(g.compile(), Err(DescriptionError::UnknownSheet { .. })));
		g.sheet = "tiles".into();
		assert!(matches!(g.compile(), Err(DescriptionError::NoTags { row: 1, column: 2, .. })));
		g.tiles[0].tags.push(String::new());
		assert!(matches!(g.compile(), Err(DescriptionError::EmptyTag { .. })));
	}

	#[test]
	fn from_grid_folds_consecutive_cells() {
		let grid = TileGrid::new(
			"g",
			SheetId::Tiles,
			GridGeometry::new(0, 0, 15, 15),
			vec![
				TileCellEntry::new(0, 0, "a"),
				TileCellEntry::new(0, 0, "b"),
				TileCellEntry::new(0, 1, "c"),
				TileCellEntry::new(0, 0, "d"),
			],
		)
		.unwrap();
		let d = GridDescription::from_grid(&grid);
		assert_eq!(d.tiles.len(), 3);
		assert_eq!(d.tiles[0].tags, vec!["a", "b"]);
		assert_eq!(d.compile().unwrap().entries(), grid.entries());
	}

	#[test]
	fn malformed_json_is_reported() {
		assert!(matches!(CatalogDescription::from_json("{\"grids\": 3}"), Err(DescriptionError::Json(_))));
	}
}
