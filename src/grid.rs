use std::collections::HashMap;
use std::collections::hash_map::Entry;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::assets::SheetId;
use crate::coords::{CellCoord, GridGeometry, PixelRect};
use crate::error::{DescriptionError, NotFoundError};
use crate::tables::CellRow;

/// One (row, column, tag) binding of a grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileCellEntry {
	pub cell: CellCoord,
	pub tag: String,
}

impl TileCellEntry {
	pub fn new(row: u32, column: u32, tag: impl Into<String>) -> Self {
		Self { cell: CellCoord::new(row, column), tag: tag.into() }
	}
}

/// A tag declared at more than one distinct cell of the same grid.
///
/// Lookups resolve to `first`; `others` lists the later cells in declared order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagConflict {
	pub tag: String,
	pub first: CellCoord,
	pub others: Vec<CellCoord>,
}

/// A named coordinate system over one sheet plus its ordered tag bindings.
///
/// Entries keep their declared order. Several tags may share a cell and a tag
/// may be declared more than once; single-value lookups return the first
/// declaration.
#[derive(Debug, Clone)]
pub struct TileGrid {
	name: String,
	sheet: SheetId,
	geometry: GridGeometry,
	entries: Vec<TileCellEntry>,
	first_index: HashMap<String, usize>,
	conflicts: Vec<TagConflict>,
}

impl TileGrid {
	pub fn new(
		name: impl Into<String>,
		sheet: SheetId,
		geometry: GridGeometry,
		entries: Vec<TileCellEntry>,
	) -> Result<Self, DescriptionError> {
		let name = name.into();
		if name.is_empty() {
			return Err(DescriptionError::EmptyGridName);
		}
		if let Some(e) = entries.iter().find(|e| e.tag.is_empty()) {
			return Err(DescriptionError::EmptyTag {
				grid: name,
				row: e.cell.row,
				column: e.cell.column,
			});
		}
		Ok(Self::build(name, sheet, geometry, entries))
	}

	/// Builds a grid from a compiled-in table.
	pub(crate) fn from_table(name: &str, sheet: SheetId, geometry: GridGeometry, rows: &[CellRow]) -> Self {
		let entries = rows
			.iter()
			.map(|&(row, column, tag)| {
				debug_assert!(!tag.is_empty(), "empty tag in {name} at ({row}, {column})");
				TileCellEntry::new(row, column, tag)
			})
			.collect();
		Self::build(name.to_string(), sheet, geometry, entries)
	}

	fn build(name: String, sheet: SheetId, geometry: GridGeometry, entries: Vec<TileCellEntry>) -> Self {
		let mut first_index: HashMap<String, usize> = HashMap::with_capacity(entries.len());
		let mut conflicts: Vec<TagConflict> = Vec::new();
		for (i, e) in entries.iter().enumerate() {
			match first_index.entry(e.tag.clone()) {
				Entry::Vacant(slot) => {
					slot.insert(i);
				}
				Entry::Occupied(slot) => {
					let first = entries[*slot.get()].cell;
					if first == e.cell {
						continue;
					}
					if let Some(c) = conflicts.iter_mut().find(|c| c.tag == e.tag) {
						if !c.others.contains(&e.cell) {
							c.others.push(e.cell);
						}
					} else {
						conflicts.push(TagConflict { tag: e.tag.clone(), first, others: vec![e.cell] });
					}
				}
			}
		}
		for c in &conflicts {
			warn!(
				grid = %name,
				tag = %c.tag,
				first = ?c.first,
				others = ?c.others,
				"tag declared at several cells; first declaration wins"
			);
		}
		Self { name, sheet, geometry, entries, first_index, conflicts }
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn sheet(&self) -> SheetId {
		self.sheet
	}

	pub fn geometry(&self) -> GridGeometry {
		self.geometry
	}

	pub fn entries(&self) -> &[TileCellEntry] {
		&self.entries
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn contains(&self, tag: &str) -> bool {
		self.first_index.contains_key(tag)
	}

	/// Cell of the first entry declaring `tag`.
	pub fn resolve_cell(&self, tag: &str) -> Result<CellCoord, NotFoundError> {
		self.first_index
			.get(tag)
			.map(|&i| self.entries[i].cell)
			.ok_or_else(|| NotFoundError::Tag { grid: self.name.clone(), tag: tag.to_string() })
	}

	/// Every cell `tag` is declared at, in declared order, repeats included.
	pub fn resolve_all(&self, tag: &str) -> Vec<CellCoord> {
		self.entries.iter().filter(|e| e.tag == tag).map(|e| e.cell).collect()
	}

	pub fn rect_for(&self, cell: CellCoord) -> PixelRect {
		self.geometry.rect_for(cell)
	}

	/// Every tag bound to `cell`, in declared order.
	pub fn tags_at(&self, cell: CellCoord) -> Vec<&str> {
		self.entries.iter().filter(|e| e.cell == cell).map(|e| e.tag.as_str()).collect()
	}

	/// Distinct cells in order of first appearance.
	pub fn cells(&self) -> Vec<CellCoord> {
		let mut seen = std::collections::HashSet::new();
		self.entries.iter().map(|e| e.cell).filter(|c| seen.insert(*c)).collect()
	}

	pub fn conflicting_tags(&self) -> &[TagConflict] {
		&self.conflicts
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn small() -> TileGrid {
		TileGrid::new(
			"grid_test",
			SheetId::Tiles,
			GridGeometry::new(0, 0, 30, 30),
			vec![
				TileCellEntry::new(5, 16, "unit.tired"),
				TileCellEntry::new(5, 16, "unit.lowfuel"),
				TileCellEntry::new(8, 17, "unit.cultivate"),
				TileCellEntry::new(8, 17, "unit.irrigate"),
			],
		)
		.unwrap()
	}

	#[test]
	fn aliases_share_a_cell() {
		let g = small();
		assert_eq!(g.resolve_cell("unit.tired").unwrap(), CellCoord::new(5, 16));
		assert_eq!(g.resolve_cell("unit.lowfuel").unwrap(), CellCoord::new(5, 16));
		assert_eq!(g.tags_at(CellCoord::new(8, 17)), vec!["unit.cultivate", "unit.irrigate"]);
		assert_eq!(g.cells(), vec![CellCoord::new(5, 16), CellCoord::new(8, 17)]);
		assert!(g.conflicting_tags().is_empty());
	}

	#[test]
	fn missing_tag_names_grid() {
		let g = small();
		assert_eq!(
			g.resolve_cell("unit.sentry"),
			Err(NotFoundError::Tag { grid: "grid_test".into(), tag: "unit.sentry".into() })
		);
		assert!(!g.contains("unit.sentry"));
	}

	#[test]
	fn first_declaration_wins_and_is_flagged() {
		let g = TileGrid::new(
			"grid_dup",
			SheetId::Tiles,
			GridGeometry::new(0, 0, 10, 10),
			vec![
				TileCellEntry::new(0, 1, "x"),
				TileCellEntry::new(2, 3, "x"),
				TileCellEntry::new(0, 1, "x"),
				TileCellEntry::new(4, 4, "x"),
				TileCellEntry::new(2, 3, "x"),
			],
		)
		.unwrap();
		assert_eq!(g.resolve_cell("x").unwrap(), CellCoord::new(0, 1));
		assert_eq!(g.resolve_all("x").len(), 5);
		assert_eq!(
			g.conflicting_tags(),
			&[TagConflict {
				tag: "x".into(),
				first: CellCoord::new(0, 1),
				others: vec![CellCoord::new(2, 3), CellCoord::new(4, 4)],
			}]
		);
	}

	#[test]
	fn repeated_identical_binding_is_not_a_conflict() {
		let g = TileGrid::new(
			"grid_rep",
			SheetId::Tiles,
			GridGeometry::new(0, 0, 10, 10),
			vec![TileCellEntry::new(1, 1, "y"), TileCellEntry::new(1, 1, "y")],
		)
		.unwrap();
		assert!(g.conflicting_tags().is_empty());
		assert_eq!(g.cells().len(), 1);
	}

	#[test]
	fn rejects_empty_names_and_tags() {
		let geo = GridGeometry::new(0, 0, 10, 10);
		assert!(matches!(
			TileGrid::new("", SheetId::Tiles, geo, vec![]),
			Err(DescriptionError::EmptyGridName)
		));
		assert!(matches!(
			TileGrid::new("g", SheetId::Tiles, geo, vec![TileCellEntry::new(3, 4, "")]),
			Err(DescriptionError::EmptyTag { row: 3, column: 4, .. })
		));
	}
}
