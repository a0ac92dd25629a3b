use rand::{Rng, SeedableRng, rngs::StdRng};
use std::collections::HashSet;
use trident_tiles::*;

const KNOWN: &[(&str, &str, u32, u32)] = &[
    ("grid_main", "t.l0.grassland1", 0, 2),
    ("grid_main", "t.l0.inaccessible1", 0, 3),
    ("grid_main", "t.l1.hills1", 0, 1),
    ("grid_main", "t.l0.desert_n1e1s1w1", 1, 0),
    ("grid_main", "t.l0.desert_n0e0s0w0", 1, 15),
    ("grid_main", "road.river_outlet_e", 14, 15),
    ("grid_main", "ts.oilColumn: ", 15, 10),
    ("grid_main", "ts.arctic_oil", 15, 10),
    ("grid_main", "city.size_0", 17, 0),
    ("grid_main", "unit.tired", 5, 16),
    ("grid_main", "unit.lowfuel", 5, 16),
    ("grid_main", "unit.cultivate", 8, 17),
    ("grid_main", "unit.irrigate", 8, 17),
    ("grid_main", "unit.hp_100", 17, 10),
    ("grid_main", "unit.vet_9", 18, 18),
    ("grid_main", "upkeep.gold10", 22, 19),
    ("grid_nuke", "explode.nuke", 0, 0),
    ("grid_ocean", "t.l0.coast_cell_u000", 0, 0),
    ("grid_ocean", "t.l0.inaccessible_cell_d111", 0, 31),
];

#[test]
fn documented_cells_resolve() {
    let catalog = TileCatalog::builtin();
    for &(grid, tag, row, column) in KNOWN {
        assert_eq!(
            catalog.resolve_cell(grid, tag),
            Ok(CellCoord::new(row, column)),
            "{grid} {tag}"
        );
    }
}

#[test]
fn documented_rectangles() {
    let catalog = TileCatalog::builtin();
    assert_eq!(catalog.rectangle_for("grid_main", 0, 2).unwrap().as_tuple(), (60, 0, 30, 30));
    let loc = catalog.resolve_rect("grid_ocean", "t.l0.coast_cell_u000").unwrap();
    assert_eq!(loc.cell, CellCoord::new(0, 0));
    assert_eq!(loc.rect.as_tuple(), (0, 210, 15, 15));
    assert_eq!(loc.sheet, SheetId::Tiles);
    assert_eq!(
        catalog.resolve_rect("grid_nuke", "explode.nuke").unwrap().rect.as_tuple(),
        (510, 30, 90, 90)
    );
}

#[test]
fn absent_tags_are_not_found() {
    let catalog = TileCatalog::builtin();
    for (grid, tag) in [
        ("grid_main", "t.l0.coast_cell_u000"),
        ("grid_ocean", "t.l0.grassland1"),
        ("grid_nuke", "unit.tired"),
        ("grid_main", ""),
        ("grid_main", "ts.oil"),
    ] {
        assert_eq!(
            catalog.resolve_cell(grid, tag),
            Err(NotFoundError::Tag { grid: grid.to_string(), tag: tag.to_string() })
        );
    }
}

#[test]
fn every_entry_round_trips() {
    let catalog = TileCatalog::builtin();
    for grid in catalog.grids() {
        let declared: HashSet<CellCoord> = grid.entries().iter().map(|e| e.cell).collect();
        let mut reached = HashSet::new();
        for e in grid.entries() {
            let cell = catalog.resolve_cell(grid.name(), &e.tag).unwrap();
            assert_eq!(cell, e.cell, "{} {}", grid.name(), e.tag);
            reached.insert(cell);
            assert!(grid.tags_at(cell).contains(&e.tag.as_str()));
        }
        assert_eq!(reached, declared);
        assert!(grid.conflicting_tags().is_empty(), "{}", grid.name());
    }
}

#[test]
fn aliases_are_visible_from_the_cell() {
    let catalog = TileCatalog::builtin();
    assert_eq!(catalog.tags_at("grid_main", 5, 16).unwrap(), vec!["unit.tired", "unit.lowfuel"]);
    assert_eq!(catalog.tags_at("grid_main", 8, 17).unwrap(), vec!["unit.cultivate", "unit.irrigate"]);
    assert!(catalog.tags_at("grid_main", 40, 40).unwrap().is_empty());
}

#[test]
fn lookups_are_idempotent() {
    let catalog = TileCatalog::builtin();
    let first: Vec<_> = KNOWN
        .iter()
        .map(|&(g, t, _, _)| catalog.resolve_rect(g, t).unwrap())
        .collect();
    for _ in 0..3 {
        let again: Vec<_> = KNOWN
            .iter()
            .map(|&(g, t, _, _)| catalog.resolve_rect(g, t).unwrap())
            .collect();
        assert_eq!(first, again);
    }
    assert_eq!(TileCatalog::trident().list_grids(), catalog.list_grids());
}

#[test]
fn rectangles_follow_geometry() {
    let catalog = TileCatalog::builtin();
    let mut rng = StdRng::seed_from_u64(7);
    for grid in catalog.grids() {
        let g = grid.geometry();
        for _ in 0..200 {
            let row: u32 = rng.gen_range(0..64);
            let column: u32 = rng.gen_range(0..64);
            let r = catalog.rectangle_for(grid.name(), row, column).unwrap();
            assert_eq!(r.x, g.origin_x + column * g.cell_width);
            assert_eq!(r.y, g.origin_y + row * g.cell_height);
            assert_eq!((r.width, r.height), (g.cell_width, g.cell_height));
            assert_eq!(g.cell_at(r.x, r.y), Some(CellCoord::new(row, column)));
        }
    }
}

#[test]
fn concurrent_readers_agree() {
    let handles: Vec<_> = (0..4)
        .map(|_| {
            std::thread::spawn(|| {
                let catalog = TileCatalog::builtin();
                let registry = AssetRegistry::embedded();
                (
                    catalog.resolve_rect("grid_main", "unit.irrigate").unwrap().rect,
                    registry.get("tiles").unwrap().len(),
                )
            })
        })
        .collect();
    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(results.windows(2).all(|w| w[0] == w[1]));
    assert_eq!(results[0].0, PixelRect::new(510, 240, 30, 30));
}
