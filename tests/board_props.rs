use navalgrid::{
    can_place, place_unchecked, Board, CellState, Grid, Orientation, GRID_SIZE, SHIP_LENGTH,
};
use proptest::prelude::*;

fn orientation() -> impl Strategy<Value = Orientation> {
    prop::sample::select(Orientation::ALL.to_vec())
}

/// Cells of a ship computed in signed space, so negative columns show up.
fn signed_cells(row: usize, col: usize, orientation: Orientation) -> Vec<(i64, i64)> {
    let (dr, dc) = match orientation {
        Orientation::Horizontal => (0, 1),
        Orientation::Vertical => (1, 0),
        Orientation::DiagonalDownRight => (1, 1),
        Orientation::DiagonalDownLeft => (1, -1),
    };
    (0..SHIP_LENGTH as i64)
        .map(|i| (row as i64 + dr * i, col as i64 + dc * i))
        .collect()
}

fn in_grid(&(r, c): &(i64, i64)) -> bool {
    let n = GRID_SIZE as i64;
    (0..n).contains(&r) && (0..n).contains(&c)
}

fn grid_with(occupied: &[(usize, usize)]) -> Grid {
    let mut grid = Grid::new();
    for &(r, c) in occupied {
        if let Some(cell) = grid.cell_mut(r, c) {
            *cell = CellState::Ship;
        }
    }
    grid
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn empty_grid_accepts_exactly_in_bounds(row in 0..14usize, col in 0..14usize, o in orientation()) {
        let expected = signed_cells(row, col, o).iter().all(in_grid);
        prop_assert_eq!(can_place(&Grid::new(), row, col, o), expected);
    }

    #[test]
    fn validator_rejects_non_water(
        occupied in prop::collection::vec((0..GRID_SIZE, 0..GRID_SIZE), 0..20),
        row in 0..GRID_SIZE,
        col in 0..GRID_SIZE,
        o in orientation(),
    ) {
        let grid = grid_with(&occupied);
        let cells = signed_cells(row, col, o);
        let expected = cells.iter().all(in_grid)
            && cells
                .iter()
                .all(|&(r, c)| grid.get(r as usize, c as usize) == Some(CellState::Water));
        let before = grid;
        prop_assert_eq!(can_place(&grid, row, col, o), expected);
        prop_assert_eq!(grid, before);
    }

    #[test]
    fn placement_changes_exactly_footprint(
        occupied in prop::collection::vec((0..GRID_SIZE, 0..GRID_SIZE), 0..10),
        row in 0..GRID_SIZE,
        col in 0..GRID_SIZE,
        o in orientation(),
    ) {
        let grid = grid_with(&occupied);
        prop_assume!(can_place(&grid, row, col, o));
        let mut placed = grid;
        place_unchecked(&mut placed, row, col, o);

        let cells = signed_cells(row, col, o);
        let mut changed = 0;
        for r in 0..GRID_SIZE {
            for c in 0..GRID_SIZE {
                let target = cells.contains(&(r as i64, c as i64));
                if target {
                    prop_assert_eq!(grid.get(r, c), Some(CellState::Water));
                    prop_assert_eq!(placed.get(r, c), Some(CellState::Ship));
                    changed += 1;
                } else {
                    prop_assert_eq!(placed.get(r, c), grid.get(r, c));
                }
            }
        }
        prop_assert_eq!(changed, SHIP_LENGTH);
    }

    #[test]
    fn board_ship_map_tracks_grid(
        ships in prop::collection::vec((0..GRID_SIZE, 0..GRID_SIZE, orientation()), 1..8),
    ) {
        let mut board = Board::new();
        for (r, c, o) in ships {
            let _ = board.place(r, c, o);
        }
        prop_assert_eq!(board.ship_map(), board.grid().mask(CellState::Ship));
        prop_assert_eq!(board.ship_map().count_ones(), board.ship_count() * SHIP_LENGTH);
    }
}
