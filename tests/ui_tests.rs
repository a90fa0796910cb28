use navalgrid::{render_grid, render_pattern, Board, Grid, ShapeKind, FULL_FLEET};

#[test]
fn test_render_empty_grid() {
    let out = render_grid(&Grid::new());
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 11);
    assert_eq!(lines[0], "   0 1 2 3 4 5 6 7 8 9 ");
    assert_eq!(lines[1], " 0 0 0 0 0 0 0 0 0 0 0 ");
    assert_eq!(lines[10], " 9 0 0 0 0 0 0 0 0 0 0 ");
}

#[test]
fn test_render_ships() {
    let mut board = Board::new();
    board.place_fleet(&FULL_FLEET).unwrap();
    let out = render_grid(board.grid());
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[1], " 0 0 0 0 0 0 0 0 0 0 3 ");
    assert_eq!(lines[2], " 1 0 3 3 3 0 0 0 0 3 0 ");
    assert_eq!(lines[10], " 9 0 0 3 0 0 0 0 0 0 0 ");
}

#[test]
fn test_render_patterns() {
    let cross = render_pattern(&ShapeKind::Cross.pattern());
    assert_eq!(
        cross,
        "0 0 1 0 0 \n0 0 1 0 0 \n1 1 1 1 1 \n0 0 1 0 0 \n0 0 1 0 0 \n"
    );
    let cone = render_pattern(&ShapeKind::Cone.pattern());
    assert_eq!(cone.lines().next(), Some("0 0 1 0 0 "));
    assert_eq!(cone.lines().nth(1), Some("0 1 1 1 0 "));
}
