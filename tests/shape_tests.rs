use navalgrid::{ShapeKind, PATTERN_CENTER, PATTERN_SIZE};

fn row_cols(kind: ShapeKind, row: usize) -> Vec<usize> {
    let pattern = kind.pattern();
    (0..PATTERN_SIZE)
        .filter(|&c| pattern.get(row, c).unwrap())
        .collect()
}

#[test]
fn test_cone_widens_downward() {
    assert_eq!(row_cols(ShapeKind::Cone, 0), vec![2]);
    assert_eq!(row_cols(ShapeKind::Cone, 1), vec![1, 2, 3]);
    assert_eq!(row_cols(ShapeKind::Cone, 2), vec![0, 1, 2, 3, 4]);
    assert_eq!(row_cols(ShapeKind::Cone, 4), vec![0, 1, 2, 3, 4]);
    assert_eq!(ShapeKind::Cone.pattern().count_ones(), 19);
}

#[test]
fn test_cross_is_center_row_and_column() {
    let cross = ShapeKind::Cross.pattern();
    assert_eq!(cross.count_ones(), 9);
    for (r, c) in cross.iter_set_bits() {
        assert!(r == PATTERN_CENTER || c == PATTERN_CENTER);
    }
}

#[test]
fn test_diamond_manhattan_distance() {
    let diamond = ShapeKind::Diamond.pattern();
    assert!(!diamond.get(0, 0).unwrap());
    assert!(diamond.get(2, 2).unwrap());
    assert!(diamond.get(1, 2).unwrap());
    assert!(diamond.get(0, 2).unwrap());
    assert!(!diamond.get(0, 1).unwrap());
    assert!(diamond.get(1, 1).unwrap());
    assert_eq!(diamond.count_ones(), 13);
}

#[test]
fn test_shape_names_parse() {
    assert_eq!("cone".parse::<ShapeKind>().unwrap(), ShapeKind::Cone);
    assert_eq!(" Cross ".parse::<ShapeKind>().unwrap(), ShapeKind::Cross);
    assert_eq!("octahedron".parse::<ShapeKind>().unwrap(), ShapeKind::Diamond);
    assert!("circle".parse::<ShapeKind>().is_err());
    for kind in ShapeKind::ALL {
        assert_eq!(kind.to_string().parse::<ShapeKind>().unwrap(), kind);
    }
}
