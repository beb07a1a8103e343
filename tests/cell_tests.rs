use seabattle::{Axis, Cell};

#[test]
fn test_display_letter_column() {
    assert_eq!(Cell::new(1, 1).to_string(), "A1");
    assert_eq!(Cell::new(5, 3).to_string(), "E3");
    assert_eq!(Cell::new(10, 10).to_string(), "J10");
    // off-board cells fall back to the numeric pair form
    assert_eq!(Cell::new(0, 2).to_string(), "(0,2)");
}

#[test]
fn test_parse_round_trip() {
    for s in ["A1", "E3", "J10", "b7"] {
        let cell: Cell = s.parse().unwrap();
        assert_eq!(cell.to_string(), s.to_uppercase());
    }
    assert_eq!("e3".parse::<Cell>().unwrap(), Cell::new(5, 3));
}

#[test]
fn test_parse_rejects_garbage() {
    for s in ["", "5", "A", "A0", "A-1", "!3", "AA"] {
        assert!(s.parse::<Cell>().is_err(), "{:?} should not parse", s);
    }
}

#[test]
fn test_neighbors() {
    let c = Cell::new(4, 4);
    assert_eq!(c.left(), Cell::new(3, 4));
    assert_eq!(c.right(), Cell::new(5, 4));
    assert_eq!(c.above(), Cell::new(4, 3));
    assert_eq!(c.below(), Cell::new(4, 5));
    assert_eq!(c.back_along(Axis::Horizontal), c.left());
    assert_eq!(c.forward_along(Axis::Vertical), c.below());
    assert_eq!(c.coord_along(Axis::Horizontal), 4);
    assert_eq!(c.coord_along(Axis::Vertical), 4);
}
