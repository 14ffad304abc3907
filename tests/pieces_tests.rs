//! Catalog tests

use std::collections::HashSet;

use lumelines::core::{catalog, piece_by_id};
use lumelines::types::{Point, LARGE_PIECE_SIZE};

#[test]
fn test_catalog_has_sixteen_unique_ids() {
    let ids: HashSet<&str> = catalog().iter().map(|p| p.id()).collect();
    assert_eq!(catalog().len(), 16);
    assert_eq!(ids.len(), 16);
}

#[test]
fn test_every_piece_is_normalized() {
    for piece in catalog() {
        let min_x = piece.cells().iter().map(|c| c.x).min().unwrap();
        let min_y = piece.cells().iter().map(|c| c.y).min().unwrap();
        assert_eq!((min_x, min_y), (0, 0), "{}", piece.id());

        let max_x = piece.cells().iter().map(|c| c.x).max().unwrap();
        let max_y = piece.cells().iter().map(|c| c.y).max().unwrap();
        assert_eq!(piece.bounds().w, (max_x + 1) as u8);
        assert_eq!(piece.bounds().h, (max_y + 1) as u8);
    }
}

#[test]
fn test_large_pieces() {
    let large: Vec<&str> = catalog()
        .iter()
        .filter(|p| p.size() >= LARGE_PIECE_SIZE)
        .map(|p| p.id())
        .collect();
    assert_eq!(large, vec!["rect_2x3", "rect_3x2", "plus"]);
    assert!(catalog().iter().all(|p| p.is_large() == large.contains(&p.id())));
}

#[test]
fn test_plus_shape() {
    let plus = piece_by_id("plus").unwrap();
    assert_eq!(plus.size(), 5);
    assert!(plus.cells().contains(&Point::new(1, 1)));
    assert!(!plus.cells().contains(&Point::new(0, 0)));
}

#[test]
fn test_unknown_id() {
    assert!(piece_by_id("line_5_h").is_none());
}
