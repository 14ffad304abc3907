//! Pieces module - the fixed polyomino catalog
//!
//! Shapes are written down as raw cell lists and normalized exactly once,
//! when the catalog is first accessed: offsets are shifted so the minimum x and
//! y are 0, and the bounding box is the tight enclosing rectangle. Placement
//! code only ever reads the normalized form.

use std::sync::OnceLock;

use arrayvec::ArrayVec;

use crate::types::{Point, LARGE_PIECE_SIZE, TRAY_SIZE};

/// Largest piece in the catalog (the 2x3 rectangles)
pub const MAX_PIECE_CELLS: usize = 6;

/// Number of shapes in the catalog
pub const CATALOG_SIZE: usize = 16;

/// Tight bounding box of a normalized piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bounds {
    pub w: u8,
    pub h: u8,
}

/// Immutable piece definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceDef {
    id: &'static str,
    cells: ArrayVec<Point, MAX_PIECE_CELLS>,
    bounds: Bounds,
}

impl PieceDef {
    /// Build a normalized piece from raw (possibly offset) cells
    fn normalized(id: &'static str, raw: &[(i8, i8)]) -> Self {
        let min_x = raw.iter().map(|&(x, _)| x).min().unwrap_or(0);
        let min_y = raw.iter().map(|&(_, y)| y).min().unwrap_or(0);

        let cells: ArrayVec<Point, MAX_PIECE_CELLS> = raw
            .iter()
            .map(|&(x, y)| Point::new(x - min_x, y - min_y))
            .collect();

        let max_x = cells.iter().map(|c| c.x).max().unwrap_or(0);
        let max_y = cells.iter().map(|c| c.y).max().unwrap_or(0);

        Self {
            id,
            cells,
            bounds: Bounds {
                w: (max_x + 1) as u8,
                h: (max_y + 1) as u8,
            },
        }
    }

    pub fn id(&self) -> &'static str {
        self.id
    }

    /// Normalized cell offsets, all non-negative
    pub fn cells(&self) -> &[Point] {
        &self.cells
    }

    /// Number of cells
    pub fn size(&self) -> u8 {
        self.cells.len() as u8
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Large pieces are subject to the streak limit in the generator
    pub fn is_large(&self) -> bool {
        self.size() >= LARGE_PIECE_SIZE
    }
}

/// Raw shapes in catalog order. Ids are stable and used by hosts.
const SHAPES: [(&str, &[(i8, i8)]); CATALOG_SIZE] = [
    ("dot", &[(0, 0)]),
    ("domino_v", &[(0, 0), (0, 1)]),
    ("domino_h", &[(0, 0), (1, 0)]),
    ("square_2", &[(0, 0), (1, 0), (0, 1), (1, 1)]),
    ("line_3_h", &[(0, 0), (1, 0), (2, 0)]),
    ("line_3_v", &[(0, 0), (0, 1), (0, 2)]),
    ("line_4_h", &[(0, 0), (1, 0), (2, 0), (3, 0)]),
    ("line_4_v", &[(0, 0), (0, 1), (0, 2), (0, 3)]),
    ("rect_2x3", &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2), (1, 2)]),
    ("rect_3x2", &[(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]),
    ("l_3x2", &[(0, 0), (0, 1), (0, 2), (1, 2)]),
    ("j_3x2", &[(1, 0), (1, 1), (1, 2), (0, 2)]),
    ("t_3x2", &[(0, 0), (1, 0), (2, 0), (1, 1)]),
    ("s_3x2", &[(1, 0), (2, 0), (0, 1), (1, 1)]),
    ("z_3x2", &[(0, 0), (1, 0), (1, 1), (2, 1)]),
    ("plus", &[(1, 0), (0, 1), (1, 1), (2, 1), (1, 2)]),
];

static CATALOG: OnceLock<Vec<PieceDef>> = OnceLock::new();

/// The full piece catalog, normalized on first access
pub fn catalog() -> &'static [PieceDef] {
    CATALOG.get_or_init(|| {
        SHAPES
            .iter()
            .map(|&(id, raw)| PieceDef::normalized(id, raw))
            .collect()
    })
}

/// Look up a catalog piece by its stable id
pub fn piece_by_id(id: &str) -> Option<&'static PieceDef> {
    catalog().iter().find(|piece| piece.id == id)
}

/// Guaranteed-small tray handed out by the continue reward:
/// a dot, a horizontal domino and a 2x2 square
pub fn continue_set() -> [&'static PieceDef; TRAY_SIZE] {
    let all = catalog();
    [&all[0], &all[2], &all[3]]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalization_shifts_to_origin() {
        let piece = PieceDef::normalized("shifted", &[(3, 5), (4, 5), (4, 6)]);
        assert_eq!(
            piece.cells(),
            &[Point::new(0, 0), Point::new(1, 0), Point::new(1, 1)]
        );
        assert_eq!(piece.bounds(), Bounds { w: 2, h: 2 });
        assert_eq!(piece.size(), 3);
    }

    #[test]
    fn test_catalog_is_normalized() {
        for piece in catalog() {
            let min_x = piece.cells().iter().map(|c| c.x).min().unwrap();
            let min_y = piece.cells().iter().map(|c| c.y).min().unwrap();
            assert_eq!((min_x, min_y), (0, 0), "{} not normalized", piece.id());
            assert!(piece.cells().iter().all(|c| c.x >= 0 && c.y >= 0));

            let max_x = piece.cells().iter().map(|c| c.x).max().unwrap();
            let max_y = piece.cells().iter().map(|c| c.y).max().unwrap();
            assert_eq!(piece.bounds().w as i8, max_x + 1);
            assert_eq!(piece.bounds().h as i8, max_y + 1);
        }
    }

    #[test]
    fn test_continue_set_ids() {
        let ids = continue_set().map(|p| p.id());
        assert_eq!(ids, ["dot", "domino_h", "square_2"]);
        assert!(continue_set().iter().all(|p| !p.is_large()));
    }

    #[test]
    fn test_catalog_returns_same_instance() {
        let a = catalog().as_ptr();
        let b = catalog().as_ptr();
        assert_eq!(a, b);
    }
}
