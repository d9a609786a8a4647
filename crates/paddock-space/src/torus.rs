//! Toroidal grid topology: wrap arithmetic and neighborhood enumeration.

use crate::error::GridError;
use paddock_core::Pos;
use smallvec::SmallVec;

/// Cardinal offsets: N, S, W, E.
///
/// The von Neumann neighborhood is exactly this table; the Moore
/// neighborhood appends [`OFFSETS_DIAG`]. Enumeration order is part of
/// the contract — it is fixed so that a seeded run visits neighbors in
/// a reproducible sequence.
const OFFSETS_CARDINAL: [(i32, i32); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

/// Diagonal offsets: NW, NE, SW, SE.
const OFFSETS_DIAG: [(i32, i32); 4] = [(-1, -1), (1, -1), (-1, 1), (1, 1)];

/// Neighbor list: at most 8 neighbors plus the optional center cell.
pub type Neighborhood = SmallVec<[Pos; 9]>;

/// A `width × height` grid with periodic (torus) boundaries.
///
/// Coordinates wrap on both axes: moving off the east edge re-enters on
/// the west edge, and symmetrically for every other direction. All cells
/// therefore have a full neighborhood — 4 cells (von Neumann) or 8
/// (Moore) — though on tiny grids some of those may alias the same cell
/// or the center itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Torus {
    width: u32,
    height: u32,
}

impl Torus {
    /// Maximum dimension size: coordinates use `i32`, so each axis must fit.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create a torus with the given dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::EmptyGrid`] if either dimension is 0, or
    /// [`GridError::DimensionTooLarge`] if either exceeds `i32::MAX`.
    pub fn new(width: u32, height: u32) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::EmptyGrid);
        }
        if width > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "width",
                value: width,
            });
        }
        if height > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "height",
                value: height,
            });
        }
        Ok(Self { width, height })
    }

    /// Grid width.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Grid height.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Whether `pos` lies within the declared bounds, before wrapping.
    pub fn contains(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.x < self.width as i32 && pos.y >= 0 && pos.y < self.height as i32
    }

    /// Resolve a position onto the torus.
    ///
    /// Euclidean remainder on both axes, so arbitrarily negative inputs
    /// wrap correctly: on a 5-wide grid, `x = -1` resolves to 4.
    pub fn wrap(&self, pos: Pos) -> Pos {
        let w = self.width as i32;
        let h = self.height as i32;
        Pos {
            x: pos.x.rem_euclid(w),
            y: pos.y.rem_euclid(h),
        }
    }

    /// Flat row-major index of an in-bounds position.
    ///
    /// Callers must wrap first; used by [`MultiGrid`](crate::MultiGrid)
    /// for cell storage.
    pub(crate) fn index(&self, pos: Pos) -> usize {
        debug_assert!(self.contains(pos), "index of unwrapped position {pos}");
        (pos.y as usize) * (self.width as usize) + (pos.x as usize)
    }

    /// Enumerate the neighborhood of `pos`, each coordinate wrapped.
    ///
    /// `moore = true` yields the 8-neighborhood (cardinals then
    /// diagonals), `false` the 4-neighborhood. `include_center` appends
    /// `pos` itself (wrapped) at the end. The order is a fixed
    /// enumeration; randomizing the choice among neighbors is the
    /// caller's job.
    ///
    /// On degenerate tori (1×1, 1×n) distinct offsets can wrap to the
    /// same cell; duplicates are preserved, matching per-direction
    /// movement semantics.
    pub fn neighbors(&self, pos: Pos, moore: bool, include_center: bool) -> Neighborhood {
        let mut out = Neighborhood::new();
        for (dx, dy) in OFFSETS_CARDINAL {
            out.push(self.wrap(pos.offset(dx, dy)));
        }
        if moore {
            for (dx, dy) in OFFSETS_DIAG {
                out.push(self.wrap(pos.offset(dx, dy)));
            }
        }
        if include_center {
            out.push(self.wrap(pos));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn p(x: i32, y: i32) -> Pos {
        Pos::new(x, y)
    }

    // ── Constructor ─────────────────────────────────────────────

    #[test]
    fn new_rejects_zero_dimensions() {
        assert!(matches!(Torus::new(0, 5), Err(GridError::EmptyGrid)));
        assert!(matches!(Torus::new(5, 0), Err(GridError::EmptyGrid)));
    }

    #[test]
    fn new_rejects_dims_exceeding_i32_max() {
        let big = i32::MAX as u32 + 1;
        assert!(matches!(
            Torus::new(big, 5),
            Err(GridError::DimensionTooLarge { name: "width", .. })
        ));
        assert!(matches!(
            Torus::new(5, big),
            Err(GridError::DimensionTooLarge { name: "height", .. })
        ));
    }

    // ── Wrap ────────────────────────────────────────────────────

    #[test]
    fn wrap_east_edge_reenters_west() {
        let t = Torus::new(5, 4).unwrap();
        assert_eq!(t.wrap(p(5, 2)), p(0, 2));
    }

    #[test]
    fn wrap_negative_coordinates() {
        let t = Torus::new(5, 4).unwrap();
        assert_eq!(t.wrap(p(-1, -1)), p(4, 3));
        assert_eq!(t.wrap(p(-6, -5)), p(4, 3));
    }

    #[test]
    fn wrap_identity_in_bounds() {
        let t = Torus::new(5, 4).unwrap();
        assert_eq!(t.wrap(p(3, 3)), p(3, 3));
    }

    // ── Neighborhoods ───────────────────────────────────────────

    #[test]
    fn von_neumann_interior() {
        let t = Torus::new(5, 5).unwrap();
        let n = t.neighbors(p(2, 2), false, false);
        assert_eq!(n.len(), 4);
        assert!(n.contains(&p(2, 1)));
        assert!(n.contains(&p(2, 3)));
        assert!(n.contains(&p(1, 2)));
        assert!(n.contains(&p(3, 2)));
    }

    #[test]
    fn moore_corner_wraps() {
        let t = Torus::new(5, 5).unwrap();
        let n = t.neighbors(p(0, 0), true, false);
        assert_eq!(n.len(), 8);
        assert!(n.contains(&p(4, 4))); // NW wraps on both axes
        assert!(n.contains(&p(0, 4))); // N wraps
        assert!(n.contains(&p(4, 0))); // W wraps
    }

    #[test]
    fn include_center_appends_pos() {
        let t = Torus::new(5, 5).unwrap();
        let n = t.neighbors(p(2, 2), true, true);
        assert_eq!(n.len(), 9);
        assert_eq!(n[8], p(2, 2));
    }

    #[test]
    fn single_cell_torus_all_neighbors_alias_center() {
        let t = Torus::new(1, 1).unwrap();
        let n = t.neighbors(p(0, 0), true, false);
        assert_eq!(n.len(), 8);
        assert!(n.iter().all(|&nb| nb == p(0, 0)));
    }

    #[test]
    fn enumeration_order_is_fixed() {
        let t = Torus::new(5, 5).unwrap();
        let n = t.neighbors(p(2, 2), true, false);
        let expected = [
            p(2, 1),
            p(2, 3),
            p(1, 2),
            p(3, 2),
            p(1, 1),
            p(3, 1),
            p(1, 3),
            p(3, 3),
        ];
        assert_eq!(n.as_slice(), &expected);
    }

    // ── Properties ──────────────────────────────────────────────

    proptest! {
        #[test]
        fn wrap_is_always_in_bounds(
            w in 1u32..50, h in 1u32..50,
            x in -200i32..200, y in -200i32..200,
        ) {
            let t = Torus::new(w, h).unwrap();
            prop_assert!(t.contains(t.wrap(Pos::new(x, y))));
        }

        #[test]
        fn wrap_is_idempotent(
            w in 1u32..50, h in 1u32..50,
            x in -200i32..200, y in -200i32..200,
        ) {
            let t = Torus::new(w, h).unwrap();
            let once = t.wrap(Pos::new(x, y));
            prop_assert_eq!(t.wrap(once), once);
        }

        #[test]
        fn neighbors_symmetric(
            w in 2u32..12, h in 2u32..12,
            x in 0i32..12, y in 0i32..12,
            moore in proptest::bool::ANY,
        ) {
            let t = Torus::new(w, h).unwrap();
            let pos = t.wrap(Pos::new(x, y));
            for nb in t.neighbors(pos, moore, false) {
                let back = t.neighbors(nb, moore, false);
                prop_assert!(
                    back.contains(&pos),
                    "neighbor symmetry violated between {} and {}", pos, nb,
                );
            }
        }

        #[test]
        fn neighborhood_size_is_constant_on_torus(
            w in 1u32..12, h in 1u32..12,
            x in 0i32..12, y in 0i32..12,
        ) {
            let t = Torus::new(w, h).unwrap();
            let pos = t.wrap(Pos::new(x, y));
            prop_assert_eq!(t.neighbors(pos, false, false).len(), 4);
            prop_assert_eq!(t.neighbors(pos, true, false).len(), 8);
        }
    }
}
