//! Relative-offset stencils for each neighborhood kind.
//!
//! Offsets are `(dx, dy)` with y growing downward. Hex stencils use the
//! odd-row offset layout (odd rows shifted half a cell right), so they come
//! in an even-row and an odd-row variant selected by the cell's row parity.

use crate::kinds::Neighborhood;

pub const MOORE8: [(i32, i32); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1, 0),           (1, 0),
    (-1, 1),  (0, 1),  (1, 1),
];

pub const VON_NEUMANN4: [(i32, i32); 4] = [(0, -1), (-1, 0), (1, 0), (0, 1)];

/// All 24 offsets of the 5x5 block minus the center.
pub const EXT_MOORE24: [(i32, i32); 24] = [
    (-2, -2), (-1, -2), (0, -2), (1, -2), (2, -2),
    (-2, -1), (-1, -1), (0, -1), (1, -1), (2, -1),
    (-2, 0),  (-1, 0),           (1, 0),  (2, 0),
    (-2, 1),  (-1, 1),  (0, 1),  (1, 1),  (2, 1),
    (-2, 2),  (-1, 2),  (0, 2),  (1, 2),  (2, 2),
];

pub const HEX6_EVEN: [(i32, i32); 6] = [
    (-1, -1), (0, -1),
    (-1, 0),  (1, 0),
    (-1, 1),  (0, 1),
];

pub const HEX6_ODD: [(i32, i32); 6] = [
    (0, -1), (1, -1),
    (-1, 0), (1, 0),
    (0, 1),  (1, 1),
];

/// Hex6 plus the ring of 12 at hex distance 2, even rows.
pub const EXT_HEX18_EVEN: [(i32, i32); 18] = [
    (-1, -1), (0, -1),
    (-1, 0),  (1, 0),
    (-1, 1),  (0, 1),
    (-1, -2), (0, -2), (1, -2),
    (-2, -1), (1, -1),
    (-2, 0),  (2, 0),
    (-2, 1),  (1, 1),
    (-1, 2),  (0, 2),  (1, 2),
];

/// Hex6 plus the ring of 12 at hex distance 2, odd rows.
pub const EXT_HEX18_ODD: [(i32, i32); 18] = [
    (0, -1),  (1, -1),
    (-1, 0),  (1, 0),
    (0, 1),   (1, 1),
    (-1, -2), (0, -2), (1, -2),
    (-1, -1), (2, -1),
    (-2, 0),  (2, 0),
    (-1, 1),  (2, 1),
    (-1, 2),  (0, 2),  (1, 2),
];

/// The ordered offset set for one neighborhood at one row parity.
///
/// `odd_row` is ignored for the square neighborhoods. Selecting an unknown
/// neighborhood is impossible by construction; this is a total lookup.
#[inline]
pub fn offsets(neighborhood: Neighborhood, odd_row: bool) -> &'static [(i32, i32)] {
    match neighborhood {
        Neighborhood::Moore8 => &MOORE8,
        Neighborhood::VonNeumann4 => &VON_NEUMANN4,
        Neighborhood::ExtendedMoore24 => &EXT_MOORE24,
        Neighborhood::Hex6 => {
            if odd_row {
                &HEX6_ODD
            } else {
                &HEX6_EVEN
            }
        }
        Neighborhood::ExtendedHex18 => {
            if odd_row {
                &EXT_HEX18_ODD
            } else {
                &EXT_HEX18_EVEN
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn unique(offsets: &[(i32, i32)]) -> HashSet<(i32, i32)> {
        let set: HashSet<_> = offsets.iter().copied().collect();
        assert_eq!(set.len(), offsets.len(), "duplicate offset in stencil");
        assert!(!set.contains(&(0, 0)), "stencil must not contain the center");
        set
    }

    #[test]
    fn sizes_match_neighborhood() {
        for n in Neighborhood::ALL {
            for odd_row in [false, true] {
                assert_eq!(
                    offsets(n, odd_row).len(),
                    n.max_neighbors() as usize,
                    "stencil size mismatch for {:?}",
                    n
                );
            }
        }
    }

    /// odd-r offset -> axial, for a cell on a row of known parity.
    fn hex_distance(dx: i32, dy: i32, odd_row: bool) -> i32 {
        let base = if odd_row { 1 } else { 0 };
        let q0 = -(base - (base & 1)) / 2;
        let row = base + dy;
        let q1 = dx - (row - (row & 1)).div_euclid(2);
        let (dq, dr) = (q1 - q0, dy);
        (dq.abs() + dr.abs() + (dq + dr).abs()) / 2
    }

    #[test]
    fn hex6_offsets_are_ring_one() {
        for (stencil, odd_row) in [(&HEX6_EVEN, false), (&HEX6_ODD, true)] {
            for &(dx, dy) in unique(stencil).iter() {
                assert_eq!(hex_distance(dx, dy, odd_row), 1, "({dx},{dy}) odd={odd_row}");
            }
        }
    }

    #[test]
    fn ext_hex18_is_ring_one_plus_ring_two() {
        for (stencil, odd_row) in [(&EXT_HEX18_EVEN, false), (&EXT_HEX18_ODD, true)] {
            let mut by_distance = [0usize; 3];
            for &(dx, dy) in unique(stencil.as_slice()).iter() {
                let d = hex_distance(dx, dy, odd_row);
                assert!(d == 1 || d == 2, "({dx},{dy}) odd={odd_row} at distance {d}");
                by_distance[d as usize] += 1;
            }
            assert_eq!(by_distance[1], 6);
            assert_eq!(by_distance[2], 12);
        }
    }

    #[test]
    fn square_stencils_are_symmetric() {
        for stencil in [MOORE8.as_slice(), VON_NEUMANN4.as_slice(), EXT_MOORE24.as_slice()] {
            let set = unique(stencil);
            for &(dx, dy) in &set {
                assert!(set.contains(&(-dx, -dy)), "missing mirror of ({dx},{dy})");
            }
        }
    }
}
