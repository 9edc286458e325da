//! Boundary topology resolution.
//!
//! Maps a candidate neighbor coordinate, possibly outside the grid, to an
//! in-range coordinate or to "outside" (`None`). Wrapping splits the
//! coordinate with `div_euclid`/`rem_euclid`; for the non-orientable
//! topologies an odd wrap count mirrors the other coordinate about the grid
//! center. Once a configuration validates, this function cannot fail.

use crate::kinds::Topology;

#[inline]
fn in_range(c: i64, extent: u32) -> bool {
    c >= 0 && c < extent as i64
}

/// Reduce one coordinate modulo its extent, reporting whether the total
/// wrap count is odd (which is what decides an orientation flip).
#[inline]
fn wrap_axis(c: i64, extent: u32) -> (i64, bool) {
    let extent = extent as i64;
    let wraps = c.div_euclid(extent);
    (c.rem_euclid(extent), wraps & 1 != 0)
}

#[inline]
fn mirror(c: i64, extent: u32) -> i64 {
    extent as i64 - 1 - c
}

/// Resolve `(x, y)` under `topology` on a `width` x `height` grid.
///
/// Returns the in-range coordinate, or `None` when the topology leaves the
/// coordinate outside the grid. An outside neighbor contributes weight 0 to
/// the neighbor sum; it is never an error.
pub fn resolve(
    topology: Topology,
    x: i64,
    y: i64,
    width: u32,
    height: u32,
) -> Option<(usize, usize)> {
    let (x, y) = match topology {
        Topology::Plane => {
            if !in_range(x, width) || !in_range(y, height) {
                return None;
            }
            (x, y)
        }
        Topology::CylinderX => {
            if !in_range(y, height) {
                return None;
            }
            (wrap_axis(x, width).0, y)
        }
        Topology::CylinderY => {
            if !in_range(x, width) {
                return None;
            }
            (x, wrap_axis(y, height).0)
        }
        Topology::Torus => (wrap_axis(x, width).0, wrap_axis(y, height).0),
        Topology::MobiusX => {
            if !in_range(y, height) {
                return None;
            }
            let (x, flip) = wrap_axis(x, width);
            (x, if flip { mirror(y, height) } else { y })
        }
        Topology::MobiusY => {
            if !in_range(x, width) {
                return None;
            }
            let (y, flip) = wrap_axis(y, height);
            (if flip { mirror(x, width) } else { x }, y)
        }
        Topology::KleinX => {
            let (x, flip) = wrap_axis(x, width);
            let (y, _) = wrap_axis(y, height);
            (x, if flip { mirror(y, height) } else { y })
        }
        Topology::KleinY => {
            let (x, _) = wrap_axis(x, width);
            let (y, flip) = wrap_axis(y, height);
            (if flip { mirror(x, width) } else { x }, y)
        }
        // Wrapping either axis of the projective plane mirrors the other
        // resolved coordinate; both flips apply when both axes wrap. Not
        // expressible as independent per-axis Mobius composition.
        Topology::ProjectivePlane => {
            let (rx, flip_x) = wrap_axis(x, width);
            let (ry, flip_y) = wrap_axis(y, height);
            let x = if flip_y { mirror(rx, width) } else { rx };
            let y = if flip_x { mirror(ry, height) } else { ry };
            (x, y)
        }
    };
    Some((x as usize, y as usize))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kinds::Topology;

    const W: u32 = 7;
    const H: u32 = 5;

    #[test]
    fn in_range_is_identity_everywhere() {
        for topology in Topology::ALL {
            for y in 0..H as i64 {
                for x in 0..W as i64 {
                    assert_eq!(
                        resolve(topology, x, y, W, H),
                        Some((x as usize, y as usize)),
                        "{:?} moved an in-range coordinate",
                        topology
                    );
                }
            }
        }
    }

    #[test]
    fn plane_is_outside_off_grid() {
        for (x, y) in [(-1, 2), (W as i64, 2), (3, -1), (3, H as i64), (-2, -2)] {
            assert_eq!(resolve(Topology::Plane, x, y, W, H), None);
        }
    }

    #[test]
    fn cylinders_wrap_one_axis_only() {
        assert_eq!(resolve(Topology::CylinderX, -1, 2, W, H), Some((W as usize - 1, 2)));
        assert_eq!(resolve(Topology::CylinderX, W as i64, 2, W, H), Some((0, 2)));
        assert_eq!(resolve(Topology::CylinderX, 3, -1, W, H), None);
        assert_eq!(resolve(Topology::CylinderY, 3, -1, W, H), Some((3, H as usize - 1)));
        assert_eq!(resolve(Topology::CylinderY, -1, 3, W, H), None);
    }

    #[test]
    fn torus_wraps_both_without_flip() {
        for y in 0..H as i64 {
            assert_eq!(
                resolve(Topology::Torus, -1, y, W, H),
                resolve(Topology::Torus, W as i64 - 1, y, W, H)
            );
        }
        assert_eq!(resolve(Topology::Torus, -1, -1, W, H), Some((W as usize - 1, H as usize - 1)));
    }

    #[test]
    fn mobius_flips_the_other_coordinate_on_wrap() {
        assert_eq!(resolve(Topology::MobiusX, -1, 1, W, H), Some((W as usize - 1, H as usize - 2)));
        assert_eq!(resolve(Topology::MobiusX, W as i64, 0, W, H), Some((0, H as usize - 1)));
        // The non-wrapping axis stays bounded.
        assert_eq!(resolve(Topology::MobiusX, 2, -1, W, H), None);
        assert_eq!(resolve(Topology::MobiusY, 1, -1, W, H), Some((W as usize - 2, H as usize - 1)));
        assert_eq!(resolve(Topology::MobiusY, -1, 2, W, H), None);
    }

    #[test]
    fn mobius_double_wrap_cancels_the_flip() {
        let twice = W as i64 + 1; // one full circuit plus one
        assert_eq!(resolve(Topology::MobiusX, twice + W as i64, 1, W, H), Some((1, 1)));
        assert_eq!(resolve(Topology::MobiusX, twice, 1, W, H), Some((1, H as usize - 2)));
    }

    #[test]
    fn klein_wraps_both_and_flips_one() {
        assert_eq!(resolve(Topology::KleinX, -1, 1, W, H), Some((W as usize - 1, H as usize - 2)));
        assert_eq!(resolve(Topology::KleinX, 2, -1, W, H), Some((2, H as usize - 1)));
        assert_eq!(resolve(Topology::KleinY, 2, -1, W, H), Some((W as usize - 3, H as usize - 1)));
        assert_eq!(resolve(Topology::KleinY, -1, 2, W, H), Some((W as usize - 1, 2)));
    }

    #[test]
    fn projective_plane_flips_the_other_axis_on_either_wrap() {
        for y in 0..H as i64 {
            assert_eq!(
                resolve(Topology::ProjectivePlane, -1, y, W, H),
                Some((W as usize - 1, H as usize - 1 - y as usize))
            );
        }
        for x in 0..W as i64 {
            assert_eq!(
                resolve(Topology::ProjectivePlane, x, H as i64, W, H),
                Some((W as usize - 1 - x as usize, 0))
            );
        }
        // Corner: both axes wrap, both coordinates mirror.
        assert_eq!(
            resolve(Topology::ProjectivePlane, -1, -1, W, H),
            Some((0, 0))
        );
    }
}
