//! Canonical enumerations shared by every layer of the engine.
//!
//! Neighborhood, topology and vitality-mode identifiers live here and
//! nowhere else; anything that needs a stable small-integer index goes
//! through `index()`/`from_index()` rather than a parallel array.

/// The shape of a cell's neighbor set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Neighborhood {
    /// 8 square-adjacent cells.
    Moore8 = 0,
    /// 4 orthogonal cells.
    VonNeumann4 = 1,
    /// The 5x5 block minus the center: 24 cells.
    ExtendedMoore24 = 2,
    /// 6 hex-adjacent cells, odd-row offset layout.
    Hex6 = 3,
    /// Hex6 plus the 12-cell ring at hex distance 2.
    ExtendedHex18 = 4,
}

impl Neighborhood {
    pub const ALL: [Neighborhood; 5] = [
        Neighborhood::Moore8,
        Neighborhood::VonNeumann4,
        Neighborhood::ExtendedMoore24,
        Neighborhood::Hex6,
        Neighborhood::ExtendedHex18,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn from_index(index: usize) -> Option<Neighborhood> {
        match index {
            0 => Some(Neighborhood::Moore8),
            1 => Some(Neighborhood::VonNeumann4),
            2 => Some(Neighborhood::ExtendedMoore24),
            3 => Some(Neighborhood::Hex6),
            4 => Some(Neighborhood::ExtendedHex18),
            _ => None,
        }
    }

    /// Stencil size, which is also the largest possible neighbor-count
    /// index into the rule bitmasks.
    #[inline]
    pub const fn max_neighbors(self) -> u32 {
        match self {
            Neighborhood::Moore8 => 8,
            Neighborhood::VonNeumann4 => 4,
            Neighborhood::ExtendedMoore24 => 24,
            Neighborhood::Hex6 => 6,
            Neighborhood::ExtendedHex18 => 18,
        }
    }

    /// Hex stencils depend on row parity.
    #[inline]
    pub const fn is_hex(self) -> bool {
        matches!(self, Neighborhood::Hex6 | Neighborhood::ExtendedHex18)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Neighborhood::Moore8 => "moore8",
            Neighborhood::VonNeumann4 => "vonneumann4",
            Neighborhood::ExtendedMoore24 => "extmoore24",
            Neighborhood::Hex6 => "hex6",
            Neighborhood::ExtendedHex18 => "exthex18",
        }
    }

    pub fn parse(name: &str) -> Option<Neighborhood> {
        Neighborhood::ALL
            .into_iter()
            .find(|n| n.name().eq_ignore_ascii_case(name))
    }
}

/// How out-of-range neighbor coordinates are glued back onto the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Topology {
    /// No wrapping; off-grid is outside.
    Plane = 0,
    /// X wraps, Y is bounded.
    CylinderX = 1,
    /// Y wraps, X is bounded.
    CylinderY = 2,
    /// Both axes wrap.
    Torus = 3,
    /// X wraps with a Y mirror on each wrap; Y is bounded.
    MobiusX = 4,
    /// Y wraps with an X mirror on each wrap; X is bounded.
    MobiusY = 5,
    /// X wraps with a Y mirror; Y wraps plainly.
    KleinX = 6,
    /// Y wraps with an X mirror; X wraps plainly.
    KleinY = 7,
    /// Both axes wrap, each wrap mirroring the other coordinate.
    ProjectivePlane = 8,
}

impl Topology {
    pub const ALL: [Topology; 9] = [
        Topology::Plane,
        Topology::CylinderX,
        Topology::CylinderY,
        Topology::Torus,
        Topology::MobiusX,
        Topology::MobiusY,
        Topology::KleinX,
        Topology::KleinY,
        Topology::ProjectivePlane,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn from_index(index: usize) -> Option<Topology> {
        match index {
            0 => Some(Topology::Plane),
            1 => Some(Topology::CylinderX),
            2 => Some(Topology::CylinderY),
            3 => Some(Topology::Torus),
            4 => Some(Topology::MobiusX),
            5 => Some(Topology::MobiusY),
            6 => Some(Topology::KleinX),
            7 => Some(Topology::KleinY),
            8 => Some(Topology::ProjectivePlane),
            _ => None,
        }
    }

    #[inline]
    pub const fn wraps_x(self) -> bool {
        matches!(
            self,
            Topology::CylinderX
                | Topology::Torus
                | Topology::MobiusX
                | Topology::KleinX
                | Topology::KleinY
                | Topology::ProjectivePlane
        )
    }

    #[inline]
    pub const fn wraps_y(self) -> bool {
        matches!(
            self,
            Topology::CylinderY
                | Topology::Torus
                | Topology::MobiusY
                | Topology::KleinX
                | Topology::KleinY
                | Topology::ProjectivePlane
        )
    }

    pub const fn name(self) -> &'static str {
        match self {
            Topology::Plane => "plane",
            Topology::CylinderX => "cylinderx",
            Topology::CylinderY => "cylindery",
            Topology::Torus => "torus",
            Topology::MobiusX => "mobiusx",
            Topology::MobiusY => "mobiusy",
            Topology::KleinX => "kleinx",
            Topology::KleinY => "kleiny",
            Topology::ProjectivePlane => "projective",
        }
    }

    pub fn parse(name: &str) -> Option<Topology> {
        Topology::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(name))
    }
}

/// How a decaying cell's liveness is weighted into the neighbor sum.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum VitalityMode {
    /// Decaying cells count for nothing.
    #[default]
    None = 0,
    /// Full weight above a liveness threshold, nothing below.
    Threshold = 1,
    /// Linear in liveness, scaled by a signed ghost factor.
    Ghost = 2,
    /// Logistic ramp around the threshold.
    Sigmoid = 3,
    /// Power-law falloff scaled by the ghost factor.
    Decay = 4,
    /// Monotone cubic interpolation of 128 user-supplied samples.
    Curve = 5,
}

impl VitalityMode {
    pub const ALL: [VitalityMode; 6] = [
        VitalityMode::None,
        VitalityMode::Threshold,
        VitalityMode::Ghost,
        VitalityMode::Sigmoid,
        VitalityMode::Decay,
        VitalityMode::Curve,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn from_index(index: usize) -> Option<VitalityMode> {
        match index {
            0 => Some(VitalityMode::None),
            1 => Some(VitalityMode::Threshold),
            2 => Some(VitalityMode::Ghost),
            3 => Some(VitalityMode::Sigmoid),
            4 => Some(VitalityMode::Decay),
            5 => Some(VitalityMode::Curve),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            VitalityMode::None => "none",
            VitalityMode::Threshold => "threshold",
            VitalityMode::Ghost => "ghost",
            VitalityMode::Sigmoid => "sigmoid",
            VitalityMode::Decay => "decay",
            VitalityMode::Curve => "curve",
        }
    }

    pub fn parse(name: &str) -> Option<VitalityMode> {
        VitalityMode::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_round_trips() {
        for n in Neighborhood::ALL {
            assert_eq!(Neighborhood::from_index(n.index()), Some(n));
        }
        for t in Topology::ALL {
            assert_eq!(Topology::from_index(t.index()), Some(t));
        }
        for m in VitalityMode::ALL {
            assert_eq!(VitalityMode::from_index(m.index()), Some(m));
        }
        assert_eq!(Neighborhood::from_index(5), None);
        assert_eq!(Topology::from_index(9), None);
        assert_eq!(VitalityMode::from_index(6), None);
    }

    #[test]
    fn name_round_trips() {
        for t in Topology::ALL {
            assert_eq!(Topology::parse(t.name()), Some(t));
        }
        assert_eq!(Neighborhood::parse("Hex6"), Some(Neighborhood::Hex6));
        assert_eq!(Neighborhood::parse("nope"), None);
    }

    #[test]
    fn wrap_axes() {
        assert!(!Topology::Plane.wraps_x() && !Topology::Plane.wraps_y());
        assert!(Topology::CylinderX.wraps_x() && !Topology::CylinderX.wraps_y());
        assert!(Topology::MobiusY.wraps_y() && !Topology::MobiusY.wraps_x());
        assert!(Topology::KleinX.wraps_x() && Topology::KleinX.wraps_y());
        assert!(Topology::ProjectivePlane.wraps_x() && Topology::ProjectivePlane.wraps_y());
    }

    #[test]
    fn max_neighbors_match_stencil_sizes() {
        assert_eq!(Neighborhood::Moore8.max_neighbors(), 8);
        assert_eq!(Neighborhood::VonNeumann4.max_neighbors(), 4);
        assert_eq!(Neighborhood::ExtendedMoore24.max_neighbors(), 24);
        assert_eq!(Neighborhood::Hex6.max_neighbors(), 6);
        assert_eq!(Neighborhood::ExtendedHex18.max_neighbors(), 18);
    }
}
