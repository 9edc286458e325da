//! Rule descriptors: birth/survival bitmasks, state count, neighborhood.

use crate::error::ConfigError;
use crate::kinds::Neighborhood;

/// Widest neighbor-count index the rule bitmasks can express.
pub const MAX_MASK_BIT: u32 = 31;

/// One immutable rule configuration.
///
/// Bit `i` of a mask means "a weighted neighbor count of `i` triggers birth
/// (resp. survival)". `num_states` of 2 is a binary rule; larger values add
/// decaying trail states `2..num_states-1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RuleDescriptor {
    pub birth_mask: u32,
    pub survive_mask: u32,
    pub num_states: u16,
    pub neighborhood: Neighborhood,
}

impl RuleDescriptor {
    pub fn new(
        birth_mask: u32,
        survive_mask: u32,
        num_states: u32,
        neighborhood: Neighborhood,
    ) -> Result<Self, ConfigError> {
        if !(2..=256).contains(&num_states) {
            return Err(ConfigError::StateCount { got: num_states });
        }
        let max_neighbors = neighborhood.max_neighbors();
        if max_neighbors > MAX_MASK_BIT {
            return Err(ConfigError::MaskWidthExceeded { max_neighbors });
        }
        let reachable = if max_neighbors == MAX_MASK_BIT {
            u32::MAX
        } else {
            (1u32 << (max_neighbors + 1)) - 1
        };
        if birth_mask & !reachable != 0 {
            return Err(ConfigError::MaskOutOfRange {
                which: "birth",
                mask: birth_mask,
                max_neighbors,
            });
        }
        if survive_mask & !reachable != 0 {
            return Err(ConfigError::MaskOutOfRange {
                which: "survive",
                mask: survive_mask,
                max_neighbors,
            });
        }
        Ok(Self {
            birth_mask,
            survive_mask,
            num_states: num_states as u16,
            neighborhood,
        })
    }

    /// Conway's Life: B3/S23 on the Moore neighborhood, two states.
    pub fn life() -> Self {
        Self {
            birth_mask: 1 << 3,
            survive_mask: (1 << 2) | (1 << 3),
            num_states: 2,
            neighborhood: Neighborhood::Moore8,
        }
    }

    /// Stencil size, also the largest meaningful mask bit index.
    #[inline]
    pub fn max_neighbors(&self) -> u32 {
        self.neighborhood.max_neighbors()
    }

    /// Whether the rule carries decaying trail states.
    #[inline]
    pub fn has_trail(&self) -> bool {
        self.num_states > 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;

    #[test]
    fn life_is_b3_s23() {
        let rule = RuleDescriptor::life();
        assert_eq!(rule.birth_mask, 0b1000);
        assert_eq!(rule.survive_mask, 0b1100);
        assert_eq!(rule.num_states, 2);
        assert!(!rule.has_trail());
    }

    #[test]
    fn rejects_bad_state_counts() {
        for n in [0, 1, 257, 1000] {
            let err = RuleDescriptor::new(0, 0, n, Neighborhood::Moore8);
            assert_eq!(err, Err(ConfigError::StateCount { got: n }));
        }
        assert!(RuleDescriptor::new(0, 0, 256, Neighborhood::Moore8).is_ok());
    }

    #[test]
    fn rejects_masks_beyond_the_stencil() {
        let err = RuleDescriptor::new(1 << 9, 0, 2, Neighborhood::Moore8);
        assert!(matches!(err, Err(ConfigError::MaskOutOfRange { which: "birth", .. })));
        let err = RuleDescriptor::new(0, 1 << 5, 2, Neighborhood::VonNeumann4);
        assert!(matches!(err, Err(ConfigError::MaskOutOfRange { which: "survive", .. })));
        // Bit equal to the stencil size is reachable (all neighbors alive).
        assert!(RuleDescriptor::new(1 << 8, 0, 2, Neighborhood::Moore8).is_ok());
        assert!(RuleDescriptor::new(1 << 24, 0, 2, Neighborhood::ExtendedMoore24).is_ok());
    }
}
