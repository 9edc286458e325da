//! The per-cell transition function, shared by every engine.
//!
//! Both the parallel engine and the preview engine call [`TransitionCtx::next_state`]
//! for each cell; there is deliberately no second hand-written copy of these
//! semantics anywhere in the crate.

use crate::kinds::Topology;
use crate::rule::RuleDescriptor;
use crate::stencil;
use crate::topology::resolve;
use crate::vitality::{VitalitySettings, WeightTable};

/// Everything one step needs, resolved and cached at configure time:
/// the rule, the topology, the per-state weight table and the grid extent.
#[derive(Clone, Debug)]
pub struct TransitionCtx {
    pub rule: RuleDescriptor,
    pub topology: Topology,
    weights: WeightTable,
    width: u32,
    height: u32,
}

impl TransitionCtx {
    /// Callers validate the rule/topology/vitality combination first; see
    /// the engine `configure` methods.
    pub fn new(
        rule: RuleDescriptor,
        topology: Topology,
        vitality: &VitalitySettings,
        width: u32,
        height: u32,
    ) -> Self {
        Self {
            rule,
            topology,
            weights: WeightTable::new(vitality, rule.num_states),
            width,
            height,
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Weighted neighbor sum for the cell at `(x, y)`: alive neighbors count
    /// 1, decaying neighbors their vitality weight, dead and outside 0.
    fn weighted_sum(&self, front: &[u8], x: u32, y: u32) -> f32 {
        let offsets = stencil::offsets(self.rule.neighborhood, y & 1 == 1);
        let mut sum = 0.0f32;
        for &(dx, dy) in offsets {
            let nx = x as i64 + dx as i64;
            let ny = y as i64 + dy as i64;
            if let Some((rx, ry)) = resolve(self.topology, nx, ny, self.width, self.height) {
                let state = front[ry * self.width as usize + rx];
                sum += self.weights.get(state);
            }
        }
        sum
    }

    /// Next state for the cell at `(x, y)` against the generation snapshot
    /// in `front`. Pure and total; the result is always `< num_states`.
    #[inline]
    pub fn next_state(&self, front: &[u8], x: u32, y: u32) -> u8 {
        let state = front[y as usize * self.width as usize + x as usize];
        let num_states = self.rule.num_states;
        match state {
            0 | 1 => {
                let sum = self.weighted_sum(front, x, y);
                let k = quantize_sum(sum, self.rule.max_neighbors());
                let mask = if state == 0 {
                    self.rule.birth_mask
                } else {
                    self.rule.survive_mask
                };
                if mask >> k & 1 != 0 {
                    1
                } else if state == 1 && num_states > 2 {
                    2
                } else {
                    0
                }
            }
            // Decay ignores neighbors: mid-decay advances, final state dies.
            s if (s as u16) < num_states - 1 => s + 1,
            _ => 0,
        }
    }
}

/// Convert a fractional weighted sum to a mask bit index: clamp to
/// `[0, max_neighbors]`, then round to nearest with ties toward zero.
///
/// The rounding policy is a documented assumption; nothing upstream pins
/// down half-integer sums more precisely than this.
#[inline]
pub fn quantize_sum(sum: f32, max_neighbors: u32) -> u32 {
    let clamped = sum.clamp(0.0, max_neighbors as f32);
    (clamped - 0.5).ceil() as u32
}
