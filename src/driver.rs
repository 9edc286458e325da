//! Shared engine core: configuration handling and the serial update pass.
//!
//! Both engines wrap one [`EngineCore`] so that configuration validation,
//! patching and transition semantics exist exactly once; the parallel engine
//! only replaces how the pass over the cells is scheduled.

use crate::error::{ConfigError, PatchError};
use crate::grid::{CellGrid, Patch};
use crate::kinds::Topology;
use crate::rule::RuleDescriptor;
use crate::transition::TransitionCtx;
use crate::vitality::VitalitySettings;

/// What a successful `configure` did, beyond installing the settings.
///
/// `height_rounded` reports the one documented silent-correction exception:
/// a hex neighborhood under a vertically wrapping topology needs an even
/// number of rows (hex offsets alternate with row parity, and an odd height
/// would mismatch parity across the wrap seam), so an odd height is rounded
/// up by one. `grid_reset` reports that the buffers were recreated, which
/// also happens when the state count shrinks below stored values' range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConfigSummary {
    pub width: u32,
    pub height: u32,
    pub height_rounded: bool,
    pub grid_reset: bool,
}

pub(crate) struct EngineCore {
    grid: CellGrid,
    ctx: TransitionCtx,
}

impl EngineCore {
    /// A fresh zeroed grid running Conway's Life on a torus until the
    /// caller configures otherwise. Stepping is total from here on.
    pub fn new(width: u32, height: u32) -> Result<Self, ConfigError> {
        if width == 0 || height == 0 {
            return Err(ConfigError::EmptyGrid { width, height });
        }
        Ok(Self {
            grid: CellGrid::new(width, height),
            ctx: TransitionCtx::new(
                RuleDescriptor::life(),
                Topology::Torus,
                &VitalitySettings::default(),
                width,
                height,
            ),
        })
    }

    /// Install a rule/topology/vitality combination, effective at the next
    /// step. On error the previously active configuration stays in force and
    /// the grid is untouched. Identical repeat calls are no-ops beyond the
    /// table rebuild.
    pub fn configure(
        &mut self,
        rule: RuleDescriptor,
        topology: Topology,
        vitality: &VitalitySettings,
    ) -> Result<ConfigSummary, ConfigError> {
        vitality.validate()?;

        let width = self.grid.width();
        let mut height = self.grid.height();
        let mut height_rounded = false;
        if rule.neighborhood.is_hex() && topology.wraps_y() && height & 1 == 1 {
            height += 1;
            height_rounded = true;
        }

        // Resize = destroy + recreate; shrinking the state count below what
        // the buffers may hold also forces a fresh grid.
        let grid_reset = height_rounded || rule.num_states < self.ctx.rule.num_states;
        if grid_reset {
            self.grid = CellGrid::new(width, height);
        }
        self.ctx = TransitionCtx::new(rule, topology, vitality, width, height);

        Ok(ConfigSummary {
            width,
            height,
            height_rounded,
            grid_reset,
        })
    }

    #[inline]
    pub fn ctx(&self) -> &TransitionCtx {
        &self.ctx
    }

    #[inline]
    pub fn grid(&self) -> &CellGrid {
        &self.grid
    }

    #[inline]
    pub fn grid_mut(&mut self) -> &mut CellGrid {
        &mut self.grid
    }

    /// Split views for one update pass: the immutable context, the front
    /// snapshot, and the writable back buffer.
    #[inline]
    pub fn pass_views(&mut self) -> (&TransitionCtx, &[u8], &mut [u8]) {
        let (front, back) = self.grid.buffers_mut();
        (&self.ctx, front, back)
    }

    /// Finish a pass: promote the fully written back buffer.
    #[inline]
    pub fn finish_pass(&mut self) -> u64 {
        self.grid.swap();
        self.grid.generation()
    }

    /// One whole generation, sequentially.
    pub fn step_serial(&mut self) -> u64 {
        let (ctx, front, back) = self.pass_views();
        let width = ctx.width() as usize;
        for (y, row) in back.chunks_exact_mut(width).enumerate() {
            for (x, cell) in row.iter_mut().enumerate() {
                *cell = ctx.next_state(front, x as u32, y as u32);
            }
        }
        self.finish_pass()
    }

    pub fn apply_patch(&mut self, patch: &Patch) -> Result<(), PatchError> {
        let num_states = self.ctx.rule.num_states;
        self.grid.apply(patch, num_states)
    }

    pub fn population(&self) -> u64 {
        self.grid.cells().iter().filter(|&&s| s == 1).count() as u64
    }
}
