//! PreviewLife: the CPU-only engine for small and preview grids.
//!
//! Same configuration surface and, by construction, the same semantics as
//! [`TrailLife`](crate::TrailLife): both run the one shared transition
//! function, this one in a plain sequential loop with no pool to warm up.

use crate::driver::{ConfigSummary, EngineCore};
use crate::error::{ConfigError, PatchError};
use crate::grid::Patch;
use crate::kinds::Topology;
use crate::rule::RuleDescriptor;
use crate::vitality::VitalitySettings;

pub struct PreviewLife {
    core: EngineCore,
}

impl PreviewLife {
    pub fn new(width: u32, height: u32) -> Result<Self, ConfigError> {
        Ok(Self {
            core: EngineCore::new(width, height)?,
        })
    }

    pub fn configure(
        &mut self,
        rule: RuleDescriptor,
        topology: Topology,
        vitality: &VitalitySettings,
    ) -> Result<ConfigSummary, ConfigError> {
        self.core.configure(rule, topology, vitality)
    }

    /// Advance exactly one generation; returns the new generation number.
    pub fn step(&mut self) -> u64 {
        self.core.step_serial()
    }

    pub fn step_n(&mut self, generations: u64) -> u64 {
        let mut generation = self.generation();
        for _ in 0..generations {
            generation = self.step();
        }
        generation
    }

    pub fn apply_patch(&mut self, patch: &Patch) -> Result<(), PatchError> {
        self.core.apply_patch(patch)
    }

    pub fn snapshot(&self) -> Vec<u8> {
        self.core.grid().snapshot()
    }

    pub fn cells(&self) -> &[u8] {
        self.core.grid().cells()
    }

    pub fn get_cell(&self, x: u32, y: u32) -> u8 {
        self.core.grid().get(x, y)
    }

    pub fn set_cell(&mut self, x: u32, y: u32, state: u8) {
        assert!(
            (state as u16) < self.rule().num_states,
            "state {state} out of range"
        );
        self.core.grid_mut().set(x, y, state);
    }

    pub fn population(&self) -> u64 {
        self.core.population()
    }

    pub fn generation(&self) -> u64 {
        self.core.grid().generation()
    }

    pub fn width(&self) -> u32 {
        self.core.grid().width()
    }

    pub fn height(&self) -> u32 {
        self.core.grid().height()
    }

    pub fn rule(&self) -> &RuleDescriptor {
        &self.core.ctx().rule
    }

    pub fn topology(&self) -> Topology {
        self.core.ctx().topology
    }
}
