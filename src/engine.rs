//! TrailLife: the primary engine, with a row-parallel update pass.

use rayon::prelude::*;

use crate::driver::{ConfigSummary, EngineCore};
use crate::error::{ConfigError, PatchError};
use crate::grid::Patch;
use crate::kinds::Topology;
use crate::rule::RuleDescriptor;
use crate::vitality::VitalitySettings;

/// Below this cell count the pool overhead outweighs the pass itself.
const PARALLEL_MIN_CELLS: usize = 4_096;

#[inline]
fn auto_pool_thread_count() -> usize {
    let physical = num_cpus::get_physical().max(1);
    if physical <= 8 {
        physical
    } else {
        physical.div_ceil(2).max(6)
    }
}

/// Resolve the thread count from a config, falling back to auto-detect.
fn resolve_thread_count(config: &TrailLifeConfig) -> usize {
    let mut threads = config.thread_count.unwrap_or_else(auto_pool_thread_count);
    if let Some(cap) = config.max_threads {
        threads = threads.min(cap);
    }
    threads.max(1)
}

/// Configuration for a TrailLife engine instance.
///
/// Use `TrailLifeConfig::default()` for auto-tuned defaults, or customise
/// individual knobs via the builder methods.
#[derive(Clone, Debug, Default)]
pub struct TrailLifeConfig {
    /// Number of threads for the compute pool.
    /// `None` means auto-detect (physical cores, capped on large machines).
    pub thread_count: Option<usize>,
    /// Hard upper bound on threads regardless of auto-detection.
    pub max_threads: Option<usize>,
}

impl TrailLifeConfig {
    /// Set an explicit thread count for the compute pool.
    pub fn thread_count(mut self, n: usize) -> Self {
        self.thread_count = Some(n.max(1));
        self
    }

    /// Set a hard upper bound on threads.
    pub fn max_threads(mut self, n: usize) -> Self {
        self.max_threads = Some(n.max(1));
        self
    }
}

/// The primary engine: a fixed grid stepped by evaluating the shared
/// transition function for every cell, rows fanned out across a dedicated
/// rayon pool. Each step fully writes the back buffer before the swap, so
/// the parallel pass and the serial pass are bit-identical.
pub struct TrailLife {
    core: EngineCore,
    pool: rayon::ThreadPool,
}

impl TrailLife {
    pub fn new(width: u32, height: u32) -> Result<Self, ConfigError> {
        Self::with_config(width, height, TrailLifeConfig::default())
    }

    /// Create a TrailLife engine with explicit pool configuration.
    pub fn with_config(
        width: u32,
        height: u32,
        config: TrailLifeConfig,
    ) -> Result<Self, ConfigError> {
        let core = EngineCore::new(width, height)?;
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(resolve_thread_count(&config))
            .build()
            .expect("failed to build TrailLife rayon thread pool");
        Ok(Self { core, pool })
    }

    /// Install a rule/topology/vitality combination, effective at the next
    /// step boundary. See [`ConfigSummary`] for what may change alongside.
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
        if self.core.grid().len() < PARALLEL_MIN_CELLS {
            return self.core.step_serial();
        }

        let (ctx, front, back) = self.core.pass_views();
        let width = ctx.width() as usize;
        self.pool.install(|| {
            back.par_chunks_mut(width)
                .enumerate()
                .for_each(|(y, row)| {
                    for (x, cell) in row.iter_mut().enumerate() {
                        *cell = ctx.next_state(front, x as u32, y as u32);
                    }
                });
        });
        // par_for_each returns only after every row is written; the swap is
        // the step barrier.
        self.core.finish_pass()
    }

    pub fn step_n(&mut self, generations: u64) -> u64 {
        let mut generation = self.generation();
        for _ in 0..generations {
            generation = self.step();
        }
        generation
    }

    /// Mutate the front buffer directly. Does not advance the generation.
    pub fn apply_patch(&mut self, patch: &Patch) -> Result<(), PatchError> {
        self.core.apply_patch(patch)
    }

    /// An owned copy of the current generation, row-major.
    pub fn snapshot(&self) -> Vec<u8> {
        self.core.grid().snapshot()
    }

    /// Borrow of the current generation's cells, row-major.
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
