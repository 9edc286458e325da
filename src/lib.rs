//! Multi-state cellular automaton transition engine.
//!
//! Configurable along five independent axes: rule bitmasks, five
//! neighborhood stencils, nine boundary topologies, six vitality weighting
//! modes for decaying trail states, and an arbitrary state count. Two
//! engines share one transition function: [`TrailLife`] steps the grid in
//! parallel on a rayon pool, [`PreviewLife`] is the sequential engine for
//! small grids, and the two are kept honest against each other by the
//! parity tests.

pub mod driver;
pub mod engine;
pub mod error;
pub mod grid;
pub mod kinds;
pub mod preview;
pub mod rule;
pub mod stencil;
pub mod topology;
pub mod transition;
pub mod vitality;

pub use driver::ConfigSummary;
pub use engine::{TrailLife, TrailLifeConfig};
pub use error::{ConfigError, PatchError};
pub use grid::{CellGrid, Patch};
pub use kinds::{Neighborhood, Topology, VitalityMode};
pub use preview::PreviewLife;
pub use rule::RuleDescriptor;
pub use vitality::{VitalitySettings, CURVE_SAMPLES};
