// src/pipeline/workbench.rs

//! One entry point for every processor, plus history replay.
//!
//! `Workbench` owns the component tracer, the only processor that keeps
//! state between calls. Everything else is a pure function of the raster and
//! the `ProcessConfig`, so replaying a recorded `Action` list against the
//! same decoded raster reproduces the same samples.

use crate::image::Raster;
use crate::letters::{ComponentTracer, Region};
use crate::process::{ProcessConfig, Side, cleanup, duotone, fill, grayscale, thin};
use crate::utils::error::ProcessingError;
use log::debug;

// ============================================================================
// Processor kinds and history entries
// ============================================================================

/// A processor together with its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProcessorKind {
    /// RGB(A) to one luminance channel.
    Grayscale,
    /// Two-tone split at `threshold`.
    Duotone { threshold: u8 },
    /// One hole-filling pass.
    Fill,
    /// One border-thinning pass from the given side.
    Thin(Side),
    /// One irregularity-cleanup pass from the given side.
    Cleanup(Side),
    /// Advance the tracer cursor by one pixel.
    TraceNext,
}

impl ProcessorKind {
    /// Checks the channel layout without touching the raster.
    pub fn validate(&self, raster: &Raster) -> Result<(), ProcessingError> {
        match self {
            ProcessorKind::Grayscale if raster.channel_count() < 3 => {
                Err(ProcessingError::UnsupportedChannelLayout {
                    required: "at least 3",
                    actual: raster.channel_count(),
                })
            }
            ProcessorKind::Grayscale => Ok(()),
            _ => raster.require_single_channel(),
        }
    }

    /// Short human-readable name, as shown in a history list.
    pub fn name(&self) -> &'static str {
        match self {
            ProcessorKind::Grayscale => "grayscale",
            ProcessorKind::Duotone { .. } => "duotone",
            ProcessorKind::Fill => "fill",
            ProcessorKind::Thin(_) => "thin",
            ProcessorKind::Cleanup(_) => "cleanup",
            ProcessorKind::TraceNext => "trace next",
        }
    }
}

/// A history entry: `kind` applied `count` times in a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Action {
    pub kind: ProcessorKind,
    pub count: u32,
}

impl Action {
    pub fn new(kind: ProcessorKind) -> Self {
        Action { kind, count: 1 }
    }

    pub fn repeated(kind: ProcessorKind, count: u32) -> Self {
        Action { kind, count }
    }

    /// Appends `kind` to `history`, bumping the last entry's count when it
    /// is the same processor with the same parameters.
    pub fn record(history: &mut Vec<Action>, kind: ProcessorKind) {
        match history.last_mut() {
            Some(last) if last.kind == kind => last.count += 1,
            _ => history.push(Action::new(kind)),
        }
    }
}

/// Output of [`Workbench::apply`].
#[derive(Debug, Clone, PartialEq)]
pub struct Applied {
    pub raster: Raster,
    /// Whether any sample changed. For `TraceNext`, whether the cursor advanced.
    pub changed: bool,
}

// ============================================================================
// Workbench
// ============================================================================

/// Dispatches processors and carries the tracer between calls.
#[derive(Debug, Default)]
pub struct Workbench {
    tracer: ComponentTracer,
}

impl Workbench {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tracer(&self) -> &ComponentTracer {
        &self.tracer
    }

    /// Forgets every traced region and rewinds the cursor.
    pub fn reset_tracer(&mut self) {
        self.tracer.reset();
    }

    /// Applies `kind` to a copy of `raster`. The input is never modified.
    pub fn apply(
        &mut self,
        kind: ProcessorKind,
        raster: &Raster,
        config: &ProcessConfig,
    ) -> Result<Applied, ProcessingError> {
        kind.validate(raster)?;
        let mut out = raster.clone();
        let changed = self.apply_in_place(kind, &mut out, config)?;
        Ok(Applied {
            raster: out,
            changed,
        })
    }

    /// Applies `kind` to `raster` directly.
    ///
    /// The channel layout is checked first; on error the raster is untouched.
    pub fn apply_in_place(
        &mut self,
        kind: ProcessorKind,
        raster: &mut Raster,
        config: &ProcessConfig,
    ) -> Result<bool, ProcessingError> {
        kind.validate(raster)?;
        match kind {
            ProcessorKind::Grayscale => {
                *raster = grayscale(raster)?;
                Ok(true)
            }
            ProcessorKind::Duotone { threshold } => {
                duotone(raster, threshold, config.foreground, config.background)
            }
            ProcessorKind::Fill => fill(raster, config.fill_color),
            ProcessorKind::Thin(side) => thin(raster, side, config.foreground, config.background),
            ProcessorKind::Cleanup(side) => {
                cleanup(raster, side, config.foreground, config.background)
            }
            ProcessorKind::TraceNext => self.tracer.step(raster, config.foreground),
        }
    }

    /// Re-applies `actions` in order to a copy of `raster`.
    ///
    /// Tracing starts from a fresh cursor, so the result depends only on the
    /// inputs. The tracer state reached by the replay replaces the current one
    /// only when every action succeeds.
    pub fn replay(
        &mut self,
        raster: &Raster,
        actions: &[Action],
        config: &ProcessConfig,
    ) -> Result<Raster, ProcessingError> {
        let mut scratch = Workbench::new();
        let mut out = raster.clone();
        for action in actions {
            debug!("replay: {} x{}", action.kind.name(), action.count);
            for _ in 0..action.count {
                scratch.apply_in_place(action.kind, &mut out, config)?;
            }
        }
        self.tracer = scratch.tracer;
        Ok(out)
    }

    /// Steps the tracer to exhaustion and returns every region found so far.
    pub fn trace_all(
        &mut self,
        raster: &Raster,
        config: &ProcessConfig,
    ) -> Result<&[Region], ProcessingError> {
        ProcessorKind::TraceNext.validate(raster)?;
        self.tracer.trace_all(raster, config.foreground)
    }
}
