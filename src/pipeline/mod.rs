//! Uniform processor dispatch and history replay.

pub mod workbench;

pub use workbench::{Action, Applied, ProcessorKind, Workbench};
