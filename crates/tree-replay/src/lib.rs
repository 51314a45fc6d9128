//! # Introduction
//!
//! Records the step-by-step construction of a self-balancing binary
//! search tree and replays it under user-controlled timing.
//!
//! ## Pipeline
//!
//! ```text
//! Keys → Insertion engine → Snapshots → Trace → Playback → Renderer
//! ```
//!
//! 1. [`keygen`] — reproducible, seeded key sequences for the
//!    "regenerate random input" collaborator.
//! 2. [`trace`] — drives keys one by one through an engine from
//!    [`balance_forest`] and captures one immutable, parent-link-free
//!    [`snapshot::Snapshot`] per insertion.
//! 3. [`playback`] — a cooperative, timer-token-driven stepper over a
//!    completed trace with pause/resume/restart and a configurable
//!    inter-step delay.
//!
//! The live tree is owned by the recorder call stack and is never
//! exposed; only immutable snapshots cross to the rendering side. The
//! renderer lays out and draws snapshot nodes itself — this crate
//! assigns no coordinates and performs no drawing.

pub mod keygen;
pub mod playback;
pub mod snapshot;
pub mod trace;

pub use keygen::{random_keys, KeySource};
pub use playback::{PlayState, Playback, TimerToken};
pub use snapshot::{BalanceTag, Color, Snapshot, SnapshotNode};
pub use trace::{avl_trace, build_trace, red_black_trace, InsertEngine, Trace, TraceError};
