//! The sweep-line implementation.
//!
//! The main entry point is [`Sweeper`], which computes all the intersection
//! points between a collection of line segments by moving a vertical line
//! from left to right. [`sweep`] runs a `Sweeper` to completion.

mod event_queue;
mod status;
mod sweep_line;

pub use event_queue::{Event, EventKind, EventQueue};
pub use status::SweepStatus;
pub use sweep_line::{sweep, Intersection, Sweeper};
