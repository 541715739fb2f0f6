//! Session lifecycle: the tick scheduler and the controller tying the engine,
//! scheduler and render collaborator together.

pub mod controller;
pub mod scheduler;

pub use controller::{Command, LatestFrame, RenderSink, Session};
pub use scheduler::{Scheduler, SchedulerState};
