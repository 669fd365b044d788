//! Simulation context, scheduler and tick hooks

pub mod scheduler;
pub mod simulator;
pub mod tick;

pub use scheduler::{TickFn, TickScheduler};
pub use simulator::Simulator;
pub use tick::{AmbientPresence, IdleTick, TickContext, TickHook};
