//! The simulated vitals engine: generator, sampler and reminder timers

pub mod generator;
pub mod sampler;
pub mod scheduler;

pub use generator::generate_reading;
pub use sampler::{HeartRateAlert, SamplerSettings, VitalsSampler};
pub use scheduler::ReminderScheduler;
