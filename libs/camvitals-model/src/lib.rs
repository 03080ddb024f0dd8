//! Core domain types for the CamVitals wellness services
//!
//! Pure data and classification logic shared by `vitalsrv` and `gateway`.
//! Nothing in here performs I/O or owns async state.

pub mod ids;
pub mod notification;
pub mod user;
pub mod vitals;

pub use ids::event_id;
pub use notification::{
    NotificationCategory, NotificationEvent, ReminderConfig, Severity,
};
pub use user::User;
pub use vitals::{ActivityLevel, StressLevel, VitalsReading};
