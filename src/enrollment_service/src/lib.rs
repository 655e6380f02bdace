mod enrollment_service;
pub mod telemetry;

pub use enrollment_service::{EnrollmentService, shutdown_signal};
pub use telemetry::init_tracing;
