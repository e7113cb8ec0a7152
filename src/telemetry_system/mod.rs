pub mod plot;
pub mod telemetry;
