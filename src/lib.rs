pub mod answers;
pub mod config;
pub mod diagnostic;
pub mod engine;
pub mod error;
pub mod lint;
pub mod reporter;
pub mod scoring;
pub mod session;
pub mod table;
pub mod telemetry;
pub mod tier;
pub mod validate;
