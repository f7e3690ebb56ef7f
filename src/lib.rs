pub mod configuration;
pub mod domain;
pub mod error;
pub mod event;
pub mod handler;
pub mod routes;
pub mod startup;
pub mod telemetry;
