pub mod configuration;
pub mod domain;
pub mod error;
pub mod logging;
pub mod services;
