//! Shared configuration, errors and constants for the business card service.

pub mod config;
pub mod constants;
pub mod error;
pub mod util;
