//! Contact file delivery and profile image handling.

pub mod delivery;
pub mod error;
pub mod image;

mod sync;
