//! The profile image shown on the card.
//!
//! The slot starts with a placeholder and is replaced by uploads. Concurrent
//! uploads resolve as last write wins: a newer upload cancels the read of an
//! older one, and an older read that still completes is discarded.

mod placeholder;
mod slot;

pub use placeholder::{data_url, initials, placeholder_src};
pub use slot::ProfileImage;
