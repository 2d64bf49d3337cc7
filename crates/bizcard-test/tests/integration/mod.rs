//! HTTP-level tests for the card page, contact delivery, temporary objects
//! and profile image uploads.
//!
//! ## Running Tests
//!
//! ```sh
//! cargo test -p bizcard-test
//! ```

mod blob;
mod card;
mod contact;
mod helpers;
mod profile_image;
