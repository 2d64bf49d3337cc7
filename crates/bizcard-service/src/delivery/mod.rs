//! Contact file delivery.
//!
//! ## Summary
//! Serialized cards are wrapped in a [`Blob`] and reached through a
//! short-lived [`ObjectUrl`] handle. The handle is released on every exit
//! path: explicitly, after a delay, or when dropped.
//!
//! Two policies are supported:
//! - forced download: the blob is handed back as an attachment and the
//!   handle is released immediately;
//! - navigation handoff: the caller is sent to the handle's URL and the
//!   handle is released after a short delay.

mod object_store;
mod service;

pub use object_store::{Blob, ObjectStore, ObjectUrl};
pub use service::{ContactFileDelivery, Delivery, DownloadFile};
