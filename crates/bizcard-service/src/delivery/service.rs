//! Contact delivery policies.

use std::sync::Arc;
use std::time::Duration;

use bizcard_core::config::{DeliveryConfig, DeliveryPolicy};
use bizcard_core::util::filename::vcard_filename;
use bizcard_rfc::rfc::vcard::{ContactRecord, encode};

use super::object_store::{Blob, ObjectStore};
use crate::error::ServiceResult;

/// A file to hand back as an attachment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadFile {
    /// Suggested filename, e.g. `Jane_Doe.vcf`.
    pub filename: String,
    pub blob: Arc<Blob>,
}

/// Outcome of delivering a contact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    /// Serve the file; its handle is already released.
    Download(DownloadFile),
    /// Send the client to `location`; the handle is released later.
    Handoff { location: String },
}

/// Makes serialized cards available to the user.
#[derive(Debug, Clone)]
pub struct ContactFileDelivery {
    store: Arc<ObjectStore>,
    release_delay: Duration,
}

impl ContactFileDelivery {
    #[must_use]
    pub fn new(store: Arc<ObjectStore>, release_delay: Duration) -> Self {
        Self {
            store,
            release_delay,
        }
    }

    #[must_use]
    pub fn from_config(store: Arc<ObjectStore>, config: &DeliveryConfig) -> Self {
        Self::new(store, config.release_delay())
    }

    #[must_use]
    pub fn store(&self) -> &Arc<ObjectStore> {
        &self.store
    }

    /// ## Summary
    /// Encodes `record` and delivers it with `policy`.
    ///
    /// ## Errors
    /// Propagates delivery errors.
    pub fn deliver_record(
        &self,
        record: &ContactRecord,
        policy: DeliveryPolicy,
    ) -> ServiceResult<Delivery> {
        self.deliver(encode(record), &record.full_name, policy)
    }

    /// ## Summary
    /// Wraps `text` as a `text/vcard` blob behind a temporary handle and
    /// delivers it.
    ///
    /// ## Side Effects
    /// - `Download`: the handle is created, read, and released before
    ///   returning.
    /// - `Handoff`: the handle outlives the call and is released after the
    ///   configured delay.
    ///
    /// ## Errors
    /// Returns `NotFound` if the handle is released before it is read.
    #[tracing::instrument(skip(self, text), fields(bytes = text.len(), ?policy))]
    pub fn deliver(
        &self,
        text: String,
        full_name: &str,
        policy: DeliveryPolicy,
    ) -> ServiceResult<Delivery> {
        let url = self.store.create_object_url(Blob::vcard(text));

        match policy {
            DeliveryPolicy::Download => {
                let blob = url.blob()?;
                let filename = vcard_filename(full_name);

                if let Err(e) = url.revoke() {
                    tracing::warn!(error = %e, "Temporary object was released early");
                }

                tracing::info!(%filename, "Delivering contact as download");
                Ok(Delivery::Download(DownloadFile { filename, blob }))
            }
            DeliveryPolicy::Handoff => {
                let location = url.href();
                // The client fetches the handle after this response is sent.
                let _release = url.revoke_after(self.release_delay);

                tracing::info!(%location, delay_ms = self.release_delay.as_millis(), "Handing off contact");
                Ok(Delivery::Handoff { location })
            }
        }
    }
}
