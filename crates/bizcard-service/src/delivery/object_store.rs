//! Process-local store of temporary objects.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use bizcard_core::constants::{BLOB_ROUTE_PREFIX, VCARD_MEDIA_TYPE};
use uuid::Uuid;

use crate::error::{ServiceError, ServiceResult};
use crate::sync::lock;

/// An in-memory binary object tagged with a media type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blob {
    pub bytes: Vec<u8>,
    pub media_type: String,
}

impl Blob {
    #[must_use]
    pub fn new(bytes: impl Into<Vec<u8>>, media_type: impl Into<String>) -> Self {
        Self {
            bytes: bytes.into(),
            media_type: media_type.into(),
        }
    }

    /// Wraps serialized vCard text.
    #[must_use]
    pub fn vcard(text: impl Into<String>) -> Self {
        Self::new(text.into().into_bytes(), VCARD_MEDIA_TYPE)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Temporary objects reachable through [`ObjectUrl`] handles.
///
/// Nothing here outlives the process.
#[derive(Debug, Default)]
pub struct ObjectStore {
    objects: Mutex<HashMap<Uuid, Arc<Blob>>>,
}

impl ObjectStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// ## Summary
    /// Stores `blob` and returns a scoped handle to it.
    #[must_use]
    pub fn create_object_url(self: &Arc<Self>, blob: Blob) -> ObjectUrl {
        let id = Uuid::new_v4();
        let size = blob.len();
        lock(&self.objects).insert(id, Arc::new(blob));

        tracing::debug!(%id, size, "Created temporary object");

        ObjectUrl {
            id,
            store: Arc::clone(self),
            released: false,
        }
    }

    /// Returns the object behind `id`.
    ///
    /// ## Errors
    /// Returns `NotFound` if the handle was never issued or is released.
    pub fn get(&self, id: &Uuid) -> ServiceResult<Arc<Blob>> {
        lock(&self.objects)
            .get(id)
            .cloned()
            .ok_or_else(|| ServiceError::NotFound(format!("temporary object {id}")))
    }

    /// Releases the object behind `id`.
    ///
    /// ## Errors
    /// Returns `NotFound` if it was already released.
    pub fn revoke(&self, id: &Uuid) -> ServiceResult<()> {
        if lock(&self.objects).remove(id).is_none() {
            return Err(ServiceError::NotFound(format!("temporary object {id}")));
        }

        tracing::debug!(%id, "Released temporary object");
        Ok(())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        lock(&self.objects).len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        lock(&self.objects).is_empty()
    }
}

/// A short-lived handle to a stored [`Blob`].
///
/// Dropping the handle without calling [`ObjectUrl::revoke`] or
/// [`ObjectUrl::revoke_after`] releases the object.
#[derive(Debug)]
pub struct ObjectUrl {
    id: Uuid,
    store: Arc<ObjectStore>,
    released: bool,
}

impl ObjectUrl {
    #[must_use]
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Path at which the object is served while the handle is live.
    #[must_use]
    pub fn href(&self) -> String {
        format!("{BLOB_ROUTE_PREFIX}/{}", self.id)
    }

    /// Reads the object through the handle.
    ///
    /// ## Errors
    /// Returns `NotFound` if the object has been released.
    pub fn blob(&self) -> ServiceResult<Arc<Blob>> {
        self.store.get(&self.id)
    }

    /// Releases the object now.
    ///
    /// ## Errors
    /// Returns `NotFound` if the object was already released.
    pub fn revoke(mut self) -> ServiceResult<()> {
        self.released = true;
        self.store.revoke(&self.id)
    }

    /// ## Summary
    /// Releases the object after `delay` on a background task. Failures are
    /// logged and otherwise ignored. Outside a tokio runtime the object is
    /// released immediately.
    pub fn revoke_after(mut self, delay: Duration) -> Option<tokio::task::JoinHandle<()>> {
        self.released = true;
        let store = Arc::clone(&self.store);
        let id = self.id;

        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            tracing::debug!(%id, "No runtime for deferred release, releasing now");
            release_quietly(&store, &id);
            return None;
        };

        Some(runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            release_quietly(&store, &id);
        }))
    }
}

impl Drop for ObjectUrl {
    fn drop(&mut self) {
        if !self.released {
            release_quietly(&self.store, &self.id);
        }
    }
}

fn release_quietly(store: &ObjectStore, id: &Uuid) {
    if let Err(e) = store.revoke(id) {
        tracing::debug!(%id, error = %e, "Ignoring failed release of temporary object");
    }
}
