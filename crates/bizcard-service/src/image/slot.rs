use std::sync::Mutex;

use bizcard_core::config::{CardConfig, ImageConfig};
use bizcard_core::error::CoreError;
use tokio::task::AbortHandle;

use super::placeholder::{data_url, placeholder_src};
use crate::error::{ServiceError, ServiceResult};
use crate::sync::lock;

#[derive(Debug)]
struct SlotState {
    current: String,
    generation: u64,
    in_flight: Option<AbortHandle>,
}

/// Single-slot holder of the displayed profile image source.
#[derive(Debug)]
pub struct ProfileImage {
    state: Mutex<SlotState>,
    max_bytes: usize,
}

impl ProfileImage {
    #[must_use]
    pub fn new(placeholder: impl Into<String>, max_bytes: usize) -> Self {
        Self {
            state: Mutex::new(SlotState {
                current: placeholder.into(),
                generation: 0,
                in_flight: None,
            }),
            max_bytes,
        }
    }

    /// Uses the configured placeholder, or an initials avatar if there is none.
    #[must_use]
    pub fn from_config(card: &CardConfig, image: &ImageConfig) -> Self {
        let placeholder = card
            .placeholder_image
            .clone()
            .filter(|src| !src.trim().is_empty())
            .unwrap_or_else(|| placeholder_src(&card.full_name));

        Self::new(placeholder, image.max_bytes)
    }

    /// The image source currently displayed.
    #[must_use]
    pub fn current(&self) -> String {
        lock(&self.state).current.clone()
    }

    #[must_use]
    pub const fn max_bytes(&self) -> usize {
        self.max_bytes
    }

    /// ## Summary
    /// Reads an uploaded image into a `data:` URL and makes it the current
    /// source.
    ///
    /// ## Side Effects
    /// Aborts any read still in flight from an earlier call.
    ///
    /// ## Errors
    /// - `UnsupportedMediaType` if `media_type` is not `image/*`
    /// - `PayloadTooLarge` if `bytes` exceeds the configured limit
    /// - `Superseded` if a newer upload started before this one finished
    #[tracing::instrument(skip(self, bytes), fields(size = bytes.len()))]
    pub async fn load(&self, bytes: Vec<u8>, media_type: &str) -> ServiceResult<String> {
        let media_type = image_essence(media_type)?;
        if bytes.is_empty() {
            return Err(CoreError::ValidationError("empty image body".to_string()).into());
        }
        if bytes.len() > self.max_bytes {
            return Err(ServiceError::PayloadTooLarge {
                size: bytes.len(),
                max: self.max_bytes,
            });
        }

        let task = tokio::task::spawn_blocking(move || data_url(&media_type, &bytes));
        let generation = self.begin(task.abort_handle());

        match task.await {
            Ok(src) => self.commit(generation, src),
            Err(e) if e.is_cancelled() => {
                tracing::debug!(generation, "Image read was cancelled");
                Err(ServiceError::Superseded)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Registers a new read and cancels the previous one.
    fn begin(&self, handle: AbortHandle) -> u64 {
        let mut state = lock(&self.state);
        state.generation += 1;

        if let Some(prior) = state.in_flight.replace(handle) {
            tracing::debug!(generation = state.generation, "Cancelling earlier image read");
            prior.abort();
        }

        state.generation
    }

    /// Stores `src` if no newer read has started since `generation`.
    fn commit(&self, generation: u64, src: String) -> ServiceResult<String> {
        let mut state = lock(&self.state);
        if state.generation != generation {
            tracing::debug!(
                generation,
                latest = state.generation,
                "Discarding stale image read"
            );
            return Err(ServiceError::Superseded);
        }

        state.current.clone_from(&src);
        state.in_flight = None;
        tracing::info!(generation, "Profile image updated");

        Ok(src)
    }
}

/// Returns the lowercased `type/subtype` if it names an image.
fn image_essence(media_type: &str) -> ServiceResult<String> {
    let essence = media_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    match essence.split_once('/') {
        Some(("image", subtype)) if !subtype.is_empty() => Ok(essence),
        _ => Err(ServiceError::UnsupportedMediaType(media_type.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot() -> ProfileImage {
        ProfileImage::new("placeholder", 16)
    }

    #[test]
    fn starts_with_placeholder() {
        assert_eq!(slot().current(), "placeholder");
    }

    #[test]
    fn from_config_falls_back_to_initials() {
        let card = CardConfig {
            full_name: "Jane Doe".to_string(),
            placeholder_image: Some(" ".to_string()),
            ..CardConfig::default()
        };
        let slot = ProfileImage::from_config(&card, &ImageConfig { max_bytes: 10 });

        assert!(slot.current().starts_with("data:image/svg+xml;base64,"));
        assert_eq!(slot.max_bytes(), 10);
    }

    #[test]
    fn from_config_keeps_configured_placeholder() {
        let card = CardConfig {
            full_name: "Jane Doe".to_string(),
            placeholder_image: Some("/static/me.png".to_string()),
            ..CardConfig::default()
        };
        let slot = ProfileImage::from_config(&card, &ImageConfig { max_bytes: 10 });
        assert_eq!(slot.current(), "/static/me.png");
    }

    #[test]
    fn media_type_essence() {
        assert_eq!(image_essence("image/png").expect("image"), "image/png");
        assert_eq!(
            image_essence("Image/JPEG; q=0.9").expect("image"),
            "image/jpeg"
        );
        assert!(matches!(
            image_essence("text/plain"),
            Err(ServiceError::UnsupportedMediaType(_))
        ));
        assert!(image_essence("image/").is_err());
        assert!(image_essence("").is_err());
    }

    #[test_log::test(tokio::test)]
    async fn load_replaces_current() {
        let slot = slot();

        let src = slot.load(b"abc".to_vec(), "image/png").await.expect("loads");

        assert_eq!(src, "data:image/png;base64,YWJj");
        assert_eq!(slot.current(), src);
    }

    #[tokio::test]
    async fn load_rejects_non_image() {
        let slot = slot();
        let err = slot
            .load(b"abc".to_vec(), "application/pdf")
            .await
            .expect_err("not an image");

        assert!(matches!(err, ServiceError::UnsupportedMediaType(_)));
        assert_eq!(slot.current(), "placeholder");
    }

    #[tokio::test]
    async fn load_rejects_oversized() {
        let slot = slot();
        let err = slot
            .load(vec![0; 17], "image/png")
            .await
            .expect_err("too large");

        assert!(matches!(err, ServiceError::PayloadTooLarge { size: 17, max: 16 }));
        assert_eq!(slot.current(), "placeholder");
    }

    #[tokio::test]
    async fn load_rejects_empty() {
        let err = slot()
            .load(Vec::new(), "image/png")
            .await
            .expect_err("empty body");
        assert!(matches!(err, ServiceError::CoreError(CoreError::ValidationError(_))));
    }

    #[tokio::test]
    async fn stale_commit_is_discarded() {
        let slot = slot();

        let first = slot.begin(tokio::spawn(async {}).abort_handle());
        let second = slot.begin(tokio::spawn(async {}).abort_handle());

        assert!(matches!(
            slot.commit(first, "old".to_string()),
            Err(ServiceError::Superseded)
        ));
        assert_eq!(slot.current(), "placeholder");

        assert_eq!(slot.commit(second, "new".to_string()).expect("latest wins"), "new");
        assert_eq!(slot.current(), "new");
    }

    #[tokio::test]
    async fn begin_aborts_prior_read() {
        let slot = slot();
        let pending = tokio::spawn(std::future::pending::<()>());

        slot.begin(pending.abort_handle());
        slot.begin(tokio::spawn(async {}).abort_handle());

        let err = pending.await.expect_err("prior read aborted");
        assert!(err.is_cancelled());
    }

    #[tokio::test]
    async fn sequential_loads_keep_last() {
        let slot = slot();

        slot.load(b"a".to_vec(), "image/png").await.expect("first");
        slot.load(b"b".to_vec(), "image/gif").await.expect("second");

        assert_eq!(slot.current(), "data:image/gif;base64,Yg==");
    }
}
