//! Images picked for a menu item that does not exist yet.
//!
//! A new item has no id to upload against, so chosen files wait here with a
//! local preview URL. Once the item is created they are uploaded one by one,
//! and every preview is released whatever the outcome.

use leptos::logging::{error, log, warn};
use uuid::Uuid;

use crate::config::MAX_ITEM_IMAGES;
use crate::error::{ApiError, ValidationError};

#[derive(Debug, Clone)]
pub struct StagedImage<F> {
    pub id: Uuid,
    pub file: F,
    /// Object URL shown in place of the not-yet-uploaded image.
    pub preview: String,
}

#[derive(Debug, Clone)]
pub struct ImageStaging<F> {
    images: Vec<StagedImage<F>>,
    limit: usize,
}

impl<F> Default for ImageStaging<F> {
    fn default() -> Self {
        Self::with_limit(MAX_ITEM_IMAGES)
    }
}

impl<F> ImageStaging<F> {
    pub fn with_limit(limit: usize) -> Self {
        Self {
            images: Vec::new(),
            limit,
        }
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.images.len() >= self.limit
    }

    pub fn images(&self) -> &[StagedImage<F>] {
        &self.images
    }

    /// Queues a file. Refused once the item's image limit is reached.
    pub fn stage(&mut self, file: F, preview: String) -> Result<Uuid, ValidationError> {
        ensure_room(self.images.len(), self.limit)?;
        let id = Uuid::new_v4();
        self.images.push(StagedImage { id, file, preview });
        Ok(id)
    }

    /// Drops a queued file; the caller owns releasing its preview.
    pub fn remove(&mut self, id: Uuid) -> Option<StagedImage<F>> {
        let index = self.images.iter().position(|img| img.id == id)?;
        Some(self.images.remove(index))
    }

    /// Empties the queue, handing back everything that was staged.
    pub fn take(&mut self) -> Vec<StagedImage<F>> {
        std::mem::take(&mut self.images)
    }
}

/// Checks there is room for one more image next to `current` existing ones.
pub fn ensure_room(current: usize, limit: usize) -> Result<(), ValidationError> {
    if current >= limit {
        Err(ValidationError::TooManyImages(limit))
    } else {
        Ok(())
    }
}

/// Something that can attach an image file to a saved menu item.
#[allow(async_fn_in_trait)]
pub trait ImageUploader<F> {
    async fn upload(&self, item_id: i64, file: &F) -> Result<(), ApiError>;
}

/// Uploads staged images for `item_id` in order, stopping at the first
/// failure. `release` is called with every preview URL, uploaded or not.
///
/// Returns how many images were uploaded. An `item_id` that is not a real
/// id uploads nothing and fails with [`ApiError::MissingId`].
pub async fn persist_staged<F, U, R>(
    uploader: &U,
    item_id: i64,
    staged: Vec<StagedImage<F>>,
    mut release: R,
) -> Result<usize, ApiError>
where
    U: ImageUploader<F>,
    R: FnMut(&str),
{
    if item_id <= 0 {
        warn!("[STAGING] Created item has no id, dropping {} staged image(s)", staged.len());
        for image in &staged {
            release(&image.preview);
        }
        return Err(ApiError::MissingId("menu item"));
    }

    let total = staged.len();
    let mut uploaded = 0;
    let mut failure = None;

    for image in staged {
        if failure.is_none() {
            match uploader.upload(item_id, &image.file).await {
                Ok(()) => {
                    uploaded += 1;
                    log!("[STAGING] Uploaded image {}/{} for item {}", uploaded, total, item_id);
                }
                Err(e) => {
                    error!("[STAGING] Upload failed for item {}: {}", item_id, e);
                    failure = Some(e);
                }
            }
        }
        release(&image.preview);
    }

    match failure {
        Some(e) => Err(e),
        None => Ok(uploaded),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct RecordingUploader {
        calls: RefCell<Vec<(i64, String)>>,
        fail_on: Option<&'static str>,
    }

    impl RecordingUploader {
        fn new(fail_on: Option<&'static str>) -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                fail_on,
            }
        }
    }

    impl ImageUploader<String> for RecordingUploader {
        async fn upload(&self, item_id: i64, file: &String) -> Result<(), ApiError> {
            self.calls.borrow_mut().push((item_id, file.clone()));
            if self.fail_on == Some(file.as_str()) {
                return Err(ApiError::Status {
                    status: 413,
                    message: "File too large".into(),
                });
            }
            Ok(())
        }
    }

    fn staged(names: &[&str]) -> ImageStaging<String> {
        let mut staging = ImageStaging::default();
        for name in names {
            staging
                .stage(name.to_string(), format!("blob:{}", name))
                .unwrap();
        }
        staging
    }

    #[test]
    fn test_stage_enforces_limit() {
        let mut staging = staged(&["a.jpg", "b.jpg", "c.jpg", "d.jpg"]);
        assert!(staging.is_full());
        let err = staging.stage("e.jpg".into(), "blob:e".into()).unwrap_err();
        assert_eq!(err, ValidationError::TooManyImages(4));
        assert_eq!(staging.len(), 4);
    }

    #[test]
    fn test_remove_by_id_keeps_order() {
        let mut staging = staged(&["a.jpg", "b.jpg", "c.jpg"]);
        let middle = staging.images()[1].id;
        let removed = staging.remove(middle).unwrap();
        assert_eq!(removed.file, "b.jpg");
        assert_eq!(removed.preview, "blob:b.jpg");

        let files: Vec<_> = staging.images().iter().map(|i| i.file.as_str()).collect();
        assert_eq!(files, vec!["a.jpg", "c.jpg"]);
        assert!(staging.remove(middle).is_none());
    }

    #[test]
    fn test_ensure_room_for_saved_images() {
        assert!(ensure_room(3, MAX_ITEM_IMAGES).is_ok());
        assert_eq!(
            ensure_room(4, MAX_ITEM_IMAGES),
            Err(ValidationError::TooManyImages(4))
        );
    }

    #[tokio::test]
    async fn test_persist_uploads_sequentially_and_releases_previews() {
        let mut staging = staged(&["a.jpg", "b.jpg", "c.jpg"]);
        let uploader = RecordingUploader::new(None);
        let mut released = Vec::new();

        let count = persist_staged(&uploader, 42, staging.take(), |p| released.push(p.to_string()))
            .await
            .unwrap();

        assert_eq!(count, 3);
        assert!(staging.is_empty());
        assert_eq!(
            *uploader.calls.borrow(),
            vec![
                (42, "a.jpg".to_string()),
                (42, "b.jpg".to_string()),
                (42, "c.jpg".to_string())
            ]
        );
        assert_eq!(released, vec!["blob:a.jpg", "blob:b.jpg", "blob:c.jpg"]);
    }

    #[tokio::test]
    async fn test_persist_stops_at_first_failure_but_releases_all() {
        let staging = staged(&["a.jpg", "huge.jpg", "c.jpg"]).take();
        let uploader = RecordingUploader::new(Some("huge.jpg"));
        let mut released = Vec::new();

        let err = persist_staged(&uploader, 7, staging, |p| released.push(p.to_string()))
            .await
            .unwrap_err();

        assert_eq!(err.server_message(), Some("File too large"));
        assert_eq!(uploader.calls.borrow().len(), 2);
        assert_eq!(released.len(), 3);
    }

    #[tokio::test]
    async fn test_persist_nothing_staged() {
        let uploader = RecordingUploader::new(None);
        let count = persist_staged(&uploader, 1, Vec::<StagedImage<String>>::new(), |_| {})
            .await
            .unwrap();
        assert_eq!(count, 0);
        assert!(uploader.calls.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_persist_refuses_item_without_id() {
        let staging = staged(&["a.jpg", "b.jpg"]).take();
        let uploader = RecordingUploader::new(None);
        let mut released = Vec::new();

        let err = persist_staged(&uploader, 0, staging, |p| released.push(p.to_string()))
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::MissingId(_)));
        assert!(uploader.calls.borrow().is_empty());
        assert_eq!(released, vec!["blob:a.jpg", "blob:b.jpg"]);
    }

    #[test]
    fn test_created_item_without_data_has_no_id() {
        let envelope: crate::models::ApiEnvelope<crate::models::menu_item::MenuItem> =
            serde_json::from_str(r#"{"success":true,"message":"created"}"#).unwrap();
        assert_eq!(envelope.data.id, 0);
    }
}
