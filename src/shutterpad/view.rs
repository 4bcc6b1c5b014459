use crate::camera::Camera;
use crate::error::{GalleryError, Result};
use crate::gallery::Gallery;
use crate::model::PhotoRecord;
use crate::platform::UriResolver;
use crate::storage::{FileStorage, PreferenceStore};

/// Presentation-facing facade over the gallery.
///
/// Clients address photos by display index (1 is the newest) and this
/// facade resolves indexes to records. It also owns the one piece of
/// transient UI state the gallery flow has: which photo is currently
/// selected for the delete confirmation sheet. The machine is
/// `Idle → Selected` on [`select`](Self::select) and back to `Idle` on
/// [`cancel`](Self::cancel) or once [`confirm_delete`](Self::confirm_delete)
/// dispatches, whatever the delete's outcome.
pub struct GalleryView<C, F, P, R>
where
    C: Camera,
    F: FileStorage,
    P: PreferenceStore,
    R: UriResolver,
{
    gallery: Gallery<C, F, P, R>,
    selection: Option<PhotoRecord>,
}

impl<C, F, P, R> GalleryView<C, F, P, R>
where
    C: Camera,
    F: FileStorage,
    P: PreferenceStore,
    R: UriResolver,
{
    pub fn new(gallery: Gallery<C, F, P, R>) -> Self {
        Self {
            gallery,
            selection: None,
        }
    }

    pub fn load(&mut self) -> Result<()> {
        self.gallery.load()
    }

    pub fn capture(&mut self) -> Result<PhotoRecord> {
        self.gallery.capture()
    }

    pub fn photos(&self) -> &[PhotoRecord] {
        self.gallery.photos()
    }

    /// Resolve a 1-based display index and open the confirmation flow for
    /// that photo. Out-of-range indexes error and leave the view idle.
    pub fn select(&mut self, index: usize) -> Result<PhotoRecord> {
        let slot = index
            .checked_sub(1)
            .ok_or(GalleryError::NoSuchPhoto(index))?;
        let record = self
            .gallery
            .photos()
            .get(slot)
            .cloned()
            .ok_or(GalleryError::NoSuchPhoto(index))?;
        self.selection = Some(record.clone());
        Ok(record)
    }

    /// The photo currently awaiting confirmation, if any.
    pub fn selected(&self) -> Option<&PhotoRecord> {
        self.selection.as_ref()
    }

    /// Dismiss the confirmation flow without deleting.
    pub fn cancel(&mut self) {
        self.selection = None;
    }

    /// Delete the selected photo.
    ///
    /// The selection clears as the action is dispatched, so the
    /// confirmation sheet closes even when the delete itself fails. With no
    /// selection this is a no-op.
    pub fn confirm_delete(&mut self) -> Result<Option<PhotoRecord>> {
        let Some(record) = self.selection.take() else {
            return Ok(None);
        };
        self.gallery.delete(&record)?;
        Ok(Some(record))
    }
}
