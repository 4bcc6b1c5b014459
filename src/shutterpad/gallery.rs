use crate::camera::{Camera, CaptureRequest, CapturedPhoto};
use crate::error::{GalleryError, Result};
use crate::model::PhotoRecord;
use crate::platform::{Runtime, UriResolver};
use crate::storage::{FileStorage, PreferenceStore};
use base64::Engine as _;
use chrono::Utc;
use log::{info, warn};

/// Preference key the full photo list is persisted under.
const PHOTO_STORAGE_KEY: &str = "photos";

/// The photo store.
///
/// Owns the authoritative in-memory photo list (newest first) and keeps it
/// mirrored in the preference store: every add or delete rewrites the entire
/// persisted list as one JSON value. Collaborators are injected and owned;
/// there is no ambient state.
///
/// All operations return `Result`; callers decide what a failure means for
/// the user. Failures leave both the in-memory list and the persisted value
/// as they were before the call.
pub struct Gallery<C, F, P, R>
where
    C: Camera,
    F: FileStorage,
    P: PreferenceStore,
    R: UriResolver,
{
    runtime: Runtime,
    camera: C,
    files: F,
    prefs: P,
    resolver: R,
    request: CaptureRequest,
    photos: Vec<PhotoRecord>,
}

impl<C, F, P, R> Gallery<C, F, P, R>
where
    C: Camera,
    F: FileStorage,
    P: PreferenceStore,
    R: UriResolver,
{
    pub fn new(runtime: Runtime, camera: C, files: F, prefs: P, resolver: R) -> Self {
        Self {
            runtime,
            camera,
            files,
            prefs,
            resolver,
            request: CaptureRequest::default(),
            photos: Vec::new(),
        }
    }

    /// Override the capture quality (defaults to maximum).
    pub fn with_quality(mut self, quality: u8) -> Self {
        self.request.quality = quality;
        self
    }

    /// The current list, newest first.
    pub fn photos(&self) -> &[PhotoRecord] {
        &self.photos
    }

    /// Replace the in-memory list with the persisted one.
    ///
    /// An absent value loads as an empty gallery. In a web runtime each
    /// record's stored bytes are re-read and re-encoded as a data URI so the
    /// view can render them; a record whose bytes are missing stays
    /// unresolved without aborting the rest of the load.
    pub fn load(&mut self) -> Result<()> {
        let stored = self.prefs.get(PHOTO_STORAGE_KEY)?;
        let mut records: Vec<PhotoRecord> = match stored {
            Some(value) => serde_json::from_str(&value)?,
            None => Vec::new(),
        };

        if !self.runtime.is_hybrid() {
            for record in &mut records {
                match self.files.read(&record.filepath) {
                    Ok(bytes) => record.webview_path = Some(jpeg_data_uri(&bytes)),
                    Err(err) => {
                        warn!("leaving {} unresolved: {}", record.filepath, err);
                    }
                }
            }
        }

        self.photos = records;
        Ok(())
    }

    /// Capture a photo and add it to the gallery.
    ///
    /// Asks the camera for a reference-type result, saves the image under a
    /// fresh timestamp-derived name, prepends the record, and rewrites the
    /// persisted list.
    pub fn capture(&mut self) -> Result<PhotoRecord> {
        let shot = self.camera.capture(&self.request)?;
        let file_name = self.next_file_name(Utc::now().timestamp_millis());
        let record = self.save_photo(&shot, &file_name)?;

        self.photos.insert(0, record.clone());
        if let Err(err) = self.persist() {
            // unwind the prepend so memory stays in step with storage
            self.photos.remove(0);
            return Err(err);
        }

        info!("captured {}", record.filepath);
        Ok(record)
    }

    /// Remove a photo from durable storage and from the gallery.
    ///
    /// Removal is confirmed, not optimistic: the stored image is deleted
    /// first, and only then does the record leave the list. The one
    /// exception is a file that is already gone, which must not strand its
    /// record forever. Deleting a record that is not in the list leaves the
    /// list untouched.
    pub fn delete(&mut self, record: &PhotoRecord) -> Result<()> {
        match self.files.delete(&record.filepath) {
            Ok(()) => {}
            Err(GalleryError::FileNotFound(_)) => {
                warn!("stored image for {} already missing", record.filepath);
            }
            Err(err) => return Err(err),
        }

        let before = self.photos.len();
        self.photos.retain(|p| p.filepath != record.filepath);
        if self.photos.len() == before {
            return Ok(());
        }

        self.persist()?;
        info!("deleted {}", record.filepath);
        Ok(())
    }

    /// Move the captured bytes into the managed data directory and build the
    /// record the view will render.
    ///
    /// The byte source follows the runtime: hybrid reads the capture
    /// result's native path, web fetches its web-accessible location. The
    /// returned record is shaped so the view never needs to know which
    /// runtime produced it.
    fn save_photo(&mut self, shot: &CapturedPhoto, file_name: &str) -> Result<PhotoRecord> {
        let source = if self.runtime.is_hybrid() {
            shot.path.as_deref()
        } else {
            shot.web_path.as_deref()
        };
        let source = source.ok_or_else(|| {
            GalleryError::Capture("capture result carries no readable location".to_string())
        })?;

        let bytes = self.files.read_uri(source)?;
        let stored = self.files.write(file_name, &bytes)?;

        Ok(if self.runtime.is_hybrid() {
            PhotoRecord::new(
                stored.uri.clone(),
                Some(self.resolver.to_webview_url(&stored.uri)),
            )
        } else {
            PhotoRecord::new(file_name, shot.web_path.clone())
        })
    }

    /// Rewrite the full persisted list.
    fn persist(&mut self) -> Result<()> {
        let value = serde_json::to_string(&self.photos)?;
        self.prefs.set(PHOTO_STORAGE_KEY, &value)
    }

    /// Derive a unique file name from a capture timestamp.
    ///
    /// Millisecond clocks collide under rapid successive captures; a
    /// monotonic counter suffix keeps names unique within the list.
    fn next_file_name(&self, millis: i64) -> String {
        let base = format!("{}.jpeg", millis);
        if !self.is_taken(&base) {
            return base;
        }
        let mut n = 1usize;
        loop {
            let candidate = format!("{}-{}.jpeg", millis, n);
            if !self.is_taken(&candidate) {
                return candidate;
            }
            n += 1;
        }
    }

    fn is_taken(&self, name: &str) -> bool {
        let suffix = format!("/{}", name);
        self.photos
            .iter()
            .any(|p| p.filepath == name || p.filepath.ends_with(&suffix))
    }
}

fn jpeg_data_uri(bytes: &[u8]) -> String {
    format!(
        "data:image/jpeg;base64,{}",
        base64::engine::general_purpose::STANDARD.encode(bytes)
    )
}
