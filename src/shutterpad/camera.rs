use crate::error::{GalleryError, Result};
use log::info;
use std::path::PathBuf;
use std::process::Command;

/// Parameters forwarded to the capture collaborator.
#[derive(Debug, Clone)]
pub struct CaptureRequest {
    /// JPEG quality, 0-100.
    pub quality: u8,
}

impl Default for CaptureRequest {
    fn default() -> Self {
        Self { quality: 100 }
    }
}

/// Reference-type capture result. The camera hands back a location, never
/// raw bytes; which field is set depends on the execution context.
#[derive(Debug, Clone, Default)]
pub struct CapturedPhoto {
    /// Native filesystem path, set in hybrid contexts.
    pub path: Option<String>,
    /// Web-accessible location (blob or http URL), set in browser contexts.
    pub web_path: Option<String>,
}

impl CapturedPhoto {
    pub fn native(path: impl Into<String>) -> Self {
        Self {
            path: Some(path.into()),
            web_path: None,
        }
    }

    pub fn web(web_path: impl Into<String>) -> Self {
        Self {
            path: None,
            web_path: Some(web_path.into()),
        }
    }
}

/// External service producing an image reference from a device camera.
///
/// May fail with a user cancellation ([`GalleryError::CaptureCancelled`]) or
/// a hardware/collaborator error ([`GalleryError::Capture`]).
pub trait Camera {
    fn capture(&mut self, request: &CaptureRequest) -> Result<CapturedPhoto>;
}

impl<C: Camera> Camera for std::rc::Rc<std::cell::RefCell<C>> {
    fn capture(&mut self, request: &CaptureRequest) -> Result<CapturedPhoto> {
        self.borrow_mut().capture(request)
    }
}

/// Camera backed by an external capture program.
///
/// The program receives the desired output path as its first argument and
/// the requested quality as its second, and is expected to write a JPEG to
/// that path before exiting. Exiting cleanly without producing a file is
/// treated as the user dismissing the capture UI.
pub struct CommandCamera {
    executable: Option<PathBuf>,
}

impl CommandCamera {
    pub fn new(executable: Option<PathBuf>) -> Self {
        Self { executable }
    }

    fn output_path() -> PathBuf {
        std::env::temp_dir().join(format!("shutterpad-capture-{}.jpeg", std::process::id()))
    }
}

impl Camera for CommandCamera {
    fn capture(&mut self, request: &CaptureRequest) -> Result<CapturedPhoto> {
        let executable = self.executable.as_ref().ok_or_else(|| {
            GalleryError::Capture(
                "no capture command configured (set it with `shutterpad config capture-command <path>`)"
                    .to_string(),
            )
        })?;

        let output_path = Self::output_path();
        // Clean up a previous run so we never hand back a stale image
        if output_path.exists() {
            let _ = std::fs::remove_file(&output_path);
        }

        info!("launching capture program {:?}", executable);
        let status = Command::new(executable)
            .arg(&output_path)
            .arg(request.quality.to_string())
            .status()
            .map_err(|e| {
                GalleryError::Capture(format!("failed to launch {:?}: {}", executable, e))
            })?;

        if !status.success() {
            return Err(GalleryError::Capture(format!(
                "capture program exited with status {:?}",
                status.code()
            )));
        }

        if !output_path.exists() {
            return Err(GalleryError::CaptureCancelled);
        }

        Ok(CapturedPhoto::native(
            output_path.to_string_lossy().into_owned(),
        ))
    }
}

// --- Test support ---

#[cfg(any(test, feature = "test_utils"))]
pub mod stub {
    use super::*;
    use std::collections::VecDeque;

    /// Scripted camera for tests; yields queued results in order and reports
    /// the user cancelling once the queue runs dry.
    #[derive(Default)]
    pub struct StubCamera {
        results: VecDeque<Result<CapturedPhoto>>,
        pub last_request: Option<CaptureRequest>,
    }

    impl StubCamera {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn push_shot(&mut self, photo: CapturedPhoto) {
            self.results.push_back(Ok(photo));
        }

        pub fn push_error(&mut self, err: GalleryError) {
            self.results.push_back(Err(err));
        }
    }

    impl Camera for StubCamera {
        fn capture(&mut self, request: &CaptureRequest) -> Result<CapturedPhoto> {
            self.last_request = Some(request.clone());
            self.results
                .pop_front()
                .unwrap_or(Err(GalleryError::CaptureCancelled))
        }
    }
}
