/// Execution context reported by the host shell.
///
/// Hybrid contexts have direct native filesystem access and address stored
/// images by full URI; web contexts only see storage-relative names and need
/// stored bytes re-encoded as data URIs before the view can render them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Runtime {
    Hybrid,
    Web,
}

impl Runtime {
    pub fn is_hybrid(self) -> bool {
        matches!(self, Runtime::Hybrid)
    }
}

/// Converts a native storage URI into a URL the view can render.
pub trait UriResolver {
    fn to_webview_url(&self, uri: &str) -> String;
}

/// Maps plain native paths onto `file://` URLs. URIs that already carry a
/// scheme pass through untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileUrlResolver;

impl UriResolver for FileUrlResolver {
    fn to_webview_url(&self, uri: &str) -> String {
        if uri.contains("://") {
            uri.to_string()
        } else {
            format!("file://{}", uri)
        }
    }
}
