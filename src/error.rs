use std::fmt::{self, Debug, Display, Formatter};

use derive_more::Display;

/// A set of errors that can occur while inspecting a `Content-Type` header.
///
/// Part-level anomalies never surface here: malformed parts are skipped and
/// per-file failures are recorded on the file's own
/// [`UploadStatus`](crate::UploadStatus).
#[derive(Clone, Copy, Display, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The `Content-Type` header is not `multipart/form-data`.
    #[display(fmt = "Content-Type is not multipart/form-data")]
    NoMultipart,

    /// No boundary found in the `Content-Type` header.
    #[display(fmt = "multipart boundary not found in Content-Type")]
    NoBoundary,
}

impl Debug for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(self, f)
    }
}

impl std::error::Error for Error {}
