use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::limits::Limits;
use crate::temp::TempRegistry;

/// Outcome of materializing one uploaded file, mirroring standard
/// upload-error semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum UploadStatus {
    /// The content was written to temporary storage in full.
    Ok,
    /// The content exceeded the per-file size limit; nothing was written.
    SizeExceeded,
    /// Temporary storage could not be allocated or written.
    CantWrite,
}

/// Descriptor of one uploaded file.
///
/// Immutable after creation. The temporary file behind [`path`](Self::path)
/// is owned by the parser session that produced it, not by the descriptor:
/// it stays on disk until the session is released or dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct UploadedFile {
    file_name: String,
    content_type: String,
    size: u64,
    status: UploadStatus,
    path: Option<PathBuf>,
}

impl UploadedFile {
    /// The client-supplied file name, verbatim.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// The client-declared media type, `application/octet-stream` when the
    /// part declared none.
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// Size of the uploaded content in bytes, recorded regardless of the
    /// materialization outcome.
    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn status(&self) -> UploadStatus {
        self.status
    }

    /// Path of the temporary backing file; present only when
    /// [`status`](Self::status) is [`UploadStatus::Ok`].
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

/// Enforces the size limit, writes the content to a uniquely-named
/// temporary file and hands the file handle to the session registry.
///
/// Failures are recorded on the returned descriptor, never propagated: the
/// caller inspects [`UploadStatus`] the same way it would inspect a natively
/// parsed upload.
pub(crate) fn materialize(
    file_name: String,
    content_type: Option<String>,
    data: &[u8],
    limits: &Limits,
    registry: &mut TempRegistry,
) -> UploadedFile {
    let content_type =
        content_type.unwrap_or_else(|| mime::APPLICATION_OCTET_STREAM.to_string());
    let size = data.len() as u64;

    let (status, path) = if size > limits.max_file_size {
        (UploadStatus::SizeExceeded, None)
    } else {
        match write_temp(data) {
            Ok(file) => {
                let path = file.path().to_path_buf();
                registry.register(file);
                (UploadStatus::Ok, Some(path))
            }
            Err(err) => {
                log::warn!(
                    "failed to write upload {:?} to temporary storage: {}",
                    file_name,
                    err
                );
                (UploadStatus::CantWrite, None)
            }
        }
    };

    UploadedFile {
        file_name,
        content_type,
        size,
        status,
        path,
    }
}

fn write_temp(data: &[u8]) -> std::io::Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    file.write_all(data)?;
    Ok(file)
}
