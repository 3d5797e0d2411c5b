use tempfile::NamedTempFile;

/// Owns every temporary file created during one parser session.
///
/// Files registered here outlive the descriptors that reference them and are
/// removed exactly once: on [`release`](Self::release) or, failing that, on
/// drop.
#[derive(Debug, Default)]
pub(crate) struct TempRegistry {
    files: Vec<NamedTempFile>,
}

impl TempRegistry {
    pub(crate) fn new() -> TempRegistry {
        TempRegistry::default()
    }

    pub(crate) fn register(&mut self, file: NamedTempFile) {
        self.files.push(file);
    }

    /// Removes every registered temporary file. Idempotent.
    pub(crate) fn release(&mut self) {
        for file in self.files.drain(..) {
            if let Err(err) = file.close() {
                log::warn!("failed to remove temporary file: {}", err);
            }
        }
    }
}

impl Drop for TempRegistry {
    fn drop(&mut self) {
        self.release();
    }
}
