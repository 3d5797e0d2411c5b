use bytes::Bytes;

use crate::file;
use crate::limits::{LimitSource, Limits};
use crate::part::{self, PartKind};
use crate::split;
use crate::temp::TempRegistry;
use crate::tree::{self, FieldTree, FileTree};

/// Outcome of one parse invocation.
#[derive(Debug)]
pub enum ParseResult {
    /// The request was not `multipart/form-data`, declared no boundary, or
    /// had an empty body; the input is to be used unchanged.
    Unchanged,
    /// The body was decoded into a field tree and a file tree.
    Parsed {
        fields: FieldTree,
        files: FileTree,
    },
}

/// A `multipart/form-data` parser session.
///
/// A session owns the limits it was constructed with and every temporary
/// file it creates. Temporary files live until the session is
/// [`release`](Multipart::release)d or dropped, whichever comes first.
/// Sessions hold no shared state: use one per concurrently handled request.
///
/// # Examples
///
/// ```
/// use multiform::{Multipart, ParseResult};
///
/// let body = "--X-BOUNDARY\r\nContent-Disposition: form-data; name=\"my_text_field\"\r\n\r\nabcd\r\n--X-BOUNDARY--\r\n";
///
/// let mut multipart = Multipart::new();
///
/// match multipart.parse(Some("multipart/form-data; boundary=X-BOUNDARY"), body) {
///     ParseResult::Parsed { fields, .. } => {
///         assert_eq!(fields["my_text_field"].as_text(), Some("abcd"));
///     }
///     ParseResult::Unchanged => unreachable!(),
/// }
/// ```
pub struct Multipart {
    limits: Limits,
    temp: TempRegistry,
}

impl Multipart {
    /// Constructs a session with the built-in platform-default limits.
    pub fn new() -> Multipart {
        Multipart::with_limits(Limits::new())
    }

    /// Constructs a session with the given limits.
    pub fn with_limits(limits: Limits) -> Multipart {
        Multipart {
            limits,
            temp: TempRegistry::new(),
        }
    }

    /// Constructs a session with limits resolved once from the given source.
    pub fn from_source<S: LimitSource + ?Sized>(source: &S) -> Multipart {
        Multipart::with_limits(Limits::from_source(source))
    }

    /// The limits in effect for subsequent parses.
    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Replaces the limits for subsequent parses. Results already produced
    /// are unaffected.
    pub fn set_limits(&mut self, limits: Limits) {
        self.limits = limits;
    }

    /// Decodes a request body into a field tree and a file tree.
    ///
    /// Returns [`ParseResult::Unchanged`] when the content type is not
    /// `multipart/form-data`, the boundary is missing, or the body is empty.
    /// Malformed parts are skipped and per-file failures are recorded on
    /// the file's [`UploadStatus`](crate::UploadStatus); no part-level
    /// anomaly fails the parse.
    ///
    /// File parts past the session's `max_file_count` are dropped without a
    /// trace in the output.
    pub fn parse(&mut self, content_type: Option<&str>, body: impl Into<Bytes>) -> ParseResult {
        let body = body.into();

        if body.is_empty() {
            return ParseResult::Unchanged;
        }

        let boundary = match content_type.map(crate::parse_boundary) {
            Some(Ok(boundary)) => boundary,
            _ => return ParseResult::Unchanged,
        };

        let mut fields = FieldTree::new();
        let mut files = FileTree::new();
        let mut file_count = 0;

        for raw in split::parts(&body, &boundary) {
            let Some(part) = part::classify(&raw) else {
                continue;
            };

            match part.kind {
                PartKind::Field { value } => tree::insert(&mut fields, &part.name, value),
                PartKind::File {
                    file_name,
                    content_type,
                    data,
                } => {
                    if file_count >= self.limits.max_file_count {
                        log::warn!(
                            "dropping upload {:?}: file count limit of {} reached",
                            part.name,
                            self.limits.max_file_count
                        );
                        continue;
                    }

                    file_count += 1;

                    let uploaded = file::materialize(
                        file_name,
                        content_type,
                        &data,
                        &self.limits,
                        &mut self.temp,
                    );
                    tree::insert(&mut files, &part.name, uploaded);
                }
            }
        }

        ParseResult::Parsed { fields, files }
    }

    /// Removes every temporary file created by this session.
    ///
    /// Runs automatically when the session is dropped; calling it earlier is
    /// safe and idempotent. Paths held by previously returned
    /// [`UploadedFile`](crate::UploadedFile) descriptors dangle afterwards.
    pub fn release(&mut self) {
        self.temp.release();
    }
}

impl Default for Multipart {
    fn default() -> Self {
        Multipart::new()
    }
}
