//! A synchronous, in-memory decoder for `multipart/form-data` request
//! bodies.
//!
//! The whole body is held in memory and decoded in one pass into two trees:
//! plain field values and uploaded-file descriptors backed by temporary
//! storage. Bracketed field names (`Item[name]`, `tags[]`) nest values the
//! way HTML forms expect; per-file size limits and a maximum file count are
//! enforced while parsing, with failures recorded per file instead of
//! aborting the parse.
//!
//! Callers are responsible for capping body size upstream: a body larger
//! than available memory is out of scope here.
//!
//! # Examples
//!
//! ```
//! use multiform::{Multipart, Node, ParseResult, UploadStatus};
//!
//! let body = "--X-BOUNDARY\r\n\
//!             Content-Disposition: form-data; name=\"title\"\r\n\r\n\
//!             hello\r\n\
//!             --X-BOUNDARY\r\n\
//!             Content-Disposition: form-data; name=\"Item[file]\"; filename=\"a.txt\"\r\n\
//!             Content-Type: text/plain\r\n\r\n\
//!             file content\r\n\
//!             --X-BOUNDARY--\r\n";
//!
//! let mut multipart = Multipart::new();
//!
//! match multipart.parse(Some("multipart/form-data; boundary=X-BOUNDARY"), body) {
//!     ParseResult::Parsed { fields, files } => {
//!         assert_eq!(fields["title"].as_text(), Some("hello"));
//!
//!         let file = files["Item"].get("file").and_then(Node::as_leaf).unwrap();
//!         assert_eq!(file.status(), UploadStatus::Ok);
//!         assert_eq!(file.file_name(), "a.txt");
//!         assert!(file.path().is_some());
//!     }
//!     ParseResult::Unchanged => unreachable!(),
//! }
//! ```

pub use error::Error;
pub use file::{UploadStatus, UploadedFile};
pub use helpers::parse_byte_size;
pub use limits::{DefaultLimits, LimitSource, Limits};
pub use multipart::{Multipart, ParseResult};
pub use tree::{FieldTree, FileTree, Node};

mod constants;
mod error;
mod file;
mod headers;
mod helpers;
mod limits;
mod multipart;
mod part;
mod split;
mod temp;
mod tree;

/// A Result type often returned from methods that can have `multiform`
/// errors.
pub type Result<T> = std::result::Result<T, Error>;

/// Parses a `Content-Type` header value to extract the boundary token.
///
/// The value must case-insensitively contain `multipart/form-data` and a
/// `boundary=` parameter. The token is the remainder of the header value
/// after `boundary=`, kept verbatim: it is not unquoted or trimmed further.
pub fn parse_boundary<T: AsRef<str>>(content_type: T) -> crate::Result<String> {
    let value = content_type.as_ref();
    let lower = value.to_ascii_lowercase();

    if !lower.contains(constants::MULTIPART_FORM_DATA) {
        return Err(Error::NoMultipart);
    }

    let token = match lower.find(constants::BOUNDARY_PARAM) {
        Some(idx) => &value[idx + constants::BOUNDARY_PARAM.len()..],
        None => return Err(Error::NoBoundary),
    };

    if token.is_empty() {
        return Err(Error::NoBoundary);
    }

    Ok(token.to_owned())
}
