use crate::constants;
use crate::helpers::parse_byte_size;

/// Upload limits for one parser session.
///
/// Resolved once at session construction and cached for its lifetime;
/// replacing the limits on a session affects subsequent parses only.
///
/// # Examples
///
/// ```
/// use multiform::Limits;
///
/// let limits = Limits::new().max_file_size(64 * 1024).max_file_count(5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Limits {
    pub(crate) max_file_size: u64,
    pub(crate) max_file_count: usize,
}

impl Limits {
    /// Creates limits from the built-in platform defaults.
    pub fn new() -> Limits {
        Limits::from_source(&DefaultLimits)
    }

    /// Sets the maximum size of a single uploaded file, in bytes.
    pub fn max_file_size(mut self, limit: u64) -> Limits {
        self.max_file_size = limit;
        self
    }

    /// Sets the maximum size of a single uploaded file from a byte-size
    /// string such as `"2m"` or `"512k"` (see
    /// [`parse_byte_size`](crate::parse_byte_size)).
    pub fn max_file_size_str<T: AsRef<str>>(self, limit: T) -> Limits {
        self.max_file_size(parse_byte_size(limit))
    }

    /// Sets the maximum number of uploaded files accepted per parse. File
    /// parts beyond the limit are dropped without an error code.
    pub fn max_file_count(mut self, limit: usize) -> Limits {
        self.max_file_count = limit;
        self
    }

    /// Resolves limits from an injected source of platform defaults.
    pub fn from_source<S: LimitSource + ?Sized>(source: &S) -> Limits {
        Limits {
            max_file_size: source.max_file_size(),
            max_file_count: source.max_file_count(),
        }
    }
}

impl Default for Limits {
    fn default() -> Self {
        Limits::new()
    }
}

/// Supplies platform-default upload limits.
///
/// Implement this to source defaults from a configuration layer instead of
/// the built-in fallbacks.
pub trait LimitSource {
    /// Default per-file size limit, in bytes.
    fn max_file_size(&self) -> u64 {
        constants::DEFAULT_MAX_FILE_SIZE
    }

    /// Default maximum number of files per parse.
    fn max_file_count(&self) -> usize {
        constants::DEFAULT_MAX_FILE_COUNT
    }
}

/// The built-in platform defaults: 2 MiB per file, 20 files per parse.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultLimits;

impl LimitSource for DefaultLimits {}
