pub(crate) const CRLF_CRLF: &str = "\r\n\r\n";
pub(crate) const LF_LF: &str = "\n\n";

pub(crate) const MULTIPART_FORM_DATA: &str = "multipart/form-data";
pub(crate) const BOUNDARY_PARAM: &str = "boundary=";

// Fallback limits matching common platform upload defaults.
pub(crate) const DEFAULT_MAX_FILE_SIZE: u64 = 2 * 1024 * 1024;
pub(crate) const DEFAULT_MAX_FILE_COUNT: usize = 20;
