use bytes::Bytes;
use regex::bytes::Regex;

/// Splits a raw body into boundary-delimited segments.
///
/// The delimiter is an optional leading line break followed by one or more
/// hyphens and the boundary token; the token itself is matched literally.
/// The final segment carries only the closing `--` marker and is dropped
/// unconditionally. Prologue and whitespace-only segments are left for the
/// classifier to skip.
pub(crate) fn parts(body: &Bytes, boundary: &str) -> Vec<Bytes> {
    let pattern = format!(r"\r?\n?-+{}", regex::escape(boundary));

    let delimiter = match Regex::new(&pattern) {
        Ok(re) => re,
        Err(err) => {
            log::warn!("unusable multipart boundary {:?}: {}", boundary, err);
            return Vec::new();
        }
    };

    let mut segments = Vec::new();
    let mut offset = 0;

    for mat in delimiter.find_iter(body) {
        segments.push(body.slice(offset..mat.start()));
        offset = mat.end();
    }

    segments.push(body.slice(offset..));
    segments.pop();

    segments
}
