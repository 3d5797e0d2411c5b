use bytes::Bytes;
use encoding_rs::{Encoding, UTF_8};
use memchr::memmem;

use crate::constants;
use crate::headers::{self, HeaderValue};

pub(crate) struct Part {
    pub(crate) name: String,
    pub(crate) kind: PartKind,
}

pub(crate) enum PartKind {
    Field {
        value: String,
    },
    File {
        file_name: String,
        content_type: Option<String>,
        data: Bytes,
    },
}

/// Classifies one boundary-delimited segment as a plain field or a file.
///
/// Returns `None` for segments the parse should skip: whitespace-only
/// segments, parts without a blank-line header separator, and parts whose
/// `Content-Disposition` carries no `name` parameter. A `filename`
/// parameter, even an empty one, marks the part as a file.
pub(crate) fn classify(raw: &Bytes) -> Option<Part> {
    if raw.iter().all(u8::is_ascii_whitespace) {
        return None;
    }

    let (header_block, body) = split_header_block(raw)?;
    let table = headers::parse_header_block(header_block);

    let Some(name) = table
        .get("content-disposition")
        .and_then(|disposition| disposition.param("name"))
    else {
        log::debug!("skipping part without a field name");
        return None;
    };

    let file_name = table
        .get("content-disposition")
        .and_then(|disposition| disposition.param("filename"));
    let content_type = table.get("content-type");

    let kind = match file_name {
        Some(file_name) => PartKind::File {
            file_name: file_name.to_owned(),
            content_type: content_type
                .and_then(HeaderValue::media_type)
                .map(str::to_owned),
            data: body,
        },
        None => PartKind::Field {
            value: text_value(&body, content_type),
        },
    };

    Some(Part {
        name: name.to_owned(),
        kind,
    })
}

/// Separates header bytes from body bytes at the first blank line, under
/// either line-ending convention.
fn split_header_block(raw: &Bytes) -> Option<(&[u8], Bytes)> {
    let crlf = memmem::find(raw, constants::CRLF_CRLF.as_bytes());
    let lf = memmem::find(raw, constants::LF_LF.as_bytes());

    let (idx, len) = match (crlf, lf) {
        (Some(crlf), Some(lf)) if lf < crlf => (lf, constants::LF_LF.len()),
        (Some(crlf), _) => (crlf, constants::CRLF_CRLF.len()),
        (None, Some(lf)) => (lf, constants::LF_LF.len()),
        (None, None) => {
            log::debug!("skipping malformed part without a header separator");
            return None;
        }
    };

    Some((&raw[..idx], raw.slice(idx + len..)))
}

/// Decodes field content with the charset declared on the part, if any,
/// defaulting to UTF-8. The content is kept verbatim, trailing whitespace
/// included.
fn text_value(data: &[u8], content_type: Option<&HeaderValue>) -> String {
    let label = content_type
        .and_then(|value| value.param("charset"))
        .unwrap_or("utf-8");

    let encoding = Encoding::for_label(label.as_bytes()).unwrap_or(UTF_8);

    let (text, _, _) = encoding.decode(data);

    text.into_owned()
}
