use std::collections::HashMap;

/// Per-part headers keyed by lower-cased header name.
pub(crate) type HeaderTable = HashMap<String, HeaderValue>;

/// A parsed header value: either a plain string or a `;`-separated parameter
/// list as used by `Content-Disposition` and `Content-Type`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum HeaderValue {
    Scalar(String),
    Parameterized {
        named: HashMap<String, String>,
        bare: Vec<String>,
    },
}

impl HeaderValue {
    /// Looks up a named parameter such as `name` or `filename`.
    pub(crate) fn param(&self, name: &str) -> Option<&str> {
        match self {
            HeaderValue::Scalar(_) => None,
            HeaderValue::Parameterized { named, .. } => named.get(name).map(String::as_str),
        }
    }

    /// The media type portion of a `Content-Type` value, i.e. the scalar
    /// itself or the first unkeyed piece of a parameter list.
    pub(crate) fn media_type(&self) -> Option<&str> {
        match self {
            HeaderValue::Scalar(value) => Some(value.as_str()),
            HeaderValue::Parameterized { bare, .. } => bare.first().map(String::as_str),
        }
    }
}

/// Parses one header block into a [`HeaderTable`].
///
/// Each non-empty line containing a colon is split at the first colon; the
/// name is lower-cased and trimmed, the value trimmed. A value containing a
/// semicolon becomes a parameter list: pieces with `=` are split at the
/// first `=` into a lower-cased parameter name and a value with one layer of
/// surrounding double quotes stripped, pieces without `=` are kept as
/// unkeyed entries. Lines without a colon are ignored.
pub(crate) fn parse_header_block(block: &[u8]) -> HeaderTable {
    let text = String::from_utf8_lossy(block);
    let mut table = HeaderTable::new();

    for line in text.lines() {
        let Some((name, value)) = line.split_once(':') else {
            continue;
        };

        let name = name.trim().to_ascii_lowercase();
        let value = value.trim();

        if name.is_empty() {
            continue;
        }

        let parsed = if value.contains(';') {
            let mut named = HashMap::new();
            let mut bare = Vec::new();

            for piece in value.split(';') {
                let piece = piece.trim();

                if piece.is_empty() {
                    continue;
                }

                match piece.split_once('=') {
                    Some((param, param_value)) => {
                        let param = param.trim().to_ascii_lowercase();
                        named.insert(param, unquote(param_value.trim()).to_owned());
                    }
                    None => bare.push(piece.to_owned()),
                }
            }

            HeaderValue::Parameterized { named, bare }
        } else {
            HeaderValue::Scalar(value.to_owned())
        };

        table.insert(name, parsed);
    }

    table
}

/// Strips one layer of surrounding double quotes, if present.
fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_header() {
        let table = parse_header_block(b"Content-Type: text/plain\r\n");

        assert_eq!(
            table.get("content-type"),
            Some(&HeaderValue::Scalar("text/plain".to_owned()))
        );
    }

    #[test]
    fn test_parameterized_header() {
        let table =
            parse_header_block(b"Content-Disposition: form-data; name=\"my_field\"; filename=\"file abc.txt\"\r\n");

        let value = table.get("content-disposition").unwrap();
        assert_eq!(value.param("name"), Some("my_field"));
        assert_eq!(value.param("filename"), Some("file abc.txt"));
        assert_eq!(value.media_type(), Some("form-data"));
    }

    #[test]
    fn test_unquoted_and_mixed_case_parameters() {
        let table = parse_header_block(b"Content-Type: text/plain; Charset=utf-8\r\n");

        let value = table.get("content-type").unwrap();
        assert_eq!(value.param("charset"), Some("utf-8"));
        assert_eq!(value.media_type(), Some("text/plain"));
    }

    #[test]
    fn test_lines_without_colon_are_ignored() {
        let table = parse_header_block(b"\r\nnot a header line\r\nX-Extra: 1\r\n");

        assert_eq!(table.len(), 1);
        assert_eq!(table.get("x-extra"), Some(&HeaderValue::Scalar("1".to_owned())));
    }

    #[test]
    fn test_non_ascii_parameter_values() {
        let table = parse_header_block("Content-Disposition: form-data; name=\"你好\"".as_bytes());

        let value = table.get("content-disposition").unwrap();
        assert_eq!(value.param("name"), Some("你好"));
    }

    #[test]
    fn test_quotes_are_stripped_one_layer_only() {
        let table = parse_header_block(b"Content-Disposition: form-data; name=\"\"quoted\"\"");

        let value = table.get("content-disposition").unwrap();
        assert_eq!(value.param("name"), Some("\"quoted\""));
    }
}
