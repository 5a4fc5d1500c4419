//! Raw header lines, eg. `Cache-Control: max-age=60`, as printed by `curl -I`.

use anyhow::{Context, Error, bail};
use http::{HeaderMap, HeaderName, HeaderValue};
use std::io::BufRead;

/// Parses single `Name: value` line. Surrounding whitespace of both name and
/// value is removed.
pub fn parse_header_line(line: &str) -> Result<(HeaderName, HeaderValue), Error> {
    let (name, value) = match line.split_once(':') {
        Some(name_value) => name_value,
        None => bail!("missing `:` in header line {line:?}"),
    };

    let name = HeaderName::from_bytes(name.trim().as_bytes())
        .with_context(|| format!("invalid header name in {line:?}"))?;
    let value = HeaderValue::from_str(value.trim())
        .with_context(|| format!("invalid header value in {line:?}"))?;

    Ok((name, value))
}

/// Whether line should be skipped when reading response head: blank lines
/// and status line (eg. `HTTP/1.1 200 OK`).
pub fn is_ignored_line(line: &str) -> bool {
    let line = line.trim();
    line.is_empty() || line.starts_with("HTTP/")
}

/// Reads all header lines from `reader` into [HeaderMap]. Repeated headers
/// are preserved.
pub fn read_header_lines(reader: impl BufRead) -> Result<HeaderMap, Error> {
    let mut headers = HeaderMap::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if is_ignored_line(&line) {
            continue;
        }

        let (name, value) =
            parse_header_line(&line).with_context(|| format!("line {}", index + 1))?;
        headers.append(name, value);
    }

    Ok(headers)
}
