//! Human-readable diagnostics for JSON decode failures
//!
//! A failure reported at a byte offset is shown inside an indented
//! rendering of the document, with a marker spliced in at the equivalent
//! position. Indentation never changes the bytes of a token, so the offset
//! only has to skip what the renderer inserts (newlines, indentation and the
//! space after a colon). The marker goes right after the last token byte
//! before the offset, ahead of any inserted whitespace.
//!
//! Nothing here fails: when the document cannot be indented the raw bytes
//! are shown with the marker at the untranslated offset.

use serde::de::IgnoredAny;
use serde_json::error::Category;

/// Indentation unit of the rendered document
pub const INDENT: &str = "    ";

/// Marker placed at the failure location
pub const MARKER: &str = "<==";

/// Render `message` with the failure location inside `data`
///
/// Output format:
/// `<message> at offset <offset> (indicated by <==)\n <prefix> <== <suffix>`
pub fn format_at_offset(data: &[u8], message: &str, offset: usize) -> String {
    let split = offset.min(data.len());
    let mut out = format!("{message} at offset {offset} (indicated by {MARKER})\n ").into_bytes();

    let (body, at) = match indent(data, split) {
        Some(rendered) => rendered,
        None => {
            tracing::debug!(offset, "document cannot be indented, showing raw bytes");
            (data.to_vec(), split)
        }
    };

    out.extend_from_slice(&body[..at]);
    out.push(b' ');
    out.extend_from_slice(MARKER.as_bytes());
    out.push(b' ');
    out.extend_from_slice(&body[at..]);

    String::from_utf8_lossy(&out).into_owned()
}

/// Render a `serde_json` error raised while parsing `data`
///
/// Syntax and data errors are shown at their location; anything else falls
/// back to the error message.
pub fn resolve_decode_error(data: &[u8], err: &serde_json::Error) -> String {
    match err.classify() {
        Category::Syntax | Category::Eof | Category::Data => {
            format_at_offset(data, &strip_position(err), error_offset(data, err))
        }
        Category::Io => err.to_string(),
    }
}

/// Byte offset in `data` that a `serde_json` error points at
///
/// Syntax errors point at the offending byte and premature EOF at the end of
/// input. Data errors point just past a mismatched scalar, or at the opening
/// bracket of a mismatched array or object.
pub fn error_offset(data: &[u8], err: &serde_json::Error) -> usize {
    let consumed = offset_of(data, err.line(), err.column());
    match err.classify() {
        Category::Eof => data.len(),
        Category::Syntax => consumed.saturating_sub(1),
        Category::Data | Category::Io => consumed,
    }
}

/// Convert a one-based line and a column into a byte offset into `data`
///
/// Line 0 means the parser recorded no position.
pub(crate) fn offset_of(data: &[u8], line: usize, column: usize) -> usize {
    if line == 0 {
        return 0;
    }
    let line_start: usize = data
        .split_inclusive(|&b| b == b'\n')
        .take(line - 1)
        .map(<[u8]>::len)
        .sum();
    (line_start + column).min(data.len())
}

/// The error message without serde_json's trailing ` at line L column C`
pub(crate) fn strip_position(err: &serde_json::Error) -> String {
    let mut message = err.to_string();
    let suffix = format!(" at line {} column {}", err.line(), err.column());
    if message.ends_with(&suffix) {
        message.truncate(message.len() - suffix.len());
    }
    message
}

/// Indent `data` and translate `offset` into the indented output
///
/// Returns `None` when `data` is not a complete JSON document.
pub(crate) fn indent(data: &[u8], offset: usize) -> Option<(Vec<u8>, usize)> {
    serde_json::from_slice::<IgnoredAny>(data).ok()?;

    let mut indenter = Indenter::with_capacity(data.len());
    let mut translated = None;
    for (index, &byte) in data.iter().enumerate() {
        if index == offset {
            translated = Some(indenter.out.len());
        }
        indenter.push(byte);
    }
    let translated = translated.unwrap_or(indenter.out.len());
    Some((indenter.out, translated))
}

struct Indenter {
    out: Vec<u8>,
    depth: usize,
    in_string: bool,
    escaped: bool,
    // An opening bracket was written and its first element has not been seen yet
    pending_open: bool,
    // Separator whitespace owed after a `,` or `:`, written before the next token
    pending_newline: bool,
    pending_space: bool,
}

impl Indenter {
    fn with_capacity(len: usize) -> Self {
        Self {
            out: Vec::with_capacity(len * 2),
            depth: 0,
            in_string: false,
            escaped: false,
            pending_open: false,
            pending_newline: false,
            pending_space: false,
        }
    }

    fn push(&mut self, byte: u8) {
        if self.in_string {
            self.out.push(byte);
            if self.escaped {
                self.escaped = false;
            } else if byte == b'\\' {
                self.escaped = true;
            } else if byte == b'"' {
                self.in_string = false;
            }
            return;
        }

        if !matches!(byte, b' ' | b'\t' | b'\n' | b'\r') {
            self.flush_separator();
        }
        match byte {
            b' ' | b'\t' | b'\n' | b'\r' => {}
            b'{' | b'[' => {
                self.open_pending();
                self.out.push(byte);
                self.depth += 1;
                self.pending_open = true;
            }
            b'}' | b']' => {
                self.depth = self.depth.saturating_sub(1);
                if self.pending_open {
                    // empty container stays compact
                    self.pending_open = false;
                } else {
                    self.newline();
                }
                self.out.push(byte);
            }
            b',' => {
                self.out.push(byte);
                self.pending_newline = true;
            }
            b':' => {
                self.out.push(byte);
                self.pending_space = true;
            }
            _ => {
                self.open_pending();
                self.out.push(byte);
                self.in_string = byte == b'"';
            }
        }
    }

    fn open_pending(&mut self) {
        if self.pending_open {
            self.pending_open = false;
            self.newline();
        }
    }

    fn flush_separator(&mut self) {
        if self.pending_newline {
            self.pending_newline = false;
            self.newline();
        }
        if self.pending_space {
            self.pending_space = false;
            self.out.push(b' ');
        }
    }

    fn newline(&mut self) {
        self.out.push(b'\n');
        for _ in 0..self.depth {
            self.out.extend_from_slice(INDENT.as_bytes());
        }
    }
}
