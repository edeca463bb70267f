/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Bracket matching over JavaScript source
//!
//! Skips string literals (`"`, `'`, backticks) and comments so braces inside
//! tooltips, callbacks or URLs do not unbalance the scan.

/// Returns the byte index of the bracket closing the one at `open`
///
/// `open` must point at `{`, `[` or `(`. Returns `None` when the source ends
/// before the bracket is closed.
pub fn matching_close(src: &str, open: usize) -> Option<usize> {
    let bytes = src.as_bytes();
    let (open_ch, close_ch) = match bytes.get(open)? {
        b'{' => (b'{', b'}'),
        b'[' => (b'[', b']'),
        b'(' => (b'(', b')'),
        _ => return None,
    };
    let mut depth = 0usize;
    let mut i = open;
    while i < bytes.len() {
        match bytes[i] {
            b'"' | b'\'' | b'`' => i = skip_string(bytes, i),
            b'/' if bytes.get(i + 1) == Some(&b'/') => i = skip_line_comment(bytes, i),
            b'/' if bytes.get(i + 1) == Some(&b'*') => i = skip_block_comment(bytes, i),
            c if c == open_ch => depth += 1,
            c if c == close_ch => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
        i += 1;
    }
    None
}

/// Returns the slice from the bracket at `open` to its closing bracket,
/// both included
pub fn balanced_slice(src: &str, open: usize) -> Option<&str> {
    let close = matching_close(src, open)?;
    src.get(open..=close)
}

/// Nesting depth of `{`/`[` at byte `pos`, counted from the start of `src`
pub fn depth_at(src: &str, pos: usize) -> usize {
    let bytes = src.as_bytes();
    let end = pos.min(bytes.len());
    let mut depth = 0usize;
    let mut i = 0;
    while i < end {
        match bytes[i] {
            b'"' | b'\'' | b'`' => i = skip_string(bytes, i),
            b'/' if bytes.get(i + 1) == Some(&b'/') => i = skip_line_comment(bytes, i),
            b'/' if bytes.get(i + 1) == Some(&b'*') => i = skip_block_comment(bytes, i),
            b'{' | b'[' => depth += 1,
            b'}' | b']' => depth = depth.saturating_sub(1),
            _ => {}
        }
        i += 1;
    }
    depth
}

/// Index of the first byte at or after `from` equal to `target` that is not
/// inside a string or comment
pub fn find_code_byte(src: &str, from: usize, target: u8) -> Option<usize> {
    let bytes = src.as_bytes();
    let mut i = from;
    while i < bytes.len() {
        match bytes[i] {
            c if c == target => return Some(i),
            b'"' | b'\'' | b'`' => i = skip_string(bytes, i),
            b'/' if bytes.get(i + 1) == Some(&b'/') => i = skip_line_comment(bytes, i),
            b'/' if bytes.get(i + 1) == Some(&b'*') => i = skip_block_comment(bytes, i),
            _ => {}
        }
        i += 1;
    }
    None
}

// Each skip returns the index of the last byte of the skipped construct.

fn skip_string(bytes: &[u8], start: usize) -> usize {
    let quote = bytes[start];
    let mut i = start + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 1,
            c if c == quote => return i,
            _ => {}
        }
        i += 1;
    }
    bytes.len().saturating_sub(1)
}

fn skip_line_comment(bytes: &[u8], start: usize) -> usize {
    bytes[start..]
        .iter()
        .position(|&b| b == b'\n')
        .map_or(bytes.len().saturating_sub(1), |p| start + p)
}

fn skip_block_comment(bytes: &[u8], start: usize) -> usize {
    let mut i = start + 2;
    while i + 1 < bytes.len() {
        if bytes[i] == b'*' && bytes[i + 1] == b'/' {
            return i + 1;
        }
        i += 1;
    }
    bytes.len().saturating_sub(1)
}
