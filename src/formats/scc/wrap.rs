/*!
 * Word wrapping for fixed-width caption rows.
 */

/// Columns available on a caption row
pub const MAX_LINE_LENGTH: usize = 32;

/// Wrap every line to at most `limit` characters.
///
/// Each line breaks at the last space inside the first `limit` characters; the
/// space itself is consumed. A line with no such space is cut at exactly `limit`
/// characters. The final remainder is always emitted, so an empty line yields
/// one empty piece.
pub fn wrap_lines<S: AsRef<str>>(lines: &[S], limit: usize) -> Vec<String> {
    let mut result = Vec::with_capacity(lines.len());
    for line in lines {
        wrap_line_into(line.as_ref(), limit, &mut result);
    }
    result
}

/// Wrap a single line, see [`wrap_lines`]
pub fn wrap_line(line: &str, limit: usize) -> Vec<String> {
    let mut result = Vec::new();
    wrap_line_into(line, limit, &mut result);
    result
}

fn wrap_line_into(line: &str, limit: usize, out: &mut Vec<String>) {
    let limit = limit.max(1);
    let mut rest = line;

    while rest.chars().count() > limit {
        // byte offset just past the first `limit` characters
        let window_end = rest
            .char_indices()
            .nth(limit)
            .map_or(rest.len(), |(idx, _)| idx);

        match rest[..window_end].rfind(' ') {
            Some(space) => {
                out.push(rest[..space].to_string());
                rest = &rest[space + 1..];
            }
            None => {
                out.push(rest[..window_end].to_string());
                rest = &rest[window_end..];
            }
        }
    }

    out.push(rest.to_string());
}
