//! Physical-line helpers shared by field injection and the anchor patcher.
//!
//! Lines are split with their terminators attached so that everything outside
//! the insertion point round-trips byte for byte.

/// Index of the first line containing `needle`.
pub fn find_line(content: &str, needle: &str) -> Option<usize> {
    content.split_inclusive('\n').position(|line| line.contains(needle))
}

/// The line at `index`, without its terminator.
pub fn line_at(content: &str, index: usize) -> Option<&str> {
    content
        .split_inclusive('\n')
        .nth(index)
        .map(|line| line.trim_end_matches(['\n', '\r']))
}

/// Leading spaces and tabs of a line.
pub fn indentation(line: &str) -> &str {
    let end = line
        .find(|c: char| c != ' ' && c != '\t')
        .unwrap_or(line.len());
    &line[..end]
}

/// Insert `rows` after the line at `index`.
///
/// Rows take the line ending of the line they follow. When that line is the
/// last one and has no terminator, one is added before the rows and the file
/// keeps ending without a newline.
pub fn insert_after(content: &str, index: usize, rows: &[String]) -> String {
    if rows.is_empty() {
        return content.to_string();
    }

    let extra: usize = rows.iter().map(|r| r.len() + 2).sum();
    let mut out = String::with_capacity(content.len() + extra);

    for (i, line) in content.split_inclusive('\n').enumerate() {
        out.push_str(line);
        if i != index {
            continue;
        }

        let eol = line_ending(line);
        if eol.is_empty() {
            for row in rows {
                out.push('\n');
                out.push_str(row);
            }
        } else {
            for row in rows {
                out.push_str(row);
                out.push_str(eol);
            }
        }
    }

    out
}

fn line_ending(line: &str) -> &'static str {
    if line.ends_with("\r\n") {
        "\r\n"
    } else if line.ends_with('\n') {
        "\n"
    } else {
        ""
    }
}
