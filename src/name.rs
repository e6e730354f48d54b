use crate::template::Template;

/// Infer the naming template behind a single frame filename.
///
/// Three shapes are recognised, tried in this order:
///
/// 1. a bare numeric extension: `image.0001` -> `image.####`;
/// 2. an underscore-delimited run before a dot: `foo_0001.cbf` -> `foo_####.cbf`;
/// 3. any digit run butting up against a dot: `scan0005.cbf` -> `scan####.cbf`.
///
/// The first shape that matches decides the split; a name matching none of
/// them (`README`, `b.dat`) has no template and yields `None`. The returned
/// index is the digit run read as decimal, so `foo_0001.cbf` carries index 1
/// while the leading zeros live on in the template width.
pub fn infer_template(name: &str) -> Option<(Template, u64)> {
    let found = numeric_extension(name)
        .or_else(|| digits_before_dot(name, true))
        .or_else(|| digits_before_dot(name, false));
    if let Some((template, index)) = &found {
        tracing::trace!(name, template = %template, index = *index);
    }
    found
}

/// A trailing digit run forming the whole extension, e.g. `image.0001`.
/// The dot stays on the prefix and the suffix is empty.
fn numeric_extension(name: &str) -> Option<(Template, u64)> {
    let bytes = name.as_bytes();
    let start = run_start(bytes, bytes.len());
    if start == bytes.len() || start == 0 || bytes[start - 1] != b'.' {
        return None;
    }
    let index = name[start..].parse().ok()?;
    Some((Template::new(&name[..start], bytes.len() - start, ""), index))
}

/// A digit run ending right at a dot, e.g. `foo_0001.cbf`. The first
/// qualifying dot in the name wins, binding the longest run that touches it;
/// with `delimited` the run must also sit directly after a `_`.
fn digits_before_dot(name: &str, delimited: bool) -> Option<(Template, u64)> {
    let bytes = name.as_bytes();
    for dot in 0..bytes.len() {
        if bytes[dot] != b'.' {
            continue;
        }
        let start = run_start(bytes, dot);
        if start == dot {
            continue;
        }
        if delimited && (start == 0 || bytes[start - 1] != b'_') {
            continue;
        }
        let index = name[start..dot].parse().ok()?;
        return Some((
            Template::new(&name[..start], dot - start, &name[dot..]),
            index,
        ));
    }
    None
}

/// Start of the maximal ASCII digit run ending just before `end`.
fn run_start(bytes: &[u8], end: usize) -> usize {
    let mut start = end;
    while start > 0 && bytes[start - 1].is_ascii_digit() {
        start -= 1;
    }
    start
}
