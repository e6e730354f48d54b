use regex::Regex;
use std::sync::LazyLock;

/// Splits a canonical template string like `scan_###.cbf` into its literal
/// prefix, placeholder run, and literal suffix. Placeholders must form one
/// contiguous run.
pub static TEMPLATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([^#]*)(#+)([^#]*)$").unwrap());
