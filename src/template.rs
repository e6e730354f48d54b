use crate::consts::TEMPLATE_RE;
use eyre::{Report, eyre};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A reusable filename pattern: a literal prefix, a fixed-width zero-padded
/// index field, and a literal suffix.
///
/// The canonical string form writes the index field as a run of `#`
/// placeholders, one per digit, so `foo_####.cbf` names the four-digit
/// family `foo_0000.cbf` .. `foo_9999.cbf`. `Display` produces that form and
/// `FromStr` parses it back.
///
/// # Examples
///
/// ```
/// use framesweep::Template;
///
/// let t: Template = "foo_####.cbf".parse()?;
/// assert_eq!(t.render(1), "foo_0001.cbf");
/// assert_eq!(t.index_of("foo_0042.cbf"), Some(42));
/// assert_eq!(t.index_of("foo_42.cbf"), None);
/// # Ok::<(), eyre::Report>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Template {
    /// Literal text before the index field.
    prefix: String,
    /// Width of the index field; always at least one.
    digits: usize,
    /// Literal text after the index field.
    suffix: String,
}

impl Template {
    /// Build a template from its parts. `digits` is the placeholder count
    /// and must be at least one.
    pub fn new(prefix: impl Into<String>, digits: usize, suffix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            digits,
            suffix: suffix.into(),
        }
    }

    /// Literal text before the index field.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Width of the zero-padded index field.
    pub fn digit_count(&self) -> usize {
        self.digits
    }

    /// Literal text after the index field.
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Render the filename carrying `index`, zero-padded to the template
    /// width. An index wider than the field renders at its natural width.
    pub fn render(&self, index: u64) -> String {
        format!(
            "{}{:0width$}{}",
            self.prefix,
            index,
            self.suffix,
            width = self.digits
        )
    }

    /// The index `name` carries under this template, or `None` unless the
    /// name is an exact instance: the prefix, exactly `digit_count` ASCII
    /// digits, and the suffix.
    pub fn index_of(&self, name: &str) -> Option<u64> {
        let rest = name.strip_prefix(self.prefix.as_str())?;
        let field = rest.strip_suffix(self.suffix.as_str())?;
        if field.len() != self.digits || !field.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        field.parse().ok()
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.prefix, "#".repeat(self.digits), self.suffix)
    }
}

impl FromStr for Template {
    type Err = Report;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = TEMPLATE_RE
            .captures(s)
            .ok_or_else(|| eyre!("not a filename template: {s:?}"))?;
        Ok(Self {
            prefix: caps[1].to_string(),
            digits: caps[2].len(),
            suffix: caps[3].to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_round_trip() {
        let t = Template::new("a_", 3, ".img");
        assert_eq!(t.to_string(), "a_###.img");
        assert_eq!("a_###.img".parse::<Template>().unwrap(), t);

        let bare = Template::new("image.", 4, "");
        assert_eq!(bare.to_string(), "image.####");
        assert_eq!("image.####".parse::<Template>().unwrap(), bare);
    }

    #[test]
    fn parse_rejects_malformed_strings() {
        assert!("plain.cbf".parse::<Template>().is_err());
        assert!("a#b#c.img".parse::<Template>().is_err());
        assert!("".parse::<Template>().is_err());
    }

    #[test]
    fn render_pads_to_width() {
        let t = Template::new("a_", 3, ".img");
        assert_eq!(t.render(0), "a_000.img");
        assert_eq!(t.render(7), "a_007.img");
        assert_eq!(t.render(999), "a_999.img");
        // printf-style minimum width: wider indices are not truncated
        assert_eq!(t.render(12345), "a_12345.img");
    }

    #[test]
    fn index_of_requires_exact_instances() {
        let t = Template::new("a_", 3, ".img");
        assert_eq!(t.index_of("a_001.img"), Some(1));
        assert_eq!(t.index_of("a_000.img"), Some(0));
        assert_eq!(t.index_of("a_0001.img"), None);
        assert_eq!(t.index_of("a_01.img"), None);
        assert_eq!(t.index_of("a_abc.img"), None);
        assert_eq!(t.index_of("b_001.img"), None);
        assert_eq!(t.index_of("a_001.tif"), None);
        assert_eq!(t.index_of("a_001"), None);
    }

    #[test]
    fn index_of_inverts_render() {
        let t = Template::new("scan", 5, ".cbf");
        for index in [0, 7, 42, 99_999] {
            assert_eq!(t.index_of(&t.render(index)), Some(index));
        }
    }
}
