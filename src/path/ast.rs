//! Parsed path representation.

use std::fmt;

use super::parser;

/// An ordered sequence of path segments.
///
/// Each segment is an opaque token; whether it names a mapping key or a
/// sequence index is decided at traversal time, against the container it is
/// applied to. Two paths are equal exactly when their segment sequences are
/// equal, however they were constructed.
///
/// # Example
///
/// ```
/// use objectpath::Path;
///
/// let parsed = Path::parse("projects[php][0]");
/// let built = Path::from_segments(["projects", "php", "0"]);
/// assert_eq!(parsed, built);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Path {
    segments: Vec<String>,
}

impl Path {
    /// Parses a path expression.
    ///
    /// Parsing is tolerant: it never fails, and malformed input degrades to
    /// a segment list that simply fails to resolve. A blank expression
    /// yields an empty path, which no operation can resolve.
    pub fn parse(expr: &str) -> Self {
        parser::parse(expr)
    }

    /// Builds a path directly from segments.
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the segments in order.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Splits into the container path (all but the last segment) and the
    /// final segment. Empty paths have neither.
    pub fn split_last(&self) -> Option<(&[String], &str)> {
        let (last, parents) = self.segments.split_last()?;
        Some((parents, last))
    }
}

impl From<&str> for Path {
    fn from(expr: &str) -> Self {
        Path::parse(expr)
    }
}

impl From<&Path> for Path {
    fn from(path: &Path) -> Self {
        path.clone()
    }
}

impl From<Vec<String>> for Path {
    fn from(segments: Vec<String>) -> Self {
        Self { segments }
    }
}

impl<S: Into<String>> FromIterator<S> for Path {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Path::from_segments(iter)
    }
}

impl fmt::Display for Path {
    /// Renders a canonical expression: all-digit segments in bracket form,
    /// other segments joined with `->`.
    ///
    /// ```
    /// use objectpath::Path;
    ///
    /// let path = Path::parse("projects->php[0]");
    /// assert_eq!(path.to_string(), "projects->php[0]");
    /// assert_eq!(Path::parse(&path.to_string()), path);
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, segment) in self.segments.iter().enumerate() {
            let indexish =
                !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit());
            if indexish {
                write!(f, "[{}]", segment)?;
            } else {
                if position > 0 {
                    write!(f, "->")?;
                }
                write!(f, "{}", segment)?;
            }
        }
        Ok(())
    }
}
