//! Name paths parsed from import lines

use std::fmt;

/// Separator between category names in a name path
pub const SEPARATOR: char = '/';

/// Category names from the top of the store tree down, one per level
///
/// Parsing trims the line and the whitespace next to each separator, so
/// `" Men  /  Shoes "` and `"Men/Shoes"` are the same path. An empty line
/// parses to a single empty segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NamePath {
    segments: Vec<String>,
}

impl NamePath {
    pub fn parse(line: &str) -> Self {
        Self {
            segments: line
                .trim()
                .split(SEPARATOR)
                .map(|segment| segment.trim().to_string())
                .collect(),
        }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Cache keys of every prefix, shortest first, paired with the last segment
    ///
    /// `A/B/C` yields `("A", "A")`, `("A/B", "B")`, `("A/B/C", "C")`.
    pub fn prefixes(&self) -> Prefixes<'_> {
        Prefixes {
            segments: &self.segments,
            key: String::new(),
            next: 0,
        }
    }

    /// Normalized key of the whole path
    pub fn key(&self) -> String {
        self.segments.join("/")
    }
}

impl fmt::Display for NamePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key())
    }
}

/// Iterator over the prefixes of a [`NamePath`]
pub struct Prefixes<'a> {
    segments: &'a [String],
    key: String,
    next: usize,
}

impl<'a> Iterator for Prefixes<'a> {
    type Item = (String, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let segment = self.segments.get(self.next)?;
        if self.next > 0 {
            self.key.push(SEPARATOR);
        }
        self.key.push_str(segment);
        self.next += 1;
        Some((self.key.clone(), segment.as_str()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.segments.len() - self.next;
        (left, Some(left))
    }
}
