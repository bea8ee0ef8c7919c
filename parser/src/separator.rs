//! Field separators for paired lines, tried in a fixed priority order.

/// A separator between the address and amount fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Separator {
    Comma,
    Colon,
    /// One or more whitespace characters.
    Whitespace,
}

impl Separator {
    /// Detection order. The first kind present anywhere in the line wins,
    /// so `a,b:c` splits on the comma.
    pub const PRIORITY: [Separator; 3] = [Self::Comma, Self::Colon, Self::Whitespace];

    /// The highest-priority separator present in `line`.
    pub fn detect(line: &str) -> Option<Self> {
        Self::PRIORITY.into_iter().find(|sep| sep.position(line).is_some())
    }

    /// Byte offset and byte length of the first occurrence in `line`.
    fn position(&self, line: &str) -> Option<(usize, usize)> {
        match self {
            Self::Comma => line.find(',').map(|i| (i, 1)),
            Self::Colon => line.find(':').map(|i| (i, 1)),
            Self::Whitespace => {
                let start = line.find(char::is_whitespace)?;
                let run = line[start..]
                    .find(|c: char| !c.is_whitespace())
                    .unwrap_or(line.len() - start);
                Some((start, run))
            }
        }
    }

    /// The first two untrimmed fields of `line`.
    ///
    /// The second field ends at the next occurrence of the same separator;
    /// anything after it is ignored. Returns `None` if this separator does
    /// not occur in `line`.
    pub fn split<'a>(&self, line: &'a str) -> Option<(&'a str, &'a str)> {
        let (at, len) = self.position(line)?;
        let rest = &line[at + len..];
        let end = self.position(rest).map_or(rest.len(), |(next, _)| next);
        Some((&line[..at], &rest[..end]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comma_beats_colon_and_whitespace() {
        assert_eq!(Separator::detect("a : b, c"), Some(Separator::Comma));
        assert_eq!(Separator::detect("a b:c"), Some(Separator::Colon));
        assert_eq!(Separator::detect("a \t b"), Some(Separator::Whitespace));
        assert_eq!(Separator::detect("ab"), None);
    }

    #[test]
    fn keeps_only_the_first_two_fields() {
        assert_eq!(Separator::Comma.split("a,b,c"), Some(("a", "b")));
        assert_eq!(Separator::Colon.split("a:b"), Some(("a", "b")));
        assert_eq!(Separator::Colon.split("a: b :c"), Some(("a", " b ")));
        assert_eq!(Separator::Comma.split("a,"), Some(("a", "")));
        assert_eq!(Separator::Comma.split("ab"), None);
    }

    #[test]
    fn whitespace_run_is_one_separator() {
        assert_eq!(Separator::Whitespace.split("a  \t b"), Some(("a", "b")));
        assert_eq!(Separator::Whitespace.split("a b c"), Some(("a", "b")));
        assert_eq!(Separator::Whitespace.split("a   "), Some(("a", "")));
        assert_eq!(Separator::Whitespace.split("  a b"), Some(("", "a")));
    }
}
