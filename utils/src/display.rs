//! Short forms for on-screen listings.

/// Keep the head and tail of a long identifier: `0x1234...5678`.
pub fn shorten(s: &str, head: usize, tail: usize) -> String {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() <= head + tail + 3 {
        return s.to_string();
    }
    let start: String = chars[..head].iter().collect();
    let end: String = chars[chars.len() - tail..].iter().collect();
    format!("{start}...{end}")
}

/// `0x` plus four digits at each end.
pub fn shorten_hex(s: &str) -> String {
    shorten(s, 6, 4)
}
