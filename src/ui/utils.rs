use unicode_width::UnicodeWidthChar;

/// Safely truncate a string to a display width, appending "…" if truncated.
pub fn truncate(s: &str, max_width: usize) -> String {
    let mut width = 0;
    for c in s.chars() {
        width += c.width().unwrap_or(0);
    }
    if width <= max_width {
        return s.to_string();
    }

    let budget = max_width.saturating_sub(1);
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_strings_pass_through() {
        assert_eq!(truncate("abc", 10), "abc");
    }

    #[test]
    fn long_strings_get_ellipsis() {
        assert_eq!(truncate("abcdefgh", 5), "abcd…");
    }
}
