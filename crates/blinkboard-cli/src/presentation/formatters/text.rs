/// Collapse newlines and clip to `max` characters with an ellipsis.
pub fn truncate(s: &str, max: usize) -> String {
    let flat = s.replace(['\n', '\r'], " ");
    if flat.chars().count() <= max {
        return flat;
    }

    let clipped: String = flat.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", clipped.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_strings_pass_through() {
        assert_eq!(truncate("hello", 10), "hello");
    }

    #[test]
    fn test_long_strings_are_clipped() {
        assert_eq!(truncate("a fierce and determined blink", 10), "a fierce…");
    }
}
