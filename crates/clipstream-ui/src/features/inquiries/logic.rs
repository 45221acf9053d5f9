//! Inquiry form parsing helpers.
//!
//! # Design
//! - Treat whitespace-only inputs as empty.
//! - Validate lengths client-side to match API expectations.
//! - Keep parsing centralized so the create and update paths agree.

const TITLE_MAX: usize = 120;
const CONTENT_MAX: usize = 2_000;

pub(crate) fn parse_title(value: &str) -> Result<String, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err("title is required".to_string());
    }
    if trimmed.chars().count() > TITLE_MAX {
        return Err(format!("title must be at most {TITLE_MAX} characters"));
    }
    Ok(trimmed.to_string())
}

pub(crate) fn parse_content(value: &str) -> Result<String, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err("content is required".to_string());
    }
    if trimmed.chars().count() > CONTENT_MAX {
        return Err(format!("content must be at most {CONTENT_MAX} characters"));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::{CONTENT_MAX, TITLE_MAX, parse_content, parse_title};

    #[test]
    fn titles_are_trimmed() {
        assert_eq!(parse_title("  Playback stutters  ").as_deref(), Ok("Playback stutters"));
    }

    #[test]
    fn blank_title_is_rejected() {
        assert!(parse_title("   ").is_err());
    }

    #[test]
    fn overlong_title_is_rejected() {
        let long = "a".repeat(TITLE_MAX + 1);
        assert!(parse_title(&long).is_err());
        let max = "a".repeat(TITLE_MAX);
        assert!(parse_title(&max).is_ok());
    }

    #[test]
    fn content_bounds_are_enforced() {
        assert!(parse_content("").is_err());
        assert!(parse_content(&"b".repeat(CONTENT_MAX)).is_ok());
        assert!(parse_content(&"b".repeat(CONTENT_MAX + 1)).is_err());
    }
}
