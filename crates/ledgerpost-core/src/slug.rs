//! URL slug derivation and checks

use std::sync::OnceLock;

use regex::Regex;

fn whitespace_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("valid regex"))
}

fn hyphen_run_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"-{2,}").expect("valid regex"))
}

fn slug_shape_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("valid regex"))
}

/// Derive a slug from a title.
///
/// Lowercases, turns whitespace runs into a single hyphen and drops anything
/// that is not an ASCII letter, digit or hyphen. May return an empty string
/// for titles with no usable characters.
pub fn slugify(title: &str) -> String {
    let lowered = title.trim().to_lowercase();
    let hyphenated = whitespace_re().replace_all(&lowered, "-");
    let kept: String = hyphenated
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-')
        .collect();
    hyphen_run_re()
        .replace_all(&kept, "-")
        .trim_matches('-')
        .to_string()
}

/// Whether a slug is lowercase ASCII words joined by single hyphens
pub fn is_url_safe(slug: &str) -> bool {
    slug_shape_re().is_match(slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_basic() {
        assert_eq!(
            slugify("Year-End Tax Planning Checklist"),
            "year-end-tax-planning-checklist"
        );
        assert_eq!(slugify("Talking Points: Q4 2023"), "talking-points-q4-2023");
    }

    #[test]
    fn test_slugify_collapses_whitespace_and_punctuation() {
        assert_eq!(slugify("  Cash   Flow\tTips  "), "cash-flow-tips");
        assert_eq!(slugify("P&L - What's Next?"), "pl-whats-next");
    }

    #[test]
    fn test_slugify_empty_when_nothing_usable() {
        assert_eq!(slugify("!!!"), "");
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn test_slugify_output_is_url_safe() {
        for title in ["Understanding CRA Audit Process", "IFRS Updates 2024: What You Need to Know"] {
            assert!(is_url_safe(&slugify(title)), "{}", title);
        }
    }

    #[test]
    fn test_is_url_safe() {
        assert!(is_url_safe("budget-2024-tax-changes"));
        assert!(!is_url_safe("Budget-2024"));
        assert!(!is_url_safe("has space"));
        assert!(!is_url_safe("trailing-"));
        assert!(!is_url_safe(""));
    }
}
