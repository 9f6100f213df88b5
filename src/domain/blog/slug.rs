use once_cell::sync::Lazy;
use regex::Regex;

static DISALLOWED: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9\s-]").unwrap());
static SEPARATORS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\s-]+").unwrap());

/// Derives a URL-safe slug from a title
///
/// Lowercases, drops everything outside `[a-z0-9]`, whitespace and hyphens,
/// then collapses runs of whitespace and hyphens into a single hyphen.
/// Leading and trailing hyphens are removed. The transform is idempotent.
///
/// # Example
/// ```
/// use portfolio_api::domain::blog::generate_slug;
///
/// assert_eq!(generate_slug("Hello, World! 2024"), "hello-world-2024");
/// ```
pub fn generate_slug(title: &str) -> String {
    let lowered = title.to_lowercase();
    let cleaned = DISALLOWED.replace_all(&lowered, "");
    let hyphenated = SEPARATORS.replace_all(cleaned.trim(), "-");
    hyphenated.trim_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn punctuation_is_dropped() {
        assert_eq!(generate_slug("Hello, World! 2024"), "hello-world-2024");
    }

    #[test]
    fn whitespace_runs_collapse() {
        assert_eq!(generate_slug("  multiple   spaces "), "multiple-spaces");
    }

    #[test]
    fn hyphen_runs_collapse() {
        assert_eq!(generate_slug("rust -- the -  book"), "rust-the-book");
        assert_eq!(generate_slug("--edge--"), "edge");
    }

    #[test]
    fn non_ascii_letters_are_removed() {
        assert_eq!(generate_slug("Café Über"), "caf-ber");
    }

    #[test]
    fn empty_title_gives_empty_slug() {
        assert_eq!(generate_slug(""), "");
        assert_eq!(generate_slug("!!!"), "");
    }

    #[test]
    fn slug_is_idempotent() {
        for title in ["Hello, World! 2024", "  a  b  ", "already-a-slug", "Tabs\tand\nlines"] {
            let once = generate_slug(title);
            assert_eq!(generate_slug(&once), once);
        }
    }
}
