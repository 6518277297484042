//! URL slug generation from post titles
//!
//! Slugs are recomputed from the title on every save; they are a pure
//! function of the title, never edited independently.

/// Generate a URL-safe slug from a title.
///
/// Lowercases the input, drops every character that is not a lowercase
/// ASCII letter, digit, space, or hyphen, then collapses whitespace and
/// hyphen runs into single hyphens and trims hyphens from the ends.
///
/// Total and idempotent; an empty title yields an empty slug.
///
/// # Examples
///
/// ```
/// use pressroom::slug::slugify;
///
/// assert_eq!(slugify("Hello, World!  Foo--Bar"), "hello-world-foo-bar");
/// assert_eq!(slugify("Already-A-Slug"), "already-a-slug");
/// ```
pub fn slugify(title: &str) -> String {
    title
        .to_lowercase()
        .chars()
        .filter_map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() {
                Some(c)
            } else if c == ' ' || c == '-' {
                Some('-')
            } else {
                None
            }
        })
        .collect::<String>()
        .split('-')
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_example() {
        assert_eq!(slugify("Hello, World!  Foo--Bar"), "hello-world-foo-bar");
    }

    #[test]
    fn test_idempotent() {
        let samples = [
            "Hello, World!  Foo--Bar",
            "  Leading and trailing  ",
            "Ünïcödé Títle",
            "----",
            "",
            "Already-a-slug",
            "MiXeD CaSe 123",
        ];
        for sample in samples {
            let once = slugify(sample);
            assert_eq!(slugify(&once), once, "not idempotent for {sample:?}");
        }
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("   "), "");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn test_non_ascii_letters_are_dropped() {
        assert_eq!(slugify("Café au lait"), "caf-au-lait");
    }

    #[test]
    fn test_digits_survive() {
        assert_eq!(slugify("Top 10 Posts of 2025"), "top-10-posts-of-2025");
    }

    #[test]
    fn test_hyphen_runs_collapse() {
        assert_eq!(slugify("a -- b - - c"), "a-b-c");
        assert_eq!(slugify("-edges-"), "edges");
    }
}
