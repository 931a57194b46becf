/// Builds a URL slug: lowercase ASCII alphanumerics with single dashes between words.
///
/// Characters outside `[A-Za-z0-9]` act as separators, so titles written entirely in
/// other scripts produce an empty slug.
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut pending_dash = false;

    for ch in input.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_joins_words() {
        assert_eq!(slugify("Dubai City Tour"), "dubai-city-tour");
    }

    #[test]
    fn collapses_separator_runs_and_trims() {
        assert_eq!(slugify("  Paris -- 5 Days!! "), "paris-5-days");
    }

    #[test]
    fn drops_non_ascii() {
        assert_eq!(slugify("Café Crème"), "caf-cr-me");
        assert_eq!(slugify("رحلة"), "");
    }
}
