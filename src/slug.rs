/// Turn a title into a URL-safe slug: lowercase ASCII alphanumerics with
/// single hyphens between words. Non-alphanumeric runs collapse to one
/// hyphen; leading/trailing hyphens are trimmed.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut last_was_hyphen = true;

    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            last_was_hyphen = false;
        } else if !last_was_hyphen {
            slug.push('-');
            last_was_hyphen = true;
        }
    }

    while slug.ends_with('-') {
        slug.pop();
    }

    if slug.is_empty() {
        // Titles with no ASCII alphanumerics still need a usable slug.
        "untitled".to_string()
    } else {
        slug
    }
}

/// Candidate slugs for de-duplication: `base`, `base-2`, `base-3`, ...
pub fn with_suffix(base: &str, attempt: u32) -> String {
    if attempt <= 1 {
        base.to_string()
    } else {
        format!("{base}-{attempt}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_lowercases_and_hyphenates() {
        assert_eq!(slugify("Instalasi Listrik Gedung"), "instalasi-listrik-gedung");
        assert_eq!(slugify("AC & Pendingin (Split)"), "ac-pendingin-split");
    }

    #[test]
    fn slugify_collapses_separator_runs() {
        assert_eq!(slugify("  IT -- Support!!  "), "it-support");
    }

    #[test]
    fn slugify_falls_back_for_empty_input() {
        assert_eq!(slugify("???"), "untitled");
    }

    #[test]
    fn suffix_starts_at_two() {
        assert_eq!(with_suffix("jaringan", 1), "jaringan");
        assert_eq!(with_suffix("jaringan", 2), "jaringan-2");
        assert_eq!(with_suffix("jaringan", 5), "jaringan-5");
    }
}
