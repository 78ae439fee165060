//! Slug derivation shared by every titled entity.
//!
//! Transliterate to ASCII, lowercase, collapse separator runs to single
//! dashes, strip leading/trailing dashes. Uniqueness is not checked here;
//! the unique index on each slug column rejects collisions at save time.

/// Derive a URL-safe slug from a title, truncated to `max_len` bytes.
pub fn slugify(title: &str, max_len: usize) -> String {
    let mut s = ::slug::slugify(title);
    if s.len() > max_len {
        s.truncate(max_len);
        // truncation may land on a dash
        while s.ends_with('-') {
            s.pop();
        }
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transliterates_and_lowercases() {
        assert_eq!(slugify("Œuf à la Coque", 60), "oeuf-a-la-coque");
        assert_eq!(slugify("Żurek śląski", 60), "zurek-slaski");
        assert_eq!(slugify("Crème Brûlée!", 60), "creme-brulee");
    }

    #[test]
    fn collapses_separators_and_trims_dashes() {
        assert_eq!(slugify("  Hello,   World!  ", 60), "hello-world");
        assert_eq!(slugify("--already--dashed--", 60), "already-dashed");
    }

    #[test]
    fn idempotent_on_its_own_output() {
        let once = slugify("Chicken & Rice (Large)", 60);
        assert_eq!(slugify(&once, 60), once);
    }

    #[test]
    fn truncates_without_trailing_dash() {
        let s = slugify("a very long title that keeps going on", 12);
        assert!(s.len() <= 12);
        assert!(!s.ends_with('-'));
        assert_eq!(s, "a-very-long");
    }
}
