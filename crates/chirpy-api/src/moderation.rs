/// Words that get masked out of chirps. Compared against lowercased tokens.
const BANNED_WORDS: [&str; 3] = ["kerfuffle", "sharbert", "fornax"];

const MASK: &str = "****";

/// Replace every banned word in `text` with `****`.
///
/// Tokens are delimited by single spaces only, so punctuation sticks to its
/// word (`"Fornax!"` is left alone) and runs of spaces survive as empty
/// tokens. Leading and trailing spaces are trimmed from the result.
pub fn mask(text: &str) -> String {
    text.split(' ')
        .map(|token| {
            if BANNED_WORDS.contains(&token.to_lowercase().as_str()) {
                MASK
            } else {
                token
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
        .trim_matches(' ')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masks_banned_word() {
        assert_eq!(
            mask("This is a kerfuffle opinion I need to share with the world"),
            "This is a **** opinion I need to share with the world"
        );
    }

    #[test]
    fn match_is_case_insensitive_but_keeps_other_casing() {
        assert_eq!(
            mask("I hear Mastodon is better than Chirpy. sharbert I need to migrate"),
            "I hear Mastodon is better than Chirpy. **** I need to migrate"
        );
        assert_eq!(mask("FORNAX and Sharbert"), "**** and ****");
    }

    #[test]
    fn punctuation_prevents_match() {
        assert_eq!(mask("Fornax! kerfuffle."), "Fornax! kerfuffle.");
    }

    #[test]
    fn clean_text_is_unchanged() {
        let text = "I had something interesting for breakfast";
        assert_eq!(mask(text), text);
    }

    #[test]
    fn idempotent_on_clean_text() {
        for text in ["hello world", "  padded  ", "a  b", ""] {
            assert_eq!(mask(&mask(text)), mask(text));
        }
    }

    #[test]
    fn whitespace_edges() {
        assert_eq!(mask(""), "");
        assert_eq!(mask("  kerfuffle  "), "****");
        assert_eq!(mask("a  b"), "a  b");
        assert_eq!(mask("tab\tfornax"), "tab\tfornax");
    }
}
