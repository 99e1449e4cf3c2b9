//! Turns normalized query tokens into a drink database URL.
//!
//! The database is queried through path segments, e.g.
//! `with/bourbon/or/tequila/and/pineapple-juice/skill/average`. Clauses are
//! delimited by anchor keywords in the user's message ("with", "that",
//! "want", ...) and the values inside a clause are joined by the
//! connectives "and"/"or".

use crate::config::BotConfig;

/// Index of whichever of two values appears first in `tokens`.
fn lowest_index_of_two(tokens: &[String], first: &str, second: &str) -> Option<usize> {
    let a = tokens.iter().position(|t| t == first);
    let b = tokens.iter().position(|t| t == second);
    match (a, b) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (Some(a), None) => Some(a),
        (None, Some(b)) => Some(b),
        (None, None) => None,
    }
}

/// Join a multi-word ingredient phrase into the single path segment the
/// database expects, e.g. `["pineapple", "juice"]` -> `"pineapple-juice"`.
fn merge_ingredients(tokens: &[String]) -> String {
    tokens.join("-")
}

/// Format clause tokens into path segments: split recursively at the
/// earliest "and"/"or", and hyphen-merge whatever lies between
/// connectives.
///
/// `["bourbon", "or", "tequila", "and", "pineapple", "juice"]` becomes
/// `["bourbon", "or", "tequila", "and", "pineapple-juice"]`.
pub fn format_params(tokens: &[String]) -> Vec<String> {
    if tokens.len() <= 1 {
        return tokens.to_vec();
    }
    match lowest_index_of_two(tokens, "and", "or") {
        None => vec![merge_ingredients(tokens)],
        Some(split) => {
            let mut formatted = format_params(&tokens[..split]);
            formatted.push(tokens[split].clone());
            formatted.extend(format_params(&tokens[split + 1..]));
            formatted
        }
    }
}

/// Turn formatted clause tokens into one URL chunk, optionally prefixed
/// with the database's clause keyword (`with`, `skill`, ...).
pub fn params_to_url(init_token: Option<&str>, params: &[String]) -> String {
    let mut segments = format_params(params);
    if let Some(init) = init_token {
        segments.insert(0, init.to_string());
    }
    segments.join("/")
}

/// The tokens strictly between the first `start_token` and the first
/// `end_token` occurring after it. Without `start_token` the result is
/// empty; without `end_token` it extends to the end of the sequence.
pub fn extract_between<'a>(
    tokens: &'a [String],
    start_token: &str,
    end_token: Option<&str>,
) -> &'a [String] {
    let Some(start) = tokens.iter().position(|t| t == start_token) else {
        return &[];
    };
    let rest = &tokens[start + 1..];
    let end = end_token
        .and_then(|end| rest.iter().position(|t| t == end))
        .unwrap_or(rest.len());
    &rest[..end]
}

/// Extract one clause from the query and render it as a URL chunk;
/// `None` when the clause's anchor keyword is absent.
fn url_params(
    query: &[String],
    init_token: Option<&str>,
    start_token: &str,
    end_token: Option<&str>,
) -> Option<String> {
    let params = extract_between(query, start_token, end_token);
    if params.is_empty() {
        None
    } else {
        Some(params_to_url(init_token, params))
    }
}

/// Convert a full query token sequence into the database URL.
///
/// A query naming a specific drink ("want ...") is looked up directly;
/// otherwise up to four clauses are extracted — ingredients, taste, skill
/// level and rating threshold — and absent clauses are simply omitted.
pub fn query_to_url(query: &[String], config: &BotConfig) -> String {
    let mut chunks = vec![config.base_url.clone()];
    if query.iter().any(|t| t == "want") {
        chunks.extend(url_params(query, None, "want", None));
    } else {
        chunks.extend(url_params(query, Some("with"), "with", Some("that")));
        chunks.extend(url_params(query, Some("tasting"), "me", Some("drink")));
        chunks.extend(url_params(query, Some("skill"), "takes", Some("skill")));
        chunks.extend(url_params(query, Some("rating"), "given", Some("rating")));
    }
    chunks.push(format!("?ApiKey={}", config.addb_api_key));
    chunks.join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_extract_between_missing_start_is_empty() {
        let tokens = toks(&["bourbon", "and", "cola"]);
        assert!(extract_between(&tokens, "with", Some("that")).is_empty());
    }

    #[test]
    fn test_extract_between_missing_end_extends_to_end() {
        let tokens = toks(&["want", "pineapple", "juice"]);
        assert_eq!(
            extract_between(&tokens, "want", None),
            &toks(&["pineapple", "juice"])[..]
        );
    }

    #[test]
    fn test_extract_between_end_before_start_is_ignored() {
        // "drink" also occurs before "me"; only the one after counts
        let tokens = toks(&["drink", "me", "sour", "drink"]);
        assert_eq!(
            extract_between(&tokens, "me", Some("drink")),
            &toks(&["sour"])[..]
        );
    }

    #[test]
    fn test_format_params_splits_at_earliest_connective() {
        let tokens = toks(&["gin", "or", "vodka", "and", "cola"]);
        assert_eq!(
            format_params(&tokens),
            toks(&["gin", "or", "vodka", "and", "cola"])
        );

        let tokens = toks(&["lime", "juice", "and", "dark", "rum"]);
        assert_eq!(
            format_params(&tokens),
            toks(&["lime-juice", "and", "dark-rum"])
        );
    }

    #[test]
    fn test_format_params_no_connective_merges_phrase() {
        let tokens = toks(&["pineapple", "juice"]);
        assert_eq!(format_params(&tokens), toks(&["pineapple-juice"]));
    }

    #[test]
    fn test_format_params_single_token_unchanged() {
        let tokens = toks(&["bourbon"]);
        assert_eq!(format_params(&tokens), toks(&["bourbon"]));
        assert!(format_params(&[]).is_empty());
    }

    #[test]
    fn test_params_to_url_prepends_init_token() {
        let params = toks(&["bourbon", "and", "coconut", "water", "or", "tequila"]);
        assert_eq!(
            params_to_url(Some("with"), &params),
            "with/bourbon/and/coconut-water/or/tequila"
        );
        assert_eq!(params_to_url(None, &toks(&["negroni"])), "negroni");
    }

    #[test]
    fn test_query_to_url_omits_absent_clauses() {
        let config = BotConfig {
            base_url: "http://db/drinks".to_string(),
            addb_api_key: "key".to_string(),
            ..BotConfig::default()
        };
        let query = toks(&["make", "me", "drink", "with", "cola"]);
        assert_eq!(
            query_to_url(&query, &config),
            "http://db/drinks/with/cola/?ApiKey=key"
        );
    }
}
