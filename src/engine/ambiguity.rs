//! Detection of formatted strings that split into placeholders more than one way

use tracing::debug;

use crate::error::{Candidate, FormatError};

/// Message used when `parse` finds an alternative split
pub(crate) const PARSE_AMBIGUOUS: &str = "parsing is ambiguous:";

/// Message used when `vformat` would produce an unparseable string
pub(crate) const FORMAT_AMBIGUOUS: &str =
    "refusing to format because parsing would be ambiguous:";

/// Another `(left, right)` split of `left + intermediate + right`, if one exists
fn alternative_split(left: &str, right: &str, intermediate: &str) -> Option<(String, String)> {
    if intermediate.is_empty() {
        // Any boundary works; move a single character across it.
        if let Some(c) = right.chars().next() {
            return Some((format!("{left}{c}"), right[c.len_utf8()..].to_string()));
        }
        let c = left.chars().next_back()?;
        let cut = left.len() - c.len_utf8();
        return Some((left[..cut].to_string(), format!("{c}{right}")));
    }

    if let Some(i) = right.find(intermediate) {
        return Some((
            format!("{left}{intermediate}{}", &right[..i]),
            right[i + intermediate.len()..].to_string(),
        ));
    }

    let i = left.find(intermediate)?;
    Some((
        left[..i].to_string(),
        format!("{}{intermediate}{right}", &left[i + intermediate.len()..]),
    ))
}

/// Check one pair of adjacent placeholders and the literal text between them
///
/// Each side is a `(name, value)` pair.
pub(crate) fn check_pair(
    left: (&str, &str),
    right: (&str, &str),
    intermediate: &str,
    message: &str,
) -> Result<(), FormatError> {
    let Some((alt_left, alt_right)) = alternative_split(left.1, right.1, intermediate) else {
        return Ok(());
    };

    debug!(left = left.0, right = right.0, intermediate, "ambiguous placeholder pair");
    let original: Candidate = vec![
        (left.0.to_string(), left.1.to_string()),
        (right.0.to_string(), right.1.to_string()),
    ];
    let alternative: Candidate = vec![(left.0.to_string(), alt_left), (right.0.to_string(), alt_right)];
    Err(FormatError::ambiguous(message, vec![original, alternative]))
}

/// Check every adjacent pair in a dissected template
///
/// `values[i]` is the `(name, value)` of the i-th placeholder and
/// `literals[i]` the text before it, so `literals[i + 1]` separates
/// placeholders `i` and `i + 1`. Only neighbours are compared.
pub(crate) fn check_sequence(
    values: &[(&str, &str)],
    literals: &[&str],
    message: &str,
) -> Result<(), FormatError> {
    for (pair, intermediate) in values.windows(2).zip(literals.iter().skip(1)) {
        check_pair(pair[0], pair[1], intermediate, message)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn candidates(err: FormatError) -> Vec<Candidate> {
        match err {
            FormatError::Ambiguous { candidates, .. } => candidates,
            other => panic!("expected ambiguity, got: {other}"),
        }
    }

    fn pair(a: &str, b: &str) -> Candidate {
        vec![("a".to_string(), a.to_string()), ("b".to_string(), b.to_string())]
    }

    #[test]
    fn test_separator_inside_right_value() {
        let err = check_pair(("a", "x"), ("b", "y-z"), "-", PARSE_AMBIGUOUS).unwrap_err();
        assert_eq!(candidates(err), vec![pair("x", "y-z"), pair("x-y", "z")]);
    }

    #[test]
    fn test_separator_inside_left_value() {
        let err = check_pair(("a", "x-y"), ("b", "z"), "-", PARSE_AMBIGUOUS).unwrap_err();
        assert_eq!(candidates(err), vec![pair("x-y", "z"), pair("x", "y-z")]);
    }

    #[test]
    fn test_separator_absent_is_unambiguous() {
        assert!(check_pair(("a", "x"), ("b", "y"), "-", PARSE_AMBIGUOUS).is_ok());
    }

    #[test]
    fn test_empty_separator_moves_one_character() {
        let err = check_pair(("a", "xyz"), ("b", ""), "", PARSE_AMBIGUOUS).unwrap_err();
        assert_eq!(candidates(err), vec![pair("xyz", ""), pair("xy", "z")]);

        let err = check_pair(("a", "x"), ("b", "éz"), "", PARSE_AMBIGUOUS).unwrap_err();
        assert_eq!(candidates(err), vec![pair("x", "éz"), pair("xé", "z")]);
    }

    #[test]
    fn test_empty_values_with_empty_separator() {
        assert!(check_pair(("a", ""), ("b", ""), "", PARSE_AMBIGUOUS).is_ok());
    }

    #[test]
    fn test_sequence_checks_neighbours_only() {
        let values = [("a", "1"), ("b", "2"), ("c", "3")];
        let literals = ["", "-", "+", ""];
        assert!(check_sequence(&values, &literals, PARSE_AMBIGUOUS).is_ok());

        let values = [("a", "1"), ("b", "2+"), ("c", "3")];
        let err = check_sequence(&values, &literals, FORMAT_AMBIGUOUS).unwrap_err();
        assert!(err.to_string().starts_with(FORMAT_AMBIGUOUS));
    }

    #[test]
    fn test_sequence_of_one_is_unambiguous() {
        assert!(check_sequence(&[("a", "x-y")], &["-", "-"], PARSE_AMBIGUOUS).is_ok());
        assert!(check_sequence(&[], &[""], PARSE_AMBIGUOUS).is_ok());
    }
}
