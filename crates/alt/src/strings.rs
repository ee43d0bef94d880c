//! String replace and split helpers.

/// Replaces occurrences of `from` with `to`.
///
/// Matches are found left to right without overlap, and replaced text is
/// never searched again. With `only_first` set, at most one occurrence is
/// replaced. An empty `from` leaves the input untouched.
///
/// ```rust
/// use alt::str_replace;
///
/// assert_eq!(str_replace("a-b-c", "-", "+", false), "a+b+c");
/// assert_eq!(str_replace("a-b-c", "-", "+", true), "a+b-c");
/// ```
pub fn str_replace(input: &str, from: &str, to: &str, only_first: bool) -> String {
    if from.is_empty() {
        return input.to_string();
    }
    if only_first {
        input.replacen(from, to, 1)
    } else {
        input.replace(from, to)
    }
}

/// Splits `input` on every `delimiter`.
///
/// Empty tokens between adjacent delimiters are kept, but an empty tail
/// after a trailing delimiter is not. An empty delimiter yields the whole
/// input as a single token.
///
/// ```rust
/// use alt::str_split;
///
/// assert_eq!(str_split("a,,b,", ","), vec!["a", "", "b"]);
/// ```
pub fn str_split(input: &str, delimiter: &str) -> Vec<String> {
    if input.is_empty() {
        return Vec::new();
    }
    if delimiter.is_empty() {
        return vec![input.to_string()];
    }

    let mut tokens: Vec<String> = input.split(delimiter).map(str::to_string).collect();
    if tokens.last().is_some_and(String::is_empty) {
        tokens.pop();
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_all() {
        assert_eq!(str_replace("one two one", "one", "1", false), "1 two 1");
    }

    #[test]
    fn test_replace_first_only() {
        assert_eq!(str_replace("one two one", "one", "1", true), "1 two one");
    }

    #[test]
    fn test_replace_does_not_recurse() {
        assert_eq!(str_replace("aa", "a", "aa", false), "aaaa");
    }

    #[test]
    fn test_replace_empty_pattern() {
        assert_eq!(str_replace("abc", "", "x", false), "abc");
    }

    #[test]
    fn test_replace_missing_pattern() {
        assert_eq!(str_replace("abc", "z", "x", true), "abc");
    }

    #[test]
    fn test_split_basic() {
        assert_eq!(str_split("a::b::c", "::"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_split_keeps_inner_empties() {
        assert_eq!(str_split(",a,,b", ","), vec!["", "a", "", "b"]);
    }

    #[test]
    fn test_split_drops_trailing_empty() {
        assert_eq!(str_split("a,b,", ","), vec!["a", "b"]);
        assert_eq!(str_split(",", ","), vec![""]);
    }

    #[test]
    fn test_split_edge_inputs() {
        assert!(str_split("", ",").is_empty());
        assert_eq!(str_split("abc", ""), vec!["abc"]);
        assert_eq!(str_split("abc", ";"), vec!["abc"]);
    }
}
