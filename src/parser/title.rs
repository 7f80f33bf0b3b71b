/// Collapse a title the renderer printed twice ("Walk Walk" → "Walk").
///
/// Splits at `words / 2`, so odd counts put the extra word in the second
/// half and never match.
pub fn normalize_title(title: &str) -> String {
    let words: Vec<&str> = title.split_whitespace().collect();
    if words.len() >= 2 {
        let (first, second) = words.split_at(words.len() / 2);
        let first = first.join(" ");
        if first == second.join(" ") {
            return first;
        }
    }
    title.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doubled_title() {
        assert_eq!(normalize_title("Morning Walk Morning Walk"), "Morning Walk");
        assert_eq!(normalize_title("Same Same"), "Same");
    }

    #[test]
    fn odd_count_unchanged() {
        assert_eq!(normalize_title("A Single Day"), "A Single Day");
        assert_eq!(normalize_title("Go Go Go"), "Go Go Go");
    }

    #[test]
    fn case_sensitive() {
        assert_eq!(normalize_title("Walk walk"), "Walk walk");
    }

    #[test]
    fn single_word_and_empty() {
        assert_eq!(normalize_title("Walk"), "Walk");
        assert_eq!(normalize_title(""), "");
    }

    #[test]
    fn whitespace_differences_collapse() {
        // Halves are compared space-joined, so the original spacing is lost.
        assert_eq!(normalize_title("Long  Day Long Day"), "Long Day");
    }

    #[test]
    fn unchanged_keeps_original_spacing() {
        assert_eq!(normalize_title("Day  One Two"), "Day  One Two");
    }
}
