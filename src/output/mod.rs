// Output formatting — terminal display of comparison results and stats.

pub mod terminal;

/// Pack keywords into comma-separated lines no wider than `width` characters.
///
/// A keyword longer than `width` gets a line to itself rather than being cut.
pub fn wrap_keywords(keywords: &[String], width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for keyword in keywords {
        let extra = if current.is_empty() {
            keyword.chars().count()
        } else {
            keyword.chars().count() + 2
        };
        if !current.is_empty() && current.chars().count() + extra > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push_str(", ");
        }
        current.push_str(keyword);
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_wrap_keywords() {
        let lines = wrap_keywords(&words(&["docker", "kubernetes", "terraform"]), 20);
        assert_eq!(lines, vec!["docker, kubernetes", "terraform"]);
    }

    #[test]
    fn test_wrap_keywords_long_word() {
        let lines = wrap_keywords(&words(&["a", "supercalifragilistic", "b"]), 5);
        assert_eq!(lines, vec!["a", "supercalifragilistic", "b"]);
    }

    #[test]
    fn test_wrap_keywords_empty() {
        assert!(wrap_keywords(&[], 40).is_empty());
    }
}
