//! Line classification for fenced code blocks

use regex::Regex;
use std::sync::LazyLock;

/// Opening fence: optional four-space or tab indent, three backticks, optional tag
static FENCE_START_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(    |\t)?```(\S*)").unwrap());

/// Closing fence: any leading whitespace followed by three backticks
static FENCE_END_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*```").unwrap());

/// Facts captured from an opening fence line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenceStart<'a> {
    /// Literal indentation before the backticks, empty when none
    pub indentation: &'a str,
    /// Tag after the backticks, empty when none
    pub tag: &'a str,
}

/// Classify a line as an opening fence
pub fn fence_start(line: &str) -> Option<FenceStart<'_>> {
    let caps = FENCE_START_PATTERN.captures(line)?;
    Some(FenceStart {
        indentation: caps.get(1).map_or("", |m| m.as_str()),
        tag: caps.get(2).map_or("", |m| m.as_str()),
    })
}

pub fn is_fence_start(line: &str) -> bool {
    FENCE_START_PATTERN.is_match(line)
}

pub fn is_fence_end(line: &str) -> bool {
    FENCE_END_PATTERN.is_match(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_fence_has_empty_tag_and_indentation() {
        assert_eq!(
            fence_start("```"),
            Some(FenceStart {
                indentation: "",
                tag: ""
            })
        );
    }

    #[test]
    fn tag_is_captured_up_to_whitespace() {
        let start = fence_start("```js extra words").unwrap();
        assert_eq!(start.tag, "js");
        assert_eq!(start.indentation, "");
    }

    #[test]
    fn four_spaces_and_tab_are_captured() {
        assert_eq!(fence_start("    ```py").unwrap().indentation, "    ");
        assert_eq!(fence_start("\t```py").unwrap().indentation, "\t");
    }

    #[test]
    fn other_indentation_is_not_a_start() {
        assert!(fence_start("  ```js").is_none());
        assert!(fence_start("text ```js").is_none());
        assert!(!is_fence_start("# heading"));
    }

    #[test]
    fn end_accepts_any_leading_whitespace() {
        assert!(is_fence_end("```"));
        assert!(is_fence_end("  ```"));
        assert!(is_fence_end("\t\t```"));
        assert!(is_fence_end("```trailing"));
        assert!(!is_fence_end("code ```"));
        assert!(!is_fence_end(""));
    }
}
