use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

static GROUP_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"Group\s+([0-9]+)").unwrap());

/// One `Group <n>` marker and the raw text that follows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawGroup<'a> {
    pub number: u32,
    pub content: &'a str,
}

/// Split text on `Group <n>` markers. Text before the first marker is dropped.
pub fn split_groups(text: &str) -> Vec<RawGroup<'_>> {
    let markers: Vec<_> = GROUP_RE.captures_iter(text).collect();
    let mut groups = Vec::with_capacity(markers.len());

    for (i, caps) in markers.iter().enumerate() {
        let whole = caps.get(0).unwrap();
        let end = markers
            .get(i + 1)
            .map(|next| next.get(0).unwrap().start())
            .unwrap_or(text.len());

        match caps[1].parse::<u32>() {
            Ok(number) => groups.push(RawGroup {
                number,
                content: &text[whole.end()..end],
            }),
            Err(_) => debug!("Skipping group marker with unusable number: {}", &caps[1]),
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_marker() {
        assert!(split_groups("Just some words\nAbate - less").is_empty());
    }

    #[test]
    fn preamble_is_dropped() {
        let groups = split_groups("intro text\nGroup 3\nAbate - less");
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].number, 3);
        assert_eq!(groups[0].content, "\nAbate - less");
    }

    #[test]
    fn content_runs_to_next_marker() {
        let groups = split_groups("Group 1\nA - a\nGroup  2:\nB - b\n");
        let numbers: Vec<u32> = groups.iter().map(|g| g.number).collect();
        assert_eq!(numbers, vec![1, 2]);
        assert_eq!(groups[0].content, "\nA - a\n");
        assert_eq!(groups[1].content, ":\nB - b\n");
    }

    #[test]
    fn marker_is_case_sensitive() {
        assert!(split_groups("group 1\nA - a").is_empty());
    }

    #[test]
    fn empty_trailing_group_is_kept() {
        let groups = split_groups("Group 9");
        assert_eq!(groups, vec![RawGroup { number: 9, content: "" }]);
    }

    #[test]
    fn only_ascii_digits_form_a_marker() {
        assert!(split_groups("Group \u{663}\nAbate - less.").is_empty());
        let groups = split_groups("Group 1\nA - a\nGroup \u{663}\nB - b");
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].content, "\nA - a\nGroup \u{663}\nB - b");
    }

    #[test]
    fn overflowing_number_is_skipped() {
        let groups = split_groups("Group 99999999999999999999\nA - a\nGroup 4\nB - b");
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].number, 4);
    }
}
