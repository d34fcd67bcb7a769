pub mod entries;
pub mod groups;
pub mod preamble;

use crate::corpus::VocabGroup;

/// Three-pass pipeline: response text → cleaned text → group bodies → entries.
/// Groups that end up with no entries are dropped.
pub fn parse_response(text: &str) -> Vec<VocabGroup> {
    let cleaned = preamble::strip_preamble(text);
    groups::split_groups(&cleaned)
        .into_iter()
        .filter_map(|raw| {
            let entries = entries::parse_entries(raw.content);
            if entries.is_empty() {
                None
            } else {
                Some(VocabGroup {
                    number: raw.number,
                    entries,
                })
            }
        })
        .collect()
}
