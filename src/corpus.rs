use std::collections::HashSet;

use serde::Serialize;
use tracing::{debug, info};

use crate::parser;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VocabEntry {
    pub word: String,
    pub mnemonic: String,
    pub definition: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VocabGroup {
    pub number: u32,
    pub entries: Vec<VocabEntry>,
}

/// All groups of a run, unique by number and sorted ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Corpus {
    pub groups: Vec<VocabGroup>,
}

impl Corpus {
    /// Parse every response in order. The first occurrence of a group number
    /// wins; later ones are dropped whole, never merged.
    pub fn from_responses<S: AsRef<str>>(responses: &[S]) -> Self {
        let mut seen = HashSet::new();
        let mut groups = Vec::new();

        for (i, response) in responses.iter().enumerate() {
            debug!("Parsing response {}", i + 1);
            for group in parser::parse_response(response.as_ref()) {
                if !seen.insert(group.number) {
                    debug!("Ignoring repeated Group {} in response {}", group.number, i + 1);
                    continue;
                }
                info!(
                    "Found Group {} with {} entries",
                    group.number,
                    group.entries.len()
                );
                groups.push(group);
            }
        }

        groups.sort_by_key(|g| g.number);
        Self { groups }
    }

    pub fn total_entries(&self) -> usize {
        self.groups.iter().map(|g| g.entries.len()).sum()
    }

    pub fn get(&self, number: u32) -> Option<&VocabGroup> {
        self.groups
            .binary_search_by_key(&number, |g| g.number)
            .ok()
            .map(|i| &self.groups[i])
    }
}
