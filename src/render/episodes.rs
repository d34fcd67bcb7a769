use std::ops::RangeInclusive;

use crate::corpus::{Corpus, VocabGroup};

#[derive(Debug)]
pub struct Episode {
    pub name: &'static str,
    pub description: &'static str,
    pub groups: RangeInclusive<u32>,
}

pub static EPISODES: [Episode; 7] = [
    Episode {
        name: "Episode 1: Groups 1–4",
        description: "Foundation vocabulary",
        groups: 1..=4,
    },
    Episode {
        name: "Episode 2: Groups 5–9",
        description: "Building blocks",
        groups: 5..=9,
    },
    Episode {
        name: "Episode 3: Groups 10–14",
        description: "Advanced concepts",
        groups: 10..=14,
    },
    Episode {
        name: "Episode 4: Groups 15–19",
        description: "Expanding horizons",
        groups: 15..=19,
    },
    Episode {
        name: "Episode 5: Groups 20–24",
        description: "Deepening knowledge",
        groups: 20..=24,
    },
    Episode {
        name: "Episode 6: Groups 25–29",
        description: "Mastery level",
        groups: 25..=29,
    },
    Episode {
        name: "Episode 7: Groups 30–34",
        description: "Expert vocabulary",
        groups: 30..=34,
    },
];

impl Episode {
    /// Groups of this episode that exist in the corpus, ascending.
    pub fn resolve<'a>(&self, corpus: &'a Corpus) -> Vec<&'a VocabGroup> {
        self.groups.clone().filter_map(|n| corpus.get(n)).collect()
    }
}

/// Episode a group number is shown under, if any.
pub fn episode_for(number: u32) -> Option<&'static Episode> {
    EPISODES.iter().find(|e| e.groups.contains(&number))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::VocabEntry;

    fn corpus(numbers: &[u32]) -> Corpus {
        Corpus {
            groups: numbers
                .iter()
                .map(|&number| VocabGroup {
                    number,
                    entries: vec![VocabEntry {
                        word: "word".into(),
                        mnemonic: String::new(),
                        definition: "def".into(),
                    }],
                })
                .collect(),
        }
    }

    #[test]
    fn ranges_are_contiguous() {
        let mut next = 1;
        for episode in &EPISODES {
            assert_eq!(*episode.groups.start(), next);
            next = episode.groups.end() + 1;
        }
        assert_eq!(next, 35);
    }

    #[test]
    fn resolve_skips_missing_numbers() {
        let c = corpus(&[1, 2, 3, 7]);
        let first: Vec<u32> = EPISODES[0].resolve(&c).iter().map(|g| g.number).collect();
        let second: Vec<u32> = EPISODES[1].resolve(&c).iter().map(|g| g.number).collect();
        assert_eq!(first, vec![1, 2, 3]);
        assert_eq!(second, vec![7]);
        assert!(EPISODES[2].resolve(&c).is_empty());
    }

    #[test]
    fn lookup_by_number() {
        assert_eq!(episode_for(4).map(|e| e.description), Some("Foundation vocabulary"));
        assert_eq!(episode_for(30).map(|e| e.description), Some("Expert vocabulary"));
        assert!(episode_for(0).is_none());
        assert!(episode_for(35).is_none());
    }
}
