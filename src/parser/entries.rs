use std::sync::LazyLock;

use regex::Regex;

use crate::corpus::VocabEntry;

static WORD_MNEMONIC_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([a-zA-Z]+(?:\s+[a-zA-Z]+)?)\s*-\s*(?i:mnemonic):\s*(.+)$").unwrap()
});
static WORD_DEFINITION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([a-zA-Z]+(?:\s+[a-zA-Z]+)?)\s*-\s*(.+)$").unwrap());
static INLINE_DEFINITION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)definition:").unwrap());

/// One classified line of a group body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line<'a> {
    /// `Word - Mnemonic: ...`, optionally with `Definition: ...` on the same line.
    WordMnemonic {
        word: &'a str,
        mnemonic: &'a str,
        definition: Option<&'a str>,
    },
    /// `Mnemonic: ...` continuing the entry in progress.
    Mnemonic(&'a str),
    /// `Definition: ...` continuing the entry in progress.
    Definition(&'a str),
    /// `word - definition text.`
    WordDefinition { word: &'a str, definition: &'a str },
    Other,
}

/// Classify a trimmed line. The mnemonic form wins over the plain
/// word-definition form when both could apply.
pub fn classify_line(line: &str) -> Line<'_> {
    if let Some(caps) = WORD_MNEMONIC_RE.captures(line) {
        let word = caps.get(1).unwrap().as_str().trim();
        let rest = caps.get(2).unwrap().as_str().trim();
        let (mnemonic, definition) = split_inline_definition(rest);
        return Line::WordMnemonic {
            word,
            mnemonic,
            definition,
        };
    }

    if let Some(text) = strip_label(line, "mnemonic:") {
        return Line::Mnemonic(text);
    }

    if let Some(text) = strip_label(line, "definition:") {
        return Line::Definition(text);
    }

    if let Some(caps) = WORD_DEFINITION_RE.captures(line) {
        let definition = caps.get(2).unwrap().as_str().trim();
        if !starts_with_ignore_case(definition, "mnemonic") {
            return Line::WordDefinition {
                word: caps.get(1).unwrap().as_str().trim(),
                definition,
            };
        }
    }

    Line::Other
}

/// Split `mnemonic text Definition: definition text` at the first
/// `Definition:` that has something after it.
fn split_inline_definition(rest: &str) -> (&str, Option<&str>) {
    if let Some(m) = INLINE_DEFINITION_RE.find(rest) {
        let tail = rest[m.end()..].trim();
        if !tail.is_empty() {
            return (rest[..m.start()].trim(), Some(tail));
        }
    }
    (rest, None)
}

fn strip_label<'a>(line: &'a str, label: &str) -> Option<&'a str> {
    if starts_with_ignore_case(line, label) {
        Some(line[label.len()..].trim())
    } else {
        None
    }
}

fn starts_with_ignore_case(s: &str, prefix: &str) -> bool {
    s.get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

/// Trim and drop trailing periods, including spaced runs like `x. .`.
fn clean(text: &str) -> String {
    text.trim()
        .trim_end_matches(|c: char| c == '.' || c.is_whitespace())
        .to_string()
}

/// Entry being accumulated across consecutive lines.
#[derive(Debug)]
struct PendingEntry {
    word: String,
    mnemonic: Option<String>,
    definition: Option<String>,
}

impl PendingEntry {
    fn new(word: &str) -> Self {
        Self {
            word: word.to_string(),
            mnemonic: None,
            definition: None,
        }
    }

    /// `None` when neither mnemonic nor definition carries text.
    fn finish(self) -> Option<VocabEntry> {
        let mnemonic = self.mnemonic.unwrap_or_default();
        let definition = self.definition.unwrap_or_default();
        if mnemonic.is_empty() && definition.is_empty() {
            return None;
        }
        Some(VocabEntry {
            word: self.word,
            mnemonic,
            definition,
        })
    }
}

fn flush(pending: &mut Option<PendingEntry>, entries: &mut Vec<VocabEntry>) {
    if let Some(entry) = pending.take().and_then(PendingEntry::finish) {
        entries.push(entry);
    }
}

/// Recover entries from the body of one group.
pub fn parse_entries(content: &str) -> Vec<VocabEntry> {
    let mut entries = Vec::new();
    let mut pending: Option<PendingEntry> = None;

    for line in content.lines().map(str::trim).filter(|l| !l.is_empty()) {
        match classify_line(line) {
            Line::WordMnemonic {
                word,
                mnemonic,
                definition,
            } => {
                flush(&mut pending, &mut entries);
                let mut entry = PendingEntry::new(word);
                entry.mnemonic = Some(clean(mnemonic));
                entry.definition = definition.map(clean);
                pending = Some(entry);
            }
            Line::Mnemonic(text) => {
                if let Some(entry) = pending.as_mut() {
                    entry.mnemonic = Some(clean(text));
                }
            }
            Line::Definition(text) => {
                if let Some(entry) = pending.as_mut() {
                    entry.definition = Some(clean(text));
                }
            }
            Line::WordDefinition { word, definition } => {
                flush(&mut pending, &mut entries);
                let mut entry = PendingEntry::new(word);
                entry.definition = Some(clean(definition));
                pending = Some(entry);
            }
            Line::Other => {}
        }
    }

    flush(&mut pending, &mut entries);
    entries
}
