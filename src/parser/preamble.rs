use std::sync::LazyLock;

use regex::Regex;

// Openers the model puts in front of (or between) groups. Applied in order.
static PREAMBLE_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?im)^Of course\.?\s*",
        r"(?im)^Absolutely\.?\s*",
        r"(?im)^No problem\.?\s*",
        r"(?im)^You got it\.?\s*",
        r"(?im)^Sure\.?\s*",
        r"(?im)^Certainly\.?\s*",
        r"(?im)^Here (?:is|are) .*?:\s*",
        r"(?im)^Let's continue.*?\.\s*",
        r"(?im)^Let's keep going.*?\.\s*",
        r"(?im)^Let's pick up where we left off.*?\.\s*",
        r"(?im)^My apologies.*?\.\s*",
        r"(?im)^Apologies for.*?\.\s*",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// Strip conversational filler from the start of lines.
///
/// Best-effort: a real line that happens to start with one of the phrases
/// loses that prefix too.
pub fn strip_preamble(text: &str) -> String {
    let mut cleaned = text.to_string();
    for re in PREAMBLE_RES.iter() {
        cleaned = re.replace_all(&cleaned, "").into_owned();
    }
    cleaned.trim().to_string()
}
