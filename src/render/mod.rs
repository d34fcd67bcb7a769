pub mod episodes;
pub mod html;

use crate::corpus::{Corpus, VocabGroup};
use episodes::{Episode, EPISODES};
use html::{escape_html, title_case};

const STYLESHEET: &str = include_str!("style.css");

/// Render the whole corpus as one self-contained HTML page.
pub fn render_document(corpus: &Corpus) -> String {
    let mut html = String::new();

    html.push_str(&format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>GRE Vocabulary - Complete Reference</title>
  <style>
{}  </style>
</head>
<body>
  <div class="container">
    <header>
      <h1>GRE Vocabulary Reference</h1>
      <p>Complete collection of {} essential words across {} groups</p>
    </header>

"#,
        STYLESHEET,
        corpus.total_entries(),
        corpus.groups.len(),
    ));

    render_toc(&mut html, corpus);

    for episode in &EPISODES {
        let groups = episode.resolve(corpus);
        if groups.is_empty() {
            continue;
        }
        render_episode(&mut html, episode, &groups);
    }

    html.push_str(
        r##"  </div>

  <a href="#toc" class="back-to-top">↑</a>
</body>
</html>
"##,
    );

    html
}

// Every episode gets a TOC block, even with nothing to link.
fn render_toc(html: &mut String, corpus: &Corpus) {
    html.push_str(
        r#"    <nav class="toc" id="toc">
      <h2>📚 Table of Contents</h2>
      <div class="toc-episodes">
"#,
    );

    for episode in &EPISODES {
        html.push_str(&format!(
            r#"        <div class="toc-episode">
          <h3>{}</h3>
          <p style="margin-bottom: 10px; color: #b4a7d6;">{}</p>
          <ul>
"#,
            episode.name, episode.description,
        ));
        for group in episode.resolve(corpus) {
            html.push_str(&format!(
                "            <li><a href=\"#group{n}\">Group {n}</a></li>\n",
                n = group.number
            ));
        }
        html.push_str("          </ul>\n        </div>\n");
    }

    html.push_str("      </div>\n    </nav>\n");
}

fn render_episode(html: &mut String, episode: &Episode, groups: &[&VocabGroup]) {
    html.push_str(&format!(
        r#"
    <section class="episode">
      <div class="episode-header">
        <h2>{}</h2>
        <p>{}</p>
      </div>
"#,
        episode.name, episode.description,
    ));

    for group in groups {
        render_group(html, group);
    }

    html.push_str("    </section>\n");
}

fn render_group(html: &mut String, group: &VocabGroup) {
    html.push_str(&format!(
        r#"
      <div class="group" id="group{n}">
        <h3 class="group-title">Group {n}</h3>
        <table>
          <thead>
            <tr>
              <th>Word</th>
              <th>Mnemonic</th>
              <th>Definition</th>
            </tr>
          </thead>
          <tbody>
"#,
        n = group.number,
    ));

    for entry in &group.entries {
        html.push_str(&format!(
            "            <tr><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            title_case(&entry.word),
            escape_html(&entry.mnemonic),
            escape_html(&entry.definition),
        ));
    }

    html.push_str("          </tbody>\n        </table>\n      </div>\n");
}
