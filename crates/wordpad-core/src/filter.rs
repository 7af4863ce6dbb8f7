//! Banned-phrase filtering for pasted content.
//!
//! Phrases are matched literally and case-insensitively. Each phrase is
//! removed in a single pass, in configuration order, so text that only forms
//! a banned phrase after an earlier removal is left alone.

use scraper::{Html, Node};

use regex::{Regex, RegexBuilder, escape};

use crate::error::WordpadError;

/// Removes a fixed set of banned phrases from text and HTML fragments.
#[derive(Debug, Clone)]
pub struct PhraseFilter {
    patterns: Vec<Regex>,
}

impl PhraseFilter {
    /// Build a filter from an ordered list of literal phrases.
    ///
    /// Empty phrases are skipped since they would match between every char.
    pub fn new<I, S>(phrases: I) -> Result<Self, WordpadError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = phrases
            .into_iter()
            .filter(|p| !p.as_ref().is_empty())
            .map(|p| {
                let phrase = p.as_ref();
                RegexBuilder::new(&escape(phrase))
                    .case_insensitive(true)
                    .build()
                    .map_err(|e| WordpadError::Pattern {
                        phrase: phrase.to_string(),
                        message: e.to_string(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { patterns })
    }

    /// Number of active phrases.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Remove every occurrence of every phrase, leaving whitespace as-is.
    pub fn strip_phrases(&self, input: &str) -> String {
        let mut text = input.to_string();
        for pattern in &self.patterns {
            text = pattern.replace_all(&text, "").into_owned();
        }
        text
    }

    /// Remove phrases, collapse horizontal whitespace runs, and trim.
    pub fn sanitize(&self, input: &str) -> String {
        let stripped = self.strip_phrases(input);
        collapse_horizontal_whitespace(&stripped).trim().to_string()
    }

    /// Sanitize the text nodes of an HTML fragment, keeping its markup.
    ///
    /// Entities are decoded before matching, so `&amp;&amp;` in the source
    /// matches `&&` in a phrase. Individual text nodes are collapsed but not
    /// trimmed; only the serialized fragment as a whole is trimmed.
    pub fn sanitize_html(&self, html: &str) -> String {
        let mut fragment = Html::parse_fragment(html);

        let text_nodes: Vec<_> = fragment
            .tree
            .nodes()
            .filter(|node| node.value().is_text())
            .map(|node| node.id())
            .collect();

        for id in text_nodes {
            let Some(mut node) = fragment.tree.get_mut(id) else {
                continue;
            };
            if let Node::Text(text) = node.value() {
                let cleaned = collapse_horizontal_whitespace(&self.strip_phrases(&text.text));
                text.text = cleaned.into();
            }
        }

        fragment.root_element().inner_html().trim().to_string()
    }

    /// Whether any phrase occurs in `input`.
    pub fn contains_banned(&self, input: &str) -> bool {
        self.patterns.iter().any(|p| p.is_match(input))
    }
}

fn is_horizontal_whitespace(c: char) -> bool {
    c == ' ' || c == '\t'
}

/// Replace each run of two or more spaces/tabs with one space.
fn collapse_horizontal_whitespace(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if is_horizontal_whitespace(c) {
            let mut run = 1;
            while chars.next_if(|&n| is_horizontal_whitespace(n)).is_some() {
                run += 1;
            }
            out.push(if run > 1 { ' ' } else { c });
        } else {
            out.push(c);
        }
    }

    out
}
