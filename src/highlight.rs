use regex::{Regex, RegexBuilder};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Plain(&'a str),
    Keyword(&'a str),
}

impl<'a> Segment<'a> {
    pub fn text(&self) -> &'a str {
        match self {
            Segment::Plain(s) | Segment::Keyword(s) => s,
        }
    }
}

/// Splits prose into plain runs and tool-name keywords.
///
/// Built once per keyword list and cheap to clone. Matching is
/// case-insensitive on whole words and prefers the longest keyword when
/// several start at the same position ("Apache Spark" over "Spark").
#[derive(Debug, Clone, Default)]
pub struct KeywordHighlighter {
    pattern: Option<Regex>,
}

impl KeywordHighlighter {
    pub fn new<S: AsRef<str>>(keywords: &[S]) -> Result<Self, regex::Error> {
        let mut words = keywords
            .iter()
            .map(|k| k.as_ref().trim())
            .filter(|k| !k.is_empty())
            .collect::<Vec<_>>();
        if words.is_empty() {
            return Ok(Self::default());
        }
        words.sort_by_cached_key(|w| (std::cmp::Reverse(w.len()), w.to_lowercase()));
        words.dedup_by(|a, b| a.eq_ignore_ascii_case(b));

        let alternation = words
            .iter()
            .map(|w| word_pattern(w))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = RegexBuilder::new(&alternation)
            .case_insensitive(true)
            .build()?;
        Ok(Self {
            pattern: Some(pattern),
        })
    }

    /// Concatenating the returned segments reproduces `text` exactly.
    pub fn segments<'a>(&self, text: &'a str) -> Vec<Segment<'a>> {
        let Some(re) = &self.pattern else {
            return if text.is_empty() {
                Vec::new()
            } else {
                vec![Segment::Plain(text)]
            };
        };
        let mut out = Vec::new();
        let mut last = 0;
        for m in re.find_iter(text) {
            if m.start() > last {
                out.push(Segment::Plain(&text[last..m.start()]));
            }
            out.push(Segment::Keyword(m.as_str()));
            last = m.end();
        }
        if last < text.len() {
            out.push(Segment::Plain(&text[last..]));
        }
        out
    }
}

// Word boundaries only make sense next to word characters, so "C++" still matches.
fn word_pattern(word: &str) -> String {
    let is_word = |c: char| c.is_alphanumeric() || c == '_';
    let lead = if word.starts_with(is_word) { r"\b" } else { "" };
    let trail = if word.ends_with(is_word) { r"\b" } else { "" };
    format!("{lead}{}{trail}", regex::escape(word))
}
