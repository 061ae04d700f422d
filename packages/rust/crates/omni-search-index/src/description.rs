//! Description extractor - tag-aware truncation of description HTML.
//!
//! Only the leading paragraph is kept. Inline markup survives verbatim, link
//! wrappers are dropped, and `<code>` spans are never split. The ellipsis counts
//! against the budget.

use std::fmt::Write as _;
use std::sync::LazyLock;

use regex::Regex;

/// Default visible-character budget for entry descriptions.
pub const DEFAULT_DESCRIPTION_BUDGET: usize = 130;

const ELLIPSIS: &str = "...";
const ELLIPSIS_LEN: usize = ELLIPSIS.len();

/// Elements kept or dropped as a single unit.
const ATOMIC_TAGS: &[&str] = &["code", "tt"];
/// Elements whose wrapper markup is stripped.
const STRIPPED_TAGS: &[&str] = &["a"];
/// Elements without a closing tag.
const VOID_TAGS: &[&str] = &["br", "img", "wbr", "hr"];

fn compile_regex(pattern: &str) -> Regex {
    match Regex::new(pattern) {
        Ok(regex) => regex,
        Err(_compile_err) => match Regex::new(r"$^") {
            Ok(fallback) => fallback,
            Err(fallback_err) => panic!("hardcoded fallback regex must compile: {fallback_err}"),
        },
    }
}

static LEADING_PARAGRAPH_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    compile_regex(r"(?is)\A\s*(?:<h[1-6]\b[^>]*>.*?</h[1-6]\s*>\s*)*<p\b[^>]*>(.*?)</p\s*>")
});

static TAG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| compile_regex(r"<(/?)([A-Za-z][A-Za-z0-9]*)\b[^>]*>"));

static ENTITY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    compile_regex(r"\A&(?:#[0-9]+|#[xX][0-9A-Fa-f]+|[A-Za-z][A-Za-z0-9]*);")
});

/// Truncate the leading paragraph of `description` to `limit` visible characters.
///
/// Returns `None` when the description does not open with a paragraph (after
/// optional headings) or when nothing fits the budget.
#[must_use]
pub fn truncate_description(description: &str, limit: usize) -> Option<String> {
    let paragraph = leading_paragraph(description)?;

    let mut truncator = Truncator::default();
    for token in tokenize(paragraph) {
        truncator.feed(&token);
    }
    truncator.finish(limit)
}

fn leading_paragraph(description: &str) -> Option<&str> {
    LEADING_PARAGRAPH_REGEX
        .captures(description)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

#[derive(Debug, PartialEq)]
enum Token<'a> {
    Open { name: String, raw: &'a str },
    Close { name: String, raw: &'a str },
    Void { raw: &'a str },
    Text(&'a str),
}

fn tokenize(html: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut last = 0;

    for caps in TAG_REGEX.captures_iter(html) {
        let Some(whole) = caps.get(0) else { continue };
        if whole.start() > last {
            tokens.push(Token::Text(&html[last..whole.start()]));
        }
        last = whole.end();

        let raw = whole.as_str();
        let name = caps
            .get(2)
            .map_or_else(String::new, |m| m.as_str().to_ascii_lowercase());
        let closing = caps.get(1).is_some_and(|m| !m.as_str().is_empty());

        tokens.push(if closing {
            Token::Close { name, raw }
        } else if raw.ends_with("/>") || VOID_TAGS.contains(&name.as_str()) {
            Token::Void { raw }
        } else {
            Token::Open { name, raw }
        });
    }

    if last < html.len() {
        tokens.push(Token::Text(&html[last..]));
    }
    tokens
}

/// A position the output may be cut at.
#[derive(Debug, Clone)]
struct Cut {
    out_len: usize,
    visible: usize,
    open: Vec<String>,
}

#[derive(Debug, Default)]
struct Truncator {
    out: String,
    visible: usize,
    /// Open elements, atomic ones included, so every fragment comes out balanced.
    open: Vec<String>,
    cuts: Vec<Cut>,
    /// Cut right after the latest word character or atomic span; confirmed once a
    /// non-word character follows.
    pending: Option<Cut>,
    last_char: Option<char>,
    trailing_space_at: Option<usize>,
}

impl Truncator {
    fn snapshot(&self) -> Cut {
        Cut {
            out_len: self.out.len(),
            visible: self.visible,
            open: self.open.clone(),
        }
    }

    fn confirm_pending(&mut self) {
        if let Some(cut) = self.pending.take() {
            self.cuts.push(cut);
        }
    }

    fn in_atomic(&self) -> bool {
        self.open
            .iter()
            .any(|name| ATOMIC_TAGS.contains(&name.as_str()))
    }

    fn feed(&mut self, token: &Token<'_>) {
        match token {
            Token::Open { name, .. } | Token::Close { name, .. }
                if STRIPPED_TAGS.contains(&name.as_str()) => {}
            Token::Open { name, raw } => {
                if ATOMIC_TAGS.contains(&name.as_str()) && !self.in_atomic() {
                    self.confirm_pending();
                }
                self.out.push_str(raw);
                self.open.push(name.clone());
            }
            Token::Close { name, raw } => {
                let was_atomic = self.in_atomic();
                self.close(name, raw);
                if was_atomic && !self.in_atomic() {
                    self.pending = Some(self.snapshot());
                }
            }
            Token::Void { raw } => self.out.push_str(raw),
            Token::Text(text) => self.text(text),
        }
    }

    fn close(&mut self, name: &str, raw: &str) {
        let Some(idx) = self.open.iter().rposition(|open| open == name) else {
            return;
        };
        for unclosed in self.open.drain(idx + 1..).rev() {
            let _ = write!(self.out, "</{unclosed}>");
        }
        self.open.truncate(idx);
        self.out.push_str(raw);
    }

    fn text(&mut self, text: &str) {
        let mut rest = text;
        while let Some(c) = rest.chars().next() {
            if c == '&'
                && let Some(entity) = ENTITY_REGEX.find(rest)
            {
                self.push_visible('&', entity.as_str());
                rest = &rest[entity.end()..];
                continue;
            }

            let (raw, tail) = rest.split_at(c.len_utf8());
            rest = tail;

            if c.is_whitespace() {
                let collapsible = self.visible == 0 || self.last_char == Some(' ');
                if !collapsible {
                    self.trailing_space_at = Some(self.out.len());
                    self.push_visible(' ', " ");
                }
            } else {
                self.push_visible(c, raw);
            }
        }
    }

    fn push_visible(&mut self, c: char, raw: &str) {
        let is_word = c.is_alphanumeric() || c == '_';
        let in_atomic = self.in_atomic();
        if !in_atomic {
            if is_word {
                self.pending = None;
            } else {
                self.confirm_pending();
            }
        }

        self.out.push_str(raw);
        self.visible += 1;
        self.last_char = Some(c);

        if is_word && !in_atomic {
            self.pending = Some(self.snapshot());
        }
    }

    fn finish(mut self, limit: usize) -> Option<String> {
        self.confirm_pending();

        if self.last_char == Some(' ')
            && let Some(idx) = self.trailing_space_at
        {
            self.out.remove(idx);
            self.visible -= 1;
            self.last_char = None;
        }

        if self.visible == 0 {
            return None;
        }

        if self.visible <= limit {
            let mut text = self.out;
            for unclosed in self.open.iter().rev() {
                let _ = write!(text, "</{unclosed}>");
            }
            if self.last_char == Some(':') {
                text.push_str(ELLIPSIS);
            }
            return Some(text);
        }

        let cut = self
            .cuts
            .iter()
            .rev()
            .find(|cut| cut.visible + ELLIPSIS_LEN <= limit)?;

        let mut text = self.out[..cut.out_len].to_string();
        for unclosed in cut.open.iter().rev() {
            let _ = write!(text, "</{unclosed}>");
        }
        text.push_str(ELLIPSIS);
        Some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_tags_and_text() {
        let tokens = tokenize(r#"a <em class="x">b</em><br/>"#);
        assert_eq!(
            tokens,
            vec![
                Token::Text("a "),
                Token::Open {
                    name: "em".to_string(),
                    raw: r#"<em class="x">"#
                },
                Token::Text("b"),
                Token::Close {
                    name: "em".to_string(),
                    raw: "</em>"
                },
                Token::Void { raw: "<br/>" },
            ]
        );
    }

    #[test]
    fn test_leading_paragraph_skips_headings() {
        assert_eq!(
            leading_paragraph("\n<h2 id=\"x\">Title</h2>\n<p>body</p>"),
            Some("body")
        );
        assert_eq!(leading_paragraph("<pre>x</pre><p>body</p>"), None);
    }
}
