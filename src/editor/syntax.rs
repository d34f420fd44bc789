// src/editor/syntax.rs
// Line-level Markdown highlighting for surfaces tagged with the markdown filetype.

use crate::viewer::MARKDOWN_FILETYPE;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use regex::Regex;
use std::sync::LazyLock;

static HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#{1,6}(\s|$)").expect("heading pattern"));
static FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(```|~~~)").expect("fence pattern"));
static RULE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?:(?:-\s*){3,}|(?:\*\s*){3,}|(?:_\s*){3,})$").expect("rule pattern")
});
static QUOTE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*>").expect("quote pattern"));
static LIST_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\s*)([-*+]|\d+[.)])(\s+)").expect("list pattern"));
static INLINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?P<code>`[^`]+`)|(?P<strong>\*\*[^*]+\*\*)|(?P<link>\[[^\]]+\]\([^)]*\))")
        .expect("inline pattern")
});

fn heading_style() -> Style {
    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
}

fn code_style() -> Style {
    Style::default().fg(Color::Green)
}

fn quote_style() -> Style {
    Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC)
}

fn marker_style() -> Style {
    Style::default().fg(Color::Yellow)
}

fn rule_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

fn strong_style() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

fn link_style() -> Style {
    Style::default().fg(Color::Blue).add_modifier(Modifier::UNDERLINED)
}

pub struct SyntaxHighlighter {
    enabled: bool,
}

impl SyntaxHighlighter {
    pub fn new(enabled: bool) -> Self {
        SyntaxHighlighter { enabled }
    }

    /// Styles `lines` when `filetype` is markdown; anything else is returned unstyled.
    pub fn highlight(&self, lines: &[String], filetype: Option<&str>) -> Vec<Line<'static>> {
        if !self.enabled || filetype != Some(MARKDOWN_FILETYPE) {
            return lines.iter().map(|l| Line::from(Span::raw(l.clone()))).collect();
        }

        let mut in_fence = false;
        lines
            .iter()
            .map(|line| {
                if FENCE.is_match(line) {
                    in_fence = !in_fence;
                    return whole(line, code_style());
                }
                if in_fence {
                    return whole(line, code_style());
                }
                highlight_line(line)
            })
            .collect()
    }
}

fn whole(line: &str, style: Style) -> Line<'static> {
    Line::from(Span::styled(line.to_string(), style))
}

fn highlight_line(line: &str) -> Line<'static> {
    if HEADING.is_match(line) {
        return whole(line, heading_style());
    }
    if RULE.is_match(line) {
        return whole(line, rule_style());
    }
    if QUOTE.is_match(line) {
        return whole(line, quote_style());
    }

    let mut spans = Vec::new();
    let mut rest = line;
    if let Some(caps) = LIST_MARKER.captures(line) {
        let marker_end = caps.get(0).map(|m| m.end()).unwrap_or(0);
        spans.push(Span::raw(caps[1].to_string()));
        spans.push(Span::styled(caps[2].to_string(), marker_style()));
        spans.push(Span::raw(caps[3].to_string()));
        rest = &line[marker_end..];
    }
    spans.extend(inline_spans(rest));
    Line::from(spans)
}

fn inline_spans(text: &str) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    let mut last = 0;
    for caps in INLINE.captures_iter(text) {
        let Some(found) = caps.get(0) else { continue };
        if found.start() > last {
            spans.push(Span::raw(text[last..found.start()].to_string()));
        }
        let style = if caps.name("code").is_some() {
            code_style()
        } else if caps.name("strong").is_some() {
            strong_style()
        } else {
            link_style()
        };
        spans.push(Span::styled(found.as_str().to_string(), style));
        last = found.end();
    }
    if last < text.len() || spans.is_empty() {
        spans.push(Span::raw(text[last..].to_string()));
    }
    spans
}
