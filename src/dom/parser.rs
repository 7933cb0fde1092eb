//! Lenient HTML tokenizer that builds nodes into a [`Dom`] arena
//!
//! Handles what a hand-written host page and the fragment templates
//! contain: elements, void elements, comments, doctype, and raw-text
//! elements. It performs no implicit tag closing beyond recovering from
//! unmatched end tags.

use lazy_static::lazy_static;
use regex::Regex;

use super::{Dom, NodeId, NodeKind};
use crate::helpers::decode_entities;

lazy_static! {
    static ref ATTR_RE: Regex =
        Regex::new(r#"([^\s"'>/=]+)(?:\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'=<>`]+)))?"#)
            .unwrap();
}

/// Elements that never have children or an end tag
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Elements whose content is kept verbatim until the matching end tag
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style", "textarea", "title"];

pub(crate) fn is_void(tag: &str) -> bool {
    VOID_ELEMENTS.contains(&tag)
}

pub(crate) fn is_raw_text(tag: &str) -> bool {
    RAW_TEXT_ELEMENTS.contains(&tag)
}

/// Parse `html` and append the resulting nodes as children of `parent`
pub(crate) fn parse_into(dom: &mut Dom, parent: NodeId, html: &str) {
    let mut stack = vec![parent];
    let mut pos = 0;

    while pos < html.len() {
        let rest = &html[pos..];
        let current = *stack.last().unwrap_or(&parent);

        if let Some(after) = rest.strip_prefix("<!--") {
            let end = after.find("-->").unwrap_or(after.len());
            dom.append(current, NodeKind::Comment(after[..end].to_string()));
            pos += 4 + end + 3.min(after.len() - end);
            continue;
        }

        if rest.starts_with("<!") || rest.starts_with("<?") {
            let end = rest.find('>').map(|i| i + 1).unwrap_or(rest.len());
            dom.append(current, NodeKind::Declaration(rest[..end].to_string()));
            pos += end;
            continue;
        }

        if let Some(after) = rest.strip_prefix("</") {
            if after.starts_with(|c: char| c.is_ascii_alphabetic()) {
                let end = after.find('>').unwrap_or(after.len());
                let tag = after[..end].trim().to_ascii_lowercase();
                close_element(dom, &mut stack, &tag);
                pos += 2 + end + 1.min(after.len() - end);
                continue;
            }
        }

        if rest.starts_with('<')
            && rest[1..].starts_with(|c: char| c.is_ascii_alphabetic())
            && !name_runs_into_tag(rest)
        {
            let end = find_tag_end(rest);
            let self_closing = rest[..end].trim_end_matches('>').ends_with('/');
            let inner = rest[1..end].trim_end_matches('>').trim_end_matches('/');
            let (tag, attrs) = parse_start_tag(inner);
            pos += end;

            let node = dom.append(
                current,
                NodeKind::Element {
                    tag: tag.clone(),
                    attrs,
                },
            );

            if is_void(&tag) || self_closing {
                continue;
            }

            if is_raw_text(&tag) {
                let body = &html[pos..];
                let close = find_raw_text_end(body, &tag);
                if close > 0 {
                    dom.append(node, NodeKind::Text(body[..close].to_string()));
                }
                pos += close;
                // Skip the end tag itself
                let tail = &html[pos..];
                if let Some(gt) = tail.find('>') {
                    pos += gt + 1;
                } else {
                    pos = html.len();
                }
                continue;
            }

            stack.push(node);
            continue;
        }

        // Text runs until the next tag-looking `<`
        let end = rest
            .char_indices()
            .skip(1)
            .find(|(_, c)| *c == '<')
            .map(|(i, _)| i)
            .unwrap_or(rest.len());
        dom.append(current, NodeKind::Text(rest[..end].to_string()));
        pos += end;
    }
}

/// Pop the stack up to and including the nearest open `tag`
fn close_element(dom: &Dom, stack: &mut Vec<NodeId>, tag: &str) {
    let Some(depth) = stack
        .iter()
        .skip(1)
        .rposition(|id| dom.tag_name(*id) == Some(tag))
    else {
        tracing::debug!("Ignoring unmatched end tag </{}>", tag);
        return;
    };
    stack.truncate(depth + 1);
}

/// Whether the tag name after a leading `<` is cut short by another `<`
fn name_runs_into_tag(s: &str) -> bool {
    s[1..]
        .find(|c: char| c.is_whitespace() || matches!(c, '/' | '>' | '<'))
        .is_some_and(|i| s[1 + i..].starts_with('<'))
}

/// Find the byte offset just past the `>` closing a start tag, honoring quotes
fn find_tag_end(s: &str) -> usize {
    let mut quote: Option<char> = None;
    for (i, c) in s.char_indices() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"') | (None, '\'') => quote = Some(c),
            (None, '>') => return i + 1,
            _ => {}
        }
    }
    s.len()
}

/// Find the start of `</tag` in raw text, case-insensitively
fn find_raw_text_end(body: &str, tag: &str) -> usize {
    let needle = format!("</{}", tag);
    body.to_ascii_lowercase()
        .find(&needle)
        .unwrap_or(body.len())
}

fn parse_start_tag(inner: &str) -> (String, Vec<(String, Option<String>)>) {
    let name_end = inner
        .find(|c: char| c.is_whitespace())
        .unwrap_or(inner.len());
    let tag = inner[..name_end].to_ascii_lowercase();

    let attrs = ATTR_RE
        .captures_iter(&inner[name_end..])
        .map(|caps| {
            let name = caps[1].to_ascii_lowercase();
            let value = caps
                .get(2)
                .or_else(|| caps.get(3))
                .or_else(|| caps.get(4))
                .map(|m| decode_entities(m.as_str()));
            (name, value)
        })
        .collect();

    (tag, attrs)
}
