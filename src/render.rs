//! Placeholder substitution

use serde_json::Value;

use crate::models::{ScenarioId, Substitution, SubstitutionKind, DATA_TOKEN};

const TITLE_OPEN: &str = "<title>";
const TITLE_CLOSE: &str = "</title>";

/// Apply `substitutions` to `content` in order, without scenario data.
///
/// Each substitution sees the output of the previous one, so a replacement
/// that produces a later pattern is replaced again. Data substitutions are
/// left untouched.
pub fn render(content: &str, substitutions: &[Substitution], id: &ScenarioId) -> String {
    render_page(content, substitutions, id, None)
}

/// Apply `substitutions` to `content` in order; `data` is the JSON payload
/// for data substitutions.
pub fn render_page(
    content: &str,
    substitutions: &[Substitution],
    id: &ScenarioId,
    data: Option<&Value>,
) -> String {
    substitutions
        .iter()
        .fold(content.to_string(), |text, sub| match sub.kind {
            SubstitutionKind::Literal => {
                if sub.pattern.is_empty() {
                    return text;
                }
                text.replace(&sub.pattern, &sub.replacement_for(id))
            }
            SubstitutionKind::Title => replace_title(&text, &sub.replacement_for(id)),
            SubstitutionKind::Data => match (sub.search_text(), data) {
                (Some(anchor), Some(payload)) => {
                    let code = sub
                        .replacement_for(id)
                        .replace(DATA_TOKEN, &format!("{:#}", payload));
                    text.replacen(anchor, &code, 1)
                }
                _ => text,
            },
        })
}

/// Replace the inner text of the first `<title>…</title>` that closes on
/// the same line it opens.
fn replace_title(text: &str, title: &str) -> String {
    let is_line_break = |c: char| matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}');

    let mut from = 0;
    while let Some(offset) = text[from..].find(TITLE_OPEN) {
        let start = from + offset;
        let inner = start + TITLE_OPEN.len();
        let rest = &text[inner..];
        let line = &rest[..rest.find(is_line_break).unwrap_or(rest.len())];

        if let Some(end) = line.find(TITLE_CLOSE) {
            let before = &text[..start];
            let after = &rest[end + TITLE_CLOSE.len()..];
            return format!("{before}{TITLE_OPEN}{title}{TITLE_CLOSE}{after}");
        }
        from = inner;
    }

    text.to_string()
}
