//! Canonical one-line signatures for undocumented declarations.

use super::declaration::{Declaration, DeclarationKind};

/// Render a declaration head as a single trimmed line.
///
/// Modifiers come first in source order, then a kind-specific payload. Kinds
/// without a dedicated form (events, enum members, structs) fall back to the
/// declaration's first source line. Bodies are never read.
pub fn render(decl: &Declaration) -> String {
    let payload = match decl.kind {
        DeclarationKind::Method => format!(
            "{} {}{}",
            text(&decl.return_type_text),
            text(&decl.identifier),
            text(&decl.parameter_list_text)
        ),
        DeclarationKind::Property => format!(
            "{} {} {{ get; set; }}",
            text(&decl.type_text),
            text(&decl.identifier)
        ),
        DeclarationKind::Field => format!(
            "{} {}",
            text(&decl.type_text),
            decl.variable_names.join(", ")
        ),
        DeclarationKind::Constructor => format!(
            "{}{}",
            text(&decl.identifier),
            text(&decl.parameter_list_text)
        ),
        DeclarationKind::Class => format!("class {}", text(&decl.identifier)),
        DeclarationKind::Interface => format!("interface {}", text(&decl.identifier)),
        DeclarationKind::Enum => format!("enum {}", text(&decl.identifier)),
        _ => return normalize(&decl.first_line),
    };

    let mut rendered = decl.modifiers.join(" ");
    if !rendered.is_empty() {
        rendered.push(' ');
    }
    rendered.push_str(&payload);
    normalize(&rendered)
}

fn text(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("")
}

/// Collapse whitespace runs to single spaces and trim the ends.
fn normalize(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}
