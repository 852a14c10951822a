//! Declaration facts considered for coverage reporting.

use crate::parser::{SyntaxNode, Trivia};

/// The kind of a reportable declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclarationKind {
    Class,
    Interface,
    Enum,
    Struct,
    Method,
    Property,
    Field,
    Constructor,
    Event,
    EnumMember,
}

impl DeclarationKind {
    /// True for type declarations. Types are reported under their own label
    /// and bypass the member scope filter.
    pub fn is_type(&self) -> bool {
        matches!(
            self,
            DeclarationKind::Class
                | DeclarationKind::Interface
                | DeclarationKind::Enum
                | DeclarationKind::Struct
        )
    }

    /// True for member declarations.
    pub fn is_member(&self) -> bool {
        !self.is_type()
    }

    /// The `type` label carried by report entries: types report their own
    /// kind name, every member kind reports as "Member".
    pub fn label(&self) -> &'static str {
        match self {
            DeclarationKind::Class => "Class",
            DeclarationKind::Interface => "Interface",
            DeclarationKind::Enum => "Enum",
            DeclarationKind::Struct => "Struct",
            _ => "Member",
        }
    }
}

/// A single type or member declaration extracted from one source file.
///
/// Immutable once extracted; the pipeline only filters, tests, and renders.
#[derive(Debug, Clone)]
pub struct Declaration {
    pub kind: DeclarationKind,
    /// Start line in the source file, 1-based.
    pub line: usize,
    /// Textual modifiers in source order.
    pub modifiers: Vec<String>,
    pub identifier: Option<String>,
    pub type_text: Option<String>,
    pub return_type_text: Option<String>,
    pub parameter_list_text: Option<String>,
    pub variable_names: Vec<String>,
    /// Fallback rendering source for kinds without a dedicated form.
    pub first_line: String,
    pub leading_trivia: Vec<Trivia>,
}

impl Declaration {
    /// Build a declaration from a resolved node. The caller maps the node's
    /// kind; everything else is carried over as-is.
    pub fn from_node(kind: DeclarationKind, node: &SyntaxNode) -> Self {
        Self {
            kind,
            line: node.line,
            modifiers: node.modifiers.clone(),
            identifier: node.identifier.clone(),
            type_text: node.type_text.clone(),
            return_type_text: node.return_type_text.clone(),
            parameter_list_text: node.parameter_list_text.clone(),
            variable_names: node.variable_names.clone(),
            first_line: node.first_line.clone(),
            leading_trivia: node.leading_trivia.clone(),
        }
    }

    /// Check for a textual modifier (e.g. "public").
    pub fn has_modifier(&self, modifier: &str) -> bool {
        self.modifiers.iter().any(|m| m == modifier)
    }
}
