//! C# parser using tree-sitter.

use std::path::Path;

use tree_sitter::{Language, Node, Parser};

use super::{NodeKind, ParseError, SourceParser, SyntaxNode, SyntaxTree, Trivia, TriviaKind};

pub struct CSharpParser {
    language: Language,
}

impl CSharpParser {
    pub fn new() -> Self {
        Self {
            language: tree_sitter_c_sharp::LANGUAGE.into(),
        }
    }

    fn create_parser(&self) -> Result<Parser, ParseError> {
        let mut parser = Parser::new();
        parser
            .set_language(&self.language)
            .map_err(|e| ParseError::Grammar(e.to_string()))?;
        Ok(parser)
    }
}

impl Default for CSharpParser {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceParser for CSharpParser {
    fn language_id(&self) -> &'static str {
        "csharp"
    }

    fn file_extensions(&self) -> &'static [&'static str] {
        &["cs"]
    }

    fn parse(&self, path: &Path, source: &[u8]) -> Result<SyntaxTree, ParseError> {
        let mut parser = self.create_parser()?;
        let tree = parser.parse(source, None).ok_or_else(|| ParseError::NoTree {
            path: path.display().to_string(),
        })?;

        let root_node = tree.root_node();
        let mut root = SyntaxNode::new(NodeKind::Root, 1);
        root.children = resolve_children(root_node, source);

        Ok(SyntaxTree {
            root,
            has_errors: root_node.has_error(),
        })
    }
}

/// Map a grammar node kind to a resolved kind. Returns None for kinds the
/// audit never reports (tokens, bodies, statements).
fn declaration_kind(kind: &str) -> Option<NodeKind> {
    match kind {
        "namespace_declaration" | "file_scoped_namespace_declaration" => Some(NodeKind::Namespace),
        "class_declaration" => Some(NodeKind::Class),
        "interface_declaration" => Some(NodeKind::Interface),
        "enum_declaration" => Some(NodeKind::Enum),
        "struct_declaration" => Some(NodeKind::Struct),
        "method_declaration" => Some(NodeKind::Method),
        "property_declaration" => Some(NodeKind::Property),
        "field_declaration" => Some(NodeKind::Field),
        "constructor_declaration" => Some(NodeKind::Constructor),
        "event_declaration" | "event_field_declaration" => Some(NodeKind::Event),
        "enum_member_declaration" => Some(NodeKind::EnumMember),
        _ => None,
    }
}

/// Resolve every declaration reachable under `node`, in source order.
/// Non-declaration wrappers (bodies, using directives, tokens) are traversed
/// transparently.
fn resolve_children(node: Node, source: &[u8]) -> Vec<SyntaxNode> {
    let mut children = Vec::new();
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        match declaration_kind(child.kind()) {
            Some(kind) => children.push(resolve_declaration(child, source, kind)),
            None => children.extend(resolve_children(child, source)),
        }
    }
    children
}

fn resolve_declaration(node: Node, source: &[u8], kind: NodeKind) -> SyntaxNode {
    let mut resolved = SyntaxNode::new(kind, node.start_position().row + 1);
    resolved.modifiers = collect_modifiers(node, source);
    resolved.identifier = field_text(node, "name", source);
    resolved.parameter_list_text = field_text(node, "parameters", source);
    resolved.first_line = first_source_line(node, source);
    resolved.leading_trivia = collect_leading_trivia(node, source);

    match kind {
        NodeKind::Method => {
            // The return type field is "returns" in current grammars, "type"
            // in older ones.
            resolved.return_type_text =
                field_text(node, "returns", source).or_else(|| field_text(node, "type", source));
        }
        NodeKind::Property => {
            resolved.type_text = field_text(node, "type", source);
        }
        NodeKind::Event => {
            // event_declaration carries a type field; event_field_declaration
            // wraps a variable_declaration like a field does.
            resolved.type_text = field_text(node, "type", source).or_else(|| {
                find_child(node, "variable_declaration")
                    .and_then(|decl| field_text(decl, "type", source))
            });
        }
        NodeKind::Field => {
            if let Some(decl) = find_child(node, "variable_declaration") {
                resolved.type_text = field_text(decl, "type", source);
                resolved.variable_names = collect_variable_names(decl, source);
            }
        }
        NodeKind::Namespace
        | NodeKind::Class
        | NodeKind::Interface
        | NodeKind::Enum
        | NodeKind::Struct => {
            resolved.children = resolve_children(node, source);
        }
        _ => {}
    }

    resolved
}

fn node_text<'a>(node: Node, source: &'a [u8]) -> &'a str {
    node.utf8_text(source).unwrap_or("")
}

fn field_text(node: Node, field: &str, source: &[u8]) -> Option<String> {
    node.child_by_field_name(field)
        .map(|child| node_text(child, source).to_string())
}

fn find_child<'tree>(node: Node<'tree>, kind: &str) -> Option<Node<'tree>> {
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if child.kind() == kind {
            return Some(child);
        }
    }
    None
}

fn collect_modifiers(node: Node, source: &[u8]) -> Vec<String> {
    let mut modifiers = Vec::new();
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if child.kind() == "modifier" {
            modifiers.push(node_text(child, source).to_string());
        }
    }
    modifiers
}

fn collect_variable_names(decl: Node, source: &[u8]) -> Vec<String> {
    let mut names = Vec::new();
    let mut cursor = decl.walk();
    for child in decl.children(&mut cursor) {
        if child.kind() == "variable_declarator" {
            let name = child
                .child_by_field_name("name")
                .or_else(|| find_child(child, "identifier"));
            if let Some(name) = name {
                names.push(node_text(name, source).to_string());
            }
        }
    }
    names
}

fn first_source_line(node: Node, source: &[u8]) -> String {
    node_text(node, source)
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or("")
        .to_string()
}

/// Collect the comments leading `node`.
///
/// A comment that starts on the line where the preceding code token ends is
/// trailing trivia of that token, not leading trivia of this node; a trailing
/// comment extends that boundary line to its own end line. Blank lines do not
/// break the chain.
fn collect_leading_trivia(node: Node, source: &[u8]) -> Vec<Trivia> {
    let mut run = Vec::new();
    let mut current = node.prev_sibling();
    while let Some(sibling) = current {
        if sibling.kind() != "comment" {
            break;
        }
        run.push(sibling);
        current = sibling.prev_sibling();
    }
    run.reverse();

    let anchor = run.first().and_then(|first| first.prev_sibling());
    let mut boundary_row = anchor.map(|a| a.end_position().row);

    let mut trivia = Vec::new();
    for comment in run {
        match boundary_row {
            Some(row) if comment.start_position().row == row => {
                boundary_row = Some(comment.end_position().row);
            }
            _ => trivia.push(classify_comment(comment, source)),
        }
    }
    trivia
}

fn classify_comment(node: Node, source: &[u8]) -> Trivia {
    let text = node_text(node, source).to_string();
    let kind = if text.starts_with("///") || text.starts_with("/**") {
        TriviaKind::DocComment
    } else if text.starts_with("/*") {
        TriviaKind::BlockComment
    } else {
        TriviaKind::LineComment
    };
    Trivia { kind, text }
}
