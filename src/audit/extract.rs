//! Declaration extraction from resolved syntax trees.

use crate::parser::{NodeKind, SyntaxNode, SyntaxTree};

use super::declaration::{Declaration, DeclarationKind};

/// Extract reportable declarations in traversal order: each type in order of
/// appearance, immediately followed by its direct members in source order.
/// Nested types come up as independent type entries of their own.
///
/// Pure derivation over an already-parsed tree; no side effects.
pub fn extract(tree: &SyntaxTree) -> Vec<Declaration> {
    let mut types = Vec::new();
    collect_types(&tree.root, &mut types);

    let mut declarations = Vec::new();
    for type_node in types {
        if let Some(kind) = map_kind(type_node.kind) {
            declarations.push(Declaration::from_node(kind, type_node));
        }
        for child in &type_node.children {
            if let Some(kind) = map_kind(child.kind) {
                if kind.is_member() {
                    declarations.push(Declaration::from_node(kind, child));
                }
            }
        }
    }
    declarations
}

/// Pre-order walk collecting type nodes, so types surface in the order they
/// start in the file, nested ones right after their enclosing type.
fn collect_types<'a>(node: &'a SyntaxNode, types: &mut Vec<&'a SyntaxNode>) {
    if node.kind.is_type() {
        types.push(node);
    }
    for child in &node.children {
        collect_types(child, types);
    }
}

fn map_kind(kind: NodeKind) -> Option<DeclarationKind> {
    match kind {
        NodeKind::Class => Some(DeclarationKind::Class),
        NodeKind::Interface => Some(DeclarationKind::Interface),
        NodeKind::Enum => Some(DeclarationKind::Enum),
        NodeKind::Struct => Some(DeclarationKind::Struct),
        NodeKind::Method => Some(DeclarationKind::Method),
        NodeKind::Property => Some(DeclarationKind::Property),
        NodeKind::Field => Some(DeclarationKind::Field),
        NodeKind::Constructor => Some(DeclarationKind::Constructor),
        NodeKind::Event => Some(DeclarationKind::Event),
        NodeKind::EnumMember => Some(DeclarationKind::EnumMember),
        NodeKind::Root | NodeKind::Namespace => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(kind: NodeKind, line: usize, name: &str) -> SyntaxNode {
        let mut n = SyntaxNode::new(kind, line);
        if !name.is_empty() {
            n.identifier = Some(name.to_string());
        }
        n
    }

    fn tree_with(children: Vec<SyntaxNode>) -> SyntaxTree {
        let mut root = SyntaxNode::new(NodeKind::Root, 1);
        root.children = children;
        SyntaxTree {
            root,
            has_errors: false,
        }
    }

    fn names(declarations: &[Declaration]) -> Vec<&str> {
        declarations
            .iter()
            .map(|d| d.identifier.as_deref().unwrap_or(""))
            .collect()
    }

    #[test]
    fn test_type_precedes_its_members() {
        let mut foo = node(NodeKind::Class, 1, "Foo");
        foo.children = vec![
            node(NodeKind::Field, 2, "A"),
            node(NodeKind::Method, 3, "B"),
        ];

        let declarations = extract(&tree_with(vec![foo]));
        assert_eq!(names(&declarations), vec!["Foo", "A", "B"]);
        assert_eq!(declarations[0].kind, DeclarationKind::Class);
        assert_eq!(declarations[1].kind, DeclarationKind::Field);
        assert_eq!(declarations[2].kind, DeclarationKind::Method);
    }

    #[test]
    fn test_types_in_file_order() {
        let first = node(NodeKind::Class, 1, "First");
        let second = node(NodeKind::Interface, 5, "Second");

        let declarations = extract(&tree_with(vec![first, second]));
        assert_eq!(names(&declarations), vec!["First", "Second"]);
    }

    #[test]
    fn test_namespaces_are_traversed_not_emitted() {
        let mut ns = node(NodeKind::Namespace, 1, "Acme");
        ns.children = vec![node(NodeKind::Class, 2, "Widget")];

        let declarations = extract(&tree_with(vec![ns]));
        assert_eq!(names(&declarations), vec!["Widget"]);
    }

    #[test]
    fn test_nested_type_follows_outer_members() {
        let mut inner = node(NodeKind::Class, 3, "Inner");
        inner.children = vec![node(NodeKind::Field, 4, "Hidden")];

        let mut outer = node(NodeKind::Class, 1, "Outer");
        outer.children = vec![
            node(NodeKind::Field, 2, "Before"),
            inner,
            node(NodeKind::Field, 6, "After"),
        ];

        let declarations = extract(&tree_with(vec![outer]));
        // Outer's own members all come first, then the nested type block.
        assert_eq!(
            names(&declarations),
            vec!["Outer", "Before", "After", "Inner", "Hidden"]
        );
    }

    #[test]
    fn test_enum_members_are_extracted() {
        let mut color = node(NodeKind::Enum, 1, "Color");
        color.children = vec![
            node(NodeKind::EnumMember, 2, "Red"),
            node(NodeKind::EnumMember, 3, "Green"),
        ];

        let declarations = extract(&tree_with(vec![color]));
        assert_eq!(names(&declarations), vec!["Color", "Red", "Green"]);
        assert_eq!(declarations[1].kind, DeclarationKind::EnumMember);
    }

    #[test]
    fn test_empty_tree_yields_nothing() {
        let declarations = extract(&tree_with(Vec::new()));
        assert!(declarations.is_empty());
    }

    #[test]
    fn test_members_outside_types_are_not_emitted() {
        // A stray member at the top level has no enclosing type and is skipped.
        let declarations = extract(&tree_with(vec![node(NodeKind::Method, 1, "Orphan")]));
        assert!(declarations.is_empty());
    }
}
