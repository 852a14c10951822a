//! Scope filtering for extracted declarations.

use crate::config::MemberScope;

use super::declaration::{Declaration, DeclarationKind};

/// Decide whether a declaration participates in coverage reporting.
///
/// Type declarations always participate, whatever the scope. A field carrying
/// a private modifier is a backing field and never participates, even under
/// the private scope. Enum members always participate (they carry no
/// visibility of their own). Every other member passes the scope's
/// visibility test.
pub fn is_eligible(decl: &Declaration, scope: MemberScope) -> bool {
    if decl.kind.is_type() {
        return true;
    }

    if decl.kind == DeclarationKind::Field && decl.has_modifier("private") {
        return false;
    }

    if decl.kind == DeclarationKind::EnumMember {
        return true;
    }

    match scope {
        MemberScope::All => true,
        MemberScope::Public => decl.has_modifier("public"),
        MemberScope::Private => decl.has_modifier("private"),
    }
}
