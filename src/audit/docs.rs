//! Documentation presence checks.

use crate::parser::TriviaKind;

use super::declaration::Declaration;

/// A declaration counts as documented when any line, block, or doc comment
/// leads it. Comment content is never inspected.
pub fn is_documented(decl: &Declaration) -> bool {
    decl.leading_trivia.iter().any(|trivia| {
        matches!(
            trivia.kind,
            TriviaKind::LineComment | TriviaKind::BlockComment | TriviaKind::DocComment
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Trivia;

    use crate::audit::declaration::DeclarationKind;

    fn decl_with_trivia(trivia: Vec<Trivia>) -> Declaration {
        Declaration {
            kind: DeclarationKind::Method,
            line: 1,
            modifiers: Vec::new(),
            identifier: None,
            type_text: None,
            return_type_text: None,
            parameter_list_text: None,
            variable_names: Vec::new(),
            first_line: String::new(),
            leading_trivia: trivia,
        }
    }

    fn comment(kind: TriviaKind, text: &str) -> Trivia {
        Trivia {
            kind,
            text: text.to_string(),
        }
    }

    #[test]
    fn test_no_trivia_is_undocumented() {
        assert!(!is_documented(&decl_with_trivia(Vec::new())));
    }

    #[test]
    fn test_each_comment_kind_counts() {
        let line = decl_with_trivia(vec![comment(TriviaKind::LineComment, "// x")]);
        assert!(is_documented(&line));

        let block = decl_with_trivia(vec![comment(TriviaKind::BlockComment, "/* x */")]);
        assert!(is_documented(&block));

        let doc = decl_with_trivia(vec![comment(TriviaKind::DocComment, "/// x")]);
        assert!(is_documented(&doc));
    }

    #[test]
    fn test_one_character_comment_counts() {
        let decl = decl_with_trivia(vec![comment(TriviaKind::LineComment, "//x")]);
        assert!(is_documented(&decl));
    }

    #[test]
    fn test_adding_a_comment_flips_the_verdict() {
        let mut decl = decl_with_trivia(Vec::new());
        assert!(!is_documented(&decl));

        decl.leading_trivia
            .push(comment(TriviaKind::LineComment, "// now documented"));
        assert!(is_documented(&decl));
    }
}
