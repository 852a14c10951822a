//! Source parsing layer.
//!
//! Turns raw source text into a [`SyntaxTree`] of declaration-bearing nodes
//! with kinds, modifiers, spans, and leading comments already resolved. The
//! audit pipeline consumes only the types defined here, so adding a language
//! means implementing [`SourceParser`] and registering it; nothing downstream
//! changes.

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};

use thiserror::Error;

#[cfg(feature = "tree-sitter")]
mod csharp;

#[cfg(feature = "tree-sitter")]
pub use csharp::CSharpParser;

#[cfg(feature = "tree-sitter")]
use once_cell::sync::OnceCell;

/// Errors raised while turning source text into a syntax tree.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The grammar was rejected by the parser runtime (version mismatch).
    #[error("grammar could not be loaded: {0}")]
    Grammar(String),

    /// The parser produced no tree at all for the file.
    #[error("no parse tree produced for {path}")]
    NoTree { path: String },
}

/// Node classification in a resolved syntax tree.
///
/// `Root` and `Namespace` are containers: they are traversed but never
/// reported. Everything else is a declaration the audit pipeline may emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Root,
    Namespace,
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

impl NodeKind {
    /// True for type declarations (class, interface, enum, struct).
    pub fn is_type(&self) -> bool {
        matches!(
            self,
            NodeKind::Class | NodeKind::Interface | NodeKind::Enum | NodeKind::Struct
        )
    }
}

/// Classification of a single attached comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriviaKind {
    LineComment,
    BlockComment,
    DocComment,
}

/// A comment attached ahead of a declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trivia {
    pub kind: TriviaKind,
    pub text: String,
}

/// One resolved node of a parsed file.
///
/// Fields that do not apply to a node's kind are left empty; consumers decide
/// per kind which fields carry meaning.
#[derive(Debug, Clone)]
pub struct SyntaxNode {
    pub kind: NodeKind,
    /// Start line in the source file, 1-based.
    pub line: usize,
    /// Textual modifiers in source order (e.g. "public", "static").
    pub modifiers: Vec<String>,
    /// Declared name, when the grammar exposes one.
    pub identifier: Option<String>,
    /// Declared type text (properties, fields, events).
    pub type_text: Option<String>,
    /// Return type text (methods).
    pub return_type_text: Option<String>,
    /// Parameter list text including parentheses (methods, constructors).
    pub parameter_list_text: Option<String>,
    /// Declared variable names; fields may declare several at once.
    pub variable_names: Vec<String>,
    /// First non-empty source line of the node, trimmed.
    pub first_line: String,
    /// Comments leading this node, in source order.
    pub leading_trivia: Vec<Trivia>,
    /// Nested declarations (type bodies, namespace bodies).
    pub children: Vec<SyntaxNode>,
}

impl SyntaxNode {
    pub fn new(kind: NodeKind, line: usize) -> Self {
        Self {
            kind,
            line,
            modifiers: Vec::new(),
            identifier: None,
            type_text: None,
            return_type_text: None,
            parameter_list_text: None,
            variable_names: Vec::new(),
            first_line: String::new(),
            leading_trivia: Vec::new(),
            children: Vec::new(),
        }
    }
}

/// A fully resolved parse result for one file.
pub struct SyntaxTree {
    pub root: SyntaxNode,
    /// True when the grammar flagged ERROR nodes; the tree is still usable.
    pub has_errors: bool,
}

/// Language front-end turning source bytes into a resolved tree.
///
/// # Thread Safety
///
/// Note: tree_sitter::Parser is not Sync, so implementations should create
/// parsers as needed rather than caching one.
pub trait SourceParser: Send + Sync {
    /// Returns the language identifier (e.g., "csharp").
    fn language_id(&self) -> &'static str;

    /// Returns file extensions this parser handles (without dot).
    fn file_extensions(&self) -> &'static [&'static str];

    /// Parse a source file into a resolved tree.
    ///
    /// Returns an error only when no tree can be produced at all. Partial
    /// parse errors yield a valid tree with `has_errors` set.
    fn parse(&self, path: &Path, source: &[u8]) -> Result<SyntaxTree, ParseError>;

    /// Check if this parser handles the given file extension.
    fn handles_extension(&self, ext: &str) -> bool {
        self.file_extensions().contains(&ext)
    }
}

/// Static storage for the C# parser.
#[cfg(feature = "tree-sitter")]
static CSHARP_PARSER: OnceCell<CSharpParser> = OnceCell::new();

/// Whether parsers have been registered.
static REGISTERED: AtomicBool = AtomicBool::new(false);

/// Register all available language parsers.
///
/// Call this once at startup before scanning. Idempotent.
pub fn register_parsers() {
    if REGISTERED.swap(true, Ordering::SeqCst) {
        return; // Already registered
    }

    #[cfg(feature = "tree-sitter")]
    CSHARP_PARSER.get_or_init(CSharpParser::new);
}

/// Get a parser for the given file extension.
///
/// Returns None if no parser is registered for the extension.
pub fn get_parser(ext: &str) -> Option<&'static dyn SourceParser> {
    // Ensure parsers are registered
    register_parsers();

    match ext {
        #[cfg(feature = "tree-sitter")]
        "cs" => CSHARP_PARSER.get().map(|p| p as &'static dyn SourceParser),
        _ => None,
    }
}

/// Get all file extensions served by registered parsers.
pub fn supported_extensions() -> Vec<&'static str> {
    register_parsers();

    let mut extensions = Vec::new();
    #[cfg(feature = "tree-sitter")]
    if let Some(parser) = CSHARP_PARSER.get() {
        extensions.extend_from_slice(parser.file_extensions());
    }
    extensions
}
