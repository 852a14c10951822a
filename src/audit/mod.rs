//! Declaration auditing pipeline.
//!
//! Turns parsed syntax trees into documentation findings:
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌───────────────┐
//! │ SyntaxTree   │────▶│ extract()    │────▶│ Declarations  │
//! └──────────────┘     └──────────────┘     └───────────────┘
//!                                                   │
//!                          eligibility + docs check │
//!                                                   ▼
//!                      ┌──────────────┐     ┌───────────────┐
//!                      │ Report       │◀────│ Scanner       │
//!                      │ (per file)   │     │ (parallel)    │
//!                      └──────────────┘     └───────────────┘
//! ```
//!
//! The stages are deliberately separate: extraction walks the tree,
//! eligibility applies the scope policy, the docs check inspects leading
//! trivia, and the signature renderer produces the reported text. Each can
//! be tested in isolation.

mod declaration;
mod docs;
mod eligibility;
mod extract;
mod scanner;
mod signature;

pub use declaration::{Declaration, DeclarationKind};
pub use docs::is_documented;
pub use eligibility::is_eligible;
pub use extract::extract;
pub use scanner::{FileAudit, ScanOutcome, Scanner};
pub use signature::render;
