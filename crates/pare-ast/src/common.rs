/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 *
 * 2025 Tendsin Mende
 */
use std::fmt::Display;

use pare_common::Span;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::stmt::Stmt;

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Ident(pub String);

impl Display for Ident {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

///Source snippet of an expression, or an expression-like header fragment.
///
/// `src` is the text as written, minus comments. It might span multiple lines, if the source did.
/// Continuation lines are kept exactly as they where. `canonical` is the same expression on one
/// line, with normalized spacing between its tokens.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Expr {
    pub span: Span,
    pub src: String,
    pub canonical: String,
}

impl Expr {
    ///Creates an expression whose canonical form is `src` itself.
    pub fn new(span: Span, src: impl Into<String>) -> Self {
        let src = src.into();
        Expr {
            span,
            canonical: src.clone(),
            src,
        }
    }

    pub fn with_canonical(mut self, canonical: impl Into<String>) -> Self {
        self.canonical = canonical.into();
        self
    }

    pub fn is_empty(&self) -> bool {
        self.src.is_empty()
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.src)
    }
}

///An indented suite of statements, for instance a function body or the consequence of an `if`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug)]
pub struct Block {
    pub span: Span,
    pub stmts: Vec<Stmt>,
}

impl Block {
    pub fn new(span: Span, stmts: impl IntoIterator<Item = Stmt>) -> Self {
        Block {
            span,
            stmts: stmts.into_iter().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.stmts.is_empty()
    }

    ///True if the block does nothing. That is the case if it is empty, or holds exactly one `pass` or one
    /// synthesized placeholder.
    pub fn is_vacant(&self) -> bool {
        matches!(
            self.stmts.as_slice(),
            [] | [Stmt::Pass(_)] | [Stmt::Placeholder]
        )
    }

    ///Pushes a placeholder, if the block is empty. Returns true if that happened.
    pub fn ensure_non_empty(&mut self) -> bool {
        if self.stmts.is_empty() {
            self.stmts.push(Stmt::Placeholder);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod test {
    use pare_common::Span;

    use super::Block;
    use crate::stmt::{PassStmt, Stmt};

    fn pass() -> Stmt {
        Stmt::Pass(PassStmt {
            span: Span::empty(),
        })
    }

    #[test]
    fn vacant_blocks() {
        assert!(Block::new(Span::empty(), []).is_vacant());
        assert!(Block::new(Span::empty(), [pass()]).is_vacant());
        assert!(Block::new(Span::empty(), [Stmt::Placeholder]).is_vacant());

        assert!(!Block::new(Span::empty(), [pass(), pass()]).is_vacant());
        assert!(!Block::new(Span::empty(), [Stmt::Placeholder, Stmt::Placeholder]).is_vacant());
        assert!(!Block::new(Span::empty(), [pass(), Stmt::Placeholder]).is_vacant());
    }
}
