/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 *
 * 2025 Tendsin Mende
 */
//! # Pare-AST
//!
//! The syntax tree of a single Python source file.
//!
//! Statements are modelled structurally, since all rewrites pare applies work on the
//! statement level. Expressions, as well as the non-block parts of compound statement headers
//! (conditions, signatures, with-items, patterns ...) are kept as the verbatim source snippet they
//! where parsed from. Comments are not part of the tree.
//!
//! The tree is produced by some [AstParser] (usually `pare-tree-sitter-parser`), rewritten through
//! an [AstRewriter](util::AstRewriter) and finally turned back into text by `pare-fmt`.

use std::error::Error;

use pare_common::PareError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub mod common;
pub mod stmt;
pub mod util;

pub use common::{Block, Expr, Ident};
pub use stmt::Stmt;
pub use util::{AstRewriter, Rewrite};

///Parser interface that is implemented by the parser crate. Keeps the AST crate independent from the
/// actual grammar implementation.
pub trait AstParser {
    type Error: Error;
    fn parse_from_bytes(
        &self,
        src_file: Option<&str>,
        bytes: &[u8],
    ) -> Result<SyntaxTree, Vec<PareError<Self::Error>>>;
}

///The root of a parsed file, i.e. Python's _module_.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Default)]
pub struct SyntaxTree {
    pub stmts: Vec<Stmt>,
}

impl SyntaxTree {
    pub fn new(stmts: Vec<Stmt>) -> Self {
        SyntaxTree { stmts }
    }

    ///Parses `source` with the given `parser`.
    pub fn from_source<E: Error>(
        source: &str,
        parser: &dyn AstParser<Error = E>,
    ) -> Result<Self, Vec<PareError<E>>> {
        parser.parse_from_bytes(None, source.as_bytes())
    }

    pub fn is_empty(&self) -> bool {
        self.stmts.is_empty()
    }

    ///Counts all statements, including nested ones.
    pub fn stmt_count(&self) -> usize {
        fn count(stmts: &[Stmt]) -> usize {
            stmts
                .iter()
                .map(|stmt| 1 + stmt.blocks().iter().map(|b| count(&b.stmts)).sum::<usize>())
                .sum()
        }
        count(&self.stmts)
    }
}
