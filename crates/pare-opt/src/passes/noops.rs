/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 *
 * 2025 Tendsin Mende
 */
use pare_ast::{AstRewriter, Block, Rewrite, Stmt, SyntaxTree};

use crate::{Change, ChangeKind, Optimizer, RewriteResult};

///Fills blocks that ended up empty with a placeholder.
pub(crate) fn fill_empty(block: &mut Block) {
    if block.ensure_non_empty() {
        #[cfg(feature = "log")]
        log::trace!("placeholder inserted into block at line {}", block.span.line_or_unknown());
    }
}

///Removes all `pass` statements, and records one change for each.
#[derive(Default)]
pub(crate) struct NoopVoider {
    pub changes: Vec<Change>,
}

impl NoopVoider {
    ///Number of voided statements so far.
    pub fn voided(&self) -> usize {
        self.changes.len()
    }
}

impl AstRewriter for NoopVoider {
    fn rewrite_stmt(&mut self, stmt: Stmt) -> Rewrite {
        if let Stmt::Pass(pass) = &stmt {
            self.changes.push(Change::new(
                ChangeKind::VoidedNoop,
                format!(
                    "pass statement voided at line {}",
                    pass.span.line_or_unknown()
                ),
            ));
            Rewrite::Remove
        } else {
            Rewrite::Keep(stmt)
        }
    }

    fn leave_block(&mut self, block: &mut Block) {
        fill_empty(block);
    }
}

impl Optimizer {
    ///Removes every `pass` statement. Nested blocks that become empty receive a `...` placeholder.
    pub fn void_noops(&self, tree: SyntaxTree) -> RewriteResult {
        let mut voider = NoopVoider::default();
        let tree = tree.rewrite(&mut voider);
        #[cfg(feature = "log")]
        log::debug!("voided {} no-op statements", voider.voided());
        RewriteResult {
            tree,
            changes: voider.changes,
        }
    }
}
