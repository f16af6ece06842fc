/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 *
 * 2025 Tendsin Mende
 */
use pare_ast::{stmt::IfStmt, AstRewriter, Block, Rewrite, Stmt, SyntaxTree};

use crate::{passes::noops::fill_empty, Change, ChangeKind, Optimizer, RewriteResult};

///Removes `if` statements with a vacant consequence, and truncates the clause chain at the first vacant
/// `elif`.
#[derive(Default)]
struct EmptyBlockVoider {
    changes: Vec<Change>,
}

impl EmptyBlockVoider {
    //Drops the first vacant elif and everything after it.
    fn truncate_elifs(&mut self, ifstmt: &mut IfStmt) {
        let Some(first_vacant) = ifstmt
            .elif_clauses
            .iter()
            .position(|elif| elif.body.is_vacant())
        else {
            return;
        };

        let line = ifstmt.elif_clauses[first_vacant].span.line_or_unknown();
        self.changes.push(Change::new(
            ChangeKind::VoidedBlock,
            format!("empty elif block voided at line {line}"),
        ));
        ifstmt.elif_clauses.truncate(first_vacant);
        ifstmt.else_body = None;
    }
}

impl AstRewriter for EmptyBlockVoider {
    fn rewrite_stmt(&mut self, stmt: Stmt) -> Rewrite {
        let mut ifstmt = match stmt {
            Stmt::If(ifstmt) => ifstmt,
            other => return Rewrite::Keep(other),
        };

        if ifstmt.body.is_vacant() {
            self.changes.push(Change::new(
                ChangeKind::VoidedBlock,
                format!(
                    "empty if block voided at line {}",
                    ifstmt.span.line_or_unknown()
                ),
            ));
            return Rewrite::Remove;
        }

        self.truncate_elifs(&mut ifstmt);
        Rewrite::Keep(Stmt::If(ifstmt))
    }

    fn leave_block(&mut self, block: &mut Block) {
        fill_empty(block);
    }
}

impl Optimizer {
    ///Removes `if` statements whose consequence is empty, only `pass` or only a placeholder. Works
    /// bottom-up, so an `if` that only contained such an `if` is removed as well.
    pub fn void_empty_blocks(&self, tree: SyntaxTree) -> RewriteResult {
        let mut voider = EmptyBlockVoider::default();
        let tree = tree.rewrite(&mut voider);
        RewriteResult {
            tree,
            changes: voider.changes,
        }
    }
}
