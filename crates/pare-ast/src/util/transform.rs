/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 *
 * 2025 Tendsin Mende
 */
use crate::{Block, Stmt, SyntaxTree};

///Decision an [AstRewriter] takes for a single statement.
#[derive(Debug, Clone)]
pub enum Rewrite {
    ///Keeps the (possibly modified) statement in place.
    Keep(Stmt),
    ///Removes the statement from its block.
    Remove,
    ///Replaces the statement with any number of statements.
    Replace(Vec<Stmt>),
}

///Allows an implementor to rewrite the AST bottom-up.
///
/// Each statement's child blocks are rewritten first. Afterwards [AstRewriter::leave_block] is called on each of
/// those blocks, and finally the statement itself is handed to [AstRewriter::rewrite_stmt]. So by the time a
/// statement is seen, all of its children are already in their final state.
///
/// The module level is not a block, so `leave_block` is never called for it.
#[allow(unused_variables)]
pub trait AstRewriter {
    fn rewrite_stmt(&mut self, stmt: Stmt) -> Rewrite {
        Rewrite::Keep(stmt)
    }
    fn leave_block(&mut self, block: &mut Block) {}
}

impl SyntaxTree {
    ///Rewrites the whole tree via `rewriter`.
    pub fn rewrite<R: AstRewriter>(mut self, rewriter: &mut R) -> Self {
        let stmts = std::mem::take(&mut self.stmts);
        self.stmts = rewrite_stmts(stmts, rewriter);
        self
    }
}

impl Block {
    pub fn rewrite<R: AstRewriter>(&mut self, rewriter: &mut R) {
        let stmts = std::mem::take(&mut self.stmts);
        self.stmts = rewrite_stmts(stmts, rewriter);
        rewriter.leave_block(self);
    }
}

impl Stmt {
    ///Rewrites all child blocks of `self`, but not `self`.
    pub fn rewrite_children<R: AstRewriter>(&mut self, rewriter: &mut R) {
        for block in self.blocks_mut() {
            block.rewrite(rewriter);
        }
    }
}

fn rewrite_stmts<R: AstRewriter>(stmts: Vec<Stmt>, rewriter: &mut R) -> Vec<Stmt> {
    let mut rewritten = Vec::with_capacity(stmts.len());
    for mut stmt in stmts {
        stmt.rewrite_children(rewriter);
        match rewriter.rewrite_stmt(stmt) {
            Rewrite::Keep(stmt) => rewritten.push(stmt),
            Rewrite::Remove => {}
            Rewrite::Replace(replacement) => rewritten.extend(replacement),
        }
    }
    rewritten
}
