/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 *
 * 2025 Tendsin Mende
 */

use pare_ast::{Block, Stmt};
use pare_common::PareError;

use crate::{common::IndentGuard, error::ParserError, FromTreeSitter, ParserCtx};

impl FromTreeSitter for Block {
    fn parse(
        ctx: &mut ParserCtx,
        dta: &[u8],
        node: &tree_sitter::Node,
    ) -> Result<Self, PareError<ParserError>>
    where
        Self: Sized,
    {
        ParserError::assert_node_kind(ctx, node, "block")?;

        let mut stmts = Vec::new();
        let mut indent = IndentGuard::block();
        let mut walker = node.walk();
        for child in node.named_children(&mut walker) {
            //comments and line continuations
            if child.is_extra() {
                continue;
            }
            indent.check(ctx, &child)?;
            stmts.push(Stmt::parse(ctx, dta, &child)?);
        }

        //tree-sitter accepts a header followed by a bare newline as an (empty) suite.
        if stmts.is_empty() {
            return Err(PareError::error_here(
                ParserError::EmptyBlock,
                ctx.span(node),
                "block has no statements",
            ));
        }

        Ok(Block::new(ctx.span(node), stmts))
    }
}
