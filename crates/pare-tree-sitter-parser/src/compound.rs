/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 *
 * 2025 Tendsin Mende
 */
//! Control-flow statements. All of them follow the same pattern: a header up to a `:`, followed by a
//! suite, optionally followed by further clauses that each carry their own suite.

use pare_ast::{
    stmt::{
        CaseClause, ElifClause, ExceptHandler, ForStmt, IfStmt, MatchStmt, TryStmt, WhileStmt,
        WithStmt,
    },
    Block,
};
use pare_common::PareError;
use tree_sitter::Node;

use crate::{
    common::{field_expr, header, is_async, required_header, suite, IndentGuard},
    error::ParserError,
    FromTreeSitter, ParserCtx,
};

///Parses the suite of a clause that has no header of its own, like `else:` or `finally:`.
fn clause_body(
    ctx: &mut ParserCtx,
    dta: &[u8],
    node: &Node,
) -> Result<Block, PareError<ParserError>> {
    let suite = suite(ctx, node)?;
    Block::parse(ctx, dta, &suite.block)
}

impl FromTreeSitter for IfStmt {
    fn parse(
        ctx: &mut ParserCtx,
        dta: &[u8],
        node: &tree_sitter::Node,
    ) -> Result<Self, PareError<ParserError>>
    where
        Self: Sized,
    {
        ParserError::assert_node_kind(ctx, node, "if_statement")?;
        let suite = suite(ctx, node)?;
        let condition = required_header(ctx, dta, node, &suite.colon)?;
        let body = Block::parse(ctx, dta, &suite.block)?;

        let mut elif_clauses = Vec::new();
        let mut else_body = None;
        let mut walker = node.walk();
        for child in node.named_children(&mut walker) {
            match child.kind() {
                "elif_clause" => {
                    let elif_suite = crate::common::suite(ctx, &child)?;
                    elif_clauses.push(ElifClause {
                        span: ctx.span(&child),
                        condition: required_header(ctx, dta, &child, &elif_suite.colon)?,
                        body: Block::parse(ctx, dta, &elif_suite.block)?,
                    });
                }
                "else_clause" => {
                    else_body = Some(clause_body(ctx, dta, &child)?);
                }
                _ => {}
            }
        }

        Ok(IfStmt {
            span: ctx.span(node),
            condition,
            body,
            elif_clauses,
            else_body,
        })
    }
}

///Searches the optional `else` clause of loops.
fn loop_else(
    ctx: &mut ParserCtx,
    dta: &[u8],
    node: &Node,
) -> Result<Option<Block>, PareError<ParserError>> {
    let mut walker = node.walk();
    let else_clause = node
        .named_children(&mut walker)
        .find(|c| c.kind() == "else_clause");
    match else_clause {
        Some(clause) => Ok(Some(clause_body(ctx, dta, &clause)?)),
        None => Ok(None),
    }
}

impl FromTreeSitter for ForStmt {
    fn parse(
        ctx: &mut ParserCtx,
        dta: &[u8],
        node: &tree_sitter::Node,
    ) -> Result<Self, PareError<ParserError>>
    where
        Self: Sized,
    {
        ParserError::assert_node_kind(ctx, node, "for_statement")?;
        let target = field_expr(ctx, dta, node, "left")?;
        let iter = field_expr(ctx, dta, node, "right")?;
        let body = clause_body(ctx, dta, node)?;
        let else_body = loop_else(ctx, dta, node)?;
        Ok(ForStmt {
            span: ctx.span(node),
            is_async: is_async(node),
            target,
            iter,
            body,
            else_body,
        })
    }
}

impl FromTreeSitter for WhileStmt {
    fn parse(
        ctx: &mut ParserCtx,
        dta: &[u8],
        node: &tree_sitter::Node,
    ) -> Result<Self, PareError<ParserError>>
    where
        Self: Sized,
    {
        ParserError::assert_node_kind(ctx, node, "while_statement")?;
        let suite = suite(ctx, node)?;
        let condition = required_header(ctx, dta, node, &suite.colon)?;
        let body = Block::parse(ctx, dta, &suite.block)?;
        let else_body = loop_else(ctx, dta, node)?;
        Ok(WhileStmt {
            span: ctx.span(node),
            condition,
            body,
            else_body,
        })
    }
}

impl FromTreeSitter for ExceptHandler {
    fn parse(
        ctx: &mut ParserCtx,
        dta: &[u8],
        node: &tree_sitter::Node,
    ) -> Result<Self, PareError<ParserError>>
    where
        Self: Sized,
    {
        let is_group = match node.kind() {
            "except_group_clause" => true,
            "except_clause" => {
                //Some grammar versions emit `except*` as `except` followed by a `*` token.
                let mut walker = node.walk();
                let mut leading = node.children(&mut walker).take(2);
                leading.any(|c| c.kind() == "except*" || c.kind() == "*")
            }
            _ => {
                return Err(PareError::error_here(
                    ParserError::UnexpectedAstNode {
                        kind: node.kind().to_owned(),
                        expected: "except_clause".to_owned(),
                    },
                    ctx.span(node),
                    "expected an except clause",
                ))
            }
        };
        let suite = suite(ctx, node)?;
        let clause = header(ctx, dta, node, &suite.colon)?;
        let body = Block::parse(ctx, dta, &suite.block)?;
        Ok(ExceptHandler {
            span: ctx.span(node),
            is_group,
            clause,
            body,
        })
    }
}

impl FromTreeSitter for TryStmt {
    fn parse(
        ctx: &mut ParserCtx,
        dta: &[u8],
        node: &tree_sitter::Node,
    ) -> Result<Self, PareError<ParserError>>
    where
        Self: Sized,
    {
        ParserError::assert_node_kind(ctx, node, "try_statement")?;
        let body = clause_body(ctx, dta, node)?;

        let mut handlers = Vec::new();
        let mut else_body = None;
        let mut finally_body = None;
        let mut walker = node.walk();
        for child in node.named_children(&mut walker) {
            match child.kind() {
                "except_clause" | "except_group_clause" => {
                    handlers.push(ExceptHandler::parse(ctx, dta, &child)?)
                }
                "else_clause" => else_body = Some(clause_body(ctx, dta, &child)?),
                "finally_clause" => finally_body = Some(clause_body(ctx, dta, &child)?),
                _ => {}
            }
        }

        Ok(TryStmt {
            span: ctx.span(node),
            body,
            handlers,
            else_body,
            finally_body,
        })
    }
}

impl FromTreeSitter for WithStmt {
    fn parse(
        ctx: &mut ParserCtx,
        dta: &[u8],
        node: &tree_sitter::Node,
    ) -> Result<Self, PareError<ParserError>>
    where
        Self: Sized,
    {
        ParserError::assert_node_kind(ctx, node, "with_statement")?;
        let suite = suite(ctx, node)?;
        let items = required_header(ctx, dta, node, &suite.colon)?;
        let body = Block::parse(ctx, dta, &suite.block)?;
        Ok(WithStmt {
            span: ctx.span(node),
            is_async: is_async(node),
            items,
            body,
        })
    }
}

impl FromTreeSitter for CaseClause {
    fn parse(
        ctx: &mut ParserCtx,
        dta: &[u8],
        node: &tree_sitter::Node,
    ) -> Result<Self, PareError<ParserError>>
    where
        Self: Sized,
    {
        ParserError::assert_node_kind(ctx, node, "case_clause")?;
        let suite = suite(ctx, node)?;
        let pattern = required_header(ctx, dta, node, &suite.colon)?;
        let body = Block::parse(ctx, dta, &suite.block)?;
        Ok(CaseClause {
            span: ctx.span(node),
            pattern,
            body,
        })
    }
}

impl FromTreeSitter for MatchStmt {
    fn parse(
        ctx: &mut ParserCtx,
        dta: &[u8],
        node: &tree_sitter::Node,
    ) -> Result<Self, PareError<ParserError>>
    where
        Self: Sized,
    {
        ParserError::assert_node_kind(ctx, node, "match_statement")?;
        let suite = suite(ctx, node)?;
        let subject = required_header(ctx, dta, node, &suite.colon)?;

        //The match body is a block of case clauses, not of statements.
        let mut cases = Vec::new();
        let mut indent = IndentGuard::block();
        let mut walker = suite.block.walk();
        for child in suite.block.named_children(&mut walker) {
            if child.is_extra() {
                continue;
            }
            indent.check(ctx, &child)?;
            cases.push(CaseClause::parse(ctx, dta, &child)?);
        }

        if cases.is_empty() {
            return Err(PareError::error_here(
                ParserError::EmptyBlock,
                ctx.span(node),
                "match needs at least one case",
            ));
        }

        Ok(MatchStmt {
            span: ctx.span(node),
            subject,
            cases,
        })
    }
}
