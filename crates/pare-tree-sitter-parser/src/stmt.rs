/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 *
 * 2025 Tendsin Mende
 */

use pare_ast::{
    stmt::{
        ClassDef, FuncDef, ForStmt, IfStmt, MatchStmt, PassStmt, SimpleKind, SimpleStmt, TryStmt,
        WhileStmt, WithStmt,
    },
    Stmt,
};
use pare_common::PareError;

use crate::{common::node_snippet, error::ParserError, FromTreeSitter, ParserCtx};

///Maps the node kind of a simple statement to its [SimpleKind].
fn simple_kind(kind: &str) -> Option<SimpleKind> {
    let k = match kind {
        "expression_statement" => SimpleKind::Expression,
        "return_statement" => SimpleKind::Return,
        "import_statement" => SimpleKind::Import,
        "import_from_statement" => SimpleKind::ImportFrom,
        "future_import_statement" => SimpleKind::FutureImport,
        "assert_statement" => SimpleKind::Assert,
        "delete_statement" => SimpleKind::Delete,
        "raise_statement" => SimpleKind::Raise,
        "break_statement" => SimpleKind::Break,
        "continue_statement" => SimpleKind::Continue,
        "global_statement" => SimpleKind::Global,
        "nonlocal_statement" => SimpleKind::Nonlocal,
        "type_alias_statement" => SimpleKind::TypeAlias,
        _ => return None,
    };
    Some(k)
}

impl FromTreeSitter for Stmt {
    fn parse(
        ctx: &mut ParserCtx,
        dta: &[u8],
        node: &tree_sitter::Node,
    ) -> Result<Self, PareError<ParserError>>
    where
        Self: Sized,
    {
        match node.kind() {
            "pass_statement" => Ok(Stmt::Pass(PassStmt {
                span: ctx.span(node),
            })),
            "if_statement" => Ok(Stmt::If(IfStmt::parse(ctx, dta, node)?)),
            "for_statement" => Ok(Stmt::For(ForStmt::parse(ctx, dta, node)?)),
            "while_statement" => Ok(Stmt::While(WhileStmt::parse(ctx, dta, node)?)),
            "try_statement" => Ok(Stmt::Try(TryStmt::parse(ctx, dta, node)?)),
            "with_statement" => Ok(Stmt::With(WithStmt::parse(ctx, dta, node)?)),
            "match_statement" => Ok(Stmt::Match(MatchStmt::parse(ctx, dta, node)?)),
            "function_definition" => Ok(Stmt::Func(FuncDef::parse(ctx, dta, node)?)),
            "class_definition" => Ok(Stmt::Class(ClassDef::parse(ctx, dta, node)?)),
            "decorated_definition" => crate::toplevel::parse_decorated(ctx, dta, node),
            other => {
                if let Some(kind) = simple_kind(other) {
                    Ok(Stmt::Simple(parse_simple(ctx, dta, node, kind)?))
                } else {
                    Err(PareError::error_here(
                        ParserError::UnknownAstNode {
                            kind: other.to_owned(),
                        },
                        ctx.span(node),
                        "here",
                    ))
                }
            }
        }
    }
}

fn parse_simple(
    ctx: &mut ParserCtx,
    dta: &[u8],
    node: &tree_sitter::Node,
    kind: SimpleKind,
) -> Result<SimpleStmt, PareError<ParserError>> {
    let snippet = node_snippet(ctx, dta, node)?;
    Ok(SimpleStmt {
        span: ctx.span(node),
        kind,
        src: snippet.src,
        canonical: snippet.canonical,
    })
}
