/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 *
 * 2025 Tendsin Mende
 */
//! Function and class definitions, including their decorators.

use pare_ast::{
    stmt::{ClassDef, FuncDef},
    Block, Expr, Ident, Stmt,
};
use pare_common::PareError;
use tree_sitter::Node;

use crate::{
    common::{is_async, node_snippet, snippet, suite},
    error::ParserError,
    FromTreeSitter, ParserCtx,
};

impl FromTreeSitter for FuncDef {
    fn parse(
        ctx: &mut ParserCtx,
        dta: &[u8],
        node: &tree_sitter::Node,
    ) -> Result<Self, PareError<ParserError>>
    where
        Self: Sized,
    {
        ParserError::assert_node_kind(ctx, node, "function_definition")?;
        let name_node =
            ParserError::expect_child(ctx, node, node.child_by_field_name("name"), "name")?;
        let name = Ident::parse(ctx, dta, &name_node)?;
        let suite = suite(ctx, node)?;
        //type parameters, parameters and return annotation
        let signature = snippet(
            ctx,
            dta,
            node,
            name_node.end_byte(),
            suite.colon.start_byte(),
        )?
        .src;
        let body = Block::parse(ctx, dta, &suite.block)?;

        Ok(FuncDef {
            span: ctx.span(node),
            decorators: Vec::new(),
            is_async: is_async(node),
            name,
            signature,
            body,
        })
    }
}

impl FromTreeSitter for ClassDef {
    fn parse(
        ctx: &mut ParserCtx,
        dta: &[u8],
        node: &tree_sitter::Node,
    ) -> Result<Self, PareError<ParserError>>
    where
        Self: Sized,
    {
        ParserError::assert_node_kind(ctx, node, "class_definition")?;
        let name_node =
            ParserError::expect_child(ctx, node, node.child_by_field_name("name"), "name")?;
        let name = Ident::parse(ctx, dta, &name_node)?;
        let suite = suite(ctx, node)?;
        let arguments = snippet(
            ctx,
            dta,
            node,
            name_node.end_byte(),
            suite.colon.start_byte(),
        )?
        .src;
        let body = Block::parse(ctx, dta, &suite.block)?;

        Ok(ClassDef {
            span: ctx.span(node),
            decorators: Vec::new(),
            name,
            arguments,
            body,
        })
    }
}

fn decorator(
    ctx: &mut ParserCtx,
    dta: &[u8],
    node: &Node,
) -> Result<Expr, PareError<ParserError>> {
    let snippet = node_snippet(ctx, dta, node)?;
    let strip = |s: &str| s.trim_start_matches('@').trim().to_owned();
    Ok(Expr::new(ctx.span(node), strip(&snippet.src)).with_canonical(strip(&snippet.canonical)))
}

///Parses a `decorated_definition`. The decorators are attached to the inner definition, which keeps its
/// own span.
pub fn parse_decorated(
    ctx: &mut ParserCtx,
    dta: &[u8],
    node: &Node,
) -> Result<Stmt, PareError<ParserError>> {
    ParserError::assert_node_kind(ctx, node, "decorated_definition")?;

    let mut decorators = Vec::new();
    let mut walker = node.walk();
    for child in node.named_children(&mut walker) {
        if child.kind() == "decorator" {
            decorators.push(decorator(ctx, dta, &child)?);
        }
    }

    let definition = ParserError::expect_child(
        ctx,
        node,
        node.child_by_field_name("definition"),
        "definition",
    )?;
    match definition.kind() {
        "function_definition" => {
            let mut func = FuncDef::parse(ctx, dta, &definition)?;
            func.decorators = decorators;
            Ok(Stmt::Func(func))
        }
        "class_definition" => {
            let mut class = ClassDef::parse(ctx, dta, &definition)?;
            class.decorators = decorators;
            Ok(Stmt::Class(class))
        }
        other => Err(PareError::error_here(
            ParserError::UnexpectedAstNode {
                kind: other.to_owned(),
                expected: "function or class definition".to_owned(),
            },
            ctx.span(&definition),
            "here",
        )),
    }
}
