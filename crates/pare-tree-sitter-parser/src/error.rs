/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 *
 * 2025 Tendsin Mende
 */
use std::str::Utf8Error;

use pare_common::PareError;
use thiserror::Error;
use tree_sitter::Node;

use crate::ParserCtx;

///Longest source excerpt that is put into a [ParserError::SyntaxError].
const SNIPPET_LEN: usize = 32;

#[derive(Debug, Error, Clone)]
pub enum ParserError {
    #[error("Could not load python grammar: {0}")]
    LanguageError(String),
    #[error("Could not run tree-sitter")]
    TreeSitterFailed,
    #[error("invalid syntax near '{snippet}'")]
    SyntaxError { snippet: String },
    #[error("expected {kind}")]
    MissingNode { kind: String },
    #[error("Unknown AstNode {kind}")]
    UnknownAstNode { kind: String },
    #[error("Unexpected AstNode: {kind}, expected {expected}")]
    UnexpectedAstNode { kind: String, expected: String },
    #[error("Expected child but got none")]
    NoChildAvailable,
    #[error("expected an indented block")]
    EmptyBlock,
    #[error("unexpected indentation, expected column {expected} but found {found}")]
    Indentation { expected: usize, found: usize },
    #[error("UTF8 parser error: {0}")]
    Utf8ParseError(Utf8Error),
    #[error("{0}")]
    Other(String),
}

impl ParserError {
    pub fn assert_node_kind(
        ctx: &mut ParserCtx,
        node: &Node,
        kind: &str,
    ) -> Result<(), PareError<Self>> {
        if node.kind() != kind {
            let error = Self::UnexpectedAstNode {
                kind: node.kind().to_owned(),
                expected: kind.to_owned(),
            };
            Err(PareError::error_here(
                error,
                ctx.span(node),
                format!("expected node of kind \"{kind}\""),
            ))
        } else {
            Ok(())
        }
    }

    ///Unwraps `node`, or reports that `parent` had no child of the expected `kind`.
    pub fn expect_child<'a>(
        ctx: &mut ParserCtx,
        parent: &Node,
        node: Option<Node<'a>>,
        kind: &str,
    ) -> Result<Node<'a>, PareError<Self>> {
        match node {
            Some(node) => Ok(node),
            None => Err(PareError::error_here(
                Self::NoChildAvailable,
                ctx.span(parent),
                format!("expected {kind} here"),
            )),
        }
    }

    ///Walks the subtree of `node` and records one error per `ERROR` or `MISSING` node in `ctx`.
    /// Does not descend into the erroneous nodes themselves.
    pub fn collect_syntax_errors(ctx: &mut ParserCtx, dta: &[u8], node: &Node) {
        if node.is_missing() {
            let error = Self::MissingNode {
                kind: node.kind().to_owned(),
            };
            let err = PareError::error_here(
                error,
                ctx.span(node),
                format!("expected \"{}\" here", node.kind()),
            );
            ctx.deep_errors.push(err);
            return;
        }

        if node.is_error() {
            let error = Self::SyntaxError {
                snippet: snippet(dta, node),
            };
            let err = PareError::error_here(error, ctx.span(node), "could not parse this");
            ctx.deep_errors.push(err);
            return;
        }

        if !node.has_error() {
            return;
        }

        let mut walker = node.walk();
        for child in node.children(&mut walker) {
            Self::collect_syntax_errors(ctx, dta, &child);
        }
    }
}

//First line of the node's text, cut at SNIPPET_LEN chars.
fn snippet(dta: &[u8], node: &Node) -> String {
    let text = node.utf8_text(dta).unwrap_or("");
    let first_line = text.lines().next().unwrap_or("").trim();
    if first_line.chars().count() > SNIPPET_LEN {
        let cut: String = first_line.chars().take(SNIPPET_LEN).collect();
        format!("{cut}...")
    } else {
        first_line.to_owned()
    }
}

#[cfg(test)]
mod test {
    use crate::{error::ParserError, parse_string};

    #[test]
    fn long_snippets_are_cut() {
        let long_garbage = format!("x = = {}\n", "a".repeat(100));
        let errs = parse_string(&long_garbage).unwrap_err();
        for err in errs {
            if let ParserError::SyntaxError { snippet } = err.error {
                assert!(snippet.chars().count() <= super::SNIPPET_LEN + 3);
            }
        }
    }

    #[test]
    fn every_error_has_a_span() {
        let errs = parse_string("if True\n    x = 1\nwhile:\n    pass\n").unwrap_err();
        assert!(!errs.is_empty());
        assert!(errs.iter().all(|e| e.source_span.is_some()));
    }
}
