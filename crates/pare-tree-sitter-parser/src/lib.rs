/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 *
 * 2025 Tendsin Mende
 */
//! Parses Python source into a [SyntaxTree] using the `tree-sitter-python` grammar.
//!
//! tree-sitter always produces _some_ tree. Any `ERROR` or `MISSING` node in that tree is
//! reported as a syntax error, and no [SyntaxTree] is returned in that case.

use common::IndentGuard;
use error::ParserError;
use pare_ast::{AstParser, Stmt, SyntaxTree};
use pare_common::{PareError, Span};
use tree_sitter::{Node, Parser};
pub use tree_sitter_python;

pub mod block;
pub mod common;
pub mod compound;
pub mod error;
pub mod stmt;
pub mod toplevel;

///Context on the parser, like the current src file, and errors that occurred, but did not stop parsing.
pub struct ParserCtx {
    deep_errors: Vec<PareError<ParserError>>,
    src_file: Option<String>,
}

impl ParserCtx {
    pub fn new(file: impl Into<String>) -> ParserCtx {
        ParserCtx {
            deep_errors: Vec::new(),
            src_file: Some(file.into()),
        }
    }
    pub fn new_fileless() -> ParserCtx {
        ParserCtx {
            deep_errors: Vec::new(),
            src_file: None,
        }
    }
    ///Creates a new span for `node` on this context.
    pub fn span(&self, node: &Node) -> Span {
        Span::from(node)
    }

    pub fn get_file(&self) -> Option<&str> {
        self.src_file.as_deref()
    }
}

pub trait FromTreeSitter {
    fn parse(
        ctx: &mut ParserCtx,
        dta: &[u8],
        node: &tree_sitter::Node,
    ) -> Result<Self, PareError<ParserError>>
    where
        Self: Sized;
}

///Parses `string`. Returns the [SyntaxTree] on success, or all errors that where found.
pub fn parse_string(string: &str) -> Result<SyntaxTree, Vec<PareError<ParserError>>> {
    parse_data(string.as_bytes(), None)
}

//load the python tree-sitter grammar / parser
fn parser() -> Result<Parser, PareError<ParserError>> {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_python::LANGUAGE.into())
        .map_err(|e| PareError::new(ParserError::LanguageError(e.to_string())))?;
    Ok(parser)
}

pub struct PareTreeSitterParser;

impl AstParser for PareTreeSitterParser {
    type Error = ParserError;
    fn parse_from_bytes(
        &self,
        src_file: Option<&str>,
        bytes: &[u8],
    ) -> Result<SyntaxTree, Vec<PareError<Self::Error>>> {
        parse_data(bytes, src_file)
    }
}

///Internal parser implementation
fn parse_data(
    data: &[u8],
    src_file: Option<&str>,
) -> Result<SyntaxTree, Vec<PareError<ParserError>>> {
    let mut ctx = if let Some(src) = src_file {
        ParserCtx::new(src)
    } else {
        ParserCtx::new_fileless()
    };

    let mut parser = parser().map_err(|e| vec![e])?;
    let syn_tree = match parser.parse(data, None) {
        None => {
            return Err(vec![PareError::new(ParserError::TreeSitterFailed)]);
        }
        Some(syntree) => syntree,
    };

    let root = syn_tree.root_node();
    if root.has_error() {
        ParserError::collect_syntax_errors(&mut ctx, data, &root);
        if ctx.deep_errors.is_empty() {
            ctx.deep_errors.push(PareError::error_here(
                ParserError::Other("invalid syntax".to_owned()),
                ctx.span(&root),
                "somewhere in here",
            ));
        }
        log::debug!(
            "found {} syntax errors in {}",
            ctx.deep_errors.len(),
            ctx.get_file().unwrap_or("<string>")
        );
        return Err(ctx.deep_errors);
    }

    let mut tree = SyntaxTree::default();
    let mut indent = IndentGuard::module();
    let mut cursor = root.walk();
    for node in root.named_children(&mut cursor) {
        if node.is_extra() {
            continue;
        }
        if let Err(e) = indent.check(&mut ctx, &node) {
            ctx.deep_errors.push(e);
            continue;
        }
        match Stmt::parse(&mut ctx, data, &node) {
            Ok(stmt) => tree.stmts.push(stmt),
            Err(e) => ctx.deep_errors.push(e),
        }
    }

    if !ctx.deep_errors.is_empty() {
        Err(ctx.deep_errors)
    } else {
        Ok(tree)
    }
}

#[cfg(test)]
mod test {
    use pare_ast::{stmt::SimpleKind, Stmt, SyntaxTree};

    use crate::{error::ParserError, parse_string, PareTreeSitterParser};

    #[test]
    fn parse_simple_module() {
        let tree = parse_string("import os\nx = 1\nprint(x)\n").unwrap();
        assert_eq!(tree.stmts.len(), 3);
        assert!(matches!(
            &tree.stmts[0],
            Stmt::Simple(s) if s.kind == SimpleKind::Import && s.src == "import os"
        ));
    }

    #[test]
    fn parse_via_ast_parser() {
        let tree = SyntaxTree::from_source("def f():\n    pass\n", &PareTreeSitterParser).unwrap();
        assert_eq!(tree.stmt_count(), 2);
    }

    #[test]
    fn parse_empty_module() {
        let tree = parse_string("").unwrap();
        assert!(tree.is_empty());
        let tree = parse_string("# only a comment\n").unwrap();
        assert!(tree.is_empty());
    }

    #[test]
    fn semicolons_split_statements() {
        let tree = parse_string("a = 1; pass; b = 2\n").unwrap();
        assert_eq!(tree.stmts.len(), 3);
        assert!(matches!(tree.stmts[1], Stmt::Pass(_)));
    }

    #[test]
    fn pass_keeps_its_line() {
        let tree = parse_string("x = 1\n\npass\n").unwrap();
        assert_eq!(tree.stmts[1].span().line(), Some(3));
    }

    #[test]
    fn function_signature() {
        let mut tree = parse_string("def f(a, b=2) -> int:\n    return a + b\n").unwrap();
        let Stmt::Func(f) = tree.stmts.remove(0) else {
            panic!("expected function definition");
        };
        assert_eq!(f.name.0, "f");
        assert_eq!(f.signature, "(a, b=2) -> int");
        assert_eq!(f.body.stmts.len(), 1);
    }

    #[test]
    fn unterminated_call_is_error() {
        let errs = parse_string("def f(:\n    pass\n").unwrap_err();
        assert!(!errs.is_empty());
    }

    #[test]
    fn unterminated_paren_is_error() {
        let errs = parse_string("x = (1, 2\n").unwrap_err();
        assert!(!errs.is_empty());
    }

    #[test]
    fn missing_body_is_error() {
        let errs = parse_string("def f():\n").unwrap_err();
        assert!(!errs.is_empty());
    }

    #[test]
    fn syntax_error_has_span() {
        let errs = parse_string("x = 1\ny = = 2\n").unwrap_err();
        let first = &errs[0];
        assert!(matches!(
            first.error,
            ParserError::SyntaxError { .. } | ParserError::MissingNode { .. }
        ));
        assert_eq!(first.source_span.and_then(|s| s.line()), Some(2));
    }

    #[test]
    fn unexpected_indent_at_module_level() {
        let errs = parse_string("x = 1\n    y = 2\npass\n").unwrap_err();
        assert!(errs.iter().any(|e| e.source_span.and_then(|s| s.line()) == Some(2)));
    }

    #[test]
    fn indented_first_statement() {
        assert!(parse_string("  x = 1\n").is_err());
    }

    #[test]
    fn unexpected_indent_in_block() {
        let errs = parse_string("def f():\n    x = 1\n        y = 2\n").unwrap_err();
        assert!(errs.iter().any(|e| e.source_span.and_then(|s| s.line()) == Some(3)));
    }

    #[test]
    fn python2_statements_are_rejected() {
        assert!(parse_string("print \"hello\"\npass\n").is_err());
        assert!(parse_string("exec \"x = 1\"\npass\n").is_err());
        //the call is fine
        assert!(parse_string("print(\"hello\")\n").is_ok());
    }
}
