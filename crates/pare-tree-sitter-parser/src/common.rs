/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 *
 * 2025 Tendsin Mende
 */
use std::ops::Range;

use pare_ast::{Expr, Ident};
use pare_common::{PareError, Span};
use tree_sitter::Node;

use crate::{error::ParserError, FromTreeSitter, ParserCtx};

impl FromTreeSitter for Ident {
    fn parse(
        ctx: &mut ParserCtx,
        dta: &[u8],
        node: &tree_sitter::Node,
    ) -> Result<Self, PareError<ParserError>>
    where
        Self: Sized,
    {
        ParserError::assert_node_kind(ctx, node, "identifier")?;
        let ident = node_text(ctx, dta, node)?;
        Ok(Ident(ident.to_owned()))
    }
}

///Reads the source text of `node`.
pub fn node_text<'d>(
    ctx: &mut ParserCtx,
    dta: &'d [u8],
    node: &Node,
) -> Result<&'d str, PareError<ParserError>> {
    node.utf8_text(dta).map_err(|e| {
        PareError::error_here(
            ParserError::Utf8ParseError(e),
            ctx.span(node),
            "UTF-8 Parser error here",
        )
    })
}

fn source_str<'d>(
    ctx: &mut ParserCtx,
    node: &Node,
    bytes: &'d [u8],
) -> Result<&'d str, PareError<ParserError>> {
    std::str::from_utf8(bytes).map_err(|e| {
        PareError::error_here(
            ParserError::Utf8ParseError(e),
            ctx.span(node),
            "UTF-8 Parser error here",
        )
    })
}

///Source text of a range of the tree, see [snippet].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snippet {
    ///Source text without comments, trimmed.
    pub src: String,
    ///All tokens on one line, with normalized spacing.
    pub canonical: String,
}

impl Snippet {
    pub fn into_expr(self, span: Span) -> Expr {
        Expr::new(span, self.src).with_canonical(self.canonical)
    }
}

//Nodes that are taken as a single token, even though tree-sitter splits them further.
fn is_atomic(kind: &str) -> bool {
    matches!(kind, "string")
}

//Collects the leaf tokens of `node` that lie within `range`, including comments.
fn collect_tokens<'t>(node: Node<'t>, range: &Range<usize>, tokens: &mut Vec<Node<'t>>) {
    if node.end_byte() <= range.start || node.start_byte() >= range.end {
        return;
    }
    if node.child_count() == 0 || is_atomic(node.kind()) {
        tokens.push(node);
        return;
    }
    let mut walker = node.walk();
    for child in node.children(&mut walker) {
        collect_tokens(child, range, tokens);
    }
}

fn parent_kind(node: &Node) -> &'static str {
    node.parent().map(|p| p.kind()).unwrap_or("")
}

///Decides whether the canonical form puts a space between `prev` and `next`.
fn spaced(prev: &Node, next: &Node) -> bool {
    let (p, n) = (prev.kind(), next.kind());
    let (pp, np) = (parent_kind(prev), parent_kind(next));

    if matches!(n, "," | ")" | "]" | "}" | ";" | ":") || matches!(p, "(" | "[" | "{") {
        return false;
    }
    //attribute access and dotted names. `1 .real` needs its space.
    if p == "." && matches!(pp, "attribute" | "dotted_name") {
        return false;
    }
    if n == "." && matches!(np, "attribute" | "dotted_name") {
        return p == "integer";
    }
    //relative imports
    if pp == "import_prefix" {
        return n == "import";
    }
    //calls and subscripts
    if n == "(" && np == "argument_list" {
        return false;
    }
    if n == "(" && np == "generator_expression" {
        let in_call = next
            .parent()
            .and_then(|g| g.parent())
            .map(|c| c.kind() == "call")
            .unwrap_or(false);
        return !in_call;
    }
    if n == "[" && np == "subscript" {
        return false;
    }
    if p == ":" && pp == "slice" {
        return false;
    }
    if matches!(p, "-" | "+" | "~") && pp == "unary_operator" {
        return false;
    }
    if matches!(p, "*" | "**")
        && matches!(
            pp,
            "list_splat"
                | "dictionary_splat"
                | "list_splat_pattern"
                | "dictionary_splat_pattern"
                | "parenthesized_list_splat"
        )
    {
        return false;
    }
    //keyword arguments and lambda defaults
    if (p == "=" && matches!(pp, "keyword_argument" | "default_parameter"))
        || (n == "=" && matches!(np, "keyword_argument" | "default_parameter"))
    {
        return false;
    }
    true
}

///Reads the source text of `node` between the byte offsets `start` and `end`.
///
/// Comments within that range are left out, together with the whitespace in front of them. The
/// canonical form joins all tokens on one line, with `, ` after commas, no space inside brackets, and
/// single spaces around operators.
pub fn snippet(
    ctx: &mut ParserCtx,
    dta: &[u8],
    node: &Node,
    start: usize,
    end: usize,
) -> Result<Snippet, PareError<ParserError>> {
    if start > end || end > dta.len() {
        return Err(PareError::error_here(
            ParserError::Other(format!("invalid source range {start}..{end}")),
            ctx.span(node),
            "in here",
        ));
    }
    let range = start..end;
    let mut tokens = Vec::new();
    collect_tokens(*node, &range, &mut tokens);

    let mut src = String::new();
    let mut cursor = start;
    let mut own_line = false;
    for comment in tokens.iter().filter(|t| t.kind() == "comment") {
        let before = source_str(ctx, node, &dta[cursor..comment.start_byte()])?;
        let before = if own_line {
            before.strip_prefix('\n').unwrap_or(before)
        } else {
            before
        };
        src.push_str(before.trim_end_matches([' ', '\t']));
        //a comment on its own line takes its line break with it
        own_line = src.ends_with('\n');
        cursor = comment.end_byte();
    }
    let rest = source_str(ctx, node, &dta[cursor..end])?;
    let rest = if own_line {
        rest.strip_prefix('\n').unwrap_or(rest)
    } else {
        rest
    };
    src.push_str(rest);

    let mut canonical = String::new();
    let mut prev: Option<Node> = None;
    for token in tokens.iter().filter(|t| !t.is_extra()) {
        if let Some(prev) = &prev {
            if spaced(prev, token) {
                canonical.push(' ');
            }
        }
        canonical.push_str(node_text(ctx, dta, token)?);
        prev = Some(*token);
    }

    Ok(Snippet {
        src: src.trim().to_owned(),
        canonical,
    })
}

///[snippet] of the whole `node`.
pub fn node_snippet(
    ctx: &mut ParserCtx,
    dta: &[u8],
    node: &Node,
) -> Result<Snippet, PareError<ParserError>> {
    snippet(ctx, dta, node, node.start_byte(), node.end_byte())
}

///Checks that all statements of a suite, that start on a new line, start at the same column.
pub struct IndentGuard {
    column: Option<usize>,
    last_row: Option<usize>,
}

impl IndentGuard {
    ///Guard for the module level, where statements start at column 0.
    pub fn module() -> Self {
        IndentGuard {
            column: Some(0),
            last_row: None,
        }
    }

    ///Guard for a block, whose column is set by its first statement.
    pub fn block() -> Self {
        IndentGuard {
            column: None,
            last_row: None,
        }
    }

    pub fn check(&mut self, ctx: &mut ParserCtx, node: &Node) -> Result<(), PareError<ParserError>> {
        let start = node.start_position();
        let starts_line = self.last_row.map(|row| start.row > row).unwrap_or(true);
        self.last_row = Some(node.end_position().row);
        if !starts_line {
            return Ok(());
        }

        let expected = *self.column.get_or_insert(start.column);
        if start.column != expected {
            return Err(PareError::error_here(
                ParserError::Indentation {
                    expected,
                    found: start.column,
                },
                ctx.span(node),
                "statement starts here",
            ));
        }
        Ok(())
    }
}

///The colon that ends a compound statement header, and the block that follows it.
pub struct Suite<'t> {
    pub colon: Node<'t>,
    pub block: Node<'t>,
}

///Searches the first `block` child of `node` that follows a `:` child.
pub fn suite<'t>(ctx: &mut ParserCtx, node: &Node<'t>) -> Result<Suite<'t>, PareError<ParserError>> {
    let mut colon = None;
    let mut walker = node.walk();
    for child in node.children(&mut walker) {
        match child.kind() {
            ":" => colon = Some(child),
            "block" => {
                if let Some(colon) = colon {
                    return Ok(Suite {
                        colon,
                        block: child,
                    });
                }
            }
            _ => {}
        }
    }

    Err(PareError::error_here(
        ParserError::UnexpectedAstNode {
            kind: node.kind().to_owned(),
            expected: "a suite after ':'".to_owned(),
        },
        ctx.span(node),
        "expected a block after this header",
    ))
}

///Collects the header of a compound statement clause. That is everything after the leading keyword(s) and
/// before `colon`. Returns None if there is nothing in between, like for a bare `except:` or `else:`.
pub fn header(
    ctx: &mut ParserCtx,
    dta: &[u8],
    node: &Node,
    colon: &Node,
) -> Result<Option<Expr>, PareError<ParserError>> {
    let mut first: Option<Node> = None;
    let mut last: Option<Node> = None;
    let mut walker = node.walk();
    for child in node.children(&mut walker) {
        if child.start_byte() >= colon.start_byte() {
            break;
        }
        if child.is_extra() {
            continue;
        }
        //skip leading keywords
        if first.is_none() && !child.is_named() {
            continue;
        }
        if first.is_none() {
            first = Some(child);
        }
        last = Some(child);
    }

    let (Some(first), Some(last)) = (first, last) else {
        return Ok(None);
    };

    let snippet = snippet(ctx, dta, node, first.start_byte(), last.end_byte())?;
    let span = Span {
        byte_start: first.start_byte(),
        byte_end: last.end_byte(),
        from: (first.start_position().row, first.start_position().column),
        to: (last.end_position().row, last.end_position().column),
    };
    Ok(Some(snippet.into_expr(span)))
}

///Like [header], but fails if the header is empty.
pub fn required_header(
    ctx: &mut ParserCtx,
    dta: &[u8],
    node: &Node,
    colon: &Node,
) -> Result<Expr, PareError<ParserError>> {
    match header(ctx, dta, node, colon)? {
        Some(expr) => Ok(expr),
        None => Err(PareError::error_here(
            ParserError::NoChildAvailable,
            ctx.span(node),
            format!("{} needs an expression before ':'", node.kind()),
        )),
    }
}

///Parses the field `name` of `node` as an expression snippet.
pub fn field_expr(
    ctx: &mut ParserCtx,
    dta: &[u8],
    node: &Node,
    name: &str,
) -> Result<Expr, PareError<ParserError>> {
    let field = ParserError::expect_child(ctx, node, node.child_by_field_name(name), name)?;
    let snippet = node_snippet(ctx, dta, &field)?;
    Ok(snippet.into_expr(ctx.span(&field)))
}

///True if the first child of `node` is the `async` keyword.
pub fn is_async(node: &Node) -> bool {
    node.child(0).map(|c| c.kind() == "async").unwrap_or(false)
}
