/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 *
 * 2025 Tendsin Mende
 */
use pare_common::Span;
use smallvec::SmallVec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::common::{Block, Expr, Ident};

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug)]
pub enum Stmt {
    ///The explicit no-op statement `pass`.
    Pass(PassStmt),
    ///Synthesized `...` that keeps a block valid after all its statements where removed.
    Placeholder,
    Simple(SimpleStmt),
    If(IfStmt),
    For(ForStmt),
    While(WhileStmt),
    Try(TryStmt),
    With(WithStmt),
    Match(MatchStmt),
    Func(FuncDef),
    Class(ClassDef),
}

impl Stmt {
    ///The source span of this statement. Synthesized statements return [Span::empty].
    pub fn span(&self) -> Span {
        match self {
            Stmt::Pass(p) => p.span,
            Stmt::Placeholder => Span::empty(),
            Stmt::Simple(s) => s.span,
            Stmt::If(s) => s.span,
            Stmt::For(s) => s.span,
            Stmt::While(s) => s.span,
            Stmt::Try(s) => s.span,
            Stmt::With(s) => s.span,
            Stmt::Match(s) => s.span,
            Stmt::Func(s) => s.span,
            Stmt::Class(s) => s.span,
        }
    }

    ///True for function and class definitions.
    pub fn is_definition(&self) -> bool {
        matches!(self, Stmt::Func(_) | Stmt::Class(_))
    }

    ///All blocks that are directly owned by this statement, in source order.
    pub fn blocks(&self) -> SmallVec<[&Block; 4]> {
        let mut blocks = SmallVec::new();
        match self {
            Stmt::Pass(_) | Stmt::Placeholder | Stmt::Simple(_) => {}
            Stmt::If(s) => {
                blocks.push(&s.body);
                for elif in &s.elif_clauses {
                    blocks.push(&elif.body);
                }
                blocks.extend(s.else_body.as_ref());
            }
            Stmt::For(s) => {
                blocks.push(&s.body);
                blocks.extend(s.else_body.as_ref());
            }
            Stmt::While(s) => {
                blocks.push(&s.body);
                blocks.extend(s.else_body.as_ref());
            }
            Stmt::Try(s) => {
                blocks.push(&s.body);
                for handler in &s.handlers {
                    blocks.push(&handler.body);
                }
                blocks.extend(s.else_body.as_ref());
                blocks.extend(s.finally_body.as_ref());
            }
            Stmt::With(s) => blocks.push(&s.body),
            Stmt::Match(s) => {
                for case in &s.cases {
                    blocks.push(&case.body);
                }
            }
            Stmt::Func(s) => blocks.push(&s.body),
            Stmt::Class(s) => blocks.push(&s.body),
        }
        blocks
    }

    ///Mutable version of [Stmt::blocks].
    pub fn blocks_mut(&mut self) -> SmallVec<[&mut Block; 4]> {
        let mut blocks = SmallVec::new();
        match self {
            Stmt::Pass(_) | Stmt::Placeholder | Stmt::Simple(_) => {}
            Stmt::If(s) => {
                blocks.push(&mut s.body);
                for elif in &mut s.elif_clauses {
                    blocks.push(&mut elif.body);
                }
                blocks.extend(s.else_body.as_mut());
            }
            Stmt::For(s) => {
                blocks.push(&mut s.body);
                blocks.extend(s.else_body.as_mut());
            }
            Stmt::While(s) => {
                blocks.push(&mut s.body);
                blocks.extend(s.else_body.as_mut());
            }
            Stmt::Try(s) => {
                blocks.push(&mut s.body);
                for handler in &mut s.handlers {
                    blocks.push(&mut handler.body);
                }
                blocks.extend(s.else_body.as_mut());
                blocks.extend(s.finally_body.as_mut());
            }
            Stmt::With(s) => blocks.push(&mut s.body),
            Stmt::Match(s) => {
                for case in &mut s.cases {
                    blocks.push(&mut case.body);
                }
            }
            Stmt::Func(s) => blocks.push(&mut s.body),
            Stmt::Class(s) => blocks.push(&mut s.body),
        }
        blocks
    }
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug)]
pub struct PassStmt {
    pub span: Span,
}

///The kind of a [SimpleStmt]. Simple statements are not rewritten, so the kind is mostly
/// informative.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SimpleKind {
    ///Any expression statement, including assignments and docstrings.
    Expression,
    Return,
    Import,
    ImportFrom,
    FutureImport,
    Assert,
    Delete,
    Raise,
    Break,
    Continue,
    Global,
    Nonlocal,
    TypeAlias,
}

///A single line statement. Like [Expr] it keeps the source text without comments, and a canonical
/// single-line form.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug)]
pub struct SimpleStmt {
    pub span: Span,
    pub kind: SimpleKind,
    pub src: String,
    pub canonical: String,
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug)]
pub struct IfStmt {
    pub span: Span,
    pub condition: Expr,
    pub body: Block,
    pub elif_clauses: Vec<ElifClause>,
    pub else_body: Option<Block>,
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug)]
pub struct ElifClause {
    pub span: Span,
    pub condition: Expr,
    pub body: Block,
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug)]
pub struct ForStmt {
    pub span: Span,
    pub is_async: bool,
    pub target: Expr,
    pub iter: Expr,
    pub body: Block,
    pub else_body: Option<Block>,
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug)]
pub struct WhileStmt {
    pub span: Span,
    pub condition: Expr,
    pub body: Block,
    pub else_body: Option<Block>,
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug)]
pub struct TryStmt {
    pub span: Span,
    pub body: Block,
    pub handlers: Vec<ExceptHandler>,
    pub else_body: Option<Block>,
    pub finally_body: Option<Block>,
}

///`except` or `except*` clause of a [TryStmt].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug)]
pub struct ExceptHandler {
    pub span: Span,
    ///True for `except*`
    pub is_group: bool,
    ///Everything between the keyword and the colon, e.g. `ValueError as e`. None for a bare `except`.
    pub clause: Option<Expr>,
    pub body: Block,
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug)]
pub struct WithStmt {
    pub span: Span,
    pub is_async: bool,
    pub items: Expr,
    pub body: Block,
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug)]
pub struct MatchStmt {
    pub span: Span,
    pub subject: Expr,
    pub cases: Vec<CaseClause>,
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug)]
pub struct CaseClause {
    pub span: Span,
    ///Pattern, including an optional guard.
    pub pattern: Expr,
    pub body: Block,
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug)]
pub struct FuncDef {
    pub span: Span,
    ///Decorator expressions, without the leading `@`.
    pub decorators: Vec<Expr>,
    pub is_async: bool,
    pub name: Ident,
    ///Everything between the name and the colon. So type parameters, the parameter list and the
    /// return annotation.
    pub signature: String,
    pub body: Block,
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug)]
pub struct ClassDef {
    pub span: Span,
    pub decorators: Vec<Expr>,
    pub name: Ident,
    ///Type parameters and base class list, might be empty.
    pub arguments: String,
    pub body: Block,
}
