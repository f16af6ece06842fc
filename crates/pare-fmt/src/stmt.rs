/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 *
 * 2025 Tendsin Mende
 */
use pare_ast::{
    stmt::{
        CaseClause, ClassDef, ExceptHandler, ForStmt, FuncDef, IfStmt, MatchStmt, TryStmt,
        WhileStmt, WithStmt,
    },
    Block, Expr, Stmt,
};

use crate::{FormatTree, Keyword};

impl From<&Expr> for FormatTree {
    fn from(value: &Expr) -> Self {
        FormatTree::Snippet {
            src: value.src.clone(),
            canonical: value.canonical.clone(),
        }
    }
}

impl From<&Stmt> for FormatTree {
    fn from(value: &Stmt) -> Self {
        match value {
            Stmt::Pass(_) => FormatTree::Keyword(Keyword::Pass),
            Stmt::Placeholder => FormatTree::Token("...".to_owned()),
            Stmt::Simple(s) => FormatTree::Snippet {
                src: s.src.clone(),
                canonical: s.canonical.clone(),
            },
            Stmt::If(s) => FormatTree::from(s),
            Stmt::For(s) => FormatTree::from(s),
            Stmt::While(s) => FormatTree::from(s),
            Stmt::Try(s) => FormatTree::from(s),
            Stmt::With(s) => FormatTree::from(s),
            Stmt::Match(s) => FormatTree::from(s),
            Stmt::Func(s) => FormatTree::from(s),
            Stmt::Class(s) => FormatTree::from(s),
        }
    }
}

fn else_clause(body: &Block) -> FormatTree {
    FormatTree::suite(FormatTree::Keyword(Keyword::Else), FormatTree::from(body))
}

impl From<&IfStmt> for FormatTree {
    fn from(value: &IfStmt) -> Self {
        let mut clauses = vec![FormatTree::suite(
            FormatTree::Seq(vec![
                FormatTree::Keyword(Keyword::If),
                FormatTree::from(&value.condition),
            ]),
            FormatTree::from(&value.body),
        )];

        for elif in &value.elif_clauses {
            clauses.push(FormatTree::suite(
                FormatTree::Seq(vec![
                    FormatTree::Keyword(Keyword::Elif),
                    FormatTree::from(&elif.condition),
                ]),
                FormatTree::from(&elif.body),
            ));
        }

        if let Some(else_body) = &value.else_body {
            clauses.push(else_clause(else_body));
        }

        FormatTree::lines(clauses)
    }
}

impl From<&ForStmt> for FormatTree {
    fn from(value: &ForStmt) -> Self {
        let mut header = Vec::with_capacity(5);
        if value.is_async {
            header.push(FormatTree::Keyword(Keyword::Async));
        }
        header.extend([
            FormatTree::Keyword(Keyword::For),
            FormatTree::from(&value.target),
            FormatTree::Keyword(Keyword::In),
            FormatTree::from(&value.iter),
        ]);

        let mut clauses = vec![FormatTree::suite(
            FormatTree::Seq(header),
            FormatTree::from(&value.body),
        )];
        if let Some(else_body) = &value.else_body {
            clauses.push(else_clause(else_body));
        }
        FormatTree::lines(clauses)
    }
}

impl From<&WhileStmt> for FormatTree {
    fn from(value: &WhileStmt) -> Self {
        let mut clauses = vec![FormatTree::suite(
            FormatTree::Seq(vec![
                FormatTree::Keyword(Keyword::While),
                FormatTree::from(&value.condition),
            ]),
            FormatTree::from(&value.body),
        )];
        if let Some(else_body) = &value.else_body {
            clauses.push(else_clause(else_body));
        }
        FormatTree::lines(clauses)
    }
}

impl From<&ExceptHandler> for FormatTree {
    fn from(value: &ExceptHandler) -> Self {
        let keyword = if value.is_group {
            Keyword::ExceptGroup
        } else {
            Keyword::Except
        };
        let mut header = vec![FormatTree::Keyword(keyword)];
        if let Some(clause) = &value.clause {
            header.push(FormatTree::from(clause));
        }
        FormatTree::suite(FormatTree::Seq(header), FormatTree::from(&value.body))
    }
}

impl From<&TryStmt> for FormatTree {
    fn from(value: &TryStmt) -> Self {
        let mut clauses = vec![FormatTree::suite(
            FormatTree::Keyword(Keyword::Try),
            FormatTree::from(&value.body),
        )];
        for handler in &value.handlers {
            clauses.push(FormatTree::from(handler));
        }
        if let Some(else_body) = &value.else_body {
            clauses.push(else_clause(else_body));
        }
        if let Some(finally_body) = &value.finally_body {
            clauses.push(FormatTree::suite(
                FormatTree::Keyword(Keyword::Finally),
                FormatTree::from(finally_body),
            ));
        }
        FormatTree::lines(clauses)
    }
}

impl From<&WithStmt> for FormatTree {
    fn from(value: &WithStmt) -> Self {
        let mut header = Vec::with_capacity(3);
        if value.is_async {
            header.push(FormatTree::Keyword(Keyword::Async));
        }
        header.push(FormatTree::Keyword(Keyword::With));
        header.push(FormatTree::from(&value.items));
        FormatTree::suite(FormatTree::Seq(header), FormatTree::from(&value.body))
    }
}

impl From<&CaseClause> for FormatTree {
    fn from(value: &CaseClause) -> Self {
        FormatTree::suite(
            FormatTree::Seq(vec![
                FormatTree::Keyword(Keyword::Case),
                FormatTree::from(&value.pattern),
            ]),
            FormatTree::from(&value.body),
        )
    }
}

impl From<&MatchStmt> for FormatTree {
    fn from(value: &MatchStmt) -> Self {
        FormatTree::suite(
            FormatTree::Seq(vec![
                FormatTree::Keyword(Keyword::Match),
                FormatTree::from(&value.subject),
            ]),
            FormatTree::Lines(value.cases.iter().map(FormatTree::from).collect()),
        )
    }
}

fn decorators(decorators: &[Expr]) -> impl Iterator<Item = FormatTree> + '_ {
    decorators
        .iter()
        .map(|d| FormatTree::Snippet {
            src: format!("@{}", d.src),
            canonical: format!("@{}", d.canonical),
        })
}

impl From<&FuncDef> for FormatTree {
    fn from(value: &FuncDef) -> Self {
        let mut header = Vec::with_capacity(3);
        if value.is_async {
            header.push(FormatTree::Keyword(Keyword::Async));
        }
        header.push(FormatTree::Keyword(Keyword::Def));
        header.push(FormatTree::Token(format!(
            "{}{}",
            value.name, value.signature
        )));

        let mut lines: Vec<FormatTree> = decorators(&value.decorators).collect();
        lines.push(FormatTree::suite(
            FormatTree::Seq(header),
            FormatTree::from(&value.body),
        ));
        FormatTree::lines(lines)
    }
}

impl From<&ClassDef> for FormatTree {
    fn from(value: &ClassDef) -> Self {
        let header = FormatTree::Seq(vec![
            FormatTree::Keyword(Keyword::Class),
            FormatTree::Token(format!("{}{}", value.name, value.arguments)),
        ]);

        let mut lines: Vec<FormatTree> = decorators(&value.decorators).collect();
        lines.push(FormatTree::suite(header, FormatTree::from(&value.body)));
        FormatTree::lines(lines)
    }
}
