/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 *
 * 2025 Tendsin Mende
 */
//! Turns a [SyntaxTree] back into Python source.
//!
//! The AST is first lowered into a [FormatTree], which is then printed via [Display]. Since pare does not
//! keep comments or original layout, the output is normalized: one statement per line, one indentation
//! level per suite and a blank line before nested definitions. Formatting already formatted code yields
//! the same text again.

use std::fmt::Display;

use pare_ast::SyntaxTree;

mod block;
mod stmt;

#[derive(Debug, Clone)]
pub enum FormatTree {
    ///List of sub-trees, each emitted on its own line at the current indentation.
    Lines(Vec<Self>),
    ///A compound statement clause. The `header` is followed by `:` and the `body` one level deeper.
    Suite { header: Box<Self>, body: Box<Self> },
    ///Just a simple Token that'll be emitted as-is
    Token(String),
    ///Source text of an expression or statement. Emits `src`, or `canonical` if
    /// [FormatConfig::canonical_spacing] is set.
    Snippet { src: String, canonical: String },
    ///Sequence of sub-trees, formatted on the same row, separated by a single space.
    Seq(Vec<Self>),
    Keyword(Keyword),
    ///An empty line, without any indentation.
    Blank,
}

#[derive(Debug, Clone, Copy)]
pub enum Keyword {
    If,
    Elif,
    Else,
    For,
    In,
    While,
    Try,
    Except,
    ExceptGroup,
    Finally,
    With,
    Async,
    Def,
    Class,
    Match,
    Case,
    Pass,
}

impl Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Keyword::If => write!(f, "if"),
            Keyword::Elif => write!(f, "elif"),
            Keyword::Else => write!(f, "else"),
            Keyword::For => write!(f, "for"),
            Keyword::In => write!(f, "in"),
            Keyword::While => write!(f, "while"),
            Keyword::Try => write!(f, "try"),
            Keyword::Except => write!(f, "except"),
            Keyword::ExceptGroup => write!(f, "except*"),
            Keyword::Finally => write!(f, "finally"),
            Keyword::With => write!(f, "with"),
            Keyword::Async => write!(f, "async"),
            Keyword::Def => write!(f, "def"),
            Keyword::Class => write!(f, "class"),
            Keyword::Match => write!(f, "match"),
            Keyword::Case => write!(f, "case"),
            Keyword::Pass => write!(f, "pass"),
        }
    }
}

impl FormatTree {
    ///Builds [FormatTree::Lines], while inlining nested line lists.
    pub fn lines(items: impl IntoIterator<Item = Self>) -> Self {
        let mut flat = Vec::new();
        for item in items {
            match item {
                FormatTree::Lines(inner) => flat.extend(inner),
                other => flat.push(other),
            }
        }
        FormatTree::Lines(flat)
    }

    pub fn suite(header: Self, body: Self) -> Self {
        FormatTree::Suite {
            header: Box::new(header),
            body: Box::new(body),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Indentation {
    //Uses a single tab for identation
    Tabs,
    //Uses the given amount of spaces.
    Spaces(usize),
}

impl Default for Indentation {
    fn default() -> Self {
        Indentation::Spaces(4)
    }
}

#[derive(Debug, Default, Clone)]
pub struct FormatConfig {
    pub indentation: Indentation,
    ///Emits every snippet on a single line with normalized token spacing, instead of its source text.
    pub canonical_spacing: bool,
}

impl FormatConfig {
    pub fn with_indentation(mut self, indentation: Indentation) -> Self {
        self.indentation = indentation;
        self
    }

    pub fn with_canonical_spacing(mut self, canonical_spacing: bool) -> Self {
        self.canonical_spacing = canonical_spacing;
        self
    }
}

///A formated [SyntaxTree].
#[derive(Debug, Clone)]
pub struct Formater {
    tree: FormatTree,
    config: FormatConfig,
}

impl Formater {
    ///Transform the AST-Tree into a FormatTree
    pub fn format_ast(ast: &SyntaxTree) -> Self {
        Formater {
            tree: block::stmt_list(&ast.stmts),
            config: FormatConfig::default(),
        }
    }

    pub fn with_config(mut self, config: FormatConfig) -> Self {
        self.config = config;
        self
    }
}

///Shortcut for `Formater::format_ast(ast).with_config(config).to_string()`.
pub fn unparse(ast: &SyntaxTree, config: &FormatConfig) -> String {
    Formater::format_ast(ast)
        .with_config(config.clone())
        .to_string()
}

#[derive(Clone)]
struct FormatingState {
    indentation: Indentation,
    canonical_spacing: bool,
    ident_level: usize,
}

impl FormatingState {
    ///Adds the current level of identation to `f`.
    fn ident_on(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.indentation {
            Indentation::Tabs => {
                for _l in 0..self.ident_level {
                    write!(f, "\t")?
                }
                Ok(())
            }
            Indentation::Spaces(count_per_level) => {
                write!(f, "{:width$}", "", width = count_per_level * self.ident_level)
            }
        }
    }

    fn deeper(&self) -> Self {
        FormatingState {
            indentation: self.indentation.clone(),
            canonical_spacing: self.canonical_spacing,
            ident_level: self.ident_level + 1,
        }
    }
}

impl FormatTree {
    //Depth first formating walker on the Formating tree.
    fn format(&self, f: &mut std::fmt::Formatter<'_>, state: &FormatingState) -> std::fmt::Result {
        match self {
            FormatTree::Lines(lines) => {
                for (idx, item) in lines.iter().enumerate() {
                    if idx > 0 {
                        writeln!(f)?;
                    }
                    item.format_line(f, state)?;
                }
                Ok(())
            }
            FormatTree::Suite { header, body } => {
                header.format(f, state)?;
                write!(f, ":")?;
                let inner = state.deeper();
                match body.as_ref() {
                    FormatTree::Lines(lines) if !lines.is_empty() => {
                        for item in lines {
                            writeln!(f)?;
                            item.format_line(f, &inner)?;
                        }
                        Ok(())
                    }
                    //NOTE: a suite must never be empty, so fall back to the ellipsis.
                    FormatTree::Lines(_) => {
                        writeln!(f)?;
                        inner.ident_on(f)?;
                        write!(f, "...")
                    }
                    other => {
                        writeln!(f)?;
                        other.format_line(f, &inner)
                    }
                }
            }
            FormatTree::Token(token) => write!(f, "{token}"),
            FormatTree::Snippet { src, canonical } => {
                if state.canonical_spacing {
                    write!(f, "{canonical}")
                } else {
                    write!(f, "{src}")
                }
            }
            FormatTree::Seq(seq) => {
                for (idx, item) in seq.iter().enumerate() {
                    if idx > 0 {
                        write!(f, " ")?;
                    }
                    item.format(f, state)?;
                }
                Ok(())
            }
            FormatTree::Keyword(keyword) => write!(f, "{keyword}"),
            FormatTree::Blank => Ok(()),
        }
    }

    //Formats self as a line, i.e. indented, unless it's a blank line.
    fn format_line(
        &self,
        f: &mut std::fmt::Formatter<'_>,
        state: &FormatingState,
    ) -> std::fmt::Result {
        match self {
            FormatTree::Blank => Ok(()),
            //nested lines take care of their own indentation
            FormatTree::Lines(_) => self.format(f, state),
            other => {
                state.ident_on(f)?;
                other.format(f, state)
            }
        }
    }
}

impl Display for Formater {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = FormatingState {
            indentation: self.config.indentation.clone(),
            canonical_spacing: self.config.canonical_spacing,
            ident_level: 0,
        };

        self.tree.format(f, &state)
    }
}
