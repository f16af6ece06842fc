/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 *
 * 2025 Tendsin Mende
 */
use pare_ast::{Block, Stmt};

use crate::FormatTree;

///Formats a list of statements. Function and class definitions get a blank line in front, unless they
/// are the first statement of the list.
pub(crate) fn stmt_list(stmts: &[Stmt]) -> FormatTree {
    let mut lines = Vec::with_capacity(stmts.len());
    for (idx, stmt) in stmts.iter().enumerate() {
        if idx > 0 && stmt.is_definition() {
            lines.push(FormatTree::Blank);
        }
        lines.push(FormatTree::from(stmt));
    }
    FormatTree::lines(lines)
}

impl From<&Block> for FormatTree {
    fn from(value: &Block) -> Self {
        stmt_list(&value.stmts)
    }
}
