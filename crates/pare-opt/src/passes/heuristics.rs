/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 *
 * 2025 Tendsin Mende
 */
//! Textual heuristics. All of them search the regenerated source of the current tree for a configured
//! marker, and only record a change. The tree is returned untouched.
//!
//! Since comments are not part of the tree, the comment marker can only be found inside string literals.

use pare_ast::SyntaxTree;

use crate::{Change, ChangeKind, Optimizer, RewriteResult};

impl Optimizer {
    ///Reports the configured redundant comment, if it occurs in the regenerated source.
    pub fn void_redundant_comments(&self, tree: SyntaxTree) -> RewriteResult {
        let marker = &self.config.heuristics.redundant_comment;
        if marker.is_empty() || !self.regenerate(&tree).contains(marker.as_str()) {
            return RewriteResult::unchanged(tree);
        }

        let narration = marker.trim_start_matches('#').trim();
        RewriteResult {
            tree,
            changes: vec![Change::new(
                ChangeKind::VoidedComment,
                format!("redundant comment voided - '{narration}'"),
            )],
        }
    }

    ///Reports the tracked variable as unused, if its name occurs exactly once in the regenerated source.
    pub fn void_unused_variables(&self, tree: SyntaxTree) -> RewriteResult {
        let name = &self.config.heuristics.tracked_variable;
        if name.is_empty() || self.regenerate(&tree).matches(name.as_str()).count() != 1 {
            return RewriteResult::unchanged(tree);
        }

        RewriteResult {
            tree,
            changes: vec![Change::new(
                ChangeKind::VoidedVariable,
                format!("unused variable '{name}' voided"),
            )],
        }
    }

    ///Reports the configured pair of type checks as redundant, if both occur in the regenerated source.
    pub fn void_redundant_type_checks(&self, tree: SyntaxTree) -> RewriteResult {
        let (first, second) = &self.config.heuristics.type_checks;
        let source = self.regenerate(&tree);
        if first.is_empty()
            || second.is_empty()
            || !source.contains(first.as_str())
            || !source.contains(second.as_str())
        {
            return RewriteResult::unchanged(tree);
        }

        RewriteResult {
            tree,
            changes: vec![Change::new(
                ChangeKind::SimplifiedConditional,
                "redundant type checking logic simplified",
            )],
        }
    }
}
