/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 *
 * 2025 Tendsin Mende
 */
use std::fmt::Display;

use pare_ast::SyntaxTree;

///What kind of change a rule applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeKind {
    ///A `pass` statement was removed.
    VoidedNoop,
    ///An `if` or `elif` with a vacant body was removed.
    VoidedBlock,
    VoidedComment,
    VoidedVariable,
    SimplifiedConditional,
    ///A function's first statement was duplicated.
    Echoed,
    ///The source could not be parsed, nothing was changed.
    ParseFailure,
}

///A single, human readable entry of the change-log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Change {
    pub kind: ChangeKind,
    pub description: String,
}

impl Change {
    pub fn new(kind: ChangeKind, description: impl Into<String>) -> Self {
        Change {
            kind,
            description: description.into(),
        }
    }
}

impl Display for Change {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description)
    }
}

///Result of a single rule. The (possibly) rewritten tree, and everything that was changed in order.
#[derive(Debug, Clone)]
pub struct RewriteResult {
    pub tree: SyntaxTree,
    pub changes: Vec<Change>,
}

impl RewriteResult {
    ///Result of a rule that did not change anything.
    pub fn unchanged(tree: SyntaxTree) -> Self {
        RewriteResult {
            tree,
            changes: Vec::new(),
        }
    }
}

///Accumulates all [Change]s of one run, in the order they where applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransformationRecord {
    changes: Vec<Change>,
}

impl TransformationRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, change: Change) {
        self.changes.push(change);
    }

    pub fn extend(&mut self, changes: impl IntoIterator<Item = Change>) {
        self.changes.extend(changes);
    }

    pub fn changes(&self) -> &[Change] {
        &self.changes
    }

    ///All descriptions, in insertion order.
    pub fn descriptions(&self) -> Vec<String> {
        self.changes.iter().map(|c| c.description.clone()).collect()
    }

    ///Number of recorded changes of the given `kind`.
    pub fn count(&self, kind: ChangeKind) -> usize {
        self.changes.iter().filter(|c| c.kind == kind).count()
    }

    pub fn len(&self) -> usize {
        self.changes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    ///One-line summary of a resonance run.
    pub fn resonance_summary(&self) -> String {
        let voided = self.count(ChangeKind::VoidedNoop);
        if voided > 0 {
            format!(
                "Success: Voided {voided}, Echoed {} essentials.",
                self.count(ChangeKind::Echoed)
            )
        } else {
            "Stable: No changes.".to_owned()
        }
    }
}

impl IntoIterator for TransformationRecord {
    type Item = Change;
    type IntoIter = std::vec::IntoIter<Change>;
    fn into_iter(self) -> Self::IntoIter {
        self.changes.into_iter()
    }
}
