/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 *
 * 2025 Tendsin Mende
 */
use md5::{Digest, Md5};
use pare_ast::{stmt::FuncDef, AstRewriter, Block, Rewrite, Stmt, SyntaxTree};

use crate::{passes::noops::NoopVoider, Change, ChangeKind, Optimizer, RewriteResult};

///Slot of `name` in an echo table with `slots` entries. The MD5 digest of the name is read as a
/// big-endian 128-bit integer and reduced modulo `slots`.
///
/// Returns None if there are no slots.
pub fn echo_bucket(name: &str, slots: usize) -> Option<usize> {
    if slots == 0 {
        return None;
    }
    let digest = Md5::digest(name.as_bytes());
    let value = digest
        .iter()
        .fold(0u128, |acc, byte| (acc << 8) | u128::from(*byte));
    usize::try_from(value % slots as u128).ok()
}

///Voids `pass` statements like [NoopVoider], and additionally echoes functions into a fixed table.
struct Resonator {
    voider: NoopVoider,
    echo_table: Vec<bool>,
    echoed: usize,
}

impl Resonator {
    fn new(slots: usize) -> Self {
        Resonator {
            voider: NoopVoider::default(),
            echo_table: vec![false; slots],
            echoed: 0,
        }
    }

    //Duplicates the first statement of `func`'s body, if its bucket is still unset. Async functions are
    // never echoed and leave the table untouched.
    fn echo(&mut self, func: &mut FuncDef) {
        if func.is_async {
            #[cfg(feature = "log")]
            log::trace!("not echoing async function {}", func.name);
            return;
        }
        let Some(bucket) = echo_bucket(&func.name.0, self.echo_table.len()) else {
            return;
        };
        if self.echo_table[bucket] {
            #[cfg(feature = "log")]
            log::trace!("bucket {bucket} already set, not echoing {}", func.name);
            return;
        }
        //Blocks are filled before their owner is visited, so there is always a first statement.
        let Some(first) = func.body.stmts.first().cloned() else {
            return;
        };

        self.echo_table[bucket] = true;
        self.echoed += 1;
        func.body.stmts.push(first);
        self.voider.changes.push(Change::new(
            ChangeKind::Echoed,
            format!(
                "function '{}' echoed into bucket {bucket} at line {}",
                func.name,
                func.span.line_or_unknown()
            ),
        ));
    }
}

impl AstRewriter for Resonator {
    fn rewrite_stmt(&mut self, stmt: Stmt) -> Rewrite {
        match stmt {
            Stmt::Func(mut func) => {
                self.echo(&mut func);
                Rewrite::Keep(Stmt::Func(func))
            }
            other => self.voider.rewrite_stmt(other),
        }
    }

    fn leave_block(&mut self, block: &mut Block) {
        self.voider.leave_block(block);
    }
}

impl Optimizer {
    ///Combined traversal of the resonance variant. Voids `pass` statements, keeps blocks non-empty and
    /// echoes the first synchronous function of each echo bucket. Functions are visited in post-order, so nested
    /// functions come before the function they are defined in.
    pub fn resonate(&self, tree: SyntaxTree) -> RewriteResult {
        let mut resonator = Resonator::new(self.config.resonance.echo_slots);
        let tree = tree.rewrite(&mut resonator);

        #[cfg(feature = "log")]
        log::debug!(
            "voided {} no-ops, echoed {} functions",
            resonator.voider.changes.len() - resonator.echoed,
            resonator.echoed
        );

        RewriteResult {
            tree,
            changes: resonator.voider.changes,
        }
    }
}

#[cfg(test)]
mod test {
    use super::echo_bucket;

    #[test]
    fn known_buckets() {
        assert_eq!(echo_bucket("main", 32), Some(1));
        assert_eq!(echo_bucket("alpha", 32), Some(25));
        assert_eq!(echo_bucket("beta", 32), Some(18));
        assert_eq!(echo_bucket("second", 32), Some(18));
    }

    #[test]
    fn no_slots() {
        assert_eq!(echo_bucket("main", 0), None);
        assert_eq!(echo_bucket("main", 1), Some(0));
    }
}
