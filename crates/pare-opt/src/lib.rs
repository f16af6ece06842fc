/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 *
 * 2025 Tendsin Mende
 */
//! # Pare-Opt
//!
//! The pare optimizer. _Optimization_ here means purely syntactic removal of statements, nothing is
//! analyzed semantically.
//!
//! There are two variants:
//!
//! ### Void
//!
//! Applies a fixed sequence of independent rules. Each rule takes the tree produced by the previous one,
//! and returns the rewritten tree together with the changes it applied.
//!
//! 1. remove `pass` statements,
//! 2. report a redundant narrative comment,
//! 3. remove `if`/`elif` clauses with vacant bodies,
//! 4. report an unused tracked variable,
//! 5. report a redundant pair of type-checks.
//!
//! Every rule that removes statements keeps nested blocks valid, by inserting a `...` placeholder into blocks
//! that became empty.
//!
//! ### Resonance
//!
//! A single traversal that removes `pass` statements and _echoes_ functions: The name of each function is
//! hashed into a small table. The first function that lands in an unset slot gets its first statement
//! duplicated.

use pare_ast::SyntaxTree;
use pare_fmt::FormatConfig;

pub mod config;
mod passes;
mod record;

pub use config::Config;
pub use passes::echo_bucket;
pub use record::{Change, ChangeKind, RewriteResult, TransformationRecord};

///The optimizer variant that is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    #[default]
    Void,
    Resonance,
}

///A single rewrite rule of the void variant.
pub type Rule = fn(&Optimizer, SyntaxTree) -> RewriteResult;

///Tree and change-log after all rules of a variant where applied.
#[derive(Debug, Clone)]
pub struct Optimized {
    pub tree: SyntaxTree,
    pub record: TransformationRecord,
}

///Applies the rewrite rules. Holds only configuration, each run starts with fresh state.
#[derive(Debug, Clone, Default)]
pub struct Optimizer {
    pub config: Config,
    ///Used to regenerate source text for the textual heuristics.
    pub format: FormatConfig,
}

impl Optimizer {
    pub fn new(config: Config) -> Self {
        Optimizer {
            config,
            format: FormatConfig::default(),
        }
    }

    pub fn with_format_config(mut self, format: FormatConfig) -> Self {
        self.format = format;
        self
    }

    ///The rules of the void variant, in the order they are applied.
    pub fn void_rules() -> [(&'static str, Rule); 5] {
        [
            ("void no-op statements", Optimizer::void_noops as Rule),
            ("void redundant comments", Optimizer::void_redundant_comments),
            ("void empty blocks", Optimizer::void_empty_blocks),
            ("void unused variables", Optimizer::void_unused_variables),
            ("void redundant type checks", Optimizer::void_redundant_type_checks),
        ]
    }

    pub fn run(&self, variant: Variant, tree: SyntaxTree) -> Optimized {
        match variant {
            Variant::Void => self.void(tree),
            Variant::Resonance => self.resonance(tree),
        }
    }

    ///Runs all rules of the void variant.
    pub fn void(&self, mut tree: SyntaxTree) -> Optimized {
        #[cfg(feature = "log")]
        log::info!(
            "Initiating void descent on {} statements",
            tree.stmt_count()
        );

        let mut record = TransformationRecord::new();
        for (_name, rule) in Self::void_rules() {
            let result = rule(self, tree);
            #[cfg(feature = "log")]
            log::debug!("{_name}: {} changes", result.changes.len());
            record.extend(result.changes);
            tree = result.tree;
        }

        #[cfg(feature = "log")]
        log::info!("Void descent complete. {} signatures left.", record.len());
        Optimized { tree, record }
    }

    ///Runs the resonance variant.
    pub fn resonance(&self, tree: SyntaxTree) -> Optimized {
        #[cfg(feature = "log")]
        log::info!(
            "Initiating resonance descent on {} statements",
            tree.stmt_count()
        );

        let result = self.resonate(tree);
        let mut record = TransformationRecord::new();
        record.extend(result.changes);

        #[cfg(feature = "log")]
        log::info!("Resonance descent complete. {}", record.resonance_summary());
        Optimized {
            tree: result.tree,
            record,
        }
    }

    ///Regenerates source text, which is what the textual heuristics work on. Expressions are emitted with
    /// canonical token spacing, so the markers match regardless of how the source was laid out.
    fn regenerate(&self, tree: &SyntaxTree) -> String {
        pare_fmt::unparse(tree, &self.format.clone().with_canonical_spacing(true))
    }
}
