/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 *
 * 2025 Tendsin Mende
 */
//! Optimizer passes module.
//!
//! Structural passes work on the tree via [AstRewriter](pare_ast::AstRewriter)s. The heuristics only look at
//! the regenerated source text and never change the tree.

mod empty_blocks;
mod heuristics;
mod noops;
mod resonance;

pub use resonance::echo_bucket;
