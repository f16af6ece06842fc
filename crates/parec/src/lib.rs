/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 *
 * 2025 Tendsin Mende
 */
//! # Parec
//!
//! The pipeline crate. Ties together the parts of pare: parsing, rewriting, regenerating and writing the
//! result next to the source file.
//! Can either be used as a library, or via the CLI using the `pare` binary.

use std::path::{Path, PathBuf};

use pare_ast::SyntaxTree;
use pare_common::PareError;
use pare_fmt::FormatConfig;
use pare_opt::{Change, ChangeKind, Config, Optimizer, TransformationRecord, Variant};
use pare_tree_sitter_parser::error::ParserError;

mod error;
pub mod manifest;
pub use error::PipelineError;
pub use pare_ast;
pub use pare_fmt;
pub use pare_opt;
pub use pare_tree_sitter_parser;

///Selects the optimizer variant, and the suffix of emitted files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Void,
    Resonance,
}

impl Mode {
    pub fn suffix(&self) -> &str {
        match self {
            Mode::Void => "void",
            Mode::Resonance => "resonance",
        }
    }

    pub fn variant(&self) -> Variant {
        match self {
            Mode::Void => Variant::Void,
            Mode::Resonance => Variant::Resonance,
        }
    }
}

///Target the output of the pipeline is written to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Target {
    ///Next to the source file, named after the source and the [Mode].
    Sibling,
    File(PathBuf),
    Buffer(String),
}

impl Target {
    pub fn file(file: &dyn AsRef<Path>) -> Self {
        Self::File(file.as_ref().to_path_buf())
    }

    pub fn buffer() -> Self {
        Self::Buffer(String::new())
    }

    fn update_from_buffer(&mut self, buffer: &str) -> Result<(), PipelineError> {
        match self {
            Self::File(f) => std::fs::write(f, buffer)?,
            Self::Buffer(buf) => *buf = buffer.to_owned(),
            Self::Sibling => {}
        }
        Ok(())
    }

    ///Resolves [Target::Sibling] for `source`.
    fn resolve(&self, source: &Path, mode: Mode) -> Self {
        match self {
            Self::Sibling => Self::File(sibling_file_name(source, mode)),
            other => other.clone(),
        }
    }
}

///`dir/name.ext` becomes `dir/name_<suffix>.ext`. Files without extension get `.py`.
pub fn sibling_file_name(source: &Path, mode: Mode) -> PathBuf {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let ext = source
        .extension()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "py".to_owned());
    source.with_file_name(format!("{stem}_{}.{ext}", mode.suffix()))
}

///Result of simplifying some source text.
#[derive(Debug, Clone)]
pub struct Outcome {
    ///The regenerated source, or the unmodified input, if it could not be parsed.
    pub text: String,
    pub record: TransformationRecord,
    ///Errors that prevented parsing. Empty on success.
    pub parse_errors: Vec<PareError<ParserError>>,
}

impl Outcome {
    pub fn is_failure(&self) -> bool {
        !self.parse_errors.is_empty()
    }

    ///Change descriptions, in the order the changes where applied.
    pub fn descriptions(&self) -> Vec<String> {
        self.record.descriptions()
    }
}

///Written output of [Pipeline::execute_on_file].
#[derive(Debug, Clone)]
pub struct Synthesized {
    ///Where the output went. Never [Target::Sibling].
    pub target: Target,
    pub outcome: Outcome,
}

///An executable simplification pipeline.
/// There are always four steps:
/// 1. parse the source into a [SyntaxTree],
/// 2. rewrite the tree, based on the [Mode],
/// 3. regenerate source text,
/// 4. prepend the manifest and write the result to the [Target].
///
/// If parsing fails, the source is returned unchanged, and nothing is written.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    pub mode: Mode,
    pub config: Config,
    pub format: FormatConfig,
    ///If false, no manifest is put in front of the output.
    pub manifest: bool,
    pub target: Target,
}

impl Default for Target {
    fn default() -> Self {
        Target::Sibling
    }
}

impl Pipeline {
    pub fn new(mode: Mode) -> Self {
        Pipeline {
            mode,
            manifest: true,
            ..Default::default()
        }
    }

    ///Pipeline that does not write to disk, but into [Target::Buffer].
    pub fn new_in_memory(mode: Mode) -> Self {
        Pipeline {
            target: Target::buffer(),
            ..Self::new(mode)
        }
    }

    pub fn with_target(mut self, target: Target) -> Self {
        self.target = target;
        self
    }

    pub fn with_format(mut self, format: FormatConfig) -> Self {
        self.format = format;
        self
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    pub fn without_manifest(mut self) -> Self {
        self.manifest = false;
        self
    }

    pub fn parse(&self, source: &str) -> Result<SyntaxTree, Vec<PareError<ParserError>>> {
        pare_tree_sitter_parser::parse_string(source)
    }

    ///Simplifies `source`. Never fails: if `source` is not valid Python it is returned unchanged, together with
    /// a single description of the first parse error.
    pub fn simplify(&self, source: &str) -> Outcome {
        let tree = match self.parse(source) {
            Ok(tree) => tree,
            Err(errors) => {
                let mut record = TransformationRecord::new();
                record.push(parse_failure(&errors));
                return Outcome {
                    text: source.to_owned(),
                    record,
                    parse_errors: errors,
                };
            }
        };

        let optimizer = Optimizer::new(self.config.clone()).with_format_config(self.format.clone());
        let optimized = optimizer.run(self.mode.variant(), tree);
        let text = pare_fmt::unparse(&optimized.tree, &self.format);
        Outcome {
            text,
            record: optimized.record,
            parse_errors: Vec::new(),
        }
    }

    ///Renders the final file content for `outcome`, including the manifest, if enabled.
    pub fn render(&self, outcome: &Outcome) -> String {
        if self.manifest {
            format!(
                "{}\n{}\n",
                manifest::manifest(self.mode, &outcome.record),
                outcome.text
            )
        } else {
            format!("{}\n", outcome.text)
        }
    }

    ///Tries to simplify `file`, and writes the result to the configured target.
    pub fn execute_on_file(&self, file: &Path) -> Result<Synthesized, PipelineError> {
        if !file.exists() {
            return Err(PipelineError::MissingSource(file.to_path_buf()));
        }
        let source = std::fs::read_to_string(file)?;

        let outcome = self.simplify(&source);
        if outcome.is_failure() {
            log::error!(
                "There where {} errors while parsing {file:?}",
                outcome.parse_errors.len()
            );
            return Err(PipelineError::ParserError {
                src: source,
                errors: outcome.parse_errors,
            });
        }

        let mut target = self.target.resolve(file, self.mode);
        target.update_from_buffer(&self.render(&outcome))?;
        if let Target::File(f) = &target {
            log::info!("Synthesized {f:?}");
        }
        Ok(Synthesized { target, outcome })
    }
}

fn parse_failure(errors: &[PareError<ParserError>]) -> Change {
    let description = match errors.first() {
        Some(first) => format!("parse failure at {}", first.describe()),
        None => "parse failure at line unknown".to_owned(),
    };
    Change::new(ChangeKind::ParseFailure, description)
}

///Simplifies `source` with the default void pipeline. Returns the transformed text and the change-log.
pub fn simplify(source: &str) -> (String, Vec<String>) {
    let outcome = Pipeline::new(Mode::Void).simplify(source);
    let descriptions = outcome.descriptions();
    (outcome.text, descriptions)
}

#[cfg(test)]
mod test {
    use static_assertions::assert_impl_all;

    use crate::{Pipeline, PipelineError};

    #[test]
    fn pipeline_is_send_sync() {
        assert_impl_all!(Pipeline: Send, Sync);
    }

    #[test]
    fn errors_are_errors() {
        assert_impl_all!(PipelineError: std::error::Error, Send, Sync);
    }
}
