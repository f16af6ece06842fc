/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 *
 * 2025 Tendsin Mende
 */
use std::path::PathBuf;

use pare_common::{
    thiserror::{self, Error},
    PareError,
};
use pare_tree_sitter_parser::error::ParserError;

///Error type collection that can happen while running the pipeline on a file.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Source file {0:?} does not exist")]
    MissingSource(PathBuf),
    #[error(transparent)]
    IoErr(#[from] std::io::Error),
    ///The source is not valid Python. Carries the source text, so the errors can be reported against it.
    #[error("Parser failed with {} errors", .errors.len())]
    ParserError {
        src: String,
        errors: Vec<PareError<ParserError>>,
    },
}

impl PipelineError {
    ///Reports the error to stderr. Parser errors are reported with a source excerpt.
    pub fn report(&self, file: &str) {
        match self {
            PipelineError::ParserError { src, errors } => {
                for err in errors {
                    err.report(file, src);
                }
            }
            other => eprintln!("{other}"),
        }
    }
}
