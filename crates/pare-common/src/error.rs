/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 *
 * 2025 Tendsin Mende
 */
use std::{error::Error, fmt::Debug, ops::Range};

use ariadne::{Config, IndexType, Label, Report, ReportKind, Source};
use smallvec::{smallvec, SmallVec};

use crate::Span;

///A message that is attached to some [Span] of an error.
#[derive(Clone, Debug)]
pub struct ErrorLabel {
    pub span: Span,
    pub message: String,
}

///Common error type for pare modules. Allows you to build a base error from any
/// type `E: Error`, optionally pointing at a [Span] of the source, which is printed when using
/// [PareError::report].
///
/// You are encouraged to use [thiserror] to derive your `E` type, and use [PareError] only to embedded your error.
#[derive(Clone)]
pub struct PareError<E: Error> {
    pub error: E,
    pub source_span: Option<Span>,
    ///All labels that might be attached to the error.
    pub labels: SmallVec<[ErrorLabel; 4]>,
}

impl<E: Error> PareError<E> {
    pub fn new(error: E) -> Self {
        PareError {
            error,
            source_span: None,
            labels: SmallVec::new(),
        }
    }

    ///Creates an error that reports `message` at the given `span`.
    pub fn error_here(error: E, span: Span, message: impl ToString) -> Self {
        Self {
            error,
            source_span: Some(span),
            labels: smallvec![ErrorLabel {
                span,
                message: message.to_string(),
            }],
        }
    }

    ///Single line description of the error, including the line it occurred on, or `unknown`.
    pub fn describe(&self) -> String {
        let line = self
            .source_span
            .map(|span| span.line_or_unknown())
            .unwrap_or_else(|| "unknown".to_owned());
        format!("line {line}: {}", self.error)
    }

    fn build_report(&self, file: &str) -> Report<'static, (String, Range<usize>)> {
        let offset = self.source_span.map(|s| s.byte_start).unwrap_or(0);
        let mut reporter = Report::build(ReportKind::Error, file.to_owned(), offset)
            .with_config(Config::default().with_index_type(IndexType::Byte))
            .with_message(self.error.to_string());

        for label in &self.labels {
            reporter = reporter.with_label(
                Label::new((file.to_owned(), label.span.range())).with_message(&label.message),
            );
        }

        reporter.finish()
    }

    ///Reports the full error to stderr. `src` is the source text the spans of this error point into.
    pub fn report(&self, file: &str, src: &str) {
        let report = self.build_report(file);
        if let Err(e) = report.eprint((file.to_owned(), Source::from(src.to_owned()))) {
            eprintln!("failed to report error: {e}\n{self:?}");
        }
    }
}

impl<E: Error> Debug for PareError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(src_span) = &self.source_span {
            write!(
                f,
                "[{}:{}..{}:{}]: {}",
                src_span.from.0, src_span.from.1, src_span.to.0, src_span.to.1, self.error
            )
        } else {
            write!(f, "{}", self.error)
        }
    }
}

#[cfg(test)]
mod test {
    use thiserror::Error;

    use crate::{PareError, Span};

    #[derive(Debug, Error, Clone)]
    enum TestError {
        #[error("something broke")]
        Broke,
    }

    #[test]
    fn describe_mentions_line() {
        let span = Span {
            byte_start: 4,
            byte_end: 5,
            from: (1, 0),
            to: (1, 1),
        };
        let err = PareError::error_here(TestError::Broke, span, "here");
        assert_eq!(err.describe(), "line 2: something broke");
        assert_eq!(err.labels.len(), 1);
    }

    #[test]
    fn describe_without_span() {
        let err = PareError::new(TestError::Broke);
        assert_eq!(err.describe(), "line unknown: something broke");
    }
}
