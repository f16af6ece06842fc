/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 *
 * 2025 Tendsin Mende
 */
//! Common diagnosis helper. This is mostly the [Span] of nodes, as well as the
//! [PareError] that is used to report problems at those spans.

pub use ariadne;
pub use thiserror;

pub mod error;
pub use error::PareError;

use serde::{Deserialize, Serialize};

///Source-Code span information. Rows and columns are zero based, like tree-sitter reports them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Span {
    pub byte_start: usize,
    pub byte_end: usize,
    pub from: (usize, usize),
    pub to: (usize, usize),
}

impl Span {
    ///Span of nodes that have no source location, for instance synthesized ones.
    pub fn empty() -> Self {
        Span {
            byte_start: 0,
            byte_end: 0,
            from: (0, 0),
            to: (0, 0),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::empty()
    }

    ///The 1-based line this span starts on, if the span is known.
    pub fn line(&self) -> Option<usize> {
        if self.is_empty() {
            None
        } else {
            Some(self.from.0 + 1)
        }
    }

    ///Renders [Span::line], or `unknown` for spans without a location.
    pub fn line_or_unknown(&self) -> String {
        self.line()
            .map(|line| line.to_string())
            .unwrap_or_else(|| "unknown".to_owned())
    }

    ///Byte range of this span, usable for slicing the source it came from.
    pub fn range(&self) -> std::ops::Range<usize> {
        self.byte_start..self.byte_end
    }
}

impl<'a> From<&tree_sitter::Node<'a>> for Span {
    fn from(value: &tree_sitter::Node) -> Self {
        Span {
            byte_start: value.start_byte(),
            byte_end: value.end_byte(),
            from: (value.start_position().row, value.start_position().column),
            to: (value.end_position().row, value.end_position().column),
        }
    }
}

#[cfg(test)]
mod test {
    use crate::Span;

    #[test]
    fn empty_span_has_no_line() {
        assert_eq!(Span::empty().line(), None);
        assert_eq!(Span::empty().line_or_unknown(), "unknown");
    }

    #[test]
    fn lines_are_one_based() {
        let span = Span {
            byte_start: 10,
            byte_end: 14,
            from: (2, 4),
            to: (2, 8),
        };
        assert_eq!(span.line(), Some(3));
        assert_eq!(span.range(), 10..14);
    }
}
