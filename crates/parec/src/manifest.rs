/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 *
 * 2025 Tendsin Mende
 */
//! The docstring banner that is put in front of every emitted file.

use pare_opt::TransformationRecord;

use crate::Mode;

const VOID_BANNER: [&str; 7] = [
    "# --- SIMPLIFIED BY PARE :: VOID MODE ---",
    "#",
    "# This file was regenerated from its syntax tree after all",
    "# non-essential statements where voided.",
    "#",
    "# Comments and original layout are not preserved.",
    "# The following changes where applied:",
];

const RESONANCE_BANNER: [&str; 2] = [
    "# --- SIMPLIFIED BY PARE :: RESONANCE MODE ---",
    "# No-ops voided, essentials echoed.",
];

///Lists every change of `record` on its own line.
pub fn void_manifest(record: &TransformationRecord) -> String {
    let mut lines = vec!["\"\"\"".to_owned()];
    lines.extend(VOID_BANNER.iter().map(|l| l.to_string()));
    for change in record.changes() {
        lines.push(format!("# {change}"));
    }
    lines.push("#".to_owned());
    lines.push("\"\"\"".to_owned());
    lines.join("\n")
}

///Only contains the one-line summary of `record`.
pub fn resonance_manifest(record: &TransformationRecord) -> String {
    let mut lines = vec!["\"\"\"".to_owned()];
    lines.extend(RESONANCE_BANNER.iter().map(|l| l.to_string()));
    lines.push(format!("# {}", record.resonance_summary()));
    lines.push("\"\"\"".to_owned());
    lines.join("\n")
}

pub fn manifest(mode: Mode, record: &TransformationRecord) -> String {
    match mode {
        Mode::Void => void_manifest(record),
        Mode::Resonance => resonance_manifest(record),
    }
}

#[cfg(test)]
mod test {
    use pare_opt::{Change, ChangeKind, TransformationRecord};

    use super::{resonance_manifest, void_manifest, VOID_BANNER};

    #[test]
    fn void_lists_every_change() {
        let mut record = TransformationRecord::new();
        record.push(Change::new(
            ChangeKind::VoidedNoop,
            "pass statement voided at line 3",
        ));
        let manifest = void_manifest(&record);
        let lines: Vec<&str> = manifest.lines().collect();
        assert_eq!(lines.first(), Some(&"\"\"\""));
        assert_eq!(lines.last(), Some(&"\"\"\""));
        assert_eq!(lines.len(), VOID_BANNER.len() + 4);
        assert!(lines.contains(&"# pass statement voided at line 3"));
    }

    #[test]
    fn resonance_has_summary() {
        let manifest = resonance_manifest(&TransformationRecord::new());
        assert!(manifest.contains("# Stable: No changes.\n\"\"\""));
    }
}
