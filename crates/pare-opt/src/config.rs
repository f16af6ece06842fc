/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 *
 * 2025 Tendsin Mende
 */

//! Config options for the optimizer

///Markers the textual heuristics search for in the regenerated source.
#[derive(Debug, Clone)]
pub struct ConfigHeuristics {
    ///Comment that is considered redundant narration.
    pub redundant_comment: String,
    ///Variable name that is reported, if it occurs exactly once.
    pub tracked_variable: String,
    ///Pair of type-checks that are reported as redundant, if both occur.
    pub type_checks: (String, String),
}

impl Default for ConfigHeuristics {
    fn default() -> Self {
        ConfigHeuristics {
            redundant_comment: "# Empty string, skip".to_owned(),
            tracked_variable: "temp_value".to_owned(),
            type_checks: (
                "isinstance(item, (int, float))".to_owned(),
                "isinstance(item, str)".to_owned(),
            ),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResonance {
    ///Number of slots in the echo table. Function names are hashed into one of those. A value of 0 disables
    /// echoing.
    pub echo_slots: usize,
}

impl Default for ConfigResonance {
    fn default() -> Self {
        ConfigResonance { echo_slots: 32 }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub heuristics: ConfigHeuristics,
    pub resonance: ConfigResonance,
}
