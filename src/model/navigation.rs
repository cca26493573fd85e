// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Paeon-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Paeon and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use super::injury::InjuryRecord;
use super::name::InjuryName;

/// The record currently shown plus the step position within it.
///
/// Two states: nothing selected, or a record with a step index clamped to
/// `[0, step_count - 1]` (pinned to 0 for step-less records). Selecting a
/// record always rewinds to its first step; `next`/`previous` clamp at the
/// boundaries instead of wrapping. Every operation is total.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationState {
    selected: Option<Selected>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Selected {
    record: InjuryRecord,
    step_index: usize,
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects `record` and rewinds to its first step.
    pub fn select(&mut self, record: InjuryRecord) {
        self.selected = Some(Selected { record, step_index: 0 });
    }

    /// Clears the selection.
    pub fn clear(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&InjuryRecord> {
        self.selected.as_ref().map(|selected| &selected.record)
    }

    /// Step position within the selected record; 0 when nothing is selected
    /// or the record has no steps.
    pub fn step_index(&self) -> usize {
        self.selected.as_ref().map_or(0, |selected| selected.step_index)
    }

    /// The display-ready view of the current position.
    pub fn current_step(&self) -> CurrentStep<'_> {
        let Some(selected) = &self.selected else {
            return CurrentStep::NothingSelected;
        };

        match selected.record.step(selected.step_index) {
            Some(text) => CurrentStep::Step {
                name: selected.record.name(),
                index: selected.step_index,
                total: selected.record.step_count(),
                text,
            },
            None => CurrentStep::NoSteps { name: selected.record.name() },
        }
    }

    /// Advances one step, clamped at the last step. Returns whether the
    /// position changed.
    pub fn next(&mut self) -> bool {
        let Some(selected) = &mut self.selected else {
            return false;
        };
        if selected.step_index + 1 < selected.record.step_count() {
            selected.step_index += 1;
            true
        } else {
            false
        }
    }

    /// Retreats one step, clamped at the first step. Returns whether the
    /// position changed.
    pub fn previous(&mut self) -> bool {
        let Some(selected) = &mut self.selected else {
            return false;
        };
        if selected.step_index > 0 {
            selected.step_index -= 1;
            true
        } else {
            false
        }
    }
}

/// What the presentation layer should show for the current position.
///
/// `Display` yields the step text itself, or the designated empty-state
/// message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrentStep<'a> {
    NothingSelected,
    NoSteps { name: &'a InjuryName },
    Step { name: &'a InjuryName, index: usize, total: usize, text: &'a str },
}

impl CurrentStep<'_> {
    pub fn is_step(&self) -> bool {
        matches!(self, Self::Step { .. })
    }
}

impl fmt::Display for CurrentStep<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NothingSelected => f.write_str("Select an injury to see steps."),
            Self::NoSteps { .. } => f.write_str("No steps available."),
            Self::Step { text, .. } => f.write_str(text),
        }
    }
}
