// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Paeon-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Paeon and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeSet;

use super::name::InjuryName;

/// Session-local set of favourited injury names.
///
/// Membership only — no per-entry metadata, nothing persisted across runs.
/// Names compare case-insensitively, consistent with catalog lookups.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FavouritesSet {
    names: BTreeSet<InjuryName>,
}

impl FavouritesSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips membership for `name` and returns the new state, so the caller
    /// can update its display text without a separate query.
    pub fn toggle(&mut self, name: impl Into<InjuryName>) -> bool {
        let name = name.into();
        if self.names.remove(&name) {
            false
        } else {
            self.names.insert(name);
            true
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name.to_lowercase().as_str())
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Favourited names in a stable (folded-key) order.
    pub fn all(&self) -> impl Iterator<Item = &InjuryName> {
        self.names.iter()
    }

    pub fn clear(&mut self) {
        self.names.clear();
    }
}
