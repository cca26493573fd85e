// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Paeon-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Paeon and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::catalog::InjuryCatalog;
use super::favourites::FavouritesSet;
use super::navigation::{CurrentStep, NavigationState};

/// The top-level container the presentation layer runs against.
///
/// Owns the immutable catalog plus the per-session navigation and favourites
/// state, and forwards user actions to them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Guide {
    catalog: InjuryCatalog,
    navigation: NavigationState,
    favourites: FavouritesSet,
}

impl Guide {
    pub fn new(catalog: InjuryCatalog) -> Self {
        Self { catalog, navigation: NavigationState::new(), favourites: FavouritesSet::new() }
    }

    pub fn catalog(&self) -> &InjuryCatalog {
        &self.catalog
    }

    pub fn navigation(&self) -> &NavigationState {
        &self.navigation
    }

    pub fn navigation_mut(&mut self) -> &mut NavigationState {
        &mut self.navigation
    }

    pub fn favourites(&self) -> &FavouritesSet {
        &self.favourites
    }

    pub fn favourites_mut(&mut self) -> &mut FavouritesSet {
        &mut self.favourites
    }

    /// Looks up `name` case-insensitively and selects the first match.
    ///
    /// Returns whether a record was found; on a miss the current selection is
    /// left untouched.
    pub fn select_by_name(&mut self, name: &str) -> bool {
        let Some(record) = self.catalog.find_by_name(name) else {
            return false;
        };
        let record = record.clone();
        self.navigation.select(record);
        true
    }

    pub fn clear_selection(&mut self) {
        self.navigation.clear();
    }

    pub fn current_step(&self) -> CurrentStep<'_> {
        self.navigation.current_step()
    }

    pub fn next_step(&mut self) -> bool {
        self.navigation.next()
    }

    pub fn previous_step(&mut self) -> bool {
        self.navigation.previous()
    }

    pub fn toggle_favourite(&mut self, name: &str) -> bool {
        self.favourites.toggle(name)
    }

    pub fn is_favourite(&self, name: &str) -> bool {
        self.favourites.contains(name)
    }
}
