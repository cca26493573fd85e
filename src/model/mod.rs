// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Paeon-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Paeon and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! A guide owns the immutable injury catalog plus the per-session navigation
//! and favourites state the presentation layer mutates through narrow APIs.

pub mod catalog;
pub mod favourites;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod guide;
pub mod injury;
pub mod name;
pub mod navigation;

pub use catalog::InjuryCatalog;
pub use favourites::FavouritesSet;
pub use guide::Guide;
pub use injury::InjuryRecord;
pub use name::InjuryName;
pub use navigation::{CurrentStep, NavigationState};
