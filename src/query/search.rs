// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Paeon-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Paeon and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use memchr::memmem;

use crate::model::{FavouritesSet, InjuryCatalog, InjuryRecord};

/// Records whose name contains `query` as a case-insensitive substring, in
/// catalog order.
///
/// An empty query matches every record. Pure; call it again whenever the
/// search box changes.
pub fn filter_by_name<'a>(catalog: &'a InjuryCatalog, query: &str) -> Vec<&'a InjuryRecord> {
    let needle = query.to_lowercase();
    let finder = memmem::Finder::new(needle.as_bytes());
    catalog
        .iter()
        .filter(|record| finder.find(record.name().key().as_bytes()).is_some())
        .collect()
}

/// The "show only favourites" view: favourited records in catalog order.
pub fn favourites_view<'a>(
    catalog: &'a InjuryCatalog,
    favourites: &FavouritesSet,
) -> Vec<&'a InjuryRecord> {
    catalog.iter().filter(|record| favourites.contains(record.name().as_str())).collect()
}
