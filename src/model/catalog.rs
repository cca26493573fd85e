// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Paeon-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Paeon and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::injury::InjuryRecord;

/// The immutable, ordered collection of injury records loaded at startup.
///
/// Insertion order is load order and every query preserves it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InjuryCatalog {
    records: Vec<InjuryRecord>,
}

impl InjuryCatalog {
    pub fn new(records: Vec<InjuryRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[InjuryRecord] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&InjuryRecord> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, InjuryRecord> {
        self.records.iter()
    }

    /// Case-insensitive exact-name lookup.
    ///
    /// Scans the whole catalog; with duplicate names the first record in load
    /// order wins.
    pub fn find_by_name(&self, name: &str) -> Option<&InjuryRecord> {
        let key = name.to_lowercase();
        self.records.iter().find(|record| record.name().key() == key)
    }
}

impl<'a> IntoIterator for &'a InjuryCatalog {
    type Item = &'a InjuryRecord;
    type IntoIter = std::slice::Iter<'a, InjuryRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
