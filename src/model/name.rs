// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Paeon-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Paeon and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use smol_str::SmolStr;

/// An injury name as shown to the user, with a cached case-folded key.
///
/// Names identify records within a catalog and entries in the favourites set;
/// all comparisons go through the folded key, so `"Burn"`, `"burn"` and
/// `"BURN"` name the same record. `Display` keeps the raw form.
#[derive(Debug, Clone)]
pub struct InjuryName {
    raw: SmolStr,
    folded: SmolStr,
}

impl InjuryName {
    pub fn new(raw: impl AsRef<str>) -> Self {
        let raw = SmolStr::new(raw.as_ref());
        let folded = SmolStr::new(raw.to_lowercase());
        Self { raw, folded }
    }

    /// The name exactly as loaded, for display.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The case-folded lookup key.
    pub fn key(&self) -> &str {
        &self.folded
    }

    /// Case-insensitive comparison against a raw query string.
    pub fn matches(&self, query: &str) -> bool {
        self.folded == query.to_lowercase()
    }
}

impl PartialEq for InjuryName {
    fn eq(&self, other: &Self) -> bool {
        self.folded == other.folded
    }
}

impl Eq for InjuryName {}

impl PartialOrd for InjuryName {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for InjuryName {
    fn cmp(&self, other: &Self) -> Ordering {
        self.folded.cmp(&other.folded)
    }
}

impl Hash for InjuryName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.folded.hash(state);
    }
}

impl fmt::Display for InjuryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl AsRef<str> for InjuryName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Borrows the folded key so ordered sets/maps can be probed with an
/// already-folded `&str`.
impl Borrow<str> for InjuryName {
    fn borrow(&self) -> &str {
        self.key()
    }
}

impl From<&str> for InjuryName {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for InjuryName {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}
