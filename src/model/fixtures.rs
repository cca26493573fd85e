// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Paeon-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Paeon and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::catalog::InjuryCatalog;
use super::injury::InjuryRecord;

fn record(name: &str, steps: &[&str]) -> InjuryRecord {
    InjuryRecord::new(name, steps.iter().map(|step| (*step).to_owned()).collect())
}

pub(crate) fn catalog_small() -> InjuryCatalog {
    InjuryCatalog::new(vec![
        record("Burn", &["Cool the area", "Cover loosely"]),
        record("Cut", &["Apply pressure"]),
        record("Nosebleed", &["Lean forward", "Pinch the soft part", "Hold for ten minutes"]),
    ])
}

pub(crate) fn catalog_with_stepless() -> InjuryCatalog {
    InjuryCatalog::new(vec![
        record("Burn", &["Cool the area", "Cover loosely"]),
        record("Shock", &[]),
    ])
}
