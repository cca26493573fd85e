// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Paeon-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Paeon and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Read-only queries over the catalog.
//!
//! Queries produce derived views (filtered record lists) that power the UI's
//! list widget; they never mutate the catalog and carry no cross-call state.

pub mod search;

pub use search::{favourites_view, filter_by_name};
