// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Paeon-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Paeon and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Loading the injuries document from disk.
//!
//! The store reads the read-only JSON catalog consumed once at startup;
//! nothing is ever written back.

pub mod catalog_file;

pub use catalog_file::{parse_catalog, CatalogFile, StoreError};
