// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Paeon-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Paeon and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Paeon — injury catalog, step navigation and favourites for first-aid guides.
//!
//! This crate is the GUI-free core of a first-aid reference app: it loads the
//! read-only injuries document, answers name/substring queries, walks the
//! instruction steps of the selected record, and tracks session-local
//! favourites. Rendering, speech playback and image lookup are external
//! collaborators behind the boundaries in [`speech`] and [`assets`].

pub mod assets;
pub mod model;
pub mod query;
pub mod speech;
pub mod store;
