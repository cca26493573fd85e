// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Paeon-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Paeon and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Boundary to the image-resolution collaborator.
//!
//! Records carry relative `image`/`icon` references; the presentation layer
//! maps them to real files on disk. The core only decides which reference to
//! ask about.

use std::path::{Path, PathBuf};

use crate::model::InjuryRecord;

/// External service mapping a relative image reference under a base directory
/// to an existing file.
pub trait ImageResolver {
    /// Returns the resolved path, or `None` when no such file exists.
    fn resolve(&self, base_dir: &Path, image_ref: &str) -> Option<PathBuf>;
}

/// Resolves the artwork for `record`: the `image` reference first, then the
/// `icon` as a fallback. Records without either field simply yield `None`.
pub fn record_image<R: ImageResolver + ?Sized>(
    resolver: &R,
    base_dir: &Path,
    record: &InjuryRecord,
) -> Option<PathBuf> {
    record
        .image()
        .and_then(|image_ref| resolver.resolve(base_dir, image_ref))
        .or_else(|| record.icon().and_then(|image_ref| resolver.resolve(base_dir, image_ref)))
}
