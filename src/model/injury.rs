// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Paeon-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Paeon and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::name::InjuryName;

/// A single catalog entry: a named injury with its ordered instruction steps.
///
/// Records are immutable after load. The optional `image`/`icon` fields are
/// relative file references the presentation layer resolves through
/// [`crate::assets`]; absence is valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InjuryRecord {
    name: InjuryName,
    steps: Vec<String>,
    image: Option<String>,
    icon: Option<String>,
}

impl InjuryRecord {
    pub fn new(name: impl Into<InjuryName>, steps: Vec<String>) -> Self {
        Self { name: name.into(), steps, image: None, icon: None }
    }

    pub fn name(&self) -> &InjuryName {
        &self.name
    }

    pub fn steps(&self) -> &[String] {
        &self.steps
    }

    pub fn step(&self, index: usize) -> Option<&str> {
        self.steps.get(index).map(String::as_str)
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    pub fn has_steps(&self) -> bool {
        !self.steps.is_empty()
    }

    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    pub fn set_image(&mut self, image: Option<String>) {
        self.image = image;
    }

    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    pub fn set_icon(&mut self, icon: Option<String>) {
        self.icon = icon;
    }
}
