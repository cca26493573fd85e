// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Paeon-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Paeon and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use paeon::model::InjuryCatalog;

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

pub struct TempDir {
    path: PathBuf,
}

impl TempDir {
    pub fn new(prefix: &str) -> Self {
        let pid = std::process::id();
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let counter = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);

        let mut path = std::env::temp_dir();
        path.push(format!("paeon_bench_{prefix}_{pid}_{nanos}_{counter}"));
        std::fs::create_dir_all(&path).expect("create temp dir");

        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.path);
    }
}

pub mod catalog {
    use paeon::model::{InjuryCatalog, InjuryRecord};

    const NAME_STEMS: [&str; 6] = ["Burn", "Cut", "Nosebleed", "Sprain", "Sting", "Blister"];

    #[derive(Debug, Clone, Copy)]
    pub enum Case {
        CatalogSmall,
        CatalogLarge,
    }

    pub fn fixture(case: Case) -> InjuryCatalog {
        match case {
            Case::CatalogSmall => build(24, 4),
            Case::CatalogLarge => build(512, 8),
        }
    }

    fn build(records: usize, steps_per_record: usize) -> InjuryCatalog {
        let mut out = Vec::with_capacity(records);
        for i in 0..records {
            let name = format!("{} {i:04}", NAME_STEMS[i % NAME_STEMS.len()]);
            let steps = (0..steps_per_record)
                .map(|step| format!("Instruction {step} for record {i:04}"))
                .collect();
            let mut record = InjuryRecord::new(name, steps);
            if i % 3 == 0 {
                record.set_icon(Some(format!("icons/{i:04}.png")));
            }
            out.push(record);
        }
        InjuryCatalog::new(out)
    }
}

/// Serializes `catalog` to the on-disk document format for seeding load
/// benchmarks.
pub fn catalog_json(catalog: &InjuryCatalog) -> String {
    let records = catalog
        .iter()
        .map(|record| {
            let mut object = serde_json::Map::new();
            object.insert("name".to_owned(), record.name().as_str().into());
            object.insert(
                "steps".to_owned(),
                record
                    .steps()
                    .iter()
                    .map(|step| serde_json::Value::from(step.as_str()))
                    .collect::<Vec<_>>()
                    .into(),
            );
            if let Some(image) = record.image() {
                object.insert("image".to_owned(), image.into());
            }
            if let Some(icon) = record.icon() {
                object.insert("icon".to_owned(), icon.into());
            }
            serde_json::Value::Object(object)
        })
        .collect::<Vec<_>>();

    serde_json::to_string_pretty(&serde_json::Value::Array(records))
        .expect("serialize catalog fixture")
}

pub fn checksum_catalog(catalog: &InjuryCatalog) -> u64 {
    let mut acc = 0xcbf2_9ce4_8422_2325u64;
    for record in catalog.iter() {
        acc = fnv(acc, record.name().key().as_bytes());
        for step in record.steps() {
            acc = fnv(acc, step.as_bytes());
        }
    }
    acc
}

fn fnv(mut acc: u64, bytes: &[u8]) -> u64 {
    for &byte in bytes {
        acc ^= u64::from(byte);
        acc = acc.wrapping_mul(0x0000_0100_0000_01b3);
    }
    acc
}
