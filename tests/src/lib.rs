/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![allow(unused_imports, unused)]

use std::path::{Path, PathBuf};

use serde::Deserialize;
use xxhash_rust::xxh3::xxh3_128;
use zune_pixmap::PpmFormat;

mod ppm;

#[derive(Copy, Clone, Debug, Deserialize, PartialEq, Eq)]
pub enum JsonFormat {
    P3,
    P6
}

impl JsonFormat {
    pub fn to_format(self) -> PpmFormat {
        match self {
            Self::P3 => PpmFormat::P3,
            Self::P6 => PpmFormat::P6
        }
    }
}

/// Error kind a sample file is expected to fail with
#[derive(Copy, Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum JsonError {
    Depth,
    Format,
    Size
}

#[derive(Clone, Deserialize, Debug)]
pub struct TestEntry {
    pub name:        String,
    pub format:      Option<JsonFormat>,
    pub width:       Option<usize>,
    pub height:      Option<usize>,
    pub first_pixel: Option<[u8; 3]>,
    pub last_pixel:  Option<[u8; 3]>,
    /// Sum of all samples
    pub sum:         Option<u64>,
    /// Another entry that must decode to the same pixels
    pub same_as:     Option<String>,
    pub error:       Option<JsonError>,
    pub comment:     Option<String>
}

pub fn sample_path() -> PathBuf {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"));
    // get parent path
    path.parent().unwrap().to_owned()
}

fn hash(contents: &[u8]) -> u128 {
    xxh3_128(contents)
}
