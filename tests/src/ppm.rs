/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs::read;
use std::path::{Path, PathBuf};

use zune_pixmap::{DecoderOptions, Image, PpmDecodeErrors, PpmDecoder};

use crate::{hash, sample_path, JsonError, TestEntry};

pub fn ppm_path() -> PathBuf {
    sample_path().join("test-images/ppm")
}

fn load_entries() -> Vec<TestEntry> {
    let file = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/ppm.json");

    let json_file = read(file).unwrap();

    serde_json::from_slice(&json_file).unwrap()
}

fn decode_file(name: &str) -> Result<Image, PpmDecodeErrors> {
    let file_contents = read(ppm_path().join(name)).unwrap();

    let options = DecoderOptions::default();

    PpmDecoder::new_with_options(&file_contents, options).decode()
}

/// Compare a decoded image against its manifest entry, returning
/// a description of every difference
fn check_image(entry: &TestEntry, image: &Image) -> Vec<String> {
    let mut problems = Vec::new();

    if let Some(format) = entry.format {
        if image.format() != format.to_format() {
            problems.push(format!("format {} != {:?}", image.format(), format));
        }
    }
    if entry.width != Some(image.width()) || entry.height != Some(image.height()) {
        problems.push(format!(
            "dimensions {:?} != {:?}",
            image.dimensions(),
            (entry.width, entry.height)
        ));
    }
    let last_x = image.width().saturating_sub(1);
    let last_y = image.height().saturating_sub(1);

    let first = image.get_pixel(0, 0).map(<[u8; 3]>::from);
    let last = image.get_pixel(last_x, last_y).map(<[u8; 3]>::from);

    if entry.first_pixel.is_some() && first != entry.first_pixel {
        problems.push(format!("first pixel {:?} != {:?}", first, entry.first_pixel));
    }
    if entry.last_pixel.is_some() && last != entry.last_pixel {
        problems.push(format!("last pixel {:?} != {:?}", last, entry.last_pixel));
    }
    if let Some(expected) = entry.sum {
        let sum: u64 = image.pixels().iter().map(|v| u64::from(*v)).sum();

        if sum != expected {
            problems.push(format!("sample sum {sum} != {expected}"));
        }
    }
    if let Some(twin) = &entry.same_as {
        let twin = decode_file(twin).unwrap();

        if hash(twin.pixels()) != hash(image.pixels()) {
            problems.push(format!("pixels differ from {}", entry.same_as.as_ref().unwrap()));
        }
    }
    problems
}

fn check_error(expected: JsonError, error: &PpmDecodeErrors) -> bool {
    matches!(
        (expected, error),
        (JsonError::Depth, PpmDecodeErrors::UnsupportedColorDepth(_))
            | (JsonError::Format, PpmDecodeErrors::UnsupportedFormat(_))
            | (JsonError::Size, PpmDecodeErrors::PixelDataSizeMismatch(..))
    )
}

#[test]
#[allow(clippy::uninlined_format_args)]
fn test_ppm() {
    let paths = load_entries();

    let mut error = false;
    let mut files = Vec::new();

    for path in &paths {
        let problems = match (decode_file(&path.name), path.error) {
            (Ok(image), None) => check_image(path, &image),
            (Ok(_), Some(kind)) => vec![format!("expected {:?} error but file decoded", kind)],
            (Err(err), None) => vec![format!("unexpected error {:?}", err)],
            (Err(err), Some(kind)) if !check_error(kind, &err) => {
                vec![format!("expected {:?} error but found {:?}", kind, err)]
            }
            (Err(_), Some(_)) => vec![]
        };

        if !problems.is_empty() {
            error = true;
            files.push(path.to_owned());
            // report error
            eprintln!(
                "Mismatch for file {:?}\n{:#?}\nConfig:{:#?}\n",
                path.name, problems, path
            );
        }
    }
    if error {
        panic!("Errors found during test decoding\n {:#?}", files);
    }
}

#[test]
fn test_ppm_headers() {
    for path in load_entries().iter().filter(|entry| entry.error.is_none()) {
        let file_contents = read(ppm_path().join(&path.name)).unwrap();

        let mut decoder = PpmDecoder::new(&file_contents);
        decoder.decode_headers().unwrap();

        assert_eq!(
            decoder.get_dimensions(),
            Some((path.width.unwrap(), path.height.unwrap())),
            "{}",
            path.name
        );
        assert_eq!(
            decoder.get_format(),
            path.format.map(|f| f.to_format()),
            "{}",
            path.name
        );
    }
}
