/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Binary (P6) pixel extraction
//!
//! # Locating the payload
//! The payload is assumed to start one byte after the first
//! occurrence of the text `255` in the header prefix. This is a plain
//! textual search, so a header whose width or height contains `255`
//! (e.g. `P6 255 1 255`) resolves the payload too early and is reported as a
//! size mismatch. Files written with more than one whitespace byte after the
//! max value are misread the same way.

use alloc::string::String;

use crate::errors::PpmDecodeErrors;
use crate::header::{decode_text, header_prefix, PpmHeader, MAX_VALUE_TOKEN};
use crate::image::{Image, PpmFormat};
use crate::log::trace;
use crate::options::DecoderOptions;

/// Read the header of a P6 image from the leading bytes of `data`
pub(crate) fn read_header(
    data: &[u8], options: &DecoderOptions
) -> Result<PpmHeader, PpmDecodeErrors> {
    let text = decode_text(header_prefix(data));

    let header = PpmHeader::parse(&mut text.split_whitespace(), options)?;
    header.expect_format(PpmFormat::P6)?;

    Ok(header)
}

/// Return the offset where pixel data starts
///
/// That is the position of the first `255` in the header prefix plus its
/// length and one separator byte.
pub(crate) fn payload_offset(data: &[u8]) -> Option<usize> {
    let needle = MAX_VALUE_TOKEN.as_bytes();

    header_prefix(data)
        .windows(needle.len())
        .position(|window| window == needle)
        .map(|position| position + needle.len() + 1)
}

/// Decode a P6 image
pub(crate) fn decode(data: &[u8], options: &DecoderOptions) -> Result<Image, PpmDecodeErrors> {
    let header = read_header(data, options)?;

    // the header parsed, so the max value token is somewhere in the prefix
    let offset = payload_offset(data)
        .ok_or_else(|| PpmDecodeErrors::UnsupportedColorDepth(String::new()))?;

    // an offset past the end is an empty payload, not an error
    let payload = data.get(offset..).unwrap_or(&[]);

    trace!("Payload offset: {offset}");
    trace!("Payload size: {}", payload.len());

    let expected = header.expected_size();

    match header.dimensions() {
        Some((width, height)) if expected == Some(payload.len()) => {
            Ok(Image::new(width, height, PpmFormat::P6, payload.to_vec()))
        }
        _ => Err(PpmDecodeErrors::PixelDataSizeMismatch(
            expected,
            payload.len()
        ))
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use crate::p6::{decode, payload_offset};
    use crate::{DecoderOptions, PpmDecodeErrors, PpmFormat};

    fn p6(header: &[u8], payload: &[u8]) -> Vec<u8> {
        let mut data = header.to_vec();
        data.extend_from_slice(payload);
        data
    }

    #[test]
    fn payload_follows_single_separator() {
        assert_eq!(payload_offset(b"P6 2 1 255\n"), Some(11));
        assert_eq!(payload_offset(b"P6\n2\n1\n255 \x00\x01"), Some(11));
        assert_eq!(payload_offset(b"P6 2 1 65535\n"), None);
    }

    #[test]
    fn search_only_covers_prefix() {
        let mut data = b"P6 1 1 25".to_vec();
        data.extend_from_slice(&[b' '; 20]);
        data.extend_from_slice(b"255");

        assert_eq!(payload_offset(&data), None);
    }

    #[test]
    fn decode_payload() {
        let data = p6(b"P6 2 1 255\n", &[10, 20, 30, 40, 50, 60]);
        let image = decode(&data, &DecoderOptions::default()).unwrap();

        assert_eq!(image.format(), PpmFormat::P6);
        assert_eq!(image.dimensions(), (2, 1));
        assert_eq!(image.pixels(), &[10, 20, 30, 40, 50, 60]);
    }

    #[test]
    fn payload_may_contain_whitespace_bytes() {
        let payload = [b' ', b'\n', b'\t', 0, 255, b'\r'];
        let data = p6(b"P6 1 2 255\n", &payload);
        let image = decode(&data, &DecoderOptions::default()).unwrap();

        assert_eq!(image.pixels(), &payload);
    }

    #[test]
    fn too_long_payload_is_rejected() {
        let data = p6(b"P6 1 1 255\n", &[1, 2, 3, 4]);
        let err = decode(&data, &DecoderOptions::default()).unwrap_err();

        assert!(matches!(
            err,
            PpmDecodeErrors::PixelDataSizeMismatch(Some(3), 4)
        ));
    }

    #[test]
    fn width_containing_255_shifts_payload() {
        let data = p6(b"P6 255 1 255\n", &[0; 255 * 3]);
        let err = decode(&data, &DecoderOptions::default()).unwrap_err();

        // payload starts right after the width, so it includes "1 255\n"
        assert!(matches!(
            err,
            PpmDecodeErrors::PixelDataSizeMismatch(Some(765), 771)
        ));
    }

    #[test]
    fn extra_separator_after_max_value_shifts_payload() {
        // only one byte after `255` is skipped, the rest is read as pixels
        for data in [&b"P6 1 1 255\r\n\x01\x02\x03"[..], b"P6 1 1 255  \x01\x02\x03"] {
            let err = decode(data, &DecoderOptions::default()).unwrap_err();

            assert!(matches!(
                err,
                PpmDecodeErrors::PixelDataSizeMismatch(Some(3), 4)
            ));
        }
    }

    #[test]
    fn empty_image_without_trailing_separator() {
        let image = decode(b"P6 0 0 255", &DecoderOptions::default()).unwrap();

        assert_eq!(image.dimensions(), (0, 0));
        assert!(image.pixels().is_empty());
    }

    #[test]
    fn p3_tag_is_rejected() {
        let err = decode(b"P3 1 1 255\n1 2 3", &DecoderOptions::default()).unwrap_err();

        assert!(matches!(err, PpmDecodeErrors::UnsupportedFormat(ref tag) if tag == "P3"));
    }
}
