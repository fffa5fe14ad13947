/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! ASCII (P3) pixel extraction
//!
//! Every token after the header is a sample. With default options samples
//! are converted the way a store into an unsigned 8 bit array converts a
//! number, so out of range values wrap and garbage becomes zero. Strict mode
//! rejects anything that isn't an integer between 0 and 255.

use alloc::string::ToString;
use alloc::vec::Vec;

use crate::errors::PpmDecodeErrors;
use crate::header::{decode_text, PpmHeader};
use crate::image::{Image, PpmFormat};
use crate::log::trace;
use crate::options::DecoderOptions;

/// 2^63, every f64 at or above this magnitude is a multiple of 256
const WRAP_LIMIT: f64 = 9_223_372_036_854_775_808.0;

/// Read the header of a P3 image
pub(crate) fn read_header(
    data: &[u8], options: &DecoderOptions
) -> Result<PpmHeader, PpmDecodeErrors> {
    let text = decode_text(data);

    let header = PpmHeader::parse(&mut text.split_whitespace(), options)?;
    header.expect_format(PpmFormat::P3)?;

    Ok(header)
}

/// Decode a P3 image
pub(crate) fn decode(data: &[u8], options: &DecoderOptions) -> Result<Image, PpmDecodeErrors> {
    let text = decode_text(data);
    let mut tokens = text.split_whitespace();

    let header = PpmHeader::parse(&mut tokens, options)?;
    header.expect_format(PpmFormat::P3)?;

    let expected = header.expected_size();
    // don't trust the header for the allocation, a sample needs at least one byte
    let capacity = expected.unwrap_or(0).min(text.len());
    let mut pixels = Vec::with_capacity(capacity);

    if options.strict_mode() {
        for token in tokens {
            pixels.push(strict_sample(token)?);
        }
    } else {
        pixels.extend(tokens.map(coerce_sample));
    }

    trace!("Found {} samples", pixels.len());

    match header.dimensions() {
        Some((width, height)) if expected == Some(pixels.len()) => {
            Ok(Image::new(width, height, PpmFormat::P3, pixels))
        }
        _ => Err(PpmDecodeErrors::PixelDataSizeMismatch(
            expected,
            pixels.len()
        ))
    }
}

/// Convert a sample token to a byte
///
/// - Tokens that are not numbers, NaN and infinities become 0
/// - Fractions are truncated toward zero
/// - Everything else wraps modulo 256, e.g `256` is 0 and `-1` is 255
pub(crate) fn coerce_sample(token: &str) -> u8 {
    if let Ok(value) = token.parse::<u8>() {
        return value;
    }
    match token.parse::<f64>() {
        Ok(value) => wrap_to_u8(value),
        Err(_) => 0
    }
}

fn wrap_to_u8(value: f64) -> u8 {
    if !value.is_finite() || value >= WRAP_LIMIT || value <= -WRAP_LIMIT {
        return 0;
    }
    // `as` truncates toward zero and the value fits an i64 here
    (value as i64).rem_euclid(256) as u8
}

fn strict_sample(token: &str) -> Result<u8, PpmDecodeErrors> {
    token
        .parse::<u8>()
        .map_err(|_| PpmDecodeErrors::InvalidSample(token.to_string()))
}
