/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Header tokenization shared by the P3 and P6 extractors
//!
//! A header is four whitespace separated tokens,
//! `format width height max_value`, nothing else is recognised
//! (no comments, no extra fields).

use alloc::borrow::Cow;
use alloc::format;
use alloc::string::{String, ToString};

use crate::errors::PpmDecodeErrors;
use crate::image::{PpmFormat, RGB_COMPONENTS};
use crate::log::trace;
use crate::options::DecoderOptions;

/// Number of leading bytes decoded as text when only the header is needed
pub(crate) const HEADER_PREFIX_SIZE: usize = 20;

/// The only max color value token accepted
pub(crate) const MAX_VALUE_TOKEN: &str = "255";

/// Fields read from the first four header tokens
///
/// Dimensions are `None` when their token is missing or
/// is not a decimal integer. That is not an error here, it
/// surfaces later as a size mismatch.
#[derive(Clone, Debug)]
pub(crate) struct PpmHeader {
    pub(crate) tag:    String,
    pub(crate) width:  Option<usize>,
    pub(crate) height: Option<usize>
}

/// Return at most the first [`HEADER_PREFIX_SIZE`] bytes of `data`
pub(crate) fn header_prefix(data: &[u8]) -> &[u8] {
    &data[..data.len().min(HEADER_PREFIX_SIZE)]
}

/// Decode bytes as text, invalid UTF-8 sequences are replaced
/// with U+FFFD instead of failing
pub(crate) fn decode_text(data: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(data)
}

/// Read the format tag, the first whitespace separated token of the
/// header prefix
///
/// Returns an empty string when the prefix has no tokens
pub(crate) fn read_tag(data: &[u8]) -> String {
    decode_text(header_prefix(data))
        .split_whitespace()
        .next()
        .unwrap_or("")
        .to_string()
}

impl PpmHeader {
    /// Parse the first four tokens of `tokens` as a header
    ///
    /// The iterator is left positioned after the max value so that
    /// callers can continue reading samples from it.
    ///
    /// The max value is checked before the dimensions are looked at.
    pub(crate) fn parse<'a, I>(
        tokens: &mut I, options: &DecoderOptions
    ) -> Result<PpmHeader, PpmDecodeErrors>
    where
        I: Iterator<Item = &'a str>
    {
        let tag = tokens.next().unwrap_or("");
        let width = tokens.next();
        let height = tokens.next();
        let max_value = tokens.next().unwrap_or("");

        if max_value != MAX_VALUE_TOKEN {
            return Err(PpmDecodeErrors::UnsupportedColorDepth(
                max_value.to_string()
            ));
        }

        let width = parse_dimension("width", width, options.max_width(), options)?;
        let height = parse_dimension("height", height, options.max_height(), options)?;

        trace!("Format: {tag}");
        trace!("Width: {width:?}, height: {height:?}");

        Ok(PpmHeader {
            tag: tag.to_string(),
            width,
            height
        })
    }

    /// Confirm the header tag is `format`
    pub(crate) fn expect_format(&self, format: PpmFormat) -> Result<(), PpmDecodeErrors> {
        if self.tag != format.as_str() {
            return Err(PpmDecodeErrors::UnsupportedFormat(self.tag.clone()));
        }
        Ok(())
    }

    /// Return `(width, height)` if both parsed
    pub(crate) fn dimensions(&self) -> Option<(usize, usize)> {
        Some((self.width?, self.height?))
    }

    /// Number of samples the payload must contain, `width*height*3`
    ///
    /// `None` if a dimension did not parse or the product overflows
    pub(crate) fn expected_size(&self) -> Option<usize> {
        let (width, height) = self.dimensions()?;

        width
            .checked_mul(height)?
            .checked_mul(RGB_COMPONENTS)
    }
}

fn parse_dimension(
    name: &'static str, token: Option<&str>, limit: usize, options: &DecoderOptions
) -> Result<Option<usize>, PpmDecodeErrors> {
    let value = token.and_then(|t| t.parse::<usize>().ok());

    match value {
        Some(value) if value > limit => {
            Err(PpmDecodeErrors::LargeDimensions(name, limit, value))
        }
        None if options.strict_mode() => {
            let msg = format!(
                "Could not parse {name} `{}` as an integer",
                token.unwrap_or("")
            );
            Err(PpmDecodeErrors::InvalidHeader(msg))
        }
        _ => Ok(value)
    }
}
