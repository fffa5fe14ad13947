/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use alloc::string::String;
use core::fmt::{Debug, Display, Formatter};

/// Possible errors that may occur during decoding
///
/// The first three variants are the only ones the decoder returns
/// with default options, the rest are raised when
/// [`DecoderOptions`](crate::DecoderOptions) asks for limits or strict parsing.
pub enum PpmDecodeErrors {
    /// The max color value in the header is not `255`
    ///
    /// The argument is the token found in its place, empty
    /// if the header ended early
    UnsupportedColorDepth(String),
    /// The image does not start with `P3` or `P6`
    ///
    /// The argument is the offending format tag
    UnsupportedFormat(String),
    /// The pixel payload does not contain `width*height*3` samples
    ///
    /// # Arguments
    /// - 1st argument is the number of samples the header declares, `None` if
    ///   a dimension could not be parsed or the size overflows
    /// - 2nd argument is the number of samples actually found
    PixelDataSizeMismatch(Option<usize>, usize),
    /// A dimension is larger than the configured limit
    ///
    /// # Arguments
    /// - 1st argument is the dimension name
    /// - 2nd argument is the configured limit
    /// - 3rd argument is the value found
    LargeDimensions(&'static str, usize, usize),
    /// Strict mode: a header dimension is not a decimal integer
    InvalidHeader(String),
    /// Strict mode: a P3 sample is not an integer between 0 and 255
    InvalidSample(String)
}

impl Debug for PpmDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            PpmDecodeErrors::UnsupportedColorDepth(found) => {
                writeln!(
                    f,
                    "Unsupported max color value `{found}`, only 255 (8 bit channels) is supported"
                )
            }
            PpmDecodeErrors::UnsupportedFormat(found) => {
                writeln!(
                    f,
                    "Unsupported PPM format `{found}`, supported formats are P3 and P6"
                )
            }
            PpmDecodeErrors::PixelDataSizeMismatch(Some(expected), found) => {
                writeln!(
                    f,
                    "Pixel data size mismatch, expected {expected} samples but found {found}"
                )
            }
            PpmDecodeErrors::PixelDataSizeMismatch(None, found) => {
                writeln!(
                    f,
                    "Pixel data size mismatch, header dimensions are not valid numbers and {found} samples were found"
                )
            }
            PpmDecodeErrors::LargeDimensions(dimension, expected, found) => {
                writeln!(
                    f,
                    "Too large {dimension}, expected a value of at most {expected} but found {found}"
                )
            }
            PpmDecodeErrors::InvalidHeader(reason) => {
                writeln!(f, "Invalid header, reason: {reason}")
            }
            PpmDecodeErrors::InvalidSample(sample) => {
                writeln!(
                    f,
                    "Invalid sample `{sample}`, expected an integer between 0 and 255"
                )
            }
        }
    }
}

impl Display for PpmDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PpmDecodeErrors {}
