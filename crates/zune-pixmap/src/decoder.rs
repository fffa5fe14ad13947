/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use alloc::string::ToString;

use crate::errors::PpmDecodeErrors;
use crate::header::{read_tag, PpmHeader};
use crate::image::{Image, PpmFormat};
use crate::log::{info, trace};
use crate::options::DecoderOptions;
use crate::{p3, p6};

/// A PPM decoder
///
/// The decoder can decode P3 (ASCII) and P6 (binary) images with
/// a max color value of 255.
///
/// The decoder is initialized by calling `new` and either
/// [`decode_headers`] to inspect the image or [`decode`] to return
/// the pixels. [`decode_p3`] and [`decode_p6`] skip format detection
/// and fail if the image is of the other kind.
///
/// [`decode_headers`]: PpmDecoder::decode_headers
/// [`decode`]: PpmDecoder::decode
/// [`decode_p3`]: PpmDecoder::decode_p3
/// [`decode_p6`]: PpmDecoder::decode_p6
pub struct PpmDecoder<'a> {
    data:    &'a [u8],
    options: DecoderOptions,
    header:  Option<PpmHeader>
}

impl<'a> PpmDecoder<'a> {
    /// Create a new ppm decoder with default options
    ///
    /// # Arguments
    /// - data: PPM encoded file contents
    ///
    /// # Example
    /// ```
    /// use zune_pixmap::PpmDecoder;
    /// let mut decoder = PpmDecoder::new(b"NOT VALID PPM");
    ///
    /// assert!(decoder.decode().is_err());
    /// ```
    pub fn new(data: &'a [u8]) -> PpmDecoder<'a> {
        PpmDecoder::new_with_options(data, DecoderOptions::default())
    }

    /// Create a new PPM decoder with the specified options
    ///
    /// # Arguments
    /// - data: PPM encoded file contents
    /// - options: Modified options for the decoder
    ///
    /// # Example
    /// ```
    /// use zune_pixmap::{DecoderOptions, PpmDecoder};
    /// // reject samples outside 0..=255 instead of wrapping them
    /// let options = DecoderOptions::new_strict();
    /// let mut decoder = PpmDecoder::new_with_options(b"P3 1 1 255 1 2 300", options);
    ///
    /// assert!(decoder.decode().is_err());
    /// ```
    pub fn new_with_options(data: &'a [u8], options: DecoderOptions) -> PpmDecoder<'a> {
        PpmDecoder {
            data,
            options,
            header: None
        }
    }

    /// Detect the image format from the first header token
    ///
    /// Only the leading 20 bytes are looked at, the rest of the
    /// header is not validated.
    pub fn read_format(&self) -> Result<PpmFormat, PpmDecodeErrors> {
        let tag = read_tag(self.data);

        match PpmFormat::from_tag(&tag) {
            Some(format) => {
                trace!("Detected format {format}");
                Ok(format)
            }
            None => Err(PpmDecodeErrors::UnsupportedFormat(tag))
        }
    }

    /// Decode the image headers and store them in internal state
    ///
    /// After this returns `Ok`, [`get_format`](Self::get_format) and
    /// [`get_dimensions`](Self::get_dimensions) return information
    /// about the image. Calling it again is a no-op.
    ///
    /// Malformed dimensions are not an error here, see
    /// [`get_dimensions`](Self::get_dimensions)
    pub fn decode_headers(&mut self) -> Result<(), PpmDecodeErrors> {
        if self.header.is_some() {
            return Ok(());
        }
        let header = match self.read_format()? {
            PpmFormat::P6 => p6::read_header(self.data, &self.options)?,
            PpmFormat::P3 => p3::read_header(self.data, &self.options)?
        };
        self.header = Some(header);

        Ok(())
    }

    /// Return the image format or `None` if headers
    /// are not decoded
    pub fn get_format(&self) -> Option<PpmFormat> {
        self.header
            .as_ref()
            .and_then(|header| PpmFormat::from_tag(&header.tag))
    }

    /// Return image dimensions as `(width, height)`
    ///
    /// Returns `None` if headers are not decoded or if either
    /// dimension is not a valid number
    pub fn get_dimensions(&self) -> Option<(usize, usize)> {
        self.header.as_ref().and_then(PpmHeader::dimensions)
    }

    /// Decode a PPM image, picking the P3 or P6 path from the
    /// format tag
    ///
    /// # Example
    /// ```
    /// use zune_pixmap::{PpmDecoder, PpmFormat};
    ///
    /// let image = PpmDecoder::new(b"P3 1 1 255\n10 20 30\n").decode().unwrap();
    ///
    /// assert_eq!(image.format(), PpmFormat::P3);
    /// assert_eq!(image.pixels(), &[10, 20, 30]);
    /// ```
    pub fn decode(&mut self) -> Result<Image, PpmDecodeErrors> {
        match self.read_format()? {
            PpmFormat::P6 => self.decode_p6(),
            PpmFormat::P3 => self.decode_p3()
        }
    }

    /// Decode a binary (P6) image
    ///
    /// Fails with [`PpmDecodeErrors::UnsupportedFormat`] if the image
    /// tag is not `P6`
    pub fn decode_p6(&mut self) -> Result<Image, PpmDecodeErrors> {
        let image = p6::decode(self.data, &self.options)?;
        self.remember(&image);

        Ok(image)
    }

    /// Decode an ASCII (P3) image
    ///
    /// Fails with [`PpmDecodeErrors::UnsupportedFormat`] if the image
    /// tag is not `P3`
    pub fn decode_p3(&mut self) -> Result<Image, PpmDecodeErrors> {
        let image = p3::decode(self.data, &self.options)?;
        self.remember(&image);

        Ok(image)
    }

    fn remember(&mut self, image: &Image) {
        info!(
            "Decoded {} image, width: {}, height: {}",
            image.format(),
            image.width(),
            image.height()
        );
        self.header = Some(PpmHeader {
            tag:    image.format().as_str().to_string(),
            width:  Some(image.width()),
            height: Some(image.height())
        });
    }
}

/// Decode a PPM image with default options
///
/// Shorthand for `PpmDecoder::new(data).decode()`
///
/// # Example
/// ```
/// let image = zune_pixmap::decode(b"P6 1 1 255\n\x01\x02\x03").unwrap();
///
/// assert_eq!(image.pixels(), &[1, 2, 3]);
/// ```
pub fn decode(data: &[u8]) -> Result<Image, PpmDecodeErrors> {
    PpmDecoder::new(data).decode()
}
