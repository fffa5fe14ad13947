/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use alloc::vec::Vec;
use core::fmt::{Display, Formatter};

/// Number of channels in a decoded pixel
pub(crate) const RGB_COMPONENTS: usize = 3;

/// Maximum channel value supported by the decoder
pub(crate) const SUPPORTED_MAX_VALUE: u16 = 255;

/// The PPM variant an image was stored in
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum PpmFormat {
    /// ASCII variant, samples are whitespace separated decimal numbers
    P3,
    /// Binary variant, samples are raw bytes
    P6
}

impl PpmFormat {
    /// Return the format for a header tag
    ///
    /// Only exact matches are recognised, `p6` or `P6\0` return `None`
    pub fn from_tag(tag: &str) -> Option<PpmFormat> {
        match tag {
            "P3" => Some(PpmFormat::P3),
            "P6" => Some(PpmFormat::P6),
            _ => None
        }
    }

    /// The tag as it appears at the start of a file
    pub const fn as_str(self) -> &'static str {
        match self {
            PpmFormat::P3 => "P3",
            PpmFormat::P6 => "P6"
        }
    }
}

impl Display for PpmFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single decoded pixel
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8
}

impl From<Rgb> for [u8; 3] {
    fn from(value: Rgb) -> Self {
        [value.r, value.g, value.b]
    }
}

/// A decoded PPM image
///
/// Pixels are stored interleaved as `R,G,B` triples in row-major
/// order, the buffer always holds exactly `width*height*3` bytes.
///
/// Images are only created by the decoder and can't be modified afterwards,
/// use [`into_pixels`](Image::into_pixels) to take ownership of the buffer.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Image {
    width:           usize,
    height:          usize,
    max_color_value: u16,
    format:          PpmFormat,
    pixels:          Vec<u8>
}

impl Image {
    pub(crate) fn new(width: usize, height: usize, format: PpmFormat, pixels: Vec<u8>) -> Image {
        debug_assert_eq!(pixels.len(), width * height * RGB_COMPONENTS);

        Image {
            width,
            height,
            max_color_value: SUPPORTED_MAX_VALUE,
            format,
            pixels
        }
    }

    /// Image width in pixels
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Return image dimensions as `(width, height)`
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// The declared maximum channel value, always 255
    pub const fn max_color_value(&self) -> u16 {
        self.max_color_value
    }

    /// The PPM variant the image was decoded from
    pub const fn format(&self) -> PpmFormat {
        self.format
    }

    /// Number of components per pixel, always 3 (RGB)
    pub const fn colorspace_components(&self) -> usize {
        RGB_COMPONENTS
    }

    /// Interleaved RGB samples
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Consume the image returning the interleaved RGB samples
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// Return the pixel at column `x` of row `y`
    ///
    /// Returns `None` if the coordinates are outside the image
    ///
    /// # Example
    /// ```
    /// use zune_pixmap::{PpmDecoder, Rgb};
    ///
    /// let image = PpmDecoder::new(b"P6 2 1 255\n\x0a\x14\x1e\x28\x32\x3c")
    ///     .decode()
    ///     .unwrap();
    ///
    /// assert_eq!(image.get_pixel(1, 0), Some(Rgb { r: 40, g: 50, b: 60 }));
    /// assert_eq!(image.get_pixel(2, 0), None);
    /// ```
    pub fn get_pixel(&self, x: usize, y: usize) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = (y * self.width + x) * RGB_COMPONENTS;

        match self.pixels.get(offset..offset + RGB_COMPONENTS)? {
            &[r, g, b] => Some(Rgb { r, g, b }),
            _ => None
        }
    }

    /// Width divided by height
    pub fn aspect_ratio(&self) -> f64 {
        self.width as f64 / self.height as f64
    }

    /// Total number of pixels, `width*height`
    pub const fn pixel_count(&self) -> usize {
        self.width * self.height
    }
}
