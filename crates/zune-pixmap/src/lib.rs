/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A Portable Pixmap (PPM) decoder
//!
//! Decodes the two RGB flavours of the format
//! - `P3`: header and samples are whitespace separated decimal text
//! - `P6`: text header followed by raw sample bytes
//!
//! Only 8 bit images (max color value `255`) are supported and the header
//! may not contain comments.
//!
//! # Example
//! ```
//! use zune_pixmap::{PpmDecoder, Rgb};
//!
//! let data = b"P3\n2 1\n255\n255 0 0 0 0 255\n";
//! let image = PpmDecoder::new(data).decode().unwrap();
//!
//! assert_eq!(image.dimensions(), (2, 1));
//! assert_eq!(image.get_pixel(1, 0), Some(Rgb { r: 0, g: 0, b: 255 }));
//! ```
//!
//! # Features
//! - `std`: Use std, when disabled the crate is `no_std` with `alloc`. Enabled by default.
//! - `log`: Emit decoder traces through the `log` crate. Enabled by default.
//! - `serde`: Serialize image metadata.
#![cfg_attr(not(feature = "std"), no_std)]
#![macro_use]
extern crate alloc;
extern crate core;

pub use decoder::*;
pub use errors::*;
pub use image::*;
pub use options::*;

mod decoder;
mod errors;
mod header;
mod image;
pub mod log;
mod options;
mod p3;
mod p6;
mod serde;
