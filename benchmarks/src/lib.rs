/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::Write;

use zune_pixmap::PpmFormat;

/// Pixels of a `width` x `height` test pattern
pub fn pattern(width: usize, height: usize) -> Vec<u8> {
    let mut pixels = Vec::with_capacity(width * height * 3);

    for y in 0..height {
        for x in 0..width {
            pixels.extend_from_slice(&[(x & 255) as u8, (y & 255) as u8, ((x ^ y) & 255) as u8]);
        }
    }
    pixels
}

/// Encode the test pattern as a PPM file of the given format
pub fn synthetic_ppm(format: PpmFormat, width: usize, height: usize) -> Vec<u8> {
    let pixels = pattern(width, height);

    match format {
        PpmFormat::P6 => {
            let mut data = format!("P6\n{width} {height}\n255\n").into_bytes();
            data.extend_from_slice(&pixels);
            data
        }
        PpmFormat::P3 => {
            let mut text = format!("P3\n{width} {height}\n255\n");

            for row in pixels.chunks(width * 3) {
                for sample in row {
                    // writing to a String does not fail
                    let _ = write!(text, "{sample} ");
                }
                text.push('\n');
            }
            text.into_bytes()
        }
    }
}
