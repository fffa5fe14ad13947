#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut decoder = zune_pixmap::PpmDecoder::new(data);

    if let Ok(image) = decoder.decode() {
        assert_eq!(image.pixels().len(), image.pixel_count() * 3);
    }
});
