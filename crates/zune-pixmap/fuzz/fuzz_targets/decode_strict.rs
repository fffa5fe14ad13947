#![no_main]

use libfuzzer_sys::fuzz_target;
use zune_pixmap::DecoderOptions;

fuzz_target!(|data: &[u8]| {
    let options = DecoderOptions::new_strict()
        .set_max_width(1 << 14)
        .set_max_height(1 << 14);

    let mut decoder = zune_pixmap::PpmDecoder::new_with_options(data, options);
    let _ = decoder.decode_headers();
    let _ = decoder.decode();
});
