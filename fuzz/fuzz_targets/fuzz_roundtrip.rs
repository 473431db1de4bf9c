#![no_main]
use libfuzzer_sys::fuzz_target;
use zenisb::*;

fuzz_target!(|data: &[u8]| {
    // If we can decode it, re-encoding must reproduce the input byte for byte
    let Ok(decoded) = decode(data) else {
        return;
    };
    let reencoded = encode(&decoded);
    assert_eq!(reencoded, data, "roundtrip byte mismatch");

    // Normalizing and writing back in the original order must restore the payload
    let format = decoded.format();
    let (width, height) = (decoded.width(), decoded.height());
    let raw = decoded.raw().to_vec();
    let Ok(normalized) = normalize(decoded, enough::Unstoppable) else {
        return;
    };
    let restored = ImageDescriptor::from_canonical(
        normalized.pixels(),
        width,
        height,
        format,
        enough::Unstoppable,
    )
    .expect("normalized pixels must be re-orderable");
    assert_eq!(restored.raw(), &raw[..], "denormalize mismatch");
});
