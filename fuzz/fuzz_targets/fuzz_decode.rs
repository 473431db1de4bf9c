#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Probe, decode and normalize arbitrary bytes; must never panic
    let _ = zenisb::ImageInfo::from_bytes(data);
    if let Ok(image) = zenisb::decode(data) {
        let _ = zenisb::normalize(image, enough::Unstoppable);
    }
});
