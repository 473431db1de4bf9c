use alloc::vec::Vec;

use crate::descriptor::{ImageDescriptor, SampleFormat};
use crate::header::{HEADER_LEN, IsbHeader};

/// Serialize a descriptor: 16-byte header followed by the raw payload.
pub(crate) fn encode_descriptor(descriptor: &ImageDescriptor<'_>, out: &mut Vec<u8>) {
    write_container(descriptor.header(), descriptor.raw(), out);
}

/// Serialize caller-supplied fields without validating them.
///
/// The payload is appended as-is; a length that does not match the header
/// produces a container that [`crate::decode()`] will reject.
pub(crate) fn encode_parts(
    pixels: &[u8],
    width: u32,
    height: u32,
    format: SampleFormat,
    out: &mut Vec<u8>,
) {
    let header = IsbHeader {
        format,
        width,
        height,
    };
    write_container(&header, pixels, out);
}

fn write_container(header: &IsbHeader, pixels: &[u8], out: &mut Vec<u8>) {
    out.reserve(HEADER_LEN + pixels.len());
    header.write(out);
    out.extend_from_slice(pixels);
}
