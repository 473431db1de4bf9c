//! # zenisb
//!
//! Codec for the ISB raw pixel container, plus channel-order normalization
//! for handing its pixels to a raster image library.
//!
//! ## Container
//!
//! A fixed 16-byte header (`"ISB"`, version, channel count, primitive type,
//! bits per channel, channel order, little-endian width and height) followed
//! by exactly `width * height * channels * bits_per_channel / 8` bytes of
//! row-major, interleaved pixel data. See [`header`] for the byte layout.
//!
//! Decoding is zero-copy: the returned [`ImageDescriptor`] borrows its payload
//! from the input. Anything that does not match the layout exactly (wrong
//! signature, any version other than [`FORMAT_VERSION`], zero dimensions, a
//! payload one byte short or long) is rejected.
//!
//! ## Normalization
//!
//! [`normalize()`] reorders BGR, BGRA, ARGB and ABGR payloads to canonical
//! RGB/RGBA and maps the channel count to [`Channels`]. Samples move as whole
//! units, so 16-bit data is permuted correctly. Only unsigned 8/16-bit samples
//! with 1, 3 or 4 channels are accepted; everything else is an error, never
//! coerced.
//!
//! ## Usage
//!
//! ```no_run
//! use zenisb::{Unstoppable, decode, encode, normalize};
//!
//! let data: &[u8] = &[]; // your ISB bytes
//!
//! let image = decode(data)?;
//! println!("{}x{} {:?}", image.width(), image.height(), image.channel_order());
//!
//! // Re-serialize unchanged
//! let bytes = encode(&image);
//! assert_eq!(bytes, data);
//!
//! // Canonical RGB/RGBA for a raster library
//! let canonical = normalize(image, Unstoppable)?;
//! let (pixels, channels) = (canonical.pixels(), canonical.channels);
//! # let _ = (pixels, channels);
//! # Ok::<(), zenisb::IsbError>(())
//! ```
//!
//! ## Features
//!
//! - `simd`: SIMD-dispatched 8-bit BGR/BGRA swaps via `garb`.
//! - `rgb` / `imgref`: typed views of normalized pixels.
//! - `log`: debug/trace logging through the `log` facade.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[macro_use]
mod logging;

mod decode;
mod descriptor;
mod encode;
mod error;
pub mod header;
mod info;
mod limits;
pub mod normalize;
mod order;
mod output;
mod pixel;
mod sink;

use alloc::vec::Vec;

// Re-exports
pub use decode::DecodeRequest;
pub use descriptor::{ImageDescriptor, SampleFormat};
pub use enough::{Stop, Unstoppable};
pub use error::IsbError;
pub use header::{FORMAT_VERSION, HEADER_LEN, MAGIC};
pub use info::ImageInfo;
pub use limits::Limits;
pub use normalize::NormalizeRequest;
pub use normalize::kernels::{shift_abgr, shift_argb, swap_rgb, swap_rgba};
pub use order::ChannelOrder;
pub use output::Normalized;
#[cfg(feature = "rgb")]
pub use pixel::CanonicalPixel;
pub use pixel::{Channels, PixelLayout};
pub use sink::RasterSink;

/// Decode an ISB container. The descriptor borrows its payload from `data`.
pub fn decode(data: &[u8]) -> Result<ImageDescriptor<'_>, IsbError> {
    DecodeRequest::new(data).decode()
}

/// Encode a descriptor into a new ISB container.
pub fn encode(descriptor: &ImageDescriptor<'_>) -> Vec<u8> {
    let mut out = Vec::new();
    encode::encode_descriptor(descriptor, &mut out);
    out
}

/// Append an ISB container for `descriptor` to `out`.
pub fn encode_into(descriptor: &ImageDescriptor<'_>, out: &mut Vec<u8>) {
    encode::encode_descriptor(descriptor, out);
}

/// Encode caller-supplied fields without validation.
///
/// `pixels` is written as-is after the header. Callers are responsible for a
/// payload length matching `width * height * format.bytes_per_pixel()`.
pub fn encode_parts(pixels: &[u8], width: u32, height: u32, format: SampleFormat) -> Vec<u8> {
    let mut out = Vec::new();
    encode::encode_parts(pixels, width, height, format, &mut out);
    out
}

/// Normalize to canonical channel order with no resource limits.
pub fn normalize(
    descriptor: ImageDescriptor<'_>,
    stop: impl Stop,
) -> Result<Normalized<'_>, IsbError> {
    NormalizeRequest::new(descriptor).normalize(stop)
}
