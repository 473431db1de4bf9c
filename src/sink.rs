//! Handoff to an external raster capability.

use alloc::vec::Vec;

use crate::pixel::Channels;

/// Receives a normalized image: tightly packed canonical pixels
/// (`width * height * channels * bytes_per_channel` bytes, row-major).
///
/// Ownership of the buffer moves to the sink. Implement this for whatever
/// library does the decoding, resizing and encoding downstream.
///
/// ```
/// use zenisb::{Channels, RasterSink};
///
/// struct Collect(Vec<(u32, u32, Channels, usize)>);
///
/// impl RasterSink for Collect {
///     type Handle = usize;
///     type Error = core::convert::Infallible;
///
///     fn accept(
///         &mut self,
///         pixels: Vec<u8>,
///         width: u32,
///         height: u32,
///         channels: Channels,
///     ) -> Result<usize, Self::Error> {
///         self.0.push((width, height, channels, pixels.len()));
///         Ok(self.0.len() - 1)
///     }
/// }
/// ```
pub trait RasterSink {
    /// Opaque image handle returned by the capability.
    type Handle;
    type Error;

    fn accept(
        &mut self,
        pixels: Vec<u8>,
        width: u32,
        height: u32,
        channels: Channels,
    ) -> Result<Self::Handle, Self::Error>;
}
