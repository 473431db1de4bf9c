//! Channel-order normalization.
//!
//! Takes a decoded [`ImageDescriptor`] to canonical RGB/RGBA (or gray) samples
//! and the channel enumeration expected by a downstream raster library.
//!
//! | order tag | channels | kernel |
//! |-----------|----------|--------|
//! | `0x03` BGR  | 3 | [`kernels::swap_rgb`] |
//! | `0x05` BGRA | 4 | [`kernels::swap_rgba`] |
//! | `0x06` ARGB | 4 | [`kernels::shift_argb`] |
//! | `0x07` ABGR | 4 | [`kernels::shift_abgr`] |
//! | anything else | any | pass-through, no copy |

pub mod kernels;

#[cfg(feature = "simd")]
mod simd;

use alloc::borrow::Cow;
use enough::Stop;

use crate::descriptor::{ImageDescriptor, SampleFormat};
use crate::error::IsbError;
use crate::header::{IsbHeader, PRIMITIVE_UNSIGNED};
use crate::limits::Limits;
use crate::output::Normalized;
use crate::pixel::{Channels, PixelLayout};
use kernels::Permutation;

/// Normalize request with optional resource limits.
#[derive(Clone, Debug)]
pub struct NormalizeRequest<'a, 'l> {
    descriptor: ImageDescriptor<'a>,
    limits: Option<&'l Limits>,
}

impl<'a, 'l> NormalizeRequest<'a, 'l> {
    pub fn new(descriptor: ImageDescriptor<'a>) -> Self {
        Self {
            descriptor,
            limits: None,
        }
    }

    pub fn with_limits(mut self, limits: &'l Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Validate the sample format and reorder to canonical channel order.
    ///
    /// Pass-through orders hand the payload along without copying; reordered
    /// payloads are written to a fresh buffer and the input is left untouched.
    pub fn normalize(self, stop: impl Stop) -> Result<Normalized<'a>, IsbError> {
        let header = *self.descriptor.header();
        let layout = check_supported(&header.format)?;
        if let Some(limits) = self.limits {
            limits.check(header.width, header.height)?;
        }

        let order = header.format.channel_order;
        let pixels = match Permutation::to_canonical(order, header.format.channels) {
            None => {
                isb_trace!("{order:?} with {} channels: pass-through", header.format.channels);
                self.descriptor.into_raw()
            }
            Some(perm) => {
                let raw = self.descriptor.raw();
                if let Some(limits) = self.limits {
                    limits.check_memory(raw.len())?;
                }
                isb_trace!("{order:?} -> canonical via {perm:?} ({layout:?})");
                Cow::Owned(kernels::reorder(
                    raw,
                    perm,
                    header.width as usize,
                    layout.bytes_per_channel(),
                    &stop,
                )?)
            }
        };

        Ok(Normalized::new(pixels, header.width, header.height, layout))
    }
}

/// Check that downstream can represent `format`, returning its canonical layout.
///
/// Checks run in order: primitive type, bit depth, channel count.
pub(crate) fn check_supported(format: &SampleFormat) -> Result<PixelLayout, IsbError> {
    if format.primitive_type != PRIMITIVE_UNSIGNED {
        return Err(IsbError::UnsupportedPrimitive {
            tag: format.primitive_type,
        });
    }
    let bits = format.bits_per_channel;
    if bits != 8 && bits != 16 {
        return Err(IsbError::UnsupportedBitDepth { bits });
    }
    let channels = Channels::from_count(format.channels).ok_or(
        IsbError::UnsupportedChannelCount {
            channels: format.channels,
        },
    )?;
    PixelLayout::new(channels, bits).ok_or(IsbError::UnsupportedBitDepth { bits })
}

/// Reorder canonical pixels into `header`'s channel order.
pub(crate) fn reorder_from_canonical<'a>(
    pixels: Cow<'a, [u8]>,
    header: &IsbHeader,
    stop: &dyn Stop,
) -> Result<Cow<'a, [u8]>, IsbError> {
    let format = &header.format;
    match Permutation::from_canonical(format.channel_order, format.channels) {
        None => Ok(pixels),
        Some(perm) => Ok(Cow::Owned(kernels::reorder(
            &pixels,
            perm,
            header.width as usize,
            format.bytes_per_channel(),
            stop,
        )?)),
    }
}
