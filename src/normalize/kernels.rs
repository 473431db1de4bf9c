//! Channel permutation kernels.
//!
//! Kernels walk pixel groups of `channels * bytes_per_channel` bytes and move
//! whole samples between channel slots. A 16-bit sample travels as a unit and
//! keeps its internal byte order.

use alloc::vec;
use alloc::vec::Vec;
use enough::{Stop, Unstoppable};

use crate::error::IsbError;
use crate::order::ChannelOrder;

/// Rows handled between cancellation checks.
const ROWS_PER_CHECK: usize = 16;

/// A channel permutation: `out[slot] = in[sources[slot]]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Permutation {
    /// (2, 1, 0): BGR <-> RGB.
    SwapRgb,
    /// (2, 1, 0, 3): BGRA <-> RGBA.
    SwapRgba,
    /// (1, 2, 3, 0): ARGB -> RGBA.
    RotateLeft,
    /// (3, 0, 1, 2): RGBA -> ARGB.
    RotateRight,
    /// (3, 2, 1, 0): ABGR <-> RGBA.
    Reverse,
}

impl Permutation {
    fn sources(self) -> &'static [usize] {
        match self {
            Self::SwapRgb => &[2, 1, 0],
            Self::SwapRgba => &[2, 1, 0, 3],
            Self::RotateLeft => &[1, 2, 3, 0],
            Self::RotateRight => &[3, 0, 1, 2],
            Self::Reverse => &[3, 2, 1, 0],
        }
    }

    pub(crate) fn channels(self) -> usize {
        self.sources().len()
    }

    /// Kernel taking `order` to canonical RGB/RGBA, if any bytes move.
    pub(crate) fn to_canonical(order: ChannelOrder, channels: u8) -> Option<Self> {
        match (order, channels) {
            (ChannelOrder::Bgr, 3) => Some(Self::SwapRgb),
            (ChannelOrder::Bgra, 4) => Some(Self::SwapRgba),
            (ChannelOrder::Argb, 4) => Some(Self::RotateLeft),
            (ChannelOrder::Abgr, 4) => Some(Self::Reverse),
            _ => None,
        }
    }

    /// Kernel taking canonical RGB/RGBA to `order`; inverse of [`Self::to_canonical`].
    pub(crate) fn from_canonical(order: ChannelOrder, channels: u8) -> Option<Self> {
        match Self::to_canonical(order, channels)? {
            Self::RotateLeft => Some(Self::RotateRight),
            other => Some(other),
        }
    }
}

/// Apply `perm` to an image `width` pixels wide, allocating the output.
///
/// `src` must hold a whole number of rows.
pub(crate) fn reorder(
    src: &[u8],
    perm: Permutation,
    width: usize,
    bytes_per_channel: usize,
    stop: &dyn Stop,
) -> Result<Vec<u8>, IsbError> {
    let pixel_bytes = perm.channels() * bytes_per_channel;
    let row_bytes = width
        .checked_mul(pixel_bytes)
        .filter(|&r| r != 0)
        .ok_or_else(|| {
            IsbError::InvalidData(alloc::format!(
                "cannot reorder rows of {width} pixels x {pixel_bytes} bytes"
            ))
        })?;
    if !src.len().is_multiple_of(row_bytes) {
        return Err(IsbError::InvalidData(alloc::format!(
            "{} bytes is not a whole number of {row_bytes}-byte rows",
            src.len()
        )));
    }

    let mut out = vec![0u8; src.len()];
    let block = row_bytes.saturating_mul(ROWS_PER_CHECK);
    for (src_rows, dst_rows) in src.chunks(block).zip(out.chunks_mut(block)) {
        stop.check()?;
        permute(src_rows, dst_rows, perm, bytes_per_channel);
    }
    Ok(out)
}

fn permute(src: &[u8], dst: &mut [u8], perm: Permutation, bytes_per_channel: usize) {
    if bytes_per_channel == 1 {
        #[cfg(feature = "simd")]
        if super::simd::permute_u8(src, dst, perm) {
            return;
        }
        permute_u8(src, dst, perm.sources());
    } else {
        permute_samples(src, dst, perm.sources(), bytes_per_channel);
    }
}

fn permute_u8(src: &[u8], dst: &mut [u8], sources: &[usize]) {
    let step = sources.len();
    for (s, d) in src.chunks_exact(step).zip(dst.chunks_exact_mut(step)) {
        for (slot, &from) in sources.iter().enumerate() {
            d[slot] = s[from];
        }
    }
}

fn permute_samples(src: &[u8], dst: &mut [u8], sources: &[usize], n: usize) {
    let step = sources.len() * n;
    for (s, d) in src.chunks_exact(step).zip(dst.chunks_exact_mut(step)) {
        for (slot, &from) in sources.iter().enumerate() {
            d[slot * n..(slot + 1) * n].copy_from_slice(&s[from * n..(from + 1) * n]);
        }
    }
}

fn apply(src: &[u8], perm: Permutation, bits_per_channel: u8) -> Result<Vec<u8>, IsbError> {
    let bytes_per_channel = match bits_per_channel {
        8 => 1,
        16 => 2,
        bits => return Err(IsbError::UnsupportedBitDepth { bits }),
    };
    if src.is_empty() {
        return Ok(Vec::new());
    }
    let pixel_bytes = perm.channels() * bytes_per_channel;
    if !src.len().is_multiple_of(pixel_bytes) {
        return Err(IsbError::InvalidData(alloc::format!(
            "{} bytes is not a whole number of {pixel_bytes}-byte pixels",
            src.len()
        )));
    }
    reorder(
        src,
        perm,
        src.len() / pixel_bytes,
        bytes_per_channel,
        &Unstoppable,
    )
}

/// BGR <-> RGB: `(in[2], in[1], in[0])` per pixel. Self-inverse.
pub fn swap_rgb(src: &[u8], bits_per_channel: u8) -> Result<Vec<u8>, IsbError> {
    apply(src, Permutation::SwapRgb, bits_per_channel)
}

/// BGRA <-> RGBA: `(in[2], in[1], in[0], in[3])` per pixel. Self-inverse.
pub fn swap_rgba(src: &[u8], bits_per_channel: u8) -> Result<Vec<u8>, IsbError> {
    apply(src, Permutation::SwapRgba, bits_per_channel)
}

/// ARGB -> RGBA: `(in[1], in[2], in[3], in[0])` per pixel.
pub fn shift_argb(src: &[u8], bits_per_channel: u8) -> Result<Vec<u8>, IsbError> {
    apply(src, Permutation::RotateLeft, bits_per_channel)
}

/// ABGR -> RGBA: `(in[3], in[2], in[1], in[0])` per pixel.
pub fn shift_abgr(src: &[u8], bits_per_channel: u8) -> Result<Vec<u8>, IsbError> {
    apply(src, Permutation::Reverse, bits_per_channel)
}
