use alloc::borrow::Cow;
use enough::Stop;

use crate::error::IsbError;
use crate::header::{FORMAT_VERSION, IsbHeader, PRIMITIVE_UNSIGNED};
use crate::order::ChannelOrder;

/// Sample format fields of an ISB header.
///
/// The container accepts any channel count and any bit depth that is a
/// multiple of 8. Normalization narrows this to unsigned 8/16-bit samples
/// with 1, 3 or 4 channels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SampleFormat {
    pub channels: u8,
    pub primitive_type: u8,
    pub bits_per_channel: u8,
    pub channel_order: ChannelOrder,
}

impl SampleFormat {
    pub const GRAY8: Self = Self::new(1, 8, ChannelOrder::Other(0));
    pub const RGB8: Self = Self::new(3, 8, ChannelOrder::Rgb);
    pub const BGR8: Self = Self::new(3, 8, ChannelOrder::Bgr);
    pub const RGBA8: Self = Self::new(4, 8, ChannelOrder::Rgba);
    pub const BGRA8: Self = Self::new(4, 8, ChannelOrder::Bgra);
    pub const RGBA16: Self = Self::new(4, 16, ChannelOrder::Rgba);

    /// Unsigned integer samples with the given layout.
    pub const fn new(channels: u8, bits_per_channel: u8, channel_order: ChannelOrder) -> Self {
        Self {
            channels,
            primitive_type: PRIMITIVE_UNSIGNED,
            bits_per_channel,
            channel_order,
        }
    }

    pub const fn with_primitive_type(mut self, tag: u8) -> Self {
        self.primitive_type = tag;
        self
    }

    pub const fn with_channel_order(mut self, order: ChannelOrder) -> Self {
        self.channel_order = order;
        self
    }

    pub fn bytes_per_channel(&self) -> usize {
        usize::from(self.bits_per_channel / 8)
    }

    pub fn bytes_per_pixel(&self) -> usize {
        usize::from(self.channels) * self.bytes_per_channel()
    }
}

/// A validated ISB image: header fields plus the raw pixel payload.
///
/// Created by [`crate::decode()`] (zero-copy over the input), by
/// [`ImageDescriptor::new`], or by [`ImageDescriptor::from_canonical`].
/// The payload length always equals
/// `width * height * channels * bits_per_channel / 8`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageDescriptor<'a> {
    header: IsbHeader,
    raw: Cow<'a, [u8]>,
}

impl<'a> ImageDescriptor<'a> {
    /// Build a descriptor from caller-supplied fields.
    ///
    /// Applies the same rules as decoding: nonzero dimensions, bit depth a
    /// multiple of 8, and an exact payload length.
    pub fn new(
        raw: impl Into<Cow<'a, [u8]>>,
        width: u32,
        height: u32,
        format: SampleFormat,
    ) -> Result<Self, IsbError> {
        let header = IsbHeader {
            format,
            width,
            height,
        };
        header.validate()?;
        Self::with_header(header, raw.into())
    }

    /// Build a descriptor in `format.channel_order` from canonical pixels.
    ///
    /// `pixels` must be in RGB/RGBA (or gray) order. The inverse of the
    /// normalization permutation for the target order is applied, so that
    /// [`crate::normalize()`] of the result yields `pixels` again. Only formats
    /// that normalization accepts can be produced this way.
    pub fn from_canonical(
        pixels: impl Into<Cow<'a, [u8]>>,
        width: u32,
        height: u32,
        format: SampleFormat,
        stop: impl Stop,
    ) -> Result<Self, IsbError> {
        let header = IsbHeader {
            format,
            width,
            height,
        };
        header.validate()?;
        crate::normalize::check_supported(&format)?;
        let pixels = pixels.into();
        let expected = header.pixel_bytes()?;
        if pixels.len() != expected {
            return Err(IsbError::SizeMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        let raw = crate::normalize::reorder_from_canonical(pixels, &header, &stop)?;
        Ok(Self { header, raw })
    }

    /// Pair a parsed header with its payload after checking the length.
    pub(crate) fn with_header(header: IsbHeader, raw: Cow<'a, [u8]>) -> Result<Self, IsbError> {
        let expected = header.pixel_bytes()?;
        if raw.len() != expected {
            return Err(IsbError::SizeMismatch {
                expected,
                actual: raw.len(),
            });
        }
        Ok(Self { header, raw })
    }

    pub(crate) fn header(&self) -> &IsbHeader {
        &self.header
    }

    pub fn version(&self) -> u8 {
        FORMAT_VERSION
    }

    pub fn format(&self) -> SampleFormat {
        self.header.format
    }

    pub fn channels(&self) -> u8 {
        self.header.format.channels
    }

    pub fn primitive_type(&self) -> u8 {
        self.header.format.primitive_type
    }

    pub fn bits_per_channel(&self) -> u8 {
        self.header.format.bits_per_channel
    }

    pub fn channel_order(&self) -> ChannelOrder {
        self.header.format.channel_order
    }

    pub fn width(&self) -> u32 {
        self.header.width
    }

    pub fn height(&self) -> u32 {
        self.header.height
    }

    /// Raw pixel payload, exactly as stored in the container.
    pub fn raw(&self) -> &[u8] {
        &self.raw
    }

    /// Whether the payload borrows from the decoded input.
    pub fn is_borrowed(&self) -> bool {
        matches!(self.raw, Cow::Borrowed(_))
    }

    /// Detach from the input buffer (copies if borrowed).
    pub fn into_owned(self) -> ImageDescriptor<'static> {
        ImageDescriptor {
            header: self.header,
            raw: Cow::Owned(self.raw.into_owned()),
        }
    }

    pub(crate) fn into_raw(self) -> Cow<'a, [u8]> {
        self.raw
    }
}
