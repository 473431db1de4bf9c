//! Fixed 16-byte ISB header.
//!
//! ```text
//! offset  size  field
//!      0     3  magic "ISB"
//!      3     1  version
//!      4     1  channel count
//!      5     1  primitive type (0 = unsigned integer)
//!      6     1  bits per channel (multiple of 8)
//!      7     1  channel order tag
//!      8     4  width  (u32 little-endian, nonzero)
//!     12     4  height (u32 little-endian, nonzero)
//!     16     N  raw pixel data, row-major, interleaved
//! ```

use alloc::vec::Vec;

use crate::descriptor::SampleFormat;
use crate::error::IsbError;
use crate::order::ChannelOrder;

/// Magic signature at offset 0.
pub const MAGIC: [u8; 3] = *b"ISB";

/// The only container version this crate reads and writes.
pub const FORMAT_VERSION: u8 = 1;

/// Size of the fixed header preceding the pixel data.
pub const HEADER_LEN: usize = 16;

/// Primitive type tag for unsigned integer samples.
pub const PRIMITIVE_UNSIGNED: u8 = 0;

/// Scalar header fields (everything after magic and version).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct IsbHeader {
    pub format: SampleFormat,
    pub width: u32,
    pub height: u32,
}

impl IsbHeader {
    /// Parse and validate the header fields.
    ///
    /// Checks length, signature, version, dimensions and bit depth. The total
    /// length against the pixel payload is checked by the caller.
    pub(crate) fn parse(data: &[u8]) -> Result<Self, IsbError> {
        let Some(header) = data.get(..HEADER_LEN) else {
            return Err(IsbError::TooSmall { len: data.len() });
        };
        let found = [header[0], header[1], header[2]];
        if found != MAGIC {
            return Err(IsbError::BadSignature { found });
        }
        if header[3] != FORMAT_VERSION {
            return Err(IsbError::UnsupportedVersion {
                found: header[3],
                supported: FORMAT_VERSION,
            });
        }

        let width = u32::from_le_bytes([header[8], header[9], header[10], header[11]]);
        let height = u32::from_le_bytes([header[12], header[13], header[14], header[15]]);
        let parsed = Self {
            format: SampleFormat {
                channels: header[4],
                primitive_type: header[5],
                bits_per_channel: header[6],
                channel_order: ChannelOrder::from_tag(header[7]),
            },
            width,
            height,
        };
        parsed.validate()?;
        Ok(parsed)
    }

    /// Dimension and bit depth rules shared by parsing and construction.
    pub(crate) fn validate(&self) -> Result<(), IsbError> {
        if self.width == 0 || self.height == 0 {
            return Err(IsbError::ZeroDimension {
                width: self.width,
                height: self.height,
            });
        }
        if !self.format.bits_per_channel.is_multiple_of(8) {
            return Err(IsbError::BadBitDepth {
                bits: self.format.bits_per_channel,
            });
        }
        Ok(())
    }

    /// `width * height * channels * bytes_per_channel`, or `DimensionsTooLarge`
    /// if that does not fit in `usize`.
    pub(crate) fn pixel_bytes(&self) -> Result<usize, IsbError> {
        (self.width as usize)
            .checked_mul(self.height as usize)
            .and_then(|wh| wh.checked_mul(self.format.bytes_per_pixel()))
            .ok_or(IsbError::DimensionsTooLarge {
                width: self.width,
                height: self.height,
            })
    }

    /// `HEADER_LEN + pixel_bytes`, saturated at `usize::MAX` when the product
    /// overflows. No slice can be that long, so a saturated length never
    /// passes the exact-length check.
    pub(crate) fn container_len(&self) -> usize {
        self.pixel_bytes()
            .ok()
            .and_then(|n| n.checked_add(HEADER_LEN))
            .unwrap_or(usize::MAX)
    }

    /// Append the 16 header bytes to `out`.
    pub(crate) fn write(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&MAGIC);
        out.push(FORMAT_VERSION);
        out.push(self.format.channels);
        out.push(self.format.primitive_type);
        out.push(self.format.bits_per_channel);
        out.push(self.format.channel_order.tag());
        out.extend_from_slice(&self.width.to_le_bytes());
        out.extend_from_slice(&self.height.to_le_bytes());
    }
}
