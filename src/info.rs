use crate::error::IsbError;
use crate::header::{HEADER_LEN, IsbHeader};
use crate::order::ChannelOrder;

/// Header information obtained without touching the pixel data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
    pub channels: u8,
    pub primitive_type: u8,
    pub bits_per_channel: u8,
    pub channel_order: ChannelOrder,
    /// Expected raw payload size, `None` if it does not fit in `usize`.
    pub pixel_bytes: Option<usize>,
}

impl ImageInfo {
    /// Probe an ISB header.
    ///
    /// Validates signature, version, dimensions and bit depth, but not the
    /// payload length, so a truncated file can still be inspected.
    pub fn from_bytes(data: &[u8]) -> Result<Self, IsbError> {
        let header = IsbHeader::parse(data)?;
        Ok(Self {
            width: header.width,
            height: header.height,
            channels: header.format.channels,
            primitive_type: header.format.primitive_type,
            bits_per_channel: header.format.bits_per_channel,
            channel_order: header.format.channel_order,
            pixel_bytes: header.pixel_bytes().ok(),
        })
    }

    /// Total container size implied by the header.
    pub fn file_len(&self) -> Option<usize> {
        self.pixel_bytes?.checked_add(HEADER_LEN)
    }
}
