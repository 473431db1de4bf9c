use alloc::borrow::Cow;

use crate::descriptor::ImageDescriptor;
use crate::error::IsbError;
use crate::header::{HEADER_LEN, IsbHeader};
use crate::limits::Limits;

/// Decode request with optional resource limits.
///
/// ```no_run
/// use zenisb::{DecodeRequest, Limits};
///
/// let data: &[u8] = &[]; // your ISB bytes
/// let limits = Limits { max_pixels: Some(1 << 24), ..Default::default() };
/// let image = DecodeRequest::new(data).with_limits(&limits).decode()?;
/// println!("{}x{} {:?}", image.width(), image.height(), image.channel_order());
/// # Ok::<(), zenisb::IsbError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DecodeRequest<'a> {
    data: &'a [u8],
    limits: Option<&'a Limits>,
}

impl<'a> DecodeRequest<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, limits: None }
    }

    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Parse and validate the container.
    ///
    /// The returned descriptor borrows its pixel payload from the input.
    pub fn decode(self) -> Result<ImageDescriptor<'a>, IsbError> {
        let header = IsbHeader::parse(self.data)?;
        isb_debug!(
            "ISB header: {}x{} channels={} primitive={} bits={} order={:?}",
            header.width,
            header.height,
            header.format.channels,
            header.format.primitive_type,
            header.format.bits_per_channel,
            header.format.channel_order
        );
        if let Some(limits) = self.limits {
            limits.check(header.width, header.height)?;
        }

        let expected = header.container_len();
        if self.data.len() != expected {
            return Err(IsbError::SizeMismatch {
                expected,
                actual: self.data.len(),
            });
        }
        let pixel_bytes = expected - HEADER_LEN;
        if let Some(limits) = self.limits {
            limits.check_memory(pixel_bytes)?;
        }

        ImageDescriptor::with_header(header, Cow::Borrowed(&self.data[HEADER_LEN..]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::SampleFormat;
    use alloc::vec;

    fn encoded_rgb(width: u32, height: u32) -> alloc::vec::Vec<u8> {
        let raw = vec![7u8; width as usize * height as usize * 3];
        let desc = ImageDescriptor::new(raw, width, height, SampleFormat::RGB8).unwrap();
        crate::encode(&desc)
    }

    #[test]
    fn decode_is_zero_copy() {
        let data = encoded_rgb(3, 2);
        let desc = DecodeRequest::new(&data).decode().unwrap();
        assert!(desc.is_borrowed());
        assert_eq!(desc.raw().as_ptr(), data[HEADER_LEN..].as_ptr());
    }

    #[test]
    fn size_mismatch_reports_total_lengths() {
        let mut data = encoded_rgb(2, 2);
        data.push(0);
        match DecodeRequest::new(&data).decode() {
            Err(IsbError::SizeMismatch { expected, actual }) => {
                assert_eq!(expected, 16 + 12);
                assert_eq!(actual, 16 + 13);
            }
            other => panic!("expected SizeMismatch, got {other:?}"),
        }
    }

    #[test]
    fn overflowing_size_is_size_mismatch() {
        let data = [
            b'I', b'S', b'B', 1, 0xff, 0, 0xf8, 0x03, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
            0xff,
        ];
        match DecodeRequest::new(&data).decode() {
            Err(IsbError::SizeMismatch { expected, actual }) => {
                assert_eq!(expected, usize::MAX);
                assert_eq!(actual, HEADER_LEN);
            }
            other => panic!("expected SizeMismatch, got {other:?}"),
        }
    }

    #[test]
    fn limits_checked_before_payload() {
        // Header claims a large image but no payload follows: limits win.
        let mut data = encoded_rgb(1, 1);
        data[8..12].copy_from_slice(&100_000u32.to_le_bytes());
        let limits = Limits {
            max_width: Some(1000),
            ..Default::default()
        };
        assert!(matches!(
            DecodeRequest::new(&data).with_limits(&limits).decode(),
            Err(IsbError::LimitExceeded(_))
        ));
        assert!(matches!(
            DecodeRequest::new(&data).decode(),
            Err(IsbError::SizeMismatch { .. })
        ));
    }

    #[test]
    fn memory_limit() {
        let data = encoded_rgb(4, 4);
        let limits = Limits {
            max_memory_bytes: Some(47),
            ..Default::default()
        };
        assert!(matches!(
            DecodeRequest::new(&data).with_limits(&limits).decode(),
            Err(IsbError::LimitExceeded(_))
        ));
        let limits = Limits {
            max_memory_bytes: Some(48),
            ..Default::default()
        };
        assert!(DecodeRequest::new(&data).with_limits(&limits).decode().is_ok());
    }
}
