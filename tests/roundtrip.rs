use zenisb::*;

fn bgr_2x1() -> ImageDescriptor<'static> {
    ImageDescriptor::new(
        vec![0x10, 0x20, 0x30, 0x40, 0x50, 0x60],
        2,
        1,
        SampleFormat::BGR8,
    )
    .unwrap()
}

#[test]
fn bgr_2x1_encodes_to_22_bytes() {
    let encoded = encode(&bgr_2x1());
    assert_eq!(encoded.len(), 22);
    assert_eq!(
        &encoded[..16],
        &[
            0x49, 0x53, 0x42, FORMAT_VERSION, 0x03, 0x00, 0x08, 0x03, 0x02, 0x00, 0x00, 0x00,
            0x01, 0x00, 0x00, 0x00
        ]
    );
    assert_eq!(&encoded[16..], &[0x10, 0x20, 0x30, 0x40, 0x50, 0x60]);
}

#[test]
fn bgr_2x1_normalizes_to_rgb() {
    let encoded = encode(&bgr_2x1());
    let decoded = decode(&encoded).unwrap();
    let normalized = normalize(decoded, Unstoppable).unwrap();
    assert_eq!(normalized.pixels(), &[0x30, 0x20, 0x10, 0x60, 0x50, 0x40]);
    assert_eq!(normalized.channels, Channels::Rgb);
    assert_eq!(normalized.channels.count(), 3);
    assert_eq!(normalized.width, 2);
    assert_eq!(normalized.height, 1);
}

#[test]
fn decode_encode_roundtrip() {
    let original = bgr_2x1();
    let encoded = encode(&original);
    let decoded = decode(&encoded).unwrap();
    assert_eq!(decoded, original);
    assert_eq!(decoded.version(), FORMAT_VERSION);
    assert!(decoded.is_borrowed(), "decode should be zero-copy");
    assert_eq!(encode(&decoded), encoded);
}

#[test]
fn roundtrip_keeps_unknown_order_and_odd_formats() {
    // Two channels, 24-bit samples, unknown order tag, nonzero primitive type.
    let format = SampleFormat::new(2, 24, ChannelOrder::Other(0x7f)).with_primitive_type(3);
    let raw: Vec<u8> = (0..3 * 2 * 3 * 2).map(|i| i as u8).collect();
    let original = ImageDescriptor::new(raw, 3, 2, format).unwrap();
    let decoded_bytes = encode(&original);
    let decoded = decode(&decoded_bytes).unwrap();
    assert_eq!(decoded, original);
    assert_eq!(decoded.channel_order(), ChannelOrder::Other(0x7f));
    assert_eq!(decoded.primitive_type(), 3);
}

#[test]
fn encode_into_appends() {
    let mut out = vec![0xEE];
    encode_into(&bgr_2x1(), &mut out);
    assert_eq!(out.len(), 23);
    assert_eq!(out[0], 0xEE);
    assert_eq!(&out[1..4], b"ISB");
}

#[test]
fn encode_parts_does_not_validate() {
    // Payload one byte short: encoding succeeds, decoding rejects.
    let encoded = encode_parts(&[1, 2, 3, 4, 5], 2, 1, SampleFormat::BGR8);
    assert_eq!(encoded.len(), 21);
    match decode(&encoded) {
        Err(IsbError::SizeMismatch { expected, actual }) => {
            assert_eq!(expected, 22);
            assert_eq!(actual, 21);
        }
        other => panic!("expected SizeMismatch, got {other:?}"),
    }
}

#[test]
fn image_info_probe() {
    let encoded = encode(&bgr_2x1());
    let info = ImageInfo::from_bytes(&encoded).unwrap();
    assert_eq!(info.width, 2);
    assert_eq!(info.height, 1);
    assert_eq!(info.channels, 3);
    assert_eq!(info.bits_per_channel, 8);
    assert_eq!(info.channel_order, ChannelOrder::Bgr);
    assert_eq!(info.pixel_bytes, Some(6));
    assert_eq!(info.file_len(), Some(22));

    // Probing ignores a truncated payload.
    assert!(ImageInfo::from_bytes(&encoded[..16]).is_ok());
    assert!(decode(&encoded[..16]).is_err());
}

#[test]
fn from_canonical_then_normalize_is_identity() {
    let rgba: Vec<u8> = (0..4 * 3 * 2).map(|i| (i * 7) as u8).collect();
    for order in [
        ChannelOrder::Rgba,
        ChannelOrder::Bgra,
        ChannelOrder::Argb,
        ChannelOrder::Abgr,
    ] {
        let format = SampleFormat::RGBA8.with_channel_order(order);
        let desc = ImageDescriptor::from_canonical(&rgba[..], 3, 2, format, Unstoppable).unwrap();
        assert_eq!(desc.channel_order(), order);
        let bytes = encode(&desc);
        let back = normalize(decode(&bytes).unwrap(), Unstoppable).unwrap();
        assert_eq!(back.pixels(), &rgba[..], "order {order:?}");
    }
}

#[test]
fn from_canonical_argb_layout() {
    let desc = ImageDescriptor::from_canonical(
        vec![0x11, 0x22, 0x33, 0xAA],
        1,
        1,
        SampleFormat::RGBA8.with_channel_order(ChannelOrder::Argb),
        Unstoppable,
    )
    .unwrap();
    assert_eq!(desc.raw(), &[0xAA, 0x11, 0x22, 0x33]);
}

#[test]
fn from_canonical_rejects_unsupported() {
    assert!(matches!(
        ImageDescriptor::from_canonical(
            vec![0u8; 2],
            1,
            1,
            SampleFormat::new(2, 8, ChannelOrder::Rgb),
            Unstoppable
        ),
        Err(IsbError::UnsupportedChannelCount { channels: 2 })
    ));
    assert!(matches!(
        ImageDescriptor::from_canonical(vec![0u8; 5], 1, 1, SampleFormat::BGR8, Unstoppable),
        Err(IsbError::SizeMismatch {
            expected: 3,
            actual: 5
        })
    ));
}

#[test]
fn into_owned_works() {
    let encoded = encode(&bgr_2x1());
    let decoded = decode(&encoded).unwrap();
    assert!(decoded.is_borrowed());
    let owned = decoded.into_owned();
    drop(encoded);
    assert!(!owned.is_borrowed());
    assert_eq!(owned.raw(), &[0x10, 0x20, 0x30, 0x40, 0x50, 0x60]);
}

#[derive(Default)]
struct RecordingSink {
    received: Vec<(Vec<u8>, u32, u32, Channels)>,
}

impl RasterSink for RecordingSink {
    type Handle = usize;
    type Error = core::convert::Infallible;

    fn accept(
        &mut self,
        pixels: Vec<u8>,
        width: u32,
        height: u32,
        channels: Channels,
    ) -> Result<usize, Self::Error> {
        self.received.push((pixels, width, height, channels));
        Ok(self.received.len() - 1)
    }
}

#[test]
fn hand_off_transfers_canonical_triple() {
    let encoded = encode(&bgr_2x1());
    let normalized = normalize(decode(&encoded).unwrap(), Unstoppable).unwrap();
    let mut sink = RecordingSink::default();
    let handle = normalized.hand_off(&mut sink).unwrap();
    assert_eq!(handle, 0);
    let (pixels, w, h, channels) = &sink.received[0];
    assert_eq!(pixels, &[0x30, 0x20, 0x10, 0x60, 0x50, 0x40]);
    assert_eq!((*w, *h, *channels), (2, 1, Channels::Rgb));
}

#[test]
fn limits_reject_large() {
    let encoded = encode(&bgr_2x1());
    let limits = Limits {
        max_pixels: Some(1),
        ..Default::default()
    };
    match DecodeRequest::new(&encoded).with_limits(&limits).decode() {
        Err(IsbError::LimitExceeded(_)) => {}
        other => panic!("expected LimitExceeded, got {other:?}"),
    }
}

#[cfg(feature = "rgb")]
#[test]
fn typed_pixel_view() {
    let encoded = encode(&bgr_2x1());
    let normalized = normalize(decode(&encoded).unwrap(), Unstoppable).unwrap();
    let px: &[rgb::RGB8] = normalized.as_pixels().unwrap();
    assert_eq!(px[0], rgb::RGB8::new(0x30, 0x20, 0x10));
    assert!(matches!(
        normalized.as_pixels::<rgb::RGBA8>(),
        Err(IsbError::LayoutMismatch { .. })
    ));
}

#[cfg(feature = "imgref")]
#[test]
fn imgref_view() {
    let encoded = encode(&bgr_2x1());
    let normalized = normalize(decode(&encoded).unwrap(), Unstoppable).unwrap();
    let img = normalized.as_imgref::<rgb::RGB8>().unwrap();
    assert_eq!(img.width(), 2);
    assert_eq!(img.height(), 1);
    let owned = normalized.to_imgvec::<rgb::RGB8>().unwrap();
    assert_eq!(owned.buf()[1], rgb::RGB8::new(0x60, 0x50, 0x40));
}
