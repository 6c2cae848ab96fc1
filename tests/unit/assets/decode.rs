use super::*;

fn encode(img: image::DynamicImage, format: image::ImageFormat) -> Vec<u8> {
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), format).unwrap();
    buf
}

#[test]
fn probe_reads_header_dimensions() {
    let png = encode(
        image::DynamicImage::ImageRgba8(image::RgbaImage::new(30, 20)),
        image::ImageFormat::Png,
    );
    let (format, w, h) = probe_dimensions(&png).unwrap();
    assert_eq!(format, image::ImageFormat::Png);
    assert_eq!((w, h), (30, 20));
}

#[test]
fn probe_rejects_garbage() {
    assert!(probe_dimensions(b"definitely not an image").is_err());
}

#[test]
fn jpeg_components_for_rgb_and_gray() {
    let rgb = encode(
        image::DynamicImage::ImageRgb8(image::RgbImage::new(4, 4)),
        image::ImageFormat::Jpeg,
    );
    assert_eq!(jpeg_passthrough_components(&rgb), Some(3));
    let gray = encode(
        image::DynamicImage::ImageLuma8(image::GrayImage::new(4, 4)),
        image::ImageFormat::Jpeg,
    );
    assert_eq!(jpeg_passthrough_components(&gray), Some(1));
    assert_eq!(jpeg_passthrough_components(b"nope"), None);
}

#[test]
fn decode_and_alpha_detection() {
    let mut img = image::RgbaImage::from_pixel(2, 1, image::Rgba([10, 20, 30, 255]));
    let opaque = decode_rgba8(&encode(
        image::DynamicImage::ImageRgba8(img.clone()),
        image::ImageFormat::Png,
    ))
    .unwrap();
    assert!(!opaque.has_alpha());

    img.put_pixel(1, 0, image::Rgba([10, 20, 30, 128]));
    let translucent =
        decode_rgba8(&encode(image::DynamicImage::ImageRgba8(img), image::ImageFormat::Png))
            .unwrap();
    assert!(translucent.has_alpha());
    assert_eq!(translucent.rgba8.len(), 8);
}
