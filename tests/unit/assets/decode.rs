use std::io::Cursor;

use super::*;

fn encode(img: image::DynamicImage, format: image::ImageFormat) -> Vec<u8> {
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), format).unwrap();
    buf
}

#[test]
fn translucent_logo_is_premultiplied() {
    let logo = image::RgbaImage::from_raw(2, 1, vec![100, 50, 200, 128, 9, 9, 9, 0]).unwrap();
    let prepared = decode_image(&encode(
        image::DynamicImage::ImageRgba8(logo),
        image::ImageFormat::Png,
    ))
    .unwrap();

    assert_eq!((prepared.width, prepared.height), (2, 1));
    assert_eq!(&prepared.rgba8_premul[..4], &[50, 25, 100, 128]);
    assert_eq!(&prepared.rgba8_premul[4..], &[0, 0, 0, 0]);
}

#[test]
fn jpeg_photo_decodes_fully_opaque() {
    let photo = image::RgbImage::from_pixel(6, 4, image::Rgb([30, 140, 220]));
    let prepared = decode_image(&encode(
        image::DynamicImage::ImageRgb8(photo),
        image::ImageFormat::Jpeg,
    ))
    .unwrap();

    assert_eq!((prepared.width, prepared.height), (6, 4));
    assert_eq!(prepared.rgba8_premul.len(), 6 * 4 * 4);
    assert!(prepared.rgba8_premul.chunks_exact(4).all(|px| px[3] == 255));
}

#[test]
fn signature_alone_does_not_make_an_image() {
    let mut upload = b"\x89PNG\r\n\x1a\n".to_vec();
    upload.extend_from_slice(b"garbage after a valid signature");
    assert!(decode_image(&upload).is_err());

    let mut truncated = encode(
        image::DynamicImage::ImageRgba8(image::RgbaImage::new(8, 8)),
        image::ImageFormat::Png,
    );
    truncated.truncate(20);
    assert!(decode_image(&truncated).is_err());
    assert!(decode_image(b"not an image").is_err());
}

#[test]
fn icon_svg_parses_and_broken_markup_fails() {
    let ok = br#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><circle cx="12" cy="12" r="4"/></svg>"#;
    let tree = parse_svg(ok).unwrap();
    assert_eq!(tree.size().width(), 24.0);

    assert!(parse_svg(br#"<svg"#).is_err());
}
