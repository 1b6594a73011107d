use std::io::Cursor;

use base64::Engine as _;

use super::*;

fn tiny_png() -> Vec<u8> {
    let img = image::RgbaImage::from_raw(2, 1, vec![255, 0, 0, 255, 0, 0, 255, 255]).unwrap();
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

#[test]
fn sniffs_png_mime() {
    let photo = Photo::from_bytes(tiny_png()).unwrap();
    assert_eq!(photo.mime(), "image/png");
}

#[test]
fn rejects_non_image_bytes() {
    assert!(Photo::from_bytes(b"definitely not an image".to_vec()).is_err());
}

#[test]
fn rejects_valid_signature_with_corrupt_body() {
    let mut bytes = b"\x89PNG\r\n\x1a\n".to_vec();
    bytes.extend_from_slice(b"garbage after a valid signature");
    let err = Photo::from_bytes(bytes).unwrap_err();
    assert!(matches!(err, ShalomError::Validation(_)), "{err}");

    let mut truncated = tiny_png();
    truncated.truncate(truncated.len() / 2);
    assert!(Photo::from_bytes(truncated).is_err());
}

#[test]
fn keeps_decoded_pixels() {
    let photo = Photo::from_bytes(tiny_png()).unwrap();
    assert_eq!((photo.image().width, photo.image().height), (2, 1));
    assert_eq!(&photo.image().rgba8_premul[..4], &[255, 0, 0, 255]);
}

#[test]
fn data_url_with_corrupt_payload_is_rejected() {
    let mut bytes = b"\x89PNG\r\n\x1a\n".to_vec();
    bytes.extend_from_slice(&[0u8; 24]);
    let url = format!(
        "data:image/png;base64,{}",
        base64::engine::general_purpose::STANDARD.encode(&bytes)
    );
    assert!(Photo::from_data_url(&url).is_err());
}

#[test]
fn data_url_survives_json() {
    let photo = Photo::from_bytes(tiny_png()).unwrap();
    let url = photo.to_data_url();
    assert!(url.starts_with("data:image/png;base64,"));

    let json = serde_json::to_string(&photo).unwrap();
    let back: Photo = serde_json::from_str(&json).unwrap();
    assert_eq!(back, photo);
}

#[test]
fn data_url_requires_base64_marker() {
    assert!(Photo::from_data_url("data:image/png,abc").is_err());
    assert!(Photo::from_data_url("image/png;base64,abc").is_err());
}
