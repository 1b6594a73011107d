use std::io::Cursor;

use super::*;

fn png(w: u32, h: u32) -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(w, h, image::Rgba([10, 20, 30, 255]));
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

#[test]
fn prepare_rejects_missing_root() {
    let err = AssetStore::prepare("target/asset_store_unit/missing").unwrap_err();
    assert!(matches!(err, ShalomError::Validation(_)));
}

#[test]
fn prepare_skips_missing_and_broken_images() {
    let dir = PathBuf::from("target").join("asset_store_unit").join("partial");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("shalom-logo.png"), png(4, 3)).unwrap();
    std::fs::write(dir.join("flores.jpg"), b"not a jpeg").unwrap();

    let store = AssetStore::prepare(&dir).unwrap();
    let logo = store.image(StaticAsset::Logo).unwrap();
    assert_eq!((logo.width, logo.height), (4, 3));
    assert!(store.image(StaticAsset::Roses).is_none());
    assert!(store.fonts().is_empty());
    assert_eq!(store.root(), Some(dir.as_path()));
}

#[test]
fn with_font_registers_families_and_rejects_garbage() {
    assert!(AssetStore::empty().with_font("junk.ttf", b"not a font".to_vec()).is_err());

    let Some(bytes) = [
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
    ]
    .iter()
    .find_map(|p| std::fs::read(p).ok()) else {
        return;
    };
    let store = AssetStore::empty().with_font("DejaVuSans.ttf", bytes).unwrap();
    assert!(!store.fonts().is_empty());
    assert!(store.fonts().resolve("Dancing Script").is_some());
}

#[test]
fn with_image_replaces_entry() {
    let store = AssetStore::empty()
        .with_image(StaticAsset::Roses, &png(2, 2))
        .unwrap();
    assert_eq!(store.image(StaticAsset::Roses).map(|i| i.width), Some(2));
    assert!(AssetStore::empty().with_image(StaticAsset::Logo, b"x").is_err());
}
