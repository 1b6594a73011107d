use super::*;

#[test]
fn every_icon_parses() {
    for glyph in [IconGlyph::Camera, IconGlyph::Location, IconGlyph::Move] {
        let svg = icon_svg(glyph, Color::rgb(0x12, 0x34, 0x56));
        assert!(svg.contains("#123456"));
        parse_svg(svg.as_bytes()).unwrap();
    }
}

#[test]
fn raster_params_follow_transform_scale() {
    let tree = parse_svg(icon_svg(IconGlyph::Camera, Color::BLACK).as_bytes()).unwrap();
    let (w, h, adjust) = svg_raster_params(&tree, Affine::scale(3.0)).unwrap();
    assert_eq!((w, h), (72, 72));
    let p = adjust * kurbo::Point::new(72.0, 72.0);
    assert!((p.x - 72.0).abs() < 1e-9 && (p.y - 72.0).abs() < 1e-9);
}

#[test]
fn raster_params_reject_huge_output() {
    let tree = parse_svg(icon_svg(IconGlyph::Move, Color::BLACK).as_bytes()).unwrap();
    assert!(svg_raster_params(&tree, Affine::scale(1_000.0)).is_err());
}

#[test]
fn rasterized_icon_has_ink() {
    let (img, _) = rasterize_icon(IconGlyph::Move, Color::WHITE, Affine::scale(2.0)).unwrap();
    assert_eq!((img.width, img.height), (48, 48));
    assert!(img.rgba8_premul.chunks_exact(4).any(|px| px[3] > 0));
}
