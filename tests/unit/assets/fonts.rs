use super::*;

/// A TrueType font commonly present on Linux hosts; tests needing real glyphs skip without one.
fn system_font() -> Option<Vec<u8>> {
    [
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    ]
    .iter()
    .find_map(|p| std::fs::read(p).ok())
}

#[test]
fn empty_library_resolves_nothing() {
    let lib = FontLibrary::empty();
    assert!(lib.is_empty());
    assert_eq!(lib.fallback_family(), None);
    assert_eq!(lib.resolve("Dancing Script"), None);
}

#[test]
fn missing_directory_gives_empty_library() {
    let lib = FontLibrary::load_dir(Path::new("target/does-not-exist/fonts"));
    assert!(lib.is_empty());
}

#[test]
fn register_rejects_non_font_bytes() {
    let mut lib = FontLibrary::empty();
    assert!(lib.register("junk", b"definitely not a font".to_vec()).is_err());
    assert!(lib.is_empty());
}

#[test]
fn unknown_family_falls_back_to_first_loaded() {
    let Some(bytes) = system_font() else {
        return;
    };
    let mut lib = FontLibrary::empty();
    let names = lib.register("system", bytes).unwrap();
    assert!(!names.is_empty());

    let exact = lib.resolve(&names[0].to_ascii_uppercase()).unwrap();
    assert_eq!(exact.name, names[0]);
    assert!(!exact.substituted);

    let fallback = lib.resolve("Dancing Script").unwrap();
    assert_eq!(fallback.name, names[0]);
    assert!(fallback.substituted);
}

#[test]
fn layout_breaks_lines_at_width() {
    let Some(bytes) = system_font() else {
        return;
    };
    let mut lib = FontLibrary::empty();
    let family = lib.register("system", bytes).unwrap().remove(0);
    let mut engine = TextLayoutEngine::new(&lib);
    let style = TextStyle::new(&family, 20.0, crate::foundation::color::Color::BLACK);

    let one = engine.layout("hola mundo", &family, &style, None).unwrap();
    assert_eq!(one.lines().count(), 1);

    let wrapped = engine
        .layout("hola mundo hola mundo hola mundo", &family, &style, Some(60.0))
        .unwrap();
    assert!(wrapped.lines().count() > 1);
}

#[test]
fn layout_rejects_bad_size() {
    let mut engine = TextLayoutEngine::new(&FontLibrary::empty());
    let style = TextStyle::new("x", 0.0, crate::foundation::color::Color::BLACK);
    assert!(engine.layout("a", "x", &style, None).is_err());
}
