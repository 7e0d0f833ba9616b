use super::*;

fn rasterizer() -> LabelRasterizer {
    LabelRasterizer::new(Arc::new(usvg::fontdb::Database::new()))
}

#[test]
fn box_grows_with_text_length_and_size() {
    let (w1, h1) = label_box("0", 28.0);
    let (w2, h2) = label_box("number of people", 28.0);
    assert!(w2 > w1);
    assert_eq!(h1, h2);
    let (_, h3) = label_box("0", 56.0);
    assert!(h3 > h1);
}

#[test]
fn svg_escapes_text_and_carries_color() {
    let svg = label_svg("5'9\"", 20.0, Rgba8::opaque(0xaf, 0xcb, 0xcf), 40, 32);
    assert!(svg.contains("5&apos;9&quot;"));
    assert!(svg.contains("fill=\"#afcbcf\""));
    assert!(svg.contains("text-anchor=\"middle\""));
}

#[test]
fn repeated_labels_hit_the_cache() {
    let mut r = rasterizer();
    let a = r.rasterize("x=2", 24.0, Rgba8::WHITE).unwrap();
    let b = r.rasterize("x=2", 24.0, Rgba8::WHITE).unwrap();
    assert_eq!((a.width, a.height), (b.width, b.height));
    assert_eq!(r.cached(), 1);
    r.rasterize("x=2", 30.0, Rgba8::WHITE).unwrap();
    assert_eq!(r.cached(), 2);
}
