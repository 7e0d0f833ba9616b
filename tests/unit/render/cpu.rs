use super::*;
use crate::{
    foundation::core::{Canvas, Fps, FrameIndex, Vec2},
    scene::{
        eval::Evaluator,
        model::Camera,
        timeline::{Animation, SceneBuilder},
    },
};

fn renderer() -> CpuRenderer {
    CpuRenderer::with_fontdb(Arc::new(usvg::fontdb::Database::new()))
}

fn builder() -> SceneBuilder {
    // 16 x 9 world units onto 160 x 90 pixels: 10 px per unit, origin at bottom-left.
    SceneBuilder::new(
        Fps::new(10, 1).unwrap(),
        Canvas {
            width: 160,
            height: 90,
        },
        Camera::new(Point::new(8.0, 4.5), 16.0),
        Rgba8::opaque(10, 20, 30),
    )
}

fn render_at(scene: &Scene, frame: u64) -> FrameRGBA {
    let eval = Evaluator::eval_frame(scene, FrameIndex(frame)).unwrap();
    renderer().render(scene, &eval).unwrap()
}

#[test]
fn background_fills_the_canvas() {
    let mut b = builder();
    b.wait(0.1).unwrap();
    let scene = b.build().unwrap();
    let frame = render_at(&scene, 0);
    assert_eq!(frame.data.len(), 160 * 90 * 4);
    assert_eq!(frame.pixel(0, 0), Some([10, 20, 30, 255]));
    assert_eq!(frame.pixel(159, 89), Some([10, 20, 30, 255]));
}

#[test]
fn world_rect_lands_with_y_flipped() {
    let mut b = builder();
    b.add(Shape::rect(0.0, 0.0, 4.0, 2.0, Rgba8::WHITE));
    b.wait(0.1).unwrap();
    let scene = b.build().unwrap();
    let frame = render_at(&scene, 0);

    // World (2, 1) -> pixel (20, 80): inside. World (2, 8) -> pixel (20, 10): outside.
    assert_eq!(frame.pixel(20, 80), Some([255, 255, 255, 255]));
    assert_eq!(frame.pixel(20, 10), Some([10, 20, 30, 255]));
    assert_eq!(frame.pixel(60, 80), Some([10, 20, 30, 255]));
}

#[test]
fn fade_in_blends_with_background() {
    let mut b = builder();
    let id = b.add(Shape::rect(0.0, 0.0, 16.0, 9.0, Rgba8::WHITE));
    b.play(
        1.0,
        [Animation::fade_in(id).with_ease(crate::animation::ease::Ease::Linear)],
    )
    .unwrap();
    b.wait(0.2).unwrap();
    let scene = b.build().unwrap();

    let half = render_at(&scene, 5).pixel(80, 45).unwrap();
    assert!(half[0] > 100 && half[0] < 160, "{half:?}");
    let full = render_at(&scene, 10).pixel(80, 45).unwrap();
    assert_eq!(full, [255, 255, 255, 255]);
}

#[test]
fn shift_moves_the_shape() {
    let mut b = builder();
    let id = b.add(Shape::rect(0.0, 0.0, 2.0, 2.0, Rgba8::WHITE));
    b.play(1.0, [Animation::shift(id, Vec2::new(10.0, 0.0))])
        .unwrap();
    b.wait(0.2).unwrap();
    let scene = b.build().unwrap();

    let frame = render_at(&scene, 11);
    assert_eq!(frame.pixel(110, 80), Some([255, 255, 255, 255]));
    assert_eq!(frame.pixel(10, 80), Some([10, 20, 30, 255]));
}

#[test]
fn create_draws_a_line_progressively() {
    let mut b = builder();
    let id = b.add(Shape::line(
        Point::new(1.0, 4.5),
        Point::new(15.0, 4.5),
        StrokeStyle::new(Rgba8::WHITE, 48.0),
    ));
    b.play(
        1.0,
        [Animation::create(id).with_ease(crate::animation::ease::Ease::Linear)],
    )
    .unwrap();
    b.wait(0.2).unwrap();
    let scene = b.build().unwrap();

    let mid = render_at(&scene, 5);
    assert_eq!(mid.pixel(30, 45), Some([255, 255, 255, 255]));
    assert_eq!(mid.pixel(130, 45), Some([10, 20, 30, 255]));

    let done = render_at(&scene, 10);
    assert_eq!(done.pixel(130, 45), Some([255, 255, 255, 255]));
}

#[test]
fn trim_follows_arc_length() {
    let pts = [
        Point::new(0.0, 0.0),
        Point::new(10.0, 0.0),
        Point::new(10.0, 10.0),
    ];
    assert_eq!(
        trim_polyline(&pts, 0.75),
        vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 5.0)
        ]
    );
    assert_eq!(trim_polyline(&pts, 1.0).len(), 3);
    assert!(trim_polyline(&pts, 0.0).is_empty());
}

#[test]
fn circle_outline_is_closed() {
    let pts = circle_outline(Point::new(5.0, 5.0), 2.0);
    assert_eq!(pts.len(), CIRCLE_SEGMENTS + 1);
    assert!((pts[0] - pts[CIRCLE_SEGMENTS]).hypot() < 1e-9);
}
