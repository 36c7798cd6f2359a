use super::*;
use crate::foundation::core::{Canvas, Rgba8, Vec2};
use crate::render::scene::{polyline, rect};

fn backend() -> CpuBackend {
    CpuBackend::new(RenderSettings::default())
}

fn scene(bg: Rgba8) -> Scene {
    Scene::new(Canvas::new(64, 48).unwrap(), bg)
}

#[test]
fn background_fills_every_pixel() {
    let frame = backend().render_scene(&scene(Rgba8::gray(181))).unwrap();
    assert_eq!((frame.width, frame.height), (64, 48));
    assert_eq!(frame.data.len(), 64 * 48 * 4);
    assert_eq!(frame.pixel(0, 0), Some([181, 181, 181, 255]));
    assert_eq!(frame.pixel(63, 47), Some([181, 181, 181, 255]));
    assert_eq!(frame.pixel(64, 0), None);
}

#[test]
fn fills_land_inside_their_path() {
    let mut s = scene(Rgba8::BLACK);
    s.ops.push(DrawOp::Fill {
        path: rect(16.0, 12.0, 32.0, 24.0),
        color: Rgba8::rgb(255, 0, 0),
    });
    let frame = backend().render_scene(&s).unwrap();
    assert_eq!(frame.pixel(32, 24), Some([255, 0, 0, 255]));
    assert_eq!(frame.pixel(2, 2), Some([0, 0, 0, 255]));
}

#[test]
fn strokes_paint_along_the_line() {
    let mut s = scene(Rgba8::BLACK);
    s.ops.push(DrawOp::Stroke {
        path: polyline(&[Vec2::new(0.0, 10.0), Vec2::new(64.0, 10.0)], false),
        color: Rgba8::WHITE,
        width: 4.0,
        round: true,
    });
    let frame = backend().render_scene(&s).unwrap();
    assert_eq!(frame.pixel(32, 10), Some([255, 255, 255, 255]));
    assert_eq!(frame.pixel(32, 30), Some([0, 0, 0, 255]));
}

#[test]
fn clear_setting_overrides_the_background() {
    let mut b = CpuBackend::new(RenderSettings {
        clear_rgba: Some([10, 20, 30, 255]),
    });
    let frame = b.render_scene(&scene(Rgba8::WHITE)).unwrap();
    assert_eq!(frame.pixel(5, 5), Some([10, 20, 30, 255]));
}

#[test]
fn surface_is_rebuilt_for_a_new_size() {
    let mut b = backend();
    b.render_scene(&scene(Rgba8::WHITE)).unwrap();
    let small = Scene::new(Canvas::new(8, 8).unwrap(), Rgba8::BLACK);
    let frame = b.render_scene(&small).unwrap();
    assert_eq!(frame.data.len(), 8 * 8 * 4);
    assert_eq!(frame.pixel(7, 7), Some([0, 0, 0, 255]));
}

#[test]
fn oversized_canvas_is_a_render_error() {
    let huge = Scene::new(Canvas::new(70_000, 4).unwrap(), Rgba8::BLACK);
    let err = backend().render_scene(&huge).unwrap_err();
    assert!(matches!(err, NeuronalError::Render(_)));
}
