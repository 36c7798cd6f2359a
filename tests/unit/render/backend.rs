use super::*;
use crate::foundation::core::{Canvas, Rgba8};

#[test]
fn straight_alpha_is_recovered() {
    let frame = FrameRGBA {
        width: 2,
        height: 1,
        data: vec![64, 32, 0, 128, 9, 9, 9, 255],
        premultiplied: true,
    };
    assert_eq!(frame.to_straight(), vec![128, 64, 0, 128, 9, 9, 9, 255]);
    assert_eq!(frame.pixel(1, 0), Some([9, 9, 9, 255]));
    assert_eq!(frame.pixel(0, 1), None);
}

#[test]
fn straight_frames_pass_through() {
    let frame = FrameRGBA {
        width: 1,
        height: 1,
        data: vec![200, 0, 0, 10],
        premultiplied: false,
    };
    assert_eq!(frame.to_straight(), frame.data);
}

#[test]
fn cpu_backend_is_available() {
    let mut backend = create_backend(BackendKind::Cpu, &RenderSettings::default()).unwrap();
    let scene = Scene::new(Canvas::new(4, 4).unwrap(), Rgba8::gray(9));
    let frame = backend.render_scene(&scene).unwrap();
    assert_eq!(frame.pixel(3, 3), Some([9, 9, 9, 255]));
}
