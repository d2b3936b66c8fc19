
use softraster::{PixelData, Pixfmt, Renderer, Rgba, Rgba8, Scene, SceneNode, Shape, Source, Style};

fn full_canvas_rect(color: Rgba, size: f64) -> Scene {
    let mut scene = Scene::new(size, size);
    scene.elements.push(SceneNode::with_style(
        Shape::Rect { position: (0.0, 0.0), dimension: (size, size) },
        Style::filled(color),
    ));
    scene
}

#[test]
fn t01_full_canvas_rect_rate_1() {
    let mut ren = Renderer::new();
    ren.set_target(Pixfmt::new(10, 10));

    let scene = full_canvas_rect(Rgba::new(1.0, 0.0, 0.0, 1.0), 10.0);
    ren.render(&scene).unwrap();

    let target = ren.target().unwrap();
    for y in 0 .. 10 {
        for x in 0 .. 10 {
            assert_eq!(target.get((x, y)), Rgba8::new(255, 0, 0, 255),
                       "pixel ({},{})", x, y);
        }
    }
}

#[test]
fn t01_full_canvas_rect_rate_4_resolves_identically() {
    let scene = full_canvas_rect(Rgba::new(1.0, 0.0, 0.0, 1.0), 10.0);

    let mut ren = Renderer::new();
    ren.set_target(Pixfmt::new(10, 10));
    ren.set_sample_rate(4);
    ren.render(&scene).unwrap();

    let target = ren.target().unwrap();
    for y in 0 .. 10 {
        for x in 0 .. 10 {
            assert_eq!(target.get((x, y)), Rgba8::new(255, 0, 0, 255),
                       "pixel ({},{})", x, y);
        }
    }
}

#[test]
fn t01_uniform_color_survives_the_box_filter() {
    // box filtering a constant returns that constant, modulo <= 1 of
    // integer truncation per channel
    let color = Rgba::new(0.3, 0.6, 0.9, 0.5);
    let scene = full_canvas_rect(color, 8.0);

    let mut direct = Renderer::new();
    direct.set_target(Pixfmt::new(8, 8));
    direct.render(&scene).unwrap();

    let mut sampled = Renderer::new();
    sampled.set_target(Pixfmt::new(8, 8));
    sampled.set_sample_rate(3);
    sampled.render(&scene).unwrap();

    let a = direct.target().unwrap();
    let b = sampled.target().unwrap();
    for y in 0 .. 8 {
        for x in 0 .. 8 {
            let ca = a.get((x, y));
            let cb = b.get((x, y));
            assert!(ca.r as i32 - cb.r as i32 <= 1 && cb.r <= ca.r);
            assert!(ca.g as i32 - cb.g as i32 <= 1 && cb.g <= ca.g);
            assert!(ca.b as i32 - cb.b as i32 <= 1 && cb.b <= ca.b);
            assert!(ca.a as i32 - cb.a as i32 <= 1 && cb.a <= ca.a);
        }
    }
}

#[test]
fn t01_resolve_is_idempotent() {
    let scene = full_canvas_rect(Rgba::new(0.0, 1.0, 0.0, 1.0), 6.0);

    let mut ren = Renderer::new();
    ren.set_target(Pixfmt::new(6, 6));
    ren.set_sample_rate(2);
    ren.render(&scene).unwrap();

    let before: Vec<u8> = ren.pixeldata().to_vec();
    // no oversized buffer remains after render; these must not disturb
    // the resolved image
    ren.resolve();
    ren.resolve();
    assert_eq!(ren.pixeldata(), &before[..]);
}

#[test]
fn t01_default_renderer_matches_new() {
    // Default must agree with new(): sample rate 1, not 0
    let mut ren = Renderer::default();
    assert_eq!(ren.sample_rate(), 1);
    ren.set_target(Pixfmt::new(10, 10));

    let mut scene = Scene::new(10.0, 10.0);
    scene.elements.push(SceneNode::with_style(
        Shape::Line { from: (2.0, 5.0), to: (7.0, 5.0) },
        Style::stroked(Rgba::white()),
    ));
    ren.render(&scene).unwrap();
    assert_eq!(ren.target().unwrap().get((4, 5)), Rgba8::white());
}

#[test]
fn t01_render_without_a_target_fails() {
    let scene = full_canvas_rect(Rgba::black(), 4.0);
    let mut ren = Renderer::new();
    assert_eq!(ren.render(&scene), Err(softraster::Error::NoTarget));
}

#[test]
fn t01_write_and_read_back() {
    let scene = full_canvas_rect(Rgba::new(1.0, 0.0, 0.0, 1.0), 10.0);
    let mut ren = Renderer::new();
    ren.set_target(Pixfmt::new(10, 10));
    ren.render(&scene).unwrap();

    let path = std::env::temp_dir().join("softraster_t01_red.png");
    softraster::ppm::write_file(ren.pixeldata(), 10, 10, &path).unwrap();
    let (data, w, h) = softraster::ppm::read_file(&path).unwrap();
    assert_eq!((w, h), (10, 10));
    assert_eq!(&data[..], ren.pixeldata());
    assert!(softraster::ppm::img_diff(&path, &path).unwrap());
    let _ = std::fs::remove_file(&path);
}
