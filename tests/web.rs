#![cfg(target_arch = "wasm32")]

use portfolio_wasm::state::{Theme, THEME_KEY};
use portfolio_wasm::trail;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn theme_flag_round_trips_through_storage() {
    let storage = web_sys::window()
        .unwrap()
        .local_storage()
        .unwrap()
        .expect("localStorage unavailable");

    for theme in [Theme::Dark, Theme::Light] {
        storage.set_item(THEME_KEY, theme.as_str()).unwrap();
        let read_back = storage.get_item(THEME_KEY).unwrap();
        assert_eq!(Theme::from_stored(read_back.as_deref()), theme);
    }
    storage.remove_item(THEME_KEY).unwrap();
}

#[wasm_bindgen_test]
fn canvas_accepts_trail_strokes() {
    let document = web_sys::window().unwrap().document().unwrap();
    let canvas: web_sys::HtmlCanvasElement = document
        .create_element("canvas")
        .unwrap()
        .dyn_into()
        .unwrap();
    canvas.set_width(64);
    canvas.set_height(64);

    let ctx: web_sys::CanvasRenderingContext2d = canvas
        .get_context("2d")
        .unwrap()
        .expect("2d context unavailable")
        .dyn_into()
        .unwrap();

    // One trail segment the way the renderer draws it.
    let gradient = ctx.create_linear_gradient(0.0, 0.0, 32.0, 32.0);
    gradient
        .add_color_stop(0.0, &trail::neon_hsl(trail::strand_hue(10.0, 0, 0.0)))
        .unwrap();
    gradient
        .add_color_stop(1.0, &trail::neon_hsl(trail::strand_hue(10.0, 0, 0.5)))
        .unwrap();
    ctx.set_stroke_style_canvas_gradient(&gradient);
    ctx.set_line_width(trail::strand_width(0, 1.0));
    ctx.set_line_cap("round");
    ctx.begin_path();
    ctx.move_to(0.0, 0.0);
    ctx.line_to(32.0, 32.0);
    ctx.stroke();

    // And one idle-ring segment.
    let ((x1, y1), (x2, y2)) = trail::ring_segment(32.0, 32.0, 0, 45.0);
    ctx.set_stroke_style_str(&trail::neon_hsl(trail::ring_hue(0, 45.0)));
    ctx.begin_path();
    ctx.move_to(x1, y1);
    ctx.line_to(x2, y2);
    ctx.stroke();

    // The strokes actually landed on the surface.
    let data = ctx.get_image_data(0.0, 0.0, 64.0, 64.0).unwrap().data();
    let painted = data.iter().skip(3).step_by(4).any(|&alpha| alpha > 0);
    assert!(painted, "expected at least one non-transparent pixel");
}
