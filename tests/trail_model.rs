#![cfg(target_arch = "wasm32")]

use portfolio_wasm::trail::*;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn buffer_stays_capped_against_browser_clock() {
    let mut trail = Trail::new();
    let now = js_sys::Date::now();
    for i in 0..200 {
        trail.record(i as f64, 0.0, now + i as f64);
        assert!(trail.len() <= MAX_TRAIL_POINTS);
    }
    assert_eq!(trail.len(), MAX_TRAIL_POINTS);
}

#[wasm_bindgen_test]
fn expired_points_are_purged() {
    let mut trail = Trail::new();
    let now = js_sys::Date::now();
    trail.record(0.0, 0.0, now - TRAIL_LIFESPAN_MS - 1.0);
    trail.record(1.0, 1.0, now);
    trail.purge(now);
    assert_eq!(trail.len(), 1);
    assert_eq!(trail.points()[0].x, 1.0);
}

#[wasm_bindgen_test]
fn idle_switches_the_render_mode() {
    let mut glide = CursorGlide::new();
    glide.set_target(300.0, 200.0);
    let v = glide.step();
    assert_eq!(render_mode(is_idle(v), 2), Some(RenderMode::FluidTrail));

    for _ in 0..200 {
        glide.step();
    }
    let v = glide.step();
    assert!(is_idle(v));
    assert_eq!(render_mode(true, 2), Some(RenderMode::IdleRing));
}
