//! Cursor trail renderer: tracks the pointer, glides a follower element after
//! it, and draws either the multi-strand neon trail or the idle ring onto the
//! full-window canvas once per animation frame.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    window, CanvasRenderingContext2d, Document, Element, EventTarget, HtmlCanvasElement,
    HtmlElement, MouseEvent,
};

use crate::trail::{self, CursorGlide, RenderMode, Trail};

pub fn start(document: &Document) -> Result<(), JsValue> {
    let Some(canvas) = document.get_element_by_id("trailCanvas") else {
        log::warn!("#trailCanvas not found; trail disabled");
        return Ok(());
    };
    let canvas: HtmlCanvasElement = canvas.dyn_into()?;
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or("2d context unavailable")?
        .dyn_into()?;

    // Size canvas to the window now and on every resize.
    fit_canvas(&canvas);
    let resize_closure = {
        let canvas = canvas.clone();
        Closure::wrap(Box::new(move || fit_canvas(&canvas)) as Box<dyn FnMut()>)
    };
    window()
        .ok_or("no window")?
        .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref())?;
    resize_closure.forget();

    // Raw pointer position, shared between the mousemove listener and the
    // frame loop.
    let pointer = Rc::new(RefCell::new((0.0_f64, 0.0_f64)));
    {
        let pointer = pointer.clone();
        let mv = Closure::wrap(Box::new(move |e: MouseEvent| {
            *pointer.borrow_mut() = (e.client_x() as f64, e.client_y() as f64);
        }) as Box<dyn FnMut(MouseEvent)>);
        document.add_event_listener_with_callback("mousemove", mv.as_ref().unchecked_ref())?;
        mv.forget();
    }

    let follower = document
        .query_selector(".cursor-follower")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());
    if let Some(follower) = follower.clone() {
        wire_hover(document, follower)?;
    }

    // Animation loop
    // `f` holds the animation-frame closure so that we can keep calling
    // `request_animation_frame` recursively. Storing it inside an `Option`
    // allows us to create the `Closure` first and then obtain a reference to
    // it from within itself.
    let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();
    let mut glide = CursorGlide::new();
    let mut state = Trail::new();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let (tx, ty) = *pointer.borrow();
        glide.set_target(tx, ty);
        let velocity = glide.step();
        let (cx, cy) = glide.pos();

        if let Some(el) = &follower {
            let style = el.style();
            let _ = style.set_property("left", &format!("{cx}px"));
            let _ = style.set_property("top", &format!("{cy}px"));
        }

        let now = js_sys::Date::now();
        if velocity > trail::MOVE_EPSILON {
            state.record(cx, cy, now);
        }
        state.purge(now);
        state.advance();

        ctx.clear_rect(0.0, 0.0, canvas.width() as f64, canvas.height() as f64);
        match trail::render_mode(trail::is_idle(velocity), state.len()) {
            Some(RenderMode::FluidTrail) => draw_fluid_trail(&ctx, &state, now),
            Some(RenderMode::IdleRing) => draw_idle_ring(&ctx, cx, cy, state.idle_spin()),
            None => {}
        }

        // schedule next
        if let (Some(win), Some(cb)) = (window(), f.borrow().as_ref()) {
            let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));

    window()
        .ok_or("no window")?
        .request_animation_frame(
            g.borrow()
                .as_ref()
                .ok_or("no frame closure")?
                .as_ref()
                .unchecked_ref(),
        )?;

    Ok(())
}

fn fit_canvas(canvas: &HtmlCanvasElement) {
    let Some(win) = window() else {
        return;
    };
    let w = win.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let h = win.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    canvas.set_width(w as u32);
    canvas.set_height(h as u32);
}

/// Five braided strands; each pair of adjacent points becomes one gradient
/// segment with an age-based fade and glow.
fn draw_fluid_trail(ctx: &CanvasRenderingContext2d, state: &Trail, now: f64) {
    let points = state.points();
    if points.len() < 2 {
        return;
    }

    ctx.set_line_cap("round");
    ctx.set_line_join("round");

    for strand in 0..trail::STRAND_COUNT {
        for i in 0..points.len() - 1 {
            let point = &points[i];
            let next = &points[i + 1];
            let alpha = trail::point_alpha(now - point.created_at);
            let next_alpha = trail::point_alpha(now - next.created_at);
            let mean_alpha = (alpha + next_alpha) / 2.0;

            let (ox, oy) = trail::strand_offset(strand, i);
            let (nox, noy) = trail::strand_offset(strand, i + 1);
            let (x1, y1) = (point.x + ox, point.y + oy);
            let (x2, y2) = (next.x + nox, next.y + noy);

            let progress = i as f64 / points.len() as f64;
            let hue = trail::strand_hue(point.hue, strand, progress);
            let next_hue = trail::strand_hue(next.hue, strand, progress);

            let gradient = ctx.create_linear_gradient(x1, y1, x2, y2);
            let _ = gradient.add_color_stop(0.0, &trail::neon_hsl(hue));
            let _ = gradient.add_color_stop(1.0, &trail::neon_hsl(next_hue));

            ctx.set_stroke_style_canvas_gradient(&gradient);
            ctx.set_line_width(trail::strand_width(strand, alpha));
            ctx.set_global_alpha(mean_alpha * 0.8);
            ctx.set_shadow_color(&trail::neon_hsl((hue + next_hue) / 2.0));
            ctx.set_shadow_blur(20.0 * mean_alpha);

            ctx.begin_path();
            ctx.move_to(x1, y1);
            ctx.line_to(x2, y2);
            ctx.stroke();
        }
    }

    ctx.set_global_alpha(1.0);
    ctx.set_shadow_blur(0.0);
}

/// Spinning rainbow ring centered on the smoothed cursor.
fn draw_idle_ring(ctx: &CanvasRenderingContext2d, cx: f64, cy: f64, spin: f64) {
    ctx.set_line_width(2.0);
    ctx.set_line_cap("round");
    ctx.set_line_join("round");
    ctx.set_global_alpha(0.85);

    for i in 0..trail::RING_SEGMENTS {
        let ((x1, y1), (x2, y2)) = trail::ring_segment(cx, cy, i, spin);
        let color = trail::neon_hsl(trail::ring_hue(i, spin));

        ctx.set_stroke_style_str(&color);
        ctx.set_shadow_color(&color);
        ctx.set_shadow_blur(10.0);

        ctx.begin_path();
        ctx.move_to(x1, y1);
        ctx.line_to(x2, y2);
        ctx.stroke();
    }

    ctx.set_global_alpha(1.0);
    ctx.set_shadow_blur(0.0);
}

/// Grow the follower over links, buttons, and icon buttons; shrink it back on
/// the way out.
fn wire_hover(document: &Document, follower: HtmlElement) -> Result<(), JsValue> {
    let over = {
        let follower = follower.clone();
        Closure::wrap(Box::new(move |e: MouseEvent| {
            if is_interactive(e.target().as_ref()) {
                style_follower(
                    &follower,
                    "36px",
                    "var(--accent-hover)",
                    "0 0 20px rgba(99, 102, 241, 0.6), inset 0 0 12px rgba(99, 102, 241, 0.3)",
                );
            }
        }) as Box<dyn FnMut(MouseEvent)>)
    };
    document.add_event_listener_with_callback("mouseover", over.as_ref().unchecked_ref())?;
    over.forget();

    let out = Closure::wrap(Box::new(move |e: MouseEvent| {
        if is_interactive(e.target().as_ref()) {
            style_follower(
                &follower,
                "24px",
                "var(--accent)",
                "0 0 12px rgba(99, 102, 241, 0.4), inset 0 0 8px rgba(99, 102, 241, 0.2)",
            );
        }
    }) as Box<dyn FnMut(MouseEvent)>);
    document.add_event_listener_with_callback("mouseout", out.as_ref().unchecked_ref())?;
    out.forget();

    Ok(())
}

fn is_interactive(target: Option<&EventTarget>) -> bool {
    let Some(el) = target.and_then(|t| t.dyn_ref::<Element>()) else {
        return false;
    };
    matches!(el.tag_name().as_str(), "A" | "BUTTON") || el.class_list().contains("icon-btn")
}

fn style_follower(el: &HtmlElement, size: &str, border: &str, shadow: &str) {
    let style = el.style();
    let _ = style.set_property("width", size);
    let _ = style.set_property("height", size);
    let _ = style.set_property("border-color", border);
    let _ = style.set_property("box-shadow", shadow);
}
