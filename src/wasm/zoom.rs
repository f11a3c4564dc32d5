//! Decorative zoom object: a toggle that pauses/resumes its CSS animation,
//! and a click-through that restyles the object and redirects shortly after.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Document, HtmlElement};

use super::dom;
use crate::state::ZoomState;

const REDIRECT_URL: &str = "registration-site/index.html";
const REDIRECT_DELAY_MS: i32 = 300;

pub fn init(document: &Document) -> Result<(), JsValue> {
    let Some(object) = dom::query(document, ".zoom-object") else {
        return Ok(());
    };

    if let Some(btn) = dom::query(document, ".zoom-toggle") {
        let state = Rc::new(RefCell::new(ZoomState::default()));
        let object = object.clone();
        let btn_in_click = btn.clone();
        let click = Closure::wrap(Box::new(move || {
            let mut state = state.borrow_mut();
            state.toggle();
            apply_toggle(&object, &btn_in_click, &state);
        }) as Box<dyn FnMut()>);
        btn.add_event_listener_with_callback("click", click.as_ref().unchecked_ref())?;
        click.forget();
    }

    {
        let object_in_click = object.clone();
        let click = Closure::wrap(Box::new(move || {
            redirect(&object_in_click);
        }) as Box<dyn FnMut()>);
        object.add_event_listener_with_callback("click", click.as_ref().unchecked_ref())?;
        click.forget();
    }

    Ok(())
}

fn apply_toggle(object: &HtmlElement, btn: &HtmlElement, state: &ZoomState) {
    let _ = object
        .style()
        .set_property("animation-play-state", state.play_state());
    btn.set_text_content(Some(state.glyph()));
    let classes = btn.class_list();
    let _ = if state.animating {
        classes.remove_1("paused")
    } else {
        classes.add_1("paused")
    };
}

/// Settle the object into its confirmation styling, then navigate.
fn redirect(object: &HtmlElement) {
    let style = object.style();
    let _ = style.set_property("animation", "none");
    let _ = style.set_property("background", "linear-gradient(135deg, #10b981, #06b6d4)");
    let _ = style.set_property("box-shadow", "0 0 40px rgba(16, 185, 129, 0.8)");

    dom::after_delay(REDIRECT_DELAY_MS, || {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(REDIRECT_URL);
        }
    });
}
