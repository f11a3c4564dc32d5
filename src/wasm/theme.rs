//! Dark/light theme toggle. The body class is the source of truth at
//! runtime; localStorage carries the flag across reloads.

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Document, HtmlImageElement};

use super::dom;
use crate::state::{Theme, DARK_CLASS, THEME_KEY};

pub fn init(document: &Document) -> Result<(), JsValue> {
    apply(document, load_saved());

    if let Some(btn) = dom::element_by_id(document, "themeToggle") {
        let document = document.clone();
        let click = Closure::wrap(Box::new(move || {
            apply(&document, current(&document).toggled());
        }) as Box<dyn FnMut()>);
        btn.add_event_listener_with_callback("click", click.as_ref().unchecked_ref())?;
        click.forget();
    }

    Ok(())
}

fn current(document: &Document) -> Theme {
    match document.body() {
        Some(body) if body.class_list().contains(DARK_CLASS) => Theme::Dark,
        _ => Theme::Light,
    }
}

fn load_saved() -> Theme {
    let raw = web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item(THEME_KEY).ok().flatten());
    Theme::from_stored(raw.as_deref())
}

fn apply(document: &Document, theme: Theme) {
    if let Some(body) = document.body() {
        let classes = body.class_list();
        let _ = match theme {
            Theme::Dark => classes.add_1(DARK_CLASS),
            Theme::Light => classes.remove_1(DARK_CLASS),
        };
    }

    persist(theme);

    if let Some(icon) = document
        .get_element_by_id("themeIcon")
        .and_then(|el| el.dyn_into::<HtmlImageElement>().ok())
    {
        icon.set_src(theme.icon_src());
    }
}

fn persist(theme: Theme) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(Some(storage)) = window.local_storage() else {
        return;
    };
    let _ = storage.set_item(THEME_KEY, theme.as_str());
}
