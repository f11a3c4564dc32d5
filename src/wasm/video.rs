//! Showcase video controls: play/pause plus three mutually exclusive width
//! presets. The media element's own play/pause events drive the state so the
//! button stays correct however playback is triggered.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{Document, HtmlVideoElement};

use super::dom;
use crate::state::{VideoSize, VideoState};

const RESIZE_ANIMATION_MS: i32 = 400;

pub fn init(document: &Document) -> Result<(), JsValue> {
    let Some(video) = document
        .get_element_by_id("video1")
        .and_then(|el| el.dyn_into::<HtmlVideoElement>().ok())
    else {
        log::warn!("#video1 not found; video controls disabled");
        return Ok(());
    };

    let state = Rc::new(RefCell::new(VideoState::default()));

    for (event, playing) in [("play", true), ("pause", false)] {
        let state = state.clone();
        let document = document.clone();
        let cb = Closure::wrap(Box::new(move || {
            state.borrow_mut().is_playing = playing;
            refresh_play_button(&document, &state.borrow());
        }) as Box<dyn FnMut()>);
        video.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())?;
        cb.forget();
    }

    if let Some(btn) = dom::element_by_id(document, "playPauseBtn") {
        let video = video.clone();
        let click = Closure::wrap(Box::new(move || toggle_playback(&video)) as Box<dyn FnMut()>);
        btn.add_event_listener_with_callback("click", click.as_ref().unchecked_ref())?;
        click.forget();
    }

    for size in VideoSize::ALL {
        if let Some(btn) = dom::element_by_id(document, size.button_id()) {
            let video = video.clone();
            let state = state.clone();
            let document = document.clone();
            let click = Closure::wrap(Box::new(move || {
                resize(&document, &video, &state, size);
            }) as Box<dyn FnMut()>);
            btn.add_event_listener_with_callback("click", click.as_ref().unchecked_ref())?;
            click.forget();
        }
    }

    try_play(&video);
    Ok(())
}

/// Autoplay is routinely blocked until a user gesture; the rejection is
/// awaited and discarded.
fn try_play(video: &HtmlVideoElement) {
    if let Ok(promise) = video.play() {
        spawn_local(async move {
            let _ = JsFuture::from(promise).await;
        });
    }
}

fn toggle_playback(video: &HtmlVideoElement) {
    if video.paused() {
        try_play(video);
    } else {
        let _ = video.pause();
    }
}

fn refresh_play_button(document: &Document, state: &VideoState) {
    let Some(btn) = document.get_element_by_id("playPauseBtn") else {
        return;
    };
    let (label, aria) = state.play_button_text();
    btn.set_text_content(Some(label));
    let _ = btn.set_attribute("aria-label", aria);
}

fn resize(
    document: &Document,
    video: &HtmlVideoElement,
    state: &Rc<RefCell<VideoState>>,
    size: VideoSize,
) {
    animate_resize(video);
    let _ = video.style().set_property("width", size.css_width());
    state.borrow_mut().current_size = size;
    refresh_size_buttons(document, size);
}

/// Transient class that lets CSS ease the width change.
fn animate_resize(video: &HtmlVideoElement) {
    let _ = video.class_list().add_1("resizing");
    let video = video.clone();
    dom::after_delay(RESIZE_ANIMATION_MS, move || {
        let _ = video.class_list().remove_1("resizing");
    });
}

/// Exactly the button matching the current preset carries `active`.
fn refresh_size_buttons(document: &Document, current: VideoSize) {
    for (id, active) in VideoSize::active_flags(current) {
        let Some(btn) = document.get_element_by_id(id) else {
            continue;
        };
        let classes = btn.class_list();
        let _ = if active {
            classes.add_1("active")
        } else {
            classes.remove_1("active")
        };
    }
}
