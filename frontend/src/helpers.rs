//! Small browser utilities shared by the pages.
//!
//! - **User feedback**: `show_toast` injects a transient notification.
//! - **Files**: reading the first picked file and turning it into a
//!   previewable object URL.
//! - **Time**: the wall clock used to stamp new records.

use chrono::{DateTime, Utc};
use common::model::FileRef;
use common::FormError;
use wasm_bindgen::JsCast;
use web_sys::{File, HtmlElement, HtmlInputElement, Url};

/// How long a toast stays on screen.
const TOAST_MILLIS: u32 = 3000;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// Shows a temporary notification at the bottom of the screen.
///
/// The element removes itself after `TOAST_MILLIS`.
pub fn show_toast(title: &str, message: &str, kind: ToastKind) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) else {
        return;
    };

    let title_el = document.create_element("strong").ok();
    let message_el = document.create_element("div").ok();
    if let (Some(title_el), Some(message_el)) = (title_el, message_el) {
        title_el.set_text_content(Some(title));
        message_el.set_text_content(Some(message));
        toast.append_child(&title_el).ok();
        toast.append_child(&message_el).ok();
    }

    let toast: HtmlElement = toast.unchecked_into();
    let background = match kind {
        ToastKind::Success => "rgba(0, 0, 0, 0.85)",
        ToastKind::Error => "#d93025",
    };
    let style = toast.style();
    for (name, value) in [
        ("position", "fixed"),
        ("bottom", "20px"),
        ("right", "20px"),
        ("background", background),
        ("color", "#fff"),
        ("padding", "12px 20px"),
        ("border-radius", "6px"),
        ("z-index", "10000"),
        ("font-family", "Arial, sans-serif"),
        ("font-size", "14px"),
        ("max-width", "360px"),
    ] {
        style.set_property(name, value).ok();
    }

    if body.append_child(&toast).is_ok() {
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_MILLIS).await;
            if let Some(parent) = toast.parent_node() {
                parent.remove_child(&toast).ok();
            }
        });
    }
}

pub fn toast_success(message: &str) {
    show_toast("Success", message, ToastKind::Success);
}

pub fn toast_error(error: &FormError) {
    show_toast(error.title(), &error.to_string(), ToastKind::Error);
}

pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// The first file of a file input, if one was picked.
pub fn first_file(input: &HtmlInputElement) -> Option<File> {
    input.files().and_then(|files| files.get(0))
}

pub fn file_ref(file: &File) -> FileRef {
    FileRef::new(file.name(), file.size() as u64, file.type_())
}

/// Object URL for previewing `file`; release it with `revoke_object_url`.
pub fn object_url(file: &File) -> Option<String> {
    Url::create_object_url_with_blob(file).ok()
}

pub fn revoke_object_url(url: &str) {
    Url::revoke_object_url(url).ok();
}
