//! Cookie-backed slot store.
//!
//! Each slot is one cookie: URL-encoded value, path "/", kept for a year.
//! Writes are fire-and-forget; a refused write only surfaces as a missing
//! snapshot on the next load.

use leptos::document;
use ::prelude::store::Slots;
use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

const MAX_AGE_SECS: u32 = 60 * 60 * 24 * 365;

/// `document.cookie` exposed through the `Slots` contract.
#[derive(Debug, Clone, Copy, Default)]
pub struct CookieSlots;

fn html_document() -> Option<HtmlDocument> {
    document().dyn_into::<HtmlDocument>().ok()
}

impl Slots for CookieSlots {
    fn read(&self, slot: &str) -> Option<String> {
        let cookies = html_document()?.cookie().ok()?;
        cookies.split("; ").find_map(|pair| {
            let (name, value) = pair.split_once('=')?;
            if name == slot {
                decode(value)
            } else {
                None
            }
        })
    }

    fn write(&self, slot: &str, value: &str) {
        let Some(doc) = html_document() else {
            return;
        };
        let cookie = format!("{slot}={}; path=/; max-age={MAX_AGE_SECS}", encode(value));
        if doc.set_cookie(&cookie).is_err() {
            log::warn!("could not persist the {slot} slot");
        }
    }
}

fn encode(value: &str) -> String {
    js_sys::encode_uri_component(value).into()
}

fn decode(value: &str) -> Option<String> {
    js_sys::decode_uri_component(value).ok().map(String::from)
}
