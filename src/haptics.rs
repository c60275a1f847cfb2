//! Best-effort vibration feedback through the Vibration API.

use js_sys::{Object, Reflect};
use log::{debug, info};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::Navigator;

/// Check once whether the device can vibrate and the page may use it.
pub async fn probe_vibration() -> bool {
    let navigator = gloo_utils::window().navigator();

    if !Reflect::has(&navigator, &JsValue::from_str("vibrate")).unwrap_or(false) {
        debug!("navigator.vibrate is not available");
        return false;
    }

    match query_permission(&navigator).await {
        Ok(()) => {
            info!("Vibration enabled");
            true
        }
        Err(e) => {
            info!("Vibration permission not available: {:?}", e);
            false
        }
    }
}

async fn query_permission(navigator: &Navigator) -> Result<(), JsValue> {
    let descriptor = Object::new();
    Reflect::set(
        &descriptor,
        &JsValue::from_str("name"),
        &JsValue::from_str("vibrate"),
    )?;
    let promise = navigator.permissions()?.query(&descriptor)?;
    JsFuture::from(promise).await?;
    Ok(())
}

pub fn vibrate(duration_ms: u32) {
    let navigator = gloo_utils::window().navigator();
    if !navigator.vibrate_with_duration(duration_ms) {
        debug!("Vibration of {} ms was refused", duration_ms);
    }
}
