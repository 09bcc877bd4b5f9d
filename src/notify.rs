//! Blocking browser alerts.

use log::warn;

pub fn alert(message: &str) {
    let shown = web_sys::window()
        .map(|window| window.alert_with_message(message).is_ok())
        .unwrap_or(false);
    if !shown {
        warn!("Could not show alert: {}", message);
    }
}
