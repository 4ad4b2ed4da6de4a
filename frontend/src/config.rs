use web_sys::window;

/// The backend serves the built frontend itself, so same-origin requests
/// work everywhere except under `trunk serve`, which runs on its own port.
pub fn get_api_base_url() -> String {
    if let Some(window) = window() {
        if let Ok(host) = window.location().host() {
            if host.ends_with(":8080") {
                // trunk dev server; talk to the backend directly
                return "http://127.0.0.1:8000".to_string();
            }

            let protocol = window
                .location()
                .protocol()
                .unwrap_or_else(|_| "http:".to_string());
            return format!("{}//{}", protocol, host);
        }
    }

    "http://127.0.0.1:8000".to_string()
}

pub fn get_asset_url(path: &str) -> String {
    if path.starts_with("http") {
        path.to_string()
    } else {
        format!("{}{}", get_api_base_url(), path)
    }
}
