//! Build-time site configuration.
//!
//! The API and uploads locations are baked in when the bundle is compiled
//! (`BAKERY_API_URL`, `BAKERY_UPLOADS_URL`), the same way the server address
//! comes from `[package.metadata.leptos]` at startup.

/// Base path every REST call is made against.
pub const API_BASE_URL: &str = match option_env!("BAKERY_API_URL") {
    Some(url) => url,
    None => "/api",
};

/// Origin that serves uploaded images and voice clips.
pub const UPLOADS_BASE_URL: &str = match option_env!("BAKERY_UPLOADS_URL") {
    Some(url) => url,
    None => "",
};

/// Menu cards per page on the home grid.
pub const MENU_PAGE_SIZE: usize = 6;
/// Gallery tiles per page (3x3).
pub const GALLERY_PAGE_SIZE: usize = 9;
/// Upper bound on images pulled from the menu into the gallery.
pub const GALLERY_LIMIT: usize = 12;
/// Images a single menu item may carry.
pub const MAX_ITEM_IMAGES: usize = 4;
/// Minimum length accepted for a new admin password.
pub const MIN_PASSWORD_LEN: usize = 6;
/// How long a toast stays on screen.
pub const TOAST_DURATION_MS: u32 = 3_000;
/// Delay before a detail page starts narrating.
pub const AUTOPLAY_DELAY_MS: u32 = 500;
/// Speech synthesis rate for voice descriptions.
pub const SPEECH_RATE: f32 = 0.9;

pub const PLACEHOLDER_IMAGE: &str =
    "https://images.unsplash.com/photo-1546069901-ba9599a7e63c?w=500&h=350&fit=crop";

pub const BUSINESS_NAME: &str = "Zelan Bakery";
pub const BUSINESS_ADDRESS: &str = "Jl. Bung Tomo VII No. 5, Denpasar, Bali";
pub const BUSINESS_HOURS: &str = "08:00 - 20:00";
pub const BUSINESS_PHONE: &str = "0895-3854-55669";
pub const WHATSAPP_URL: &str = "https://wa.me/62895385455669";

/// Resolves a stored media path against the uploads origin.
///
/// Absolute URLs pass through untouched; empty paths resolve to nothing.
pub fn file_url(path: Option<&str>) -> Option<String> {
    file_url_with(UPLOADS_BASE_URL, path)
}

pub fn file_url_with(base: &str, path: Option<&str>) -> Option<String> {
    let path = path.map(str::trim).filter(|p| !p.is_empty())?;
    if path.starts_with("http") {
        return Some(path.to_string());
    }
    Some(format!("{}/{}", base.trim_end_matches('/'), path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_url_passes_absolute_urls_through() {
        let url = file_url_with("https://cdn.zelan.id", Some("https://img.example/a.jpg"));
        assert_eq!(url.as_deref(), Some("https://img.example/a.jpg"));
    }

    #[test]
    fn test_file_url_prefixes_relative_paths() {
        let url = file_url_with("https://cdn.zelan.id/", Some("uploads/menu/1.jpg"));
        assert_eq!(url.as_deref(), Some("https://cdn.zelan.id/uploads/menu/1.jpg"));

        // No uploads origin configured: served from the site root.
        let url = file_url_with("", Some("uploads/voice/1.mp3"));
        assert_eq!(url.as_deref(), Some("/uploads/voice/1.mp3"));
    }

    #[test]
    fn test_file_url_ignores_missing_paths() {
        assert_eq!(file_url_with("https://cdn.zelan.id", None), None);
        assert_eq!(file_url_with("https://cdn.zelan.id", Some("  ")), None);
    }
}
