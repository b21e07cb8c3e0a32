//! URL construction for listing requests and image previews.

use crate::models::PositionKey;

/// URL of the listing for `key`: `{api_root}/{id}`, or `{api_root}/` for root.
///
/// A trailing slash on `api_root` is not doubled.
pub fn children_url(api_root: &str, key: &PositionKey) -> String {
    format!(
        "{}/{}",
        api_root.trim_end_matches('/'),
        key.request_segment()
    )
}

/// Preview source for a file: `{prefix}{file_path}`.
pub fn image_source(prefix: &str, file_path: &str) -> String {
    format!("{}{}", prefix, file_path)
}
