//! Lookup of embedded bundle files.

use include_dir::Dir;
use log::debug;
use mime_guess::from_path;

pub const INDEX: &str = "index.html";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    pub path: &'static str,
    pub content_type: String,
    pub contents: &'static [u8],
}

/// Finds the file for `request_path`. Paths with no matching file are
/// client-side routes and get `index.html`.
pub fn resolve(dir: &'static Dir<'static>, request_path: &str) -> Option<Asset> {
    let path = request_path.trim_start_matches('/');
    let path = if path.is_empty() { INDEX } else { path };

    if let Some(file) = dir.get_file(path) {
        return Some(Asset {
            path: file.path().to_str().unwrap_or(INDEX),
            content_type: from_path(path).first_or_octet_stream().to_string(),
            contents: file.contents(),
        });
    }

    debug!("no embedded file for {}, serving {}", path, INDEX);
    dir.get_file(INDEX).map(|index| Asset {
        path: INDEX,
        content_type: "text/html; charset=utf-8".to_string(),
        contents: index.contents(),
    })
}
