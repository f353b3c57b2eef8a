// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

/// Join a media reference onto a base URL with exactly one `/` between them.
///
/// ```
/// use mindra_portfolio::resolve_media_url;
///
/// assert_eq!(resolve_media_url("/media/", "/videos/kief.mp4"), "/media/videos/kief.mp4");
/// assert_eq!(resolve_media_url("https://cdn.example.com", "images/ajax.jpg"), "https://cdn.example.com/images/ajax.jpg");
/// ```
pub fn resolve_media_url(base: &str, path: &str) -> String {
	let base = base.strip_suffix('/').unwrap_or(base);
	let path = path.strip_prefix('/').unwrap_or(path);
	format!("{base}/{path}")
}
