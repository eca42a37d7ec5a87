//! DawgPath companion API: browser-driven login and authenticated search.
//!
//! Schedule pages are public; the DawgPath course-exploration API is
//! not. Credential acquisition is a manual browser sign-in whose
//! session cookies are captured over CDP and reused by the HTTP client.

pub mod browser;
pub mod client;
pub mod cookies;
pub mod responses;

pub use client::DawgPathClient;
pub use cookies::CookieStore;

/// DawgPath site root.
pub const DAWGPATH_ROOT: &str = "https://dawgpath.uw.edu";
