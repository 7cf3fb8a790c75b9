//! Shared constants and invariants

/// User settings endpoint that accepts the custom status PATCH.
pub const UPDATE_STATUS_URL: &str = "https://discordapp.com/api/v6/users/@me/settings";

/// Browser-impersonating user agent matching the desktop client.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; WOW64) AppleWebKit/537.36 (KHTML, like Gecko) discord/0.0.305 Chrome/69.0.3497.128 Electron/4.0.8 Safari/537.36";

/// Server-side limit on the custom status text field.
pub const MAX_STATUS_LENGTH: u64 = 128;

/// Seconds between chunk updates; doubles as the expiry offset.
pub const DEFAULT_ITER_SECONDS: u64 = 600;
