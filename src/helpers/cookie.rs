use uuid::Uuid;

/// Spoof a Cloudflare `__cfduid` cookie value.
///
/// Two random 128-bit identifiers rendered as lowercase hex and
/// concatenated. The value only has to look plausible to the edge; it
/// carries no identity and is regenerated on every request.
pub fn spoofed_cfduid() -> String {
    format!(
        "{}{}",
        Uuid::new_v4().simple(),
        Uuid::new_v4().simple()
    )
}
