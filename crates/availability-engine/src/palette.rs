//! Deterministic display colors for family members.

/// Built-in palette used for roster entries without an explicit color.
pub const FAMILY_PALETTE: [&str; 8] = [
    "#4285F4", "#EA4335", "#FBBC05", "#34A853", "#9C27B0", "#FF6D00", "#00ACC1", "#795548",
];

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Map a member id to an index in `[0, palette_size)`.
///
/// Uses 64-bit FNV-1a over the UTF-8 bytes of the id, so the result is stable
/// across platforms and releases. Returns 0 when `palette_size` is 0.
pub fn color_for(member_id: &str, palette_size: usize) -> usize {
    if palette_size == 0 {
        return 0;
    }
    let hash = member_id.bytes().fold(FNV_OFFSET_BASIS, |hash, byte| {
        (hash ^ u64::from(byte)).wrapping_mul(FNV_PRIME)
    });
    (hash % palette_size as u64) as usize
}

/// The [`FAMILY_PALETTE`] entry for a member id.
pub fn member_color(member_id: &str) -> &'static str {
    FAMILY_PALETTE[color_for(member_id, FAMILY_PALETTE.len())]
}
