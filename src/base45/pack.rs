const BASE: u16 = 45;
const BASE_SQUARED: u16 = BASE * BASE;

pub const fn merge16(a: u8, b: u8) -> u16 {
    (a as u16) << 8 | b as u16
}

pub const fn split16(n: u16) -> (u8, u8) {
    ((n >> 8) as u8, (n & 0xFF) as u8)
}

/// Least significant digit first; `e` never exceeds 32.
pub const fn pack16(n: u16) -> (u8, u8, u8) {
    let e = n / BASE_SQUARED;
    let n = n % BASE_SQUARED;
    let d = n / BASE;
    let c = n % BASE;
    (c as u8, d as u8, e as u8)
}

pub const fn pack8(n: u8) -> (u8, u8) {
    (n % BASE as u8, n / BASE as u8)
}

// Three digits reach 91124, so the caller range checks the result.
pub const fn unpack16(c: u8, d: u8, e: u8) -> u32 {
    c as u32 + d as u32 * BASE as u32 + e as u32 * BASE_SQUARED as u32
}

pub const fn unpack8(c: u8, d: u8) -> u16 {
    c as u16 + d as u16 * BASE
}
