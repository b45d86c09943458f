// ============================================================================
// Powers of Ten
// Exact integer scale factors for denomination rescaling
// ============================================================================

/// Largest exponent whose power of ten fits in a u128.
pub const MAX_POW10_EXPONENT: u32 = 38;

/// Compute 10^n at compile time
const fn pow10(n: u32) -> u128 {
    let mut result: u128 = 1;
    let mut i = 0;
    while i < n {
        result *= 10;
        i += 1;
    }
    result
}

const fn build_table() -> [u128; MAX_POW10_EXPONENT as usize + 1] {
    let mut table = [0u128; MAX_POW10_EXPONENT as usize + 1];
    let mut i = 0;
    while i <= MAX_POW10_EXPONENT {
        table[i as usize] = pow10(i);
        i += 1;
    }
    table
}

const POW10: [u128; MAX_POW10_EXPONENT as usize + 1] = build_table();

/// Exact power of ten, or `None` when 10^exp does not fit in a u128.
#[inline]
pub fn checked_pow10(exp: u32) -> Option<u128> {
    POW10.get(exp as usize).copied()
}
