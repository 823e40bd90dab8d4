//! Value-to-digit placement.

/// Number of decimal digits needed to display `n`
pub fn decimal_len(n: u64) -> usize {
    n.checked_ilog10().map_or(1, |log| log as usize + 1)
}

/// Compute which registry index receives which digit for value `n`.
///
/// The display width is `max(len, total)`; digits are right-aligned within
/// that width and returned least significant first. Leading positions outside
/// the value are not included and so keep whatever they showed before.
pub fn placements(n: u64, total: usize) -> Vec<(usize, u8)> {
    let text = n.to_string();
    let len = text.len();
    let width = len.max(total);

    text.bytes()
        .rev()
        .enumerate()
        .map(|(i, b)| (width - 1 - i, b - b'0'))
        .collect()
}
