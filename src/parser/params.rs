//! CSI parameter-string parsing (spec §4.3): a semicolon-delimited decimal list,
//! parsed from the accumulated scratch buffer once the final byte arrives.

/// Parses `buf` (e.g. `b"5;10"`) into its decimal fields. An empty field (consecutive
/// `;`, a leading `;`, or an empty buffer) parses as `0` — VT100 doesn't distinguish a
/// missing parameter from an explicit zero at this layer (spec §4.3).
pub fn parse_params(buf: &[u8]) -> Vec<u32> {
    if buf.is_empty() {
        return Vec::new();
    }
    buf.split(|&b| b == b';')
        .map(|field| {
            if field.is_empty() {
                0
            } else {
                std::str::from_utf8(field).ok().and_then(|s| s.parse().ok()).unwrap_or(0)
            }
        })
        .collect()
}

/// Extension helpers over a parsed parameter list, grounded on the "default to 1 when
/// absent or zero" rule spec §4.3 states for `p1`/`p2`.
pub trait ParamsExt {
    /// The value at position `n`, or `default` if missing or explicitly `0`.
    fn nth_or(&self, n: usize, default: u32) -> u32;
}

impl ParamsExt for [u32] {
    fn nth_or(&self, n: usize, default: u32) -> u32 {
        match self.get(n) {
            Some(0) | None => default,
            Some(&v) => v,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_semicolon_delimited_fields() {
        assert_eq!(parse_params(b"5;10"), vec![5, 10]);
    }

    #[test]
    fn empty_buffer_parses_as_no_params() {
        assert_eq!(parse_params(b""), Vec::<u32>::new());
    }

    #[test]
    fn missing_and_zero_params_both_default() {
        let p = parse_params(b"0;;7");
        assert_eq!(p.nth_or(0, 1), 1);
        assert_eq!(p.nth_or(1, 1), 1);
        assert_eq!(p.nth_or(2, 1), 7);
        assert_eq!(p.nth_or(5, 1), 1); // out of bounds
    }
}
