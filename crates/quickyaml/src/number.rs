/// Format an f64 so the scalar interpreter reads it back as a float.
/// Requirements:
/// - finite values always carry a `.` or an exponent (`42.0`, `1e16`)
/// - infinities and NaN use the YAML 1.2 core-schema spellings
/// - -0 keeps its sign (`-0.0`)
pub(crate) fn format_f64(value: f64) -> String {
    if value.is_nan() {
        return String::from(".nan");
    }
    if value.is_infinite() {
        return if value > 0.0 {
            String::from(".inf")
        } else {
            String::from("-.inf")
        };
    }
    let mut buf = ryu::Buffer::new();
    let raw = buf.format_finite(value);
    if raw.contains(['.', 'e', 'E']) {
        String::from(raw)
    } else {
        let mut out = String::with_capacity(raw.len() + 2);
        out.push_str(raw);
        out.push_str(".0");
        out
    }
}

/// Parse the digits that follow a `0x`/`0o` prefix.
/// Returns `None` for an empty body, any stray byte, or overflow of `i64`.
pub(crate) fn parse_radix_i64(body: &str, radix: u32) -> Option<i64> {
    if body.is_empty() || !body.bytes().all(|b| (b as char).is_digit(radix)) {
        return None;
    }
    i64::from_str_radix(body, radix).ok()
}
