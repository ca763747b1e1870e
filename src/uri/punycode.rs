use crate::error::PunycodeError;

const BASE: u32 = 36;
const TMIN: u32 = 1;
const TMAX: u32 = 26;
const SKEW: u32 = 38;
const DAMP: u32 = 700;
const INITIAL_BIAS: u32 = 72;
const INITIAL_N: u32 = 0x80;
const DELIMITER: char = '-';

fn is_basic_code_point(c: char) -> bool {
    (c as u32) < 0x80
}

/// The basic code point whose value (for representing integers) is `d`,
/// `d` in `[0, BASE)`. `0..25` maps to `a..z`; `26..35` maps to `0..9`.
fn encode_digit(d: u32) -> char {
    debug_assert!(d < BASE);
    if d < 26 {
        (b'a' + d as u8) as char
    } else {
        (b'0' + (d - 26) as u8) as char
    }
}

/// The numeric value of a basic code point, or `None` if it does not
/// represent one.
fn decode_digit(c: char) -> Option<u32> {
    match c {
        'a'..='z' => Some(c as u32 - 'a' as u32),
        'A'..='Z' => Some(c as u32 - 'A' as u32),
        '0'..='9' => Some(c as u32 - '0' as u32 + 26),
        _ => None,
    }
}

fn clamp(k: u32, bias: u32) -> u32 {
    if k <= bias {
        TMIN
    } else if k >= bias + TMAX {
        TMAX
    } else {
        k - bias
    }
}

fn adapt(delta: u32, numpoints: u32, firsttime: bool) -> u32 {
    let mut delta = if firsttime { delta / DAMP } else { delta / 2 };
    delta += delta / numpoints;
    let mut k = 0;
    while delta > (BASE - TMIN) * TMAX / 2 {
        delta /= BASE - TMIN;
        k += BASE;
    }
    k + (BASE - TMIN + 1) * delta / (delta + SKEW)
}

fn encode_vli(mut q: u32, bias: u32, out: &mut String) {
    let mut k = BASE;
    loop {
        let t = clamp(k, bias);
        if q < t {
            break;
        }
        out.push(encode_digit(t + (q - t) % (BASE - t)));
        q = (q - t) / (BASE - t);
        k += BASE;
    }
    out.push(encode_digit(q));
}

/// Encodes `input` as Bootstring/Punycode (RFC 3492), with the parameters
/// fixed by `spec.md` §4.4: `base=36, tmin=1, tmax=26, skew=38, damp=700,
/// initial_bias=72, initial_n=0x80, delimiter='-'`. Returns `input`
/// unchanged if it is already all-ASCII.
pub fn encode(input: &str) -> String {
    if input.chars().all(is_basic_code_point) {
        return input.to_string();
    }
    let mut output = String::new();
    let mut basic_count = 0u32;
    for c in input.chars() {
        if is_basic_code_point(c) {
            output.push(c);
            basic_count += 1;
        }
    }
    if basic_count > 0 {
        output.push(DELIMITER);
    }

    let mut non_basic: Vec<u32> = input.chars().filter(|&c| !is_basic_code_point(c)).map(|c| c as u32).collect();
    non_basic.sort_unstable();
    non_basic.dedup();

    let code_points: Vec<u32> = input.chars().map(|c| c as u32).collect();
    let mut n = INITIAL_N;
    let mut delta = 0u32;
    let mut bias = INITIAL_BIAS;
    let mut h = basic_count;

    for &m in &non_basic {
        delta += (m - n) * (h + 1);
        n = m;
        for &c in &code_points {
            if c < n {
                delta += 1;
            } else if c == n {
                encode_vli(delta, bias, &mut output);
                bias = adapt(delta, h + 1, h == basic_count);
                delta = 0;
                h += 1;
            }
        }
        delta += 1;
        n += 1;
    }
    output
}

/// Decodes Punycode text back to its original code points.
pub fn decode(input: &str) -> Result<String, PunycodeError> {
    let (basic, coded) = match input.rfind(DELIMITER) {
        Some(idx) => (&input[..idx], &input[idx + DELIMITER.len_utf8()..]),
        None => ("", input),
    };
    if !basic.chars().all(is_basic_code_point) {
        return Err(PunycodeError::BadInput);
    }
    let mut output: Vec<u32> = basic.chars().map(|c| c as u32).collect();

    let mut n = INITIAL_N;
    let mut i = 0u32;
    let mut bias = INITIAL_BIAS;
    let mut chars = coded.chars();

    loop {
        let Some(mut c) = chars.next() else { break };
        let old_i = i;
        let mut w = 1u32;
        let mut k = BASE;
        loop {
            let digit = decode_digit(c).ok_or(PunycodeError::BadInput)?;
            i = i.checked_add(digit.checked_mul(w).ok_or(PunycodeError::Overflow)?).ok_or(PunycodeError::Overflow)?;
            let t = clamp(k, bias);
            if digit < t {
                break;
            }
            w = w.checked_mul(BASE - t).ok_or(PunycodeError::Overflow)?;
            k += BASE;
            c = chars.next().ok_or(PunycodeError::BadInput)?;
        }
        let out_len = output.len() as u32 + 1;
        bias = adapt(i - old_i, out_len, old_i == 0);
        n = n.checked_add(i / out_len).ok_or(PunycodeError::Overflow)?;
        i %= out_len;
        output.insert(i as usize, n);
        i += 1;
    }

    output
        .into_iter()
        .map(|cp| char::from_u32(cp).ok_or(PunycodeError::BadInput))
        .collect::<Result<String, _>>()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn ascii_input_is_unchanged() {
        assert_eq!(encode("example"), "example");
    }

    #[test]
    fn encodes_and_decodes_mixed_script() {
        // "bücher" (German for "books")
        let encoded = encode("bücher");
        assert_eq!(encoded, "bcher-kva");
        assert_eq!(decode(&encoded).unwrap(), "bücher");
    }

    #[test]
    fn encodes_and_decodes_all_non_basic() {
        let encoded = encode("ü");
        assert_eq!(decode(&encoded).unwrap(), "ü");
    }

    #[test]
    fn bad_input_without_basic_is_rejected() {
        assert!(decode("*").is_err());
    }
}
