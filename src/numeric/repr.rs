// ============================================================================
// Number Rendering
// Shortest round-trip rendering in the conventional REPL style:
// `4.5`, `1.0`, `1e-05`, `inf`, `nan`, `(nan+infj)`
// ============================================================================

use num_complex::Complex64;

/// Magnitudes below this switch to scientific notation
const SCI_LOWER: f64 = 1e-4;

/// Magnitudes at or above this switch to scientific notation
const SCI_UPPER: f64 = 1e16;

/// Render a real number. Integral finite values keep a trailing `.0`.
pub fn format_real(x: f64) -> String {
    let mut text = format_component(x);
    if x.is_finite() && !text.contains(['.', 'e']) {
        text.push_str(".0");
    }
    text
}

/// Render a complex number.
///
/// A positive-zero real part collapses to the bare imaginary form (`1j`),
/// anything else is parenthesised with an explicit sign (`(nan+infj)`).
pub fn format_complex(z: Complex64) -> String {
    let imag = format_component(z.im);
    if z.re == 0.0 && z.re.is_sign_positive() {
        return format!("{}j", imag);
    }

    let sign = if imag.starts_with('-') { "" } else { "+" };
    format!("({}{}{}j)", format_component(z.re), sign, imag)
}

/// Render one float without forcing a trailing `.0`
pub(super) fn format_component(x: f64) -> String {
    if x.is_nan() {
        return "nan".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let magnitude = x.abs();
    if magnitude != 0.0 && !(SCI_LOWER..SCI_UPPER).contains(&magnitude) {
        scientific(x)
    } else {
        format!("{}", x)
    }
}

/// Parse a real rendered by [`format_real`], including `nan`, `inf` and `-inf`.
pub fn parse_real(text: &str) -> Option<f64> {
    match text.trim() {
        "nan" => Some(f64::NAN),
        "inf" => Some(f64::INFINITY),
        "-inf" => Some(f64::NEG_INFINITY),
        other => other.parse().ok().filter(|x: &f64| x.is_finite()),
    }
}

/// `1.5e16` -> `1.5e+16`, `1e-5` -> `1e-05`
fn scientific(x: f64) -> String {
    let raw = format!("{:e}", x);
    match raw.split_once('e') {
        Some((mantissa, exponent)) => match exponent.parse::<i32>() {
            Ok(exp) => {
                let sign = if exp < 0 { '-' } else { '+' };
                format!("{}e{}{:02}", mantissa, sign, exp.abs())
            },
            Err(_) => raw,
        },
        None => raw,
    }
}
