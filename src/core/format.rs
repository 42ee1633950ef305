/// Renders `value` as US dollars with two fraction digits, e.g. `$1,250.00`.
///
/// Rounds half away from zero on the shortest decimal form of the float, so
/// `1.005` shows as `$1.01`. Negative amounts render as `-$1,234.50`.
/// Unlike `Intl.NumberFormat`, a negative value that rounds to zero renders
/// as `$0.00` rather than `-$0.00`.
pub fn format_currency(value: f64) -> String {
    if value.is_nan() {
        return "$NaN".to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-$∞" } else { "$∞" }.to_string();
    }

    let (whole, cents) = round_to_cents(value.abs());
    let is_zero = whole.iter().all(|d| *d == 0) && cents == [0, 0];
    let sign = if value < 0.0 && !is_zero { "-" } else { "" };

    format!(
        "{}${}.{}{}",
        sign,
        group_thousands(&whole),
        cents[0],
        cents[1]
    )
}

/// Whole-dollar digits (most significant first) and the two cent digits.
fn round_to_cents(abs: f64) -> (Vec<u8>, [u8; 2]) {
    // Display for f64 never uses exponent notation and yields the shortest round-trip form
    let text = abs.to_string();
    let (int_text, frac_text) = text.split_once('.').unwrap_or((text.as_str(), ""));

    let mut digits: Vec<u8> = int_text.bytes().map(|b| b - b'0').collect();
    let mut frac = frac_text.bytes().map(|b| b - b'0');
    let cent_tens = frac.next().unwrap_or(0);
    let cent_ones = frac.next().unwrap_or(0);
    let round_up = frac.next().unwrap_or(0) >= 5;

    digits.push(cent_tens);
    digits.push(cent_ones);

    if round_up {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == 9 {
                *digit = 0;
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, 1);
        }
    }

    let cents = [digits[digits.len() - 2], digits[digits.len() - 1]];
    digits.truncate(digits.len() - 2);
    if digits.is_empty() {
        digits.push(0);
    }
    (digits, cents)
}

fn group_thousands(digits: &[u8]) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(char::from(b'0' + digit));
    }
    out
}
