//! ## duallog-core::printf
//! **Runtime printf-style rendering for `logf`**
//!
//! Format strings use `%[flags][width][.precision]verb` with the flags
//! `- + # 0 space` and the verbs:
//!
//! | verb            | arguments                         |
//! |-----------------|-----------------------------------|
//! | `v`             | any, default rendering            |
//! | `d b o x X`     | integers and chars (`x X` also strings, as hex bytes) |
//! | `s q`           | strings (`q` also chars and integers) |
//! | `c`             | chars and integer code points     |
//! | `t`             | booleans                          |
//! | `e E f F g G`   | floats                            |
//! | `T`             | any, type name                    |
//!
//! Rendering never fails. Problems are written into the output instead:
//! `%!d(str=hi)` for a verb that does not fit its argument, `%!d(MISSING)`
//! when arguments run out, `%!(EXTRA i64=1, str=x)` for unused arguments and
//! `%!(NOVERB)` for a dangling `%`.

mod arg;

use std::fmt::Write;
use std::iter::Peekable;
use std::str::Chars;

pub use arg::Arg;

/// Widths and precisions above this render `%!(BADWIDTH)` / `%!(BADPREC)`.
const MAX_WIDTH: usize = 1_000_000;

#[derive(Debug, Default, Clone, Copy)]
struct Spec {
    minus: bool,
    plus: bool,
    sharp: bool,
    zero: bool,
    space: bool,
    width: Option<usize>,
    precision: Option<usize>,
}

enum Number {
    Absent,
    Value(usize),
    TooLarge,
}

/// Renders `format` with `args`.
pub fn sprintf(format: &str, args: &[Arg]) -> String {
    let mut out = String::with_capacity(format.len() + 8 * args.len());
    let mut chars = format.chars().peekable();
    let mut next = 0;

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }

        let mut spec = Spec::default();
        while let Some(&flag) = chars.peek() {
            match flag {
                '-' => spec.minus = true,
                '+' => spec.plus = true,
                '#' => spec.sharp = true,
                '0' => spec.zero = true,
                ' ' => spec.space = true,
                _ => break,
            }
            chars.next();
        }

        match number(&mut chars) {
            Number::Absent => {}
            Number::Value(width) => spec.width = Some(width),
            Number::TooLarge => out.push_str("%!(BADWIDTH)"),
        }
        if chars.peek() == Some(&'.') {
            chars.next();
            match number(&mut chars) {
                Number::Absent => spec.precision = Some(0),
                Number::Value(precision) => spec.precision = Some(precision),
                Number::TooLarge => out.push_str("%!(BADPREC)"),
            }
        }

        let Some(verb) = chars.next() else {
            out.push_str("%!(NOVERB)");
            break;
        };
        if verb == '%' {
            out.push('%');
            continue;
        }

        match args.get(next) {
            Some(arg) => {
                next += 1;
                render(&mut out, verb, &spec, arg);
            }
            None => {
                let _ = write!(out, "%!{}(MISSING)", verb);
            }
        }
    }

    if next < args.len() {
        out.push_str("%!(EXTRA ");
        for (i, arg) in args[next..].iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            let _ = write!(out, "{}={}", arg.type_name(), arg);
        }
        out.push(')');
    }
    out
}

fn number(chars: &mut Peekable<Chars<'_>>) -> Number {
    let mut value: Option<usize> = None;
    while let Some(digit) = chars.peek().and_then(|c| c.to_digit(10)) {
        chars.next();
        let current = value.unwrap_or(0);
        value = Some(current.saturating_mul(10).saturating_add(digit as usize));
    }
    match value {
        None => Number::Absent,
        Some(v) if v > MAX_WIDTH => Number::TooLarge,
        Some(v) => Number::Value(v),
    }
}

fn render(out: &mut String, verb: char, spec: &Spec, arg: &Arg) {
    match (verb, arg) {
        ('v', _) => render(out, arg.default_verb(), spec, arg),
        ('T', _) => pad(out, arg.type_name(), spec),
        ('t', Arg::Bool(b)) => pad(out, if *b { "true" } else { "false" }, spec),
        ('d' | 'b' | 'o' | 'x' | 'X', Arg::Int(i)) => integer(out, i128::from(*i), verb, spec),
        ('d' | 'b' | 'o' | 'x' | 'X', Arg::Uint(u)) => integer(out, i128::from(*u), verb, spec),
        ('d' | 'b' | 'o' | 'x' | 'X', Arg::Char(c)) => {
            integer(out, i128::from(u32::from(*c)), verb, spec)
        }
        ('x' | 'X', Arg::Str(s)) => pad(out, &hex_bytes(s.as_bytes(), verb == 'X'), spec),
        ('c', Arg::Char(c)) => pad(out, c.encode_utf8(&mut [0; 4]), spec),
        ('c', Arg::Int(_) | Arg::Uint(_)) => {
            pad(out, code_point(arg).encode_utf8(&mut [0; 4]), spec)
        }
        ('q', Arg::Str(s)) => pad(out, &quote(s.chars(), '"'), spec),
        ('q', Arg::Char(c)) => pad(out, &quote(std::iter::once(*c), '\''), spec),
        ('q', Arg::Int(_) | Arg::Uint(_)) => {
            pad(out, &quote(std::iter::once(code_point(arg)), '\''), spec)
        }
        ('s', Arg::Str(s)) => pad(out, truncate(s, spec.precision), spec),
        ('e' | 'E' | 'f' | 'F' | 'g' | 'G', Arg::Float(f)) => float(out, *f, verb, spec),
        _ => {
            let _ = write!(out, "%!{}({}={})", verb, arg.type_name(), arg);
        }
    }
}

fn code_point(arg: &Arg) -> char {
    let value = match arg {
        Arg::Int(i) => u32::try_from(*i).ok(),
        Arg::Uint(u) => u32::try_from(*u).ok(),
        _ => None,
    };
    value
        .and_then(char::from_u32)
        .unwrap_or(char::REPLACEMENT_CHARACTER)
}

/// C escapes where one exists, `\xNN` for other ASCII controls and `\uNNNN`
/// for the remaining control characters. Everything else is kept verbatim.
fn quote(chars: impl Iterator<Item = char>, delimiter: char) -> String {
    let mut out = String::new();
    out.push(delimiter);
    for c in chars {
        match c {
            '\x07' => out.push_str("\\a"),
            '\x08' => out.push_str("\\b"),
            '\x0c' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\x0b' => out.push_str("\\v"),
            '\\' => out.push_str("\\\\"),
            c if c == delimiter => {
                out.push('\\');
                out.push(c);
            }
            c if c.is_ascii_control() => {
                let _ = write!(out, "\\x{:02x}", u32::from(c));
            }
            c if c.is_control() => {
                let _ = write!(out, "\\u{:04x}", u32::from(c));
            }
            c => out.push(c),
        }
    }
    out.push(delimiter);
    out
}

fn truncate(s: &str, precision: Option<usize>) -> &str {
    match precision.and_then(|p| s.char_indices().nth(p)) {
        Some((end, _)) => &s[..end],
        None => s,
    }
}

fn hex_bytes(bytes: &[u8], upper: bool) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        let _ = if upper {
            write!(out, "{:02X}", byte)
        } else {
            write!(out, "{:02x}", byte)
        };
    }
    out
}

fn sign(negative: bool, spec: &Spec) -> &'static str {
    if negative {
        "-"
    } else if spec.plus {
        "+"
    } else if spec.space {
        " "
    } else {
        ""
    }
}

fn integer(out: &mut String, value: i128, verb: char, spec: &Spec) {
    let magnitude = value.unsigned_abs();
    let mut digits = match verb {
        'b' => format!("{:b}", magnitude),
        'o' => format!("{:o}", magnitude),
        'x' => format!("{:x}", magnitude),
        'X' => format!("{:X}", magnitude),
        _ => magnitude.to_string(),
    };
    if let Some(precision) = spec.precision {
        if precision == 0 && magnitude == 0 {
            digits.clear();
        } else if digits.len() < precision {
            digits.insert_str(0, &"0".repeat(precision - digits.len()));
        }
    }

    let mut head = String::from(sign(value < 0, spec));
    if spec.sharp {
        match verb {
            'b' => head.push_str("0b"),
            'o' if !digits.starts_with('0') => head.push('0'),
            'x' => head.push_str("0x"),
            'X' => head.push_str("0X"),
            _ => {}
        }
    }
    // An explicit precision disables zero padding.
    pad_number(out, &head, &digits, spec, spec.precision.is_none());
}

fn float(out: &mut String, value: f64, verb: char, spec: &Spec) {
    if value.is_nan() {
        return pad(out, "NaN", spec);
    }
    if value.is_infinite() {
        let head = if value < 0.0 { "-" } else { "+" };
        return pad_number(out, head, "Inf", spec, false);
    }

    let upper = verb.is_ascii_uppercase();
    let magnitude = value.abs();
    let body = match verb {
        'f' | 'F' => format!("{:.*}", spec.precision.unwrap_or(6), magnitude),
        'e' | 'E' => with_signed_exponent(
            &format!("{:.*e}", spec.precision.unwrap_or(6), magnitude),
            upper,
        ),
        _ => general(magnitude, spec.precision, spec.sharp, upper),
    };
    pad_number(out, sign(value.is_sign_negative(), spec), &body, spec, true);
}

/// `%g`: scientific notation for small or large exponents, plain decimal otherwise.
fn general(magnitude: f64, precision: Option<usize>, sharp: bool, upper: bool) -> String {
    let scientific = match precision {
        None => format!("{:e}", magnitude),
        Some(p) => format!("{:.*e}", p.max(1) - 1, magnitude),
    };
    let exponent = scientific
        .split_once('e')
        .and_then(|(_, exp)| exp.parse::<i64>().ok())
        .unwrap_or(0);
    let limit = precision.map_or(6, |p| p.max(1) as i64);

    if exponent < -4 || exponent >= limit {
        let scientific = match scientific.split_once('e') {
            Some((mantissa, exp)) if precision.is_some() && !sharp => {
                format!("{}e{}", trim_fraction(mantissa), exp)
            }
            _ => scientific,
        };
        return with_signed_exponent(&scientific, upper);
    }

    match precision {
        None => magnitude.to_string(),
        Some(p) => {
            let decimals = (p.max(1) as i64 - 1 - exponent).max(0) as usize;
            let fixed = format!("{:.*}", decimals, magnitude);
            if sharp {
                fixed
            } else {
                trim_fraction(&fixed).to_owned()
            }
        }
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

/// Rewrites Rust's `1.5e-7` as `1.5e-07`.
fn with_signed_exponent(scientific: &str, upper: bool) -> String {
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((scientific, "0"));
    let exponent: i64 = exponent.parse().unwrap_or(0);
    format!(
        "{}{}{}{:02}",
        mantissa,
        if upper { 'E' } else { 'e' },
        if exponent < 0 { '-' } else { '+' },
        exponent.unsigned_abs()
    )
}

fn push_fill(out: &mut String, fill: char, count: usize) {
    out.extend(std::iter::repeat(fill).take(count));
}

fn pad(out: &mut String, s: &str, spec: &Spec) {
    let fill = spec
        .width
        .map_or(0, |width| width.saturating_sub(s.chars().count()));
    if spec.minus {
        out.push_str(s);
        push_fill(out, ' ', fill);
    } else {
        push_fill(out, ' ', fill);
        out.push_str(s);
    }
}

/// Pads a number, putting zero fill between sign/prefix and digits.
fn pad_number(out: &mut String, head: &str, digits: &str, spec: &Spec, zero_ok: bool) {
    let len = head.chars().count() + digits.chars().count();
    let fill = spec.width.map_or(0, |width| width.saturating_sub(len));
    if spec.minus {
        out.push_str(head);
        out.push_str(digits);
        push_fill(out, ' ', fill);
    } else if spec.zero && zero_ok {
        out.push_str(head);
        push_fill(out, '0', fill);
        out.push_str(digits);
    } else {
        push_fill(out, ' ', fill);
        out.push_str(head);
        out.push_str(digits);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn fmt(format: &str, args: &[Arg]) -> String {
        sprintf(format, args)
    }

    #[test]
    fn plain_text_and_percent() {
        assert_eq!(fmt("no verbs here", &[]), "no verbs here");
        assert_eq!(fmt("100%%", &[]), "100%");
    }

    #[test]
    fn integers() {
        assert_eq!(fmt("Formatted info %d", &[123.into()]), "Formatted info 123");
        assert_eq!(fmt("%5d|%-5d|%05d", &[42.into(), 42.into(), 42.into()]), "   42|42   |00042");
        assert_eq!(fmt("%+d %+d", &[7.into(), (-7).into()]), "+7 -7");
        assert_eq!(fmt("%06d", &[(-42).into()]), "-00042");
        assert_eq!(fmt("%.3d", &[5.into()]), "005");
        assert_eq!(fmt("%d", &[u64::MAX.into()]), "18446744073709551615");
        assert_eq!(fmt("%d", &[i64::MIN.into()]), "-9223372036854775808");
    }

    #[test]
    fn radixes() {
        assert_eq!(fmt("%x %X %o %b", &[255.into(), 255.into(), 8.into(), 5.into()]), "ff FF 10 101");
        assert_eq!(fmt("%#x %#o %#b", &[255.into(), 8.into(), 5.into()]), "0xff 010 0b101");
        assert_eq!(fmt("%x", &["hi".into()]), "6869");
        assert_eq!(fmt("%#08x", &[255.into()]), "0x0000ff");
    }

    #[test]
    fn strings_and_chars() {
        assert_eq!(fmt("Formatted error %s", &["oops".into()]), "Formatted error oops");
        assert_eq!(fmt("[%6s][%-6s]", &["ab".into(), "ab".into()]), "[    ab][ab    ]");
        assert_eq!(fmt("%.2s", &["héllo".into()]), "hé");
        assert_eq!(fmt("%q", &["say \"hi\"".into()]), r#""say \"hi\"""#);
        assert_eq!(fmt("%c%c", &['o'.into(), 107.into()]), "ok");
        assert_eq!(fmt("%q", &['x'.into()]), "'x'");
        assert_eq!(fmt("%t", &[true.into()]), "true");
    }

    #[test]
    fn quoted_control_characters() {
        assert_eq!(fmt("%q", &["a\x1bb".into()]), r#""a\x1bb""#);
        assert_eq!(fmt("%q", &["\0".into()]), r#""\x00""#);
        assert_eq!(fmt("%q", &["\x07\x0b\t\n".into()]), r#""\a\v\t\n""#);
        assert_eq!(fmt("%q", &["\u{85}".into()]), r#""\u0085""#);
        assert_eq!(fmt("%q", &["back\\slash".into()]), r#""back\\slash""#);
        assert_eq!(fmt("%q", &["héllo".into()]), r#""héllo""#);
        assert_eq!(fmt("%q", &['\''.into()]), r"'\''");
        assert_eq!(fmt("%q", &['"'.into()]), r#"'"'"#);
        assert_eq!(fmt("%q", &[10.into()]), r"'\n'");
    }

    #[test]
    fn floats() {
        assert_eq!(fmt("%f", &[3.5.into()]), "3.500000");
        assert_eq!(fmt("%.2f", &[3.14159.into()]), "3.14");
        assert_eq!(fmt("%8.3f", &[(-3.14159).into()]), "  -3.142");
        assert_eq!(fmt("%08.3f", &[3.14159.into()]), "0003.142");
        assert_eq!(fmt("%e", &[1234.5678.into()]), "1.234568e+03");
        assert_eq!(fmt("%E", &[0.000123.into()]), "1.230000E-04");
        assert_eq!(fmt("%g", &[1_000_000.0.into()]), "1e+06");
        assert_eq!(fmt("%g", &[123456.0.into()]), "123456");
        assert_eq!(fmt("%g", &[0.0001.into()]), "0.0001");
        assert_eq!(fmt("%g", &[0.00001.into()]), "1e-05");
        assert_eq!(fmt("%.3g", &[3.14159.into()]), "3.14");
        assert_eq!(fmt("%.3g", &[1234.0.into()]), "1.23e+03");
        assert_eq!(fmt("%v", &[2.5.into()]), "2.5");
        assert_eq!(fmt("%v", &[0.0.into()]), "0");
        assert_eq!(fmt("%f %f %f", &[f64::NAN.into(), f64::INFINITY.into(), f64::NEG_INFINITY.into()]), "NaN +Inf -Inf");
    }

    #[test]
    fn default_verb_and_type() {
        assert_eq!(
            fmt("%v %v %v %v %v", &[true.into(), (-1).into(), 2u8.into(), 'z'.into(), "s".into()]),
            "true -1 2 z s"
        );
        assert_eq!(fmt("%T %T", &[1.into(), "x".into()]), "i64 str");
    }

    #[test]
    fn mismatches_degrade_to_markers() {
        assert_eq!(fmt("%d", &["hi".into()]), "%!d(str=hi)");
        assert_eq!(fmt("%s", &[5.into()]), "%!s(i64=5)");
        assert_eq!(fmt("%f", &[1.into()]), "%!f(i64=1)");
        assert_eq!(fmt("%z", &[1.into()]), "%!z(i64=1)");
        assert_eq!(fmt("%d and %d", &[1.into()]), "1 and %!d(MISSING)");
        assert_eq!(fmt("%d", &[1.into(), "x".into(), true.into()]), "1%!(EXTRA str=x, bool=true)");
        assert_eq!(fmt("no verbs", &[1.into()]), "no verbs%!(EXTRA i64=1)");
        assert_eq!(fmt("trailing %", &[]), "trailing %!(NOVERB)");
        assert_eq!(fmt("%99999999d", &[1.into()]), "%!(BADWIDTH)1");
    }

    proptest! {
        #[test]
        fn text_without_percent_is_verbatim(s in "[^%]{0,64}") {
            prop_assert_eq!(sprintf(&s, &[]), s);
        }

        #[test]
        fn decimal_matches_display(n in any::<i64>()) {
            prop_assert_eq!(sprintf("%d", &[n.into()]), n.to_string());
        }

        #[test]
        fn never_panics(format in "[%a-z0-9.#+ -]{0,32}", n in any::<i64>(), s in ".{0,8}") {
            let _ = sprintf(&format, &[n.into(), s.into(), 1.5.into()]);
        }
    }
}
