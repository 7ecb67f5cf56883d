// ============================================================
// VALUE GRAMMAR
// ============================================================
// Classify a raw CSV field into a type tag using fixed grammars
// for integers, floats and boolean literals

use super::ColumnType;

const BOOL_LITERALS: [&str; 8] = ["true", "false", "yes", "no", "t", "f", "y", "n"];

const FLOAT_SPECIALS: [&str; 3] = ["nan", "inf", "infinity"];

/// Classify one raw field value. Rules are tried in order: empty, int,
/// float, bool, and anything else is a string.
pub fn classify_value(raw: &str) -> ColumnType {
    let value = raw.trim();

    if value.is_empty() {
        ColumnType::Empty
    } else if is_int(value) {
        ColumnType::Int
    } else if is_float(value) {
        ColumnType::Float
    } else if is_bool(value) {
        ColumnType::Bool
    } else {
        ColumnType::Str
    }
}

/// `[+-]? DIGIT+`
pub fn is_int(value: &str) -> bool {
    let digits = strip_sign(value);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// `[+-]? (DIGIT+ ("." DIGIT*)? | "." DIGIT+) ([eE] [+-]? DIGIT+)?`,
/// or one of `nan`, `inf`, `infinity` in any case.
pub fn is_float(value: &str) -> bool {
    let body = strip_sign(value);

    if FLOAT_SPECIALS
        .iter()
        .any(|special| body.eq_ignore_ascii_case(special))
    {
        return true;
    }

    let bytes = body.as_bytes();
    let mut pos = 0;

    let int_digits = count_digits(&bytes[pos..]);
    pos += int_digits;

    let mut frac_digits = 0;
    if bytes.get(pos) == Some(&b'.') {
        pos += 1;
        frac_digits = count_digits(&bytes[pos..]);
        pos += frac_digits;
    }

    if int_digits == 0 && frac_digits == 0 {
        return false;
    }

    if matches!(bytes.get(pos), Some(b'e') | Some(b'E')) {
        pos += 1;
        if matches!(bytes.get(pos), Some(b'+') | Some(b'-')) {
            pos += 1;
        }
        let exp_digits = count_digits(&bytes[pos..]);
        if exp_digits == 0 {
            return false;
        }
        pos += exp_digits;
    }

    pos == bytes.len()
}

pub fn is_bool(value: &str) -> bool {
    BOOL_LITERALS
        .iter()
        .any(|literal| value.eq_ignore_ascii_case(literal))
}

fn strip_sign(value: &str) -> &str {
    value
        .strip_prefix('+')
        .or_else(|| value.strip_prefix('-'))
        .unwrap_or(value)
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_whitespace() {
        assert_eq!(classify_value(""), ColumnType::Empty);
        assert_eq!(classify_value("   "), ColumnType::Empty);
        assert_eq!(classify_value("\t\n"), ColumnType::Empty);
    }

    #[test]
    fn test_integers() {
        for value in ["42", "-7", "+5", "007", " 12 ", "123456789012345678901234567890"] {
            assert_eq!(classify_value(value), ColumnType::Int, "{value:?}");
        }
    }

    #[test]
    fn test_integer_rejects() {
        assert!(!is_int("1_000"));
        assert!(!is_int("1,000"));
        assert!(!is_int("+"));
        assert!(!is_int("--1"));
        assert!(!is_int("٣"));
        assert_eq!(classify_value("1_000"), ColumnType::Str);
    }

    #[test]
    fn test_floats() {
        for value in [
            "3.14", "-0.5", "+.5", "1.", "1e10", "2.5E-3", ".5e+2", "NaN", "-inf", "Infinity",
        ] {
            assert_eq!(classify_value(value), ColumnType::Float, "{value:?}");
        }
    }

    #[test]
    fn test_float_rejects() {
        for value in [".", "e5", "1e", "1.2.3", "1e5.0", "0x10", "1_0.5", "infinit"] {
            assert!(!is_float(value), "{value:?}");
        }
    }

    #[test]
    fn test_bools_are_case_insensitive() {
        for value in ["true", "FALSE", "Yes", "no", "T", "f", "Y", "N"] {
            assert_eq!(classify_value(value), ColumnType::Bool, "{value:?}");
        }
    }

    #[test]
    fn test_numeric_rules_take_precedence_over_bool() {
        assert_eq!(classify_value("1"), ColumnType::Int);
        assert_eq!(classify_value("0"), ColumnType::Int);
    }

    #[test]
    fn test_strings() {
        for value in ["hello", "truth", "1.2.3", "N/A", "12abc"] {
            assert_eq!(classify_value(value), ColumnType::Str, "{value:?}");
        }
    }
}
