use crate::models::Field;

/// Result of converting a raw field into a number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Numeric {
    Int(i64),
    Float(f64),
    Absent,
}

impl Numeric {
    pub fn as_f64(self) -> Option<f64> {
        match self {
            Numeric::Int(i) => Some(i as f64),
            Numeric::Float(f) => Some(f),
            Numeric::Absent => None,
        }
    }

    pub fn as_i64(self) -> Option<i64> {
        match self {
            Numeric::Int(i) => Some(i),
            _ => None,
        }
    }
}

/// Converts a raw field into an integer or a float.
///
/// Strings are parsed as an integer first and as a float if that fails.
/// Anything that is neither yields [`Numeric::Absent`], as does a missing
/// value.
pub fn coerce(value: Option<&Field>) -> Numeric {
    match value {
        Some(Field::Text(s)) => coerce_str(s),
        Some(Field::Number(n)) => match n.as_i64() {
            Some(i) => Numeric::Int(i),
            None => n.as_f64().map_or(Numeric::Absent, Numeric::Float),
        },
        Some(Field::Other(_)) | None => Numeric::Absent,
    }
}

fn coerce_str(s: &str) -> Numeric {
    let s = s.trim();
    if let Ok(i) = s.parse::<i64>() {
        return Numeric::Int(i);
    }
    if let Ok(f) = s.parse::<f64>() {
        return Numeric::Float(f);
    }
    Numeric::Absent
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn text(s: &str) -> Field {
        Field::from(s)
    }

    #[test]
    fn test_coerce_int() {
        assert_eq!(coerce(Some(&text("42"))), Numeric::Int(42));
        assert_eq!(coerce(Some(&text("-7"))), Numeric::Int(-7));
        assert_eq!(coerce(Some(&text("+3"))), Numeric::Int(3));
        assert_eq!(coerce(Some(&text(" 15 "))), Numeric::Int(15));
    }

    #[test]
    fn test_coerce_float() {
        assert_eq!(coerce(Some(&text("50.775"))), Numeric::Float(50.775));
        assert_eq!(coerce(Some(&text("-33.16667"))), Numeric::Float(-33.16667));
        assert_eq!(coerce(Some(&text("1e3"))), Numeric::Float(1000.0));
        assert_eq!(coerce(Some(&text("0.0"))), Numeric::Float(0.0));
    }

    #[test]
    fn test_coerce_int_overflow_falls_back_to_float() {
        assert_eq!(
            coerce(Some(&text("100000000000000000000"))),
            Numeric::Float(1e20)
        );
    }

    #[test]
    fn test_coerce_absent() {
        assert_eq!(coerce(None), Numeric::Absent);
        assert_eq!(coerce(Some(&text("abc"))), Numeric::Absent);
        assert_eq!(coerce(Some(&text(""))), Numeric::Absent);
        assert_eq!(coerce(Some(&text("12,5"))), Numeric::Absent);
        assert_eq!(
            coerce(Some(&Field::Other(json!({"type": "Point"})))),
            Numeric::Absent
        );
        assert_eq!(coerce(Some(&Field::Other(json!(true)))), Numeric::Absent);
    }

    #[test]
    fn test_coerce_json_numbers() {
        let int: Field = serde_json::from_value(json!(12)).unwrap();
        let float: Field = serde_json::from_value(json!(12.5)).unwrap();
        assert_eq!(int.coerce(), Numeric::Int(12));
        assert_eq!(float.coerce(), Numeric::Float(12.5));
    }

    #[test]
    fn test_as_f64() {
        assert_eq!(Numeric::Int(2).as_f64(), Some(2.0));
        assert_eq!(Numeric::Float(2.5).as_f64(), Some(2.5));
        assert_eq!(Numeric::Absent.as_f64(), None);
        assert_eq!(Numeric::Float(2.5).as_i64(), None);
    }
}
