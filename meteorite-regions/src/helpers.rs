use std::fmt;

use meteorite_feed::Field;

use crate::models::Row;

pub trait FieldHelper {
    /// The textual form of the field as delivered by the feed.
    fn text(&self) -> Option<String>;
}

impl FieldHelper for Option<Field> {
    fn text(&self) -> Option<String> {
        self.as_ref().map(ToString::to_string)
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "`{}` ({}, {})",
            self.name.as_deref().unwrap_or("unnamed"),
            self.reclat,
            self.reclong
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_text() {
        assert_eq!(Some(Field::from("21")).text(), Some("21".to_owned()));
        assert_eq!(None::<Field>.text(), None);
    }

    #[test]
    fn test_row_display() {
        let row = Row {
            name: Some("Aachen".into()),
            mass: None,
            reclat: "50.775000".into(),
            reclong: "6.083330".into(),
        };
        assert_eq!(row.to_string(), "`Aachen` (50.775000, 6.083330)");
    }
}
