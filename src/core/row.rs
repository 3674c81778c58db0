use std::fmt;

/// One data line of a delimited file, bound to the header's field names.
///
/// Fields keep the order of the header: that order is the order attributes
/// are rendered in. Values are kept as text, no type conversion happens.
///
/// Names are unique. Setting a name that is already present replaces its
/// value and keeps its position, so a header repeating a column yields one
/// field holding the last value.
///
/// # Examples
///
/// ```
/// use cttx::core::row::Row;
///
/// let row: Row = [("x", "-1"), ("y", "1")].into_iter().collect();
///
/// assert_eq!(row.len(), 2);
/// assert_eq!(row.get("y"), Some("1"));
/// assert_eq!(row.keys().collect::<Vec<_>>(), vec!["x", "y"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    fields: Vec<(String, String)>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a field at the end of the row, or replaces the value of the
    /// field already called `name` in place.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(key, _)| *key == name) {
            Some((_, current)) => *current = value,
            None => self.fields.push((name, value)),
        }
    }

    /// Value of the field called `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Iterates over `(name, value)` pairs in header order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(key, _)| key.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(_, value)| value.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Row
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut row = Row::new();
        for (key, value) in iter {
            row.push(key, value);
        }
        row
    }
}

impl fmt::Display for Row {
    /// Formats the row as space separated `key="value"` pairs.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}=\"{}\"", key, value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Row;

    #[test]
    fn keeps_insertion_order() {
        let mut row = Row::new();
        row.push("z", "0");
        row.push("x", "1");
        row.push("end", "0");

        assert_eq!(row.keys().collect::<Vec<_>>(), vec!["z", "x", "end"]);
        assert_eq!(row.values().collect::<Vec<_>>(), vec!["0", "1", "0"]);
    }

    #[test]
    fn repeated_name_keeps_first_position_and_last_value() {
        let row: Row = [("x", "1"), ("x", "2"), ("y", "3")].into_iter().collect();

        assert_eq!(row.len(), 2);
        assert_eq!(row.keys().collect::<Vec<_>>(), vec!["x", "y"]);
        assert_eq!(row.get("x"), Some("2"));
        assert_eq!(row.to_string(), r#"x="2" y="3""#);
    }

    #[test]
    fn display_joins_pairs_with_single_space() {
        let row: Row = [("x", "-1"), ("y", "1"), ("z", "0"), ("end", "0")]
            .into_iter()
            .collect();

        assert_eq!(row.to_string(), r#"x="-1" y="1" z="0" end="0""#);
    }

    #[test]
    fn display_does_not_escape_values() {
        let row: Row = [("label", "a&b<c>")].into_iter().collect();

        assert_eq!(row.to_string(), r#"label="a&b<c>""#);
    }

    #[test]
    fn empty_row_displays_as_empty_string() {
        let row = Row::new();

        assert!(row.is_empty());
        assert_eq!(row.to_string(), "");
        assert_eq!(row.get("x"), None);
    }
}
