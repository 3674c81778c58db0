use crate::{core::row::Row, error::ConvertError};

/// Substitution point of the row template.
pub const ATTRS_PLACEHOLDER: &str = "{attrs}";

const TRAJECTORY_HEAD: [&str; 2] = [
    "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n",
    "<Trajectory name=\"trajectoria1\" closed=\"true\" order=\"0\">\n",
];
const TRAJECTORY_ROW: &str = "    <P {attrs} />\n";
const TRAJECTORY_TAIL: [&str; 1] = ["</Trajectory>\n"];

/// Text skeleton of the produced XML document.
///
/// - `head`: lines written verbatim before the first row
/// - `row`: template of a row line, holding exactly one `{attrs}`
/// - `tail`: lines written verbatim after the last row
///
/// Lines carry their own terminators; nothing is added when they are written.
///
/// The default template produces a `Trajectory` document with one `P` element
/// per row.
///
/// # Examples
///
/// ```
/// use cttx::core::row::Row;
/// use cttx::item::xml::xml_template::XmlTemplate;
///
/// let row: Row = [("x", "1"), ("y", "-1")].into_iter().collect();
///
/// assert_eq!(
///     XmlTemplate::default().render_row(&row),
///     "    <P x=\"1\" y=\"-1\" />\n"
/// );
///
/// let template = XmlTemplate::new(
///     vec!["<points>\n".to_string()],
///     "<point {attrs}/>\n",
///     vec!["</points>\n".to_string()],
/// )
/// .unwrap();
/// assert_eq!(template.render_row(&row), "<point x=\"1\" y=\"-1\"/>\n");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlTemplate {
    head: Vec<String>,
    row: String,
    tail: Vec<String>,
}

impl XmlTemplate {
    /// Builds a template, checking that `row` has exactly one `{attrs}`.
    pub fn new(
        head: Vec<String>,
        row: impl Into<String>,
        tail: Vec<String>,
    ) -> Result<Self, ConvertError> {
        let row = row.into();
        let placeholders = row.matches(ATTRS_PLACEHOLDER).count();
        if placeholders != 1 {
            return Err(ConvertError::Template(format!(
                "row template must contain {} exactly once, found {} in {:?}",
                ATTRS_PLACEHOLDER, placeholders, row
            )));
        }
        Ok(Self { head, row, tail })
    }

    pub fn head(&self) -> &[String] {
        &self.head
    }

    pub fn row_template(&self) -> &str {
        &self.row
    }

    pub fn tail(&self) -> &[String] {
        &self.tail
    }

    /// Renders one row line: the row's `key="value"` pairs, joined by a
    /// single space, replace the `{attrs}` substitution point.
    ///
    /// Values are inserted as is, without XML escaping.
    pub fn render_row(&self, row: &Row) -> String {
        self.row.replacen(ATTRS_PLACEHOLDER, &row.to_string(), 1)
    }
}

impl Default for XmlTemplate {
    fn default() -> Self {
        Self {
            head: TRAJECTORY_HEAD.iter().map(|line| line.to_string()).collect(),
            row: TRAJECTORY_ROW.to_string(),
            tail: TRAJECTORY_TAIL.iter().map(|line| line.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::XmlTemplate;
    use crate::{core::row::Row, error::ConvertError};

    #[test]
    fn default_template_is_trajectory_document() {
        let template = XmlTemplate::default();

        assert_eq!(
            template.head().concat(),
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <Trajectory name=\"trajectoria1\" closed=\"true\" order=\"0\">\n"
        );
        assert_eq!(template.row_template(), "    <P {attrs} />\n");
        assert_eq!(template.tail().concat(), "</Trajectory>\n");
    }

    #[test]
    fn renders_pairs_in_row_order() {
        let row: Row = [("x", "-1"), ("y", "1"), ("z", "0"), ("end", "0")]
            .into_iter()
            .collect();

        assert_eq!(
            XmlTemplate::default().render_row(&row),
            "    <P x=\"-1\" y=\"1\" z=\"0\" end=\"0\" />\n"
        );
    }

    #[test]
    fn repeated_name_renders_a_single_attribute() {
        let row: Row = [("x", "1"), ("x", "2"), ("y", "3")].into_iter().collect();

        assert_eq!(
            XmlTemplate::default().render_row(&row),
            "    <P x=\"2\" y=\"3\" />\n"
        );
    }

    #[test]
    fn empty_row_leaves_bare_element() {
        assert_eq!(XmlTemplate::default().render_row(&Row::new()), "    <P  />\n");
    }

    #[test]
    fn rejects_row_template_without_placeholder() {
        let result = XmlTemplate::new(vec![], "<P/>\n", vec![]);

        assert!(matches!(result, Err(ConvertError::Template(_))));
    }

    #[test]
    fn rejects_row_template_with_two_placeholders() {
        let result = XmlTemplate::new(vec![], "<P {attrs} {attrs}/>\n", vec![]);

        assert!(matches!(result, Err(ConvertError::Template(_))));
    }

    #[test]
    fn substituted_values_are_not_expanded_again() {
        let template = XmlTemplate::new(vec![], "<P {attrs}/>", vec![]).unwrap();
        let row: Row = [("label", "{attrs}")].into_iter().collect();

        assert_eq!(template.render_row(&row), "<P label=\"{attrs}\"/>");
    }
}
