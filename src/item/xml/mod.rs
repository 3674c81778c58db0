/// XML output built from a fixed text skeleton.
///
/// The document is not built as a tree: a [`XmlTemplate`](xml_template::XmlTemplate)
/// provides literal head and tail lines, and a row line template into which
/// each row's attributes are substituted.
pub mod xml_template;

pub mod xml_writer;
