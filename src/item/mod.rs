#[cfg(feature = "csv")]
/// This module provides the CSV row reader.
pub mod csv;

#[cfg(feature = "xml")]
/// This module provides the XML template and the templated row writer.
pub mod xml;
