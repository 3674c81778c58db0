use crate::core::item::{ItemWriter, ItemWriterResult};
use crate::core::row::Row;
use crate::error::{ConvertError, with_path};
use crate::item::xml::xml_template::XmlTemplate;
use log::debug;
use std::cell::RefCell;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

/// A writer rendering rows into an XML document through an [`XmlTemplate`].
///
/// `open` writes the template head, every `write` appends one rendered line
/// per row, and `close` writes the tail and flushes. Output is buffered;
/// write failures, including those surfacing on the final flush, are
/// returned rather than swallowed.
///
/// # Examples
///
/// ```
/// use cttx::core::item::ItemWriter;
/// use cttx::core::row::Row;
/// use cttx::item::xml::xml_writer::XmlRowWriterBuilder;
///
/// let writer = XmlRowWriterBuilder::new().from_writer(Vec::<u8>::new());
///
/// let rows: Vec<Row> = vec![
///     [("x", "-1"), ("y", "1")].into_iter().collect(),
///     [("x", "1"), ("y", "-1")].into_iter().collect(),
/// ];
///
/// writer.open().unwrap();
/// writer.write(&rows).unwrap();
/// writer.close().unwrap();
///
/// let xml = String::from_utf8(writer.into_inner().unwrap()).unwrap();
/// assert_eq!(
///     xml,
///     "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
///      <Trajectory name=\"trajectoria1\" closed=\"true\" order=\"0\">\n    \
///      <P x=\"-1\" y=\"1\" />\n    \
///      <P x=\"1\" y=\"-1\" />\n\
///      </Trajectory>\n"
/// );
/// ```
pub struct XmlRowWriter<W: Write = File> {
    writer: RefCell<BufWriter<W>>,
    template: XmlTemplate,
}

impl<W: Write> XmlRowWriter<W> {
    fn write_lines(&self, lines: &[String]) -> ItemWriterResult {
        let mut writer = self.writer.borrow_mut();
        for line in lines {
            writer.write_all(line.as_bytes())?;
        }
        Ok(())
    }

    /// Flushes pending output and returns the underlying sink.
    pub fn into_inner(self) -> Result<W, ConvertError> {
        self.writer
            .into_inner()
            .into_inner()
            .map_err(|err| ConvertError::Io(err.into_error()))
    }
}

impl<W: Write> ItemWriter<Row> for XmlRowWriter<W> {
    fn write(&self, items: &[Row]) -> ItemWriterResult {
        let mut writer = self.writer.borrow_mut();
        for row in items {
            writer.write_all(self.template.render_row(row).as_bytes())?;
        }
        Ok(())
    }

    fn flush(&self) -> ItemWriterResult {
        self.writer.borrow_mut().flush()?;
        Ok(())
    }

    fn open(&self) -> ItemWriterResult {
        self.write_lines(self.template.head())
    }

    fn close(&self) -> ItemWriterResult {
        self.write_lines(self.template.tail())?;
        self.flush()
    }
}

/// Builder for [`XmlRowWriter`].
///
/// Uses [`XmlTemplate::default`] unless another template is set.
#[derive(Default)]
pub struct XmlRowWriterBuilder {
    template: XmlTemplate,
}

impl XmlRowWriterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the template the document is rendered with.
    pub fn template(mut self, template: XmlTemplate) -> Self {
        self.template = template;
        self
    }

    /// Creates a brand new file at `path` and a writer targeting it.
    ///
    /// The file is created exclusively: if anything already exists at `path`
    /// this fails with an `AlreadyExists` I/O error and leaves it untouched.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use cttx::item::xml::xml_writer::XmlRowWriterBuilder;
    ///
    /// let writer = XmlRowWriterBuilder::new().from_path("trajectoria1.xml").unwrap();
    /// ```
    pub fn from_path<P: AsRef<Path>>(self, path: P) -> Result<XmlRowWriter<File>, ConvertError> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .map_err(|err| with_path(err, path))?;
        debug!("Created XML file {}", path.display());
        Ok(self.from_writer(file))
    }

    /// Creates a writer targeting any sink implementing `Write`.
    pub fn from_writer<W: Write>(self, wtr: W) -> XmlRowWriter<W> {
        XmlRowWriter {
            writer: RefCell::new(BufWriter::new(wtr)),
            template: self.template,
        }
    }
}
