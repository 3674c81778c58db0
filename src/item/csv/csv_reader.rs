use csv::{ByteRecord, Reader, ReaderBuilder, Terminator, Trim};
use encoding_rs::mem::decode_latin1;
use log::debug;
use std::{
    cell::RefCell,
    fs::File,
    io::{self, Read},
    path::Path,
};

use crate::{
    core::{
        item::{ItemReader, ItemReaderResult},
        row::Row,
    },
    error::{ConvertError, with_path},
};

/// Default field delimiter.
pub const CSV_DELIMITER: u8 = b',';

/// Reads a delimited file into [`Row`] values, one per data line.
///
/// The first line is the header: it supplies the field names of every
/// following row. Bytes are decoded as ISO-8859-1, so any byte sequence is
/// accepted without a decoding failure.
///
/// The reader is single pass. It owns its source, so a file opened with
/// [`CsvRowReaderBuilder::from_path`] is closed as soon as the reader is
/// dropped, whether or not every row was read.
///
/// # Examples
///
/// ```
/// use cttx::item::csv::csv_reader::CsvRowReaderBuilder;
/// use cttx::core::item::ItemReader;
///
/// let data = "\
/// x,y,z,end
/// -1,1,0,0
/// 1,-1,0,0
/// ";
///
/// let reader = CsvRowReaderBuilder::new().from_reader(data.as_bytes());
///
/// let row = reader.read().unwrap().unwrap();
/// assert_eq!(row.get("x"), Some("-1"));
/// assert_eq!(row.keys().collect::<Vec<_>>(), vec!["x", "y", "z", "end"]);
///
/// let row = reader.read().unwrap().unwrap();
/// assert_eq!(row.get("y"), Some("-1"));
///
/// assert!(reader.read().unwrap().is_none());
/// ```
pub struct CsvRowReader<R> {
    /// CSV parser over the source
    ///
    /// Uses `RefCell` so rows can be pulled through the `&self` signature of
    /// `ItemReader::read`.
    reader: RefCell<Reader<R>>,
    /// Decoded header, filled on the first read
    names: RefCell<Option<Vec<String>>>,
}

impl<R: Read> CsvRowReader<R> {
    /// Field names from the header line, in file order.
    ///
    /// Returns an empty list for an empty source.
    pub fn headers(&self) -> Result<Vec<String>, ConvertError> {
        if let Some(names) = self.names.borrow().as_ref() {
            return Ok(names.clone());
        }
        let names = decode_record(self.reader.borrow_mut().byte_headers()?);
        *self.names.borrow_mut() = Some(names.clone());
        Ok(names)
    }
}

impl<R: Read> ItemReader<Row> for CsvRowReader<R> {
    /// Reads the next data line and binds it to the header's field names.
    ///
    /// # Returns
    /// - `Ok(Some(row))` if a line was read
    /// - `Ok(None)` once the source is exhausted
    /// - `Err(ConvertError::FieldCount { .. })` if the line does not have as
    ///   many fields as the header
    /// - `Err(ConvertError::Io(_))` if the source could not be read
    fn read(&self) -> ItemReaderResult<Row> {
        let mut record = ByteRecord::new();
        if !self.reader.borrow_mut().read_byte_record(&mut record)? {
            return Ok(None);
        }

        let names = self.headers()?;
        let row = names
            .iter()
            .zip(record.iter())
            .map(|(name, value)| (name.as_str(), decode_latin1(value)))
            .collect();

        Ok(Some(row))
    }
}

impl<R: Read> Iterator for CsvRowReader<R> {
    type Item = Result<Row, ConvertError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read().transpose()
    }
}

fn decode_record(record: &ByteRecord) -> Vec<String> {
    record
        .iter()
        .map(|field| decode_latin1(field).into_owned())
        .collect()
}

/// A builder for configuring CSV row reading.
///
/// # Default Configuration
///
/// - Delimiter: comma (,)
/// - Terminator: CRLF, which also accepts a lone `\n` or `\r`
/// - Trimming: none, values are kept verbatim
///
/// The first line is always read as the header.
///
/// # Examples
///
/// ```
/// use cttx::item::csv::csv_reader::CsvRowReaderBuilder;
/// use cttx::core::item::ItemReader;
///
/// let reader = CsvRowReaderBuilder::new()
///     .delimiter(b';')
///     .from_reader("x;y\n1;2\n".as_bytes());
///
/// let row = reader.read().unwrap().unwrap();
/// assert_eq!(row.get("y"), Some("2"));
/// ```
pub struct CsvRowReaderBuilder {
    delimiter: u8,
    terminator: Terminator,
    trim: Trim,
}

impl Default for CsvRowReaderBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvRowReaderBuilder {
    pub fn new() -> Self {
        Self {
            delimiter: CSV_DELIMITER,
            terminator: Terminator::CRLF,
            trim: Trim::None,
        }
    }

    /// Sets the field delimiter.
    pub fn delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets the line terminator.
    ///
    /// - `Terminator::CRLF`: accepts `\r\n`, `\n` and `\r` (default)
    /// - `Terminator::Any(byte)`: a single custom terminator byte
    pub fn terminator(mut self, terminator: Terminator) -> Self {
        self.terminator = terminator;
        self
    }

    /// Sets whitespace trimming for header names and values.
    pub fn trim(mut self, trim: Trim) -> Self {
        self.trim = trim;
        self
    }

    /// Creates a `CsvRowReader` from any source implementing `Read`.
    ///
    /// Parsing is strict: a line whose field count differs from the header
    /// is reported as [`ConvertError::FieldCount`].
    pub fn from_reader<R: Read>(self, rdr: R) -> CsvRowReader<R> {
        let reader = ReaderBuilder::new()
            .trim(self.trim)
            .delimiter(self.delimiter)
            .terminator(self.terminator)
            .has_headers(true)
            .flexible(false)
            .from_reader(rdr);

        CsvRowReader {
            reader: RefCell::new(reader),
            names: RefCell::new(None),
        }
    }

    /// Opens `path` for reading and creates a `CsvRowReader` over it.
    ///
    /// # Errors
    ///
    /// Returns `ConvertError::Io` if the file cannot be opened (missing,
    /// permission denied, is a directory, ...).
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use cttx::item::csv::csv_reader::CsvRowReaderBuilder;
    ///
    /// let reader = CsvRowReaderBuilder::new().from_path("trajectoria1.csv").unwrap();
    /// for row in reader {
    ///     println!("{}", row.unwrap());
    /// }
    /// ```
    pub fn from_path<P: AsRef<Path>>(self, path: P) -> Result<CsvRowReader<File>, ConvertError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|err| with_path(err, path))?;
        if file.metadata().map_err(|err| with_path(err, path))?.is_dir() {
            return Err(ConvertError::Io(with_path(
                io::Error::new(io::ErrorKind::IsADirectory, "is a directory"),
                path,
            )));
        }
        debug!("Opened CSV file {}", path.display());
        Ok(self.from_reader(file))
    }
}
