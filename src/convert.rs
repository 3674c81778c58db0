use std::{
    fs::File,
    io::{self, Write},
    path::{self, Path},
    slice,
};

use log::{info, warn};

use crate::{
    core::{
        item::ItemWriter,
        row::Row,
        step::{StepBuilder, StepExecution},
    },
    error::ConvertError,
    item::{
        csv::csv_reader::{CsvRowReader, CsvRowReaderBuilder},
        xml::{xml_template::XmlTemplate, xml_writer::XmlRowWriterBuilder},
    },
};

/// Extension expected on input files.
pub const CSV_EXTENSION: &str = ".csv";

/// Extension given to output files.
pub const XML_EXTENSION: &str = ".xml";

/// Returns `filename` with its extension replaced by `new_ext`.
///
/// When the current extension is not `expected_ext` (compared without regard
/// to case) a warning line is written to `out`; the replacement happens
/// anyway.
///
/// The extension starts at the last `.` of the final path component; leading
/// dots of that component do not start an extension.
///
/// # Examples
///
/// ```
/// use cttx::convert::replace_extension;
///
/// let mut out = Vec::new();
/// let xml = replace_extension("trajectory.CSV", ".csv", ".xml", &mut out).unwrap();
///
/// assert_eq!(xml, "trajectory.xml");
/// assert!(out.is_empty());
/// ```
pub fn replace_extension<W: Write>(
    filename: &str,
    expected_ext: &str,
    new_ext: &str,
    out: &mut W,
) -> io::Result<String> {
    let (base, extension) = split_extension(filename);
    if extension.to_lowercase() != expected_ext.to_lowercase() {
        warn!("{} does not have a {} extension", filename, expected_ext);
        writeln!(
            out,
            "Warning: {} does not have a {} extension.",
            filename, expected_ext
        )?;
    }
    Ok(format!("{}{}", base, new_ext))
}

fn split_extension(filename: &str) -> (&str, &str) {
    let name_start = filename.rfind(path::is_separator).map_or(0, |i| i + 1);
    let name = &filename[name_start..];
    let leading_dots = name.len() - name.trim_start_matches('.').len();
    match name[leading_dots..].rfind('.') {
        Some(dot) => filename.split_at(name_start + leading_dots + dot),
        None => (filename, ""),
    }
}

/// Opens `csv_path` and returns a reader producing one [`Row`] per data line.
///
/// # Errors
///
/// Fails with `ConvertError::Io` if the file cannot be opened.
pub fn read_csv_rows<P: AsRef<Path>>(
    csv_path: P,
    delimiter: u8,
) -> Result<CsvRowReader<File>, ConvertError> {
    CsvRowReaderBuilder::new()
        .delimiter(delimiter)
        .from_path(csv_path)
}

/// Writes `rows` into a new file at `xml_path`, rendered with `template`.
///
/// Returns the number of rows written.
///
/// # Errors
///
/// Fails with `ConvertError::Io` if `xml_path` already exists, cannot be
/// created, or a write fails. An existing file is never modified.
pub fn write_xml_rows<I, P>(
    rows: I,
    xml_path: P,
    template: &XmlTemplate,
) -> Result<usize, ConvertError>
where
    I: IntoIterator<Item = Row>,
    P: AsRef<Path>,
{
    let writer = XmlRowWriterBuilder::new()
        .template(template.clone())
        .from_path(xml_path)?;

    writer.open()?;
    let mut count = 0;
    for row in rows {
        writer.write(slice::from_ref(&row))?;
        count += 1;
    }
    writer.close()?;

    Ok(count)
}

/// Converts the delimited file at `csv_path` into a new XML file at
/// `xml_path`.
///
/// The input is opened before the output is created, so a missing input
/// never leaves an output file behind.
pub fn convert_file<P, Q>(
    csv_path: P,
    xml_path: Q,
    delimiter: u8,
    template: &XmlTemplate,
) -> Result<StepExecution, ConvertError>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let (csv_path, xml_path) = (csv_path.as_ref(), xml_path.as_ref());

    info!(
        "Converting {} into {}",
        csv_path.display(),
        xml_path.display()
    );

    let reader = read_csv_rows(csv_path, delimiter)?;
    let writer = XmlRowWriterBuilder::new()
        .template(template.clone())
        .from_path(xml_path)?;

    let step = StepBuilder::new(&reader, &writer)
        .name(format!("{} -> {}", csv_path.display(), xml_path.display()))
        .build();

    step.execute()
}
