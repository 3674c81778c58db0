use std::{ffi::OsStr, io::Write};

use log::info;

use crate::{
    convert::{CSV_EXTENSION, XML_EXTENSION, convert_file, replace_extension},
    error::{CliError, ConvertError},
    item::{csv::csv_reader::CSV_DELIMITER, xml::xml_template::XmlTemplate},
};

/// Runs the command line tool.
///
/// `args` is the full argument vector, program name included; exactly one
/// argument, the input CSV path, must follow the program name. The output
/// path is the input path with a `.xml` extension. Warnings and the final
/// confirmation go to `out`.
///
/// The input path must be valid UTF-8; anything else is rejected with
/// [`CliError::InvalidArgument`] before any file is touched.
///
/// Returns the path of the created XML file.
pub fn run<A, W>(args: &[A], out: &mut W) -> Result<String, CliError>
where
    A: AsRef<OsStr>,
    W: Write,
{
    let [_, csv_filename] = args else {
        return Err(CliError::Usage);
    };
    let csv_filename = csv_filename.as_ref();
    let Some(csv_filename) = csv_filename.to_str() else {
        return Err(CliError::InvalidArgument(
            csv_filename.to_string_lossy().into_owned(),
        ));
    };

    let xml_filename = replace_extension(csv_filename, CSV_EXTENSION, XML_EXTENSION, out)
        .map_err(ConvertError::from)?;

    let execution = convert_file(
        csv_filename,
        &xml_filename,
        CSV_DELIMITER,
        &XmlTemplate::default(),
    )?;
    info!(
        "{}: {} points in {:?}",
        execution.name, execution.write_count, execution.duration
    );

    writeln!(out, "XML file created: {}", xml_filename).map_err(ConvertError::from)?;

    Ok(xml_filename)
}
