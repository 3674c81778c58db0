/// CSV support for reading delimited tabular data into rows.
///
/// The header line names the fields; every following line becomes one
/// [`Row`](crate::core::row::Row) with the values bound to those names in
/// header order. Input bytes are decoded as ISO-8859-1.
///
/// # Examples
///
/// ```
/// use cttx::item::csv::csv_reader::CsvRowReaderBuilder;
///
/// let data = "\
/// x,y,z,end
/// -1,1,0,0
/// 1,-1,0,0
/// 1,1,0,0
/// ";
///
/// let rows = CsvRowReaderBuilder::new()
///     .from_reader(data.as_bytes())
///     .collect::<Result<Vec<_>, _>>()
///     .unwrap();
///
/// assert_eq!(rows.len(), 3);
/// assert_eq!(rows[2].get("x"), Some("1"));
/// ```
pub mod csv_reader;
