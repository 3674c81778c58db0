#![cfg_attr(docsrs, feature(doc_cfg))]

/*!
 # cttx

 Converts a CSV trajectory file into a `Trajectory` XML document, one `P`
 element per CSV row.

 ```text
 x,y,z,end                 <?xml version="1.0" encoding="UTF-8"?>
 -1,1,0,0          ==>     <Trajectory name="trajectoria1" closed="true" order="0">
 1,-1,0,0                      <P x="-1" y="1" z="0" end="0" />
                               <P x="1" y="-1" z="0" end="0" />
                           </Trajectory>
 ```

 ## Core Concepts

- **Row:** one data line of the input, as an ordered list of `(field name, value)`
  text pairs. The order of the header is kept and drives the attribute order.
- **ItemReader:** a single-pass source of items. The CSV row reader reads the
  header line, then produces one `Row` per data line.
- **ItemWriter:** a sink fed chunks of items between `open` and `close`. The XML
  row writer renders each row through an `XmlTemplate` into a file it creates
  exclusively: an existing file is never overwritten.
- **Step:** drives one reader into one writer and stops at the first error.

 ## Features

| **Feature**   | **Description**                                               |
|---------------|---------------------------------------------------------------|
| csv           | Enables the CSV row reader                                    |
| xml           | Enables the XML template and row writer                       |
| full          | Enables all available features, and the `cttx` binary (default) |

 ## Getting Started

```rust
# use cttx::{convert::convert_file, item::xml::xml_template::XmlTemplate};
# fn main() -> Result<(), cttx::ConvertError> {
# let dir = tempfile::tempdir()?;
# let csv_path = dir.path().join("trajectoria1.csv");
# std::fs::write(&csv_path, "x,y,z,end\n-1,1,0,0\n1,-1,0,0\n")?;
let xml_path = dir.path().join("trajectoria1.xml");

let execution = convert_file(&csv_path, &xml_path, b',', &XmlTemplate::default())?;

assert_eq!(execution.write_count, 2);
assert!(std::fs::read_to_string(&xml_path)?.contains(r#"<P x="1" y="-1" z="0" end="0" />"#));
# Ok(())
# }
```

 From the command line:

```text
$ cttx trajectoria1.csv
XML file created: trajectoria1.xml
```
 */

/// Core module: item traits, rows and steps
pub mod core;

/// Error types
pub mod error;

#[doc(inline)]
pub use error::*;

/// Item readers and writers (CSV reader, XML writer)
pub mod item;

#[cfg(all(feature = "csv", feature = "xml"))]
/// File level conversion operations
pub mod convert;

#[cfg(all(feature = "csv", feature = "xml"))]
/// Command line entry point
pub mod cli;
