#![allow(dead_code)]

mod mocks;

pub use mocks::MockFile;

use std::path::PathBuf;

use cttx::core::row::Row;
use quick_xml::{
    Reader,
    events::{BytesStart, Event},
};

/// Directory holding the committed fixtures.
pub fn data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("data")
}

/// The four trajectory points of `trajectoria1.csv`.
pub fn sample_points() -> Vec<[(&'static str, f64); 4]> {
    vec![
        [("x", -1.0), ("y", 1.0), ("z", 0.0), ("end", 0.0)],
        [("x", 1.0), ("y", -1.0), ("z", 0.0), ("end", 0.0)],
        [("x", 1.0), ("y", 1.0), ("z", 0.0), ("end", 0.0)],
        [("x", -1.0), ("y", -1.0), ("z", 0.0), ("end", 0.0)],
    ]
}

/// `sample_points` as text rows, the way a reader would produce them.
pub fn sample_rows() -> Vec<Row> {
    sample_points()
        .iter()
        .map(|point| {
            point
                .iter()
                .map(|(key, value)| (*key, value.to_string()))
                .collect()
        })
        .collect()
}

/// Attribute values parsed as numbers, keeping attribute order.
pub fn as_numbers<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Vec<(String, f64)> {
    pairs
        .into_iter()
        .map(|(key, value)| {
            let number = value
                .trim()
                .parse::<f64>()
                .unwrap_or_else(|_| panic!("{key}={value:?} is not a number"));
            (key.to_string(), number)
        })
        .collect()
}

pub fn expected_numbers() -> Vec<Vec<(String, f64)>> {
    sample_points()
        .iter()
        .map(|point| point.iter().map(|(key, value)| (key.to_string(), *value)).collect())
        .collect()
}

#[derive(Debug, Default, PartialEq)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<(String, String)>,
}

impl Element {
    fn from_start(start: &BytesStart) -> Self {
        let name = String::from_utf8(start.name().as_ref().to_vec()).unwrap();
        let attributes = start
            .attributes()
            .map(|attr| {
                let attr = attr.unwrap();
                (
                    String::from_utf8(attr.key.as_ref().to_vec()).unwrap(),
                    String::from_utf8(attr.value.to_vec()).unwrap(),
                )
            })
            .collect();
        Element { name, attributes }
    }

    pub fn attribute_pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }
}

/// A parsed flat document: one root element and its direct children.
#[derive(Debug, Default)]
pub struct FlatDocument {
    pub root: Element,
    pub children: Vec<Element>,
}

pub fn parse_flat_document(xml: &str) -> FlatDocument {
    let mut reader = Reader::from_str(xml);
    let mut document = FlatDocument::default();
    let mut depth = 0usize;
    let mut roots = 0usize;

    loop {
        match reader.read_event().unwrap() {
            Event::Start(start) => {
                if depth == 0 {
                    document.root = Element::from_start(&start);
                    roots += 1;
                } else {
                    assert_eq!(depth, 1, "unexpected nested element");
                    document.children.push(Element::from_start(&start));
                }
                depth += 1;
            }
            Event::Empty(start) => {
                assert_eq!(depth, 1, "unexpected empty element outside the root");
                document.children.push(Element::from_start(&start));
            }
            Event::End(_) => depth -= 1,
            Event::Eof => break,
            _ => {}
        }
    }

    assert_eq!(roots, 1, "expected a single root element");
    assert_eq!(depth, 0, "unbalanced document");
    document
}

/// Checks the trajectory document structure and that its points equal
/// `sample_points`.
pub fn assert_trajectory_document(xml: &str) {
    let document = parse_flat_document(xml);

    assert_eq!(document.root.name, "Trajectory");
    assert_eq!(
        document.root.attributes,
        vec![
            ("name".to_string(), "trajectoria1".to_string()),
            ("closed".to_string(), "true".to_string()),
            ("order".to_string(), "0".to_string()),
        ]
    );

    assert_eq!(document.children.len(), 4);
    assert!(document.children.iter().all(|child| child.name == "P"));

    let points: Vec<Vec<(String, f64)>> = document
        .children
        .iter()
        .map(|child| as_numbers(child.attribute_pairs()))
        .collect();
    assert_eq!(points, expected_numbers());
}
