/// Reader and writer traits
pub mod item;

/// The row type flowing from readers to writers
pub mod row;

/// Sequential reader-to-writer driver
pub mod step;
