use std::{
    cell::Cell,
    time::{Duration, Instant},
};

use log::{debug, error, info};

use crate::error::ConvertError;

use super::item::{ItemReader, ItemWriter};

/// Default number of items read before they are handed to the writer.
pub const DEFAULT_CHUNK_SIZE: usize = 100;

#[derive(Debug, PartialEq)]
enum ChunkStatus {
    /// The chunk reached its size, more items may follow
    Full,
    /// The reader is exhausted
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Starting,
    Started,
    Success,
    ReadError,
    WriteError,
}

/// Summary of a completed step.
#[derive(Debug)]
pub struct StepExecution {
    pub name: String,
    pub duration: Duration,
    pub status: StepStatus,
    pub read_count: usize,
    pub write_count: usize,
}

/// Drives one reader into one writer, a chunk at a time.
///
/// The writer is opened first, then chunks are read and written until the
/// reader is exhausted, then the writer is closed. Any read or write error
/// aborts the step: it is logged, recorded in the status and returned, and
/// the writer is not closed, so a failed run never ends with a complete
/// looking output.
pub struct Step<'a, T> {
    name: String,
    reader: &'a dyn ItemReader<T>,
    writer: &'a dyn ItemWriter<T>,
    chunk_size: usize,
    status: Cell<StepStatus>,
    read_count: Cell<usize>,
    write_count: Cell<usize>,
}

impl<T> Step<'_, T> {
    pub fn execute(&self) -> Result<StepExecution, ConvertError> {
        let start = Instant::now();
        self.status.set(StepStatus::Started);

        debug!("Start of step: {}", self.name);

        self.writer.open().inspect_err(|err| {
            self.status.set(StepStatus::WriteError);
            error!("Step {} failed to open writer: {}", self.name, err);
        })?;

        let mut read_items: Vec<T> = Vec::with_capacity(self.chunk_size);

        loop {
            let chunk_status = self.read_chunk(&mut read_items)?;

            self.write_chunk(&read_items)?;

            if chunk_status == ChunkStatus::Finished {
                break;
            }
        }

        self.writer.close().inspect_err(|err| {
            self.status.set(StepStatus::WriteError);
            error!("Step {} failed to close writer: {}", self.name, err);
        })?;

        self.status.set(StepStatus::Success);

        let duration = start.elapsed();
        info!(
            "End of step: {}, read: {}, written: {}, duration: {:?}",
            self.name,
            self.read_count.get(),
            self.write_count.get(),
            duration
        );

        Ok(StepExecution {
            name: self.name.clone(),
            duration,
            status: self.status.get(),
            read_count: self.read_count.get(),
            write_count: self.write_count.get(),
        })
    }

    pub fn get_name(&self) -> &str {
        &self.name
    }

    pub fn get_status(&self) -> StepStatus {
        self.status.get()
    }

    pub fn get_read_count(&self) -> usize {
        self.read_count.get()
    }

    pub fn get_write_count(&self) -> usize {
        self.write_count.get()
    }

    fn read_chunk(&self, read_items: &mut Vec<T>) -> Result<ChunkStatus, ConvertError> {
        debug!("Start reading chunk");
        read_items.clear();

        loop {
            match self.reader.read() {
                Ok(Some(item)) => {
                    read_items.push(item);
                    self.read_count.set(self.read_count.get() + 1);

                    if read_items.len() == self.chunk_size {
                        debug!("End reading chunk: FULL");
                        return Ok(ChunkStatus::Full);
                    }
                }
                Ok(None) => {
                    debug!("End reading chunk: FINISHED");
                    return Ok(ChunkStatus::Finished);
                }
                Err(err) => {
                    self.status.set(StepStatus::ReadError);
                    error!("Error occurred during read item: {}", err);
                    return Err(err);
                }
            }
        }
    }

    fn write_chunk(&self, items: &[T]) -> Result<(), ConvertError> {
        if items.is_empty() {
            return Ok(());
        }

        debug!("Start writing chunk of {} items", items.len());

        self.writer
            .write(items)
            .and_then(|()| self.writer.flush())
            .inspect_err(|err| {
                self.status.set(StepStatus::WriteError);
                error!("ItemWriter error: {}", err);
            })?;

        self.write_count.set(self.write_count.get() + items.len());
        debug!("End writing chunk");

        Ok(())
    }
}

/// Builder for a [`Step`].
///
/// # Examples
///
/// ```
/// use cttx::core::row::Row;
/// use cttx::core::step::{StepBuilder, StepStatus};
/// use cttx::item::csv::csv_reader::CsvRowReaderBuilder;
/// use cttx::item::xml::xml_writer::XmlRowWriterBuilder;
///
/// let reader = CsvRowReaderBuilder::new().from_reader("x,y\n1,2\n3,4\n".as_bytes());
/// let writer = XmlRowWriterBuilder::new().from_writer(Vec::<u8>::new());
///
/// let step = StepBuilder::new(&reader, &writer).name("points").chunk(1).build();
/// let execution = step.execute().unwrap();
///
/// assert_eq!(execution.status, StepStatus::Success);
/// assert_eq!(execution.read_count, 2);
/// assert_eq!(execution.write_count, 2);
/// ```
pub struct StepBuilder<'a, T> {
    name: Option<String>,
    reader: &'a dyn ItemReader<T>,
    writer: &'a dyn ItemWriter<T>,
    chunk_size: usize,
}

impl<'a, T> StepBuilder<'a, T> {
    pub fn new(reader: &'a impl ItemReader<T>, writer: &'a impl ItemWriter<T>) -> Self {
        Self {
            name: None,
            reader,
            writer,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the number of items per chunk. A size of zero is treated as one.
    pub fn chunk(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }

    pub fn build(self) -> Step<'a, T> {
        Step {
            name: self.name.unwrap_or_else(|| "step".to_string()),
            reader: self.reader,
            writer: self.writer,
            chunk_size: self.chunk_size,
            status: Cell::new(StepStatus::Starting),
            read_count: Cell::new(0),
            write_count: Cell::new(0),
        }
    }
}
