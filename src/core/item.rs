use crate::error::ConvertError;

/// Result of a single [`ItemReader::read`] call.
///
/// - `Ok(Some(item))` when an item was read
/// - `Ok(None)` when the source is exhausted
/// - `Err(error)` when reading failed
pub type ItemReaderResult<R> = Result<Option<R>, ConvertError>;

/// Result of the [`ItemWriter`] operations.
pub type ItemWriterResult = Result<(), ConvertError>;

/// A source of items, consumed one item at a time.
///
/// Readers are single pass: once `read` returned `Ok(None)` the source is
/// exhausted and a new reader has to be built to iterate again.
pub trait ItemReader<R> {
    fn read(&self) -> ItemReaderResult<R>;
}

/// A sink of items, fed one chunk at a time.
///
/// The lifecycle is `open`, any number of `write` calls, then `close`.
/// `close` is only called once every chunk has been written successfully.
pub trait ItemWriter<W> {
    fn write(&self, items: &[W]) -> ItemWriterResult;

    fn flush(&self) -> ItemWriterResult {
        Ok(())
    }

    fn open(&self) -> ItemWriterResult {
        Ok(())
    }

    fn close(&self) -> ItemWriterResult {
        self.flush()
    }
}
