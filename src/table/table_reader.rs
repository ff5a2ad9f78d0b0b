use std::fs;
use std::io;
use std::path::Path;

use crate::error::Result;
use super::decision_table::DecisionTable;
use super::table_parser::TableParser;


/// Reads the whole file at `path` as text.
#[inline]
pub fn read_file<P: AsRef<Path>>(path: P) -> io::Result<String> {
    fs::read_to_string(path)
}


/// A struct that returns [`DecisionTable`] read from a file.
/// # Example
/// The following code reads a comma separated file with a header line.
/// ```no_run
/// use id3tree::TableReader;
///
/// let filename = "/path/to/csv/file.csv";
/// let table = TableReader::new()
///     .file(filename)
///     .has_header(true)
///     .read()
///     .unwrap();
/// ```
pub struct TableReader<P> {
    file: Option<P>,
    parser: TableParser,
}


impl<P> Default for TableReader<P> {
    fn default() -> Self {
        Self::new()
    }
}


impl<P> TableReader<P> {
    /// Construct a new instance of [`TableReader`].
    pub fn new() -> Self {
        Self {
            file: None,
            parser: TableParser::new(),
        }
    }


    /// Set the flag whether the file has the header row or not.
    /// Default is `false.`
    pub fn has_header(mut self, flag: bool) -> Self {
        self.parser = self.parser.has_header(flag);
        self
    }


    /// Set the field delimiter. Default is `,`.
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.parser = self.parser.delimiter(delimiter);
        self
    }
}


impl<P> TableReader<P>
    where P: AsRef<Path>
{
    /// Set the file name.
    pub fn file(mut self, file: P) -> Self {
        self.file = Some(file);
        self
    }


    /// Reads the file and parses it.
    /// This method consumes `self.`
    pub fn read(self) -> Result<DecisionTable> {
        let file = self.file.ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                "The file name is not set. Use `TableReader::file`.",
            )
        })?;
        let text = read_file(file)?;
        self.parser.parse(&text)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn missing_file_name() {
        let err = TableReader::<&str>::new().read().unwrap_err();
        assert!(matches!(err, Error::Io(ref e) if e.kind() == io::ErrorKind::InvalidInput));
    }


    #[test]
    fn missing_file() {
        let err = TableReader::new()
            .file("/no/such/dir/table.csv")
            .read()
            .unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
