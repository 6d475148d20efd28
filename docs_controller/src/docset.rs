use common::models::controller::DocSet;
use std::fmt::{Display, Formatter};
use std::fs::File;
use std::io::BufReader;

#[derive(Debug)]
pub enum DocSetError {
    FileOpen(std::io::Error),
    Parse(serde_json::Error),
}

impl Display for DocSetError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let (explanation, error) = match self {
            DocSetError::FileOpen(e) => ("Error while opening controllers file", e.to_string()),
            DocSetError::Parse(e) => ("Error while parsing controllers file", e.to_string()),
        };
        write!(f, "{explanation}: {error}")
    }
}

impl std::error::Error for DocSetError {}

/// Reads the controller metadata and endpoint descriptions from the JSON
/// file named in the configuration.
pub fn load_doc_set(path: &str) -> Result<DocSet, DocSetError> {
    let file = File::open(path).map_err(DocSetError::FileOpen)?;
    serde_json::from_reader(BufReader::new(file)).map_err(DocSetError::Parse)
}
