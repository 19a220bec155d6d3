use routegraph::{GraphDescription, LoadError, RouteGraph};
use std::fs::File;
use std::io::{BufReader, BufWriter, Error, ErrorKind, Write};
use std::path::Path;

/// Writes the graph description as a bincode snapshot.
pub fn save_snapshot<P: AsRef<Path>>(description: &GraphDescription, path: P) -> std::io::Result<()> {
  let mut file = BufWriter::new(File::create(path)?);
  bincode::serialize_into(&mut file, description)
    .map_err(|e| Error::new(ErrorKind::InvalidData, e))?;
  file.flush()
}

pub fn read_snapshot<P: AsRef<Path>>(path: P) -> Result<GraphDescription, LoadError> {
  let file = BufReader::new(File::open(path)?);
  let description: GraphDescription =
    bincode::deserialize_from(file).map_err(|e| Error::new(ErrorKind::InvalidData, e))?;
  Ok(description)
}

/// Reads a snapshot and builds the graph, with the same checks as for a text file.
pub fn load_snapshot<P: AsRef<Path>>(path: P) -> Result<RouteGraph, LoadError> {
  RouteGraph::build(&read_snapshot(path)?)
}
