//! Loading route graphs from text files and bincode snapshots.

mod graph_reader;
mod graph_serde;

pub use graph_reader::{load_graph_file, read_graph, read_graph_file};
pub use graph_serde::{load_snapshot, read_snapshot, save_snapshot};

use routegraph::{LoadError, RouteGraph};
use std::path::Path;

/// Loads a graph from a `.bin` snapshot or, for any other extension, a text graph file.
pub fn load_graph<P: AsRef<Path>>(path: P) -> Result<RouteGraph, LoadError> {
  let path = path.as_ref();
  if is_snapshot(path) {
    load_snapshot(path)
  } else {
    load_graph_file(path)
  }
}

pub fn is_snapshot(path: &Path) -> bool {
  path.extension().map_or(false, |ext| ext == "bin")
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::io::Write;

  #[test]
  fn test_load_graph_picks_format_by_extension() {
    let dir = tempfile::tempdir().unwrap();
    let text_path = dir.path().join("tiny.graph");
    let bin_path = dir.path().join("tiny.bin");

    let mut file = std::fs::File::create(&text_path).unwrap();
    write!(file, "2 1\na 0.0 0.0\nb 0.0 1.0\n0 1\n").unwrap();
    drop(file);
    save_snapshot(&read_graph_file(&text_path).unwrap(), &bin_path).unwrap();

    assert!(is_snapshot(&bin_path));
    assert!(!is_snapshot(&text_path));
    for path in &[text_path, bin_path] {
      let graph = load_graph(path).unwrap();
      assert_eq!(graph.number_of_vertices(), 2);
      assert_eq!(graph.number_of_edges(), 1);
    }
  }
}
