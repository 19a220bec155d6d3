use routegraph::{EdgeRecord, GraphDescription, LoadError, RouteGraph, VertexRecord};
use std::fmt::Display;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

// Upper bound for pre-allocation, the header is not trusted with more
const MAX_RESERVE: usize = 1 << 16;

/// Reads a graph in the text format:
///
/// ```text
/// <number of vertices> <number of edges>
/// <name> <latitude> <longitude>     (once per vertex)
/// <index> <index>                   (once per edge, 0-based vertex positions)
/// ```
///
/// Anything after the declared edges is ignored.
pub fn read_graph<R: BufRead>(reader: R) -> Result<GraphDescription, LoadError> {
  let mut lines = reader
    .lines()
    .enumerate()
    .map(|(i, line)| line.map(|text| (i + 1, text)));

  let (line, header) = lines.next().ok_or(LoadError::MissingHeader)??;
  let (declared_vertices, declared_edges) = parse_header(line, &header)?;

  let mut vertices = Vec::with_capacity(declared_vertices.min(MAX_RESERVE));
  for found in 0..declared_vertices {
    let (line, text) = lines.next().ok_or(LoadError::Truncated {
      section: "vertex",
      expected: declared_vertices,
      found,
    })??;
    vertices.push(parse_vertex(line, &text)?);
  }

  let mut edges = Vec::with_capacity(declared_edges.min(MAX_RESERVE));
  for found in 0..declared_edges {
    let (line, text) = lines.next().ok_or(LoadError::Truncated {
      section: "edge",
      expected: declared_edges,
      found,
    })??;
    edges.push(parse_edge(line, &text)?);
  }

  if let Some(Ok((line, _))) = lines.find(|l| matches!(l, Ok((_, text)) if !text.trim().is_empty())) {
    debug!(line, "ignoring content after the declared edges");
  }

  Ok(GraphDescription {
    declared_vertices,
    declared_edges,
    vertices,
    edges,
  })
}

pub fn read_graph_file<P: AsRef<Path>>(path: P) -> Result<GraphDescription, LoadError> {
  let file = File::open(path)?;
  read_graph(BufReader::new(file))
}

/// Reads a text graph file and builds the graph from it.
pub fn load_graph_file<P: AsRef<Path>>(path: P) -> Result<RouteGraph, LoadError> {
  RouteGraph::build(&read_graph_file(path)?)
}

fn fields<'a>(line: usize, text: &'a str, expected: usize, what: &str) -> Result<Vec<&'a str>, LoadError> {
  let fields: Vec<&str> = text.split_whitespace().collect();
  if fields.len() != expected {
    return Err(LoadError::Malformed {
      line,
      message: format!(
        "expected {} fields for {}, found {}",
        expected,
        what,
        fields.len()
      ),
    });
  }
  Ok(fields)
}

fn parse_field<T>(line: usize, field: &str, what: &str) -> Result<T, LoadError>
where
  T: FromStr,
  T::Err: Display,
{
  field.parse::<T>().map_err(|e| LoadError::Malformed {
    line,
    message: format!("invalid {} '{}': {}", what, field, e),
  })
}

fn parse_header(line: usize, text: &str) -> Result<(usize, usize), LoadError> {
  let header = fields(line, text, 2, "header")?;
  Ok((
    parse_field(line, header[0], "vertex count")?,
    parse_field(line, header[1], "edge count")?,
  ))
}

fn parse_coordinate(line: usize, field: &str, what: &str) -> Result<f64, LoadError> {
  let value: f64 = parse_field(line, field, what)?;
  if !value.is_finite() {
    return Err(LoadError::Malformed {
      line,
      message: format!("{} '{}' is not a finite number", what, field),
    });
  }
  Ok(value)
}

fn parse_vertex(line: usize, text: &str) -> Result<VertexRecord, LoadError> {
  let vertex = fields(line, text, 3, "vertex")?;
  Ok(VertexRecord::new(
    vertex[0],
    parse_coordinate(line, vertex[1], "latitude")?,
    parse_coordinate(line, vertex[2], "longitude")?,
  ))
}

fn parse_edge(line: usize, text: &str) -> Result<EdgeRecord, LoadError> {
  let edge = fields(line, text, 2, "edge")?;
  Ok(EdgeRecord::new(
    parse_field(line, edge[0], "vertex index")?,
    parse_field(line, edge[1], "vertex index")?,
  ))
}
