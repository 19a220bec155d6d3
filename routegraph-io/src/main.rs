use clap::{value_t_or_exit, App, AppSettings, Arg, ArgMatches, SubCommand};
use routegraph::{GeoPoint, RouteGraph};
use routegraph_io::{is_snapshot, load_graph, read_graph_file, save_snapshot};
use std::error::Error;
use std::path::Path;
use std::process;
use std::time::Instant;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

type CliResult = Result<(), Box<dyn Error>>;

fn coordinate_args<'a, 'b>(names: &[&'static str]) -> Vec<Arg<'a, 'b>> {
  names
    .iter()
    .map(|name| Arg::with_name(*name).required(true).allow_hyphen_values(true))
    .collect()
}

fn parse_coordinate(value: &str) -> Result<f64, Box<dyn Error>> {
  let coordinate: f64 = value
    .parse()
    .map_err(|e| format!("invalid coordinate '{}': {}", value, e))?;
  if !coordinate.is_finite() {
    return Err(format!("coordinates must be finite, got '{}'", value).into());
  }
  Ok(coordinate)
}

fn parse_point(lat: &str, lon: &str) -> Result<GeoPoint, Box<dyn Error>> {
  Ok(GeoPoint::new(parse_coordinate(lat)?, parse_coordinate(lon)?))
}

fn point_arg(matches: &ArgMatches, lat: &str, lon: &str) -> Result<GeoPoint, Box<dyn Error>> {
  // Both are required arguments, clap has already rejected a missing one
  parse_point(
    matches.value_of(lat).unwrap_or_default(),
    matches.value_of(lon).unwrap_or_default(),
  )
}

fn check_snapshot_source(graph_path: &str) -> CliResult {
  if is_snapshot(Path::new(graph_path)) {
    return Err(format!("{} already is a snapshot", graph_path).into());
  }
  Ok(())
}

fn load(path: &str) -> Result<RouteGraph, Box<dyn Error>> {
  let load_timer = Instant::now();
  let graph = load_graph(path)?;
  info!(
    vertices = graph.number_of_vertices(),
    edges = graph.number_of_edges(),
    "Loaded graph in {:.2} seconds",
    load_timer.elapsed().as_secs_f32()
  );
  Ok(graph)
}

fn nearest(graph_path: &str, matches: &ArgMatches) -> CliResult {
  let graph = load(graph_path)?;
  let point = point_arg(matches, "lat", "lon")?;
  let nearest = graph.nearest_point(&point)?;
  println!("{} {}", nearest.lat(), nearest.lon());
  Ok(())
}

fn connected(graph_path: &str, matches: &ArgMatches) -> CliResult {
  let graph = load(graph_path)?;
  let from = point_arg(matches, "lat1", "lon1")?;
  let to = point_arg(matches, "lat2", "lon2")?;
  println!("{}", graph.connected(&from, &to));
  Ok(())
}

fn route(graph_path: &str, matches: &ArgMatches) -> CliResult {
  let graph = load(graph_path)?;
  let from = point_arg(matches, "lat1", "lon1")?;
  let to = point_arg(matches, "lat2", "lon2")?;

  let route_timer = Instant::now();
  let route = graph.snap_and_route(&from, &to)?;
  let elapsed_ms = route_timer.elapsed().as_secs_f64() * 1000.0;

  for point in &route.ids {
    println!("{} {}", point.lat(), point.lon());
  }
  println!("distance: {:.3} miles", route.cost.0);
  println!("points: {}", route.ids.len());
  println!("time: {:.3} ms", elapsed_ms);
  Ok(())
}

fn snapshot(graph_path: &str, matches: &ArgMatches) -> CliResult {
  check_snapshot_source(graph_path)?;
  let out = value_t_or_exit!(matches, "out", String);
  let description = read_graph_file(graph_path)?;
  // Refuse to snapshot something that would not load
  let graph = RouteGraph::build(&description)?;
  save_snapshot(&description, &out)?;
  info!(
    vertices = graph.number_of_vertices(),
    edges = graph.number_of_edges(),
    "Saved snapshot to {}",
    out
  );
  Ok(())
}

fn init_logging() {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .init();
}

fn main() {
  init_logging();

  let matches = App::new("routegraph")
    .about("Nearest points, connectivity and shortest routes over a graph of geographic points")
    .setting(AppSettings::SubcommandRequiredElseHelp)
    .arg(
      Arg::with_name("graph")
        .required(true)
        .help("Graph file, either text or a .bin snapshot"),
    )
    .subcommand(
      SubCommand::with_name("nearest")
        .about("Prints the vertex closest to a point")
        .args(&coordinate_args(&["lat", "lon"])),
    )
    .subcommand(
      SubCommand::with_name("connected")
        .about("Checks whether two vertices are connected")
        .args(&coordinate_args(&["lat1", "lon1", "lat2", "lon2"])),
    )
    .subcommand(
      SubCommand::with_name("route")
        .about("Snaps two points to the graph and prints the shortest route between them")
        .args(&coordinate_args(&["lat1", "lon1", "lat2", "lon2"])),
    )
    .subcommand(
      SubCommand::with_name("snapshot")
        .about("Converts a text graph into a binary snapshot")
        .arg(Arg::with_name("out").required(true)),
    )
    .get_matches();

  let graph_path = value_t_or_exit!(matches, "graph", String);

  let result = match matches.subcommand() {
    ("nearest", Some(sub)) => nearest(&graph_path, sub),
    ("connected", Some(sub)) => connected(&graph_path, sub),
    ("route", Some(sub)) => route(&graph_path, sub),
    ("snapshot", Some(sub)) => snapshot(&graph_path, sub),
    _ => Ok(()),
  };

  if let Err(e) = result {
    error!("{}", e);
    process::exit(1);
  }
}
