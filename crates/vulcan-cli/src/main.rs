use serde::Serialize;
use std::io::Read;
use tracing_subscriber::EnvFilter;
use vulcan_graph::{LayoutOptions, VersionRecord};

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Graph(vulcan_graph::Error),
    Json(serde_json::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Graph(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<vulcan_graph::Error> for CliError {
    fn from(value: vulcan_graph::Error) -> Self {
        Self::Graph(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
enum Command {
    #[default]
    Graph,
    Layout,
    Edges,
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    input: Option<String>,
    config: Option<String>,
    pretty: bool,
    strict: bool,
    node_spacing: Option<f64>,
    rank_spacing: Option<f64>,
}

fn usage() -> &'static str {
    "vulcan-cli\n\
\n\
USAGE:\n\
  vulcan-cli [graph|layout|edges] [--pretty] [--strict] [--node-spacing <n>] [--rank-spacing <n>] [--config <path>] [<path>|-]\n\
\n\
NOTES:\n\
  - If <path> is omitted or '-', the JSON version list is read from stdin.\n\
  - graph prints {nodes, edges}; layout prints nodes; edges prints edges for a fresh layout.\n\
  - --config loads a JSON layout options object; explicit flags override it.\n\
  - --strict rejects cyclic parent chains instead of placing their members as roots.\n\
  - Set RUST_LOG (e.g. RUST_LOG=debug) to see dropped edges and dangling parents on stderr.\n\
"
}

fn parse_spacing(value: Option<&String>) -> Result<f64, CliError> {
    let Some(value) = value else {
        return Err(CliError::Usage(usage()));
    };
    let n = value.parse::<f64>().map_err(|_| CliError::Usage(usage()))?;
    if !(n.is_finite() && n >= 0.0) {
        return Err(CliError::Usage(usage()));
    }
    Ok(n)
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();

    let mut it = argv.iter().skip(1);
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "graph" => args.command = Command::Graph,
            "layout" => args.command = Command::Layout,
            "edges" => args.command = Command::Edges,
            "--pretty" => args.pretty = true,
            "--strict" => args.strict = true,
            "--node-spacing" => args.node_spacing = Some(parse_spacing(it.next())?),
            "--rank-spacing" => args.rank_spacing = Some(parse_spacing(it.next())?),
            "--config" => {
                let Some(path) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.config = Some(path.clone());
            }
            "--" => {
                if let Some(rest) = it.next() {
                    if args.input.is_some() {
                        return Err(CliError::Usage(usage()));
                    }
                    args.input = Some(rest.clone());
                }
                if it.next().is_some() {
                    return Err(CliError::Usage(usage()));
                }
            }
            other if other.starts_with('-') && other != "-" => {
                return Err(CliError::Usage(usage()));
            }
            path => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(path.to_string());
            }
        }
    }

    Ok(args)
}

fn read_input(input: Option<&str>) -> Result<String, CliError> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => Ok(std::fs::read_to_string(path)?),
    }
}

fn write_json(value: &impl Serialize, pretty: bool) -> Result<(), CliError> {
    if pretty {
        serde_json::to_writer_pretty(std::io::stdout().lock(), value)?;
    } else {
        serde_json::to_writer(std::io::stdout().lock(), value)?;
    }
    println!();
    Ok(())
}

fn layout_options(args: &Args) -> Result<LayoutOptions, CliError> {
    let mut options = match args.config.as_deref() {
        Some(path) => serde_json::from_str::<LayoutOptions>(&std::fs::read_to_string(path)?)?,
        None => LayoutOptions::default(),
    };
    if args.strict {
        options.strict = true;
    }
    if let Some(n) = args.node_spacing {
        options.node_spacing = n;
    }
    if let Some(n) = args.rank_spacing {
        options.rank_spacing = n;
    }
    Ok(options)
}

fn run(args: Args) -> Result<(), CliError> {
    let options = layout_options(&args)?;
    let text = read_input(args.input.as_deref())?;
    let versions: Vec<VersionRecord> = vulcan_graph::parse_versions(&text)?;
    tracing::debug!(versions = versions.len(), ?options, "loaded version list");

    match args.command {
        Command::Graph => {
            let graph = vulcan_graph::build_graph(&versions, &options)?;
            write_json(&graph, args.pretty)
        }
        Command::Layout => {
            let nodes = vulcan_graph::try_layout(&versions, &options)?;
            write_json(&nodes, args.pretty)
        }
        Command::Edges => {
            let nodes = vulcan_graph::try_layout(&versions, &options)?;
            let edges = vulcan_graph::synthesize_edges(&versions, &nodes);
            write_json(&edges, args.pretty)
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = run(args) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
