use route_sort::{merge_sort, merge_sort_by_key, Error, RouteDeclaration, RouteGraph};
use std::collections::BTreeMap;
use std::env;
use std::fmt;
use std::fs;
use std::path::PathBuf;

/// Command line options for the demo
#[derive(Debug, Clone)]
struct DemoConfig {
    /// Node to compute distances from
    source: String,
    /// Optional JSON edge list; the built-in example graph is used otherwise
    edges_path: Option<PathBuf>,
    /// Print the distance map as JSON instead of text
    json: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            source: "pendleton".to_string(),
            edges_path: None,
            json: false,
        }
    }
}

impl DemoConfig {
    /// Usage: route_demo [--json] [SOURCE] [EDGES.json]
    fn from_args(args: impl IntoIterator<Item = String>) -> route_sort::Result<Self> {
        let mut config = DemoConfig::default();
        let mut positional = Vec::new();

        for arg in args {
            match arg.as_str() {
                "--json" => config.json = true,
                flag if flag.starts_with("--") => {
                    return Err(Error::InvalidInput(format!("unknown flag {}", flag)));
                }
                _ => positional.push(arg),
            }
        }

        let mut positional = positional.into_iter();
        if let Some(source) = positional.next() {
            config.source = source;
        }
        config.edges_path = positional.next().map(PathBuf::from);
        if let Some(extra) = positional.next() {
            return Err(Error::InvalidInput(format!("unexpected argument {}", extra)));
        }

        Ok(config)
    }
}

#[derive(Debug, Clone)]
struct Book {
    author: &'static str,
    title: &'static str,
    release_year: i32,
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) by {}", self.title, self.release_year, self.author)
    }
}

fn example_graph() -> RouteGraph<u32> {
    RouteGraph::new()
        .route("pendleton", "pierre", 2)
        .route("pendleton", "pueblo", 8)
        .route("pendleton", "phoenix", 4)
        .route("phoenix", "pueblo", 3)
        .route("phoenix", "peoria", 4)
        .route("phoenix", "pensacola", 5)
        .route("phoenix", "pittsburgh", 10)
        .route("pueblo", "pierre", 3)
        .route("pueblo", "peoria", 3)
        .route("pittsburgh", "peoria", 5)
        .route("pittsburgh", "pensacola", 4)
        .route("pittsburgh", "princeton", 2)
        .route("pensacola", "princeton", 5)
}

fn load_graph(config: &DemoConfig) -> route_sort::Result<RouteGraph<u32>> {
    match &config.edges_path {
        None => Ok(example_graph()),
        Some(path) => {
            let text = fs::read_to_string(path)?;
            let declarations: Vec<RouteDeclaration<u32>> = serde_json::from_str(&text)?;
            log::info!("Loaded {} routes from {}", declarations.len(), path.display());
            Ok(RouteGraph::from_declarations(declarations))
        }
    }
}

fn run(config: DemoConfig) -> route_sort::Result<()> {
    println!("Problem #1: generic sorting");
    let numbers = merge_sort(vec![3, 4, 0, 1]);
    println!("sorted numbers: {:?}", numbers);

    let books = vec![
        Book {
            author: "harper lee",
            title: "to kill a mockingbird",
            release_year: 1960,
        },
        Book {
            author: "j.d. salinger",
            title: "catcher in the rye",
            release_year: 1951,
        },
        Book {
            author: "fitzgerald",
            title: "the great gatsby",
            release_year: 1925,
        },
        Book {
            author: "w. strieber, j. kunetka",
            title: "war day",
            release_year: 1984,
        },
    ];
    println!("sorted books: ");
    for book in merge_sort_by_key(books, |b| b.release_year) {
        println!("\t{}", book);
    }

    println!();
    println!("Problem #2: shortest paths");
    let graph = load_graph(&config)?;
    let distances = graph.shortest_distances_from(&config.source)?;

    // Stable output order
    let distances: BTreeMap<_, _> = distances.into_iter().collect();
    if config.json {
        println!("{}", serde_json::to_string_pretty(&distances)?);
    } else {
        for (node, distance) in &distances {
            println!("shortest distance to {} from {} is: {}", node, config.source, distance);
        }
    }

    Ok(())
}

fn main() {
    // Initialize logging
    env_logger::init();

    let result = DemoConfig::from_args(env::args().skip(1)).and_then(run);
    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
