use crate::error::CliError;
use crate::options::{
    AlgorithmOption, CliOptions, OutputFormat, SubcommandOption, TrackerOption,
};
use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use git_version::git_version;

const PKG_NAME: &str = env!("CARGO_PKG_NAME");
const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");
const VERSION: &str = env!("CARGO_PKG_VERSION");
const GIT_VERSION: &str = git_version!(fallback = "unknown");

/// Define and parse command line arguments
pub fn parse_arguments() -> Result<CliOptions, CliError> {
    let version_text = format!("{} ({})", VERSION, GIT_VERSION);
    let authors = AUTHORS.replace(':', "\n");
    let arg_matches = build_app(&version_text, &authors).get_matches();

    setup_tracing(&arg_matches)?;

    options_from_matches(&arg_matches)
}

fn build_app<'a, 'b>(version_text: &'b str, authors: &'b str) -> App<'a, 'b> {
    App::new(PKG_NAME)
        .version(version_text)
        .author(authors)
        .arg(
            Arg::with_name("log_filter")
                .short("l")
                .long("log-filter")
                .env("RUST_LOG")
                .default_value("warn")
                .global(true)
                .help("Comma separated list of filter directives"),
        )
        .subcommand(
            SubCommand::with_name("visit")
                .about("Prints the vertices of a graph in the order they are visited")
                .add_positional_graph_path_arg()
                .add_origin_arg()
                .add_goal_arg(false)
                .add_algorithm_arg()
                .add_tracker_arg()
                .add_format_arg()
                .add_quiet_arg(),
        )
        .subcommand(
            SubCommand::with_name("path")
                .about("Prints the path from the origin to the goal found by a traversal")
                .add_positional_graph_path_arg()
                .add_origin_arg()
                .add_goal_arg(true)
                .add_algorithm_arg()
                .add_tracker_arg()
                .add_quiet_arg(),
        )
        .setting(AppSettings::SubcommandRequiredElseHelp)
}

fn options_from_matches(arg_matches: &ArgMatches) -> Result<CliOptions, CliError> {
    let mut options = CliOptions::default();
    let args = match arg_matches.subcommand() {
        ("visit", Some(args)) => {
            options.subcommand = SubcommandOption::Visit;
            options.format = parse_format_arg(args)?;
            args
        }
        ("path", Some(args)) => {
            options.subcommand = SubcommandOption::Path;
            args
        }
        _ => unreachable!("Unhandled subcommand"),
    };

    options.quiet = args.is_present("quiet");
    options.graph_path = args.value_of("graph_path").unwrap().to_string();
    options.origin = args.value_of("origin").unwrap().to_string();
    options.goal = args.value_of("goal").map(|s| s.to_string());
    options.algorithm = parse_algorithm_arg(args)?;
    options.tracker = parse_tracker_arg(args)?;

    if options.algorithm == AlgorithmOption::Astar && options.goal.is_none() {
        return Err(CliError::MissingGoal);
    }

    Ok(options)
}

/// Parse the algorithm argument if given. Default is BFS.
fn parse_algorithm_arg(args: &ArgMatches) -> Result<AlgorithmOption, CliError> {
    match args.value_of("algorithm") {
        Some("bfs") => Ok(AlgorithmOption::Bfs),
        Some("dfs") => Ok(AlgorithmOption::Dfs),
        Some("ucs") => Ok(AlgorithmOption::Ucs),
        Some("astar") => Ok(AlgorithmOption::Astar),
        Some(other) => Err(CliError::InvalidOption {
            name: "algorithm",
            value: other.to_string(),
            valid: "bfs, dfs, ucs, astar [default is bfs]",
        }),
        None => Ok(AlgorithmOption::Bfs),
    }
}

/// Parse the tracker argument if given. Default is the hash tracker.
fn parse_tracker_arg(args: &ArgMatches) -> Result<TrackerOption, CliError> {
    match args.value_of("tracker") {
        Some("hash") => Ok(TrackerOption::Hash),
        Some("ordered") => Ok(TrackerOption::Ordered),
        Some(other) => Err(CliError::InvalidOption {
            name: "tracker",
            value: other.to_string(),
            valid: "hash, ordered [default is hash]",
        }),
        None => Ok(TrackerOption::Hash),
    }
}

/// Parse the output format argument if given. Default is text.
fn parse_format_arg(args: &ArgMatches) -> Result<OutputFormat, CliError> {
    match args.value_of("format") {
        Some("text") => Ok(OutputFormat::Text),
        Some("json") => Ok(OutputFormat::Json),
        Some(other) => Err(CliError::InvalidOption {
            name: "format",
            value: other.to_string(),
            valid: "text, json [default is text]",
        }),
        None => Ok(OutputFormat::Text),
    }
}

fn setup_tracing(args: &ArgMatches) -> Result<(), CliError> {
    // Configure a filter for tracing data if one have been set
    if let Some(filter) = args.value_of("log_filter") {
        let filter = tracing_subscriber::EnvFilter::try_new(filter)
            .map_err(|err| CliError::LogFilter(err.to_string()))?;
        tracing_subscriber::fmt().with_env_filter(filter).init()
    } else {
        tracing_subscriber::fmt().init()
    }
    Ok(())
}

/// Trait that allows us to easily add common arguments to the CLI, avoiding duplicate code while
/// remaining flexible in terms of which subcommands have which arguments
pub(crate) trait CommonArgs {
    fn add_positional_graph_path_arg(self) -> Self;
    fn add_origin_arg(self) -> Self;
    fn add_goal_arg(self, required: bool) -> Self;
    fn add_algorithm_arg(self) -> Self;
    fn add_tracker_arg(self) -> Self;
    fn add_format_arg(self) -> Self;
    fn add_quiet_arg(self) -> Self;
}

/// Add the common arguments to clap::App
impl CommonArgs for App<'_, '_> {
    /// Adds graph path as required positional argument
    fn add_positional_graph_path_arg(self) -> Self {
        self.arg(
            Arg::with_name("graph_path")
                .help("Path to input graph")
                .required(true),
        )
    }

    /// Adds "-o"/"--origin" as a required argument
    fn add_origin_arg(self) -> Self {
        self.arg(
            Arg::with_name("origin")
                .short("o")
                .long("origin")
                .takes_value(true)
                .required(true)
                .help("The vertex the traversal starts from"),
        )
    }

    /// Adds "-g"/"--goal", optionally required
    fn add_goal_arg(self, required: bool) -> Self {
        self.arg(
            Arg::with_name("goal")
                .short("g")
                .long("goal")
                .takes_value(true)
                .required(required)
                .help("The vertex the traversal stops at"),
        )
    }

    /// Adds "-a"/"--algorithm" as an argument
    fn add_algorithm_arg(self) -> Self {
        self.arg(
            Arg::with_name("algorithm")
                .short("a")
                .long("algorithm")
                .takes_value(true)
                .help("The traversal algorithm used {bfs, dfs, ucs, astar}"),
        )
    }

    /// Adds "-t"/"--tracker" as an argument
    fn add_tracker_arg(self) -> Self {
        self.arg(
            Arg::with_name("tracker")
                .short("t")
                .long("tracker")
                .takes_value(true)
                .help("The bookkeeping of visited vertices {hash, ordered}"),
        )
    }

    /// Adds "-f"/"--format" as an argument
    fn add_format_arg(self) -> Self {
        self.arg(
            Arg::with_name("format")
                .short("f")
                .long("format")
                .takes_value(true)
                .help("The output format of visited nodes {text, json}"),
        )
    }

    /// Adds "-q"/"--quiet" as an argument
    fn add_quiet_arg(self) -> Self {
        self.arg(
            Arg::with_name("quiet")
                .short("q")
                .takes_value(false)
                .long("quiet")
                .help("Suppress timing output"),
        )
    }
}
