use std::io::{stdout, Write};
use std::process::exit;
use std::time::Instant;

use humantime::format_duration;
use tracing::info;

use crate::args::parse_arguments;
use crate::error::CliError;
use crate::load::load_graph;
use crate::options::SubcommandOption;
use crate::search::{find_path, visit};

mod args;
mod error;
mod load;
mod options;
mod search;

#[tracing::instrument]
fn main() {
    if let Err(err) = main_inner() {
        println!("{}", err);
        exit(1);
    }
}

fn main_inner() -> Result<(), CliError> {
    let options = parse_arguments()?;
    let graph = load_graph(&options.graph_path)?;
    info!(path = %options.graph_path, "loaded graph");

    let now = Instant::now();
    match options.subcommand {
        SubcommandOption::Visit => {
            let summary = {
                let stdout = stdout();
                let mut out = stdout.lock();
                let summary = visit(&graph, &options, &mut out)?;
                out.flush()?;
                summary
            };

            if !options.quiet {
                println!(
                    "Time elapsed traversing: {}ms ({})",
                    now.elapsed().as_millis(),
                    format_duration(now.elapsed())
                );
                println!("Vertices visited: {}", summary.visited);
                if let Some(goal) = &options.goal {
                    println!("Goal {} found: {}", goal, summary.goal_found);
                }
            }
        }
        SubcommandOption::Path => {
            let path = find_path(&graph, &options)?;
            match path {
                Some(path) => {
                    println!("Path: {}", path.vertices.join(" -> "));
                    if let Some(cost) = path.cost {
                        println!("Cost: {}", cost);
                    }
                }
                None => println!(
                    "No path from {} to {}",
                    options.origin,
                    options.goal.as_deref().unwrap_or_default()
                ),
            }

            if !options.quiet {
                println!(
                    "Time elapsed searching: {}ms ({})",
                    now.elapsed().as_millis(),
                    format_duration(now.elapsed())
                );
            }
        }
    }
    Ok(())
}
