//! CLI command implementations.

use crate::config::{Config, CONFIG_DIR};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};
use twitterverse_core::{load_data, load_query, Format, SortKey};
use twitterverse_graph::{execute_query, GraphBuilder, Twitterverse};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Initialize Twitterverse in a directory.
pub fn init(path: &Path, data: Option<PathBuf>) -> Result<()> {
    if path.join(CONFIG_DIR).exists() {
        println!("{} Already initialized", "✓".green());
        return Ok(());
    }

    let config = Config {
        data,
        ..Default::default()
    };
    config.save(path)?;

    println!("{} Initialized Twitterverse in {}", "✓".green(), path.display());
    if config.data.is_none() {
        println!(
            "  Set {} in {} or pass {} to run",
            "\"data\"".cyan(),
            Config::path(path).display(),
            "--data".cyan()
        );
    }

    Ok(())
}

/// Load a data file into a graph.
fn load_graph(path: &Path) -> Result<Twitterverse> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}")?);
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner.set_message(format!("Loading {}...", path.display()));

    let users = load_data(path);
    spinner.finish_and_clear();

    let mut builder = GraphBuilder::new();
    builder.add_users(users?);
    let graph = builder.build();

    let stats = graph.stats();
    info!(
        "Graph ready: {} users, {} follows ({} dangling)",
        stats.users, stats.follows, stats.dangling
    );
    Ok(graph)
}

/// Picks the data file: the flag wins, then the config in `root`.
fn resolve_data(data: Option<&Path>, root: &Path) -> Result<PathBuf> {
    if let Some(data) = data {
        return Ok(data.to_path_buf());
    }

    Config::load(root)?
        .and_then(|config| config.data_path(root))
        .ok_or_else(|| "no data file: pass --data or set \"data\" in .twitterverse/config.json".into())
}

/// Execute a query file and return the rendered result.
pub fn render(
    query_path: &Path,
    data: Option<&Path>,
    sort_by: Option<SortKey>,
    format: Option<Format>,
    root: &Path,
) -> Result<String> {
    let data_path = resolve_data(data, root)?;
    let mut query = load_query(query_path)?;
    if let Some(sort_by) = sort_by {
        debug!("Overriding sort key with {}", sort_by);
        query.present.sort_by = sort_by;
    }
    if let Some(format) = format {
        debug!("Overriding format with {}", format);
        query.present.format = format;
    }

    let graph = load_graph(&data_path)?;
    Ok(execute_query(&graph, &query)?)
}

/// Run a query and print the result.
pub fn run(
    query_path: &Path,
    data: Option<&Path>,
    sort_by: Option<SortKey>,
    format: Option<Format>,
) -> Result<()> {
    let root = std::env::current_dir()?;
    let rendered = render(query_path, data, sort_by, format, &root)?;

    print!("{}", rendered);
    if !rendered.ends_with('\n') {
        println!();
    }

    Ok(())
}

fn export_json(graph: &Twitterverse) -> serde_json::Value {
    let users: Vec<_> = graph.users().collect();

    serde_json::json!({
        "version": "1.0",
        "stats": graph.stats(),
        "users": users,
        "follows": graph.export_edges()
    })
}

/// Export the graph to JSON.
pub fn export(data: &Path, output: Option<&Path>) -> Result<()> {
    let graph = load_graph(data)?;
    let json = serde_json::to_string_pretty(&export_json(&graph))?;

    match output {
        Some(path) => {
            fs::write(path, json)?;
            eprintln!("{} Exported to {}", "✓".green(), path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}

/// Show graph statistics.
pub fn stats(data: &Path, top: usize) -> Result<()> {
    let graph = load_graph(data)?;
    let stats = graph.stats();

    println!("{}", "Twitterverse Stats".cyan().bold());
    println!();
    println!("  {} {}", "Users:".dimmed(), stats.users);
    println!("  {} {}", "Follows:".dimmed(), stats.follows);
    if stats.dangling > 0 {
        println!(
            "  {} {}",
            "Dangling:".dimmed(),
            stats.dangling.to_string().yellow()
        );
    }

    let usernames: Vec<&str> = graph.usernames().collect();
    let popular = graph.sort(&usernames, SortKey::Popularity);
    if !popular.is_empty() {
        println!();
        println!("{}", "Most popular".cyan());
        for user in popular.into_iter().take(top) {
            println!(
                "  {} {}",
                user.username,
                format!("({} followers)", graph.follower_count(&user.username)).dimmed()
            );
        }
    }

    Ok(())
}
