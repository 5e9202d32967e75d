use chrono::Local;
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;
use treetile::chart::{Chart, ChartConfig};
use treetile::tooltip::format_value;
use treetile::{color, dataset, fetch, render};

#[derive(Parser, Debug)]
#[command(name = "treetile")]
#[command(author, version, about = "Render treemap charts of hierarchical category data")]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    /// Dataset key: videogame, movie, or kickstarter
    #[arg(short, long)]
    data: Option<String>,

    /// Chart a local JSON tree instead of downloading a dataset
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output chart file (.html, .svg, .json)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Directory for auto-generated charts
    #[arg(long, default_value = "treetile-charts")]
    chart_dir: PathBuf,

    /// Canvas width in pixels
    #[arg(long, default_value = "960")]
    width: f64,

    /// Canvas height in pixels
    #[arg(long, default_value = "570")]
    height: f64,

    /// Don't auto-generate an HTML chart
    #[arg(long)]
    no_report: bool,

    /// Don't prompt to open the chart
    #[arg(long)]
    no_open: bool,

    /// List every tile, not just the category summary
    #[arg(short, long)]
    verbose: bool,

    /// Only show the chart path
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start interactive web server rendering charts per request
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "3001")]
        port: u16,

        /// Dataset rendered when a request has no ?data= parameter
        #[arg(short, long)]
        data: Option<String>,
    },
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    // Handle subcommands first
    if let Some(cmd) = args.command {
        match cmd {
            Command::Serve { port, data } => {
                if let Err(e) = treetile::serve::start(port, data) {
                    eprintln!("Server error: {}", e);
                    std::process::exit(1);
                }
                return;
            }
        }
    }

    let ds = dataset::select(args.data.as_deref());

    if !args.quiet {
        eprintln!("\x1b[1mTreetile - Treemap Chart Renderer\x1b[0m");
        eprintln!("{}", "─".repeat(70));
        eprintln!("{}: {}\n", ds.title, ds.description);
    }

    // Load the tree: local file wins over the network
    let raw = match &args.input {
        Some(path) => fetch::file(path),
        None => {
            if !args.quiet {
                eprintln!("Fetching {} ...", ds.url);
            }
            fetch::dataset(ds)
        }
    };

    let raw = match raw {
        Ok(raw) => raw,
        Err(e) => {
            log::error!("failed to load dataset: {:#}", e);
            eprintln!("Failed to load dataset: {:#}", e);
            std::process::exit(1);
        }
    };

    let root = match raw.validate() {
        Ok(root) => root,
        Err(e) => {
            eprintln!("Malformed dataset: {:#}", e);
            std::process::exit(1);
        }
    };

    let config = ChartConfig {
        width: args.width,
        height: args.height,
        ..ChartConfig::default()
    };
    let chart = Chart::build(ds, &root, &config);

    if !args.quiet {
        print_summary(&chart, args.verbose);
    }

    // Determine chart path
    let chart_path = if let Some(ref output) = args.output {
        Some(output.clone())
    } else if !args.no_report {
        // Auto-generate chart
        std::fs::create_dir_all(&args.chart_dir).ok();
        let timestamp = Local::now().format("%Y%m%d_%H%M%S");
        let filename = format!("treetile_chart_{}.html", timestamp);
        Some(args.chart_dir.join(filename))
    } else {
        None
    };

    // Generate chart file
    if let Some(ref output_path) = chart_path {
        if let Err(e) = render::generate(output_path, &chart) {
            eprintln!("Failed to write chart: {}", e);
            std::process::exit(1);
        }
        if args.quiet {
            println!("{}", output_path.display());
        } else {
            eprintln!("\n\x1b[32mChart saved: {}\x1b[0m", output_path.display());
        }

        // Open chart
        if !args.no_open && !args.quiet {
            eprint!("\nOpen chart in browser? [Y/n] ");
            io::stderr().flush().ok();

            let mut input = String::new();
            if io::stdin().read_line(&mut input).is_ok() {
                let input = input.trim().to_lowercase();
                if input.is_empty() || input == "y" || input == "yes" {
                    if let Err(e) = open::that(output_path) {
                        eprintln!("Failed to open chart: {}", e);
                    }
                }
            }
        }
    }

    if !args.quiet {
        eprintln!("\n\x1b[90mChart complete.\x1b[0m");
    }
}

fn print_summary(chart: &Chart, verbose: bool) {
    for entry in &chart.legend.entries {
        let count = chart
            .tiles
            .iter()
            .filter(|t| t.category == entry.category)
            .count();
        let total: f64 = chart
            .tiles
            .iter()
            .filter(|t| t.category == entry.category)
            .map(|t| t.value)
            .sum();

        println!(
            "{} {:<24} {:>4} tiles  {:>12}",
            swatch(&entry.color),
            truncate(&entry.category, 24),
            count,
            format_value(total),
        );

        if verbose {
            for tile in chart.tiles.iter().filter(|t| t.category == entry.category) {
                println!(
                    "     {:<32} {:>12}",
                    truncate(&tile.name, 32),
                    format_value(tile.value)
                );
            }
        }
    }

    let total: f64 = chart.tiles.iter().map(|t| t.value).sum();
    eprintln!("\n{}", "─".repeat(70));
    eprintln!(
        "\x1b[1mTotal:\x1b[0m {} tiles across {} categories, value {}",
        chart.tiles.len(),
        chart.legend.entries.len(),
        format_value(total)
    );
}

/// Truecolor background block matching the tile fill; plain spaces on a
/// color that doesn't parse.
fn swatch(hex: &str) -> String {
    match color::rgb_components(hex) {
        Some((r, g, b)) => format!("\x1b[48;2;{};{};{}m  \x1b[0m", r, g, b),
        None => "  ".to_string(),
    }
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        format!("{}...", &s[..max_len - 3])
    }
}
