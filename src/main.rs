mod codes;
mod html;
mod parser;
mod store;

use std::path::Path;
use std::time::Instant;

use anyhow::Context;
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use codes::Code;
use parser::chapters::ChapterCache;

#[derive(Parser)]
#[command(name = "codex_parser", about = "Russian legal codex HTML → article corpus")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse fetched HTML pages into per-code and combined JSON corpora
    Parse {
        /// Parse a single code id (e.g. "gk1"); default: all codes
        #[arg(short, long)]
        code: Option<String>,
    },
    /// Per-code article counts from the parsed output
    Stats,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Parse { code } => run_parse(code.as_deref()),
        Commands::Stats => run_stats(),
    };

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {:.1}s", elapsed.as_secs_f64());
    }
    result
}

fn run_parse(only: Option<&str>) -> anyhow::Result<()> {
    let raw_dir = Path::new(store::RAW_DIR);
    let parsed_dir = Path::new(store::PARSED_DIR);

    let selected: Vec<&Code> = match only {
        Some(id) => vec![codes::find(id).with_context(|| format!("unknown code id: {id}"))?],
        None => codes::CODES.iter().collect(),
    };

    let pb = ProgressBar::new(selected.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );

    let cache = ChapterCache::new();
    let mut summary: Vec<(&str, usize)> = Vec::new();
    let mut total = 0usize;

    for code in &selected {
        pb.set_message(code.id);
        let pages = store::load_pages(raw_dir, code.id);
        let records = if pages.is_empty() {
            Vec::new()
        } else {
            let toc = store::load_toc(raw_dir, code.id);
            parser::parse_code(code, toc.as_deref(), &pages, &cache)
        };

        if !records.is_empty() {
            let path = store::write_code_records(parsed_dir, code.id, &records)?;
            info!(
                code = code.id,
                pages = pages.len(),
                articles = records.len(),
                file = %path.display(),
                "parsed"
            );
        }
        total += records.len();
        summary.push((code.id, records.len()));
        pb.inc(1);
    }
    pb.finish_and_clear();

    // Combined corpus: concatenate the per-code files in declared code order.
    let mut combined = Vec::new();
    for code in codes::CODES {
        if let Some(records) = store::read_code_records(parsed_dir, code.id) {
            combined.extend(records);
        }
    }
    let combined_path = store::write_combined(parsed_dir, &combined)?;

    println!("\n=== Summary ===");
    for (id, count) in &summary {
        println!("  {id}: {count} articles");
    }
    println!(
        "  TOTAL: {total} articles → {}",
        combined_path.display()
    );

    if !combined.is_empty() {
        println!("\n=== Sample articles ===");
        for r in combined.iter().take(3) {
            println!("  [{}] Ст. {}. {}", r.code_id, r.article_num, r.article_title);
            println!("    {}...", truncate(&r.text, 100));
        }
    }

    Ok(())
}

fn run_stats() -> anyhow::Result<()> {
    let parsed_dir = Path::new(store::PARSED_DIR);
    let mut total = 0usize;

    println!("{:>6} | {:<38} | {:>8}", "code", "name", "articles");
    println!("{}", "-".repeat(60));
    for code in codes::CODES {
        let count = store::read_code_records(parsed_dir, code.id)
            .map(|r| r.len())
            .unwrap_or(0);
        total += count;
        println!(
            "{:>6} | {:<38} | {:>8}",
            code.id,
            truncate(code.name, 38),
            count
        );
    }
    println!("{}", "-".repeat(60));
    println!("{:>6} | {:<38} | {:>8}", "", "TOTAL", total);
    Ok(())
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max).collect();
        format!("{}...", truncated)
    }
}
