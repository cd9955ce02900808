use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use name_standardizer::{
    AppConfig, BatchOutcome, Batcher, Category, GeminiClient, Pipeline, RunReport,
    Standardizer, read_xlsx, write_xlsx,
};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const PREVIEW_ROWS: usize = 5;

#[derive(Parser)]
#[command(name = "name-standardizer")]
#[command(about = "Standardize brand/category names in a spreadsheet using Gemini")]
#[command(version)]
struct Cli {
    /// Config file (defaults to the user config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Standardize the ExistingName column and write DesireName
    Run {
        /// Input .xlsx with ExistingName and DesireName columns
        #[arg(short, long)]
        input: PathBuf,

        /// What the names are: brand or category
        #[arg(short, long, value_parser = parse_category)]
        category: Category,

        /// Output .xlsx (defaults to standardized_output.xlsx)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Names per model request
        #[arg(long)]
        batch_size: Option<usize>,

        /// Gemini model name
        #[arg(long)]
        model: Option<String>,

        /// API key (falls back to the config file)
        #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
        api_key: Option<String>,
    },

    /// Validate a spreadsheet and show its first rows
    Preview {
        #[arg(short, long)]
        input: PathBuf,

        #[arg(long, default_value_t = PREVIEW_ROWS)]
        rows: usize,
    },

    /// Verify the API key and model are usable
    Check {
        #[arg(long)]
        model: Option<String>,

        #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
        api_key: Option<String>,
    },

    /// Manage the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Write a default config file if none exists
    Init,
    /// Print the effective configuration
    Show,
}

fn parse_category(s: &str) -> Result<Category, String> {
    s.parse()
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "name_standardizer=debug"
    } else {
        "name_standardizer=info"
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .init();

    let config_path = cli.config.clone().unwrap_or_else(AppConfig::default_path);

    match cli.command {
        Commands::Run {
            input,
            category,
            output,
            batch_size,
            model,
            api_key,
        } => {
            let mut config = AppConfig::load_from(&config_path)?;
            if let Some(size) = batch_size {
                config.standardize.batch_size = size;
            }
            if let Some(model) = model {
                config.gemini.model = model;
            }
            if let Some(output) = output {
                config.standardize.output_file = output;
            }
            config.validate()?;
            run(&config, &input, category, api_key.as_deref())?;
        }
        Commands::Preview { input, rows } => {
            let config = AppConfig::load_from(&config_path)?;
            preview(&config, &input, rows)?;
        }
        Commands::Check { model, api_key } => {
            let mut config = AppConfig::load_from(&config_path)?;
            if let Some(model) = model {
                config.gemini.model = model;
            }
            check(&config, api_key.as_deref())?;
        }
        Commands::Config { action } => match action {
            ConfigAction::Init => {
                if config_path.exists() {
                    println!("Config already exists at {}", config_path.display());
                } else {
                    AppConfig::default().save_to(&config_path)?;
                    println!("✓ Wrote default config to {}", config_path.display());
                }
            }
            ConfigAction::Show => {
                let config = AppConfig::load_from(&config_path)?;
                println!("# {}", config_path.display());
                print!("{}", config.to_toml()?);
            }
        },
    }

    Ok(())
}

fn preview(config: &AppConfig, input: &Path, rows: usize) -> Result<()> {
    let table = read_xlsx(input).with_context(|| format!("Failed to read {}", input.display()))?;
    table.name_columns(
        &config.standardize.existing_column,
        &config.standardize.desired_column,
    )?;
    println!(
        "✓ {} rows, columns: {}\n",
        table.row_count(),
        table.headers().join(", ")
    );
    println!("{}", table.preview(rows));
    Ok(())
}

fn check(config: &AppConfig, api_key: Option<&str>) -> Result<()> {
    let key = config.resolve_api_key(api_key)?;
    let client = GeminiClient::new(&config.gemini, key)?;

    let info = client
        .model_info()
        .with_context(|| format!("Model check failed for {}", client.model()))?;

    println!("✓ Connected: {}", info.name);
    if let Some(display) = info.display_name {
        println!("  Display name:  {}", display);
    }
    if let Some(limit) = info.input_token_limit {
        println!("  Input tokens:  {}", limit);
    }
    if let Some(limit) = info.output_token_limit {
        println!("  Output tokens: {}", limit);
    }
    Ok(())
}

fn run(config: &AppConfig, input: &Path, category: Category, api_key: Option<&str>) -> Result<()> {
    let start_time = Instant::now();
    println!("=== Name Standardizer ===\n");

    // Client, batcher, pipeline
    let key = config.resolve_api_key(api_key)?;
    let client = GeminiClient::new(&config.gemini, key)?;
    let batcher = Batcher::new(config.standardize.batch_size);
    let pipeline = Pipeline::new(Standardizer::new(client, category), batcher)
        .columns(
            config.standardize.existing_column.clone(),
            config.standardize.desired_column.clone(),
        )
        .failure_marker(config.standardize.failure_marker.clone());

    // Step 1: Load and validate
    println!("Step 1: Loading {}...", input.display());
    let mut table =
        read_xlsx(input).with_context(|| format!("Failed to read {}", input.display()))?;
    pipeline.validate(&table)?;
    println!("✓ File loaded ({} rows)\n", table.row_count());
    println!("Sample of your uploaded data:");
    println!("{}\n", table.preview(PREVIEW_ROWS));

    // Step 2: Standardize
    println!(
        "Step 2: Standardizing {} names with {} (batch size {})...",
        category,
        config.gemini.model,
        batcher.batch_size()
    );
    let report = pipeline.run_with_progress(&mut table, |p| match &p.outcome {
        BatchOutcome::Standardized => println!(
            "  ✓ Batch {}/{} ({} names) [{:.2}s]",
            p.index + 1,
            p.total,
            p.len,
            p.elapsed.as_secs_f64()
        ),
        BatchOutcome::Failed { reason } => println!(
            "  ✗ Batch {}/{} ({} names) failed: {}",
            p.index + 1,
            p.total,
            p.len,
            reason
        ),
    })?;
    println!("\n✓ Standardization complete\n");
    println!("Sample of standardized data:");
    println!("{}\n", table.preview(PREVIEW_ROWS));

    // Step 3: Write the output
    let output = &config.standardize.output_file;
    println!("Step 3: Writing {}...", output.display());
    write_xlsx(&table, output).with_context(|| format!("Failed to write {}", output.display()))?;
    println!("✓ Saved\n");

    print_summary(&report, &config.standardize.failure_marker);
    println!(
        "\nTotal execution:      {:.3}s",
        start_time.elapsed().as_secs_f64()
    );
    Ok(())
}

fn print_summary(report: &RunReport, marker: &str) {
    println!("=== Run Statistics ===");
    println!("Started:              {}", report.started_at.to_rfc3339());
    println!("Total rows:           {}", report.total_rows);
    println!("Names submitted:      {}", report.submitted);
    println!("Batches:              {}", report.batches);
    println!("Standardized:         {}", report.standardized_rows());
    println!("Failed batches:       {}", report.failed.len());

    if !report.is_clean() {
        println!(
            "\n{} rows were written as \"{}\":",
            report.failed_rows(),
            marker
        );
        for failed in &report.failed {
            println!("  Batch {}: {}", failed.index + 1, failed.reason);
        }
    }
}
