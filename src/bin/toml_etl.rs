use clap::Parser;
use roster_etl::core::report::format_summary;
use roster_etl::core::ConfigProvider;
use roster_etl::utils::{logger, validation::Validate};
use roster_etl::{CsvPipeline, EtlEngine, LocalStorage, TomlConfig};
use std::path::Path;

#[derive(Parser)]
#[command(name = "toml-etl")]
#[command(about = "Run the employee enrichment pipeline from a TOML configuration file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "etl-config.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    log_json: bool,

    /// Override monitoring setting from config
    #[arg(long)]
    monitor: Option<bool>,

    /// Show what would be processed without reading or writing any data
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = Args::parse();

    logger::init_cli_logger(args.verbose, args.log_json);

    tracing::info!("🚀 Starting TOML-based ETL tool");
    tracing::info!("📁 Loading configuration from: {}", args.config);

    let config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(e.severity().exit_code());
        }
    };

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.severity().exit_code());
    }

    tracing::info!("✅ Configuration loaded and validated successfully");
    display_config_summary(&config, &args);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No actual processing will occur");
        perform_dry_run(&config);
        return;
    }

    let monitor_enabled = args.monitor.unwrap_or_else(|| config.monitoring_enabled());
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    let preview_rows = config.preview_rows();
    let pipeline = CsvPipeline::new(LocalStorage::current_dir(), config);
    let engine = EtlEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run().await {
        Ok(summary) => {
            print!("{}", format_summary(&summary, preview_rows));
        }
        Err(e) => {
            tracing::error!(
                "❌ ETL pipeline failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ ETL pipeline failed: {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.severity().exit_code());
        }
    }
}

fn display_config_summary(config: &TomlConfig, args: &Args) {
    println!("📋 Configuration Summary:");
    println!(
        "  Pipeline: {} v{}",
        config.pipeline.name, config.pipeline.version
    );
    if let Some(description) = &config.pipeline.description {
        println!("  Description: {}", description);
    }
    println!("  Source: {}", config.source_path());
    println!("  Output: {}", config.output_path());
    println!("  Preview Rows: {}", config.preview_rows());

    if args.dry_run {
        println!("  🔍 DRY RUN MODE ENABLED");
    }

    println!();
}

fn perform_dry_run(config: &TomlConfig) {
    println!("🔍 Dry Run Analysis:");
    println!();

    println!("📡 Data Source:");
    println!("  Path: {}", config.source_path());
    println!(
        "  Exists: {}",
        if Path::new(config.source_path()).is_file() {
            "yes"
        } else {
            "no"
        }
    );

    println!();
    println!("💾 Output Files:");
    let output = Path::new(config.output_path());
    println!("  CSV:  {}", output.join(config.csv_filename()).display());
    println!("  JSON: {}", output.join(config.json_filename()).display());

    println!();
    println!("✅ Dry run analysis complete. Use --verbose for more details during actual run.");
}
