use clap::Parser;
use dial_sim::config::toml_config::{SimulationConfig, TomlConfig};
use dial_sim::utils::{logger, validation::Validate};
use dial_sim::{CountingMode, Instruction, LocalStorage, SimEngine, SimplePipeline};

#[derive(Parser)]
#[command(name = "toml-sim")]
#[command(about = "Dial simulator with TOML configuration support")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "dial-config.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override monitoring setting from config
    #[arg(long)]
    monitor: Option<bool>,

    /// Override counting mode from config (crossings or landings)
    #[arg(long)]
    mode: Option<String>,

    /// Dry run - parse the input and report counts without simulating
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // 初始化日誌
    logger::init_cli_logger(args.verbose);

    tracing::info!("🚀 Starting TOML-based dial simulator");
    tracing::info!("📁 Loading configuration from: {}", args.config);

    // 載入 TOML 配置
    let mut config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    // 應用命令列覆蓋設定
    if let Some(mode) = &args.mode {
        let mode = match mode.as_str() {
            "crossings" => CountingMode::Crossings,
            "landings" => CountingMode::Landings,
            other => {
                eprintln!("❌ Unknown counting mode '{}'", other);
                eprintln!("💡 Valid modes: crossings, landings");
                std::process::exit(1);
            }
        };
        config.simulation = Some(SimulationConfig { mode: Some(mode) });
        tracing::info!("🔧 Counting mode overridden to: {:?}", mode);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    tracing::info!("✅ Configuration loaded and validated successfully");

    // 顯示配置摘要
    display_config_summary(&config);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No simulation will occur");
        perform_dry_run(&config).await?;
        return Ok(());
    }

    // 決定監控設定
    let monitor_enabled = args.monitor.unwrap_or_else(|| config.monitoring_enabled());

    let storage = LocalStorage::new(".".to_string());
    let pipeline = SimplePipeline::new(storage, config);
    let engine = SimEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run().await {
        Ok(answer) => {
            tracing::info!("✅ Simulation completed successfully!");
            println!("{}", answer);
        }
        Err(e) => {
            tracing::error!("❌ Simulation failed: {}", e);
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    }

    Ok(())
}

fn display_config_summary(config: &TomlConfig) {
    tracing::info!("📋 Pipeline: {} v{}", config.pipeline.name, config.pipeline.version);
    tracing::info!("📋 Source: {} ({})", config.input_path(), config.source.r#type);
    tracing::info!("📋 Counting mode: {:?}", config.counting_mode());
    tracing::info!("📋 Monitoring: {}", config.monitoring_enabled());
}

async fn perform_dry_run(config: &TomlConfig) -> Result<(), Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(config.input_path())?;

    let mut instruction_count = 0usize;
    let mut total_steps = 0u64;
    for (index, line) in content.trim().lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let instruction = Instruction::parse_line(index + 1, line)?;
        instruction_count += 1;
        total_steps += instruction.magnitude;
    }

    tracing::info!("🔍 Would process {} instructions", instruction_count);
    tracing::info!("🔍 Would simulate {} unit steps", total_steps);
    Ok(())
}
