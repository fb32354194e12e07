use anyhow::Context;
use avia_scanner::utils::{logger, validation::Validate};
use avia_scanner::{CliConfig, ScannerEngine, TicketBook};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting avia-scanner");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e);
        std::process::exit(e.exit_code());
    }

    let book = TicketBook::from_file(&config.input)
        .with_context(|| format!("Failed to load ticket book '{}'", config.input))?;

    let plan = match config.resolve(&book) {
        Ok(plan) => plan,
        Err(e) => {
            tracing::error!("❌ Invalid sort plan: {}", e);
            eprintln!("❌ {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    let engine = ScannerEngine::new(book, plan);

    match engine.run() {
        Ok(report) => {
            print!("{}", report);
            tracing::info!("✅ Done");
        }
        Err(e) => {
            tracing::error!("❌ Scan failed: {}", e);
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e);
            std::process::exit(e.exit_code());
        }
    }

    Ok(())
}
