use clap::Parser;
use compose_services::utils::{logger, validation::Validate};
use compose_services::{CliConfig, ComposePipeline, EtlEngine, LocalStorage};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose, cli.log_format);

    tracing::info!("Starting compose-services");
    tracing::debug!("CLI config: {:?}", cli);

    let config = match cli.resolve().and_then(|config| {
        config.validate()?;
        Ok(config)
    }) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.severity().exit_code());
        }
    };

    tracing::info!("📁 Input: {}, output: {}", config.input_path, config.output_path);
    if config.monitor {
        tracing::info!("🔍 System monitoring enabled");
    }

    let monitor_enabled = config.monitor;
    let pipeline = ComposePipeline::new(LocalStorage::default(), config);
    let engine = EtlEngine::new_with_monitoring(pipeline, monitor_enabled);

    let outcome = if cli.dry_run {
        tracing::info!("🔍 DRY RUN MODE - nothing will be written");
        engine.preview().await.map(|catalog| {
            for (name, record) in catalog.iter() {
                println!(
                    "{}: {} labels, {} ports",
                    name,
                    entry_count(&record.labels),
                    entry_count(&record.ports)
                );
            }
            println!("✅ {} services found", catalog.len());
        })
    } else {
        engine.run().await.map(|output_path| {
            println!("✅ Services written to {}", output_path);
        })
    };

    if let Err(e) = outcome {
        tracing::error!(
            "❌ Extraction failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.severity().exit_code());
    }
}

fn entry_count(value: &serde_json::Value) -> usize {
    match value {
        serde_json::Value::Object(map) => map.len(),
        serde_json::Value::Array(items) => items.len(),
        serde_json::Value::Null => 0,
        _ => 1,
    }
}
