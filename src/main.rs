use clap::Parser;
use wordtone::core::ConfigProvider;
use wordtone::utils::{logger, validation::Validate};
use wordtone::{
    CliConfig, DatamuseClient, DryRunSink, Settings, SonifyEngine, UdpOscSender, WordtoneError,
};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting wordtone");
    tracing::debug!("CLI config: {:?}", config);

    let settings = match config.into_settings() {
        Ok(settings) => settings,
        Err(e) => exit_with(&e),
    };

    // 驗證配置，失敗時不做任何網路動作
    if let Err(e) = settings.validate() {
        exit_with(&e);
    }

    if let Err(e) = run(&settings).await {
        exit_with(&e);
    }
}

async fn run(settings: &Settings) -> wordtone::Result<()> {
    let source = DatamuseClient::new(settings.endpoint(), settings.request_timeout())?;

    let summary = if settings.dry_run {
        eprintln!("🔍 DRY RUN MODE - no OSC messages will be sent");
        SonifyEngine::new(source, DryRunSink, settings)
            .run(&settings.keyword)
            .await?
    } else {
        let sender = UdpOscSender::connect(settings.host(), settings.port()).await?;
        SonifyEngine::new(source, sender, settings)
            .run(&settings.keyword)
            .await?
    };

    println!("{}", summary);
    Ok(())
}

fn exit_with(e: &WordtoneError) -> ! {
    tracing::error!(
        "❌ wordtone failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}: {}", e.user_friendly_message(), e);
    eprintln!("💡 {}", e.recovery_suggestion());

    std::process::exit(e.exit_code());
}
