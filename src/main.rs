use clap::Parser;
use promptcanvas::{
    logger::{self, LogLevel, LoggerConfig},
    ClientConfig, MemoryPage, Node, TriggerOutcome, UiController,
};
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "promptcanvas")]
#[command(version, about = "Generate an image from a text prompt", long_about = None)]
struct Args {
    /// Style name from the catalog (omit for no style)
    #[arg(short, long)]
    style: Option<String>,

    /// Directory the generated JPEG is written to
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Log at debug level with source locations
    #[arg(short, long)]
    verbose: bool,

    /// Log as JSON lines instead of the colored console layout
    #[arg(long)]
    json_logs: bool,

    /// Plain console logs without ANSI colors
    #[arg(long)]
    no_color: bool,

    /// Text describing the image
    prompt: Vec<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    let dotenv_loaded = dotenv::dotenv().is_ok();

    let mut logger_config = if args.verbose {
        LoggerConfig::development()
    } else {
        LoggerConfig::default()
    };
    if let Some(level) = env::var("LOG_LEVEL").ok().and_then(|name| LogLevel::parse(&name)) {
        logger_config = logger_config.with_level(level);
    }
    let logger_config = logger_config
        .with_colors(!args.no_color)
        .with_json_output(args.json_logs);
    if let Err(e) = logger::init_with_config(logger_config) {
        eprintln!("{}", e);
    }
    if !dotenv_loaded {
        log::debug!("No .env file found, using process environment");
    }

    let config = ClientConfig::from_env();
    logger::log_startup_info(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"), &config);

    let memory = MemoryPage::new(&config.text.trigger_idle, &config.text.no_style_label);
    let mut controller = match UiController::new(&config, memory.page()) {
        Ok(controller) => controller,
        Err(e) => {
            log::error!("❌ {}", e);
            return ExitCode::FAILURE;
        }
    };

    controller.load_styles().await;
    let state = memory.snapshot();
    if !state.status.is_empty() {
        println!("{}", state.status);
    }
    log::info!("🎨 Available styles:");
    for option in state.style_options.iter().skip(1) {
        log::info!("  {} - {}", option.value, option.label);
    }

    if let Some(style) = &args.style {
        if !memory.select_style(style) {
            log::warn!("⚠️  Unknown style '{}', generating without a style", style);
        }
    }
    memory.type_prompt(&args.prompt.join(" "));

    match controller.generate().await {
        TriggerOutcome::Displayed => {}
        TriggerOutcome::Rejected => {
            for alert in memory.snapshot().alerts {
                eprintln!("{}", alert);
            }
            return ExitCode::FAILURE;
        }
        TriggerOutcome::Failed(_) => {
            println!("{}", memory.snapshot().status);
            return ExitCode::FAILURE;
        }
    }

    let image = memory.snapshot().result.into_iter().find_map(|node| match node {
        Node::Image(image) => Some(image),
        Node::Placeholder(_) => None,
    });
    let Some(image) = image else {
        log::error!("❌ Result area holds no image");
        return ExitCode::FAILURE;
    };

    let path = args
        .output_dir
        .join(format!("generated_{}.jpg", chrono::Utc::now().timestamp()));
    match image.image.save(&path) {
        Ok(()) => {
            println!("💾 \"{}\" saved to {}", image.alt, path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("❌ Failed to save image: {}", e);
            ExitCode::FAILURE
        }
    }
}
