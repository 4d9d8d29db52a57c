use anyhow::Context;
use clap::Parser;
use quote_inject::utils::error::ErrorCategory;
use quote_inject::utils::{logger, validation::Validate};
use quote_inject::{
    ActionChain, CategoryPath, CliConfig, Entry, LocalStorage, QuoteAction, QuoteConfig,
    QuoteError, TomlConfig,
};
use std::io::{Read, Write};

fn main() {
    let cli = CliConfig::parse();

    // 先讀設定檔，日誌格式可能由設定檔決定
    let file = match cli.load_file() {
        Ok(file) => file,
        Err(e) => {
            // 日誌尚未初始化，只輸出到 stderr
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());
            std::process::exit(e.category().exit_code());
        }
    };

    let verbose = cli.verbose || file.as_ref().is_some_and(TomlConfig::verbose);
    if cli.json_logs || file.as_ref().is_some_and(TomlConfig::json_logs) {
        logger::init_json_logger(verbose);
    } else {
        logger::init_cli_logger(verbose);
    }

    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = run(&cli, file.as_ref()) {
        match e.downcast_ref::<QuoteError>() {
            Some(quote_err) => {
                tracing::error!(
                    "❌ Quote substitution failed: {} (Category: {:?})",
                    quote_err,
                    quote_err.category()
                );
                eprintln!("❌ {}", quote_err.user_friendly_message());
                eprintln!("💡 建議: {}", quote_err.recovery_suggestion());
                std::process::exit(quote_err.category().exit_code());
            }
            None => {
                tracing::error!("❌ {:#}", e);
                eprintln!("❌ {:#}", e);
                std::process::exit(ErrorCategory::System.exit_code());
            }
        }
    }
}

fn run(cli: &CliConfig, file: Option<&TomlConfig>) -> anyhow::Result<()> {
    if let Some(file) = file {
        file.validate()?;
    }

    let settings = cli.settings(file);
    settings.validate()?;
    let config = QuoteConfig::from_provider(&settings)?;

    let body = match &cli.input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading entry body from {}", path.display()))?,
        None => {
            let mut body = String::new();
            std::io::stdin()
                .read_to_string(&mut body)
                .context("reading entry body from stdin")?;
            body
        }
    };

    let mut entry = Entry::new(body, CategoryPath::parse(&cli.category));
    tracing::info!(
        "Processing entry in {} (data: {}, html: {})",
        entry.category,
        config.data_dir().display(),
        config.html_dir().display()
    );

    let mut chain = ActionChain::new();
    chain.push(QuoteAction::from_config(&config, LocalStorage::new()));
    chain.run(&mut entry)?;

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(entry.body.as_bytes())
        .context("writing substituted entry body")?;
    stdout.flush()?;

    Ok(())
}
