//! Application run modes: logger init, single text, subcommands, page launch.

use std::io;
use std::sync::Arc;

use crate::cli::Args;
use crate::core;
use crate::core::api::{AnalysisBackend, HttpApi};
use crate::core::config::Config;
use crate::core::page::{Page, PageController, SubmitOutcome};

/// Initialize env_logger. In page mode, writes to file to avoid corrupting the display.
pub fn init_logger(args: &Args) {
    let log_level = args.log_level();
    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level));

    if args.is_interactive()
        && let Some(path) = core::paths::log_file()
    {
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        if let Ok(file) = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
        {
            logger.target(env_logger::Target::Pipe(Box::new(file)));
        }
    }
    let _ = logger.try_init();
}

/// Read the `--text` argument, from stdin when it is `-`.
fn read_text_arg(arg: &str) -> io::Result<String> {
    if arg == "-" {
        io::read_to_string(io::stdin())
    } else {
        Ok(arg.to_string())
    }
}

/// Analyze one text through a headless page and print the rendered results.
pub async fn run_single_text(
    args: &Args,
    config: &Config,
    text_arg: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_text_arg(text_arg)?;
    let api = HttpApi::new(&config.api_base_url);

    let markup_model = args.model.as_deref().unwrap_or(&config.default_model);
    let page = Page::standard(markup_model, &[]);
    let mut controller = PageController::new(page, config.default_model.clone());
    if args.model.is_none() {
        controller.load_models(&api).await;
    }
    controller.set_input(text);

    if !args.json {
        let outcome = controller.submit(&api).await;
        log::debug!("submission ended in {:?}", controller.phase());
        if outcome != SubmitOutcome::Rendered {
            return fail(&controller, &outcome);
        }
        print_report(controller.page());
        return Ok(());
    }

    // --json needs the reply body, so dispatch the request here.
    let request = match controller.begin_submit() {
        Ok(request) => request,
        Err(outcome) => return fail(&controller, &outcome),
    };
    let result = api.analyze(&request).await;
    let raw = result.as_ref().ok().map(|reply| reply.body.clone());
    let outcome = controller.finish_submit(result);
    log::debug!("submission ended in {:?}", controller.phase());
    if outcome != SubmitOutcome::Rendered {
        return fail(&controller, &outcome);
    }
    if let Some(raw) = raw {
        println!("{}", serde_json::to_string_pretty(&raw)?);
    }
    Ok(())
}

fn fail(
    controller: &PageController,
    outcome: &SubmitOutcome,
) -> Result<(), Box<dyn std::error::Error>> {
    let message = controller
        .page()
        .visible_error()
        .map(str::to_string)
        .unwrap_or_else(|| format!("{:?}", outcome));
    eprintln!("Error: {}", message);
    std::process::exit(1);
}

fn field(slot: &Option<core::page::TextField>) -> &str {
    slot.as_ref().map(|f| f.text.as_str()).unwrap_or("")
}

fn print_report(page: &Page) {
    println!("Model:       {}", field(&page.result_model));
    println!("Words:       {}", field(&page.result_word_count));
    println!("Characters:  {}", field(&page.result_char_count));
    if let Some(badge) = page.sentiment_badge.as_ref().filter(|b| !b.text.is_empty()) {
        println!("Sentiment:   {}", badge.text.trim());
    }
    println!();
    println!("Summary:");
    println!("{}", field(&page.summary));
}

/// `models` subcommand: list models, marking the backend default.
pub async fn print_models(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let api = HttpApi::new(&config.api_base_url);
    let response = api.list_models().await?;
    if response.models.is_empty() {
        println!("No models available.");
        return Ok(());
    }
    for model in &response.models {
        let marker = if response.default.as_deref() == Some(model.as_str()) {
            "*"
        } else {
            " "
        };
        println!("{} {}", marker, model);
    }
    Ok(())
}

/// `health` subcommand: exits non-zero when the backend is unhealthy or unreachable.
pub async fn print_health(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let api = HttpApi::new(&config.api_base_url);
    match api.health().await {
        Ok(report) => {
            let message = report.message.as_deref().unwrap_or("");
            println!("{}: {} {}", api.base_url(), report.status, message);
            if !report.is_healthy() {
                std::process::exit(1);
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("{}: unreachable ({})", api.base_url(), e);
            std::process::exit(1);
        }
    }
}

/// `config` subcommand.
pub fn show_config(config: &Config) {
    println!("API base URL:   {}", config.api_base_url);
    println!("Default model:  {}", config.default_model);
    match core::paths::log_file() {
        Some(path) => println!("Log file:       {}", path.display()),
        None => println!("Log file:       (no cache directory)"),
    }
    println!("Samples:        {}", core::samples::builtin_samples().len());
}

/// Launch the page in a blocking thread. Returns on panic or IO error.
pub async fn launch_tui(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let config = Arc::new(config);
    let join_result: Result<io::Result<()>, tokio::task::JoinError> =
        tokio::task::spawn_blocking(move || crate::tui::run(config)).await;

    match join_result {
        Ok(io_result) => io_result?,
        Err(join_err) => {
            if let Ok(panic) = join_err.try_into_panic() {
                let msg = if let Some(s) = panic.downcast_ref::<&str>() {
                    s.to_string()
                } else if let Some(s) = panic.downcast_ref::<String>() {
                    s.clone()
                } else {
                    format!("{:?}", panic)
                };
                eprintln!("TUI panic: {}", msg);
            }
            return Err(
                Box::new(io::Error::other("TUI thread panicked")) as Box<dyn std::error::Error>
            );
        }
    }
    Ok(())
}
