//! butda CLI: Command-line client for the BUTDA research assistant

mod transcript;

use butda_engine::config::DEFAULT_CONFIG_PATH;
use butda_engine::session::ACCESS_TOKEN_ENV;
use butda_engine::{
    render, Config, Controller, Conversation, HttpResearchClient, Message, Role, SessionProvider,
    SubmitStatus, TokenSession,
};
use clap::{Parser, Subcommand};
use std::error::Error;
use std::future::Future;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

/// Chat with the BUTDA research assistant
#[derive(Parser)]
#[command(name = "butda")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Config file (default: .butda/config.json when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Write the conversation to this file as HTML on exit
    #[arg(long, global = true)]
    transcript: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive chat (default when no command specified)
    Chat,

    /// Ask one question and print the answer
    Ask {
        /// The question
        #[arg(required = true, trailing_var_arg = true)]
        query: Vec<String>,
    },

    /// Render summary text from a file (or stdin) to HTML
    Render {
        /// Input file; reads stdin when omitted
        file: Option<PathBuf>,
    },

    /// Print the resolved configuration
    Config {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write a default config file
    Init,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let command = cli.command.unwrap_or(Commands::Chat);
    match command {
        Commands::Render { file } => return cmd_render(file.as_deref()),
        Commands::Init => return cmd_init(cli.config.as_deref()),
        _ => {}
    }

    let config = match Config::resolve(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading config: {e}");
            return ExitCode::FAILURE;
        }
    };

    match command {
        Commands::Config { json } => cmd_config(&config, json),
        Commands::Ask { query } => block_on(cmd_ask(
            &config,
            &query.join(" "),
            cli.transcript.as_deref(),
        )),
        _ => block_on(cmd_chat(&config, cli.transcript.as_deref())),
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn block_on(future: impl Future<Output = ExitCode>) -> ExitCode {
    match tokio::runtime::Runtime::new() {
        Ok(rt) => rt.block_on(future),
        Err(e) => {
            eprintln!("Failed to create tokio runtime: {e}");
            ExitCode::FAILURE
        }
    }
}

fn build_controller(config: &Config, conversation: Conversation) -> Result<Controller, Box<dyn Error>> {
    let endpoint = config.research_endpoint()?;
    let client = HttpResearchClient::new(endpoint, config.timeout())?;
    Ok(Controller::new(
        conversation,
        Arc::new(client),
        Arc::new(TokenSession::from_env()),
    ))
}

fn not_signed_in() -> ExitCode {
    eprintln!("Not signed in. Set {ACCESS_TOKEN_ENV} to your access token and try again.");
    ExitCode::FAILURE
}

async fn cmd_chat(config: &Config, transcript: Option<&Path>) -> ExitCode {
    let conversation = if config.welcome {
        Conversation::with_welcome()
    } else {
        Conversation::new()
    };
    let mut controller = match build_controller(config, conversation) {
        Ok(controller) => controller,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };
    if !controller.is_signed_in() {
        return not_signed_in();
    }

    for message in controller.messages() {
        print_message(message);
    }
    println!("Type a topic to research. /logout signs out, /quit exits.\n");

    let mut code = match chat_loop(&mut controller).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    };
    if !write_transcript(transcript, controller.messages()) {
        code = ExitCode::FAILURE;
    }
    code
}

async fn chat_loop(controller: &mut Controller) -> std::io::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let line = tokio::select! {
            line = lines.next_line() => line?,
            _ = tokio::signal::ctrl_c() => None,
        };
        let Some(line) = line else {
            println!();
            return Ok(());
        };

        match line.trim() {
            "/quit" | "/exit" => return Ok(()),
            "/logout" => {
                match controller.sign_out().await {
                    Ok(()) => println!("Signed out."),
                    Err(e) => eprintln!("Error: {e}"),
                }
                return Ok(());
            }
            _ => {}
        }

        match controller.submit(&line) {
            SubmitStatus::Sent => {}
            SubmitStatus::Empty => continue,
            SubmitStatus::Busy => {
                eprintln!("Still waiting for the previous answer.");
                continue;
            }
            SubmitStatus::SignedOut => return Err(std::io::Error::other("session has ended")),
        }
        if let Some(pending) = controller.messages().last() {
            print_message(pending);
        }

        // Ctrl-C abandons the request but keeps the chat open.
        let interrupted = tokio::select! {
            _ = controller.resolve_next() => false,
            _ = tokio::signal::ctrl_c() => true,
        };
        if interrupted {
            controller.cancel();
        }
        if let Some(terminal) = controller.messages().last() {
            print_message(terminal);
        }
    }
}

async fn cmd_ask(config: &Config, query: &str, transcript: Option<&Path>) -> ExitCode {
    let mut controller = match build_controller(config, Conversation::new()) {
        Ok(controller) => controller,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    match controller.submit(query) {
        SubmitStatus::Sent => {}
        SubmitStatus::SignedOut => return not_signed_in(),
        SubmitStatus::Empty | SubmitStatus::Busy => {
            eprintln!("Nothing to ask.");
            return ExitCode::FAILURE;
        }
    }

    let mut code = match controller.resolve_next().await {
        Some(message) => {
            print_message(message);
            if message.role() == Role::Error {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
        None => ExitCode::FAILURE,
    };
    if !write_transcript(transcript, controller.messages()) {
        code = ExitCode::FAILURE;
    }
    code
}

fn cmd_render(file: Option<&Path>) -> ExitCode {
    let input = match file {
        Some(path) => std::fs::read_to_string(path),
        None => std::io::read_to_string(std::io::stdin()),
    };
    match input {
        Ok(text) => {
            println!("{}", render(&text));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Failed to read input: {e}");
            ExitCode::FAILURE
        }
    }
}

fn cmd_config(config: &Config, json: bool) -> ExitCode {
    let endpoint = match config.research_endpoint() {
        Ok(endpoint) => endpoint,
        Err(e) => {
            eprintln!("Invalid configuration: {e}");
            return ExitCode::FAILURE;
        }
    };
    let signed_in = TokenSession::from_env().is_established();

    if json {
        let report = serde_json::json!({
            "api_url": config.api_url().ok(),
            "research_endpoint": endpoint,
            "timeout_seconds": config.timeout_seconds,
            "welcome": config.welcome,
            "signed_in": signed_in,
        });
        println!("{report:#}");
        return ExitCode::SUCCESS;
    }

    println!("Configuration\n");
    println!("  Research endpoint: {endpoint}");
    match config.timeout_seconds {
        Some(secs) if secs > 0 => println!("  Timeout: {secs}s"),
        _ => println!("  Timeout: none"),
    }
    println!("  Welcome message: {}", if config.welcome { "on" } else { "off" });
    println!(
        "  Session: {}",
        if signed_in { "signed in" } else { "signed out" }
    );
    ExitCode::SUCCESS
}

fn cmd_init(config_path: Option<&Path>) -> ExitCode {
    let path = config_path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_PATH));
    if path.exists() {
        println!("Config already exists at {}", path.display());
        return ExitCode::SUCCESS;
    }
    match Config::default().save(path) {
        Ok(()) => {
            println!("Created config at {}", path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Failed to write config: {e}");
            ExitCode::FAILURE
        }
    }
}

fn print_message(message: &Message) {
    match message.role() {
        Role::Pending => println!("  ... {}", message.timestamp()),
        Role::User => println!("[You] {}\n{}\n", message.timestamp(), message.body()),
        role => {
            let title = message.title().unwrap_or(role.as_str());
            println!("[{title}] {}\n{}\n", message.timestamp(), message.body());
        }
    }
}

/// Returns false if the transcript was requested but could not be written.
fn write_transcript(path: Option<&Path>, messages: &[Message]) -> bool {
    let Some(path) = path else {
        return true;
    };
    match std::fs::write(path, transcript::render_transcript(messages)) {
        Ok(()) => {
            tracing::info!(path = %path.display(), "transcript written");
            true
        }
        Err(e) => {
            eprintln!("Failed to write transcript to {}: {e}", path.display());
            false
        }
    }
}
