//! Interactive terminal front end for the catalog admin console.

mod commands;
mod terminal;

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use catalog_admin::auth::{CredentialField, FieldUpdate, FileTokenStore};
use catalog_admin::config::{API_PATH_ENV, BASE_URL_ENV};
use catalog_admin::{AdminApi, AdminConfig, AdminConsole, ApiPath, BaseUrl, LoginOutcome};

use crate::commands::{Command, HELP};
use crate::terminal::TerminalNotifier;

type Console = AdminConsole<FileTokenStore, TerminalNotifier>;

#[derive(Parser)]
#[command(name = "catalog-admin")]
#[command(about = "Sign in to the catalog API and browse the store's products", long_about = None)]
struct Cli {
    /// API base URL
    #[arg(long, env = BASE_URL_ENV)]
    base_url: String,

    /// Store path segment used in product endpoints
    #[arg(long, env = API_PATH_ENV)]
    api_path: String,

    /// Prefill the login form's email address
    #[arg(long, short = 'u')]
    username: Option<String>,

    /// Where the session token is kept (defaults to the user config directory)
    #[arg(long)]
    token_file: Option<PathBuf>,

    /// Prefix for the User-Agent header
    #[arg(long)]
    user_agent_prefix: Option<String>,

    /// Enable verbose debug output
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbose)
        .with_writer(std::io::stderr)
        .init();
}

fn build_config(cli: &Cli) -> Result<AdminConfig> {
    let mut builder = AdminConfig::builder()
        .base_url(BaseUrl::new(cli.base_url.as_str()).context("Invalid --base-url")?)
        .api_path(ApiPath::new(cli.api_path.as_str()).context("Invalid --api-path")?);
    if let Some(prefix) = &cli.user_agent_prefix {
        builder = builder.user_agent_prefix(prefix.as_str());
    }
    Ok(builder.build()?)
}

fn token_store(cli: &Cli) -> Result<FileTokenStore> {
    let path = match &cli.token_file {
        Some(path) => path.clone(),
        None => FileTokenStore::default_path()
            .context("Could not find a config directory; pass --token-file")?,
    };
    Ok(FileTokenStore::new(path))
}

/// Runs the login form until sign-in succeeds. Returns `false` at end of input.
async fn login(console: &mut Console) -> Result<bool> {
    while !console.is_authenticated() {
        println!("{}", console.view());
        println!();

        let current = console.credentials().username.clone();
        let Some(username) = terminal::read_line(&format!("Email address [{current}]: "))
            .context("Failed to read email address")?
        else {
            return Ok(false);
        };
        if !username.trim().is_empty() {
            console.update_field(FieldUpdate::new(
                CredentialField::Username,
                username.trim(),
            ));
        }

        let Some(password) = terminal::read_password("Password (Enter keeps current): ")
            .context("Failed to read password")?
        else {
            return Ok(false);
        };
        if !password.is_empty() {
            console.update_field(FieldUpdate::new(CredentialField::Password, password));
        }

        if let LoginOutcome::Invalid(e) = console.submit_login().await {
            eprintln!("✗ {e}");
        }
    }
    Ok(true)
}

async fn run(console: &mut Console) -> Result<()> {
    if !login(console).await? {
        return Ok(());
    }
    println!("{}", console.view());
    println!("{HELP}");

    loop {
        let Some(line) = terminal::read_line("catalog> ").context("Failed to read command")?
        else {
            return Ok(());
        };

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(message) => {
                eprintln!("✗ {message}");
                continue;
            }
        };

        match command {
            Command::List => println!("{}", console.view()),
            Command::Show(row) => {
                if console.select_row(row - 1).is_some() {
                    println!("{}", console.view());
                } else {
                    eprintln!("✗ No product in row {row}");
                }
            }
            Command::Check => {
                console.check_login().await;
            }
            Command::Refresh => {
                if console.fetch_products().await {
                    println!("{}", console.view());
                }
            }
            Command::Logout => {
                console.logout();
                if !login(console).await? {
                    return Ok(());
                }
                println!("{}", console.view());
            }
            Command::Help => println!("{HELP}"),
            Command::Quit => return Ok(()),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is not an error.
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = build_config(&cli)?;
    let api = AdminApi::new(&config).context("Failed to create HTTP client")?;
    let store = token_store(&cli)?;
    tracing::debug!(path = %store.path().display(), "Using token store");

    let mut console = AdminConsole::new(api, store, TerminalNotifier);
    if let Some(username) = cli.username {
        console.update_field(FieldUpdate::new(CredentialField::Username, username));
    }

    run(&mut console).await
}
