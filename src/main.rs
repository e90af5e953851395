mod cli;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

use chatty::connector::{api, tui};
use chatty::{
    ChatSession, Container, ContainerConfig, HttpChatGateway, OpenAiClient, ServerConfig,
    SubmitOutcome,
};

use cli::Commands;

#[derive(Parser)]
#[command(name = "chatty")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // The terminal surface owns stdout; only log there when asked to, and to stderr.
    let interactive = matches!(cli.command, Commands::Chat { .. });
    if !interactive || cli.verbose {
        let level = if cli.verbose {
            Level::DEBUG
        } else {
            Level::INFO
        };
        let subscriber = FmtSubscriber::builder()
            .with_max_level(level)
            .with_target(false)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
    }

    match dotenvy::dotenv() {
        Ok(path) => debug!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!("Ignoring unreadable .env file: {e}"),
    }

    match cli.command {
        Commands::Serve {
            host,
            port,
            public,
            mock_completions,
        } => {
            let ip: IpAddr = if public {
                IpAddr::V4(Ipv4Addr::UNSPECIFIED)
            } else {
                host.parse()
                    .with_context(|| format!("invalid --host address: {host}"))?
            };

            let container = Container::new(ContainerConfig {
                server: ServerConfig::from_env(),
                mock_completions,
                base_url: OpenAiClient::configured_base_url(),
            });

            api::serve(Arc::new(container), SocketAddr::new(ip, port)).await?;
        }

        Commands::Chat { server } => {
            let gateway = Arc::new(HttpChatGateway::new(&server));
            debug!("Chat surface posting to {}", gateway.url());
            tui::run(gateway, &server).await?;
        }

        Commands::Ask { prompt, server } => {
            let gateway = HttpChatGateway::new(&server);
            debug!("Sending prompt to {}", gateway.url());
            let mut session = ChatSession::new();
            session.set_input(prompt);

            match session.submit(&gateway).await {
                SubmitOutcome::Added => {
                    if let Some(entry) = session.history().newest() {
                        println!("{}", entry.response());
                    }
                }
                SubmitOutcome::Failed => {
                    eprintln!("Error: {}", session.error().unwrap_or_default());
                    eprintln!("{}", tui::API_KEY_HINT);
                    std::process::exit(1);
                }
                SubmitOutcome::Skipped => {
                    eprintln!("Nothing to send: the prompt is empty.");
                }
            }
        }
    }

    Ok(())
}
