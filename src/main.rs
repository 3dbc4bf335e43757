use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use url::Url;

use signed_messages::Result;

/// Verify and collect messages signed with P-256 keys.
#[derive(Parser, Debug)]
#[clap(name = "sigmsg", author, version, about, long_about = None)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a signing key.
    Keygen {
        /// Write the keystore file to directory.
        #[clap(parse(from_os_str))]
        dir: PathBuf,
    },
    /// Sign a message and print the result.
    Sign {
        /// Keystore for the signing key.
        #[clap(short, long, parse(from_os_str))]
        key: PathBuf,

        /// Message content.
        content: String,
    },
    /// Sign a message and submit it to a server.
    Submit {
        /// Server URL.
        #[clap(short, long, default_value = "http://127.0.0.1:8080")]
        server: Url,

        /// Keystore for the signing key.
        #[clap(short, long, parse(from_os_str))]
        key: PathBuf,

        /// Message content.
        content: String,
    },
    /// List the messages verified by a server.
    Messages {
        /// Server URL.
        #[clap(short, long, default_value = "http://127.0.0.1:8080")]
        server: Url,
    },
    /// Verify a signed message file.
    Verify {
        /// JSON file containing a signed message.
        #[clap(parse(from_os_str))]
        file: PathBuf,
    },
    /// Start a server.
    Server {
        /// Bind to host:port.
        #[clap(short, long, default_value = "127.0.0.1:8080")]
        bind: String,

        /// Config file to load.
        #[clap(short, long, parse(from_os_str))]
        config: PathBuf,
    },
}

async fn run() -> Result<()> {
    let args = Cli::parse();

    match args.command {
        Command::Keygen { dir } => {
            let public_key = signed_messages_client::keygen(dir).await?;
            serde_json::to_writer_pretty(std::io::stdout(), &public_key)?;
        }
        Command::Sign { key, content } => {
            let doc = signed_messages_client::sign(key, content).await?;
            serde_json::to_writer_pretty(std::io::stdout(), &doc)?;
        }
        Command::Submit {
            server,
            key,
            content,
        } => {
            let doc =
                signed_messages_client::submit(server, key, content).await?;
            serde_json::to_writer_pretty(std::io::stdout(), &doc)?;
        }
        Command::Messages { server } => {
            let docs = signed_messages_client::list(server).await?;
            serde_json::to_writer_pretty(std::io::stdout(), &docs)?;
        }
        Command::Verify { file } => {
            let verified = signed_messages_client::verify_file(file)?;
            println!("{}", verified);
            if !verified {
                std::process::exit(1);
            }
        }
        Command::Server { bind, config } => {
            signed_messages_server::start(bind, config).await?;
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match run().await {
        Ok(_) => {}
        Err(e) => {
            tracing::error!("{}", e);
        }
    }
    Ok(())
}
