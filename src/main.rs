use std::path::PathBuf;

use clap::{Parser, Subcommand};
use telebot_api::requests::{GetFile, GetMe, GetUpdates, SendMessage};
use telebot_api::TelegramBot;
use telebot_core::config::Config;
use telebot_core::error::{Result, TelebotError};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "telebot", about = "Talk to the Telegram Bot API from the command line")]
struct Cli {
    /// Config file; TELEBOT_* env vars override it.
    #[arg(long, env = "TELEBOT_CONFIG", default_value = "telebot.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the bot's identity (default)
    Me,
    /// Send a text message
    Send { chat_id: i64, text: String },
    /// List pending updates
    Updates {
        #[arg(long)]
        offset: Option<i64>,
    },
    /// Download a file by its file_id
    Download { file_id: String, output: PathBuf },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() {
    init_tracing();
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("fatal: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::load(&cli.config)?;
    config.require_token()?;
    let bot = TelegramBot::from_config(&config.telegram)?;

    match cli.command.unwrap_or(Commands::Me) {
        Commands::Me => {
            let me = bot.get_me(&GetMe).await?.ok_result()?;
            println!("{} (id {})", me.first_name, me.id);
            if let Some(username) = me.username {
                println!("@{username}");
            }
        }
        Commands::Send { chat_id, text } => {
            let message = bot
                .send_message(&SendMessage::new(chat_id, text))
                .await?
                .ok_result()?;
            println!("sent message {} to chat {}", message.message_id, message.chat.id);
        }
        Commands::Updates { offset } => {
            let request = GetUpdates {
                offset,
                ..GetUpdates::default()
            };
            for update in bot.get_updates(&request).await?.ok_result()? {
                let text = update
                    .message
                    .as_ref()
                    .and_then(|m| m.text.as_deref())
                    .unwrap_or("<no text>");
                println!("{}: {text}", update.update_id);
            }
        }
        Commands::Download { file_id, output } => {
            let file = bot.get_file(&GetFile::new(file_id)).await?.ok_result()?;
            let file_path = file.file_path.ok_or_else(|| TelebotError::Api {
                error_code: None,
                description: "file has no downloadable path".to_string(),
            })?;
            let bytes = bot.try_download_file(&file_path).await?;
            tokio::fs::write(&output, &bytes).await?;
            println!("wrote {} bytes to {}", bytes.len(), output.display());
        }
    }

    Ok(())
}
