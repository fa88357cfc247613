use crate::{pkg::server::listen, prelude::Result};
use clap::{Parser, Subcommand};

mod export;

#[derive(Parser)]
#[command(about = "starts pmory backend services")]
struct Cmd {
    #[command(subcommand)]
    command: Option<SubCommandType>,
}

#[derive(Subcommand)]
enum SubCommandType {
    Listen,
    Export {
        #[arg(long)]
        collection: Option<String>,
    },
}

pub async fn run() -> Result<()> {
    let args = Cmd::parse();
    match args.command {
        Some(SubCommandType::Listen) => {
            listen().await?;
        }
        Some(SubCommandType::Export { collection }) => {
            export::apply(collection.as_deref()).await?;
        }
        None => {
            tracing::error!("no subcommand passed");
        }
    }
    Ok(())
}
