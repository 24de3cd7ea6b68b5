use clap::Parser;

/// Chatdock — chat with the collection assistant from a terminal.
#[derive(Parser, Debug)]
#[command(name = "chatdock", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log level override (e.g. debug, chatdock_ai=debug).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Model to start with, by wire id.
    #[arg(long)]
    pub model: Option<String>,

    /// Bearer credential for this run; otherwise the environment and
    /// credentials file are consulted.
    #[arg(long)]
    pub token: Option<String>,

    /// Print the HTML view instead of plain text.
    #[arg(long)]
    pub html: bool,
}

pub fn parse() -> Args {
    Args::parse()
}
