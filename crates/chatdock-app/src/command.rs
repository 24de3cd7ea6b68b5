//! Input line parsing for the terminal host.

use chatdock_widget::ModelId;

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Toggle,
    Clear,
    Model(ModelId),
    ListModels,
    Quit,
    Send(String),
    Invalid(String),
}

pub fn parse(line: &str) -> Command {
    let trimmed = line.trim();
    let Some(rest) = trimmed.strip_prefix('/') else {
        return Command::Send(line.to_string());
    };

    let (name, arg) = match rest.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (rest, ""),
    };

    match name {
        "open" | "close" | "toggle" => Command::Toggle,
        "clear" => Command::Clear,
        "models" => Command::ListModels,
        "quit" | "exit" => Command::Quit,
        "model" => match arg.parse() {
            Ok(model) => Command::Model(model),
            Err(e) => Command::Invalid(e.to_string()),
        },
        other => Command::Invalid(format!("unknown command: /{other}")),
    }
}
