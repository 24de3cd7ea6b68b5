mod cli;
mod command;

use std::path::Path;
use std::sync::Arc;

use chatdock_config::ChatdockConfig;
use chatdock_widget::{
    build_view, render_html, render_text, ChatSession, CredentialStore, LayeredStore, MemoryStore,
    ModelId,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use crate::command::Command;

fn load_config(path: Option<&str>) -> ChatdockConfig {
    let result = match path {
        Some(path) => {
            tracing::info!("Using config override: {path}");
            chatdock_config::load_config_from(Path::new(path))
        }
        None => chatdock_config::load_config(),
    };
    result.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        ChatdockConfig::default()
    })
}

fn credential_store(token: Option<String>, slot: &str) -> Arc<dyn CredentialStore> {
    let standard = LayeredStore::standard();
    match token {
        Some(token) => {
            let memory = MemoryStore::new();
            memory.set(slot, token);
            Arc::new(
                LayeredStore::new()
                    .with(Arc::new(memory))
                    .with(Arc::new(standard)),
            )
        }
        None => Arc::new(standard),
    }
}

fn init_tracing(log_level: Option<&str>) {
    let log_directive = log_level.unwrap_or("chatdock=info");
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| "chatdock=info".parse().expect("static directive")),
            ),
        )
        .init();
}

#[tokio::main]
async fn main() {
    let args = cli::parse();
    init_tracing(args.log_level.as_deref());

    tracing::info!("Chatdock v{} starting...", env!("CARGO_PKG_VERSION"));

    let mut config = load_config(args.config.as_deref());

    if let Some(model) = args.model {
        config.chat.default_model = model;
    }

    let widget = config.widget.clone();
    let html = args.html;
    let store = credential_store(args.token, &config.chat.credential_slot);

    let session = match ChatSession::builder(config)
        .credential_store(store)
        .on_render(move |state| {
            let view = build_view(state, &widget);
            if html {
                println!("{}", render_html(&view));
            } else {
                print!("{}", render_text(&view));
            }
        })
        .build()
    {
        Ok(session) => session,
        Err(e) => {
            eprintln!("chatdock: {e}");
            std::process::exit(1);
        }
    };

    if !session.snapshot().is_open() {
        session.toggle_open();
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                tracing::warn!("stdin read failed: {e}");
                break;
            }
        };

        match command::parse(&line) {
            Command::Toggle => {
                session.toggle_open();
            }
            Command::Clear => session.clear(),
            Command::Model(model) => session.select_model(model),
            Command::ListModels => {
                let current = session.snapshot().selected_model();
                for model in ModelId::ALL {
                    let marker = if model == current { "*" } else { " " };
                    println!("{marker} {:<28} {}", model.wire_id(), model.display_name());
                }
            }
            Command::Quit => break,
            Command::Send(text) => session.send_message(&text).await,
            Command::Invalid(reason) => eprintln!("chatdock: {reason}"),
        }
    }

    tracing::info!("Chatdock exiting");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::Mutex;

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn missing_config_override_warns_and_uses_defaults() {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        let config = tracing::subscriber::with_default(subscriber, || {
            load_config(Some("/nonexistent/chatdock.toml"))
        });

        let logs = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert!(logs.contains("Using config override: /nonexistent/chatdock.toml"));
        assert!(logs.contains("Config load failed, using defaults"));
        assert_eq!(config.chat.history_limit, 10);
        assert_eq!(config.widget.title, "AI Assistant");
    }

    #[test]
    fn token_flag_takes_priority_over_standard_store() {
        let store = credential_store(Some("from-flag".into()), "f1-token");
        assert_eq!(store.get("f1-token").as_deref(), Some("from-flag"));
    }
}
