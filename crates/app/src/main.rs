use dioxus::prelude::*;
use shared_types::{ShellConfig, ShellMode};

mod icons;
mod role_switcher;
mod session;
mod shell;
mod standalone;
mod views;

/// Shell settings, compiled in so the app needs no filesystem or
/// environment access at runtime.
const SHELL_CONFIG: &str = include_str!("../shell.toml");

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    if let Err(err) = dioxus::logger::init(log_level(SHELL_CONFIG)) {
        eprintln!("[logger] {err}");
    }
    navigation::config::load_shell_config(SHELL_CONFIG);

    dioxus::launch(App);
}

/// Log level from the `[logging]` section, INFO if missing or unparseable.
fn log_level(contents: &str) -> tracing::Level {
    ShellConfig::from_toml_str(contents)
        .ok()
        .and_then(|config| config.logging.level.parse().ok())
        .unwrap_or(tracing::Level::INFO)
}

#[component]
fn App() -> Element {
    let session = session::use_session_provider();
    let mode = session.mode();

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        match mode {
            ShellMode::Shell => rsx! { shell::Shell {} },
            ShellMode::Standalone(app) => rsx! { standalone::StandaloneRoot { app: app } },
        }
    }
}
