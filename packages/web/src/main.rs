use api::{AppMode, SiteConfig};
use dioxus::prelude::*;

use views::{Home, NotFound};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    install_panic_hook();
    log_runtime_config(&SiteConfig::compiled());
    dioxus::launch(App);
}

fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        eprintln!("panic: {info}");
    }));
}

/// Logs the same compiled-in config `App` runs on.
fn log_runtime_config(config: &SiteConfig) {
    let mode = match config.mode {
        AppMode::Local => "local",
        AppMode::Production => "production",
    };

    eprintln!("startup: APP_MODE={mode}");
    eprintln!("startup: RELAY_ENDPOINT={}", config.relay_endpoint);
    eprintln!(
        "startup: RELAY_ACCESS_KEY={}",
        redact_key(config.relay_access_key.as_deref())
    );

    log_missing_envs("relay", &config.missing_production_keys());
}

fn redact_key(value: Option<&str>) -> String {
    match value {
        None => "<missing>".to_string(),
        Some(key) if key.chars().count() <= 4 => "***".to_string(),
        Some(key) => format!("{}***", key.chars().take(4).collect::<String>()),
    }
}

fn log_missing_envs(group: &str, keys: &[&str]) {
    if keys.is_empty() {
        return;
    }

    eprintln!(
        "startup: WARNING missing {group} envs: {}",
        keys.join(", ")
    );
}

#[component]
fn App() -> Element {
    let config = use_hook(SiteConfig::compiled);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        ui::PortfolioTheme {}
        ui::SiteProvider { config,
            Router::<Route> {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redact_key_keeps_a_short_prefix() {
        assert_eq!(redact_key(None), "<missing>");
        assert_eq!(redact_key(Some("abc")), "***");
        assert_eq!(redact_key(Some("abcd-1234")), "abcd***");
    }

    #[test]
    fn redact_key_counts_characters_not_bytes() {
        assert_eq!(redact_key(Some("kéé-1234")), "kéé-***");
        assert_eq!(redact_key(Some("çğüş")), "***");
    }
}
