use dioxus::prelude::*;
use store::BrowserConfig;

const MAIN_CSS: Asset = asset!("/assets/main.css");
const CONFIG_TOML: &str = include_str!("../adab.toml");

fn main() {
    dioxus::launch(App);
}

fn load_config() -> BrowserConfig {
    let config = BrowserConfig::from_toml(CONFIG_TOML).unwrap_or_else(|e| {
        tracing::warn!("falling back to default config: {e}");
        BrowserConfig::default()
    });
    config.with_overrides(option_env!("ADAB_DATA_URL"), option_env!("ADAB_DATA_KEY"))
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);

    let theme: ui::ThemeSignal = use_context_provider(|| Signal::new(ui::load_theme()));
    use_effect(move || ui::apply_theme(theme()));

    rsx! {
        // Global app resources
        document::Title { "{config.ui.site_title}" }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: ui::BROWSER_CSS }

        ui::BrowserProvider {
            config: config.data.clone(),
            div {
                class: "app-shell",
                dir: "rtl",
                lang: "ar",
                ui::Navbar { site_title: config.ui.site_title.clone() }
                main {
                    class: "app-main",
                    ui::views::ActiveView {}
                }
                footer {
                    class: "app-footer",
                    p { "جميع النصوص من التراث العربي." }
                }
            }
        }
    }
}
