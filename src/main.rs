//! boxmenu - Box-model console menu renderer.
//!
//! This binary renders a sample menu frame with the configured style and
//! prints it to stdout. An optional argument names the config file to use;
//! otherwise the default locations are searched.

use boxmenu_config::{Config, SectionKind};
use boxmenu_format::{
    ItemsSection, MenuFooter, MenuHeader, MenuItem, MenuPrompt, TextSection, compose,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = match std::env::args_os().nth(1) {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    debug!(width = config.style.width, "loaded configuration");

    for line in render_sample(&config)? {
        println!("{line}");
    }
    Ok(())
}

/// Renders the demo menu with each section's configured style.
fn render_sample(config: &Config) -> boxmenu_format::Result<Vec<String>> {
    let header_style = config.style_for(SectionKind::Header);
    let text_style = config.style_for(SectionKind::Text);
    let items_style = config.style_for(SectionKind::Items);
    let footer_style = config.style_for(SectionKind::Footer);
    let prompt_style = config.style_for(SectionKind::Prompt);

    let header = MenuHeader::new(&header_style)
        .title("boxmenu")
        .subtitle("Box-model console menus");
    let text = TextSection::new(&text_style)
        .text("Pick an entry by number. Entries marked with a glyph open a submenu or keep the menu open.")
        .show_bottom_border(true);
    let items = ItemsSection::new(
        &items_style,
        vec![
            MenuItem::new("Open file"),
            MenuItem::submenu("Settings"),
            MenuItem::new("Refresh").with_exit(false),
            MenuItem::new("Quit"),
        ],
    )
    .markers(config.markers.clone());
    let footer = MenuFooter::new(&footer_style);
    let prompt = MenuPrompt::new(&prompt_style).prompt(config.prompt.clone());

    compose(&[&header, &text, &items, &footer, &prompt])
}
