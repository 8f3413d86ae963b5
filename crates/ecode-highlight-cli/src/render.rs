use anyhow::Result;
use ecode_highlight_config::Config;
use ecode_highlight_engine::{Highlighter, PageStyle, io, standalone_page};
use std::path::Path;

/// Markup for `document`, optionally wrapped in a page styled from `config`.
pub fn render_document(
    highlighter: &Highlighter,
    config: &Config,
    document: &str,
    standalone: bool,
) -> String {
    let markup = highlighter.render_markup(document);
    if !standalone {
        return markup;
    }

    let style = PageStyle {
        dark: config.is_dark(),
        font_size_px: config.font_size,
    };
    standalone_page(&markup, &style)
}

pub fn run(
    highlighter: &Highlighter,
    config: &Config,
    input: &Path,
    output: Option<&Path>,
    standalone: bool,
) -> Result<()> {
    let document = io::read_source(input)?;
    let content = render_document(highlighter, config, &document, standalone);

    match output {
        Some(path) => {
            io::write_output(path, &content)?;
            log::info!("Rendered {} to {}", input.display(), path.display());
        }
        None => print!("{content}"),
    }

    Ok(())
}
