mod app;
mod editor;
mod render;
mod settings;
mod text;
mod viewer;

use anyhow::{Context, Result};
use ecode_highlight_config::Config;
use ecode_highlight_engine::{Category, Highlighter, KeywordSets, Palette};
use std::{env, path::PathBuf, process};

#[derive(Debug, PartialEq, Eq)]
enum Command {
    /// Render a document to HTML.
    Render {
        input: PathBuf,
        output: Option<PathBuf>,
        standalone: bool,
    },
    /// Open a document in the terminal editor.
    View { path: PathBuf },
    /// Show or change the stored preferences.
    Config { settings: Vec<(String, String)> },
}

impl Command {
    fn parse(args: &[String]) -> Result<Self, String> {
        let (name, rest) = args.split_first().ok_or("missing command")?;
        match name.as_str() {
            "render" => {
                let mut input = None;
                let mut output = None;
                let mut standalone = false;
                let mut rest = rest.iter();
                while let Some(arg) = rest.next() {
                    match arg.as_str() {
                        "--standalone" => standalone = true,
                        "--out" | "-o" => {
                            let path = rest.next().ok_or("--out needs a file")?;
                            output = Some(PathBuf::from(path));
                        }
                        flag if flag.starts_with('-') => {
                            return Err(format!("unknown option '{flag}'"));
                        }
                        _ if input.is_some() => return Err("more than one input file".into()),
                        path => input = Some(PathBuf::from(path)),
                    }
                }
                Ok(Command::Render {
                    input: input.ok_or("missing input file")?,
                    output,
                    standalone,
                })
            }
            "view" => match rest {
                [path] => Ok(Command::View {
                    path: PathBuf::from(path),
                }),
                _ => Err("view takes exactly one file".into()),
            },
            "config" => {
                let settings = rest
                    .iter()
                    .map(|arg| match arg.split_once('=') {
                        Some((key, value)) => Ok((key.to_string(), value.to_string())),
                        None => Err(format!("expected key=value, got '{arg}'")),
                    })
                    .collect::<Result<_, _>>()?;
                Ok(Command::Config { settings })
            }
            other => Err(format!("unknown command '{other}'")),
        }
    }
}

fn usage(program: &str) -> String {
    format!(
        "Usage: {program} render <file> [--out <file>] [--standalone]\n       {program} view <file>\n       {program} config [theme=light|dark] [font-size=<px>] [auto-save=true|false] [palette.<category>=<colour>]"
    )
}

/// The built-in highlighter with the config's palette overrides applied.
fn build_highlighter(config: &Config) -> Result<Highlighter> {
    let mut palette = Palette::default();
    for (name, color) in &config.palette {
        let category: Category = name
            .parse()
            .with_context(|| format!("Invalid [palette] entry '{name}'"))?;
        palette
            .set(category, color)
            .with_context(|| format!("Invalid [palette] entry '{name}'"))?;
    }
    Ok(Highlighter::new(KeywordSets::e_language(), palette)?)
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("ecode-highlight");

    let command = match Command::parse(args.get(1..).unwrap_or_default()) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("{}", usage(program));
            process::exit(1);
        }
    };

    let config = match Config::load_or_default() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };

    match command {
        Command::Render {
            input,
            output,
            standalone,
        } => render::run(
            &build_highlighter(&config)?,
            &config,
            &input,
            output.as_deref(),
            standalone,
        ),
        Command::View { path } => app::run(path, &build_highlighter(&config)?, &config),
        Command::Config { settings } => settings::run(config, &settings),
    }
}
