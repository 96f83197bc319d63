use anyhow::{Context, Result, bail};
use std::{
    env,
    io::{self, Read},
    path::{Path, PathBuf},
    process,
};
use unibot_format_config::Config;
use unibot_format_engine::{
    CannedAnswers, ChatRequest, DeviceId, HtmlTarget, HtmlTheme, TreeTarget, format_document,
    render, reply_text,
};

const USAGE: &str = "[--tree] [--config <path>] [--ask <question> | <file>]";

/// Where the answer text comes from.
enum Input {
    Stdin,
    File(PathBuf),
    Question(String),
}

struct Args {
    tree: bool,
    config_path: Option<PathBuf>,
    input: Input,
}

fn parse_args(args: &[String]) -> Result<Args> {
    let mut tree = false;
    let mut config_path = None;
    let mut input = Input::Stdin;

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--tree" => tree = true,
            "--config" => {
                let path = iter.next().context("--config needs a path")?;
                config_path = Some(Config::expand_path(Path::new(path)));
            }
            "--ask" => {
                let question = iter.next().context("--ask needs a question")?;
                input = Input::Question(question.clone());
            }
            flag if flag.starts_with("--") => bail!("unknown option '{flag}'"),
            path => input = Input::File(PathBuf::from(path)),
        }
    }

    Ok(Args {
        tree,
        config_path,
        input,
    })
}

fn load_config(path: Option<&PathBuf>) -> Result<Config> {
    let config_path = path.cloned().unwrap_or_else(Config::config_path);
    log::info!("Config path: {}", config_path.display());
    match Config::load_from_path(&config_path)? {
        Some(config) => Ok(config),
        None if path.is_some() => bail!("config file '{}' not found", config_path.display()),
        None => Ok(Config::default()),
    }
}

fn read_input(input: &Input) -> Result<String> {
    match input {
        Input::Stdin => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok(text)
        }
        Input::File(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read '{}'", path.display())),
        Input::Question(question) => {
            let request = ChatRequest::new(question, vec![], DeviceId::new("cli"))?;
            Ok(reply_text(&CannedAnswers, &request))
        }
    }
}

/// Renders `text` as a JSON node tree or as HTML. Answers without structure
/// are returned verbatim instead of as HTML.
fn render_output(text: &str, tree: bool, theme: HtmlTheme) -> Result<String> {
    let doc = format_document(text);

    if tree {
        let rendered = render(&doc, TreeTarget::new());
        return Ok(serde_json::to_string_pretty(&rendered.content)?);
    }

    let rendered = render(&doc, HtmlTarget::new(theme));
    if !rendered.has_structure {
        log::info!("no structure found; printing the answer as is");
        return Ok(text.to_string());
    }
    Ok(rendered.content)
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args: Vec<String> = env::args().collect();
    let parsed = match parse_args(&args) {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Usage: {} {USAGE}", args[0]);
            process::exit(1);
        }
    };

    let config = load_config(parsed.config_path.as_ref())?;
    let text = read_input(&parsed.input)?;
    let output = render_output(&text, parsed.tree, config.theme)?;
    if output.ends_with('\n') {
        print!("{output}");
    } else {
        println!("{output}");
    }

    Ok(())
}
