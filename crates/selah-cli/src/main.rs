use anyhow::{Context, Result};
use selah_config::Config;
use selah_engine::{parse_document, render_html};
use std::{
    env,
    io::{self, Read},
    process,
};

mod args;
mod tui;
mod view;

use args::{Command, Input, Mode, parse_args, usage};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("selah");

    let (mode, input) = match parse_args(args.get(1..).unwrap_or(&[])) {
        Ok(Command::Render { mode, input }) => (mode, input),
        Ok(Command::Help) => {
            println!("{}", usage(program));
            return Ok(());
        }
        Ok(Command::InitConfig) => return init_config(),
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("{}", usage(program));
            process::exit(1);
        }
    };

    let config = load_config();
    let source = read_input(&input)?;

    match mode {
        Mode::Html => println!("{}", render_html(&source, &config.inline, &config.html)),
        Mode::Json => {
            let document = parse_document(&source, &config.inline);
            println!("{}", serde_json::to_string_pretty(&document)?);
        }
        Mode::Tui => {
            let document = parse_document(&source, &config.inline);
            let title = match &input {
                Input::File(path) => path.display().to_string(),
                Input::Stdin => "stdin".to_string(),
            };
            tui::run(tui::App::new(title, &document))?;
        }
    }

    Ok(())
}

/// Falls back to defaults when the config file is missing or unreadable.
fn load_config() -> Config {
    match Config::load() {
        Ok(Some(config)) => {
            log::debug!("loaded config from {}", Config::config_path().display());
            config
        }
        Ok(None) => Config::default(),
        Err(e) => {
            log::warn!("{e}; using default settings");
            Config::default()
        }
    }
}

fn init_config() -> Result<()> {
    let config_path = Config::config_path();
    if config_path.exists() {
        println!("Config already exists at {}", config_path.display());
        return Ok(());
    }
    Config::default()
        .save()
        .with_context(|| format!("Failed to write config to {}", config_path.display()))?;
    println!("Wrote default config to {}", config_path.display());
    Ok(())
}

fn read_input(input: &Input) -> Result<String> {
    match input {
        Input::Stdin => {
            let mut source = String::new();
            io::stdin()
                .read_to_string(&mut source)
                .context("Failed to read message from stdin")?;
            Ok(source)
        }
        Input::File(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read message from {}", path.display())),
    }
}
