use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Html,
    Json,
    Tui,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Stdin,
    File(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    /// Write a default config file if none exists yet.
    InitConfig,
    Render { mode: Mode, input: Input },
}

pub fn usage(program: &str) -> String {
    format!(
        "Usage: {program} [--html | --json | --tui] [FILE]\n\
         \x20      {program} --init-config\n\
         \n\
         Renders selah markup from FILE, or from stdin when FILE is '-' or absent.\n\
         \n\
         --html  print HTML (default)\n\
         --json  print the parsed document as JSON\n\
         --tui   open a scrollable terminal preview (needs a FILE)\n\
         --init-config  write a default config file if none exists"
    )
}

/// Parses the arguments that follow the program name.
pub fn parse_args<S: AsRef<str>>(args: &[S]) -> Result<Command, String> {
    let mut mode = None;
    let mut input = None;
    let mut init_config = false;

    for arg in args {
        let arg = arg.as_ref();
        let flag = match arg {
            "-h" | "--help" => return Ok(Command::Help),
            "--init-config" => {
                init_config = true;
                continue;
            }
            "--html" => Some(Mode::Html),
            "--json" => Some(Mode::Json),
            "--tui" => Some(Mode::Tui),
            _ => None,
        };
        if let Some(flag) = flag {
            if mode.is_some_and(|m| m != flag) {
                return Err("only one of --html, --json, --tui may be given".to_string());
            }
            mode = Some(flag);
            continue;
        }
        if arg.starts_with('-') && arg != "-" {
            return Err(format!("unknown option '{arg}'"));
        }
        if input.is_some() {
            return Err(format!("unexpected extra argument '{arg}'"));
        }
        input = Some(if arg == "-" {
            Input::Stdin
        } else {
            Input::File(PathBuf::from(arg))
        });
    }

    if init_config {
        if mode.is_some() || input.is_some() {
            return Err("--init-config takes no other arguments".to_string());
        }
        return Ok(Command::InitConfig);
    }

    let mode = mode.unwrap_or(Mode::Html);
    let input = input.unwrap_or(Input::Stdin);
    if mode == Mode::Tui && input == Input::Stdin {
        return Err("--tui needs a FILE; stdin is used for key input".to_string());
    }
    Ok(Command::Render { mode, input })
}
