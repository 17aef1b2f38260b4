//! tinct - syntax highlighting for the terminal
//!
//! Reads source code from a file or stdin and prints it with ANSI
//! colors. The language comes from the -l flag or the file extension;
//! anything unrecognized prints as plain text.

use std::env;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process;

use tinct::error::{Result, TinctError};
use tinct::render::{render, RenderOptions};
use tinct::{Highlighter, Language, Theme};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

struct Args {
    file: Option<PathBuf>,
    language: Option<String>,
    theme: Option<PathBuf>,
    line_numbers: bool,
    wrap: bool,
}

fn run() -> Result<()> {
    // Parse command line arguments
    let mut args = Args {
        file: None,
        language: None,
        theme: None,
        line_numbers: false,
        wrap: false,
    };

    let mut argv = env::args().skip(1);
    while let Some(arg) = argv.next() {
        match arg.as_str() {
            "--help" | "-h" => {
                print_usage();
                return Ok(());
            }
            "--version" | "-V" => {
                print_version();
                return Ok(());
            }
            "--list-languages" => {
                for language in Language::all() {
                    println!("{}", language.name());
                }
                return Ok(());
            }
            "--language" | "-l" => {
                let value = argv
                    .next()
                    .ok_or_else(|| TinctError::Message("-l requires a language name".into()))?;
                args.language = Some(value);
            }
            "--theme" | "-t" => {
                let value = argv
                    .next()
                    .ok_or_else(|| TinctError::Message("-t requires a file path".into()))?;
                args.theme = Some(PathBuf::from(value));
            }
            "--line-numbers" | "-n" => args.line_numbers = true,
            "--wrap" | "-w" => args.wrap = true,
            other if other.starts_with('-') => {
                return Err(TinctError::Message(format!("unknown option: {}", other)));
            }
            _ => {
                if args.file.is_some() {
                    return Err(TinctError::Message("only one input file allowed".into()));
                }
                args.file = Some(PathBuf::from(arg));
            }
        }
    }

    // Read the source
    let code = match &args.file {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    // Resolve the language: explicit flag wins, then file extension
    let language = match args.language.as_deref() {
        Some(name) => Language::detect(Some(name)),
        None => args
            .file
            .as_deref()
            .and_then(Path::extension)
            .and_then(|ext| ext.to_str())
            .and_then(Language::from_extension),
    }
    .unwrap_or(Language::PlainText);

    let theme = match &args.theme {
        Some(path) => Theme::load(path)?,
        None => Theme::default(),
    };

    let styled = Highlighter::new(theme).highlight_language(&code, language);

    let options = RenderOptions {
        line_numbers: args.line_numbers,
        max_width: if args.wrap {
            crossterm::terminal::size()
                .ok()
                .map(|(cols, _)| cols as usize)
        } else {
            None
        },
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    render(&styled, &options, &mut out)?;
    out.flush()?;

    Ok(())
}

fn print_usage() {
    println!("tinct {} - syntax highlighting for the terminal", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: tinct [OPTIONS] [FILE]");
    println!();
    println!("Reads FILE, or stdin if no file is given.");
    println!();
    println!("Options:");
    println!("  -l, --language LANG  Highlight as LANG (see --list-languages)");
    println!("  -t, --theme FILE     Load colors from a TOML theme file");
    println!("  -n, --line-numbers   Show line numbers");
    println!("  -w, --wrap           Wrap long lines at the terminal width");
    println!("      --list-languages List supported language names");
    println!("  -h, --help           Show this help message");
    println!("  -V, --version        Show version information");
}

fn print_version() {
    println!("tinct {}", env!("CARGO_PKG_VERSION"));
}
