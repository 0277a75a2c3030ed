//! mudlex CLI entry point.

use std::env;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use mudlex_foundation::{Error, Result};
use mudlex_runtime::{
    LineEditor, ReadResult, Repl, Session, WorldSnapshot, init_logging, serialize,
};
use tracing::debug;

/// CLI configuration parsed from arguments.
#[derive(Debug, Default)]
struct CliConfig {
    snapshot: Option<PathBuf>,
    save_to: Option<PathBuf>,
    batch_mode: bool,
    show_help: bool,
    show_version: bool,
    admin: bool,
    edit_mode: bool,
}

fn main() -> ExitCode {
    init_logging();
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match &e.context {
                Some(context) => eprintln!("\x1b[31mError: {e} ({context})\x1b[0m"),
                None => eprintln!("\x1b[31mError: {e}\x1b[0m"),
            }
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig> {
    let mut config = CliConfig::default();

    let mut args = args.into_iter().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-b" | "--batch" => config.batch_mode = true,
            "--admin" => config.admin = true,
            "--edit-mode" => config.edit_mode = true,
            "--save" => {
                let path = args
                    .next()
                    .ok_or_else(|| Error::invalid_argument("--save requires a path"))?;
                config.save_to = Some(PathBuf::from(path));
            }
            flag if flag.starts_with('-') => {
                return Err(Error::invalid_argument(format!("unknown option: {flag}")));
            }
            path => {
                if config.snapshot.is_some() {
                    return Err(Error::invalid_argument(format!(
                        "only one snapshot may be given, got extra: {path}"
                    )));
                }
                config.snapshot = Some(PathBuf::from(path));
            }
        }
    }

    Ok(config)
}

fn run(args: Vec<String>) -> Result<()> {
    let config = parse_args(args)?;
    debug!(?config, "parsed arguments");

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("mudlex {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let world = match &config.snapshot {
        Some(path) => serialize::load_from_file(path)?,
        None => WorldSnapshot::demo(),
    };

    if let Some(path) = &config.save_to {
        serialize::save_to_file(&world, path)?;
        println!("saved {}", path.display());
        return Ok(());
    }

    let mut session = Session::with_world(world);
    session.set_admin(config.admin);
    session.set_edit_mode(config.edit_mode);

    if config.batch_mode {
        let mut repl = Repl::with_editor(NoEditor).with_session(session);
        return repl.run_batch(io::stdin().lock(), io::stdout().lock());
    }

    let mut repl = Repl::new()?.with_session(session);
    repl.run()
}

/// Stand-in editor for batch mode, where input comes from stdin directly.
struct NoEditor;

impl LineEditor for NoEditor {
    fn read_line(&mut self, _prompt: &str) -> Result<ReadResult> {
        Ok(ReadResult::Eof)
    }

    fn add_history(&mut self, _line: &str) {}

    fn set_completions(&mut self, _words: Vec<String>) {}
}

fn print_help() {
    println!(
        "\x1b[1mmudlex\x1b[0m - Text adventure command parser

\x1b[1mUSAGE:\x1b[0m
    mudlex [OPTIONS] [SNAPSHOT]

\x1b[1mARGUMENTS:\x1b[0m
    [SNAPSHOT]    MessagePack world snapshot to load (default: demo tavern)

\x1b[1mOPTIONS:\x1b[0m
    -h, --help         Print help information
    -V, --version      Print version information
    -b, --batch        Parse lines from stdin and exit (no REPL)
    --admin            Enable builder verbs
    --edit-mode        Enable edit-mode verbs (with --admin)
    --save PATH        Write the loaded snapshot to PATH and exit

\x1b[1mENVIRONMENT:\x1b[0m
    MUDLEX_LOG         Log filter, e.g. mudlex_parser=debug (default: warn)

\x1b[1mEXAMPLES:\x1b[0m
    mudlex                           Start the REPL over the demo tavern
    mudlex --save tavern.mpk         Write the demo tavern to a file
    mudlex tavern.mpk                Load a snapshot, then start the REPL
    echo 'take sword' | mudlex -b    Parse one line and exit

\x1b[1mREPL COMMANDS:\x1b[0m
    :admin on|off    Toggle builder verbs
    :edit on|off     Toggle edit-mode verbs
    :scope           List aliases in scope
    :save PATH       Save the world snapshot
    :load PATH       Load a world snapshot
    :help            Show REPL help
    :quit            Leave (or Ctrl+D)"
    );
}
