//! # inikit demo application
//!
//! A small CLI over one INI file, showing how to wire inikit into a
//! clap app. It exists to demonstrate and manually verify the library.
//!
//! ## Running
//!
//! ```sh
//! cargo run --example inikit_demo -- --file demo.ini ini set -s server port 8080
//! cargo run --example inikit_demo -- --file demo.ini ini list
//! RUST_LOG=debug cargo run --example inikit_demo -- --file demo.ini show --style spaced
//! ```
//!
//! Without `--file`, the demo uses `demo.ini` in the platform config
//! directory.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use inikit::{IniArgs, IniFile, ParseFlags, SaveFlags, Source};

/// inikit demo — inspect and edit an INI file.
#[derive(Parser, Debug)]
#[command(name = "inikit-demo")]
struct Cli {
    /// INI file to operate on.
    #[arg(long, global = true)]
    file: Option<PathBuf>,

    /// Treat `#` and `//` as comment markers when reading.
    #[arg(long, global = true)]
    comments: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the whole file as it would be saved.
    Show {
        #[arg(long, value_enum, default_value_t = Style::Plain)]
        style: Style,
    },
    /// Read or edit keys (list, get, set, unset, remove).
    Ini(IniArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Style {
    Plain,
    Spaced,
    Pruned,
}

impl Style {
    fn flags(self) -> SaveFlags {
        match self {
            Style::Plain => SaveFlags::empty(),
            Style::Spaced => {
                SaveFlags::SPACE_KEYS | SaveFlags::SPACE_SECTIONS | SaveFlags::PAD_SECTIONS | SaveFlags::TAB_KEYS
            }
            Style::Pruned => SaveFlags::PRUNE,
        }
    }
}

fn source_for(cli: &Cli) -> Source {
    match &cli.file {
        Some(path) => Source::File(path.clone()),
        None => Source::platform("inikit-demo", "demo.ini").unwrap_or_else(|| {
            eprintln!("No home directory; pass --file");
            std::process::exit(1);
        }),
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let source = source_for(&cli);

    let parse_flags = if cli.comments {
        ParseFlags::COMMENTS_ALL
    } else {
        ParseFlags::empty()
    };

    // A file that does not exist yet starts empty and is created on first save.
    let exists = source.path().is_some_and(|p| p.exists());
    let mut ini = IniFile::builder()
        .source(source)
        .parse_flags(parse_flags)
        .save_flags(SaveFlags::SPACE_KEYS | SaveFlags::PAD_SECTIONS)
        .parse_on_open(exists)
        .open()
        .unwrap_or_else(|e| {
            eprintln!("Failed to read INI file:\n{e}");
            std::process::exit(1);
        });

    match cli.command {
        Commands::Show { style } => print!("{}", inikit::render(ini.document(), style.flags())),
        Commands::Ini(args) => {
            let action = args.into_action();
            ini.handle_and_print(&action).unwrap_or_else(|e| {
                eprintln!("INI error:\n{e}");
                std::process::exit(1);
            });
        }
    }
}
