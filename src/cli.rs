//! Clap adapter for inikit.
//!
//! Compiled only with the `clap` Cargo feature (on by default). Embed
//! [`IniArgs`] in your own clap derive to get `list|get|set|unset|remove`
//! subcommands that operate on one INI file.
//!
//! The only bridge to the core is [`IniArgs::into_action()`], which converts
//! clap-parsed arguments into an [`IniAction`](crate::IniAction) for
//! [`IniFile::handle()`](crate::IniFile::handle).

use clap::{Args, Subcommand};

use crate::types::IniAction;

/// Clap-derived args for an `ini` subcommand group.
///
/// ```ignore
/// #[derive(Subcommand)]
/// enum Commands {
///     Ini(IniArgs),
/// }
/// ```
#[derive(Debug, Args)]
pub struct IniArgs {
    /// Section to operate on. Omit for the unnamed default section.
    #[arg(short, long, global = true)]
    pub section: Option<String>,

    #[command(subcommand)]
    pub action: Option<IniSubcommand>,
}

#[derive(Debug, Subcommand)]
pub enum IniSubcommand {
    /// Show every key (or every key of --section).
    List {
        /// Print as JSON instead of `key = value` lines.
        #[arg(long)]
        json: bool,
    },
    /// Show the stored value of a key.
    Get { key: String },
    /// Store a value and save the file.
    Set { key: String, value: String },
    /// Remove a key and save the file.
    Unset { key: String },
    /// Remove the whole --section and save the file.
    Remove,
}

impl IniArgs {
    /// Convert clap-parsed args into a framework-agnostic `IniAction`.
    ///
    /// Bare invocation lists everything. `list` is scoped to `--section`
    /// only when one is given; the other actions default to the unnamed
    /// section.
    pub fn into_action(self) -> IniAction {
        let scoped = self.section.clone();
        let section = self.section.unwrap_or_default();
        match self.action {
            None => IniAction::List {
                section: scoped,
                json: false,
            },
            Some(IniSubcommand::List { json }) => IniAction::List {
                section: scoped,
                json,
            },
            Some(IniSubcommand::Get { key }) => IniAction::Get { section, key },
            Some(IniSubcommand::Set { key, value }) => IniAction::Set { section, key, value },
            Some(IniSubcommand::Unset { key }) => IniAction::Unset { section, key },
            Some(IniSubcommand::Remove) => IniAction::Remove { section },
        }
    }
}
