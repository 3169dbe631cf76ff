use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use ribbon_core::VERSION;

use crate::ui::OutputFormat;

/// Ribbon - track ribbon and mark progress across a Pokémon collection
#[derive(Parser)]
#[command(name = "ribbon")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the progress store
    #[arg(short, long, global = true, env = "RIBBON_STORE")]
    pub store: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Use ASCII symbols instead of unicode
    #[arg(long, global = true)]
    pub ascii: bool,
}

/// Shared `--json` / `--format` pair for listing commands.
#[derive(Args, Clone, Default)]
pub struct OutputArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format
    #[arg(long, value_enum, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,
}

/// Arguments for the `init` command
#[derive(Args)]
pub struct InitArgs {
    /// Path where the store will be created
    #[arg(value_name = "PATH")]
    pub path: Option<String>,

    /// Overwrite an existing config file
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the `games` command
#[derive(Args)]
pub struct GamesArgs {
    /// Only games from this generation
    #[arg(short, long)]
    pub generation: Option<u32>,

    /// Only games marked as owned in setup
    #[arg(long)]
    pub owned: bool,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Arguments for the `items` command
#[derive(Args)]
pub struct ItemsArgs {
    /// Only species introduced in this generation
    #[arg(short, long)]
    pub generation: Option<u32>,

    /// Case-insensitive name or id search
    #[arg(long)]
    pub search: Option<String>,

    /// Only species that can be shadow in Colosseum/XD
    #[arg(long)]
    pub shadow: bool,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Arguments for the `ribbons` command
#[derive(Args)]
pub struct RibbonsArgs {
    /// Only ribbons from this generation
    #[arg(short, long)]
    pub generation: Option<u32>,

    /// Only ribbons in this category (champion, contest, battle, ...)
    #[arg(short, long)]
    pub category: Option<String>,

    /// Case-insensitive search over name, id and description
    #[arg(long)]
    pub search: Option<String>,

    /// Show obtained status and eligibility for this Pokémon
    #[arg(long = "for", value_name = "KEY")]
    pub key: Option<String>,

    /// Only obtained or missing ribbons (requires a Pokémon)
    #[arg(long, value_name = "STATUS")]
    pub status: Option<String>,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Subcommand)]
pub enum PokemonSubcommand {
    /// Register an owned Pokémon
    Add(PokemonAddArgs),
    /// List owned Pokémon
    List(OutputArgs),
    /// Show an owned Pokémon or species and its progress
    Show(PokemonShowArgs),
    /// Edit an owned Pokémon
    Edit(PokemonEditArgs),
    /// Remove an owned Pokémon and its progress
    Remove(PokemonRemoveArgs),
    /// Make a Pokémon the default for commands that take a KEY
    Use(PokemonUseArgs),
}

/// Arguments for `pokemon add`
#[derive(Args)]
pub struct PokemonAddArgs {
    /// Species id (e.g. makuhita)
    #[arg(value_name = "SPECIES")]
    pub species: String,

    /// Game the Pokémon was caught or received in
    #[arg(long, value_name = "GAME")]
    pub origin: String,

    /// Nickname
    #[arg(long)]
    pub nickname: Option<String>,

    /// Game the Pokémon currently lives in (defaults to origin)
    #[arg(long, value_name = "GAME")]
    pub current: Option<String>,

    /// Current level
    #[arg(long)]
    pub level: Option<u32>,

    /// Free-form memo
    #[arg(long)]
    pub memo: Option<String>,

    /// Already moved into Pokémon HOME
    #[arg(long)]
    pub home: bool,

    /// Make the new Pokémon the default
    #[arg(long = "use")]
    pub make_active: bool,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Arguments for `pokemon show`
#[derive(Args)]
pub struct PokemonShowArgs {
    /// Instance id, id prefix, or species id (defaults to the active Pokémon)
    #[arg(value_name = "KEY")]
    pub key: Option<String>,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Arguments for `pokemon edit`
#[derive(Args)]
pub struct PokemonEditArgs {
    /// Instance id or unique id prefix
    #[arg(value_name = "ID")]
    pub id: String,

    #[arg(long)]
    pub nickname: Option<String>,

    /// Game the Pokémon was caught or received in
    #[arg(long, value_name = "GAME")]
    pub origin: Option<String>,

    /// Game the Pokémon currently lives in
    #[arg(long, value_name = "GAME")]
    pub current: Option<String>,

    #[arg(long)]
    pub level: Option<u32>,

    #[arg(long)]
    pub memo: Option<String>,

    /// Whether the Pokémon has been moved into Pokémon HOME
    #[arg(long, value_name = "BOOL")]
    pub home: Option<bool>,
}

/// Arguments for `pokemon remove`
#[derive(Args)]
pub struct PokemonRemoveArgs {
    /// Instance id or unique id prefix
    #[arg(value_name = "ID")]
    pub id: String,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for `pokemon use`
#[derive(Args)]
pub struct PokemonUseArgs {
    /// Instance id, id prefix, or species id
    #[arg(value_name = "KEY")]
    pub key: Option<String>,

    /// Forget the current default instead
    #[arg(long, conflicts_with = "key")]
    pub clear: bool,
}

/// Arguments for the `toggle` command
#[derive(Args)]
pub struct ToggleArgs {
    /// Instance id, id prefix, or species id
    #[arg(value_name = "KEY")]
    pub key: String,

    /// Ribbon id (e.g. national-ribbon)
    #[arg(value_name = "RIBBON")]
    pub ribbon: String,

    /// Record the ribbon even if the Pokémon is not eligible
    #[arg(long)]
    pub force: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for commands that act on one Pokémon
#[derive(Args)]
pub struct KeyArgs {
    /// Instance id, id prefix, or species id (defaults to the active Pokémon)
    #[arg(value_name = "KEY")]
    pub key: Option<String>,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Arguments for the `reset` command
#[derive(Args)]
pub struct ResetArgs {
    /// Instance id, id prefix, or species id (defaults to the active Pokémon)
    #[arg(value_name = "KEY")]
    pub key: Option<String>,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the `check` command
#[derive(Args)]
pub struct CheckArgs {
    /// Instance id, id prefix, or species id
    #[arg(value_name = "KEY")]
    pub key: String,

    /// Ribbon id
    #[arg(value_name = "RIBBON")]
    pub ribbon: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `export` command
#[derive(Args)]
pub struct ExportArgs {
    /// Write to a file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<String>,
}

/// Arguments for the `import` command
#[derive(Args)]
pub struct ImportArgs {
    /// Export file to import (use - for stdin)
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,

    /// Print the import summary as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum SetupSubcommand {
    /// Show owned games and hardware
    Show(OutputArgs),
    /// Toggle ownership of a game
    Game {
        /// Game id (e.g. emerald)
        #[arg(value_name = "GAME")]
        id: String,
    },
    /// Toggle ownership of a piece of hardware
    Hardware {
        /// gba, ds_lite, dsi, 3ds, switch
        #[arg(value_name = "HARDWARE")]
        name: String,
    },
    /// Mark setup as completed
    Complete,
    /// Clear all setup choices
    Reset {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

/// Arguments for the `transfers` command
#[derive(Args)]
pub struct TransfersArgs {
    /// Only routes leaving this generation
    #[arg(long, value_name = "GEN")]
    pub from: Option<u32>,

    /// Only routes arriving in this generation
    #[arg(long, value_name = "GEN")]
    pub to: Option<u32>,

    /// Hide deprecated routes
    #[arg(long)]
    pub active: bool,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a config file and an empty progress store
    Init(InitArgs),

    /// List games
    Games(GamesArgs),

    /// List species
    Items(ItemsArgs),

    /// List ribbons and marks
    Ribbons(RibbonsArgs),

    /// Manage owned Pokémon
    #[command(subcommand)]
    Pokemon(PokemonSubcommand),

    /// Toggle a ribbon for a Pokémon
    Toggle(ToggleArgs),

    /// Clear every ribbon recorded for a Pokémon
    Reset(ResetArgs),

    /// Show per-generation completion
    Status(KeyArgs),

    /// Explain whether a Pokémon can earn a ribbon
    Check(CheckArgs),

    /// List missing ribbons in the order they can be earned
    Roadmap(KeyArgs),

    /// Export all progress as JSON
    Export(ExportArgs),

    /// Replace all progress with an export file
    Import(ImportArgs),

    /// Manage owned games and hardware
    #[command(subcommand)]
    Setup(SetupSubcommand),

    /// List transfer routes between generations
    Transfers(TransfersArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_name = "SHELL")]
        shell: Shell,
    },
}
