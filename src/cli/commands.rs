use crate::model::Month;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "basket")]
#[command(
    author,
    version,
    about = "Seasonal produce browser and projects hub for the terminal"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file (searches upward for .basket.toml by default)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Reference month as 1-12 or a name such as "nov" (defaults to the current month)
    #[arg(long, global = true, env = "BASKET_MONTH", value_parser = parse_month)]
    pub month: Option<Month>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

fn parse_month(s: &str) -> Result<Month, String> {
    s.parse::<Month>().map_err(|e| e.to_string())
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new basket project
    Init {
        /// Directory for preference snapshots, relative to the project
        #[arg(long)]
        state_dir: Option<String>,

        /// Market selected until another is chosen
        #[arg(long)]
        default_market: Option<String>,
    },

    /// List produce for the selected market
    #[command(visible_alias = "ls")]
    Produce {
        /// Search query (supports name:, about:, tag:, regex:)
        query: Option<String>,

        /// Sort for this listing only
        #[arg(short, long, value_enum)]
        sort: Option<ProduceSortArg>,

        /// Persona for this listing only
        #[arg(short, long, value_enum)]
        persona: Option<PersonaArg>,

        /// Show tips and nutrition for every item
        #[arg(short, long)]
        expand: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one produce item in full
    Show {
        /// Produce ID
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List or search markets
    Markets {
        /// Filter by market name or city
        query: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Select the market to browse
    Market {
        /// Market ID
        id: String,
    },

    /// Set the produce sort order
    Sort {
        #[arg(value_enum)]
        mode: ProduceSortArg,
    },

    /// Set the persona, or cycle to the next one when omitted
    Persona {
        #[arg(value_enum)]
        persona: Option<PersonaArg>,
    },

    /// Set the theme, or toggle it when omitted
    Theme {
        #[arg(value_enum)]
        theme: Option<ThemeArg>,
    },

    /// Show stored preferences
    Prefs {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Projects hub
    Hub {
        #[command(subcommand)]
        command: HubCommands,
    },
}

#[derive(Subcommand)]
pub enum HubCommands {
    /// Show project cards
    #[command(visible_alias = "ls")]
    List {
        /// Search query (supports name:, about:, tag:, regex:)
        query: Option<String>,

        /// Layout for this listing only
        #[arg(short, long, value_enum)]
        layout: Option<LayoutArg>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one project's details
    Show {
        /// Project ID
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Open a project's page
    Open {
        /// Project ID
        id: String,

        /// Print the target instead of launching it
        #[arg(long)]
        print: bool,
    },

    /// Show every project with its dashboard settings
    Dashboard {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Change a project's visibility, pin or persona
    Set {
        /// Project ID
        id: String,

        /// Show the project on the cards view
        #[arg(long, conflicts_with = "hide")]
        show: bool,

        /// Hide the project from the cards view
        #[arg(long)]
        hide: bool,

        /// Pin the project to the top
        #[arg(long, conflicts_with = "unpin")]
        pin: bool,

        /// Unpin the project
        #[arg(long)]
        unpin: bool,

        /// Persona view key
        #[arg(long)]
        persona: Option<String>,
    },

    /// Set the cards layout
    Layout {
        #[arg(value_enum)]
        layout: LayoutArg,
    },

    /// Change hub-wide settings
    Configure {
        #[arg(long, value_enum)]
        layout: Option<LayoutArg>,

        #[arg(long, value_enum)]
        sort: Option<ProjectSortArg>,

        /// Accent intensity, 0-100
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
        accent: Option<u8>,
    },

    /// Set the hub theme, or toggle it when omitted
    Theme {
        #[arg(value_enum)]
        theme: Option<ThemeArg>,
    },

    /// Restore the default hub settings and projects
    Reset,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ProduceSortArg {
    Fresh,
    Az,
}

impl From<ProduceSortArg> for crate::model::ProduceSort {
    fn from(arg: ProduceSortArg) -> Self {
        match arg {
            ProduceSortArg::Fresh => crate::model::ProduceSort::Fresh,
            ProduceSortArg::Az => crate::model::ProduceSort::Az,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum PersonaArg {
    Default,
    Focus,
    Demo,
}

impl From<PersonaArg> for crate::model::BasketPersona {
    fn from(arg: PersonaArg) -> Self {
        match arg {
            PersonaArg::Default => crate::model::BasketPersona::Default,
            PersonaArg::Focus => crate::model::BasketPersona::Focus,
            PersonaArg::Demo => crate::model::BasketPersona::Demo,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ThemeArg {
    Dark,
    Light,
}

impl From<ThemeArg> for crate::model::Theme {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Dark => crate::model::Theme::Dark,
            ThemeArg::Light => crate::model::Theme::Light,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LayoutArg {
    Grid,
    List,
    Compact,
}

impl From<LayoutArg> for crate::model::Layout {
    fn from(arg: LayoutArg) -> Self {
        match arg {
            LayoutArg::Grid => crate::model::Layout::Grid,
            LayoutArg::List => crate::model::Layout::List,
            LayoutArg::Compact => crate::model::Layout::Compact,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ProjectSortArg {
    Pinned,
    Recent,
    Name,
}

impl From<ProjectSortArg> for crate::model::ProjectSort {
    fn from(arg: ProjectSortArg) -> Self {
        match arg {
            ProjectSortArg::Pinned => crate::model::ProjectSort::Pinned,
            ProjectSortArg::Recent => crate::model::ProjectSort::Recent,
            ProjectSortArg::Name => crate::model::ProjectSort::Name,
        }
    }
}
