use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum RouteCommands {
    /// Resolve a URL or path to the tab it shows
    Resolve {
        /// Full URL, path, `?tab=` query or `#fragment`
        location: String,
        #[arg(long)]
        json: bool,
    },

    /// List tabs with their canonical paths and modes
    Tabs {
        #[arg(long)]
        json: bool,
    },

    /// Replay a navigation session against an in-memory history
    Walk {
        /// Initial address bar contents
        #[arg(long, default_value = "/")]
        start: String,
        /// Steps: a tab slug, `back`, `forward`, `web` or `app`
        steps: Vec<String>,
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
pub(crate) enum NotebookCommands {
    /// List findings, most recent first (merges the remote collection first
    /// when remote sync is enabled)
    List {
        /// Skip the remote merge and read local storage only
        #[arg(long)]
        local: bool,
        #[arg(long)]
        json: bool,
    },

    /// Show one finding
    Show {
        id: String,
        /// Skip the remote merge and read local storage only
        #[arg(long)]
        local: bool,
        #[arg(long)]
        json: bool,
    },

    /// Create a finding by hand
    New {
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        notes: String,
        #[arg(long, default_value = "")]
        observations: String,
        #[arg(long, default_value = "")]
        conclusion: String,
        #[arg(long, default_value = "")]
        lab: String,
        /// Chemical used (repeatable)
        #[arg(long = "chemical")]
        chemicals: Vec<String>,
        /// Tool used (repeatable)
        #[arg(long = "tool")]
        tools: Vec<String>,
        #[arg(long)]
        json: bool,
    },

    /// Edit fields of an existing finding
    Edit {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        notes: Option<String>,
        #[arg(long)]
        observations: Option<String>,
        #[arg(long)]
        conclusion: Option<String>,
        #[arg(long)]
        safety: Option<String>,
        #[arg(long)]
        lab: Option<String>,
    },

    /// Delete a finding
    Delete {
        id: String,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// Merge findings from the remote collection into the local notebook
    Sync {
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
pub(crate) enum CatalogCommands {
    /// Show catalog statistics
    Stats {
        #[arg(long)]
        json: bool,
    },

    /// List reactions, filtered client-side
    Reactions {
        /// Match against name, equation and description
        #[arg(long, default_value = "")]
        query: String,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        json: bool,
    },

    /// List reaction categories
    Categories {
        /// List tool categories instead
        #[arg(long)]
        tools: bool,
    },

    /// List lab tools
    Tools {
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        json: bool,
    },

    /// List chemicals available on the bench
    Chemicals {
        #[arg(long)]
        json: bool,
    },

    /// List guided experiments
    Experiments {
        #[arg(long)]
        lab: Option<String>,
        #[arg(long)]
        json: bool,
    },

    /// Server-side reaction search
    Search {
        query: String,
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
pub(crate) enum CalcCommands {
    /// Molecular weight of a formula such as H2O
    #[command(name = "molecular-weight")]
    MolecularWeight { formula: String },

    /// Molarity from moles and liters of solution
    Molarity {
        #[arg(long)]
        moles: f64,
        #[arg(long)]
        liters: f64,
    },

    /// pH and pOH from an H+ concentration
    Ph {
        #[arg(long)]
        concentration: f64,
    },

    /// Product moles from reactant moles and coefficients
    Stoichiometry {
        #[arg(long)]
        reactant_moles: f64,
        #[arg(long)]
        reactant_coeff: f64,
        #[arg(long)]
        product_coeff: f64,
    },
}
