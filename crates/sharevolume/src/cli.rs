use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Sets the level of tracing.
    ///
    /// The viewer writes its trace to `sharevolume.log`; other commands write to stderr.
    #[arg(short, long, global = true)]
    pub trace: Option<TraceLevel>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the shares outstanding viewer.
    ///
    /// The bundled snapshot is always shown first; if a valid CIK is given, live SEC data
    /// replaces it once fetched.
    View {
        /// 10-digit CIK to look up on start.
        #[arg(long, conflicts_with = "location")]
        cik: Option<String>,

        /// Location query to reopen, e.g. '?CIK=0000875045'.
        #[arg(short, long)]
        location: Option<String>,
    },

    /// Fetch live shares outstanding for a CIK and print them.
    Fetch {
        /// 10-digit CIK, e.g. 0000875045.
        cik: String,

        /// Print the view model as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Fetch live shares outstanding for a CIK and write them as the bundled snapshot.
    Snapshot {
        /// 10-digit CIK, e.g. 0000875045.
        cik: String,

        /// Where to write the snapshot; defaults to SHAREVOLUME_SNAPSHOT, or ./data.json.
        #[arg(short, long)]
        out: Option<String>,
    },
}

#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
#[clap(rename_all = "UPPERCASE")]
pub enum TraceLevel {
    DEBUG,
    ERROR,
    INFO,
    TRACE,
    WARN,
}
