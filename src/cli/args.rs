use clap::Args;
use pathtrace_core::graph::Variant;
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct GraphArgs {
    /// Graph description file (`-` reads stdin)
    pub file: PathBuf,

    /// Treat `->` statements as the graph (directed variant)
    #[arg(long, conflicts_with = "undirected")]
    pub directed: bool,

    /// Treat `--` statements as the graph (undirected variant)
    #[arg(long)]
    pub undirected: bool,
}

impl GraphArgs {
    /// Variant forced on the command line, if any
    pub fn variant_flag(&self) -> Option<Variant> {
        if self.directed {
            Some(Variant::Directed)
        } else if self.undirected {
            Some(Variant::Undirected)
        } else {
            None
        }
    }

    pub fn reads_stdin(&self) -> bool {
        self.file.as_os_str() == "-"
    }
}

#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Source node
    #[arg(long, short)]
    pub source: String,
}
