use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "teacherbot-proxy")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the proxy over HTTP
    Serve {
        /// Port to listen on (overrides PROXY_BIND_ADDR's port)
        #[arg(short, long)]
        port: Option<u16>,

        /// Bind to 0.0.0.0 instead of the configured host, exposing the server on all network interfaces
        #[arg(long)]
        public: bool,
    },
}
