//! CLI entry point for blocksite

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use blocksite::Site;

#[derive(Parser)]
#[command(name = "blocksite")]
#[command(version)]
#[command(about = "Render block-based pages from a content API", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Content API base URL (overrides api_url in _config.yml)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the page server
    #[command(alias = "s")]
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "4000")]
        port: u16,

        /// IP address to bind to
        #[arg(short, long, default_value = "localhost")]
        ip: String,

        /// Open browser automatically
        #[arg(short, long)]
        open: bool,

        /// Disable live reload
        #[arg(long)]
        no_reload: bool,
    },

    /// Render one page
    Render {
        /// Page slug (defaults to the home page)
        slug: Option<String>,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Render all configured pages into the public folder
    #[command(alias = "g")]
    Generate,

    /// List the blocks of a page
    List {
        /// Page slug (defaults to the home page)
        slug: Option<String>,
    },

    /// Clean the public folder
    Clean,

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "blocksite=debug,info"
    } else {
        "blocksite=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Serve {
            port,
            ip,
            open,
            no_reload,
        } => {
            let site = Site::open(&base_dir, cli.api_url)?;
            tracing::info!("Starting server at http://{}:{}", ip, port);
            blocksite::server::start(&site, &ip, port, !no_reload, open).await?;
        }

        Commands::Render { slug, output } => {
            let site = Site::open(&base_dir, cli.api_url)?;
            blocksite::commands::render::run(&site, slug.as_deref(), output.as_deref()).await?;
        }

        Commands::Generate => {
            let site = Site::open(&base_dir, cli.api_url)?;
            tracing::info!("Generating pages...");
            site.generate().await?;
            println!("Generated successfully!");
        }

        Commands::List { slug } => {
            let site = Site::open(&base_dir, cli.api_url)?;
            blocksite::commands::list::run(&site, slug.as_deref()).await?;
        }

        Commands::Clean => {
            let site = Site::open(&base_dir, cli.api_url)?;
            tracing::info!("Cleaning public folder...");
            site.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::Version => {
            println!("blocksite version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
