use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use reelvault_config::{Config, PathManager};
use reelvault_store::Catalog;

mod commands;
mod logging;

#[derive(Parser)]
#[command(name = "reelvault")]
#[command(about = "Reelvault - a flat-file movie catalog")]
#[command(version)]
struct Cli {
    /// Enable verbose output (use multiple times for more verbosity: -v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Print results as JSON instead of human-readable text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a movie to the catalog (requires the admin key)
    Add {
        #[arg(long)]
        title: String,

        #[arg(long, default_value = "")]
        year: String,

        #[arg(long, default_value = "")]
        genre: String,

        #[arg(long, default_value = "")]
        description: String,

        /// Trailer URL
        #[arg(long, default_value = "")]
        trailer: String,

        /// URL or public path of the playable media
        #[arg(long, default_value = "")]
        source_url: String,

        /// Media container tag (e.g. mp4, webm)
        #[arg(long, default_value = "mp4")]
        source_type: String,

        /// Poster URL; ignored when --poster-file is given
        #[arg(long, default_value = "")]
        poster_url: String,

        /// Explicit download URL; defaults to the source
        #[arg(long, default_value = "")]
        download_url: String,

        /// Local poster image to copy into the upload directory
        #[arg(long)]
        poster_file: Option<PathBuf>,

        /// Local video file to copy into the upload directory
        #[arg(long)]
        video_file: Option<PathBuf>,

        /// Admin key; checked against the configured shared secret
        #[arg(long)]
        admin_key: String,
    },

    /// List all movies, most viewed first
    List,

    /// Show one movie by slug
    Show { slug: String },

    /// Record a view of a movie
    View { slug: String },

    /// Rate a movie 1-5 stars (resubmitting overwrites your rating)
    Rate {
        slug: String,

        #[arg(long)]
        user: String,

        #[arg(long)]
        rating: i64,
    },

    /// Comment on a movie
    Comment {
        slug: String,

        #[arg(long, default_value = "")]
        user: String,

        #[arg(long)]
        text: String,
    },

    /// Request a title missing from the catalog
    Request {
        title: String,

        #[arg(long, default_value = "")]
        notes: String,
    },

    /// List queued requests
    Requests,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    logging::init_logging(cli.verbose, cli.quiet)
        .map_err(|e| color_eyre::eyre::eyre!("{}", e))?;

    let paths = PathManager::default();
    paths
        .ensure_directories()
        .map_err(|e| color_eyre::eyre::eyre!("{}", e))?;
    let config = Config::load(&paths.config_file())
        .map_err(|e| color_eyre::eyre::eyre!("{}", e))?;
    let catalog = Catalog::from_config(&paths, &config);

    match cli.command {
        Commands::Add {
            title,
            year,
            genre,
            description,
            trailer,
            source_url,
            source_type,
            poster_url,
            download_url,
            poster_file,
            video_file,
            admin_key,
        } => commands::admin::run_add(
            &catalog,
            &paths,
            &config,
            commands::admin::AddArgs {
                title,
                year,
                genre,
                description,
                trailer,
                source_url,
                source_type,
                poster_url,
                download_url,
                poster_file,
                video_file,
                admin_key,
            },
            cli.json,
        ),
        Commands::List => commands::catalog::run_list(&catalog, cli.json),
        Commands::Show { slug } => commands::catalog::run_show(&catalog, &slug, cli.json),
        Commands::View { slug } => commands::catalog::run_view(&catalog, &slug, cli.json),
        Commands::Rate { slug, user, rating } => {
            commands::catalog::run_rate(&catalog, &slug, &user, rating, cli.json)
        }
        Commands::Comment { slug, user, text } => {
            commands::catalog::run_comment(&catalog, &slug, &user, &text, cli.json)
        }
        Commands::Request { title, notes } => {
            commands::catalog::run_request(&catalog, &title, &notes, cli.json)
        }
        Commands::Requests => commands::catalog::run_requests(&catalog, cli.json),
    }
}
