use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "velvet")]
#[command(about = "Velvet CLI - AI companion profile manager", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all companions and the active one
    List,
    /// Show one companion in detail (defaults to the active companion)
    Show {
        /// Profile id
        id: Option<String>,
    },
    /// Create a new companion through the draft flow
    Create {
        /// Companion name
        #[arg(long)]
        name: String,
        /// Relationship: a preset kind or any custom label
        #[arg(long, default_value = "Girlfriend")]
        relationship: String,
        /// Personality and appearance description
        #[arg(long)]
        traits: String,
        /// Personality tags (repeatable)
        #[arg(long = "tag")]
        tags: Vec<String>,
        /// Intimacy tier: normal, medium, or high
        #[arg(long, default_value = "medium")]
        intimacy: String,
    },
    /// Make a companion active
    Select {
        /// Profile id
        id: String,
    },
    /// Delete a companion
    Delete {
        /// Profile id
        id: String,
    },
    /// List the built-in themes
    Themes,
    /// Show or set the user display name
    Whoami {
        /// New display name
        #[arg(long)]
        name: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::List => commands::list().await?,
        Commands::Show { id } => commands::show(id.as_deref()).await?,
        Commands::Create {
            name,
            relationship,
            traits,
            tags,
            intimacy,
        } => commands::create(&name, &relationship, &traits, &tags, &intimacy).await?,
        Commands::Select { id } => commands::select(&id).await?,
        Commands::Delete { id } => commands::delete(&id).await?,
        Commands::Themes => commands::themes()?,
        Commands::Whoami { name } => commands::whoami(name.as_deref()).await?,
    }

    Ok(())
}
