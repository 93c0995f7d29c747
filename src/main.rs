use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gtfo_lookup::config::Config;
use gtfo_lookup::lookup::Lookup;
use gtfo_lookup::mirror::{Mirror, PurgeOutcome, UpdateOutcome};
use gtfo_lookup::models::{Category, Selector};
use gtfo_lookup::render;

#[derive(Parser)]
#[command(name = "gtfo")]
#[command(about = "GTFOBins lookup")]
struct Cli {
    /// Local mirror directory (overrides GTFO_LOOKUP_MIRROR)
    #[arg(long, global = true)]
    mirror: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args)]
struct LookupArgs {
    /// The binary to search for
    binary: String,

    /// Print results as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Update local copy of GTFOBins
    Update,
    /// Remove local copy of GTFOBins
    Purge,
    #[command(flatten)]
    Lookup(LookupCommand),
}

#[derive(Subcommand)]
enum LookupCommand {
    /// Search for applications that can be used to spawn an interactive shell
    Shell(LookupArgs),
    /// Search for applications that can be used to run non-interactive system commands
    Cmd(LookupArgs),
    /// Search for applications that can be used to spawn a reverse shell
    Rev(LookupArgs),
    /// Search for applications that can be used to spawn a non-interactive reverse shell
    Nrev(LookupArgs),
    /// Search for applications that can be used to spawn a bind shell
    Bind(LookupArgs),
    /// Search for applications that can be used to spawn a non-interactive bind shell
    Nbind(LookupArgs),
    /// Search for applications that can be used to upload files
    Upload(LookupArgs),
    /// Search for applications that can be used to download files
    Download(LookupArgs),
    /// Search for applications that can be used to write to files
    Write(LookupArgs),
    /// Search for applications that can be used to read files
    Read(LookupArgs),
    /// Search for applications that load shared libraries
    Load(LookupArgs),
    /// Search for applications that, with the SUID bit set, can be used to escalate privileges
    Suid(LookupArgs),
    /// Search for applications that, when run with sudo, can be used to escalate privileges
    Sudo(LookupArgs),
    /// Search for applications that have the CAP_SETUID capability set
    Cap(LookupArgs),
    /// Search for applications that, with the SUID bit set, can escalate privileges where the default sh drops them
    Lsuid(LookupArgs),
    /// Search for applications in all categories
    All(LookupArgs),
}

impl LookupCommand {
    fn into_parts(self) -> (Selector, LookupArgs) {
        let (category, args) = match self {
            Self::All(args) => return (Selector::All, args),
            Self::Shell(args) => (Category::Shell, args),
            Self::Cmd(args) => (Category::Command, args),
            Self::Rev(args) => (Category::ReverseShell, args),
            Self::Nrev(args) => (Category::NonInteractiveReverseShell, args),
            Self::Bind(args) => (Category::BindShell, args),
            Self::Nbind(args) => (Category::NonInteractiveBindShell, args),
            Self::Upload(args) => (Category::FileUpload, args),
            Self::Download(args) => (Category::FileDownload, args),
            Self::Write(args) => (Category::FileWrite, args),
            Self::Read(args) => (Category::FileRead, args),
            Self::Load(args) => (Category::LibraryLoad, args),
            Self::Suid(args) => (Category::Suid, args),
            Self::Sudo(args) => (Category::Sudo, args),
            Self::Cap(args) => (Category::Capabilities, args),
            Self::Lsuid(args) => (Category::LimitedSuid, args),
        };
        (Selector::Specific(category), args)
    }
}

/// Initialize tracing on stderr so stdout carries only results.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "gtfo_lookup=warn".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let Some(command) = cli.command else {
        println!("{}", Cli::command().render_usage());
        return Ok(());
    };

    let mut config = Config::from_env()?;
    if let Some(dir) = cli.mirror {
        config = config.with_mirror_dir(dir);
    }
    let mirror = Mirror::new(config.mirror_dir.clone());

    match command {
        Commands::Update => {
            println!("Checking {} for updates...", config.repo_url);
            match mirror.update(&config.repo_url).await? {
                UpdateOutcome::Cloned => println!("Local copy of GTFOBins downloaded"),
                UpdateOutcome::UpToDate => println!("Local copy of GTFOBins is up to date"),
                UpdateOutcome::Updated { from, to } => {
                    println!("Local copy of GTFOBins updated ({from} -> {to})")
                }
            }
        }
        Commands::Purge => match mirror.purge().await? {
            PurgeOutcome::Removed => println!("Local copy of GTFOBins removed"),
            PurgeOutcome::NotFound => println!("Local copy of GTFOBins not found"),
        },
        Commands::Lookup(lookup) => {
            let (selector, args) = lookup.into_parts();
            let result = Lookup::new(mirror).lookup_selector(&args.binary, selector)?;
            if args.json {
                println!("{}", render::render_json(&result)?);
            } else {
                print!("{}", render::render_text(&result));
            }
        }
    }

    Ok(())
}
