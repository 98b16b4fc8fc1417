use clap::{Parser, Subcommand};
use gallery_index::config::{self, CONFIG_FILENAME};
use gallery_index::generate::{self, GenerateOptions};
use gallery_index::output;
use std::path::PathBuf;

/// Crate version on a release tag, `dev@<short hash>` otherwise.
fn version_string() -> &'static str {
    if env!("ON_RELEASE_TAG") == "true" {
        return env!("CARGO_PKG_VERSION");
    }
    match env!("GIT_HASH") {
        "" => "dev@unknown",
        // clap wants a 'static str; this runs once per process.
        hash => Box::leak(format!("dev@{hash}").into_boxed_str()),
    }
}

#[derive(Parser)]
#[command(name = "gallery-index")]
#[command(about = "Write index.json files for image galleries and zines")]
#[command(long_about = "\
Write index.json files for image galleries and zines

Every configured gallery gets a JSON index so a static site can list its
images without directory listings at runtime.

Layout (stock configuration):

  images/
  ├── street/                 # Standard gallery
  │   ├── a.jpg
  │   └── index.json          # [\"a.jpg\", ...]
  ├── voyage/  portrait/  concert/
  └── zines/                  # Zine collection
      └── Issue 1/
          ├── 1.png
          ├── 2.png
          ├── 10.png
          └── index.json      # {cover, pages (natural order), title {fr, en}}

Missing galleries and issues without images are skipped with a warning.

Galleries are configured in gallery-index.toml under --root.
Run 'gallery-index gen-config' to print a documented config.")]
#[command(version = version_string())]
struct Cli {
    /// Base directory: holds gallery-index.toml, gallery paths resolve against it
    #[arg(long, default_value = ".", global = true)]
    root: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Write index.json into every gallery and zine issue (default)
    Generate,
    /// Show what would be written without touching any file
    Check,
    /// Print a stock gallery-index.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Generate) {
        Command::Generate => run(&cli.root, false)?,
        Command::Check => {
            println!("==> Checking {}", cli.root.join(CONFIG_FILENAME).display());
            run(&cli.root, true)?;
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Load config under `root` and generate (or plan) every index.
fn run(root: &std::path::Path, dry_run: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config = config::load_config(root)?;
    let roots = config.gallery_roots(root);
    let options = GenerateOptions {
        dry_run,
        ..GenerateOptions::from(&config)
    };

    let report = generate::generate(&roots, &options, |event| {
        output::print_event(event, root, dry_run);
    })?;
    output::print_summary(&report, dry_run);
    Ok(())
}
