//! xcframework-selector: copy the slice of an XCFramework that matches a
//! target triple.
//!
//! Invoked as a build step:
//!
//! ```text
//! xcframework-selector x86_64-apple-ios11.0-simulator Foo.xcframework/Info.plist out/Foo.framework
//! ```

use std::path::PathBuf;
use std::process;

use clap::Parser;
use xcfw_bundle::DirectoryCopy;

#[derive(Parser, Debug)]
#[command(name = "xcframework-selector", version, about)]
struct Cli {
    /// Target triple, e.g. arm64-apple-ios or x86_64-apple-ios11.0-simulator
    triple: String,
    /// Path to the XCFramework's Info.plist
    manifest: PathBuf,
    /// Where to place the selected .framework directory (replaced if present)
    output: PathBuf,
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let variant = xcfw_bundle::extract(&cli.triple, &cli.manifest, &cli.output, &DirectoryCopy)?;
    log::info!(
        "installed {} ({}) at {}",
        variant.name,
        variant.identifier,
        cli.output.display()
    );
    Ok(())
}
