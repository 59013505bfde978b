//! Hashquine CLI - inspect and re-encode self-describing hash artworks
//!
//! ## Commands
//!
//! - `hashquine scan <file>` - Find collision instances in any file
//! - `hashquine encode <file>` - Encode a value into a pinned format
//! - `hashquine read <file>` - Read the currently encoded value back
//! - `hashquine shatter <file>` - Flip the SHA-1 collision PDF
//! - `hashquine profiles` - List the builtin format profiles

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

use commands::{encode, profiles, read, scan, shatter};

/// Inspect and re-encode hashquine files without moving their digest
#[derive(Parser)]
#[command(name = "hashquine")]
#[command(author, version, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Which collision side to drive instances onto.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum SideArg {
    A,
    B,
}

impl From<SideArg> for hashquine::core::Side {
    fn from(side: SideArg) -> Self {
        match side {
            SideArg::A => hashquine::core::Side::A,
            SideArg::B => hashquine::core::Side::B,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Scan a file for hash-preserving collision instances
    ///
    /// Probes every 64-byte block boundary for FastColl and UniColl
    /// instances. No format profile is needed; this works on arbitrary
    /// files and is how an unknown hashquine is mapped out.
    Scan {
        /// File to scan
        file: PathBuf,

        /// Drive every found instance onto one side
        #[arg(long, value_enum, conflicts_with = "flip")]
        set: Option<SideArg>,

        /// Flip every found instance to its other side
        #[arg(long)]
        flip: bool,

        /// Where to write the result (defaults to rewriting the input)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Encode a value into a file pinned by a format profile
    ///
    /// Without --value or --random the file's own current MD5 is
    /// encoded, which is the classic hashquine move.
    Encode {
        /// File to encode into
        file: PathBuf,

        /// Builtin profile name (see `hashquine profiles`)
        #[arg(short, long, conflicts_with = "profile_file")]
        profile: Option<String>,

        /// Path to a profile JSON file
        #[arg(long)]
        profile_file: Option<PathBuf>,

        /// Hex value to encode, normalized to the profile's width
        #[arg(long, conflicts_with = "random")]
        value: Option<String>,

        /// Encode fresh random hex digits
        #[arg(long)]
        random: bool,

        /// Skip the profile's header and whole-file digest gates
        #[arg(long)]
        force: bool,

        /// Skip the baseline reset pass a one-of-N profile asks for
        #[arg(long)]
        no_reset: bool,

        /// Where to write the result (defaults to rewriting the input)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Read the currently encoded value out of a file
    Read {
        /// File to read
        file: PathBuf,

        /// Builtin profile name (see `hashquine profiles`)
        #[arg(short, long, conflicts_with = "profile_file")]
        profile: Option<String>,

        /// Path to a profile JSON file
        #[arg(long)]
        profile_file: Option<PathBuf>,

        /// Skip the profile's header and whole-file digest gates
        #[arg(long)]
        force: bool,
    },

    /// Flip the two-block SHA-1 collision in a Shattered-style PDF
    ///
    /// The whole-file SHA-1 is identical before and after; the flip
    /// swaps which of the two embedded renderings the viewer shows.
    Shatter {
        /// PDF to flip
        file: PathBuf,

        /// Skip the pinned SHA-1 header gate
        #[arg(long)]
        force: bool,

        /// Where to write the result (defaults to rewriting the input)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List builtin format profiles, or dump one as JSON
    Profiles {
        /// Print this profile as JSON instead of listing all
        name: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let result = match cli.command {
        Commands::Scan {
            file,
            set,
            flip,
            output,
        } => scan::run(&file, set.map(Into::into), flip, output.as_deref()),

        Commands::Encode {
            file,
            profile,
            profile_file,
            value,
            random,
            force,
            no_reset,
            output,
        } => encode::run(
            &file,
            profile.as_deref(),
            profile_file.as_deref(),
            value.as_deref(),
            random,
            force,
            no_reset,
            output.as_deref(),
        ),

        Commands::Read {
            file,
            profile,
            profile_file,
            force,
        } => read::run(&file, profile.as_deref(), profile_file.as_deref(), force),

        Commands::Shatter {
            file,
            force,
            output,
        } => shatter::run(&file, force, output.as_deref()),

        Commands::Profiles { name } => profiles::run(name.as_deref()),
    };

    if let Err(err) = result {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }

    Ok(())
}
