//! Re-encode CIDs and IPFS paths between multibase encodings.

use clap::Parser;
use std::io::{self, BufRead};
use tracing::debug;
use tracing_subscriber::filter;

use cidenc::{Encoder, EncoderOptions, Resolution, SUPPORTED_BASES, encoder_from_path, path};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

#[derive(Parser, Debug)]
#[command(version, about = "Re-encode CIDs between multibase encodings", long_about = None)]
struct Args {
    /// Multibase encoding for version 1 CIDs in output, by name or code
    /// character (e.g. base32 or b)
    #[arg(long, short = 'b')]
    cid_base: Option<String>,

    /// Upgrade version 0 to version 1 CIDs in output
    #[arg(long)]
    upgrade_cidv0_in_output: Option<bool>,

    /// Keep version 0 CIDs in their stored form even when a base is
    /// chosen, as low-level commands do
    #[arg(long, short = 'l')]
    low_level: bool,

    /// List the supported multibase encodings and exit
    #[arg(long)]
    list_bases: bool,

    /// CIDs or IPFS paths to re-encode (read from stdin when empty)
    items: Vec<String>,
}

fn main() -> Result<()> {
    // construct a subscriber that prints formatted traces to stdout
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter::EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let args = Args::parse();

    if args.list_bases {
        list_bases();
        return Ok(());
    }

    let options = EncoderOptions {
        base: args.cid_base.clone(),
        upgrade: args.upgrade_cidv0_in_output,
    };
    let resolved = if args.low_level {
        options.low_level_encoder()
    } else {
        options.encoder()
    };
    // a bad --cid-base is fatal here; per-path failures below are not
    let encoder = resolved.into_result()?;

    if args.items.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = line?;
            let item = line.trim();
            if !item.is_empty() {
                print_recoded(encoder, item)?;
            }
        }
    } else {
        for item in &args.items {
            print_recoded(encoder, item)?;
        }
    }

    Ok(())
}

/// Print the supported encodings, one `code  name` pair per line.
fn list_bases() {
    for (name, base) in SUPPORTED_BASES {
        let code = base.code();
        if code.is_ascii_graphic() {
            println!("{code}  {name}");
        } else {
            println!("   {name}");
        }
    }
}

/// Re-encode one argument. Paths carry their own encoding: the session
/// encoder is refined per path, and a refinement failure falls back to
/// the session encoder.
fn print_recoded(encoder: Encoder, item: &str) -> Result<()> {
    let (encoder, cid_text) = if item.contains('/') {
        let resolution = encoder_from_path(encoder, item);
        if let Resolution::Fallback { error, .. } = &resolution {
            debug!("{item}: {error}, keeping the session encoder");
        }
        (resolution.encoder(), path::leading_cid(item)?)
    } else {
        (encoder, item)
    };
    println!("{}", encoder.recode(cid_text)?);
    Ok(())
}
