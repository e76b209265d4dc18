// Module declarations
mod cli;
mod config;
mod config_file;
mod error;
mod generate;
mod label_index;
mod scan;
mod types;
mod util;

// Every module reaches its siblings through the crate root.
#[allow(unused_imports)]
pub(crate) use cli::*;
#[allow(unused_imports)]
pub(crate) use config::*;
#[allow(unused_imports)]
pub(crate) use config_file::*;
#[allow(unused_imports)]
pub(crate) use error::*;
#[allow(unused_imports)]
pub(crate) use generate::*;
#[allow(unused_imports)]
pub(crate) use label_index::*;
#[allow(unused_imports)]
pub(crate) use scan::*;
#[allow(unused_imports)]
pub(crate) use types::*;
#[allow(unused_imports)]
pub(crate) use util::*;

use clap::Parser;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Artalk(args) => generate_command(ManifestShape::Artalk, &args),
        Command::Twikoo(args) => generate_command(ManifestShape::Twikoo, &args),
        Command::ShowConfig { shape, args } => {
            let config = resolve_config(shape, &args)?;
            println!("{}", serde_json::to_string_pretty(&config)?);
            Ok(())
        }
    }
}

fn generate_command(
    shape: ManifestShape,
    args: &GenerateArgs,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let config = resolve_config(shape, args)?;
    let summary = run_generate(&config, args.dry_run)?;
    let RunSummary {
        groups,
        items,
        carried,
        fallback,
        written,
    } = summary;

    if !written {
        println!("Dry run: groups={groups} items={items} carried={carried} fallback={fallback}");
        return Ok(());
    }
    println!("Done: groups={groups} items={items} carried={carried} fallback={fallback}");
    println!("Wrote {}", config.output_path.display());
    Ok(())
}
