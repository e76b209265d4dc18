use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use super::ManifestShape;

#[derive(Parser)]
#[command(name = "owo-manifest")]
#[command(about = "Emoji picker manifests for Artalk and Twikoo from local image folders", long_about = None)]
#[command(version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Subcommand)]
pub(crate) enum Command {
    /// Write the Artalk emoji list (groups of key/val items).
    Artalk(GenerateArgs),

    /// Write the Twikoo emoji map (categories of text/icon items).
    Twikoo(GenerateArgs),

    /// Print the resolved configuration as JSON without scanning.
    ShowConfig {
        #[arg(value_enum)]
        shape: ManifestShape,
        #[command(flatten)]
        args: GenerateArgs,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub(crate) struct GenerateArgs {
    /// JSON file with overrides for the built-in preset
    #[arg(long)]
    pub(crate) config: Option<PathBuf>,
    /// Public URL prefix the folders are served under
    #[arg(long)]
    pub(crate) base_url: Option<String>,
    /// Folder to scan (repeatable, replaces the preset list)
    #[arg(long = "folder")]
    pub(crate) folders: Vec<String>,
    /// Category name override, FOLDER=NAME (repeatable)
    #[arg(long = "display-name", value_name = "FOLDER=NAME")]
    pub(crate) display_names: Vec<String>,
    /// Output manifest path
    #[arg(short, long)]
    pub(crate) output: Option<PathBuf>,
    /// Previous manifest to carry labels over from
    #[arg(long)]
    pub(crate) origin: Option<PathBuf>,
    /// Ignore any previous manifest; label everything by filename
    #[arg(long, conflicts_with = "origin")]
    pub(crate) no_origin: bool,
    /// Directory the folders live in
    #[arg(long)]
    pub(crate) root: Option<PathBuf>,
    /// Build the manifest and report, but do not write it
    #[arg(long)]
    pub(crate) dry_run: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_repeatable_flags() {
        let cli = Cli::try_parse_from([
            "owo-manifest",
            "twikoo",
            "--folder",
            "blobcat",
            "--folder",
            "zhheo",
            "--display-name",
            "blobcat=猫猫",
            "-o",
            "out/twikoo.json",
            "--dry-run",
        ])
        .unwrap();
        let Command::Twikoo(args) = cli.command else {
            panic!("expected twikoo subcommand");
        };
        assert_eq!(args.folders, vec!["blobcat", "zhheo"]);
        assert_eq!(args.display_names, vec!["blobcat=猫猫"]);
        assert_eq!(args.output, Some(PathBuf::from("out/twikoo.json")));
        assert!(args.dry_run);
    }

    #[test]
    fn origin_conflicts_with_no_origin() {
        let result = Cli::try_parse_from([
            "owo-manifest",
            "artalk",
            "--origin",
            "old.json",
            "--no-origin",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn show_config_takes_shape() {
        let cli = Cli::try_parse_from(["owo-manifest", "show-config", "artalk"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::ShowConfig {
                shape: ManifestShape::Artalk,
                ..
            }
        ));
    }
}
