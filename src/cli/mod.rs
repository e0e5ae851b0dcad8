pub mod border;
pub mod completions;
pub mod gradients;
pub mod init;
pub mod palette;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// brandframe - Brand-coloured gradient backgrounds and image borders
#[derive(Parser, Debug)]
#[command(name = "brandframe")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Config file (default: ./brandframe.yaml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate gradient backgrounds in every brand colour
    Gradients(gradients::GradientsArgs),

    /// Add brand-coloured borders to an image
    Border(border::BorderArgs),

    /// Print the brand colour palette
    Palette(palette::PaletteArgs),

    /// Write a default brandframe.yaml
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::OutputFormat;
    use crate::types::BrandColour;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_border_flags() {
        let cli = Cli::try_parse_from([
            "brandframe", "border", "in.png", "-c", "pale_blue", "-b", "30", "--no-square", "-f",
            "jpeg",
        ])
        .unwrap();

        match cli.command {
            Commands::Border(args) => {
                assert_eq!(args.image, PathBuf::from("in.png"));
                assert_eq!(args.color, Some(BrandColour::PaleBlue));
                assert_eq!(args.border_size, Some(30));
                assert!(args.no_square);
                assert_eq!(args.format, Some(OutputFormat::Jpg));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_border_rejects_unknown_colour() {
        let err = Cli::try_parse_from(["brandframe", "border", "in.png", "--color", "purple"])
            .unwrap_err();
        let message = err.to_string();
        assert!(message.contains("purple"));
        assert!(message.contains("pale_blue"));
    }

    #[test]
    fn test_parse_border_requires_image() {
        let err = Cli::try_parse_from(["brandframe", "border", "--all"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_parse_gradients_without_arguments() {
        let cli = Cli::try_parse_from(["brandframe", "gradients"]).unwrap();
        match cli.command {
            Commands::Gradients(args) => {
                assert!(args.output.is_none());
                assert!(args.intensity.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_global_config_flag() {
        let cli = Cli::try_parse_from(["brandframe", "palette", "--config", "x.yaml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("x.yaml")));
    }
}
