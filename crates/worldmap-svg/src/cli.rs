use clap::{ArgGroup, Parser};
use std::path::PathBuf;
use worldmap_lib::{Dimensions, Projection, RunConfig, path_data, svg::SvgStyle};

/// Generate SVG world maps
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(group(
    ArgGroup::new("projection")
        .required(true)
        .args(["robinson", "equirectangular"])
))]
pub struct Cli {
    /// Output dimensions
    #[arg(short = 'd', long = "dim", value_name = "WxH", default_value = "1024x512")]
    pub dim: Dimensions,

    /// Output robinson projection
    #[arg(short = 'R', long)]
    pub robinson: bool,

    /// Output equirectangular projection
    #[arg(short = 'E', long)]
    pub equirectangular: bool,

    /// Color of land
    #[arg(long = "land-color", value_name = "color", default_value = "#ffffff")]
    pub land_color: String,

    /// Color of sea (no background when omitted)
    #[arg(long = "sea-color", value_name = "color")]
    pub sea_color: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "file.svg")]
    pub output: Option<PathBuf>,

    /// Robinson outline as SVG path data
    #[arg(short, long, value_name = "file", default_value = "path")]
    pub input: PathBuf,

    /// Decimal places of emitted coordinates
    #[arg(long, value_name = "n", default_value_t = path_data::DEFAULT_PRECISION)]
    pub precision: usize,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// The selected projection
    ///
    /// The required `projection` group lets exactly one of the two flags through.
    pub fn projection(&self) -> Projection {
        debug_assert!(
            self.robinson != self.equirectangular,
            "exactly one projection flag must be set"
        );
        if self.equirectangular {
            Projection::Equirectangular
        } else {
            Projection::Robinson
        }
    }

    pub fn run_config(&self) -> RunConfig {
        RunConfig::new(self.dim, self.projection())
    }

    pub fn style(&self) -> SvgStyle {
        SvgStyle {
            land_color: self.land_color.clone(),
            sea_color: self.sea_color.clone(),
        }
    }
}

/// Parses from the command line arguments
pub fn parse_args<T: Parser>() -> Result<T, clap::Error> {
    T::try_parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("worldmap-svg").chain(args.iter().copied()))
    }

    #[test]
    fn test_command_is_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = parse(&["-R"]).unwrap();
        assert_eq!(cli.dim, Dimensions::default());
        assert_eq!(cli.projection(), Projection::Robinson);
        assert_eq!(cli.land_color, "#ffffff");
        assert!(cli.sea_color.is_none());
        assert!(cli.output.is_none());
        assert_eq!(cli.input, PathBuf::from("path"));
        assert_eq!(cli.precision, path_data::DEFAULT_PRECISION);
    }

    #[test]
    fn test_full_arguments() {
        let cli = parse(&[
            "--equirectangular",
            "--dim",
            "2048x1024",
            "--land-color",
            "#00ff00",
            "--sea-color",
            "navy",
            "-o",
            "map.svg",
            "-i",
            "outline.txt",
            "--precision",
            "1",
        ])
        .unwrap();

        let config = cli.run_config();
        assert_eq!(config.projection, Projection::Equirectangular);
        assert_eq!(config.output, Dimensions::new(2048, 1024).unwrap());
        assert_eq!(cli.style().sea_color.as_deref(), Some("navy"));
        assert_eq!(cli.style().land_color, "#00ff00");
        assert_eq!(cli.output, Some(PathBuf::from("map.svg")));
        assert_eq!(cli.input, PathBuf::from("outline.txt"));
        assert_eq!(cli.precision, 1);
    }

    #[test]
    fn test_projection_is_required() {
        let err = parse(&["-d", "100x50"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_projection_flags() {
        assert_eq!(parse(&["-R"]).unwrap().projection(), Projection::Robinson);
        assert_eq!(parse(&["--robinson"]).unwrap().projection(), Projection::Robinson);
        assert_eq!(parse(&["-E"]).unwrap().projection(), Projection::Equirectangular);
        assert_eq!(
            parse(&["--equirectangular"]).unwrap().projection(),
            Projection::Equirectangular
        );
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "exactly one projection flag")]
    fn test_projection_without_flag_is_a_bug() {
        let mut cli = parse(&["-R"]).unwrap();
        cli.robinson = false;
        cli.projection();
    }

    #[test]
    fn test_projections_are_exclusive() {
        let err = parse(&["-R", "-E"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }

    #[test]
    fn test_malformed_dimensions() {
        let err = parse(&["-R", "-d", "1024by512"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);

        let err = parse(&["-E", "-d", "0x512"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }
}
