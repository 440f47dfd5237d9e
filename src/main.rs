// SPDX-License-Identifier: MPL-2.0
use magnify_lens::config;
use magnify_lens::error::{Error, Result};
use magnify_lens::inspect::{self, InspectRequest, NaturalSource};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
magnify-lens: print the lens style the magnifier would apply

USAGE:
  magnify-lens [OPTIONS] --source WxH+X+Y --pointer X,Y (--natural WxH | IMAGE)

OPTIONS:
  --config PATH          Profile overrides (TOML). Defaults to the user config file.
  --viewport-width PX    Viewport width used to pick the profile [default: 1280]
  --source WxH+X+Y       Rendered size and page offset of the source image
  --pointer X,Y          Pointer position in page coordinates
  --natural WxH          Natural size of the zoom image
  -h, --help             Print this help
";

const DEFAULT_VIEWPORT_WIDTH: f64 = 1280.0;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return ExitCode::SUCCESS;
    }

    match parse_args(args).and_then(|request| inspect::inspect(&request)) {
        Ok(report) => {
            println!("{report}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::from(2)
        }
    }
}

fn parse_args(mut args: pico_args::Arguments) -> Result<InspectRequest> {
    let config_path: Option<PathBuf> = args.opt_value_from_str("--config")?;
    let viewport_width: Option<f64> = args.opt_value_from_str("--viewport-width")?;
    let source: String = args.value_from_str("--source")?;
    let pointer: String = args.value_from_str("--pointer")?;
    let natural: Option<String> = args.opt_value_from_str("--natural")?;
    let image = args.finish().into_iter().next().map(PathBuf::from);

    let options = match config_path {
        Some(path) => config::load_from_path(&path)?,
        None => config::load()?,
    };
    let natural = match (natural, image) {
        (Some(size), _) => NaturalSource::Size(inspect::parse_size(&size)?),
        (None, Some(path)) => NaturalSource::File(path),
        (None, None) => {
            return Err(Error::Argument(
                "either --natural WxH or an IMAGE path is required".into(),
            ))
        }
    };

    Ok(InspectRequest {
        options,
        viewport_width: viewport_width.unwrap_or(DEFAULT_VIEWPORT_WIDTH),
        source: inspect::parse_placement(&source)?,
        pointer: inspect::parse_point(&pointer)?,
        natural,
    })
}
