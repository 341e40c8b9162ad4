use crate::cli::Cli;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::Path as FsPath;
use worldmap_lib::{Path, Reprojector, Result, path_data, svg};

/// Parse the outline in `data` and reproject it onto the output canvas
pub fn reproject(cli: &Cli, data: &str) -> Result<Path> {
    let path = path_data::parse(data)?;
    tracing::info!("Loaded outline with {} segments", path.len());

    Reprojector::new(cli.run_config()).reproject(&path)
}

fn with_path_context(err: io::Error, action: &str, path: &FsPath) -> io::Error {
    io::Error::new(
        err.kind(),
        format!("failed to {action} {}: {err}", path.display()),
    )
}

/// Run the generator: read the outline, reproject it and write the document
pub fn run(cli: &Cli) -> Result<()> {
    let config = cli.run_config();
    tracing::info!(
        "Generating {} world map ({})",
        config.projection,
        config.output
    );

    let data = std::fs::read_to_string(&cli.input)
        .map_err(|e| with_path_context(e, "read", &cli.input))?;
    let path = reproject(cli, &data)?;
    let style = cli.style();

    match &cli.output {
        Some(file) => {
            let handle = File::create(file).map_err(|e| with_path_context(e, "create", file))?;
            let mut writer = BufWriter::new(handle);
            svg::write_svg(&mut writer, &path, cli.dim, &style, cli.precision)?;
            tracing::info!("Wrote {}", file.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            svg::write_svg(&mut stdout, &path, cli.dim, &style, cli.precision)?;
        }
    }
    Ok(())
}
