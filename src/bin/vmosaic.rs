use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use vmosaic::{GdalTranslate, MosaicOpts, MosaicSession, PixelType};

#[derive(Parser, Debug)]
#[command(name = "vmosaic", version)]
#[command(about = "Assemble a virtual raster mosaic from placed tiles")]
struct Cli {
    /// Tile manifest: one tile-config path per line, relative to the
    /// manifest's directory.
    tiles: PathBuf,

    /// Output path. `.vrt` keeps the virtual descriptor; `.tif` rasterizes
    /// it with gdal_translate.
    outfile: PathBuf,

    /// Sub-raster to mosaic, relative to each tile's directory
    /// (e.g. height_map.tif).
    sub_img: PathBuf,

    /// Descriptor pixel type.
    #[arg(long, value_enum, default_value = "Float32")]
    format: FormatArg,

    /// Deactivate gray color interpretation.
    #[arg(long, default_value_t = false)]
    color: bool,

    /// Number of output bands.
    #[arg(long, default_value_t = 1)]
    bands: u32,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatArg {
    #[value(name = "Float32")]
    Float32,
    #[value(name = "Byte")]
    Byte,
}

impl From<FormatArg> for PixelType {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Float32 => PixelType::Float32,
            FormatArg::Byte => PixelType::Byte,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let opts = MosaicOpts {
        pixel_type: cli.format.into(),
        gray: !cli.color,
        band_count: cli.bands,
    };

    let mut session = MosaicSession::new(&cli.outfile, opts)?;
    let report = session.compose_manifest(&cli.tiles, &cli.sub_img)?;
    let out = session.finish(&GdalTranslate)?;

    eprintln!(
        "wrote {} ({} tiles, {} rows, {} holes)",
        out.display(),
        report.tile_count,
        report.row_count,
        report.skipped
    );
    Ok(())
}
