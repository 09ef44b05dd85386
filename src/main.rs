use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use epd_convert::models::AppConfig;
use epd_convert::services::ConversionService;

#[derive(Parser)]
#[command(name = "epd-convert")]
#[command(about = "Convert images into packed frame buffers for 7-color e-paper panels")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert every image in a directory into C source/header pairs
    Convert {
        /// Directory containing the input images (not searched recursively)
        input_dir: PathBuf,

        /// Directory receiving the generated .c and .h files
        output_dir: PathBuf,

        #[command(flatten)]
        options: ConvertOptions,
    },
    /// Convert a single image
    File {
        /// Input image
        image: PathBuf,

        /// Directory receiving the generated .c and .h files
        output_dir: PathBuf,

        #[command(flatten)]
        options: ConvertOptions,
    },
    /// Print the configured palette with nibble codes
    Palette {
        #[command(flatten)]
        options: ConvertOptions,
    },
}

/// Options shared by all subcommands; flags override the config file
#[derive(Args, Default)]
struct ConvertOptions {
    /// YAML configuration file
    #[arg(short, long, env = "CONFIG_FILE")]
    config: Option<PathBuf>,

    /// Gamma pre-correction exponent (e.g. 1.2)
    #[arg(short, long)]
    gamma: Option<f64>,

    /// Palette as eight comma-separated hex colors (e.g. "#000000,#FFFFFF,...")
    #[arg(long)]
    colors: Option<String>,

    /// Target width in pixels
    #[arg(long)]
    width: Option<u32>,

    /// Target height in pixels
    #[arg(long)]
    height: Option<u32>,

    /// Also write a PNG of each dithered frame into this directory
    #[arg(long)]
    preview: Option<PathBuf>,
}

impl ConvertOptions {
    /// Resolve the effective configuration.
    ///
    /// A file named on the command line must load; one that only comes from
    /// `CONFIG_FILE` falls back to defaults with a warning.
    fn resolve(&self) -> anyhow::Result<AppConfig> {
        let from_env = std::env::var_os("CONFIG_FILE").map(PathBuf::from);
        let mut config = match &self.config {
            Some(path) if from_env.as_deref() == Some(path.as_path()) => {
                AppConfig::load_or_default(Some(path))
            }
            Some(path) => AppConfig::load(path)?,
            None => AppConfig::default(),
        };

        if let Some(gamma) = self.gamma {
            config.gamma = gamma;
        }
        if let Some(ref colors) = self.colors {
            config.palette = parse_colors(colors);
        }
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        Ok(config)
    }

    fn service(&self) -> anyhow::Result<ConversionService> {
        let service = ConversionService::new(self.resolve()?)?;
        Ok(match &self.preview {
            Some(dir) => service.with_preview_dir(dir),
            None => service,
        })
    }
}

/// Split a comma-separated color list, dropping empty entries
fn parse_colors(colors: &str) -> Vec<String> {
    colors
        .split(',')
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .collect()
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "epd_convert=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    match cli.command {
        Some(Commands::Convert {
            input_dir,
            output_dir,
            options,
        }) => run_convert_command(&input_dir, &output_dir, &options),
        Some(Commands::File {
            image,
            output_dir,
            options,
        }) => run_file_command(&image, &output_dir, &options),
        Some(Commands::Palette { options }) => run_palette_command(&options),
        None => {
            run_status_command();
            Ok(())
        }
    }
}

/// Convert a whole directory; exits non-zero if any file failed
fn run_convert_command(
    input_dir: &Path,
    output_dir: &Path,
    options: &ConvertOptions,
) -> anyhow::Result<()> {
    let service = options.service()?;
    let report = service.convert_dir(input_dir, output_dir)?;

    println!(
        "Converted {} files into {}",
        report.converted.len(),
        output_dir.display()
    );
    for file in &report.converted {
        println!("  + {} ({} bytes)", file.source.display(), file.packed_len);
    }
    if !report.failed.is_empty() {
        println!("\nFailed {} files:", report.failed.len());
        for file in &report.failed {
            println!("  ! {}: {}", file.input.display(), file.error);
        }
        std::process::exit(1);
    }

    Ok(())
}

/// Convert a single image
fn run_file_command(image: &Path, output_dir: &Path, options: &ConvertOptions) -> anyhow::Result<()> {
    let service = options.service()?;
    std::fs::create_dir_all(output_dir)?;
    let converted = service.convert_file(image, output_dir)?;

    println!(
        "Wrote {} and {} ({} bytes, symbol {})",
        converted.source.display(),
        converted.header.display(),
        converted.packed_len,
        converted.symbol
    );
    Ok(())
}

/// Print the palette the converter would use
fn run_palette_command(options: &ConvertOptions) -> anyhow::Result<()> {
    let config = options.resolve()?;
    let palette = config.palette()?;

    println!("Palette (nibble code -> color):");
    for (code, color) in palette.colors().iter().enumerate() {
        println!("  {code:#x}  {color}");
    }
    println!(
        "\nOdd pixel counts are padded with {:#x}",
        palette.fallback_index()
    );
    Ok(())
}

/// Display version, configuration source and commands
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let config_file = std::env::var("CONFIG_FILE").ok();

    println!("epd-convert v{VERSION}");
    println!("Images to packed frame buffers for 7-color e-paper\n");

    println!("Environment Variables:");
    println!(
        "  CONFIG_FILE = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );
    println!(
        "  RUST_LOG    = {}",
        std::env::var("RUST_LOG")
            .ok()
            .as_deref()
            .unwrap_or("epd_convert=info (default)")
    );

    let config_source = match config_file {
        Some(ref path) if Path::new(path).exists() => path.to_string(),
        Some(_) => "defaults (file not found)".to_string(),
        None => "defaults".to_string(),
    };
    let config = AppConfig::load_or_default(config_file.as_deref().map(Path::new));

    println!("\nConfiguration:");
    println!("  Source:  {config_source}");
    println!("  Size:    {}x{}", config.width, config.height);
    println!("  Gamma:   {}", config.gamma);
    println!("  Formats: {}", config.extensions.join(", "));

    println!("\nCommands:");
    println!("  epd-convert convert  Convert a directory of images");
    println!("  epd-convert file     Convert a single image");
    println!("  epd-convert palette  Print the palette with nibble codes");
    println!("\nRun 'epd-convert --help' for more details.");
}
