use clap::{Parser, Subcommand};
use grayimg::Image;
use std::error::Error;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Grayscale PGM image tools")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replace every pixel with its negative.
    Invert {
        /// Input PGM file.
        source: PathBuf,
        /// Output PGM file.
        destination: PathBuf,
    },
    /// Extract a sub-image; the rectangle is clamped to the source.
    Crop {
        source: PathBuf,
        destination: PathBuf,
        /// Top row of the rectangle.
        row: usize,
        /// Left column of the rectangle.
        col: usize,
        height: usize,
        width: usize,
    },
    /// Crop a square region and enlarge it by two with interpolation.
    Zoom {
        source: PathBuf,
        destination: PathBuf,
        row: usize,
        col: usize,
        /// Side of the square region.
        size: usize,
    },
    /// Shrink the image by an integer factor, averaging each block.
    Icon {
        source: PathBuf,
        destination: PathBuf,
        /// Reduction factor (at least 1).
        factor: usize,
    },
    /// Piecewise-linear contrast stretch mapping `in1 -> out1` and `in2 -> out2`.
    Contrast {
        source: PathBuf,
        destination: PathBuf,
        in1: u8,
        in2: u8,
        out1: u8,
        out2: u8,
    },
    /// Permute the rows of the image.
    Shuffle {
        source: PathBuf,
        destination: PathBuf,
    },
}

impl Command {
    fn paths(&self) -> (&Path, &Path) {
        match self {
            Command::Invert {
                source,
                destination,
            }
            | Command::Crop {
                source,
                destination,
                ..
            }
            | Command::Zoom {
                source,
                destination,
                ..
            }
            | Command::Icon {
                source,
                destination,
                ..
            }
            | Command::Contrast {
                source,
                destination,
                ..
            }
            | Command::Shuffle {
                source,
                destination,
            } => (source.as_path(), destination.as_path()),
        }
    }

    fn apply(&self, mut image: Image) -> Result<Image, Box<dyn Error>> {
        let out = match *self {
            Command::Invert { .. } => {
                image.invert();
                image
            }
            Command::Crop {
                row,
                col,
                height,
                width,
                ..
            } => {
                println!("Region: top-left ({row}, {col}), {height} rows x {width} columns");
                image.crop(row, col, height, width)
            }
            Command::Zoom { row, col, size, .. } => {
                println!("Region: top-left ({row}, {col}), side {size}");
                image.crop(row, col, size, size).zoom_2x()
            }
            Command::Icon { factor, .. } => {
                if factor == 0 {
                    return Err("factor must be at least 1".into());
                }
                println!("Reduction factor: {factor}");
                image.subsample(factor)
            }
            Command::Contrast {
                in1,
                in2,
                out1,
                out2,
                ..
            } => {
                if in1 == in2 {
                    return Err("in1 and in2 must differ".into());
                }
                println!("Input thresholds: {in1}..{in2}");
                println!("Output thresholds: {out1}..{out2}");
                image.adjust_contrast(in1, in2, out1, out2);
                image
            }
            Command::Shuffle { .. } => {
                image.shuffle_rows();
                image
            }
        };
        Ok(out)
    }
}

fn print_dimensions(path: &Path, image: &Image) {
    println!(
        "{}: {} rows x {} columns",
        path.display(),
        image.rows(),
        image.cols()
    );
}

fn run(command: &Command) -> Result<(), Box<dyn Error>> {
    let (source, destination) = command.paths();
    println!("Source file: {}", source.display());
    println!("Destination file: {}", destination.display());

    let image = Image::open(source)?;
    print_dimensions(source, &image);

    let result = command.apply(image)?;
    print_dimensions(destination, &result);

    result.save(destination)?;
    println!("Image saved to {}", destination.display());
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("grayimg=warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match run(&cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(command = ?cli.command, "command failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
