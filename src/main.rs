use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "icongen")]
#[command(about = "Generate the calculator application icon assets")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the full asset set: PNG, multi-size ICO, installer copy
    Generate {
        /// Project root to write assets/ and installer/ under
        #[arg(long, default_value = ".")]
        root: PathBuf,
    },
    /// Render the icon to a single PNG at the given size
    Png {
        /// Edge length of the square output in pixels
        #[arg(value_parser = clap::value_parser!(u32).range(1..))]
        size: u32,
        /// Path to write the PNG to
        output: PathBuf,
    },
    /// Render the icon and write it as a macOS .icns icon family
    Icns {
        /// Path to write the .icns file to
        output: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    // Running with no subcommand generates the assets in place, so the
    // binary can be invoked bare from a build step.
    let command = cli.command.unwrap_or(Commands::Generate {
        root: PathBuf::from("."),
    });

    match command {
        Commands::Generate { root } => match icongen::commands::generate::run(&root) {
            Ok(assets) => {
                println!("Wrote {}", assets.png.display());
                println!("Wrote {}", assets.ico.display());
                println!("Copied {}", assets.installer_ico.display());
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(2);
            }
        },
        Commands::Png { size, output } => match icongen::commands::png::run(size, &output) {
            Ok(()) => {
                println!("Wrote {}", output.display());
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(2);
            }
        },
        Commands::Icns { output } => match icongen::commands::icns::run(&output) {
            Ok(()) => {
                println!("Wrote {}", output.display());
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(2);
            }
        },
    }
}
