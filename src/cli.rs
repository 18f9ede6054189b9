//
// cli.rs
// dicom-manager
//
// Defines the CLI surface with Clap, keeps all interactive prompts at this boundary,
// and dispatches user-selected commands to the corresponding modules.
//

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};

use crate::dicomdir::IndexOutcome;
use crate::error::ManagerError;
use crate::{anonymize, dicomdir, locate, read};

/// Command-line interface glue code: defines the available verbs and dispatches to modules.
#[derive(Parser)]
#[command(name = "dicom-manager")]
#[command(about = "Locate, inspect, and bulk-edit DICOM files in a directory tree", long_about = None)]
pub struct Cli {
    /// DICOM directory to operate on
    #[arg(short, long, global = true, default_value = ".")]
    pub directory: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Locate the DICOMDIR or the DICOM data files
    Locate {
        #[arg(value_enum)]
        target: LocateTarget,
    },
    /// Print datasets: the DICOMDIR, every data file, or one chosen interactively
    Read {
        #[arg(value_enum)]
        target: ReadTarget,
    },
    /// Anonymize every DICOM file into <directory>_MODIFIED
    Anonymize {
        /// Regenerate a DICOMDIR inside the anonymized tree afterwards
        #[arg(long)]
        create_dicomdir: bool,
    },
    /// (Re)generate the DICOMDIR index via dcmmkdir
    CreateDicomdir,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum LocateTarget {
    Dicomdir,
    Dcm,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum ReadTarget {
    Dicomdir,
    Dcm,
    Selection,
}

pub fn run() -> Result<()> {
    // Parse the raw CLI arguments once and dispatch to a subcommand handler.
    let cli = Cli::parse();
    let directory = resolve_directory(&cli.directory)?;

    match cli.command {
        Commands::Locate { target } => match target {
            LocateTarget::Dicomdir => match locate::find_dicomdir(&directory) {
                Some(path) => println!("DICOMDIR: {}", path.display()),
                None => println!("No DICOMDIR found under {}", directory.display()),
            },
            LocateTarget::Dcm => match locate::find_dicom_files(&directory) {
                Some(files) => {
                    println!("DICOM files under {}:", directory.display());
                    for file in files {
                        println!("{}", file.display());
                    }
                }
                None => println!("No DICOM files found under {}", directory.display()),
            },
        },
        Commands::Read { target } => match target {
            ReadTarget::Dicomdir => {
                let path = locate::find_dicomdir(&directory)
                    .ok_or_else(|| ManagerError::DicomdirNotFound(directory.clone()))?;
                read::print_file(&path)?;
            }
            ReadTarget::Dcm => {
                let files = locate::find_dicom_files(&directory)
                    .ok_or_else(|| ManagerError::NoDicomFiles(directory.clone()))?;
                for file in files {
                    read::print_file(&file)?;
                }
            }
            ReadTarget::Selection => read_selection(&directory)?,
        },
        Commands::Anonymize { create_dicomdir } => {
            let report = anonymize::anonymize_directory(&directory)?;
            println!(
                "Anonymized {} file(s) into {}",
                report.files_written,
                report.output_root.display()
            );
            if create_dicomdir {
                regenerate_index(&report.output_root)?;
            }
        }
        Commands::CreateDicomdir => regenerate_index(&directory)?,
    }

    Ok(())
}

fn read_selection(directory: &Path) -> Result<()> {
    let report = locate::scan(directory);
    if report.is_empty() {
        println!(
            "No DICOMDIR or DICOM files found under {}",
            directory.display()
        );
        return Ok(());
    }

    let options = report.selection_options();
    println!("Choose a file by its number.");
    for (idx, option) in options.iter().enumerate() {
        println!("{}. {}", idx + 1, option.display());
    }

    let input = prompt("Selection: ")?;
    let chosen = read::select(&options, &input)?;
    read::print_file(chosen)
}

fn regenerate_index(directory: &Path) -> Result<()> {
    // Overwriting an existing index requires an exact "YES".
    let confirm = || match prompt("DICOMDIR already exists, overwrite it? (YES/no): ") {
        Ok(answer) => answer.trim() == "YES",
        Err(_) => false,
    };

    match dicomdir::create_dicomdir(directory, confirm)? {
        IndexOutcome::Created => println!("DICOMDIR regenerated under {}", directory.display()),
        IndexOutcome::Declined => println!("Keeping the existing DICOMDIR."),
    }
    Ok(())
}

fn prompt(message: &str) -> Result<String> {
    print!("{message}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line)
}

fn resolve_directory(path: &Path) -> Result<PathBuf> {
    if !path.is_dir() {
        return Err(ManagerError::InvalidDirectory(path.to_path_buf()).into());
    }
    // Absolute form keeps relative-path mirroring and log output unambiguous.
    Ok(path.canonicalize()?)
}
