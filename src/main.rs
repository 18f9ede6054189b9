//
// main.rs
// dicom-manager
//
// Binary entry point: installs the log subscriber and hands execution to the CLI layer.
//

use dicom_manager::cli;

fn main() -> anyhow::Result<()> {
    // Diagnostics go through tracing; primary command output stays on stdout.
    tracing_subscriber::fmt()
        .with_target(false)
        .without_time()
        .init();

    cli::run()
}
