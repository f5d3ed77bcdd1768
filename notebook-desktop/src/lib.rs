pub mod menu;
pub mod settings;
pub mod shell;

// Re-export core library
pub use notebook_core::*;

use std::io;

use shell::Shell;

/// Starts an interactive notebook session on the terminal.
///
/// # Errors
///
/// Returns an error if the terminal cannot be read or written.
pub fn run() -> io::Result<()> {
    let settings_path = settings::settings_file_path();
    let settings = settings::load_settings_from(&settings_path);
    log::info!(
        "settings from {}, notebook folder {}",
        settings_path.display(),
        settings.notebook_directory
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(stdin.lock(), stdout.lock(), settings, settings_path);
    shell.run()?;

    log::info!("session ended with {} note(s) in memory", shell.store().len());
    Ok(())
}
