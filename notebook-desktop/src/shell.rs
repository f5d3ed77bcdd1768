//! Line-oriented notebook window: note form, preview grid, detail view and
//! notebook open/save, driven by text commands.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use notebook_core::{grid_rows, render_detail, NoteFields, NoteStore};

use crate::menu::{menu_text, parse_action, MenuAction};
use crate::settings::{save_settings_to, AppSettings};

/// Line that ends the multi-line text field of the note form.
const END_OF_TEXT: &str = ".";

/// Extension added to save paths that have none.
const NOTEBOOK_EXTENSION: &str = "txt";

/// A notebook session reading commands from `input` and drawing on `output`.
///
/// The session owns the [`NoteStore`] for its whole lifetime.
pub struct Shell<R, W> {
    input: R,
    output: W,
    store: NoteStore,
    settings: AppSettings,
    settings_path: PathBuf,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W, settings: AppSettings, settings_path: PathBuf) -> Self {
        Self {
            input,
            output,
            store: NoteStore::new(),
            settings,
            settings_path,
        }
    }

    pub fn store(&self) -> &NoteStore {
        &self.store
    }

    /// Reads and executes commands until `quit` or end of input.
    ///
    /// # Errors
    ///
    /// Returns an error only when the terminal itself cannot be read or
    /// written; notebook failures are reported to the user and the session
    /// continues.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "Notebook")?;
        write!(self.output, "{}", menu_text())?;

        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                break;
            };
            match parse_action(&line) {
                Ok(MenuAction::Quit) => break,
                Ok(action) => self.dispatch(action)?,
                Err(message) => writeln!(self.output, "{message}")?,
            }
        }
        writeln!(self.output)?;
        Ok(())
    }

    fn dispatch(&mut self, action: MenuAction) -> io::Result<()> {
        match action {
            MenuAction::NewNote => self.new_note(),
            MenuAction::OpenNotebook(path) => self.open_notebook(&path),
            MenuAction::SaveNotebook(path) => self.save_notebook(&path),
            MenuAction::List => self.render_previews(),
            MenuAction::Show(number) => self.display_note(number),
            MenuAction::SetDirectory(path) => self.set_directory(&path),
            MenuAction::Help => write!(self.output, "{}", menu_text()),
            MenuAction::Quit => Ok(()),
        }
    }

    /// Runs the note form and submits it.
    fn new_note(&mut self) -> io::Result<()> {
        let title = self.read_field("Title")?;
        writeln!(self.output, "Text (end with a line containing only '{END_OF_TEXT}'):")?;
        let text = self.read_text()?;
        let links = self.read_field("Link")?;
        let tags = self.read_field("Tags")?;

        let note = self.store.create(NoteFields { title, text, links, tags });
        writeln!(self.output, "Created \"{}\" at {}", note.title(), note.created_at())?;
        self.render_previews()
    }

    fn open_notebook(&mut self, raw: &str) -> io::Result<()> {
        let path = self.resolve_path(raw);
        match self.store.load(&path) {
            Ok(count) => {
                writeln!(self.output, "Opened {count} note(s) from {}", path.display())?;
                self.render_previews()
            }
            Err(e) => {
                log::warn!("open {} failed: {e}", path.display());
                writeln!(self.output, "{}", e.user_message())
            }
        }
    }

    fn save_notebook(&mut self, raw: &str) -> io::Result<()> {
        let mut path = self.resolve_path(raw);
        if path.extension().is_none() {
            path.set_extension(NOTEBOOK_EXTENSION);
        }
        if let Some(parent) = path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                return writeln!(self.output, "File error: {e}");
            }
        }
        match self.store.dump(&path) {
            Ok(count) => writeln!(self.output, "Saved {count} note(s) to {}", path.display()),
            Err(e) => {
                log::warn!("save {} failed: {e}", path.display());
                writeln!(self.output, "{}", e.user_message())
            }
        }
    }

    /// Draws the preview grid, one line per preview and a blank line between rows.
    fn render_previews(&mut self) -> io::Result<()> {
        let layout = self.settings.preview_layout();
        let previews = self.store.previews(&layout);
        if previews.is_empty() {
            return writeln!(self.output, "No notes yet.");
        }

        writeln!(
            self.output,
            "{} note(s) in {} row(s):",
            previews.len(),
            grid_rows(previews.len(), layout.columns)
        )?;
        for preview in &previews {
            if preview.column == 0 && preview.row > 0 {
                writeln!(self.output)?;
            }
            let label = preview.label().lines().collect::<Vec<_>>().join(" | ");
            writeln!(self.output, "[{}] {label}", preview.index + 1)?;
        }
        Ok(())
    }

    fn display_note(&mut self, number: usize) -> io::Result<()> {
        match self.store.get(number - 1) {
            Ok(note) => {
                let detail = render_detail(note);
                writeln!(self.output, "--- {} ---", note.title())?;
                write!(self.output, "{detail}")
            }
            Err(e) => writeln!(self.output, "{}", e.user_message()),
        }
    }

    fn set_directory(&mut self, raw: &str) -> io::Result<()> {
        self.settings.notebook_directory = raw.to_string();
        match save_settings_to(&self.settings_path, &self.settings) {
            Ok(()) => writeln!(self.output, "Notebook folder is now {raw}"),
            Err(message) => writeln!(self.output, "{message}"),
        }
    }

    /// Resolves a user-typed path against the notebook folder.
    pub fn resolve_path(&self, raw: &str) -> PathBuf {
        let path = Path::new(raw);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            Path::new(&self.settings.notebook_directory).join(path)
        }
    }

    fn read_field(&mut self, label: &str) -> io::Result<String> {
        write!(self.output, "{label}: ")?;
        self.output.flush()?;
        Ok(self.read_line()?.unwrap_or_default())
    }

    fn read_text(&mut self) -> io::Result<String> {
        let mut lines = Vec::new();
        while let Some(line) = self.read_line()? {
            if line == END_OF_TEXT {
                break;
            }
            lines.push(line);
        }
        Ok(lines.join("\n"))
    }

    /// Next input line without its line ending, or `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}
