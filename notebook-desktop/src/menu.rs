//! Menu of actions offered by the notebook window.

/// One entry of the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub command: &'static str,
    pub arguments: &'static str,
    pub label: &'static str,
}

/// An action chosen by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuAction {
    NewNote,
    OpenNotebook(String),
    SaveNotebook(String),
    List,
    /// 1-based note number, as printed in the preview grid.
    Show(usize),
    SetDirectory(String),
    Help,
    Quit,
}

/// Builds the menu, in display order.
pub fn build_menu() -> Vec<MenuItem> {
    vec![
        MenuItem { command: "new", arguments: "", label: "New Note" },
        MenuItem { command: "open", arguments: "<path>", label: "Open Notebook" },
        MenuItem { command: "save", arguments: "<path>", label: "Save Notebook" },
        MenuItem { command: "list", arguments: "", label: "Show note previews" },
        MenuItem { command: "show", arguments: "<number>", label: "Show a full note" },
        MenuItem { command: "dir", arguments: "<path>", label: "Set notebook folder" },
        MenuItem { command: "help", arguments: "", label: "Show this menu" },
        MenuItem { command: "quit", arguments: "", label: "Quit" },
    ]
}

/// Text listing every menu entry.
pub fn menu_text() -> String {
    build_menu()
        .iter()
        .map(|item| {
            let usage = format!("{} {}", item.command, item.arguments);
            format!("  {:<16}{}\n", usage.trim_end(), item.label)
        })
        .collect()
}

/// Parses one line of user input into an action.
///
/// # Errors
///
/// Returns a message for the user when the command is unknown or its
/// argument is missing or malformed.
pub fn parse_action(line: &str) -> Result<MenuAction, String> {
    let line = line.trim();
    let (command, argument) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    let required = |what: &str| -> Result<String, String> {
        if argument.is_empty() {
            Err(format!("'{command}' needs a {what}"))
        } else {
            Ok(argument.to_string())
        }
    };

    match command.to_lowercase().as_str() {
        "new" | "n" => Ok(MenuAction::NewNote),
        "open" | "o" => required("path").map(MenuAction::OpenNotebook),
        "save" | "s" => required("path").map(MenuAction::SaveNotebook),
        "list" | "l" | "" => Ok(MenuAction::List),
        "show" => {
            let number: usize = required("note number")?
                .parse()
                .map_err(|_| format!("'{argument}' is not a note number"))?;
            if number == 0 {
                return Err("Note numbers start at 1".to_string());
            }
            Ok(MenuAction::Show(number))
        }
        "dir" => required("path").map(MenuAction::SetDirectory),
        "help" | "?" => Ok(MenuAction::Help),
        "quit" | "exit" | "q" => Ok(MenuAction::Quit),
        other => Err(format!("Unknown command: {other}")),
    }
}
