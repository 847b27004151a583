//! Slash command registry and line parsing.

use once_cell::sync::Lazy;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    About,
    Skills,
    Projects,
    Contact,
    Experience,
    Education,
    Comments,
    Comment,
    DeleteComment,
    ClearComments,
    Admin,
    Logout,
    Theme,
    Mode,
    Matrix,
    Whoami,
    Pwd,
    Ls,
    Social,
    Version,
    SetVersion,
    SetTheme,
    Guess,
    Clear,
}

#[derive(Debug, Clone, Copy)]
pub struct CommandSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub command: Command,
    pub admin_only: bool,
}

const fn spec(name: &'static str, description: &'static str, command: Command) -> CommandSpec {
    CommandSpec {
        name,
        description,
        command,
        admin_only: false,
    }
}

const fn admin_spec(
    name: &'static str,
    description: &'static str,
    command: Command,
) -> CommandSpec {
    CommandSpec {
        name,
        description,
        command,
        admin_only: true,
    }
}

/// Registry order is presentation order: help output, autocomplete results,
/// and the did-you-mean list all follow it.
pub const COMMANDS: &[CommandSpec] = &[
    spec("/help", "List available commands", Command::Help),
    spec("/about", "Navigate to the about section", Command::About),
    spec("/skills", "Navigate to the skills section", Command::Skills),
    spec("/projects", "Navigate to the projects section", Command::Projects),
    spec("/contact", "Navigate to the contact section", Command::Contact),
    spec("/experience", "Navigate to the experience section", Command::Experience),
    spec("/education", "Navigate to the education section", Command::Education),
    spec("/comments", "Show the visitor comment count", Command::Comments),
    spec("/comment", "Open the comment form", Command::Comment),
    admin_spec("/deletecomment", "Delete a comment by id", Command::DeleteComment),
    admin_spec("/clearcomments", "Delete all comments", Command::ClearComments),
    spec("/admin", "Authenticate as admin", Command::Admin),
    spec("/logout", "Leave admin mode", Command::Logout),
    spec("/theme", "Switch the website theme", Command::Theme),
    spec("/mode", "Switch the terminal visual mode", Command::Mode),
    spec("/matrix", "Trigger the matrix rain effect", Command::Matrix),
    spec("/whoami", "Display site owner info", Command::Whoami),
    spec("/pwd", "Show the current section", Command::Pwd),
    spec("/ls", "List available sections", Command::Ls),
    spec("/social", "List social links", Command::Social),
    spec("/version", "Show the site version", Command::Version),
    admin_spec("/setversion", "Set the site version string", Command::SetVersion),
    admin_spec("/settheme", "Set the default website theme", Command::SetTheme),
    spec("/guess", "Play a number guessing game", Command::Guess),
    spec("/clear", "Clear the terminal", Command::Clear),
];

/// Exact-name lookup over the registry.
#[must_use]
pub fn parse_command(name: &str) -> Option<Command> {
    COMMANDS
        .iter()
        .find(|spec| spec.name == name)
        .map(|spec| spec.command)
}

/// Splits a trimmed input line into the command token and its argument
/// string. The split happens at the first whitespace run only, so arguments
/// may themselves contain whitespace.
#[must_use]
pub fn split_input(line: &str) -> (&str, &str) {
    match line.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim_start()),
        None => (line, ""),
    }
}

/// Registry names containing `partial` as a case-insensitive substring, in
/// registry order. An empty partial yields no suggestions.
#[must_use]
pub fn suggest(partial: &str) -> Vec<String> {
    if partial.is_empty() {
        return Vec::new();
    }
    let needle = partial.to_lowercase();
    COMMANDS
        .iter()
        .filter(|spec| spec.name.contains(&needle))
        .map(|spec| spec.name.to_string())
        .collect()
}

static HELP_LINES: Lazy<Vec<String>> = Lazy::new(|| {
    let width = COMMANDS
        .iter()
        .map(|spec| spec.name.len())
        .max()
        .unwrap_or(0);
    let mut lines = vec!["Available commands:".to_string()];
    lines.extend(COMMANDS.iter().map(|spec| {
        let marker = if spec.admin_only { " (admin)" } else { "" };
        format!("{:<width$} - {}{}", spec.name, spec.description, marker)
    }));
    lines
});

/// The formatted `/help` screen. The registry is constant, so the screen is
/// built once.
#[must_use]
pub fn help_lines() -> &'static [String] {
    &HELP_LINES
}
