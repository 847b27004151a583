//! The slash-command interpreter: dispatch, scrollback, input history.

use std::cmp::Ordering;
use std::rc::Rc;

use local_store::{now_unix_ms, CommentStore, KvStore, Preferences};
use rand::Rng;

use crate::commands::{help_lines, parse_command, split_input, Command, COMMANDS};
use crate::config::TerminalConfig;
use crate::session::{SessionState, SiteTheme, VisualMode};

/// One interpreter turn as shown in the terminal scrollback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollbackEntry {
    pub input: String,
    pub output: Vec<String>,
    pub timestamp: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryDirection {
    Older,
    Newer,
}

/// Presentation-shell collaborator. Every call is best-effort fire-and-forget;
/// the shell signals nothing back and the interpreter reports success
/// regardless.
pub trait Host {
    fn navigate(&mut self, section: &str);
    fn focus_comment_form(&mut self);
    fn apply_site_theme(&mut self, theme: SiteTheme);
    fn play_matrix_effect(&mut self);
    fn current_section(&self) -> String;
}

const ADMIN_REQUIRED: &str = "Admin access required. Authenticate with /admin <passphrase>.";
const GUESS_RANGE: std::ops::RangeInclusive<u32> = 1..=100;

/// The command terminal core.
///
/// Stateless between commands apart from the scrollback, the session state,
/// and the persisted preferences. No operation panics on user input; every
/// error path is a scrollback output line.
pub struct Interpreter {
    config: TerminalConfig,
    comments: Rc<CommentStore>,
    prefs: Preferences,
    scrollback: Vec<ScrollbackEntry>,
    history_cursor: Option<usize>,
    session: SessionState,
}

impl Interpreter {
    #[must_use]
    pub fn new(config: TerminalConfig, kv: Rc<dyn KvStore>) -> Self {
        Self {
            config,
            comments: Rc::new(CommentStore::new(Rc::clone(&kv))),
            prefs: Preferences::new(kv),
            scrollback: Vec::new(),
            history_cursor: None,
            session: SessionState::default(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &TerminalConfig {
        &self.config
    }

    #[must_use]
    pub fn scrollback(&self) -> &[ScrollbackEntry] {
        &self.scrollback
    }

    /// Shared handle for the comment gallery and form UI.
    #[must_use]
    pub fn comments(&self) -> &Rc<CommentStore> {
        &self.comments
    }

    #[must_use]
    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut SessionState {
        &mut self.session
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.prefs.is_admin()
    }

    /// Executes one submitted line.
    ///
    /// Exactly one scrollback entry is appended per call, except for `/clear`
    /// which empties the scrollback and appends nothing. Empty input records
    /// an entry with no output.
    pub fn submit(&mut self, line: &str, host: &mut dyn Host) {
        self.history_cursor = None;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            self.record("", Vec::new());
            return;
        }

        let (name, arg) = split_input(trimmed);
        let Some(command) = parse_command(name) else {
            self.record(trimmed, unknown_command_output(name));
            return;
        };

        let output = self.execute(command, arg, host);
        if command == Command::Clear {
            self.scrollback.clear();
            return;
        }
        self.record(trimmed, output);
    }

    /// Command names matching `partial`, in registry order. Read-only.
    #[must_use]
    pub fn autocomplete(&self, partial: &str) -> Vec<String> {
        crate::commands::suggest(partial)
    }

    /// Steps through previously submitted non-empty inputs and returns the
    /// input line to restore. Older clamps at the oldest entry; newer past
    /// the newest returns the empty string and resets the cursor. The
    /// scrollback itself is never touched.
    pub fn navigate_history(&mut self, direction: HistoryDirection) -> String {
        let inputs: Vec<&str> = self
            .scrollback
            .iter()
            .map(|entry| entry.input.as_str())
            .filter(|input| !input.is_empty())
            .collect();

        match direction {
            HistoryDirection::Older => {
                if inputs.is_empty() {
                    return String::new();
                }
                let cursor = match self.history_cursor {
                    None => inputs.len() - 1,
                    Some(0) => 0,
                    Some(index) => index - 1,
                };
                self.history_cursor = Some(cursor);
                inputs[cursor].to_string()
            }
            HistoryDirection::Newer => {
                let Some(index) = self.history_cursor else {
                    return String::new();
                };
                if index + 1 >= inputs.len() {
                    self.history_cursor = None;
                    return String::new();
                }
                self.history_cursor = Some(index + 1);
                inputs[index + 1].to_string()
            }
        }
    }

    fn record(&mut self, input: &str, output: Vec<String>) {
        self.scrollback.push(ScrollbackEntry {
            input: input.to_string(),
            output,
            timestamp: now_unix_ms(),
        });
    }

    fn execute(&mut self, command: Command, arg: &str, host: &mut dyn Host) -> Vec<String> {
        match command {
            Command::Help => help_lines().to_vec(),
            Command::About => navigate_to(host, "about", "About"),
            Command::Skills => navigate_to(host, "skills", "Skills"),
            Command::Projects => navigate_to(host, "projects", "Projects"),
            Command::Contact => navigate_to(host, "contact", "Contact"),
            // The reference site anchors both of these inside the about
            // section.
            Command::Experience => navigate_to(host, "about", "Experience"),
            Command::Education => navigate_to(host, "about", "Education"),
            Command::Comments => self.comments_summary(host),
            Command::Comment => {
                host.navigate("comments");
                host.focus_comment_form();
                vec!["Opening the comment form...".to_string()]
            }
            Command::DeleteComment => self.delete_comment(arg),
            Command::ClearComments => self.clear_comments(),
            Command::Admin => self.authenticate(arg),
            Command::Logout => {
                self.prefs.set_admin(false);
                vec!["Logged out of admin mode.".to_string()]
            }
            Command::Theme => self.switch_site_theme(arg, host),
            Command::Mode => self.switch_visual_mode(arg),
            Command::Matrix => {
                host.play_matrix_effect();
                vec![
                    "Matrix rain effect activated...".to_string(),
                    "Wake up, Neo...".to_string(),
                ]
            }
            Command::Whoami => self.config.profile.clone(),
            Command::Pwd => vec![format!("Current section: {}", host.current_section())],
            Command::Ls => {
                let mut lines = vec!["Available sections:".to_string()];
                lines.extend(self.config.sections.iter().map(|section| format!("{section}/")));
                lines
            }
            Command::Social => self.config.social_links.clone(),
            Command::Version => {
                let version = self
                    .prefs
                    .version()
                    .unwrap_or_else(|| self.config.fallback_version.clone());
                vec![format!("Site version: {version}")]
            }
            Command::SetVersion => self.set_version(arg),
            Command::SetTheme => self.set_default_theme(arg),
            Command::Guess => self.guess(arg),
            Command::Clear => Vec::new(),
        }
    }

    fn comments_summary(&self, host: &mut dyn Host) -> Vec<String> {
        let count = self.comments.list().len();
        if count == 0 {
            return vec!["No comments yet. Type /comment to leave one.".to_string()];
        }
        host.navigate("comments");
        let plural = if count == 1 { "" } else { "s" };
        vec![
            format!("{count} comment{plural} posted."),
            "Navigating to Comments section...".to_string(),
        ]
    }

    fn delete_comment(&self, arg: &str) -> Vec<String> {
        if !self.prefs.is_admin() {
            return vec![ADMIN_REQUIRED.to_string()];
        }
        if arg.is_empty() {
            return vec!["Usage: /deletecomment <id>".to_string()];
        }
        // Idempotent: success is reported whether or not the id existed.
        self.comments.delete(arg);
        vec![format!("Comment {arg} deleted.")]
    }

    fn clear_comments(&self) -> Vec<String> {
        if !self.prefs.is_admin() {
            return vec![ADMIN_REQUIRED.to_string()];
        }
        self.comments.clear();
        vec!["All comments cleared.".to_string()]
    }

    fn authenticate(&self, passphrase: &str) -> Vec<String> {
        if self.prefs.is_admin() {
            return vec!["Already authenticated as admin.".to_string()];
        }
        if passphrase == self.config.admin_passphrase {
            self.prefs.set_admin(true);
            vec!["Admin mode enabled.".to_string()]
        } else {
            vec!["Incorrect passphrase.".to_string()]
        }
    }

    fn switch_site_theme(&mut self, arg: &str, host: &mut dyn Host) -> Vec<String> {
        let theme = if arg.is_empty() {
            self.session.site_theme.next()
        } else {
            match SiteTheme::from_arg(arg) {
                Some(theme) => theme,
                None => {
                    return vec![
                        format!("Invalid theme: {arg}"),
                        format!("Available themes: {}", SiteTheme::valid_values()),
                    ]
                }
            }
        };
        self.session.site_theme = theme;
        host.apply_site_theme(theme);
        vec![format!("Website theme changed to: {}", theme.name())]
    }

    fn switch_visual_mode(&mut self, arg: &str) -> Vec<String> {
        let mode = if arg.is_empty() {
            self.session.visual_mode.next()
        } else {
            match VisualMode::from_arg(arg) {
                Some(mode) => mode,
                None => {
                    return vec![
                        format!("Invalid mode: {arg}"),
                        format!("Available modes: {}", VisualMode::valid_values()),
                    ]
                }
            }
        };
        self.session.visual_mode = mode;
        vec![format!("Terminal mode switched to: {}", mode.name())]
    }

    fn set_version(&self, arg: &str) -> Vec<String> {
        if !self.prefs.is_admin() {
            return vec![ADMIN_REQUIRED.to_string()];
        }
        if arg.is_empty() {
            return vec!["Usage: /setversion <version>".to_string()];
        }
        self.prefs.set_version(arg);
        vec![format!("Site version set to {arg}.")]
    }

    fn set_default_theme(&self, arg: &str) -> Vec<String> {
        if !self.prefs.is_admin() {
            return vec![ADMIN_REQUIRED.to_string()];
        }
        if arg.is_empty() {
            return vec!["Usage: /settheme <dark|light>".to_string()];
        }
        match SiteTheme::from_arg(arg) {
            Some(theme) => {
                self.prefs.set_default_theme(theme.name());
                vec![format!("Default site theme set to {}.", theme.name())]
            }
            None => vec![
                format!("Invalid theme: {arg}"),
                format!("Available themes: {}", SiteTheme::valid_values()),
            ],
        }
    }

    fn guess(&mut self, arg: &str) -> Vec<String> {
        if arg.is_empty() {
            if self.session.guess_target.is_some() {
                return vec!["A game is already running. Guess with /guess <number>.".to_string()];
            }
            self.session.guess_target = Some(rand::thread_rng().gen_range(GUESS_RANGE));
            return vec![
                "I'm thinking of a number between 1 and 100.".to_string(),
                "Guess it with /guess <number>.".to_string(),
            ];
        }

        let Ok(guess) = arg.parse::<u32>() else {
            return vec![format!("That's not a number: {arg}")];
        };
        let Some(target) = self.session.guess_target else {
            return vec!["No game running. Start one with /guess.".to_string()];
        };
        match guess.cmp(&target) {
            Ordering::Less => vec!["Too low, try again.".to_string()],
            Ordering::Greater => vec!["Too high, try again.".to_string()],
            Ordering::Equal => {
                self.session.guess_target = None;
                vec![format!("Correct! The number was {target}.")]
            }
        }
    }
}

fn navigate_to(host: &mut dyn Host, section: &str, label: &str) -> Vec<String> {
    host.navigate(section);
    vec![format!("Navigating to {label} section...")]
}

fn unknown_command_output(name: &str) -> Vec<String> {
    let mut output = vec![
        format!("Command not found: {name}"),
        "Type /help for available commands".to_string(),
        "Did you mean one of these?".to_string(),
    ];
    output.extend(COMMANDS.iter().take(3).map(|spec| format!("  {}", spec.name)));
    output
}
