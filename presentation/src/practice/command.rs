//! Slash commands understood by the practice console

/// A parsed console command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    Help,
    Stats,
    Transcript,
    End,
    Reset,
    Guide,
    Settings,
    Quit,
    Unknown(String),
}

impl ConsoleCommand {
    /// Parse a line starting with `/`. Returns `None` for anything else.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if !line.starts_with('/') {
            return None;
        }
        let name = line.split_whitespace().next().unwrap_or(line);

        Some(match name.to_lowercase().as_str() {
            "/help" | "/h" | "/?" => ConsoleCommand::Help,
            "/stats" => ConsoleCommand::Stats,
            "/transcript" | "/t" => ConsoleCommand::Transcript,
            "/end" => ConsoleCommand::End,
            "/reset" | "/new" => ConsoleCommand::Reset,
            "/guide" | "/doq" => ConsoleCommand::Guide,
            "/settings" => ConsoleCommand::Settings,
            "/quit" | "/exit" | "/q" => ConsoleCommand::Quit,
            _ => ConsoleCommand::Unknown(name.to_string()),
        })
    }

    pub fn help() -> &'static str {
        "Commands:
  /help, /h, /?      - Show this help
  /stats             - Show Above Line / Below Line statistics
  /transcript, /t    - Show the conversation so far
  /end               - End the session and show feedback
  /reset, /new       - Discard this session and start a new one
  /guide, /doq       - Show DOQ guidelines
  /settings          - Show session settings and coaching brief
  /quit, /exit, /q   - Exit"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(ConsoleCommand::parse("/end"), Some(ConsoleCommand::End));
        assert_eq!(ConsoleCommand::parse("  /STATS "), Some(ConsoleCommand::Stats));
        assert_eq!(ConsoleCommand::parse("/q"), Some(ConsoleCommand::Quit));
        assert_eq!(
            ConsoleCommand::parse("/reset now"),
            Some(ConsoleCommand::Reset)
        );
    }

    #[test]
    fn test_plain_text_is_not_a_command() {
        assert_eq!(ConsoleCommand::parse("What is working?"), None);
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(
            ConsoleCommand::parse("/council"),
            Some(ConsoleCommand::Unknown("/council".to_string()))
        );
    }
}
