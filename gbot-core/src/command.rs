//! Command parsing: `/name[@botname] args...` into a [`CommandInvocation`].

/// A parsed bot command: lower-cased name, optional `@botname` addressee, and the argument string.
///
/// Arguments are the whitespace-separated words after the command joined by single spaces,
/// so `"/gemini   What  is AI? "` yields `args == "What is AI?"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandInvocation {
    pub name: String,
    pub addressee: Option<String>,
    pub args: String,
}

impl CommandInvocation {
    /// Parses message text. Returns None unless the text starts with `/` followed by a name.
    pub fn parse(text: &str) -> Option<Self> {
        let rest = text.trim_start().strip_prefix('/')?;
        if rest.starts_with(char::is_whitespace) {
            return None;
        }
        let mut words = rest.split_whitespace();
        let head = words.next()?;

        let (name, addressee) = match head.split_once('@') {
            Some((name, bot)) => (name, Some(bot.to_string()).filter(|b| !b.is_empty())),
            None => (head, None),
        };
        if name.is_empty() {
            return None;
        }

        Some(Self {
            name: name.to_lowercase(),
            addressee,
            args: words.collect::<Vec<_>>().join(" "),
        })
    }

    /// True if the command carries no `@addressee` or the addressee matches `bot_username` (case-insensitive).
    pub fn is_for(&self, bot_username: &str) -> bool {
        match &self.addressee {
            Some(addressee) => addressee.eq_ignore_ascii_case(bot_username),
            None => true,
        }
    }

    /// True if this is the given command (`name` without the leading slash).
    pub fn is(&self, name: &str) -> bool {
        self.name == name
    }
}
