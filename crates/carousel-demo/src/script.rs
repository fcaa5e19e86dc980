//! Command script
//!
//! One command per line; blank lines and `#` comments are skipped.

use std::time::Duration;

use anyhow::{Context, Result, bail};
use carousel_dom::{Key, KeyboardInput};

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Next,
    Prev,
    /// Activate the tab at this index
    Tab(usize),
    Click(String),
    Key(KeyboardInput),
    Focus(String),
    /// Feed this many timer ticks
    Tick(usize),
    Play,
    Stop,
    /// Run the real ticker for this long
    Wait(Duration),
    State,
}

impl Command {
    /// Parse one line; `Ok(None)` for blanks and comments
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }
        let (name, arg) = match line.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (line, ""),
        };

        let command = match name {
            "next" => Self::Next,
            "prev" | "previous" => Self::Prev,
            "tab" => Self::Tab(arg.parse().with_context(|| format!("bad tab index `{arg}`"))?),
            "click" => Self::Click(required(name, arg)?),
            "focus" => Self::Focus(required(name, arg)?),
            "key" => Self::Key(parse_key(&required(name, arg)?)),
            "tick" if arg.is_empty() => Self::Tick(1),
            "tick" => Self::Tick(arg.parse().with_context(|| format!("bad tick count `{arg}`"))?),
            "play" => Self::Play,
            "stop" => Self::Stop,
            "wait" => {
                let ms: u64 = arg.parse().with_context(|| format!("bad wait `{arg}`"))?;
                Self::Wait(Duration::from_millis(ms))
            }
            "state" => Self::State,
            other => bail!("unknown command `{other}`"),
        };
        Ok(Some(command))
    }
}

fn required(name: &str, arg: &str) -> Result<String> {
    if arg.is_empty() {
        bail!("`{name}` needs an argument");
    }
    Ok(arg.to_string())
}

/// `left`, `ArrowRight`, `ctrl-up`, `ctrl+up`
fn parse_key(raw: &str) -> KeyboardInput {
    let (ctrl, name) = match raw.split_once(['-', '+']) {
        Some((m, name)) if m.eq_ignore_ascii_case("ctrl") => (true, name),
        _ => (false, raw),
    };
    let key = match name.to_ascii_lowercase().as_str() {
        "left" => Key::ArrowLeft,
        "right" => Key::ArrowRight,
        "up" => Key::ArrowUp,
        "down" => Key::ArrowDown,
        _ => Key::parse(name),
    };
    let input = KeyboardInput::new(key);
    if ctrl { input.ctrl() } else { input }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse("next").unwrap(), Some(Command::Next));
        assert_eq!(Command::parse("  tab 2 ").unwrap(), Some(Command::Tab(2)));
        assert_eq!(Command::parse("tick").unwrap(), Some(Command::Tick(1)));
        assert_eq!(Command::parse("tick 5").unwrap(), Some(Command::Tick(5)));
        assert_eq!(
            Command::parse("click .carousel-next").unwrap(),
            Some(Command::Click(".carousel-next".into()))
        );
        assert_eq!(
            Command::parse("wait 250").unwrap(),
            Some(Command::Wait(Duration::from_millis(250)))
        );
    }

    #[test]
    fn test_skip_blank_and_comments() {
        assert_eq!(Command::parse("").unwrap(), None);
        assert_eq!(Command::parse("# setup").unwrap(), None);
    }

    #[test]
    fn test_parse_errors() {
        assert!(Command::parse("tab two").is_err());
        assert!(Command::parse("click").is_err());
        assert!(Command::parse("jump 3").is_err());
    }

    #[test]
    fn test_parse_keys() {
        assert_eq!(
            Command::parse("key left").unwrap(),
            Some(Command::Key(KeyboardInput::new(Key::ArrowLeft)))
        );
        assert_eq!(
            Command::parse("key ctrl-up").unwrap(),
            Some(Command::Key(KeyboardInput::new(Key::ArrowUp).ctrl()))
        );
        assert_eq!(
            Command::parse("key ArrowRight").unwrap(),
            Some(Command::Key(KeyboardInput::new(Key::ArrowRight)))
        );
    }
}
