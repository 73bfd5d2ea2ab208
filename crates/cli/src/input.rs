#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Play(usize),
    Skip,
    Restart,
    New(Option<u32>),
    State,
    Json,
    Events,
    Help,
    Quit,
}

/// Parses one input line. `Err` carries a message meant for the player.
pub fn parse_command(line: &str) -> Result<Option<Command>, String> {
    let mut parts = line.split_whitespace();
    let Some(head) = parts.next() else {
        return Ok(None);
    };
    let arg = parts.next();
    let command = match head.to_lowercase().as_str() {
        "p" | "play" => {
            let raw = arg.ok_or_else(|| "usage: play <index>".to_string())?;
            let index = raw
                .parse::<usize>()
                .map_err(|_| format!("not a room index: {raw}"))?;
            Command::Play(index)
        }
        "s" | "skip" => Command::Skip,
        "r" | "restart" => Command::Restart,
        "n" | "new" => match arg {
            Some(raw) => Command::New(Some(
                raw.parse::<u32>()
                    .map_err(|_| format!("not a seed: {raw}"))?,
            )),
            None => Command::New(None),
        },
        "state" | "st" => Command::State,
        "json" => Command::Json,
        "events" | "e" => Command::Events,
        "h" | "help" | "?" => Command::Help,
        "q" | "quit" | "exit" => Command::Quit,
        other => return Err(format!("unknown command: {other} (try help)")),
    };
    Ok(Some(command))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_short_and_long_forms() {
        assert_eq!(parse_command("p 2"), Ok(Some(Command::Play(2))));
        assert_eq!(parse_command("PLAY 0"), Ok(Some(Command::Play(0))));
        assert_eq!(parse_command("s"), Ok(Some(Command::Skip)));
        assert_eq!(parse_command("new 17"), Ok(Some(Command::New(Some(17)))));
        assert_eq!(parse_command("n"), Ok(Some(Command::New(None))));
        assert_eq!(parse_command("  "), Ok(None));
    }

    #[test]
    fn rejects_bad_input() {
        assert!(parse_command("play").is_err());
        assert!(parse_command("play x").is_err());
        assert!(parse_command("new -1").is_err());
        assert!(parse_command("dance").is_err());
    }
}
