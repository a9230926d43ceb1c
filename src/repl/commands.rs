//! Command table and input parsing for the REPL.

/// Every command the REPL understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    Exit,
    Map,
    MapBack,
    Explore,
    Catch,
    Inspect,
    Pokedex,
}

impl Command {
    /// All commands, in the order `help` lists them.
    pub const ALL: [Command; 8] = [
        Command::Help,
        Command::Exit,
        Command::Map,
        Command::MapBack,
        Command::Explore,
        Command::Catch,
        Command::Inspect,
        Command::Pokedex,
    ];

    /// The word typed to invoke the command.
    pub fn name(self) -> &'static str {
        match self {
            Command::Help => "help",
            Command::Exit => "exit",
            Command::Map => "map",
            Command::MapBack => "mapb",
            Command::Explore => "explore",
            Command::Catch => "catch",
            Command::Inspect => "inspect",
            Command::Pokedex => "pokedex",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Command::Help => "Displays a help message",
            Command::Exit => "Exits the Pokedex",
            Command::Map => {
                "Shows the first 20 locations in the Pokémon world, each subsequent call shows the next 20"
            }
            Command::MapBack => {
                "Shows the previous 20 locations in the Pokémon world, each subsequent call shows the previous 20"
            }
            Command::Explore => "Shows all available Pokémon on the passed route",
            Command::Catch => "Attempt to catch the named Pokémon",
            Command::Inspect => "Use the Pokédex to inspect your caught Pokémon",
            Command::Pokedex => "Use the Pokédex to see all the Pokémon you have caught",
        }
    }

    /// Looks a command up by its (already lowercased) name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|command| command.name() == name)
    }
}

/// One non-empty line of user input, split into command word and argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Input {
    pub command: String,
    pub arg: Option<String>,
}

/// Trims and lowercases a raw input line.
pub fn clean_input(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Splits a line into its command word and optional first argument.
///
/// Returns `None` for blank lines. Words past the first argument are ignored.
pub fn parse_line(line: &str) -> Option<Input> {
    let cleaned = clean_input(line);
    let mut words = cleaned.split_whitespace();
    let command = words.next()?.to_string();
    let arg = words.next().map(str::to_string);
    Some(Input { command, arg })
}
