//! REPL Module
//!
//! The interactive prompt: reads a line, dispatches the command, repeats.
//! Input and output are abstract so whole sessions can be scripted in tests.

mod commands;
mod session;

use std::io::{BufRead, Write};
use std::time::Duration;

use rand::Rng;
use tracing::{debug, warn};

use crate::api::PokeApiClient;
use crate::error::Result;

pub use commands::{clean_input, parse_line, Command, Input};
pub use session::{LocationCursor, Pokedex};

/// The REPL prompt
pub const PROMPT: &str = "Pokédex > ";

/// Printed whenever a command is answered from the cache.
pub const CACHE_BANNER: &str = ">>>>> Using cached data <<<<<";

/// Rolls below this (out of 100) catch the Pokémon.
pub const CATCH_THRESHOLD: u32 = 50;

/// Number of suspense dots printed during a catch attempt.
const CATCH_SUSPENSE_STEPS: usize = 3;

/// Whether a catch roll in `0..100` succeeds.
pub fn is_caught(roll: u32) -> bool {
    roll < CATCH_THRESHOLD
}

/// What the loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

// == Repl ==
/// Session state plus everything commands need to run.
pub struct Repl<R> {
    client: PokeApiClient,
    cursor: LocationCursor,
    pokedex: Pokedex,
    rng: R,
    catch_delay: Duration,
}

impl<R: Rng> Repl<R> {
    /// Creates a session positioned before the first page of locations.
    pub fn new(client: PokeApiClient, catch_delay: Duration, rng: R) -> Self {
        let cursor = LocationCursor::starting_at(client.first_location_page_url());
        Self {
            client,
            cursor,
            pokedex: Pokedex::new(),
            rng,
            catch_delay,
        }
    }

    pub fn pokedex(&self) -> &Pokedex {
        &self.pokedex
    }

    pub fn cursor(&self) -> &LocationCursor {
        &self.cursor
    }

    // == Run ==
    /// Runs the prompt loop until `exit` or end of input.
    ///
    /// Command failures are reported on `out` and the loop carries on; only
    /// failing to read `input` ends the session with an error.
    pub async fn run<I: BufRead, W: Write>(&mut self, mut input: I, out: &mut W) -> Result<()> {
        loop {
            write!(out, "{}", PROMPT)?;
            out.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                writeln!(out, "Error reading input or end of input detected")?;
                return Ok(());
            }

            match self.dispatch(&line, out).await {
                Ok(Flow::Exit) => return Ok(()),
                Ok(Flow::Continue) => {}
                Err(err) => {
                    warn!(error = %err, "command failed");
                    writeln!(out, "Error executing command: {}", err)?;
                }
            }
        }
    }

    /// Parses one raw line and runs the command it names.
    pub async fn dispatch<W: Write>(&mut self, line: &str, out: &mut W) -> Result<Flow> {
        let Some(input) = parse_line(line) else {
            return Ok(Flow::Continue);
        };

        match Command::from_name(&input.command) {
            Some(command) => {
                debug!(command = command.name(), arg = ?input.arg, "dispatching");
                self.execute(command, input.arg.as_deref(), out).await
            }
            None => {
                writeln!(out, "Unknown command: {}", input.command)?;
                Ok(Flow::Continue)
            }
        }
    }

    /// Runs `command` with its optional argument.
    pub async fn execute<W: Write>(
        &mut self,
        command: Command,
        arg: Option<&str>,
        out: &mut W,
    ) -> Result<Flow> {
        match command {
            Command::Help => self.help(out)?,
            Command::Exit => {
                writeln!(out, "\nExiting Pokédex...")?;
                return Ok(Flow::Exit);
            }
            Command::Map => self.map(out).await?,
            Command::MapBack => self.map_back(out).await?,
            Command::Explore => self.explore(arg, out).await?,
            Command::Catch => self.catch(arg, out).await?,
            Command::Inspect => self.inspect(arg, out)?,
            Command::Pokedex => self.list_pokedex(out)?,
        }
        Ok(Flow::Continue)
    }

    // == Commands ==
    fn help<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "\nWelcome to the Pokédex!")?;
        writeln!(out, "Available commands:")?;
        for command in Command::ALL {
            writeln!(out, "{}: {}", command.name(), command.description())?;
        }
        writeln!(out)?;
        Ok(())
    }

    async fn map<W: Write>(&mut self, out: &mut W) -> Result<()> {
        let Some(url) = self.cursor.next.clone() else {
            writeln!(out, "\nNo more locations to display")?;
            return Ok(());
        };
        self.show_location_page(&url, out).await
    }

    async fn map_back<W: Write>(&mut self, out: &mut W) -> Result<()> {
        let Some(url) = self.cursor.previous.clone() else {
            writeln!(out, "\nNo previous locations to display")?;
            return Ok(());
        };
        self.show_location_page(&url, out).await
    }

    /// Prints one page of location names and moves the cursor onto it.
    ///
    /// The cursor is left untouched if the page cannot be fetched.
    async fn show_location_page<W: Write>(&mut self, url: &str, out: &mut W) -> Result<()> {
        let fetched = self.client.location_page(url).await?;
        if fetched.from_cache {
            writeln!(out, "{}", CACHE_BANNER)?;
        }

        for location in &fetched.data.results {
            writeln!(out, "{}", location.name)?;
        }
        self.cursor.advance(&fetched.data);
        Ok(())
    }

    async fn explore<W: Write>(&mut self, area: Option<&str>, out: &mut W) -> Result<()> {
        let Some(area) = area else {
            writeln!(out, "Location area name is required for explore command")?;
            return Ok(());
        };

        let fetched = self.client.location_area(area).await?;
        if fetched.from_cache {
            writeln!(out, "{}", CACHE_BANNER)?;
        }

        writeln!(out, "Found Pokémon:")?;
        for name in fetched.data.pokemon_names() {
            writeln!(out, " - {}", name)?;
        }
        Ok(())
    }

    async fn catch<W: Write>(&mut self, name: Option<&str>, out: &mut W) -> Result<()> {
        let Some(name) = name else {
            writeln!(out, "Pokémon name is required to catch")?;
            return Ok(());
        };

        let fetched = self.client.pokemon(name).await?;
        if fetched.from_cache {
            writeln!(out, "{}", CACHE_BANNER)?;
        }
        let pokemon = fetched.data;

        writeln!(out, "...{} was found! Throwing Pokéball!", pokemon.name)?;
        for _ in 0..CATCH_SUSPENSE_STEPS {
            out.flush()?;
            tokio::time::sleep(self.catch_delay).await;
            writeln!(out, "...")?;
        }

        let roll = self.rng.random_range(0..100u32);
        debug!(pokemon = %pokemon.name, roll, "catch roll");
        if is_caught(roll) {
            writeln!(out, "{} was caught!", pokemon.name)?;
            self.pokedex.record(pokemon);
        } else {
            writeln!(out, "{} escaped!", pokemon.name)?;
        }
        Ok(())
    }

    fn inspect<W: Write>(&self, name: Option<&str>, out: &mut W) -> Result<()> {
        let Some(name) = name else {
            writeln!(out, "Pokémon name is required to inspect")?;
            return Ok(());
        };

        let Some(pokemon) = self.pokedex.get(name) else {
            writeln!(out, "You have not yet caught {}", name)?;
            return Ok(());
        };

        writeln!(out, "Name: {}", pokemon.name)?;
        writeln!(out, "Height: {}", pokemon.height)?;
        writeln!(out, "Weight: {}", pokemon.weight)?;
        writeln!(out, "Stats:")?;
        for stat in &pokemon.stats {
            writeln!(out, "  - {}: {}", stat.stat.name, stat.base_stat)?;
        }
        writeln!(out, "Types:")?;
        for kind in &pokemon.types {
            writeln!(out, "  - {}", kind.kind.name)?;
        }
        Ok(())
    }

    fn list_pokedex<W: Write>(&self, out: &mut W) -> Result<()> {
        if self.pokedex.is_empty() {
            writeln!(out, "No Pokémon have been caught")?;
            return Ok(());
        }

        writeln!(out, "Your Pokédex:")?;
        for pokemon in self.pokedex.iter() {
            writeln!(out, "- {}", pokemon.name)?;
        }
        Ok(())
    }
}
