//! Interactive menu loop shared by both tools
//!
//! Each tool parses a numeric choice into its own command enum and executes
//! it against its state. The loop prints any operation error and keeps going;
//! only an exit command or the end of input, at any prompt, leaves it.

pub mod display;
pub mod input;

pub use display::DisplayManager;
pub use input::{ask_field, InputHandler, LineSource, ScriptedInput};

use crate::errors::{RecordError, Result};

/// A numeric text menu
pub trait Menu {
    /// Parsed menu choice
    type Command;

    /// Heading printed above the entries
    fn title(&self) -> &str;

    /// (choice, label) pairs, in display order
    fn entries(&self) -> &[(&'static str, &'static str)];

    /// Parse a raw choice
    fn parse(&self, choice: &str) -> Self::Command;

    /// Execute a command
    ///
    /// Returns true if the menu should continue, false if it should exit
    fn execute(
        &mut self,
        command: Self::Command,
        input: &mut dyn LineSource,
        display: &DisplayManager,
    ) -> Result<bool>;
}

/// Drive `menu` until it exits or input runs out
pub fn run_menu<M: Menu>(
    menu: &mut M,
    input: &mut dyn LineSource,
    display: &DisplayManager,
) -> Result<()> {
    loop {
        display.show_menu(menu.title(), menu.entries());

        let Some(choice) = input.ask("Enter choice: ")? else {
            log::debug!("Input closed, leaving {}", menu.title());
            return Ok(());
        };

        let command = menu.parse(&choice);
        match menu.execute(command, input, display) {
            Ok(true) => {}
            Ok(false) => return Ok(()),
            Err(RecordError::InputClosed) => {
                log::debug!("Input closed mid-operation, leaving {}", menu.title());
                return Ok(());
            }
            Err(err) => {
                log::debug!("Operation failed: {:?}", err);
                display.show_error(&err.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    enum Counter {
        Bump,
        Ask,
        Fail,
        Exit,
        Invalid,
    }

    struct CounterMenu {
        count: usize,
    }

    impl Menu for CounterMenu {
        type Command = Counter;

        fn title(&self) -> &str {
            "Counter"
        }

        fn entries(&self) -> &[(&'static str, &'static str)] {
            &[("1", "Bump"), ("2", "Fail"), ("3", "Ask"), ("0", "Exit")]
        }

        fn parse(&self, choice: &str) -> Counter {
            match choice {
                "1" => Counter::Bump,
                "2" => Counter::Fail,
                "3" => Counter::Ask,
                "0" => Counter::Exit,
                _ => Counter::Invalid,
            }
        }

        fn execute(
            &mut self,
            command: Counter,
            input: &mut dyn LineSource,
            _display: &DisplayManager,
        ) -> Result<bool> {
            match command {
                Counter::Bump => self.count += 1,
                Counter::Fail => return Err(RecordError::Generic("nope".to_string())),
                Counter::Ask => {
                    ask_field(input, "Amount: ")?;
                    self.count += 1;
                }
                Counter::Exit => return Ok(false),
                Counter::Invalid => {}
            }
            Ok(true)
        }
    }

    #[test]
    fn test_loop_survives_errors_and_exits() {
        let mut menu = CounterMenu { count: 0 };
        let mut input = ScriptedInput::new(["1", "2", "x", "1", "0", "1"]);
        run_menu(&mut menu, &mut input, &DisplayManager::new(false)).unwrap();

        assert_eq!(menu.count, 2);
        assert_eq!(input.remaining(), 1);
    }

    #[test]
    fn test_loop_ends_on_closed_input() {
        let mut menu = CounterMenu { count: 0 };
        let mut input = ScriptedInput::new(["1"]);
        run_menu(&mut menu, &mut input, &DisplayManager::new(false)).unwrap();
        assert_eq!(menu.count, 1);
    }

    #[test]
    fn test_loop_ends_when_field_prompt_closes() {
        let mut menu = CounterMenu { count: 0 };
        let mut input = ScriptedInput::new(["3"]).then_close(["1", "0"]);
        run_menu(&mut menu, &mut input, &DisplayManager::new(false)).unwrap();

        assert_eq!(menu.count, 0);
        assert_eq!(input.prompts(), ["Enter choice: ", "Amount: "]);
        assert_eq!(input.remaining(), 2);
    }
}
