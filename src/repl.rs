//! Line-based terminal front end.
//!
//! Ordinary lines are typed into the calculator key by key; the line end
//! counts as Enter unless the line already ends with `=`. Lines starting
//! with `:` are commands.

use std::io::{BufRead, Write};

use anyhow::{Context, Result, bail};
use orca::calculator::{Calculator, Key, render_keypad};
use orca::help;
use orca::panel::Panel;
use tracing::warn;

const COMMANDS: &str = "\
:press <label>...  press keypad buttons (sin, √, x², x!, π, e, ...)
:del               delete the last character
:c                 clear the display
:history           list history, most recent first
:select <n>        load the result of history entry n
:clear-history     forget all history
:copy              copy the display to the clipboard
:mode              switch between simple and advanced keypad
:keypad            show the current keypad
:help              show the operations guide
:quit              leave";

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Press(Vec<String>),
    Delete,
    Clear,
    History,
    Select(usize),
    ClearHistory,
    Copy,
    Mode,
    Keypad,
    Help,
    Quit,
}

impl Command {
    fn parse(line: &str) -> Result<Self> {
        let mut words = line.split_whitespace();
        let name = words.next().unwrap_or_default();
        let command = match name {
            ":press" => {
                let labels: Vec<String> = words.map(str::to_string).collect();
                if labels.is_empty() {
                    bail!(":press needs at least one button label");
                }
                return Ok(Self::Press(labels));
            }
            ":del" => Self::Delete,
            ":c" => Self::Clear,
            ":history" => Self::History,
            ":select" => {
                let index = words.next().context(":select needs an index")?;
                let index = index
                    .parse()
                    .with_context(|| format!("invalid history index '{index}'"))?;
                Self::Select(index)
            }
            ":clear-history" => Self::ClearHistory,
            ":copy" => Self::Copy,
            ":mode" => Self::Mode,
            ":keypad" => Self::Keypad,
            ":help" => Self::Help,
            ":quit" | ":q" => Self::Quit,
            other => bail!("unknown command '{other}'\n{COMMANDS}"),
        };
        if words.next().is_some() {
            bail!("{name} takes no arguments");
        }
        Ok(command)
    }
}

/// Run the session until `:quit` or end of input.
pub fn run(panel: &mut Panel, input: impl BufRead, mut output: impl Write) -> Result<()> {
    panel.show();
    writeln!(output, "ORCA calculator. Type an expression, :help for commands.")?;
    writeln!(output, "{}", display(panel)?)?;

    for line in input.lines() {
        let line = line.context("failed to read input")?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if line.starts_with(':') {
            match Command::parse(line) {
                Ok(Command::Quit) => break,
                Ok(command) => execute(panel, command, &mut output)?,
                Err(err) => writeln!(output, "{err:#}")?,
            }
        } else {
            type_line(calculator(panel)?, line);
        }
        writeln!(output, "{}", display(panel)?)?;
    }

    panel.unload();
    Ok(())
}

fn calculator(panel: &mut Panel) -> Result<&mut Calculator> {
    panel
        .calculator_mut()
        .context("calculator panel is not open")
}

fn display(panel: &Panel) -> Result<&str> {
    panel
        .calculator()
        .map(Calculator::display)
        .context("calculator panel is not open")
}

fn type_line(calc: &mut Calculator, line: &str) {
    for c in line.chars().filter(|c| !c.is_whitespace()) {
        calc.key(Key::Char(c));
    }
    if !line.ends_with('=') {
        calc.key(Key::Enter);
    }
}

fn execute(panel: &mut Panel, command: Command, output: &mut impl Write) -> Result<()> {
    match command {
        Command::Press(labels) => {
            let calc = calculator(panel)?;
            for label in labels {
                if let Err(err) = calc.press_label(&label) {
                    writeln!(output, "{err}")?;
                    break;
                }
            }
        }
        Command::Delete => {
            calculator(panel)?.key(Key::Backspace);
        }
        Command::Clear => {
            calculator(panel)?.key(Key::Escape);
        }
        Command::History => {
            let calc = calculator(panel)?;
            if calc.history().is_empty() {
                writeln!(output, "(no history)")?;
            }
            for (index, entry) in calc.history().recent().enumerate() {
                writeln!(output, "[{index}] {}", entry.display_text())?;
            }
        }
        Command::Select(index) => {
            if let Err(err) = calculator(panel)?.select_history(index) {
                writeln!(output, "{err}")?;
            }
        }
        Command::ClearHistory => calculator(panel)?.clear_history(),
        Command::Copy => match panel.copy_display() {
            Ok(_) => writeln!(output, "copied")?,
            Err(err) => {
                warn!(error = %err, "clipboard copy failed");
                writeln!(output, "{err}")?;
            }
        },
        Command::Mode => {
            let mode = calculator(panel)?.toggle_mode();
            writeln!(output, "{}", render_keypad(mode))?;
        }
        Command::Keypad => {
            let mode = calculator(panel)?.mode();
            writeln!(output, "{}", render_keypad(mode))?;
        }
        Command::Help => {
            write!(output, "{}", help::render())?;
            writeln!(output, "{COMMANDS}")?;
        }
        Command::Quit => {}
    }
    Ok(())
}
