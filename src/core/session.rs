use crate::core::form::CalculatorForm;
use crate::core::Presenter;
use crate::utils::error::{Result, INVALID_INPUT_NOTICE};
use std::io::{BufRead, Write};

const HELP: &str = "\
Commands:
  amount <value>   set the total contract amount (e.g. 100000 or $100,000.00)
  term <months>    set the contract term in months (minimum 1)
  calculate        compute the 85% / 15% split
  clear            reset the form
  show             show the current fields and result
  help             show this help
  quit             leave
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Amount(String),
    Term(String),
    Calculate,
    Clear,
    Show,
    Help,
    Quit,
    Unknown(String),
}

impl Command {
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let (verb, rest) = line
            .split_once(char::is_whitespace)
            .map(|(v, r)| (v, r.trim()))
            .unwrap_or((line, ""));

        let command = match verb.to_ascii_lowercase().as_str() {
            "amount" => Command::Amount(rest.to_string()),
            "term" => Command::Term(rest.to_string()),
            "calculate" | "calc" => Command::Calculate,
            "clear" => Command::Clear,
            "show" => Command::Show,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            _ => Command::Unknown(verb.to_string()),
        };
        Some(command)
    }
}

/// Drives a [`CalculatorForm`] from line-oriented input.
///
/// Prompts and informational lines go to `out`; results and notices go
/// through the presenter. With a JSON presenter on stdout, pass stderr as
/// `out` so stdout stays one JSON object per line.
pub struct Session<R: BufRead, W: Write, P: Presenter> {
    input: R,
    out: W,
    presenter: P,
    form: CalculatorForm,
}

impl<R: BufRead, W: Write, P: Presenter> Session<R, W, P> {
    pub fn new(input: R, out: W, presenter: P, form: CalculatorForm) -> Self {
        Self {
            input,
            out,
            presenter,
            form,
        }
    }

    pub fn form(&self) -> &CalculatorForm {
        &self.form
    }

    pub fn into_parts(self) -> (CalculatorForm, W, P) {
        (self.form, self.out, self.presenter)
    }

    /// Runs until `quit` or end of input. Returns the number of commands handled.
    pub fn run(&mut self) -> Result<usize> {
        writeln!(self.out, "SSP Calculator: 85% Upfront License / 15% Support")?;
        writeln!(self.out, "Type 'help' for commands.")?;

        let mut handled = 0;
        let mut buf = Vec::new();
        loop {
            write!(self.out, "> ")?;
            self.out.flush()?;

            buf.clear();
            if self.input.read_until(b'\n', &mut buf)? == 0 {
                tracing::debug!("End of input, closing session");
                break;
            }

            // 非 UTF-8 輸入視為無效輸入，不中斷整個 session
            let Ok(line) = std::str::from_utf8(&buf) else {
                tracing::warn!("⚠️ Ignoring line that is not valid UTF-8");
                self.presenter.notify(INVALID_INPUT_NOTICE)?;
                continue;
            };

            let Some(command) = Command::parse(line) else {
                continue;
            };
            handled += 1;
            if !self.execute(command)? {
                break;
            }
        }

        Ok(handled)
    }

    /// Returns `false` when the session should end.
    pub fn execute(&mut self, command: Command) -> Result<bool> {
        tracing::debug!("Executing command: {:?}", command);
        match command {
            Command::Amount(value) => self.form.set_contract_amount(value),
            Command::Term(value) => self.form.set_contract_term(value),
            Command::Calculate => {
                self.form.calculate(&mut self.presenter)?;
            }
            Command::Clear => self.form.clear(&mut self.presenter)?,
            Command::Show => self.show()?,
            Command::Help => write!(self.out, "{}", HELP)?,
            Command::Quit => return Ok(false),
            Command::Unknown(verb) => {
                writeln!(self.out, "Unknown command '{}'. Type 'help' for commands.", verb)?;
            }
        }
        Ok(true)
    }

    fn show(&mut self) -> Result<()> {
        let amount = match self.form.contract_amount() {
            "" => "(empty)",
            other => other,
        };
        writeln!(self.out, "Total Contract Amount: {}", amount)?;
        writeln!(self.out, "Contract Term (months): {}", self.form.contract_term())?;

        match self.form.results().copied() {
            Some(breakdown) => self.presenter.show_results(&breakdown),
            None => {
                writeln!(self.out, "No results yet.")?;
                Ok(())
            }
        }
    }
}
