use console::{style, Term};
use std::io::{self, BufRead};
use ticklist::api::{PromptRequest, PromptResponse};
use ticklist::error::Result;

/// Answers prompt requests on the terminal. When stdin is not a terminal the
/// answer is read as a plain line, so scripts can pipe it in.
pub(super) struct TermPrompter {
    term: Term,
}

impl TermPrompter {
    pub(super) fn new() -> Self {
        Self {
            term: Term::stdout(),
        }
    }

    pub(super) fn ask(&self, request: &PromptRequest) -> Result<PromptResponse> {
        self.term
            .write_line(&style(request.title()).bold().to_string())?;
        self.term.write_line(&request.message())?;

        match request.default_value() {
            None => {
                self.term.write_str("[y/N] ")?;
                let answer = self.read_line(None)?;
                Ok(parse_confirmation(&answer))
            }
            Some(default) => {
                let answer = self.read_line(Some(default))?;
                Ok(parse_text(answer))
            }
        }
    }

    fn read_line(&self, initial: Option<&str>) -> Result<String> {
        if self.term.is_term() {
            let line = match initial {
                Some(text) => self.term.read_line_initial_text(text)?,
                None => self.term.read_line()?,
            };
            return Ok(line);
        }

        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(line.trim_end_matches(['\n', '\r']).to_string())
    }
}

fn parse_confirmation(answer: &str) -> PromptResponse {
    match answer.trim() {
        "y" | "Y" | "yes" => PromptResponse::Accept,
        _ => PromptResponse::Cancel,
    }
}

// An empty line cancels: there is no separate cancel key on a plain terminal.
fn parse_text(answer: String) -> PromptResponse {
    if answer.is_empty() {
        PromptResponse::Cancel
    } else {
        PromptResponse::Text(answer)
    }
}
