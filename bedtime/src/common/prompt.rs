use anyhow::{Context, Result};
use std::io::{BufRead, Write};

/// What to do about a daily note that doesn't exist yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateAnswer {
    NeverMind,
    Create,
    /// Create, and stop asking from now on.
    CreateAndDontAskAgain,
}

impl CreateAnswer {
    /// Anything unrecognized, including an empty line, is "never mind".
    pub fn parse(line: &str) -> Self {
        match line.trim().to_lowercase().as_str() {
            "y" | "yes" => CreateAnswer::Create,
            "a" | "always" => CreateAnswer::CreateAndDontAskAgain,
            _ => CreateAnswer::NeverMind,
        }
    }
}

pub fn ask_to_create(mut input: impl BufRead, mut output: impl Write) -> Result<CreateAnswer> {
    write!(
        output,
        "Today's daily note doesn't exist yet. Do you want to create it?\n\
         [y]es, [N]ever mind, [a]lways create without asking: "
    )
    .context("writing prompt")?;
    output.flush().context("writing prompt")?;

    let mut line = String::new();
    input.read_line(&mut line).context("reading answer")?;
    Ok(CreateAnswer::parse(&line))
}
