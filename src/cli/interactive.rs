use std::io::{BufRead, Write};

use crate::cli::session::Session;
use crate::error::Result;
use crate::processors::{render, render_error, QuoteRequest};

const QUIT_WORDS: [&str; 3] = ["q", "quit", "exit"];

/// Prompt loop: port, container size, product type and price, then a quote.
///
/// Request errors are printed and the loop continues. An unavailable rate
/// table ends the session with that error. Ends cleanly on EOF or `quit`.
pub fn run_interactive<R: BufRead, W: Write>(
    session: &mut Session,
    mut input: R,
    mut output: W,
) -> Result<()> {
    writeln!(
        output,
        "Landed cost calculator ({} to {} at {}). Enter 'quit' to exit.",
        session.config().source_currency,
        session.config().target_currency,
        session.config().exchange_rate
    )?;

    loop {
        let table = session.table()?;

        let ports: Vec<String> = table.ports().into_iter().map(String::from).collect();
        let Some(port) = prompt_choice(&mut input, &mut output, "Port", &ports)? else {
            break;
        };

        // Offer the sizes this port has; fall back to every size for unlisted ports.
        let mut sizes = table.container_sizes_for(&port);
        if sizes.is_empty() {
            sizes = table.container_sizes();
        }
        let sizes: Vec<String> = sizes.iter().map(|s| s.to_string()).collect();
        let Some(container_size) =
            prompt_choice(&mut input, &mut output, "Container size", &sizes)?
        else {
            break;
        };

        let products: Vec<String> = table.product_types().into_iter().map(String::from).collect();
        let Some(product_type) =
            prompt_choice(&mut input, &mut output, "Product type", &products)?
        else {
            break;
        };

        let label = format!(
            "Price of {} in {}",
            product_type,
            session.config().source_currency
        );
        let Some(price) = prompt(&mut input, &mut output, &label)? else {
            break;
        };

        let request = QuoteRequest::new(&port, &container_size, &product_type, &price);
        match session.quote(&request) {
            Err(e) if !e.is_recoverable() => {
                writeln!(output, "{}", render_error(&e))?;
                return Err(e);
            }
            result => writeln!(output, "{}\n", render(&result))?,
        }
    }

    writeln!(output, "Goodbye.")?;
    Ok(())
}

/// Read one trimmed line. `None` on EOF or a quit word.
fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, label: &str) -> Result<Option<String>> {
    write!(output, "{}: ", label)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    let answer = line.trim();
    if QUIT_WORDS.contains(&answer.to_lowercase().as_str()) {
        return Ok(None);
    }
    Ok(Some(answer.to_string()))
}

/// List numbered options and accept either a number or a typed value.
fn prompt_choice<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
    options: &[String],
) -> Result<Option<String>> {
    for (i, option) in options.iter().enumerate() {
        writeln!(output, "  {}) {}", i + 1, option)?;
    }

    let Some(answer) = prompt(input, output, label)? else {
        return Ok(None);
    };

    let choice = match answer.parse::<usize>() {
        Ok(n) if (1..=options.len()).contains(&n) => options[n - 1].clone(),
        _ => answer,
    };
    Ok(Some(choice))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_prompt_choice_by_number_and_name() {
        let options = vec!["20GP".to_string(), "40HC".to_string()];
        let mut output = Vec::new();

        let mut input = Cursor::new("2\n");
        let choice = prompt_choice(&mut input, &mut output, "Container size", &options).unwrap();
        assert_eq!(choice.as_deref(), Some("40HC"));

        let mut input = Cursor::new(" 20gp \n");
        let choice = prompt_choice(&mut input, &mut output, "Container size", &options).unwrap();
        assert_eq!(choice.as_deref(), Some("20gp"));

        // Out-of-range numbers pass through as typed
        let mut input = Cursor::new("7\n");
        let choice = prompt_choice(&mut input, &mut output, "Container size", &options).unwrap();
        assert_eq!(choice.as_deref(), Some("7"));
    }

    #[test]
    fn test_prompt_quit_and_eof() {
        let mut output = Vec::new();
        assert_eq!(prompt(&mut Cursor::new("QUIT\n"), &mut output, "Port").unwrap(), None);
        assert_eq!(prompt(&mut Cursor::new(""), &mut output, "Port").unwrap(), None);
    }
}
