//! Interactive specialization picker.
//!
//! Kept separate from clap parsing: clap handles flags, the picker handles the
//! one-shot numbered menu on stdin. A bad answer ends the run; there is no
//! re-prompt.

use std::io::{BufRead, Write};

use crate::domain::{AdmissionsTable, Selection, ALL_LABEL};
use crate::error::AppError;

/// One numbered entry of the menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuOption {
    pub label: String,
    pub selection: Selection,
}

/// Menu entries: the aggregate first, then each specialization in header order.
pub fn menu_options(table: &AdmissionsTable) -> Vec<MenuOption> {
    let mut options = Vec::with_capacity(table.specializations.len() + 1);
    options.push(MenuOption {
        label: ALL_LABEL.to_string(),
        selection: Selection::All,
    });
    options.extend(table.specialization_names().into_iter().map(|name| MenuOption {
        label: name.to_string(),
        selection: Selection::Specialization(name.to_string()),
    }));
    options
}

/// Render the numbered menu (1-based).
pub fn format_menu(options: &[MenuOption]) -> String {
    let mut out = String::from("Available Specializations:\n");
    for (idx, option) in options.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", idx + 1, option.label));
    }
    out
}

/// Resolve one line of user input to a selection.
pub fn parse_choice(input: &str, options: &[MenuOption]) -> Result<Selection, AppError> {
    let input = input.trim();
    let choice = input
        .parse::<usize>()
        .map_err(|_| AppError::input(format!("Invalid selection '{input}': expected a number.")))?;

    if !(1..=options.len()).contains(&choice) {
        return Err(AppError::input(format!(
            "Invalid choice: {choice}. Enter a number between 1 and {}.",
            options.len()
        )));
    }
    Ok(options[choice - 1].selection.clone())
}

/// Print the menu to `output`, read one line from `input`, and resolve it.
pub fn prompt_for_selection<R: BufRead, W: Write>(
    options: &[MenuOption],
    mut input: R,
    mut output: W,
) -> Result<Selection, AppError> {
    write!(output, "{}", format_menu(options))
        .and_then(|()| write!(output, "Select a specialization by number: "))
        .and_then(|()| output.flush())
        .map_err(|e| AppError::input(format!("Failed to write prompt: {e}")))?;

    let mut line = String::new();
    let bytes = input
        .read_line(&mut line)
        .map_err(|e| AppError::input(format!("Failed to read input: {e}")))?;

    if bytes == 0 {
        return Err(AppError::input("No input received."));
    }

    parse_choice(&line, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Specialization;
    use std::io::Cursor;

    fn table() -> AdmissionsTable {
        let spec = |name: &str| Specialization {
            name: name.to_string(),
            counts: vec![1],
        };
        AdmissionsTable {
            years: vec![2020],
            reasons: vec!["x".to_string()],
            specializations: vec![spec("A"), spec("B"), spec("C")],
        }
    }

    #[test]
    fn option_count_is_specializations_plus_one() {
        let options = menu_options(&table());
        assert_eq!(options.len(), 4);
        assert_eq!(options[0].selection, Selection::All);
        assert_eq!(options[3].selection, Selection::Specialization("C".to_string()));
    }

    #[test]
    fn menu_is_numbered_from_one() {
        let menu = format_menu(&menu_options(&table()));
        assert_eq!(
            menu,
            "Available Specializations:\n1. All (Total BCA Admissions)\n2. A\n3. B\n4. C\n"
        );
    }

    #[test]
    fn option_one_is_always_the_aggregate() {
        let options = menu_options(&table());
        assert_eq!(parse_choice("1", &options).unwrap(), Selection::All);
        assert_eq!(
            parse_choice(" 2\n", &options).unwrap(),
            Selection::Specialization("A".to_string())
        );
    }

    #[test]
    fn out_of_range_and_garbage_are_fatal() {
        let options = menu_options(&table());
        for bad in ["0", "5", "-1", "two", "", "1.5"] {
            let err = parse_choice(bad, &options).unwrap_err();
            assert_eq!(err.exit_code(), crate::error::EXIT_INPUT, "input {bad:?}");
        }
    }

    #[test]
    fn prompt_prints_menu_then_reads_one_line() {
        let options = menu_options(&table());
        let mut out = Vec::new();
        let selection = prompt_for_selection(&options, Cursor::new("3\n4\n"), &mut out).unwrap();
        assert_eq!(selection, Selection::Specialization("B".to_string()));

        let printed = String::from_utf8(out).unwrap();
        assert!(printed.starts_with("Available Specializations:\n"));
        assert!(printed.ends_with("Select a specialization by number: "));
    }

    #[test]
    fn prompt_fails_on_eof() {
        let options = menu_options(&table());
        let err = prompt_for_selection(&options, Cursor::new(""), Vec::new()).unwrap_err();
        assert_eq!(err.message(), "No input received.");
    }
}
