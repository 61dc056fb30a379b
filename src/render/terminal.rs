//! Colored terminal output for a game session

use crossterm::style::{Stylize, StyledContent};
use std::io::{self, Write};

use super::colors::{category_color, ROW_TEXT};
use super::table::{
    category_tables, guess_rows, pretty_move_name, summary_rows, sprite_url, SummaryRow,
};
use crate::catalog::{capitalize, Catalog, Creature};
use crate::deduce::MatchCategory;
use crate::game::GameSession;

const LEVEL_WIDTH: usize = 7;
const MOVE_WIDTH: usize = 18;

fn cell_row(level: &str, move_name: &str) -> String {
    format!(" {:<LEVEL_WIDTH$} {:<MOVE_WIDTH$} ", level, move_name)
}

fn paint(text: String, category: Option<MatchCategory>, bold: bool) -> StyledContent<String> {
    let mut styled = text.stylize();
    if let Some(category) = category {
        styled = styled.with(ROW_TEXT).on(category_color(category));
    }
    if bold {
        styled = styled.bold();
    }
    styled
}

/// Merged view of the target's moveset plus the categorical columns
pub fn write_knowledge<W: Write>(
    out: &mut W,
    session: &GameSession,
    catalog: &Catalog,
    min_rows: usize,
    divisor: usize,
) -> io::Result<()> {
    writeln!(out, "Currently guessing for {}", session.edition())?;
    writeln!(out, "{}", cell_row("level", "move").bold())?;

    for row in summary_rows(session, catalog) {
        let category = row.category();
        let (text, bold) = match row {
            SummaryRow::Known {
                level,
                move_name,
                same_type,
            } => (cell_row(&level.to_string(), &pretty_move_name(&move_name)), same_type),
            SummaryRow::Hidden { level } => (cell_row(&level.to_string(), "?"), false),
            SummaryRow::Bounded { move_name, range } => {
                (cell_row(&range.to_string(), &pretty_move_name(&move_name)), false)
            }
        };
        writeln!(out, "{}", paint(text, category, bold))?;
    }

    for table in category_tables(session.knowledge(), min_rows, divisor) {
        writeln!(out)?;
        writeln!(out, "{}", format!(" {:<width$} ", table.category, width = MOVE_WIDTH).bold())?;
        for move_name in &table.moves {
            let text = format!(" {:<MOVE_WIDTH$} ", pretty_move_name(move_name));
            writeln!(out, "{}", paint(text, Some(table.category), false))?;
        }
    }
    Ok(())
}

/// One guess's level-up table, colored by category
pub fn write_guess<W: Write>(
    out: &mut W,
    guess: &Creature,
    session: &GameSession,
    catalog: &Catalog,
) -> io::Result<()> {
    let mut title = capitalize(guess.name());
    if guess.is_same_species(session.target()) {
        title.push_str(&format!(
            " -- You won in {} tries!",
            session.guesses().len()
        ));
    }
    writeln!(out, "{}", title.bold())?;
    writeln!(out, "{}", sprite_url(guess.edition(), guess.id()).dim())?;
    writeln!(out, "{}", cell_row("level", "move").bold())?;
    for row in guess_rows(guess, session.target(), catalog) {
        let text = cell_row(&row.level.to_string(), &pretty_move_name(&row.move_name));
        writeln!(out, "{}", paint(text, Some(row.category), row.same_type))?;
    }
    Ok(())
}

/// Knowledge table followed by every guess, newest first
pub fn write_session<W: Write>(
    out: &mut W,
    session: &GameSession,
    catalog: &Catalog,
    min_rows: usize,
    divisor: usize,
) -> io::Result<()> {
    write_knowledge(out, session, catalog, min_rows, divisor)?;
    for guess in session.guesses().iter().rev() {
        writeln!(out)?;
        write_guess(out, guess, session, catalog)?;
    }
    out.flush()
}
