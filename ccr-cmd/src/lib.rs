//! Command implementations for the CCR CLI.
//!
//! Each subcommand runs the same code the browser apps run and prints the
//! result, so template changes can be checked without a browser.

use clap::{Subcommand, ValueEnum};

pub mod inspect;
pub mod render;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SectionKind {
    Category,
    Offer,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the system name generated from a display name
    Slug {
        /// Category display name, e.g. "Gas & Groceries"
        display_name: String,
    },

    /// Print the HTML of the row the add button would append
    RenderRow {
        /// Which repeating section
        #[arg(value_enum)]
        section: SectionKind,

        /// Rows already on the page; the new row takes this index
        #[arg(short, long, default_value_t = 0)]
        index: usize,

        /// Options of the select shown by the first existing row
        #[arg(long, value_delimiter = ',')]
        select_options: Option<Vec<String>>,
    },

    /// Split a submitted field name into section, field and index
    ParseField {
        /// Wire name, e.g. `category_name_3`
        name: String,

        /// Section prefix the name is expected to carry
        #[arg(short, long)]
        section: String,
    },

    /// Print the points the cumulative value chart would draw
    MonthlyValues {
        /// JSON array as found in `data-monthly-values`
        json: String,

        /// Values are already dollars (saved recommendation view)
        #[arg(long)]
        raw: bool,
    },
}

pub fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Slug { display_name } => {
            println!("{}", render::slug(&display_name));
            Ok(())
        }
        Command::RenderRow {
            section,
            index,
            select_options,
        } => {
            let html = render::render_row(section, index, select_options.as_deref())?;
            println!("{}", html);
            Ok(())
        }
        Command::ParseField { name, section } => {
            println!("{}", inspect::parse_field(&section, &name)?);
            Ok(())
        }
        Command::MonthlyValues { json, raw } => {
            println!("{}", inspect::monthly_values(&json, raw)?);
            Ok(())
        }
    }
}
