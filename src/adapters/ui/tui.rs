//! Implements InputPort. Numbered console menu over the statistics queries.
//!
//! Uses an inquire `Select` on a terminal; when stdin is piped, prints the menu
//! and reads the option number line by line instead.

use crate::domain::DomainError;
use crate::ports::{InputPort, LogPort, StatisticsQueries};
use async_trait::async_trait;
use inquire::Select;
use inquire::error::InquireError;
use inquire::ui::{Color, RenderConfig, Styled};
use std::fmt;
use std::io::{BufRead, IsTerminal};
use std::sync::Arc;

/// Display format for dates in the top-dates listing.
const DAY_FORMAT: &str = "%d-%m-%Y";

/// Applies the prompt theme globally. Call once before the first prompt.
pub fn apply_theme() {
    let config = RenderConfig::default_colored()
        .with_prompt_prefix(Styled::new("$").with_fg(Color::LightGreen))
        .with_highlighted_option_prefix(Styled::new(">").with_fg(Color::LightCyan));
    inquire::set_global_render_config(config);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    TotalCredit,
    TotalDebit,
    HighestAmountDate,
    AveragePerDay,
    TopDates,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 6] = [
        MenuChoice::TotalCredit,
        MenuChoice::TotalDebit,
        MenuChoice::HighestAmountDate,
        MenuChoice::AveragePerDay,
        MenuChoice::TopDates,
        MenuChoice::Exit,
    ];

    pub fn number(self) -> u8 {
        match self {
            Self::TotalCredit => 1,
            Self::TotalDebit => 2,
            Self::HighestAmountDate => 3,
            Self::AveragePerDay => 4,
            Self::TopDates => 5,
            Self::Exit => 6,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::TotalCredit => "Total Credit Amount",
            Self::TotalDebit => "Total Debit Amount",
            Self::HighestAmountDate => "Transaction with Highest Amount DateTime",
            Self::AveragePerDay => "Average Amount Per Day",
            Self::TopDates => "Top 5 Dates with Highest Total Amount",
            Self::Exit => "Exit",
        }
    }

    /// Typed option number, `"1"` to `"6"`. Surrounding whitespace is ignored.
    pub fn from_input(input: &str) -> Option<Self> {
        let n: u8 = input.trim().parse().ok()?;
        Self::ALL.into_iter().find(|c| c.number() == n)
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.number(), self.label())
    }
}

/// What the loop should print after handling one selection, and whether to stop.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Reply {
    pub lines: Vec<String>,
    pub exit: bool,
}

/// TUI adapter. Inquire prompts.
pub struct TuiInputPort {
    queries: Arc<dyn StatisticsQueries>,
    log: Arc<dyn LogPort>,
}

impl TuiInputPort {
    pub fn new(queries: Arc<dyn StatisticsQueries>, log: Arc<dyn LogPort>) -> Self {
        Self { queries, log }
    }

    /// Handle one selection. `None` is an unrecognised input. Query failures
    /// are logged and reported; they never end the session.
    pub async fn handle(&self, choice: Option<MenuChoice>) -> Reply {
        let Some(choice) = choice else {
            self.log.info("User selected an invalid menu option.");
            return Reply {
                lines: vec!["Invalid option, please try again.".to_string()],
                exit: false,
            };
        };
        if choice == MenuChoice::Exit {
            self.log.info("Exiting the application.");
            return Reply {
                lines: vec!["Exiting...".to_string()],
                exit: true,
            };
        }

        let pb = super::progress::spinner(choice.label());
        let result = self.query(choice).await;
        pb.finish_and_clear();

        match result {
            Ok(lines) => Reply { lines, exit: false },
            Err(e) => {
                self.log.error("Error during user interaction.", &e);
                Reply {
                    lines: vec![format!("Error: {}", e)],
                    exit: false,
                }
            }
        }
    }

    async fn query(&self, choice: MenuChoice) -> Result<Vec<String>, DomainError> {
        let lines = match choice {
            MenuChoice::TotalCredit => {
                let v = self.queries.total_credit_amount().await?;
                vec![format!("Total Credit Amount: {}", v)]
            }
            MenuChoice::TotalDebit => {
                let v = self.queries.total_debit_amount().await?;
                vec![format!("Total Debit Amount: {}", v)]
            }
            MenuChoice::HighestAmountDate => {
                let v = self.queries.highest_amount_date().await?;
                let shown = v.map(|d| d.to_string()).unwrap_or_default();
                vec![format!("Transaction with Highest Amount DateTime: {}", shown)]
            }
            MenuChoice::AveragePerDay => {
                let v = self.queries.average_amount_per_day().await?;
                vec![format!("Average Amount Per Day: {}", v)]
            }
            MenuChoice::TopDates => {
                let dates = self.queries.top_dates_by_total().await?;
                let mut lines = vec!["Top 5 Dates with Highest Total Amount:".to_string()];
                lines.extend(dates.iter().map(|d| d.format(DAY_FORMAT).to_string()));
                lines
            }
            MenuChoice::Exit => Vec::new(),
        };
        Ok(lines)
    }

    /// One selection from the terminal. Esc / Ctrl-C count as Exit.
    fn prompt_select(&self) -> Result<Option<MenuChoice>, DomainError> {
        match Select::new("Select an option:", MenuChoice::ALL.to_vec())
            .with_page_size(MenuChoice::ALL.len())
            .prompt()
        {
            Ok(choice) => Ok(Some(choice)),
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                Ok(Some(MenuChoice::Exit))
            }
            Err(e) => Err(DomainError::Ui(e.to_string())),
        }
    }

    /// One selection from piped stdin. End of input counts as Exit.
    fn prompt_line(&self, input: &mut impl BufRead) -> Result<Option<MenuChoice>, DomainError> {
        println!("Select an option:");
        for choice in MenuChoice::ALL {
            println!("{}", choice);
        }
        let mut line = String::new();
        let read = input
            .read_line(&mut line)
            .map_err(|e| DomainError::Ui(e.to_string()))?;
        if read == 0 {
            return Ok(Some(MenuChoice::Exit));
        }
        Ok(MenuChoice::from_input(&line))
    }
}

#[async_trait]
impl InputPort for TuiInputPort {
    async fn run(&self) -> Result<(), DomainError> {
        self.log.info("Starting interaction with the user.");
        let interactive = std::io::stdin().is_terminal();
        loop {
            // The stdin lock is released before the query is awaited.
            let choice = if interactive {
                self.prompt_select()?
            } else {
                self.prompt_line(&mut std::io::stdin().lock())?
            };
            let reply = self.handle(choice).await;
            for line in &reply.lines {
                println!("{}", line);
            }
            if reply.exit {
                return Ok(());
            }
        }
    }
}
