//! Interactive numbered menu
//!
//! A small state machine: show the menu, collect the chosen action's
//! arguments one prompt at a time, run it, then wait for ENTER before showing
//! the menu again. Input and output are generic so the loop can be driven
//! from tests. Transactions added from the menu stay queryable until exit.

use std::io::{BufRead, Write};
use std::str::FromStr;

use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};
use tracing::{info, warn};

use crate::config::Settings;
use crate::display::format_transaction_details;
use crate::error::{AnalyzerError, AnalyzerResult};
use crate::storage::TransactionStore;

use super::args::{parse_amount, parse_date, DateComponents};
use super::query::Operation;
use super::transaction::AddArgs;

/// A numbered menu entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    ShowAll,
    UniqueTypes,
    TotalAmount,
    TotalByDate,
    ByType,
    DateRange,
    ByMerchant,
    Average,
    AmountRange,
    TotalDebit,
    TopMonth,
    TopDebitMonth,
    DominantType,
    BeforeDate,
    FindById,
    Descriptions,
    AddTransaction,
    Exit,
}

impl MenuAction {
    /// Menu entries in display order; entry `n` is at index `n - 1`
    pub const ALL: [MenuAction; 18] = [
        Self::ShowAll,
        Self::UniqueTypes,
        Self::TotalAmount,
        Self::TotalByDate,
        Self::ByType,
        Self::DateRange,
        Self::ByMerchant,
        Self::Average,
        Self::AmountRange,
        Self::TotalDebit,
        Self::TopMonth,
        Self::TopDebitMonth,
        Self::DominantType,
        Self::BeforeDate,
        Self::FindById,
        Self::Descriptions,
        Self::AddTransaction,
        Self::Exit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::ShowAll => "Show all transactions",
            Self::UniqueTypes => "List unique transaction types",
            Self::TotalAmount => "Calculate the total amount",
            Self::TotalByDate => "Calculate the total amount for a date",
            Self::ByType => "Show transactions of a type",
            Self::DateRange => "Show transactions in a date range",
            Self::ByMerchant => "Show transactions with a merchant",
            Self::Average => "Calculate the average amount",
            Self::AmountRange => "Show transactions in an amount range",
            Self::TotalDebit => "Calculate the total debit amount",
            Self::TopMonth => "Find the month with the most transactions",
            Self::TopDebitMonth => "Find the month with the most debit transactions",
            Self::DominantType => "Find which transaction type is most common",
            Self::BeforeDate => "Show transactions before a date",
            Self::FindById => "Find a transaction by ID",
            Self::Descriptions => "List all descriptions",
            Self::AddTransaction => "Add a transaction (this session only)",
            Self::Exit => "Exit",
        }
    }

    /// Prompts for the arguments this action needs, in order
    pub fn prompts(&self) -> &'static [&'static str] {
        match self {
            Self::TotalByDate => &["Enter a date (YYYY-MM-DD): "],
            Self::ByType => &["Enter the transaction type (debit or credit): "],
            Self::DateRange => &[
                "Enter the start date (YYYY-MM-DD): ",
                "Enter the end date (YYYY-MM-DD): ",
            ],
            Self::ByMerchant => &["Enter the merchant name: "],
            Self::AmountRange => &[
                "Enter the minimum amount: ",
                "Enter the maximum amount: ",
            ],
            Self::BeforeDate => &["Enter a date (YYYY-MM-DD): "],
            Self::FindById => &["Enter the transaction ID: "],
            Self::AddTransaction => &[
                "Enter the transaction ID (blank to generate one): ",
                "Enter the date (YYYY-MM-DD): ",
                "Enter the amount: ",
                "Enter the transaction type (debit or credit): ",
                "Enter the description: ",
                "Enter the merchant name: ",
            ],
            _ => &[],
        }
    }

    /// Decode the collected text arguments into a read-only operation
    pub fn to_operation(&self, args: &[String]) -> AnalyzerResult<Operation> {
        let arg = |i: usize| args.get(i).map(String::as_str).unwrap_or("");

        let op = match self {
            Self::ShowAll => Operation::ShowAll,
            Self::UniqueTypes => Operation::UniqueTypes,
            Self::TotalAmount => Operation::TotalAmount,
            Self::TotalByDate => Operation::TotalByDate(DateComponents::parse(arg(0))),
            Self::ByType => Operation::ByType(arg(0).to_string()),
            Self::DateRange => Operation::DateRange {
                start: parse_date(arg(0))?,
                end: parse_date(arg(1))?,
            },
            Self::ByMerchant => Operation::ByMerchant(arg(0).to_string()),
            Self::Average => Operation::Average,
            Self::AmountRange => Operation::AmountRange {
                min: parse_amount(arg(0))?,
                max: parse_amount(arg(1))?,
            },
            Self::TotalDebit => Operation::TotalDebit,
            Self::TopMonth => Operation::TopMonth,
            Self::TopDebitMonth => Operation::TopDebitMonth,
            Self::DominantType => Operation::DominantType,
            Self::BeforeDate => Operation::BeforeDate(parse_date(arg(0))?),
            Self::FindById => Operation::FindById(arg(0).to_string()),
            Self::Descriptions => Operation::Descriptions,
            Self::AddTransaction | Self::Exit => {
                return Err(AnalyzerError::invalid_argument(format!(
                    "'{}' is not a query",
                    self.label()
                )))
            }
        };
        Ok(op)
    }
}

impl FromStr for MenuAction {
    type Err = AnalyzerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or_else(|| {
                AnalyzerError::invalid_argument(format!("'{}' is not a menu number", s.trim()))
            })
    }
}

#[derive(Debug)]
enum MenuState {
    Menu,
    /// Collecting arguments; the next prompt is `prompts()[args.len()]`
    AwaitingArg(MenuAction, Vec<String>),
    Executing(MenuAction, Vec<String>),
    Paused,
    Done,
}

/// Interactive menu over a transaction store
pub struct Menu<'a, R, W> {
    store: &'a mut TransactionStore,
    settings: &'a Settings,
    input: R,
    output: W,
    clear_screen: bool,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(
        store: &'a mut TransactionStore,
        settings: &'a Settings,
        input: R,
        output: W,
    ) -> Self {
        Self {
            store,
            settings,
            input,
            output,
            clear_screen: false,
        }
    }

    /// Clear the terminal before each menu render
    pub fn clear_screen(mut self, enabled: bool) -> Self {
        self.clear_screen = enabled;
        self
    }

    /// Run until the user picks Exit or input ends
    pub fn run(&mut self) -> AnalyzerResult<()> {
        let mut state = MenuState::Menu;

        loop {
            state = match state {
                MenuState::Menu => {
                    self.show_menu()?;
                    match self.prompt("Enter action number: ")? {
                        None => MenuState::Done,
                        Some(choice) => match choice.parse::<MenuAction>() {
                            Ok(MenuAction::Exit) => {
                                writeln!(self.output, "Exiting.")?;
                                MenuState::Done
                            }
                            Ok(action) => MenuState::AwaitingArg(action, Vec::new()),
                            Err(e) => {
                                warn!("{}", e);
                                writeln!(
                                    self.output,
                                    "Invalid input. Please enter an action number."
                                )?;
                                MenuState::Paused
                            }
                        },
                    }
                }
                MenuState::AwaitingArg(action, mut args) => {
                    match action.prompts().get(args.len()) {
                        None => MenuState::Executing(action, args),
                        Some(text) => match self.prompt(text)? {
                            None => MenuState::Done,
                            Some(value) => {
                                args.push(value);
                                MenuState::AwaitingArg(action, args)
                            }
                        },
                    }
                }
                MenuState::Executing(action, args) => {
                    match self.execute(action, args) {
                        Ok(text) => write!(self.output, "{}", text)?,
                        Err(e) => {
                            warn!("{}", e);
                            writeln!(self.output, "Error: {}", e)?;
                        }
                    }
                    MenuState::Paused
                }
                MenuState::Paused => match self.prompt("Press ENTER to continue...")? {
                    None => MenuState::Done,
                    Some(_) => MenuState::Menu,
                },
                MenuState::Done => break,
            };
        }

        self.output.flush()?;
        Ok(())
    }

    fn execute(&mut self, action: MenuAction, args: Vec<String>) -> AnalyzerResult<String> {
        if action != MenuAction::AddTransaction {
            return action
                .to_operation(&args)
                .and_then(|op| op.execute(&*self.store, self.settings));
        }

        let mut args = args.into_iter();
        let mut next = || args.next().unwrap_or_default();
        let id = next();
        let add = AddArgs {
            id: (!id.trim().is_empty()).then(|| id.trim().to_string()),
            date: next(),
            amount: next(),
            kind: next(),
            description: next(),
            merchant: next(),
        };

        let txn = add.into_transaction()?;
        info!(id = %txn.id, "adding transaction from menu");
        let details = format_transaction_details(&txn, self.settings);
        self.store.add(txn);
        Ok(format!("Added transaction:\n{}", details))
    }

    fn show_menu(&mut self) -> AnalyzerResult<()> {
        if self.clear_screen {
            execute!(self.output, Clear(ClearType::All), MoveTo(0, 0))?;
        } else {
            writeln!(self.output)?;
        }
        writeln!(self.output, "Choose an action:")?;
        for (i, action) in MenuAction::ALL.iter().enumerate() {
            writeln!(self.output, "{:>4}. {}", i + 1, action.label())?;
        }
        Ok(())
    }

    /// Print a prompt and read one line; `None` at end of input
    fn prompt(&mut self, text: &str) -> AnalyzerResult<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, Transaction};
    use chrono::NaiveDate;
    use std::io::Cursor;

    fn store() -> TransactionStore {
        TransactionStore::new(vec![
            Transaction::with_details(
                "1",
                NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
                Money::from_cents(10000),
                "debit",
                "x",
                "A",
            ),
            Transaction::with_details(
                "2",
                NaiveDate::from_ymd_opt(2024, 2, 10).unwrap(),
                Money::from_cents(5000),
                "credit",
                "y",
                "B",
            ),
        ])
    }

    fn drive(store: &mut TransactionStore, input: &str) -> String {
        let settings = Settings::default();
        let mut output = Vec::new();
        Menu::new(store, &settings, Cursor::new(input), &mut output)
            .run()
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_menu_action_numbers() {
        assert_eq!("1".parse::<MenuAction>().unwrap(), MenuAction::ShowAll);
        assert_eq!("16".parse::<MenuAction>().unwrap(), MenuAction::Descriptions);
        assert_eq!("17".parse::<MenuAction>().unwrap(), MenuAction::AddTransaction);
        assert_eq!(" 18 ".parse::<MenuAction>().unwrap(), MenuAction::Exit);
        assert!("0".parse::<MenuAction>().is_err());
        assert!("19".parse::<MenuAction>().is_err());
        assert!("abc".parse::<MenuAction>().is_err());
    }

    #[test]
    fn test_prompt_counts() {
        assert!(MenuAction::TotalAmount.prompts().is_empty());
        assert_eq!(MenuAction::FindById.prompts().len(), 1);
        assert_eq!(MenuAction::DateRange.prompts().len(), 2);
        assert_eq!(MenuAction::AmountRange.prompts().len(), 2);
        assert_eq!(MenuAction::AddTransaction.prompts().len(), 6);
    }

    #[test]
    fn test_exit_immediately() {
        let out = drive(&mut store(), "18\n");
        assert!(out.contains("Choose an action:"));
        assert!(out.contains("18. Exit"));
        assert!(out.ends_with("Exiting.\n"));
    }

    #[test]
    fn test_total_then_exit() {
        let out = drive(&mut store(), "3\n\n18\n");
        assert!(out.contains("Total amount: $150.00"));
        assert!(out.contains("Press ENTER to continue..."));
        assert!(out.contains("Exiting."));
    }

    #[test]
    fn test_two_argument_action() {
        let out = drive(&mut store(), "6\n2024-01-01\n2024-01-31\n\n18\n");
        assert!(out.contains("Enter the start date"));
        assert!(out.contains("Enter the end date"));
        assert!(out.contains("Transactions from 2024-01-01 to 2024-01-31:"));
        assert!(out.contains("1 transaction(s)"));
    }

    #[test]
    fn test_find_missing_id() {
        let out = drive(&mut store(), "15\n9\n\n18\n");
        assert!(out.contains("Transaction with ID 9 not found."));
    }

    #[test]
    fn test_added_transaction_is_queryable() {
        let mut store = store();
        let out = drive(
            &mut store,
            "17\nT-3\n2024-03-01\n20.50\ndebit\nLunch\nCafe\n\n15\nT-3\n\n3\n\n18\n",
        );
        assert!(out.contains("Added transaction:"));
        assert!(out.contains("Transaction with ID T-3:"));
        assert!(out.contains("Total amount: $170.50"));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_add_generates_id_when_blank() {
        let mut store = store();
        drive(&mut store, "17\n\n2024-03-01\n5\ncredit\n\n\n\n18\n");
        assert_eq!(store.len(), 3);
        assert_eq!(store.all()[2].id.as_str().len(), 32);
    }

    #[test]
    fn test_add_with_bad_amount_leaves_store_unchanged() {
        let mut store = store();
        let out = drive(&mut store, "17\n\n2024-03-01\nlots\ndebit\n\n\n\n18\n");
        assert!(out.contains("Error: Invalid argument: Invalid amount 'lots'"));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_invalid_choice_and_argument() {
        let out = drive(&mut store(), "42\n\n14\nnext tuesday\n\n18\n");
        assert!(out.contains("Invalid input. Please enter an action number."));
        assert!(out.contains("Error: Invalid argument: Invalid date 'next tuesday'"));
        assert!(out.contains("Exiting."));
    }

    #[test]
    fn test_huge_amount_is_an_error_not_a_crash() {
        let out = drive(&mut store(), "9\n0\n99999999999999999\n\n18\n");
        assert!(out.contains("Error: Invalid argument: Invalid amount"));
    }

    #[test]
    fn test_average_on_empty_store() {
        let out = drive(&mut TransactionStore::default(), "8\n\n18\n");
        assert!(out.contains("Error: No data"));
    }

    #[test]
    fn test_end_of_input_stops_loop() {
        let out = drive(&mut store(), "6\n2024-01-01\n");
        assert!(!out.contains("Transactions from"));
        assert!(!out.contains("Exiting."));
    }

    #[test]
    fn test_clear_screen_before_menu() {
        let mut store = store();
        let settings = Settings::default();
        let mut output = Vec::new();
        Menu::new(&mut store, &settings, Cursor::new("18\n"), &mut output)
            .clear_screen(true)
            .run()
            .unwrap();
        let out = String::from_utf8(output).unwrap();
        assert!(out.starts_with("\x1b[2J"));
        assert!(out.contains("Choose an action:"));
    }

    #[test]
    fn test_no_escape_codes_by_default() {
        let out = drive(&mut store(), "18\n");
        assert!(!out.contains('\x1b'));
    }
}
