use anyhow::{bail, Context, Result};
use chrono::{Datelike, NaiveDate, TimeZone, Utc};
use clap::{Parser, Subcommand};

use fintrack::app::App;
use fintrack::config::paths::FinTrackPaths;
use fintrack::models::{days_in_month, Bucket, BudgetRule, Money, TransactionKind};
use fintrack::services::{metrics, tips};
use fintrack::storage::Store;

#[derive(Parser)]
#[command(
    name = "fintrack",
    version,
    about = "Personal finance tracker with budget rules, savings goals, and bill reminders",
    long_about = "fintrack tracks income and expenses against a needs/wants/savings \
                  budget rule, follows progress toward savings goals, and reminds \
                  you of upcoming bills."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Transaction(TransactionCommands),

    /// Savings goal commands
    #[command(subcommand)]
    Goal(GoalCommands),

    /// Recurring bill commands
    #[command(subcommand)]
    Bill(BillCommands),

    /// Category management commands
    #[command(subcommand)]
    Category(CategoryCommands),

    /// Show budget targets, actuals, and the month-end projection
    Budget,

    /// Select the active budget rule from the catalog
    Rule {
        /// Rule name prefix (e.g., "50/30/20"); omit to list the catalog
        name: Option<String>,
    },

    /// Notification commands
    #[command(subcommand, alias = "ntf")]
    Notifications(NotificationCommands),

    /// Per-category spending report for the current month
    Report,

    /// Export the full snapshot to a file
    Export {
        /// Destination path
        file: String,
    },

    /// Import a snapshot file, replacing all current data
    Import {
        /// Source path
        file: String,
    },

    /// Erase all data and start fresh
    Erase {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// Get a savings tip for a goal
    Tip {
        /// Goal name
        goal: String,
    },

    /// Show or change settings
    Settings {
        /// Currency code (e.g., USD, EUR)
        #[arg(long)]
        currency: Option<String>,
        /// Language tag (e.g., en-US)
        #[arg(long)]
        language: Option<String>,
    },

    /// Show current configuration and paths
    Config,
}

#[derive(Subcommand)]
enum TransactionCommands {
    /// Add a new transaction
    Add {
        /// "income" or "expense"
        kind: String,
        /// Amount (e.g., "42.50")
        amount: String,
        /// Category name
        #[arg(short, long)]
        category: Option<String>,
        /// Transaction date (YYYY-MM-DD, default today)
        #[arg(short, long)]
        date: Option<String>,
        /// Description
        #[arg(long, default_value = "")]
        description: String,
    },
    /// List transactions, newest first
    List {
        /// Number of transactions to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
    /// Delete a transaction by id
    Delete {
        /// Transaction id
        id: String,
    },
}

#[derive(Subcommand)]
enum GoalCommands {
    /// Add a savings goal
    Add {
        /// Goal name
        name: String,
        /// Target amount
        target: String,
        /// Deadline (YYYY-MM-DD)
        deadline: String,
    },
    /// List goals with progress
    List,
    /// Delete a goal by id
    Delete {
        /// Goal id
        id: String,
    },
}

#[derive(Subcommand)]
enum BillCommands {
    /// Add a recurring monthly bill
    Add {
        /// Bill name
        name: String,
        /// Amount due each month
        amount: String,
        /// Day of month (1-31)
        day: u32,
    },
    /// List bills
    List,
    /// Delete a bill by id
    Delete {
        /// Bill id
        id: String,
    },
}

#[derive(Subcommand)]
enum CategoryCommands {
    /// List categories
    List,
    /// Add a category
    Add {
        /// Category name
        name: String,
        /// Bucket: needs, wants or savings
        bucket: String,
        /// Icon name
        #[arg(long, default_value = "tag")]
        icon: String,
    },
    /// Delete a category by id
    Delete {
        /// Category id
        id: String,
    },
}

#[derive(Subcommand)]
enum NotificationCommands {
    /// List notifications, newest first
    List {
        /// Only show unread notifications
        #[arg(long)]
        unread: bool,
    },
    /// Mark all notifications as read
    Read,
}

fn main() -> Result<()> {
    fintrack::init_tracing();
    let cli = Cli::parse();

    let paths = FinTrackPaths::new()?;
    paths.ensure_directories()?;
    let store = Store::new(paths.data_dir());
    let mut app = App::open(store);

    match cli.command {
        Some(Commands::Transaction(cmd)) => handle_transaction(&mut app, cmd)?,
        Some(Commands::Goal(cmd)) => handle_goal(&mut app, cmd)?,
        Some(Commands::Bill(cmd)) => handle_bill(&mut app, cmd)?,
        Some(Commands::Category(cmd)) => handle_category(&mut app, cmd)?,
        Some(Commands::Budget) => show_budget(&app),
        Some(Commands::Rule { name }) => handle_rule(&mut app, name)?,
        Some(Commands::Notifications(cmd)) => handle_notifications(&mut app, cmd),
        Some(Commands::Report) => show_report(&app),
        Some(Commands::Export { file }) => {
            let mut out = std::fs::File::create(&file)
                .with_context(|| format!("cannot create {}", file))?;
            app.export_to(&mut out)?;
            println!("Exported snapshot to {}", file);
        }
        Some(Commands::Import { file }) => {
            let raw = std::fs::read_to_string(&file)
                .with_context(|| format!("cannot read {}", file))?;
            app.import(&raw)?;
            println!("Imported snapshot from {}", file);
        }
        Some(Commands::Erase { yes }) => {
            if !yes {
                bail!("refusing to erase without --yes");
            }
            app.erase_all()?;
            println!("All data erased.");
        }
        Some(Commands::Tip { goal }) => {
            let found = app
                .state()
                .goals
                .iter()
                .find(|g| g.name.eq_ignore_ascii_case(&goal))
                .cloned();
            match found {
                Some(g) => println!("{}", tips::default_provider().tip(&g)),
                None => bail!("Goal not found: {}", goal),
            }
        }
        Some(Commands::Settings { currency, language }) => {
            if currency.is_none() && language.is_none() {
                let s = &app.state().settings;
                println!("Currency: {}", s.currency);
                println!("Language: {}", s.language);
            } else {
                let mut settings = app.state().settings.clone();
                if let Some(c) = currency {
                    settings.currency = c;
                }
                if let Some(l) = language {
                    settings.language = l;
                }
                app.update_settings(settings);
                println!("Settings updated.");
            }
        }
        Some(Commands::Config) => {
            println!("fintrack Configuration");
            println!("======================");
            println!("Data directory: {}", paths.data_dir().display());
            println!("Active rule:    {}", app.state().budget_rule);
            println!("Currency:       {}", app.state().settings.currency);
        }
        None => {
            println!("fintrack - personal finance tracker");
            println!();
            println!("Run 'fintrack --help' for usage information.");
            let unread = app.state().unread_count();
            if unread > 0 {
                println!("You have {} unread notification(s).", unread);
            }
        }
    }

    Ok(())
}

fn parse_kind(s: &str) -> Result<TransactionKind> {
    match s.to_lowercase().as_str() {
        "income" | "in" => Ok(TransactionKind::Income),
        "expense" | "out" => Ok(TransactionKind::Expense),
        other => bail!("unknown transaction kind '{}', expected income or expense", other),
    }
}

fn parse_bucket(s: &str) -> Result<Bucket> {
    match s.to_lowercase().as_str() {
        "needs" => Ok(Bucket::Needs),
        "wants" => Ok(Bucket::Wants),
        "savings" => Ok(Bucket::Savings),
        other => bail!("unknown bucket '{}', expected needs, wants or savings", other),
    }
}

fn parse_money(s: &str) -> Result<Money> {
    Money::parse(s).map_err(|e| anyhow::anyhow!("{}", e))
}

fn parse_date_or_today(s: Option<&str>) -> Result<chrono::DateTime<Utc>> {
    match s {
        None => Ok(Utc::now()),
        Some(raw) => {
            let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .with_context(|| format!("invalid date '{}', expected YYYY-MM-DD", raw))?;
            let naive = date.and_hms_opt(12, 0, 0).context("invalid time of day")?;
            Ok(Utc.from_utc_datetime(&naive))
        }
    }
}

fn handle_transaction(app: &mut App, cmd: TransactionCommands) -> Result<()> {
    match cmd {
        TransactionCommands::Add {
            kind,
            amount,
            category,
            date,
            description,
        } => {
            let kind = parse_kind(&kind)?;
            let amount = parse_money(&amount)?;
            let date = parse_date_or_today(date.as_deref())?;
            let category_id = match category {
                None => None,
                Some(name) => Some(
                    app.state()
                        .categories
                        .iter()
                        .find(|c| c.name.eq_ignore_ascii_case(&name))
                        .map(|c| c.id)
                        .with_context(|| format!("Category not found: {}", name))?,
                ),
            };
            let id = app.add_transaction(kind, amount, category_id, date, description)?;
            println!("Added transaction {}", id);
        }
        TransactionCommands::List { limit } => {
            let symbol = app.state().settings.currency_symbol().to_string();
            for txn in app.state().transactions.iter().take(limit) {
                println!(
                    "{}  {}  {:>12}  {:<16}  {}",
                    txn.id,
                    txn.date.format("%Y-%m-%d"),
                    txn.amount.format_with_symbol(&symbol),
                    app.state().category_name(txn.category_id),
                    txn.description
                );
            }
        }
        TransactionCommands::Delete { id } => {
            let id = id.parse().context("invalid transaction id")?;
            app.delete_transaction(id)?;
            println!("Deleted transaction.");
        }
    }
    Ok(())
}

fn handle_goal(app: &mut App, cmd: GoalCommands) -> Result<()> {
    match cmd {
        GoalCommands::Add {
            name,
            target,
            deadline,
        } => {
            let target = parse_money(&target)?;
            let deadline = NaiveDate::parse_from_str(&deadline, "%Y-%m-%d")
                .context("invalid deadline, expected YYYY-MM-DD")?;
            let id = app.add_goal(name, target, deadline)?;
            println!("Added goal {}", id);
        }
        GoalCommands::List => {
            for goal in &app.state().goals {
                println!("{}  {}  (by {})", goal.id, goal, goal.deadline);
            }
        }
        GoalCommands::Delete { id } => {
            let id = id.parse().context("invalid goal id")?;
            app.delete_goal(id)?;
            println!("Deleted goal.");
        }
    }
    Ok(())
}

fn handle_bill(app: &mut App, cmd: BillCommands) -> Result<()> {
    match cmd {
        BillCommands::Add { name, amount, day } => {
            let amount = parse_money(&amount)?;
            let id = app.add_bill(name, amount, day)?;
            println!("Added bill {}", id);
        }
        BillCommands::List => {
            for bill in &app.state().bills {
                println!("{}  {}", bill.id, bill);
            }
        }
        BillCommands::Delete { id } => {
            let id = id.parse().context("invalid bill id")?;
            app.delete_bill(id)?;
            println!("Deleted bill.");
        }
    }
    Ok(())
}

fn handle_category(app: &mut App, cmd: CategoryCommands) -> Result<()> {
    match cmd {
        CategoryCommands::List => {
            for cat in &app.state().categories {
                println!("{}  {:<16}  {}", cat.id, cat.name, cat.bucket);
            }
        }
        CategoryCommands::Add { name, bucket, icon } => {
            let bucket = parse_bucket(&bucket)?;
            let id = app.add_category(name, icon, bucket)?;
            println!("Added category {}", id);
        }
        CategoryCommands::Delete { id } => {
            let id = id.parse().context("invalid category id")?;
            app.delete_category(id)?;
            println!("Deleted category.");
        }
    }
    Ok(())
}

fn handle_rule(app: &mut App, name: Option<String>) -> Result<()> {
    match name {
        None => {
            for rule in BudgetRule::catalog() {
                let marker = if rule == app.state().budget_rule {
                    "*"
                } else {
                    " "
                };
                println!("{} {}", marker, rule);
            }
        }
        Some(name) => {
            let rule = BudgetRule::from_catalog(&name)
                .with_context(|| format!("no catalog rule matching '{}'", name))?;
            println!("Active rule: {}", rule);
            app.set_budget_rule(rule);
        }
    }
    Ok(())
}

fn handle_notifications(app: &mut App, cmd: NotificationCommands) {
    match cmd {
        NotificationCommands::List { unread } => {
            for n in app
                .state()
                .notifications
                .iter()
                .filter(|n| !unread || !n.is_read)
            {
                let marker = if n.is_read { " " } else { "*" };
                println!(
                    "{} {}  [{}]  {}",
                    marker,
                    n.timestamp.format("%Y-%m-%d %H:%M"),
                    n.kind,
                    n.message
                );
            }
        }
        NotificationCommands::Read => {
            app.mark_all_read();
            println!("All notifications marked read.");
        }
    }
}

fn show_budget(app: &App) {
    let state = app.state();
    let symbol = state.settings.currency_symbol();
    let today = Utc::now().date_naive();
    let (year, month) = (today.year(), today.month());

    let income = metrics::total_income(&state.transactions, year, month);
    let targets = metrics::budget_targets(income, &state.budget_rule);
    let spend = metrics::bucket_spend(&state.transactions, &state.bucket_map(), year, month);

    println!("Budget for {:04}-{:02} ({})", year, month, state.budget_rule.name);
    println!("Income this month: {}", income.format_with_symbol(symbol));
    println!();
    println!("{:<8}  {:>12}  {:>12}", "Bucket", "Spent", "Budget");
    for bucket in [Bucket::Needs, Bucket::Wants, Bucket::Savings] {
        println!(
            "{:<8}  {:>12}  {:>12}",
            bucket.label(),
            spend.get(bucket).format_with_symbol(symbol),
            targets.get(bucket).format_with_symbol(symbol),
        );
    }
    if !spend.uncategorized.is_zero() {
        println!(
            "{:<8}  {:>12}",
            "Other",
            spend.uncategorized.format_with_symbol(symbol)
        );
    }

    let elapsed = today.day();
    let total_days = days_in_month(year, month);
    match metrics::month_end_projection(spend.total(), elapsed, total_days) {
        Some(projected) => println!(
            "\nProjected spend by month end: {}",
            projected.format_with_symbol(symbol)
        ),
        None => println!("\nNo projection available."),
    }

    println!("Balance: {}", metrics::balance(&state.transactions).format_with_symbol(symbol));
}

fn show_report(app: &App) {
    let state = app.state();
    let symbol = state.settings.currency_symbol();
    let today = Utc::now().date_naive();
    let (year, month) = (today.year(), today.month());

    let totals = metrics::expense_by_category(
        &state.transactions,
        &state.bucket_map(),
        year,
        month,
    );
    let mut rows: Vec<_> = totals.into_iter().collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1));

    println!("Spending by category, {:04}-{:02}", year, month);
    for (category, total) in rows {
        println!(
            "{:<20}  {:>12}",
            state.category_name(category),
            total.format_with_symbol(symbol)
        );
    }
}
