use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use biblio_admin::auth::controller as auth;
use biblio_admin::books::domain::StockAdjustment;
use biblio_admin::catalog::command::add_book_cmd::AddBookCommandRequest;
use biblio_admin::catalog::command::update_book_cmd::UpdateBookCommandRequest;
use biblio_admin::catalog::controller as catalog;
use biblio_admin::core::controller::{AppState, CliResult};
use biblio_admin::core::domain::Configuration;
use biblio_admin::dashboard::controller as dashboard;
use biblio_admin::loans::command::edit_loan_cmd::EditLoanCommandRequest;
use biblio_admin::loans::command::register_loan_cmd::RegisterLoanCommandRequest;
use biblio_admin::loans::controller as loans;
use biblio_admin::patrons::command::add_user_cmd::AddUserCommandRequest;
use biblio_admin::patrons::command::update_user_cmd::UpdateUserCommandRequest;
use biblio_admin::patrons::controller as patrons;
use biblio_admin::utils::date::parse_date;
use biblio_admin::utils::http::setup_tracing;

#[derive(Debug, Parser)]
#[command(name = "biblio", about = "Administration of the library catalog, users and loans")]
struct Cli {
    /// Base url of the catalog service
    #[arg(long, global = true)]
    catalog_url: Option<String>,

    /// Base url of the user service
    #[arg(long, global = true)]
    users_url: Option<String>,

    /// Directory holding the loan history and the session
    #[arg(long, global = true)]
    data_dir: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Authenticates against the user service and keeps the token
    Login { matricula: String, password: String },
    /// Forgets the saved token
    Logout,
    /// Shows the logged in account
    Me,
    #[command(subcommand)]
    Books(BookCommands),
    #[command(subcommand)]
    Users(UserCommands),
    #[command(subcommand)]
    Loans(LoanCommands),
    /// Counters and recent activity
    Dashboard,
}

#[derive(Debug, Subcommand)]
enum BookCommands {
    List {
        #[arg(long)]
        filter: Option<String>,
    },
    /// Search done by the catalog service
    Search { term: String },
    Add {
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        author: String,
        #[arg(long, default_value = "")]
        isbn: String,
        #[arg(long)]
        year: Option<i32>,
        #[arg(long)]
        quantity: Option<i64>,
    },
    Update {
        id: i64,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        author: Option<String>,
        #[arg(long)]
        isbn: Option<String>,
        #[arg(long)]
        year: Option<i32>,
        #[arg(long)]
        quantity: Option<i64>,
    },
    Remove { id: i64 },
    /// Imports a title by ISBN through the catalog service
    Import { isbn: String },
    /// Moves the stock kept by the catalog service by one copy
    Stock { id: i64, op: StockOp },
}

#[derive(Debug, Clone, ValueEnum)]
enum StockOp {
    Inc,
    Dec,
}

impl From<StockOp> for StockAdjustment {
    fn from(op: StockOp) -> Self {
        match op {
            StockOp::Inc => StockAdjustment::Increment,
            StockOp::Dec => StockAdjustment::Decrement,
        }
    }
}

#[derive(Debug, Args)]
struct UserFields {
    #[arg(long)]
    email: Option<String>,
    #[arg(long, value_parser = cli_date)]
    birth_date: Option<NaiveDate>,
    #[arg(long)]
    status: Option<String>,
    #[arg(long)]
    role: Option<String>,
}

#[derive(Debug, Subcommand)]
enum UserCommands {
    List {
        #[arg(long)]
        filter: Option<String>,
    },
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        cpf: String,
        #[command(flatten)]
        fields: UserFields,
        #[arg(long)]
        password: Option<String>,
    },
    Update {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        cpf: Option<String>,
        #[command(flatten)]
        fields: UserFields,
    },
    Remove { id: i64 },
}

#[derive(Debug, Args)]
struct LoanFields {
    /// Loan date, yyyy-mm-dd
    #[arg(long)]
    date: Option<String>,
    /// Expected return date, yyyy-mm-dd
    #[arg(long)]
    due: Option<String>,
    #[arg(long)]
    status: Option<String>,
}

#[derive(Debug, Subcommand)]
enum LoanCommands {
    List {
        #[arg(long)]
        filter: Option<String>,
    },
    Register {
        #[arg(long)]
        user: i64,
        #[arg(long)]
        book: i64,
        #[command(flatten)]
        fields: LoanFields,
    },
    Edit {
        id: i64,
        #[arg(long)]
        user: Option<i64>,
        #[arg(long)]
        book: Option<i64>,
        #[command(flatten)]
        fields: LoanFields,
    },
    Return { id: i64 },
    Remove { id: i64 },
    /// Catalog with the copies left once open loans are counted
    Stock {
        #[arg(long)]
        ignore: Option<i64>,
    },
}

fn cli_date(value: &str) -> Result<NaiveDate, String> {
    parse_date(value).map_err(|err| err.message().to_string())
}

async fn run_books(state: &AppState, cmd: BookCommands) -> CliResult {
    match cmd {
        BookCommands::List { filter } => catalog::list_books(state, filter).await,
        BookCommands::Search { term } => catalog::search_books(state, &term).await,
        BookCommands::Add { title, author, isbn, year, quantity } => {
            let mut req = AddBookCommandRequest::new(&title, &author, &isbn);
            req.published_year = year;
            req.quantity = quantity;
            catalog::add_book(state, req).await
        }
        BookCommands::Update { id, title, author, isbn, year, quantity } => {
            let req = UpdateBookCommandRequest {
                book_id: id,
                title,
                author,
                isbn,
                published_year: year,
                quantity,
            };
            catalog::update_book(state, req).await
        }
        BookCommands::Remove { id } => catalog::remove_book(state, id).await,
        BookCommands::Import { isbn } => catalog::import_book(state, &isbn).await,
        BookCommands::Stock { id, op } => catalog::adjust_stock(state, id, op.into()).await,
    }
}

async fn run_users(state: &AppState, cmd: UserCommands) -> CliResult {
    match cmd {
        UserCommands::List { filter } => patrons::list_users(state, filter).await,
        UserCommands::Add { name, cpf, fields, password } => {
            let mut req = AddUserCommandRequest::new(&name, &cpf);
            req.email = fields.email;
            req.birth_date = fields.birth_date;
            req.status = fields.status;
            req.role = fields.role;
            req.password = password;
            patrons::add_user(state, req).await
        }
        UserCommands::Update { id, name, cpf, fields } => {
            let req = UpdateUserCommandRequest {
                user_id: id,
                name,
                cpf,
                email: fields.email,
                birth_date: fields.birth_date,
                status: fields.status,
                role: fields.role,
            };
            patrons::update_user(state, req).await
        }
        UserCommands::Remove { id } => patrons::remove_user(state, id).await,
    }
}

async fn run_loans(state: &AppState, cmd: LoanCommands) -> CliResult {
    match cmd {
        LoanCommands::List { filter } => loans::list_loans(state, filter).await,
        LoanCommands::Register { user, book, fields } => {
            let req = RegisterLoanCommandRequest {
                user_id: Some(user),
                book_id: Some(book),
                loan_date: fields.date,
                due_date: fields.due,
                status: fields.status,
            };
            loans::register_loan(state, req).await
        }
        LoanCommands::Edit { id, user, book, fields } => {
            let req = EditLoanCommandRequest {
                loan_id: id,
                user_id: user,
                book_id: book,
                loan_date: fields.date,
                due_date: fields.due,
                status: fields.status,
            };
            loans::edit_loan(state, req).await
        }
        LoanCommands::Return { id } => loans::return_loan(state, id).await,
        LoanCommands::Remove { id } => loans::remove_loan(state, id).await,
        LoanCommands::Stock { ignore } => loans::books_stock(state, ignore).await,
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let mut config = Configuration::from_env().with_urls(cli.catalog_url, cli.users_url);
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir.into();
    }
    setup_tracing(&config.log_level, config.log_json);
    let state = AppState::new(config);

    let res = match cli.command {
        Commands::Login { matricula, password } => auth::login(&state, &matricula, &password).await,
        Commands::Logout => auth::logout(&state).await,
        Commands::Me => auth::me(&state).await,
        Commands::Books(cmd) => run_books(&state, cmd).await,
        Commands::Users(cmd) => run_users(&state, cmd).await,
        Commands::Loans(cmd) => run_loans(&state, cmd).await,
        Commands::Dashboard => dashboard::dashboard(&state).await,
    };

    match res {
        Ok(out) => println!("{}", out),
        Err(err) => {
            eprintln!("error: {}", err.message);
            std::process::exit(err.code);
        }
    }
}
