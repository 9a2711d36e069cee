use anyhow::Context;
use clap::{Parser, Subcommand};
use dialoguer::{Input, Password};
use dotenvy::dotenv;
use rentwise_auth::{Role, TokenKeys};
use rentwise_cli::{create_admin, issue_token};
use rentwise_config::{DatabaseConfig, JwtConfig};
use rentwise_db::{PgStore, init_db_pool};

#[derive(Parser)]
#[command(name = "rentwise-cli")]
#[command(about = "Rentwise CLI - Administrative tools for Rentwise", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new administrator account
    CreateAdmin {
        /// Display name of the admin
        #[arg(short = 'n', long)]
        name: Option<String>,

        /// Email address
        #[arg(short = 'e', long)]
        email: Option<String>,

        /// Password (will be prompted securely if not provided)
        #[arg(short = 'p', long)]
        password: Option<String>,
    },
    /// Print a signed token for manual API testing
    IssueToken {
        #[arg(long)]
        user_id: String,

        #[arg(long)]
        email: String,

        /// One of owner, renter, broker, admin
        #[arg(long, default_value = "renter")]
        role: Role,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::CreateAdmin {
            name,
            email,
            password,
        } => handle_create_admin(name, email, password).await,
        Commands::IssueToken {
            user_id,
            email,
            role,
        } => handle_issue_token(&user_id, &email, role),
    }
}

async fn handle_create_admin(
    name: Option<String>,
    email: Option<String>,
    password: Option<String>,
) -> anyhow::Result<()> {
    let name = match name {
        Some(name) => name,
        None => Input::new()
            .with_prompt("Name")
            .interact_text()
            .context("Failed to read name")?,
    };

    let email = match email {
        Some(email) => email,
        None => Input::new()
            .with_prompt("Email address")
            .interact_text()
            .context("Failed to read email")?,
    };

    let password = match password {
        Some(password) => password,
        None => Password::new()
            .with_prompt("Password")
            .with_confirmation("Confirm password", "Passwords don't match")
            .interact()
            .context("Failed to read password")?,
    };

    let config = DatabaseConfig::from_env()?;
    let pool = init_db_pool(&config)
        .await
        .context("Failed to connect to database")?;
    let store = PgStore::new(pool);

    let user = create_admin(&store, &name, &email, &password)
        .await
        .context("Error creating admin")?;

    println!("\n✅ Admin created successfully!");
    println!("   Id: {}", user.id);
    println!("   Email: {}", user.email);
    println!("   Name: {}", user.name);
    Ok(())
}

fn handle_issue_token(user_id: &str, email: &str, role: Role) -> anyhow::Result<()> {
    let keys = TokenKeys::new(&JwtConfig::from_env()?);
    let token = issue_token(&keys, user_id, email, role)?;
    println!("{token}");
    Ok(())
}
