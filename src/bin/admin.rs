//! CLI administration tool for login-portal.
//!
//! Manages accounts and sessions directly against the database, without
//! going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Create an account (prompts for the password)
//! cargo run --bin admin -- user create --username alice
//!
//! # List accounts
//! cargo run --bin admin -- user list
//!
//! # Change a password (revokes the user's sessions)
//! cargo run --bin admin -- user set-password alice
//!
//! # Lock an account by removing its password
//! cargo run --bin admin -- user clear-password alice
//!
//! # Delete expired sessions
//! cargo run --bin admin -- session purge
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` or `DB_*` components: PostgreSQL connection, see [`login_portal::config`]

use login_portal::config;
use login_portal::server::connect_pool;
use login_portal::state::AppState;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input, Password};
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing login-portal.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage user accounts
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Manage sessions
    Session {
        #[command(subcommand)]
        action: SessionAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Account management subcommands.
#[derive(Subcommand)]
enum UserAction {
    /// Create a new account
    Create {
        /// Username (prompted if omitted)
        #[arg(short, long)]
        username: Option<String>,

        /// Create the account without a password; it cannot log in until one is set
        #[arg(long)]
        no_password: bool,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List all accounts
    List,

    /// Set a new password and revoke the user's sessions
    SetPassword {
        /// Username (case-insensitive)
        username: String,
    },

    /// Remove the password, locking the account
    ClearPassword {
        /// Username (case-insensitive)
        username: String,
    },
}

/// Session management subcommands.
#[derive(Subcommand)]
enum SessionAction {
    /// Delete expired sessions
    Purge,
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    let pool = connect_pool(&config).await?;

    match cli.command {
        Commands::User { action } => {
            let state = AppState::new(Arc::new(pool), config.session_config());
            handle_user_action(action, &state).await?
        }
        Commands::Session { action } => {
            let state = AppState::new(Arc::new(pool), config.session_config());
            handle_session_action(action, &state).await?
        }
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches account management commands.
async fn handle_user_action(action: UserAction, state: &AppState) -> Result<()> {
    match action {
        UserAction::Create {
            username,
            no_password,
            yes,
        } => create_user(state, username, no_password, yes).await?,
        UserAction::List => list_users(state).await?,
        UserAction::SetPassword { username } => set_password(state, &username).await?,
        UserAction::ClearPassword { username } => clear_password(state, &username).await?,
    }

    Ok(())
}

/// Prompts for a password twice.
fn prompt_password() -> Result<String> {
    let password = Password::new()
        .with_prompt("Password")
        .with_confirmation("Repeat password", "Passwords do not match")
        .interact()?;

    Ok(password)
}

/// Creates an account with interactive prompts.
///
/// # Flow
///
/// 1. Prompt for username (or use provided)
/// 2. Prompt for password unless `--no-password`
/// 3. Confirm creation (unless `--yes` flag)
/// 4. Hash the password with argon2id and store the account
async fn create_user(
    state: &AppState,
    username: Option<String>,
    no_password: bool,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "👤 Create User".bright_blue().bold());
    println!();

    let username = match username {
        Some(u) => u,
        None => Input::new().with_prompt("Username").interact_text()?,
    };

    let password = if no_password {
        println!(
            "{}",
            "⚠️  No password: the account cannot log in until one is set".yellow()
        );
        None
    } else {
        Some(prompt_password()?)
    };

    println!();
    println!("  Username: {}", username.trim().cyan());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Create this user?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let user = state
        .auth_service
        .create_user(&username, password.as_deref())
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create user: {}", e))?;

    println!();
    println!("{}", "✅ User created successfully!".green().bold());
    println!("  ID: {}", user.id.bright_black());
    println!();

    Ok(())
}

/// Lists all accounts.
///
/// # Output Format
///
/// ```text
/// 📋 Users
///
///   ID              Username                 Created              Password
///   ───────────────────────────────────────────────────────────────────────
///   V1StGXR8_Z5jdH  alice                    2024-01-15 10:30     SET
///   3hq2Mz0Lk9aBcd  bob                      2024-01-16 14:20     NONE
/// ```
async fn list_users(state: &AppState) -> Result<()> {
    println!("{}", "📋 Users".bright_blue().bold());
    println!();

    let users = state
        .auth_service
        .list_users()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list users: {}", e))?;

    if users.is_empty() {
        println!("{}", "  No users found".yellow());
        println!();
        println!(
            "  Create one with: {} admin user create",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<15} {:<24} {:<20} {:<8}",
        "ID".bright_white().bold(),
        "Username".bright_white().bold(),
        "Created".bright_white().bold(),
        "Password".bright_white().bold()
    );
    println!("  {}", "─".repeat(71).bright_black());

    for user in &users {
        let password = if user.has_password() {
            "SET".green()
        } else {
            "NONE".red()
        };

        println!(
            "  {:<15} {:<24} {:<20} {}",
            user.id.bright_black(),
            user.username.cyan(),
            user.created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            password
        );
    }

    println!();
    println!("  Total: {}", users.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Replaces a user's password and revokes their sessions.
async fn set_password(state: &AppState, username: &str) -> Result<()> {
    println!("{}", "🔑 Set Password".bright_blue().bold());
    println!();
    println!("  Username: {}", username.cyan());
    println!();

    let password = prompt_password()?;

    state
        .auth_service
        .set_password(username, Some(&password))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to set password: {}", e))?;

    println!();
    println!("{}", "✅ Password updated, sessions revoked".green().bold());
    println!();

    Ok(())
}

/// Removes a user's password with confirmation prompt.
///
/// The account can no longer log in and its sessions are revoked.
async fn clear_password(state: &AppState, username: &str) -> Result<()> {
    println!("{}", "🔒 Clear Password".bright_blue().bold());
    println!();
    println!("  Username: {}", username.cyan());
    println!();

    let confirmed = Confirm::new()
        .with_prompt("Remove this user's password? They will not be able to log in.")
        .default(false)
        .interact()?;

    if !confirmed {
        println!("{}", "❌ Cancelled".red());
        return Ok(());
    }

    state
        .auth_service
        .set_password(username, None)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to clear password: {}", e))?;

    println!();
    println!("{}", "✅ Password removed, sessions revoked".green().bold());
    println!();

    Ok(())
}

/// Dispatches session commands.
async fn handle_session_action(action: SessionAction, state: &AppState) -> Result<()> {
    match action {
        SessionAction::Purge => {
            println!("{}", "🧹 Purging expired sessions...".bright_blue());

            let deleted = state
                .session_service
                .delete_expired_sessions()
                .await
                .map_err(|e| anyhow::anyhow!("Failed to purge sessions: {}", e))?;

            println!(
                "{} {}",
                "✅ Deleted sessions:".green().bold(),
                deleted.to_string().bright_white().bold()
            );
        }
    }

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            let users: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
                .fetch_one(pool)
                .await
                .context("Failed to count users (have migrations run?)")?;

            let active_sessions: i64 =
                sqlx::query_scalar("SELECT COUNT(*) FROM sessions WHERE expires_at > NOW()")
                    .fetch_one(pool)
                    .await?;

            println!("  PostgreSQL:      {}", version.bright_white());
            println!(
                "  Users:           {}",
                users.to_string().bright_green().bold()
            );
            println!(
                "  Active sessions: {}",
                active_sessions.to_string().bright_green().bold()
            );
            println!();
        }
    }

    Ok(())
}
