//! Bank Account
//!
//! A terminal stand-in for the account UI. Each line is a command tag
//! (`openAccount`, `deposit`, `withdraw`, `requestLoan`, `payLoan`,
//! `closeAccount`), or `undo`, `redo`, `quit`.
//!
//! Key concepts:
//! - The pure machine computes every transition
//! - The session holds state between commands, like a UI between renders
//! - Rejections reach the user through the environment (here: log warnings)
//!
//! Run with: cargo run --example bank_account [config.json]
//! Set RUST_LOG=bankstate=debug to see every state change.

use bankstate::config::AccountConfig;
use bankstate::core::AccountMachine;
use bankstate::session::{AccountSession, LogNotifier};
use std::io::{self, BufRead, Write};
use stillwater::effect::Effect;
use tracing_subscriber::EnvFilter;

fn load_config(path: &str) -> Result<AccountConfig, String> {
    let json =
        std::fs::read_to_string(path).map_err(|err| format!("Cannot read {path}: {err}"))?;
    AccountConfig::from_json(&json).map_err(|err| format!("{path}: {err}"))
}

fn render(session: &AccountSession) {
    let state = session.current_state();
    println!("  Balance: {}", state.balance);
    println!("  Loan:    {}", state.loan);

    let enabled: Vec<&str> = session
        .enabled_commands()
        .iter()
        .map(|c| c.tag())
        .collect();
    println!("  Available: {}", enabled.join(", "));
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => match load_config(&path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("✗ {err}");
                std::process::exit(1);
            }
        },
        None => AccountConfig::default(),
    };

    println!("=== Bank Account ===");
    println!(
        "Opening deposit {}, deposit {}, withdraw {}, loan {}\n",
        config.opening_deposit, config.deposit_amount, config.withdraw_amount, config.loan_amount
    );

    let mut session = AccountSession::new(AccountMachine::new(config));
    render(&session);

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush().unwrap();

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).unwrap() == 0 {
            break;
        }

        match line.trim() {
            "" => continue,
            "quit" | "exit" => break,
            "undo" => {
                if !session.undo() {
                    println!("  Nothing to undo");
                }
            }
            "redo" => {
                if !session.redo() {
                    println!("  Nothing to redo");
                }
            }
            tag => match session.dispatch_tag(tag).run(&LogNotifier).await {
                Ok(dispatch) => {
                    if let Some(rejection) = dispatch.outcome.rejection() {
                        println!("  ✗ {rejection}");
                    }
                    if let Err(err) = session.commit(dispatch) {
                        println!("  ✗ {err}");
                    }
                }
                Err(err) => println!("  ✗ {err}"),
            },
        }

        render(&session);
    }

    println!("\n=== Goodbye ===");
}
