use std::error::Error;

use console::style;
use inquire::{Password, PasswordDisplayMode, Select, Text};
use secrecy::SecretString;

use pwd_meter::{
    CheckError, MAX_SCORE, PasswordDiary, Strength, Verdict, check_password_strength, generate,
};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    log::info!("starting password meter session");

    println!("🔐 Password Strength Meter");

    // One diary per session, handed to whichever action needs it
    let mut diary = PasswordDiary::new();

    loop {
        let options = vec![
            "🔍  Check password strength",
            "🔑  Generate a strong password",
            "💾  Save a password",
            "📒  View password diary",
            "❌  Exit",
        ];

        let selection = Select::new("Choose an option:", options)
            .with_help_message("Use arrow keys to navigate, Enter to select.")
            .prompt()?;

        match selection {
            "🔍  Check password strength" => {
                let password = Password::new("Enter your password:")
                    .with_display_mode(PasswordDisplayMode::Hidden)
                    .without_confirmation()
                    .prompt()?;
                check_strength(&SecretString::new(password.into()));
            }
            "🔑  Generate a strong password" => {
                let length: usize = Text::new("Password length:")
                    .with_default("12")
                    .prompt()
                    .and_then(|s| {
                        s.parse()
                            .map_err(|_| inquire::InquireError::Custom("Invalid number".into()))
                    })?;

                let suggested = generate(length);
                println!("🔑 Suggested Password: {suggested}");
            }
            "💾  Save a password" => {
                let account = Text::new("Enter account name:").prompt()?;
                let password = Password::new("Enter your password:")
                    .with_display_mode(PasswordDisplayMode::Hidden)
                    .without_confirmation()
                    .prompt()?;

                diary.save(&account, &password);
                log::debug!("saved diary entry for account '{account}'");
                println!(
                    "{}",
                    style(format!("✅ Password for {account} saved successfully!")).green()
                );
            }
            "📒  View password diary" => {
                if diary.is_empty() {
                    println!("No passwords saved yet.");
                } else {
                    println!("\n📒 Saved Passwords");
                    for entry in diary.list_all() {
                        println!("{}: {}", style(&entry.account).bold(), entry.password);
                    }
                    println!();
                }
            }
            "❌  Exit" => {
                log::info!("session ended with {} diary entries", diary.len());
                println!("👋 Goodbye!");
                break;
            }
            _ => {}
        }
    }

    Ok(())
}

fn check_strength(password: &SecretString) {
    match check_password_strength(password) {
        Err(CheckError::NoInput) => {
            println!("{}", style("Please enter a password to check.").yellow());
        }
        Ok(Verdict::TooCommon) => {
            println!(
                "{}",
                style("❌ This password is too common. Please choose a more secure one.").red()
            );
        }
        Ok(Verdict::Scored(report)) => {
            println!("Score: {}/{}", report.score, MAX_SCORE);
            match report.strength() {
                Strength::Strong => {
                    println!("{}", style("✅ Strong Password!").green());
                }
                Strength::Moderate => {
                    println!(
                        "{}",
                        style("⚠️ Moderate Password - Consider adding more security features.")
                            .yellow()
                    );
                }
                Strength::Weak => {
                    println!(
                        "{}",
                        style("❌ Weak Password - Improve it using the suggestions below.").red()
                    );
                    for tip in &report.feedback {
                        println!("- {tip}");
                    }
                }
            }
        }
    }
}
