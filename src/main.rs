// Only compile UI module when TUI feature is enabled
#[cfg(feature = "tui")]
mod ui;

use anyhow::Result;
use std::env;

use numerology::{
    Calculator, CalculatorConfig, CompatibilityReport, InputValidator, Reading,
    ReadingCache,
};

fn main() -> Result<()> {
    let mut args: Vec<String> = env::args().skip(1).collect();
    let json = take_flag(&mut args, "--json");

    let config = CalculatorConfig::load()?;
    let calculator = Calculator::with_cache(ReadingCache::new(config.cache_capacity));
    let validator = InputValidator::new(&config);

    match args.first().map(String::as_str) {
        Some("reading") => run_reading(&args[1..], &validator, &calculator, json),
        Some("match") => run_match(&args[1..], &validator, &calculator, json),
        Some(other) => {
            eprintln!("❌ Unknown command: {}", other);
            print_usage();
            std::process::exit(2);
        }
        // UI mode (default)
        None => run_ui_mode(validator, calculator),
    }
}

fn take_flag(args: &mut Vec<String>, flag: &str) -> bool {
    let before = args.len();
    args.retain(|a| a != flag);
    args.len() != before
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("   numerology                                   interactive UI");
    eprintln!("   numerology reading <NAME> <YYYY-MM-DD> [--json]");
    eprintln!("   numerology match <YYYY-MM-DD> <YYYY-MM-DD> [--json]");
}

fn fail_validation(errors: &[numerology::ValidationError]) -> ! {
    for error in errors {
        eprintln!("⚠️  {}", error);
    }
    std::process::exit(1);
}

fn run_reading(
    args: &[String],
    validator: &InputValidator,
    calculator: &Calculator,
    json: bool,
) -> Result<()> {
    let [name, birthdate] = args else {
        print_usage();
        std::process::exit(2);
    };

    let (name, birthdate) = validator
        .person(name, birthdate)
        .unwrap_or_else(|errors| fail_validation(&errors));

    let reading = Reading::compute(calculator, &name, birthdate);

    if json {
        println!("{}", serde_json::to_string_pretty(&reading)?);
        return Ok(());
    }

    println!("🔮 Numerology Reading: {} ({})", reading.name, reading.birthdate);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    for (label, value) in reading.rows() {
        println!("   {:<20} {}", label, value);
    }

    Ok(())
}

fn run_match(
    args: &[String],
    validator: &InputValidator,
    calculator: &Calculator,
    json: bool,
) -> Result<()> {
    let [first, second] = args else {
        print_usage();
        std::process::exit(2);
    };

    let (first, second) = validator
        .pair(first, second)
        .unwrap_or_else(|errors| fail_validation(&errors));

    let report = CompatibilityReport::compute(calculator, first, second);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("💞 Compatibility: {} × {}", report.first_birthdate, report.second_birthdate);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    for (label, value) in report.rows() {
        println!("   {:<20} {}", label, value);
    }

    Ok(())
}

#[cfg(feature = "tui")]
fn run_ui_mode(validator: InputValidator, calculator: Calculator) -> Result<()> {
    println!("🖥️  Loading Numerology Calculator UI...\n");

    let mut app = ui::App::new(validator, calculator);
    ui::run_ui(&mut app)?;

    println!("\n✅ UI closed successfully");

    Ok(())
}

#[cfg(not(feature = "tui"))]
fn run_ui_mode(_validator: InputValidator, _calculator: Calculator) -> Result<()> {
    eprintln!("❌ TUI mode not available!");
    eprintln!("   Rebuild with: cargo build --features tui");
    eprintln!("   Or use: numerology reading <NAME> <YYYY-MM-DD>");
    std::process::exit(1);
}
