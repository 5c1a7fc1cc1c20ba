use anyhow::Result;
use std::env;
use std::io::{self, Write};

use recordbook::{finance, grading, healthcare, inventory_logger, logging, warehouse, AppConfig};

const PROGRAMS: [&str; 5] = ["finance", "healthcare", "inventory", "grading", "warehouse"];

fn main() -> Result<()> {
    let config = AppConfig::load()?;
    logging::init_tracing(&config.log_filter);

    let args: Vec<String> = env::args().collect();
    let Some(command) = args.get(1).map(String::as_str) else {
        print_usage();
        std::process::exit(2);
    };

    let programs: Vec<&str> = match command {
        "all" => PROGRAMS.to_vec(),
        name if PROGRAMS.contains(&name) => vec![name],
        _ => {
            print_usage();
            std::process::exit(2);
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for program in programs {
        if command == "all" {
            writeln!(out, "\n━━━━━━━━━━━━━━━━ {} ━━━━━━━━━━━━━━━━", program)?;
        }
        run_program(program, &config, args.get(2).map(String::as_str), &mut out)?;
    }
    out.flush()?;

    Ok(())
}

fn run_program(program: &str, config: &AppConfig, extra: Option<&str>, out: &mut impl Write) -> Result<()> {
    match program {
        "finance" => finance::run(config.opening_balance, &config.currency_symbol, out),
        "healthcare" => {
            let stdin = io::stdin();
            healthcare::run(extra, &mut stdin.lock(), out)
        }
        "inventory" => inventory_logger::run(&config.inventory_path(), out),
        "grading" => grading::run(&config.students_path(), &config.report_path(), out),
        "warehouse" => warehouse::run(out),
        other => anyhow::bail!("unknown program: {}", other),
    }
}

fn print_usage() {
    eprintln!("recordbook {}", recordbook::VERSION);
    eprintln!();
    eprintln!("Usage: recordbook <program> [patient-id]");
    eprintln!();
    eprintln!("Programs:");
    eprintln!("  finance      apply three transactions to a savings account");
    eprintln!("  healthcare   list patients and look up prescriptions (reads an id from stdin)");
    eprintln!("  inventory    save the inventory snapshot and read it back");
    eprintln!("  grading      turn the students file into a graded report");
    eprintln!("  warehouse    stock electronics and groceries, exercise failure paths");
    eprintln!("  all          run every program in turn");
    eprintln!();
    eprintln!("Configuration: ./recordbook.toml or $RECORDBOOK_CONFIG;");
    eprintln!("overrides: RECORDBOOK_DATA_DIR, RECORDBOOK_CURRENCY, RECORDBOOK_LOG");
}
