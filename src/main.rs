mod logging;

use clap::{Parser, Subcommand};
use iban_codec::generator::generate_ibans;
use iban_codec::models::IbanFields;
use iban_codec::preflight::{self, IssueLevel, PreflightIssue};
use iban_codec::{to_paper_format, CountryLayout, CountryRegistry, Iban};
use rand::Rng;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "iban-codec")]
#[command(about = "IBAN decomposition, composition and formal validation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    Inspect(InspectArgs),
    Validate(ValidateArgs),
    Compose(ComposeArgs),
    Paper(PaperArgs),
    Generate(GenerateArgs),
    Preflight(PreflightArgs),
    Countries,
}

#[derive(Parser)]
struct InspectArgs {
    iban: String,
}

#[derive(Parser)]
struct ValidateArgs {
    #[arg(required = true)]
    ibans: Vec<String>,
}

#[derive(Parser)]
struct ComposeArgs {
    #[arg(long)]
    country: String,
    #[arg(long, default_value = "")]
    bank: String,
    #[arg(long, default_value = "")]
    branch: String,
    #[arg(long)]
    account: String,
    #[arg(long)]
    national_check: Option<String>,
}

#[derive(Parser)]
struct PaperArgs {
    iban: String,
}

#[derive(Parser)]
struct GenerateArgs {
    #[arg(long)]
    country: String,
    #[arg(long, default_value_t = 10)]
    count: usize,
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Parser)]
struct PreflightArgs {
    #[arg(long, default_value = "data/ibans.csv")]
    input: PathBuf,
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    logging::init_logging("iban-codec", &logging::LogConfig::from_env())?;
    let cli = Cli::parse();
    let registry = CountryRegistry::standard();
    match cli.command {
        Command::Inspect(args) => run_inspect(registry, args),
        Command::Validate(args) => run_validate(registry, args),
        Command::Compose(args) => run_compose(registry, args),
        Command::Paper(args) => run_paper(registry, args),
        Command::Generate(args) => run_generate(registry, args),
        Command::Preflight(args) => run_preflight(registry, args),
        Command::Countries => run_countries(registry),
    }
}

fn run_inspect(registry: &CountryRegistry, args: InspectArgs) -> Result<(), String> {
    let iban = Iban::parse(registry, &args.iban).map_err(|err| err.to_string())?;
    emit_info_line(&format!(
        "Country: {} ({}) currency={} sepa={}",
        iban.layout().country_code(),
        iban.country_name(),
        iban.currency_code(),
        iban.is_sepa()
    ));
    emit_info_line(&format!("Paper format: {}", iban.paper_format().trim_end()));
    emit_info_line(&format!(
        "Fields: check_digit={} national_check={} bank_code={} branch_code={} account_number={}",
        iban.check_digit(),
        iban.national_check(),
        iban.bank_code(),
        iban.branch_code(),
        iban.account_number()
    ));
    emit_info_line(&format!(
        "Complete: {} (layout length {})",
        iban.is_complete(),
        iban.layout().total_length()
    ));
    let violations = iban.violations();
    if violations.is_empty() {
        emit_info_line("Formal validation: OK");
    }
    for violation in &violations {
        emit_info_line(&format!("Formal validation: {violation}"));
    }
    Ok(())
}

fn run_validate(registry: &CountryRegistry, args: ValidateArgs) -> Result<(), String> {
    let mut invalid = 0usize;
    for raw in &args.ibans {
        let message = match Iban::parse(registry, raw) {
            Ok(iban) => iban.validate_formal_message(),
            Err(err) => err.to_string(),
        };
        if message.is_empty() {
            emit_info_line(&format!("{}: valid", raw.trim()));
        } else {
            invalid += 1;
            emit_info_line(&format!("{}: {}", raw.trim(), message));
        }
    }
    if invalid > 0 {
        return Err(format!("{} of {} IBAN(s) invalid", invalid, args.ibans.len()));
    }
    Ok(())
}

fn run_compose(registry: &CountryRegistry, args: ComposeArgs) -> Result<(), String> {
    let layout = lookup_layout(registry, &args.country)?;
    let fields = layout
        .compose(
            args.national_check.as_deref(),
            &args.bank.trim().to_uppercase(),
            &args.branch.trim().to_uppercase(),
            &args.account.trim().to_uppercase(),
        )
        .map_err(|err| err.to_string())?;
    println!("{}", fields.full_iban);
    emit_info_line(&format!("Paper format: {}", fields.paper_format));
    Ok(())
}

fn run_paper(registry: &CountryRegistry, args: PaperArgs) -> Result<(), String> {
    let iban = Iban::parse(registry, &args.iban).map_err(|err| err.to_string())?;
    println!("{}", to_paper_format(&iban.to_string()));
    Ok(())
}

fn run_generate(registry: &CountryRegistry, args: GenerateArgs) -> Result<(), String> {
    let layout = lookup_layout(registry, &args.country)?;
    let seed = args.seed.unwrap_or_else(random_seed);

    let start = Instant::now();
    let generated = generate_ibans(layout, args.count, seed).map_err(|err| err.to_string())?;
    let elapsed = start.elapsed();

    match &args.output {
        Some(path) => {
            write_csv(path, &generated)?;
            emit_info_line(&format!(
                "generated {} {} IBANs, seed {}, output {}",
                generated.len(),
                layout.country_code(),
                seed,
                path.display()
            ));
        }
        None => {
            for fields in &generated {
                println!("{}", fields.full_iban);
            }
        }
    }
    emit_info_line(&format!("Generation time: {} ms", elapsed.as_millis()));
    Ok(())
}

fn run_preflight(registry: &CountryRegistry, args: PreflightArgs) -> Result<(), String> {
    let report = preflight::preflight_csv(registry, &args.input)?;

    emit_info_line(&format!(
        "Preflight: records={} valid={}",
        report.total_records, report.valid_records
    ));
    emit_info_line(&format!(
        "Preflight issues: errors={} warnings={}",
        report.error_count(),
        report.warning_count()
    ));
    emit_issue_summary("error", &report.issues, IssueLevel::Error);
    emit_issue_summary("warning", &report.issues, IssueLevel::Warning);

    if let Some(output) = &args.output {
        preflight::write_results(output, &report.results)?;
        emit_info_line(&format!("Preflight output: {}", output.display()));
    }

    if report.error_count() > 0 {
        return Err(format!(
            "preflight failed with {} error(s)",
            report.error_count()
        ));
    }
    Ok(())
}

fn run_countries(registry: &CountryRegistry) -> Result<(), String> {
    for layout in registry.layouts() {
        println!(
            "{} {:<2} {:<3} {:<5} {}",
            layout.country_code(),
            layout.total_length(),
            layout.currency_code(),
            if layout.is_sepa() { "SEPA" } else { "-" },
            layout.country_name()
        );
    }
    Ok(())
}

fn lookup_layout<'a>(
    registry: &'a CountryRegistry,
    country: &str,
) -> Result<&'a CountryLayout, String> {
    registry
        .lookup(country.trim())
        .ok_or_else(|| format!("unsupported country code: {}", country.trim()))
}

fn emit_issue_summary(label: &str, issues: &[PreflightIssue], level: IssueLevel) {
    let mut counts = std::collections::HashMap::new();
    for issue in issues.iter().filter(|issue| issue.level == level) {
        *counts.entry(issue.message.as_str()).or_insert(0usize) += 1;
    }
    if counts.is_empty() {
        return;
    }

    let mut items: Vec<(&str, usize)> = counts.into_iter().collect();
    items.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    let max_items = 5usize;
    for (message, count) in items.iter().take(max_items) {
        emit_info_line(&format!("Preflight {}s: {} = {}", label, message, count));
    }
    if items.len() > max_items {
        emit_info_line(&format!(
            "Preflight {}s: {} additional issue types not shown",
            label,
            items.len() - max_items
        ));
    }
}

fn random_seed() -> u64 {
    let mut rng = rand::rngs::OsRng;
    rng.gen()
}

fn write_csv(output: &Path, records: &[IbanFields]) -> Result<(), String> {
    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|err| err.to_string())?;
        }
    }
    let mut writer = csv::Writer::from_path(output).map_err(|err| err.to_string())?;
    for record in records {
        writer.serialize(record).map_err(|err| err.to_string())?;
    }
    writer.flush().map_err(|err| err.to_string())
}

fn emit_info_line(message: &str) {
    if log::log_enabled!(log::Level::Info) {
        log::info!("{}", message);
    } else {
        println!("{message}");
    }
}
