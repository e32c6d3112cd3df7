//! MediScript demo walkthrough.
//!
//! Drives the three role flows over seeded demo data and prints a
//! dashboard-style summary for each. All state is in-memory and local to
//! one run.

use std::thread;
use std::time::Duration as StdDuration;

use chrono::Utc;
use clap::{Parser, Subcommand};
use colored::*;

use mediscript_adherence::PatientChart;
use mediscript_dispensing::{VerificationDesk, SCAN_DELAY_SECS};
use mediscript_prescriptions::{PrescriptionDraft, PrescriptionRegistry};
use mediscript_shared::Frequency;

#[derive(Parser)]
#[command(name = "mediscript-demo")]
#[command(about = "Walk the MediScript e-prescription demo flows")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Doctor flow: create prescriptions and show the registry
    Doctor,
    /// Pharmacist flow: verify, scan, and dispense
    Pharmacist,
    /// Patient flow: reminders and the chart
    Patient,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Doctor => doctor_flow(),
        Commands::Pharmacist => pharmacist_flow(),
        Commands::Patient => patient_flow(),
    }
}

fn doctor_flow() {
    println!("{}", "Doctor Dashboard".bold());
    let mut registry = PrescriptionRegistry::new();
    let mut rng = rand::thread_rng();
    let now = Utc::now();

    // An incomplete draft first, to show the validation error surface.
    let incomplete = PrescriptionDraft {
        patient_name: "John Doe".to_string(),
        ..Default::default()
    };
    if let Err(err) = registry.create(incomplete, "Dr. Smith", now, &mut rng) {
        println!("{} {}", "error:".red().bold(), err);
    }

    let drafts = [
        PrescriptionDraft {
            patient_name: "John Doe".to_string(),
            patient_email: "john@example.com".to_string(),
            medication: "Amoxicillin".to_string(),
            dosage: "500mg".to_string(),
            frequency: Some(Frequency::TwiceDaily),
            duration: "7 days".to_string(),
            instructions: "Take with food".to_string(),
        },
        PrescriptionDraft {
            patient_name: "Jane Smith".to_string(),
            patient_email: "jane@example.com".to_string(),
            medication: "Ibuprofen".to_string(),
            dosage: "400mg".to_string(),
            frequency: Some(Frequency::AsNeeded),
            duration: "As needed".to_string(),
            instructions: String::new(),
        },
    ];
    for draft in drafts {
        match registry.create(draft, "Dr. Smith", Utc::now(), &mut rng) {
            Ok(rx) => println!(
                "{} {} — {} {} (QR {}, OTP {})",
                "created".green(),
                rx.patient_name,
                rx.medication,
                rx.dosage,
                rx.qr_code,
                rx.otp.to_string().bold(),
            ),
            Err(err) => println!("{} {}", "error:".red().bold(), err),
        }
    }

    let stats = registry.stats(Utc::now());
    println!(
        "\n{} total={} active patients={} today={}",
        "stats:".bold(),
        stats.total,
        stats.active_patients,
        stats.created_today
    );
}

fn pharmacist_flow() {
    println!("{}", "Pharmacist Dashboard".bold());
    let mut desk = VerificationDesk::new();

    match desk.verify_code("A3K9XZ", Utc::now()) {
        Ok(rx) => println!(
            "{} {} — {}",
            "verified".green(),
            rx.patient_name,
            rx.medication
        ),
        Err(err) => println!("{} {}", "error:".red().bold(), err),
    }

    println!("scanning QR code...");
    desk.start_scan(Utc::now()).expect("scanner is idle");
    // The scan resolves after a fixed delay; wait it out.
    thread::sleep(StdDuration::from_secs(SCAN_DELAY_SECS as u64) + StdDuration::from_millis(50));
    match desk.poll_scan(Utc::now()) {
        Ok(Some(rx)) => println!(
            "{} {} — {}",
            "scanned".green(),
            rx.patient_name,
            rx.medication
        ),
        Ok(None) => println!("scan still running"),
        Err(err) => println!("{} {}", "error:".red().bold(), err),
    }

    let first_id = desk.iter().next().map(|r| r.id);
    if let Some(id) = first_id {
        match desk.dispense(&id) {
            Ok(rx) => println!("{} {} — {}", "dispensed".green(), rx.patient_name, rx.medication),
            Err(err) => println!("{} {}", "error:".red().bold(), err),
        }
    }

    let stats = desk.stats(Utc::now());
    println!(
        "\n{} verified today={} dispensed today={} unique patients={}",
        "stats:".bold(),
        stats.verified_today,
        stats.dispensed_today,
        stats.unique_patients
    );
}

fn patient_flow() {
    println!("{}", "Patient Dashboard".bold());
    let mut chart = PatientChart::demo(Utc::now());

    for rx in chart.active_prescriptions() {
        println!(
            "{} {} — {} ({}), prescribed by {}",
            "active".green(),
            rx.medication,
            rx.dosage,
            rx.frequency.label(),
            rx.doctor_name
        );
    }
    for reminder in chart.reminders() {
        let mark = if reminder.taken { "taken".green() } else { "pending".yellow() };
        println!("  {} {} at {}", mark, reminder.medication, reminder.time);
    }

    let before = chart.stats();
    println!(
        "\n{} active={} pending={} taken today={}",
        "stats:".bold(),
        before.active_prescriptions,
        before.pending_reminders,
        before.taken_today
    );

    let pending_id = chart.pending_reminders().next().map(|r| r.id);
    if let Some(id) = pending_id {
        let reminder = chart.mark_taken(&id).expect("reminder exists");
        println!(
            "{} {} at {}",
            "marked taken".green(),
            reminder.medication,
            reminder.time
        );
    }

    let after = chart.stats();
    println!(
        "{} active={} pending={} taken today={}",
        "stats:".bold(),
        after.active_prescriptions,
        after.pending_reminders,
        after.taken_today
    );
}
