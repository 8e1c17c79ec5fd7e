//! Exercise runners: seed data, call core services, print results.

use chrono::{Days, Local, Months, NaiveDate};
use recordbook_core::model::transaction::format_amount;
use recordbook_core::{
    generate_report, Account, BankTransferProcessor, ClinicService, CryptoWalletProcessor,
    ElectronicItem, FinanceService, GradingError, GroceryItem, InventoryItem, InventoryService,
    Keyed, LoadOutcome, MobileMoneyProcessor, Patient, Prescription, Selection, SelectionError,
    StockItem, StockRepository, Transaction, Warehouse,
};
use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process::ExitCode;

type RunResult = Result<ExitCode, Box<dyn Error>>;

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn days_from_today(days: i64) -> NaiveDate {
    let base = today();
    let shifted = if days >= 0 {
        base.checked_add_days(Days::new(days.unsigned_abs()))
    } else {
        base.checked_sub_days(Days::new(days.unsigned_abs()))
    };
    shifted.unwrap_or(base)
}

pub fn warehouse() -> RunResult {
    let mut warehouse = Warehouse::new();
    let seed = [
        ElectronicItem::new(1, "Laptop", 10, "Dell", 24),
        ElectronicItem::new(2, "Smartphone", 15, "Samsung", 12),
        ElectronicItem::new(3, "Tablet", 8, "Apple", 18),
    ];
    for item in seed {
        warehouse.electronics.add_item(item)?;
    }
    let half_year = today()
        .checked_add_months(Months::new(6))
        .unwrap_or_else(today);
    warehouse
        .groceries
        .add_item(GroceryItem::new(101, "Rice", 50, half_year))?;
    warehouse
        .groceries
        .add_item(GroceryItem::new(102, "Milk", 30, days_from_today(7)))?;
    warehouse
        .groceries
        .add_item(GroceryItem::new(103, "Bread", 25, days_from_today(3)))?;

    println!("=== All Grocery Items ===");
    print_stock(&warehouse.groceries, |item| {
        format!("  Expiry Date: {}", item.expiry_date.format("%Y-%m-%d"))
    });
    println!();
    println!("=== All Electronic Items ===");
    print_stock(&warehouse.electronics, |item| {
        format!(
            "  Brand: {}, Warranty: {} months",
            item.brand, item.warranty_months
        )
    });
    println!();

    println!("=== Testing Error Handling ===");
    println!("1. Duplicate item:");
    report(
        warehouse
            .electronics
            .add_item(ElectronicItem::new(1, "Duplicate Laptop", 5, "HP", 12)),
        |_| "Added duplicate laptop".to_string(),
    );
    println!("2. Remove missing item:");
    report(warehouse.electronics.remove_item(999), |_| {
        "Removed item with ID 999.".to_string()
    });
    println!("3. Negative quantity:");
    report(warehouse.groceries.update_quantity(101, -5), |item| {
        format!("Updated quantity for item {} to {}.", item.id, item.quantity)
    });
    println!("4. Get missing item:");
    report(warehouse.electronics.get_item(999), |item| {
        format!("Found {}", item.name)
    });
    println!();

    println!("=== Successful Operations ===");
    report(warehouse.electronics.increase_stock(1, 5), |item| {
        format!("Successfully increased stock for item {} to {} units.", item.id, item.quantity)
    });
    report(warehouse.groceries.update_quantity(101, 60), |item| {
        format!("Successfully updated quantity for item {} to {}.", item.id, item.quantity)
    });
    report(warehouse.electronics.remove_item(3), |_| {
        "Successfully removed item with ID 3.".to_string()
    });

    Ok(ExitCode::SUCCESS)
}

fn print_stock<T, F>(repo: &StockRepository<T>, details: F)
where
    T: StockItem,
    F: Fn(&T) -> String,
{
    let items = repo.items();
    if items.is_empty() {
        println!("No items found.");
        return;
    }
    for item in &items {
        println!(
            "ID: {}, Name: {}, Quantity: {}",
            item.key(),
            item.name(),
            item.quantity()
        );
        println!("{}", details(item));
    }
}

fn report<T, E: std::fmt::Display>(result: Result<T, E>, on_ok: impl FnOnce(T) -> String) {
    match result {
        Ok(value) => println!("{}", on_ok(value)),
        Err(err) => println!("Error: {err}"),
    }
}

pub fn inventory(file: &Path) -> RunResult {
    let now = Local::now().naive_local();
    let mut session = InventoryService::new(file);
    session.add(InventoryItem::new(1, "Laptop", 10, now));
    session.add(InventoryItem::new(2, "Smartphone", 25, now));
    session.add(InventoryItem::new(3, "Monitor", 15, now));
    match session.save() {
        Ok(()) => println!("Data saved successfully to {}", file.display()),
        Err(err) => println!("Error saving data: {err}"),
    }

    println!("\n--- New Session ---");
    let mut next_session = InventoryService::new(file);
    match next_session.load() {
        Ok(LoadOutcome::Loaded(_)) => println!("Data loaded successfully from {}", file.display()),
        Ok(LoadOutcome::NoExistingData) => println!("No existing data file found."),
        Err(err) => println!("Error loading data: {err}"),
    }
    for item in next_session.items_in_id_range(1, 3) {
        println!(
            "\nID: {}, Name: {}, Quantity: {}, Date Added: {}",
            item.id,
            item.name,
            item.quantity,
            item.date_added.format("%Y-%m-%d %H:%M:%S")
        );
    }
    Ok(ExitCode::SUCCESS)
}

pub fn grades(input: &Path, output: &Path) -> RunResult {
    println!("Reading students from {}...", input.display());
    match generate_report(input, output) {
        Ok(students) => {
            println!("Successfully read {} students from file.", students.len());
            println!("Grade report written to {}", output.display());
            println!("\n=== Grade Report ===");
            for student in &students {
                println!("{}", student.report_line());
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(GradingError::Parse(err)) => {
            println!("Error: {err}");
            Ok(ExitCode::FAILURE)
        }
        Err(err) => Err(err.into()),
    }
}

pub fn clinic() -> RunResult {
    let mut clinic = ClinicService::new();
    clinic.add_patient(Patient::new(1, "Ama Montford", 25, "Female"));
    clinic.add_patient(Patient::new(2, "Christian Agyapong", 38, "Male"));
    clinic.add_patient(Patient::new(3, "Nhyira Yawson", 28, "Female"));
    let seed = [
        (1, 1, "Aspirin", -30),
        (2, 1, "Ibuprofen", -15),
        (3, 2, "Amoxicillin", -20),
        (4, 2, "Vitamin C", -10),
        (5, 3, "Nugel", -5),
    ];
    for (id, patient_id, medication, offset) in seed {
        clinic.add_prescription(Prescription::new(
            id,
            patient_id,
            medication,
            days_from_today(offset),
        ));
    }

    println!("=== All Patients ===");
    for patient in clinic.patients() {
        println!(
            "ID: {}, Name: {}, Age: {}, Gender: {}",
            patient.id, patient.name, patient.age, patient.gender
        );
    }
    println!();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("Enter a Patient ID to view prescriptions (or 'q' to quit): ");
        io::stdout().flush()?;
        let input = match lines.next() {
            Some(line) => line?,
            None => String::new(),
        };

        match clinic.select_patient(&input) {
            Ok(Selection::Quit) => {
                println!("Exiting...");
                return Ok(ExitCode::SUCCESS);
            }
            Ok(Selection::Found {
                patient,
                prescriptions,
            }) => {
                println!("=== Prescriptions for {} (ID: {}) ===", patient.name, patient.id);
                if prescriptions.is_empty() {
                    println!("No prescriptions found for this patient.");
                }
                for prescription in prescriptions {
                    println!(
                        "Prescription ID: {}, Medication: {}, Date Issued: {}",
                        prescription.id,
                        prescription.medication_name,
                        prescription.date_issued.format("%Y-%m-%d")
                    );
                }
                println!();
                return Ok(ExitCode::SUCCESS);
            }
            Err(err) => {
                println!("Error: {err}");
                if let SelectionError::UnknownPatient { available, .. } = &err {
                    println!("Available Patient IDs:");
                    for (id, name) in available {
                        println!("  - {id}: {name}");
                    }
                }
                println!();
            }
        }
    }
}

pub fn finance() -> RunResult {
    let mut service = FinanceService::new(Account::savings("SAV001", 100_000));
    let transactions = [
        Transaction::new(1, days_from_today(-2), 15_000, "Groceries"),
        Transaction::new(2, days_from_today(-1), 20_000, "Utilities"),
        Transaction::new(3, today(), 7_550, "Entertainment"),
    ];
    let [groceries, utilities, entertainment] = transactions;

    let receipts = [
        service.record(groceries, &MobileMoneyProcessor),
        service.record(utilities, &BankTransferProcessor),
        service.record(entertainment, &CryptoWalletProcessor),
    ];
    for receipt in &receipts {
        println!("{}", receipt.confirmation);
    }
    for receipt in &receipts {
        match &receipt.debit {
            Ok(balance) => println!("Updated balance: {}", format_amount(*balance)),
            Err(err) => println!("Error: {err}"),
        }
    }
    println!("Recorded {} transactions.", service.transactions().len());
    Ok(ExitCode::SUCCESS)
}
