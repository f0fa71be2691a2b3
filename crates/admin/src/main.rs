//! `vendora-admin` -- terminal front end for the supplier admin screen.
//!
//! Runs one controller action per invocation against the dashboard
//! backend and prints the result: the supplier table for `list`, the
//! server's confirmation message for mutations, or the field errors
//! that blocked a submit.
//!
//! # Environment variables
//!
//! | Variable               | Required | Default | Description                          |
//! |------------------------|----------|---------|--------------------------------------|
//! | `VENDORA_API_URL`      | yes      | --      | Backend base URL, e.g. `http://localhost:3000` |
//! | `VENDORA_API_TOKEN`    | yes      | --      | Static credential for the `authorization` header |
//! | `REQUEST_TIMEOUT_SECS` | no       | `30`    | HTTP request timeout                 |
//!
//! # Usage
//!
//! ```text
//! vendora-admin list
//! vendora-admin create <first> <last> <email> <nic> <company> <phone> <category>
//! vendora-admin update <id> <first> <last> <email> <nic> <company> <phone> <category>
//! vendora-admin delete <id>
//! vendora-admin delete-all
//! ```

use std::process::ExitCode;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vendora_client::config::DashboardConfig;
use vendora_client::controller::{SubmitError, SupplierFormController};
use vendora_core::supplier::Supplier;

const USAGE: &str = "usage: vendora-admin <list | create <7 fields> | update <id> <7 fields> | delete <id> | delete-all>";

/// Generic user-facing failure line; details go to the tracing log.
const GENERIC_FAILURE: &str = "Something went wrong. Try again!";

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vendora_admin=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let base_url = std::env::var("VENDORA_API_URL").unwrap_or_else(|_| {
        tracing::error!("VENDORA_API_URL environment variable is required");
        std::process::exit(1);
    });

    let auth_token = std::env::var("VENDORA_API_TOKEN").unwrap_or_else(|_| {
        tracing::error!("VENDORA_API_TOKEN environment variable is required");
        std::process::exit(1);
    });

    let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DashboardConfig::DEFAULT_TIMEOUT_SECS);

    let config = DashboardConfig {
        base_url,
        auth_token,
        request_timeout_secs,
    };
    let mut controller = SupplierFormController::new(&config);

    let args: Vec<String> = std::env::args().skip(1).collect();
    run(&mut controller, &args).await
}

async fn run(controller: &mut SupplierFormController, args: &[String]) -> ExitCode {
    match args.first().map(String::as_str) {
        Some("list") => list(controller).await,
        Some("create") => create(controller, &args[1..]).await,
        Some("update") => update(controller, &args[1..]).await,
        Some("delete") => delete(controller, &args[1..]).await,
        Some("delete-all") => delete_all(controller).await,
        _ => {
            eprintln!("{USAGE}");
            ExitCode::FAILURE
        }
    }
}

async fn list(controller: &mut SupplierFormController) -> ExitCode {
    if controller.refresh().await.is_err() {
        eprintln!("{GENERIC_FAILURE}");
        return ExitCode::FAILURE;
    }
    print_table(controller.suppliers());
    ExitCode::SUCCESS
}

async fn create(controller: &mut SupplierFormController, fields: &[String]) -> ExitCode {
    if fields.len() != 7 {
        eprintln!("create takes exactly 7 field values\n{USAGE}");
        return ExitCode::FAILURE;
    }
    controller.begin_create();
    fill_draft(controller, fields);
    submit(controller).await
}

async fn update(controller: &mut SupplierFormController, args: &[String]) -> ExitCode {
    if args.len() != 8 {
        eprintln!("update takes an id and 7 field values\n{USAGE}");
        return ExitCode::FAILURE;
    }
    let Ok(id) = args[0].parse::<i64>() else {
        eprintln!("update: <id> must be an integer");
        return ExitCode::FAILURE;
    };
    // Pre-fill as if the row had been selected for editing, then let
    // the provided values overwrite every field.
    controller.begin_update(&Supplier {
        supplier_id: id,
        first_name: String::new(),
        last_name: String::new(),
        email: String::new(),
        nic: String::new(),
        company_name: String::new(),
        phone: String::new(),
        category: String::new(),
    });
    fill_draft(controller, &args[1..]);
    submit(controller).await
}

async fn delete(controller: &mut SupplierFormController, args: &[String]) -> ExitCode {
    let Some(Ok(id)) = args.first().map(|a| a.parse::<i64>()) else {
        eprintln!("delete: <id> must be an integer");
        return ExitCode::FAILURE;
    };
    match controller.delete_one(id).await {
        Ok(message) => {
            println!("{message}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::warn!(supplier_id = id, error = %e, "Delete failed");
            eprintln!("{GENERIC_FAILURE}");
            ExitCode::FAILURE
        }
    }
}

async fn delete_all(controller: &mut SupplierFormController) -> ExitCode {
    match controller.delete_all().await {
        Ok(message) => {
            println!("{message}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::warn!(error = %e, "Delete-all failed");
            eprintln!("{GENERIC_FAILURE}");
            ExitCode::FAILURE
        }
    }
}

fn fill_draft(controller: &mut SupplierFormController, fields: &[String]) {
    let draft = controller.draft_mut();
    draft.first_name = fields[0].clone();
    draft.last_name = fields[1].clone();
    draft.email = fields[2].clone();
    draft.nic = fields[3].clone();
    draft.company_name = fields[4].clone();
    draft.phone = fields[5].clone();
    draft.category = fields[6].clone();
}

async fn submit(controller: &mut SupplierFormController) -> ExitCode {
    match controller.submit().await {
        Ok(message) => {
            println!("{message}");
            ExitCode::SUCCESS
        }
        Err(SubmitError::Validation(errors)) => {
            for (field, message) in errors.iter() {
                eprintln!("{field}: {message}");
            }
            ExitCode::FAILURE
        }
        Err(SubmitError::Transport(e)) => {
            tracing::warn!(error = %e, "Submit failed");
            eprintln!("{GENERIC_FAILURE}");
            ExitCode::FAILURE
        }
    }
}

/// Print the supplier table with the same columns as the admin page.
fn print_table(suppliers: &[Supplier]) {
    println!(
        "{:<6} {:<12} {:<12} {:<28} {:<11} {:<20} {:<14} {:<12}",
        "id", "first name", "last name", "email", "NIC", "company", "phone", "category"
    );
    for s in suppliers {
        println!(
            "{:<6} {:<12} {:<12} {:<28} {:<11} {:<20} {:<14} {:<12}",
            s.supplier_id,
            s.first_name,
            s.last_name,
            s.email,
            s.nic,
            s.company_name,
            s.phone,
            s.category
        );
    }
    println!("{} supplier(s)", suppliers.len());
}
