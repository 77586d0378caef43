//! One-time seeding utility for the policies collection.

use anyhow::Context;
use chrono::{DateTime, TimeZone, Utc};
use clap::Parser;
use mongodb::bson::doc;
use mongodb::{Client, Collection};
use polaris::db::mongo::COLLECTION_NAME;
use polaris::{config::Config, logging, models::Policy};

#[derive(Debug, Parser)]
#[command(name = "policy-seed", about = "Seed the policies collection with sample data")]
struct Args {
    /// Keep existing documents instead of clearing the collection first.
    #[arg(long)]
    append: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init_simple_logging();

    let args = Args::parse();
    let config = Config::load().context("Failed to load configuration")?;

    let client = Client::with_uri_str(&config.database.uri)
        .await
        .context("Failed to connect to MongoDB")?;
    let database = client
        .default_database()
        .unwrap_or_else(|| client.database(&config.database.database));
    let collection: Collection<Policy> = database.collection(COLLECTION_NAME);

    tracing::info!(database = %database.name(), "Seeding policies collection");

    if !args.append {
        let deleted = collection.delete_many(doc! {}).await?.deleted_count;
        tracing::info!(deleted, "Cleared existing data");
    }

    let policies = sample_policies();
    let inserted = collection.insert_many(&policies).await?.inserted_ids.len();
    tracing::info!(inserted, "Inserted sample policies");

    let total = collection.count_documents(doc! {}).await?;
    tracing::info!(total, "Documents in collection");

    Ok(())
}

fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .expect("valid seed date")
}

#[allow(clippy::too_many_arguments)]
fn policy(
    number: &str,
    insured: &str,
    lines: &[&str],
    status: &str,
    effective: DateTime<Utc>,
    expiration: DateTime<Utc>,
    premium: f64,
    mnpid: Option<&str>,
    handler: Option<&str>,
    underwriter: Option<&str>,
) -> Policy {
    Policy {
        policy_number: number.to_string(),
        named_insured: insured.to_string(),
        line_of_business: lines.iter().map(|line| line.to_string()).collect(),
        status: status.to_string(),
        effective_date: effective,
        expiration_date: expiration,
        premium,
        mnpid: mnpid.map(String::from),
        mbu_handler: handler.map(String::from),
        producing_uw: underwriter.map(String::from),
    }
}

fn sample_policies() -> Vec<Policy> {
    vec![
        policy(
            "POL001",
            "Acme Corporation",
            &["Commercial Auto"],
            "BOUND",
            date(2024, 1, 1),
            date(2025, 1, 1),
            5000.0,
            Some("MNP-1001"),
            Some("D. Harmon"),
            Some("K. Osei"),
        ),
        policy(
            "POL002",
            "XYZ Industries",
            &["General Liability"],
            "QUOTED",
            date(2024, 2, 1),
            date(2025, 2, 1),
            7500.0,
            Some("MNP-1002"),
            Some("R. Calloway"),
            None,
        ),
        policy(
            "POL003",
            "ABC Company",
            &["Workers Compensation"],
            "ISSUED",
            date(2024, 3, 1),
            date(2025, 3, 1),
            3000.0,
            None,
            Some("D. Harmon"),
            Some("M. Lindqvist"),
        ),
        policy(
            "POL004",
            "Northfield Logistics",
            &["Commercial Auto", "Cargo"],
            "PENDING_RENEWAL",
            date(2023, 6, 15),
            date(2024, 6, 15),
            12250.0,
            Some("MNP-1010"),
            None,
            Some("K. Osei"),
        ),
        policy(
            "POL005",
            "Harbor & Finch LLC",
            &["Professional Liability"],
            "IN_DESIGN",
            date(2024, 5, 1),
            date(2025, 5, 1),
            9100.0,
            None,
            None,
            None,
        ),
        policy(
            "POL006",
            "Grange Mutual Farms",
            &["Property", "General Liability"],
            "PENDING_QUOTE",
            date(2024, 4, 10),
            date(2025, 4, 10),
            4400.0,
            Some("MNP-1014"),
            Some("R. Calloway"),
            None,
        ),
        policy(
            "POL007",
            "Silver Peak Outfitters",
            &["Umbrella"],
            "APPROVAL_PENDING",
            date(2024, 7, 1),
            date(2025, 7, 1),
            2150.0,
            None,
            None,
            Some("M. Lindqvist"),
        ),
        policy(
            "POL008",
            "Beacon Street Holdings",
            &["Property"],
            "CLOSED",
            date(2022, 9, 1),
            date(2023, 9, 1),
            6800.0,
            Some("MNP-1021"),
            Some("D. Harmon"),
            Some("K. Osei"),
        ),
    ]
}
