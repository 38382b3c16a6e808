use anyhow::{Result, anyhow};
use clap::Args;
use dashboard::Dashboard;
use records::Status;

use crate::commands::add::check_amounts;

#[derive(Args)]
pub struct EditArgs {
    /// Id of the record to update
    pub id: String,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    /// Open, Paid, Due, or Inactive
    #[arg(long)]
    pub status: Option<Status>,

    #[arg(long)]
    pub rate: Option<f64>,

    #[arg(long)]
    pub deposit: Option<f64>,

    #[arg(long)]
    pub balance: Option<f64>,
}

pub async fn edit_command(dash: &Dashboard, args: &EditArgs) -> Result<()> {
    let records = dash.records().await?;
    let mut record = records
        .into_iter()
        .find(|r| r.id == args.id)
        .ok_or_else(|| anyhow!("no record with id {}", args.id))?;

    if let Some(name) = &args.name {
        record.name = name.clone();
    }
    if let Some(description) = &args.description {
        record.description = description.clone();
    }
    if let Some(status) = args.status {
        record.status = status;
    }
    if let Some(rate) = args.rate {
        record.rate = rate;
    }
    if let Some(deposit) = args.deposit {
        record.deposit = deposit;
    }
    if let Some(balance) = args.balance {
        record.balance = balance;
    }
    check_amounts(record.rate, record.deposit, record.balance)?;

    let saved = dash.save(record).await?;
    println!("updated record {} ({})", saved.id, saved.name);
    Ok(())
}
