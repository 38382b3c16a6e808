use anyhow::{Result, anyhow};
use clap::Args;
use dashboard::Dashboard;
use records::Status;

#[derive(Args)]
pub struct AddArgs {
    /// Customer name (required, non-empty)
    #[arg(long)]
    pub name: String,

    /// Free-text description
    #[arg(long, default_value = "")]
    pub description: String,

    /// Open, Paid, Due, or Inactive
    #[arg(long, default_value = "Open")]
    pub status: Status,

    #[arg(long, default_value_t = 0.0)]
    pub rate: f64,

    #[arg(long, default_value_t = 0.0)]
    pub deposit: f64,

    #[arg(long, default_value_t = 0.0)]
    pub balance: f64,
}

/// Form-boundary check: currency amounts must be non-negative.
pub fn check_amounts(rate: f64, deposit: f64, balance: f64) -> Result<()> {
    for (field, value) in [("rate", rate), ("deposit", deposit), ("balance", balance)] {
        if value < 0.0 {
            return Err(anyhow!("{} must be non-negative, got {}", field, value));
        }
    }
    Ok(())
}

pub async fn add_command(dash: &Dashboard, args: &AddArgs) -> Result<()> {
    check_amounts(args.rate, args.deposit, args.balance)?;

    let mut record = dash.new_record();
    record.name = args.name.clone();
    record.description = args.description.clone();
    record.status = args.status;
    record.rate = args.rate;
    record.deposit = args.deposit;
    record.balance = args.balance;

    let saved = dash.save(record).await?;
    println!("added record {} ({})", saved.id, saved.name);
    Ok(())
}
