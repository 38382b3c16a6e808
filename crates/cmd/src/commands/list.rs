use anyhow::Result;
use dashboard::Dashboard;

pub async fn list_command(dash: &Dashboard) -> Result<()> {
    let records = dash.records().await?;

    println!(
        "{:<18} {:<20} {:<22} {:<8} {:>9} {:>9} {:>9}",
        "ID", "NAME", "DESCRIPTION", "STATUS", "RATE", "DEPOSIT", "BALANCE"
    );
    for record in &records {
        println!(
            "{:<18} {:<20} {:<22} {:<8} {:>9.2} {:>9.2} {:>9.2}",
            record.id,
            record.name,
            record.description,
            record.status,
            record.rate,
            record.deposit,
            record.balance
        );
    }
    println!("{} records", records.len());
    Ok(())
}
