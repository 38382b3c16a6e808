use anyhow::{Result, anyhow};
use dashboard::Dashboard;

pub async fn delete_command(dash: &Dashboard, ids: &[String]) -> Result<()> {
    if ids.is_empty() {
        return Err(anyhow!("no ids given"));
    }

    // Route the bulk delete through the selection, as the UI does.
    dash.select_all(ids.to_vec());
    dash.delete_selected().await?;

    let remaining = dash.records().await?.len();
    println!("deleted {} id(s), {} records remain", ids.len(), remaining);
    Ok(())
}
