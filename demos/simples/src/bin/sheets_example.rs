use sheets_client::prelude::*;
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    let spreadsheet_id =
        env::var("SHEETS_SPREADSHEET_ID").unwrap_or_else(|_| "your_spreadsheet_id".to_string());
    let sheet_name = env::var("SHEETS_SHEET_NAME").unwrap_or_else(|_| "Sheet1".to_string());
    let callback_url = env::var("SHEETS_CALLBACK_URL")
        .unwrap_or_else(|_| "https://your-callback-url.com".to_string());

    info!("Creating client and authenticating...");
    let client = Client::new(Config::new()).await?;
    info!("✓ Client created and authenticated");

    let last_checked = Utc::now();

    // Write a value to the next empty cell in column A
    let next_row = client
        .get_next_empty_cell_in_column(&spreadsheet_id, &sheet_name, "A")
        .await?;
    client
        .write_cell(&spreadsheet_id, &sheet_name, next_row, "A", json!("New Value"))
        .await?;
    info!("Wrote A{}", next_row);

    // Write a value to the next empty cell in row 1
    let next_col = client
        .get_next_empty_cell_in_row(&spreadsheet_id, &sheet_name, 1)
        .await?;
    let col = column_letter(next_col)?;
    client
        .write_cell(&spreadsheet_id, &sheet_name, 1, &col, json!("New Value"))
        .await?;
    info!("Wrote {}1", col);

    // Chart over rows 2..10, domain in column A, series in column B
    let data_range = DataRange::new(sheet_name.clone(), 1..10, 0..2);
    let created = client
        .create_graph(&spreadsheet_id, "My Graph", &data_range, ChartType::Line)
        .await?;

    if let Some(chart_id) = created.added_chart_id() {
        info!("Created chart {}", chart_id);
        let wider = DataRange::new(sheet_name.clone(), 1..20, 0..2);
        client
            .update_graph(&spreadsheet_id, chart_id, &wider)
            .await?;
        info!("Updated chart {}", chart_id);
    }

    let sheet = client.create_sheet(&spreadsheet_id, "New Sheet").await?;
    info!("Created sheet {:?}", sheet.added_sheet_id());

    match client
        .watch_changes(&spreadsheet_id, &callback_url, &sheet_name, "A")
        .await?
    {
        Some(channel) => info!("Watching via channel {} ({})", channel.id, channel.resource_id),
        None => warn!("Watch not registered, try again later"),
    }

    let changed = client
        .check_for_spreadsheet_updates(&spreadsheet_id, Some(last_checked))
        .await?;
    info!("Spreadsheet changed since start: {}", changed);

    Ok(())
}
