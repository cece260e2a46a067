use crate::metrics::ScenarioResult;

pub(crate) fn export_to_csv_impl(
    results: &[ScenarioResult],
    file: std::fs::File,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut writer = csv::Writer::from_writer(file);

    writer.write_record([
        "total_rider_payments",
        "total_driver_payouts",
        "rider_cac_total",
        "driver_cac_total",
        "num_churned_drivers",
        "num_churned_riders",
        "num_successful_rides",
        "num_failed_rides",
        "max_num_drivers",
        "max_num_riders",
        "lyft_take",
        "net_revenue",
    ])?;

    for result in results {
        writer.write_record([
            &result.total_rider_payments.to_string(),
            &result.total_driver_payouts.to_string(),
            &result.rider_cac_total.to_string(),
            &result.driver_cac_total.to_string(),
            &result.num_churned_drivers.to_string(),
            &result.num_churned_riders.to_string(),
            &result.num_successful_rides.to_string(),
            &result.num_failed_rides.to_string(),
            &result.max_num_drivers.to_string(),
            &result.max_num_riders.to_string(),
            &result.lyft_take.to_string(),
            &result.net_revenue.to_string(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}
