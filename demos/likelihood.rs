use power_climatology::{Climatology, LatLon};
use serde_json::to_string_pretty;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = Climatology::new()?;

    let report = client
        .likelihood()
        .location(LatLon::new(19.4326, -99.1332)?) // Mexico City
        .date("07/15/2025")
        .call()
        .await?;

    println!("{}", to_string_pretty(&report)?);
    Ok(())
}
