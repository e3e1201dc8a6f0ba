use std::env;

use meteorite_feed::{get_records, get_records_from, Record};

#[tokio::main]
async fn main() -> Result<(), String> {
    let args: Vec<String> = env::args().collect();

    let records = match args.get(1) {
        Some(url) => get_records_from(url).await,
        None => get_records().await,
    }
    .map_err(|e| e.to_string())?;

    let summary = Summary::of(&records);
    println!("records:          {}", summary.total);
    println!("with geolocation: {}", summary.geolocated);
    println!("unparseable:      {}", summary.unparseable);

    Ok(())
}

#[derive(Debug, Default, PartialEq)]
struct Summary {
    total: usize,
    geolocated: usize,
    unparseable: usize,
}

impl Summary {
    fn of(records: &[Record]) -> Self {
        let geolocated: Vec<_> = records.iter().filter(|r| r.has_geolocation()).collect();
        Self {
            total: records.len(),
            geolocated: geolocated.len(),
            unparseable: geolocated
                .iter()
                .filter(|r| r.coordinates().is_none())
                .count(),
        }
    }
}
