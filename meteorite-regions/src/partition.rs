use crate::{
    classify::regions_for,
    helpers::FieldHelper,
    models::{Partition, Partitions, Regions, Row, Stats},
};
use log::debug;
use meteorite_feed::Record;

/// Sorts the records into the given regions.
///
/// Every region gets an entry, even if no record falls into it. Rows keep
/// the input order and the raw textual coordinates of the record. Records
/// without parseable coordinates are left out.
pub fn build_partitions(records: &[Record], regions: &Regions) -> Partitions {
    let mut partitions: Vec<Partition> = regions
        .names()
        .map(|name| Partition {
            region: name.to_owned(),
            rows: Vec::new(),
        })
        .collect();
    let mut stats = Stats {
        records: records.len(),
        ..Default::default()
    };

    for record in records {
        if !record.has_geolocation() {
            continue;
        }
        stats.geolocated += 1;

        let Some(point) = record.coordinates() else {
            debug!(
                "Skipping {}: coordinates ({:?}, {:?}) are not numeric",
                record.name.text().unwrap_or_default(),
                record.reclat.text(),
                record.reclong.text(),
            );
            stats.unparseable += 1;
            continue;
        };

        let matches = regions_for(point, regions);
        if matches.is_empty() {
            continue;
        }
        stats.classified += 1;

        let row = to_row(record);
        for partition in partitions.iter_mut() {
            if matches.contains(&partition.region.as_str()) {
                partition.rows.push(row.clone());
            }
        }
    }

    Partitions { partitions, stats }
}

fn to_row(record: &Record) -> Row {
    Row {
        name: record.name.text(),
        mass: record.mass.text(),
        reclat: record.reclat.text().unwrap_or_default(),
        reclong: record.reclong.text().unwrap_or_default(),
    }
}
