use crate::{
    helpers::FieldHelper,
    models::{Partitions, Row},
};
use anyhow::Result;
use futures::TryStreamExt;
use meteorite_feed::Record;
use sqlx::{Row as _, SqlitePool};

pub struct Database {
    pool: SqlitePool,
}

impl Database {
    pub async fn new(dsn: &str) -> Result<Self> {
        let pool = SqlitePool::connect(dsn).await?;

        Ok(Self { pool })
    }

    pub async fn init(&self) -> Result<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;

        Ok(())
    }

    /// Replaces the contents of `meteorite_data` with the given records.
    pub async fn replace_meteorites(&self, records: &[Record]) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM meteorite_data")
            .execute(&mut *tx)
            .await?;

        for record in records {
            sqlx::query(
                "INSERT INTO meteorite_data (name, id, nametype, recclass, mass, fall, year, \
                 reclat, reclong, geolocation, states, counties) \
                 VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
            )
            .bind(record.name.text())
            .bind(record.id.as_ref().and_then(|id| id.coerce().as_i64()))
            .bind(record.nametype.text())
            .bind(record.recclass.text())
            .bind(record.mass.text())
            .bind(record.fall.text())
            .bind(record.year.text())
            .bind(record.reclat.text())
            .bind(record.reclong.text())
            .bind(record.geolocation.text())
            .bind(record.states.text())
            .bind(record.counties.text())
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(())
    }

    /// Refills `filtered_data` with all stored meteorites up to the given id.
    pub async fn refresh_filtered(&self, max_id: i64) -> Result<u64> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM filtered_data")
            .execute(&mut *tx)
            .await?;

        let res = sqlx::query("INSERT INTO filtered_data SELECT * FROM meteorite_data WHERE id <= ?")
            .bind(max_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(res.rows_affected())
    }

    /// Replaces everything stored in `region_meteorites` with the given
    /// partitions. Regions missing from `partitions` end up empty.
    pub async fn replace_partitions(&self, partitions: &Partitions) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM region_meteorites")
            .execute(&mut *tx)
            .await?;

        for partition in partitions.iter() {
            for (position, row) in partition.rows.iter().enumerate() {
                sqlx::query(
                    "INSERT INTO region_meteorites (region, position, name, mass, reclat, reclong) \
                     VALUES (?, ?, ?, ?, ?, ?)",
                )
                .bind(&partition.region)
                .bind(position as i64)
                .bind(&row.name)
                .bind(&row.mass)
                .bind(&row.reclat)
                .bind(&row.reclong)
                .execute(&mut *tx)
                .await?;
            }
        }

        tx.commit().await?;
        Ok(())
    }

    pub async fn get_partition(&self, region: &str) -> Result<Vec<Row>> {
        let mut rows = sqlx::query(
            "SELECT name, mass, reclat, reclong FROM region_meteorites \
             WHERE region = ? ORDER BY position",
        )
        .bind(region)
        .fetch(&self.pool);

        let mut res = Vec::new();
        while let Some(row) = rows.try_next().await? {
            res.push(Row {
                name: row.try_get("name")?,
                mass: row.try_get("mass")?,
                reclat: row.try_get("reclat")?,
                reclong: row.try_get("reclong")?,
            });
        }

        Ok(res)
    }

    pub async fn count_meteorites(&self) -> Result<i64> {
        self.count("SELECT COUNT(*) AS n FROM meteorite_data").await
    }

    pub async fn count_filtered(&self) -> Result<i64> {
        self.count("SELECT COUNT(*) AS n FROM filtered_data").await
    }

    async fn count(&self, query: &str) -> Result<i64> {
        let row = sqlx::query(query).fetch_one(&self.pool).await?;
        let n: i64 = row.try_get("n")?;
        Ok(n)
    }
}
