use crate::core::form::ReportForm;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::insert_report;
use crate::errors::AppResult;
use crate::models::image::ImagePayload;

pub struct SubmitLogic;

impl SubmitLogic {
    /// Persist a confirmed form: coerce the fields, attach the captured
    /// image verbatim, stamp the instant and insert. Returns the
    /// store-assigned id.
    ///
    /// Insert is all-or-nothing per record. On failure the caller keeps the
    /// form values and decides whether to retry; nothing is rolled forward.
    pub fn apply(
        pool: &mut DbPool,
        form: ReportForm,
        image: Option<ImagePayload>,
        source: &str,
    ) -> AppResult<i64> {
        let record = form.into_record(image.map(|img| img.to_data_url()));
        let date_str = record.date.format("%Y-%m-%d").to_string();

        let id = insert_report(&pool.conn, &record)?;

        // Audit trail is best-effort; the insert already committed.
        if let Err(e) = ttlog(
            &pool.conn,
            source,
            &format!("report {id}"),
            &format!("Saved report {id} for {date_str}"),
        ) {
            eprintln!("⚠️ Failed to write internal log: {}", e);
        }

        Ok(id)
    }
}
