use schedule_common::Record;

/// Drops every `Date` record directly followed by a connection on the same
/// date. The connection already carries the date, so the placeholder adds
/// nothing. Bare dates, undated connections and the final record are kept.
pub fn drop_superseded_dates(records: Vec<Record>) -> Vec<Record> {
    let mut kept = Vec::with_capacity(records.len());
    let mut records = records.into_iter().peekable();

    while let Some(record) = records.next() {
        let superseded = match (&record, records.peek()) {
            (Record::Date { date }, Some(next)) => {
                next.is_connection() && next.date() == Some(date.as_str())
            }
            _ => false,
        };

        if superseded {
            tracing::trace!(date = ?record.date(), "dropping superseded date");
        } else {
            kept.push(record);
        }
    }

    kept
}
