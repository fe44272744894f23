//! Wall-clock helpers that work in both the browser and server renders.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

/// Milliseconds since the Unix epoch.
pub fn now_ms() -> u64 {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let ms = js_sys::Date::now().max(0.0) as u64;
        ms
    }
    #[cfg(not(feature = "hydrate"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
    }
}

/// Calendar year (UTC) of an epoch-milliseconds timestamp.
pub fn year_of(epoch_ms: u64) -> i32 {
    let nanos = i128::from(epoch_ms) * 1_000_000;
    time::OffsetDateTime::from_unix_timestamp_nanos(nanos).map_or(1970, time::OffsetDateTime::year)
}

/// Current calendar year (UTC), used by the footer copyright line.
pub fn current_year() -> i32 {
    year_of(now_ms())
}
