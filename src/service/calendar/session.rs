use crate::models::SessionTime;

/// Classify a raw announcement time against the 09:30 open and 16:00 close.
///
/// Times are HH:MM on a 24-hour wall clock, already in the exchange's local
/// time; no timezone conversion happens here. Missing or malformed times
/// count as during market hours.
pub fn classify(raw_time: Option<&str>) -> SessionTime {
    let Some(raw) = raw_time.map(str::trim).filter(|s| !s.is_empty()) else {
        return SessionTime::During;
    };
    let Some((hour, minute)) = parse_hhmm(raw) else {
        return SessionTime::During;
    };

    if hour < 9 || (hour == 9 && minute < 30) {
        SessionTime::Before
    } else if hour >= 16 {
        SessionTime::After
    } else {
        SessionTime::During
    }
}

fn parse_hhmm(s: &str) -> Option<(u32, u32)> {
    let mut parts = s.split(':');
    let hour: u32 = parts.next()?.parse().ok()?;
    let minute: u32 = parts.next()?.parse().ok()?;
    if hour > 23 || minute > 59 {
        return None;
    }
    Some((hour, minute))
}
