//! The HTTP date format used by the `Expires` attribute
use jiff::Timestamp;
use jiff::fmt::strtime::BrokenDownTime;
use jiff::tz::TimeZone;

// Every Expires attribute is written in this form, e.g.
// `Wed, 21-Oct-2015 07:28:00 GMT`.
const EMIT: &str = "%a, %d-%b-%Y %H:%M:%S GMT";

// Accepted on decode alongside EMIT: the RFC1123 spelling with spaces.
const ACCEPT_RFC1123: &str = "%a, %d %b %Y %H:%M:%S GMT";

pub(crate) fn format(timestamp: Timestamp) -> String {
    timestamp.to_zoned(TimeZone::UTC).strftime(EMIT).to_string()
}

pub(crate) fn parse(input: &str) -> Option<Timestamp> {
    [EMIT, ACCEPT_RFC1123].iter().find_map(|pattern| {
        let fields = BrokenDownTime::parse(pattern, input).ok()?;
        let datetime = fields.to_datetime().ok()?;
        Some(datetime.to_zoned(TimeZone::UTC).ok()?.timestamp())
    })
}
