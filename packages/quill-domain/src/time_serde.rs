//! Serializes [`OffsetDateTime`] as integer milliseconds since the Unix epoch.

use serde::{Deserialize, Deserializer, Serializer};
use time::OffsetDateTime;

const NANOS_PER_MILLI: i128 = 1_000_000;

pub fn serialize<S>(value: &OffsetDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
	S: Serializer,
{
	let millis = i64::try_from(value.unix_timestamp_nanos() / NANOS_PER_MILLI)
		.map_err(serde::ser::Error::custom)?;

	serializer.serialize_i64(millis)
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<OffsetDateTime, D::Error>
where
	D: Deserializer<'de>,
{
	let millis = i64::deserialize(deserializer)?;

	from_millis(millis).map_err(serde::de::Error::custom)
}

pub fn from_millis(millis: i64) -> Result<OffsetDateTime, time::error::ComponentRange> {
	OffsetDateTime::from_unix_timestamp_nanos(i128::from(millis) * NANOS_PER_MILLI)
}

/// Truncates to whole milliseconds so values survive a round trip unchanged.
pub fn truncate_to_millis(value: OffsetDateTime) -> OffsetDateTime {
	let nanos = value.unix_timestamp_nanos();

	OffsetDateTime::from_unix_timestamp_nanos(nanos - nanos.rem_euclid(NANOS_PER_MILLI))
		.unwrap_or(value)
}
