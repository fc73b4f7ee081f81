//! Pseudo-type translation: `$reql_type$` objects the wire protocol uses
//! to carry values JSON has no native representation for.

use serde_json::{Map, Value};
use time::{format_description, OffsetDateTime, UtcOffset};

use crate::cmd::run::Options;
use crate::err::{Driver, Error};

const REQL_TYPE: &str = "$reql_type$";

/// Walk a decoded response payload and translate every pseudo-type object
/// it contains, honoring the `raw` overrides in `opts`. Idempotent: running
/// it twice over already-translated output is a no-op, since a translated
/// value no longer carries `$reql_type$`.
pub(crate) fn decode(value: Value, opts: &Options) -> crate::Result<Value> {
    match value {
        Value::Array(items) => Ok(Value::Array(
            items
                .into_iter()
                .map(|item| decode(item, opts))
                .collect::<crate::Result<_>>()?,
        )),
        Value::Object(map) => decode_object(map, opts),
        other => Ok(other),
    }
}

fn decode_object(map: Map<String, Value>, opts: &Options) -> crate::Result<Value> {
    let Some(Value::String(reql_type)) = map.get(REQL_TYPE) else {
        return Ok(Value::Object(
            map.into_iter()
                .map(|(k, v)| Ok((k, decode(v, opts)?)))
                .collect::<crate::Result<_>>()?,
        ));
    };

    match reql_type.as_str() {
        "TIME" if !opts.time_format_raw() => decode_time(map),
        "BINARY" if !opts.binary_format_raw() => decode_binary(map),
        "GROUPED_DATA" if !opts.group_format_raw() => decode_grouped_data(map, opts),
        // GEOMETRY always passes through unchanged.
        _ => Ok(Value::Object(map)),
    }
}

fn decode_time(map: Map<String, Value>) -> crate::Result<Value> {
    let epoch = map
        .get("epoch_time")
        .and_then(Value::as_f64)
        .ok_or_else(|| Error::Driver(Driver::Other("malformed TIME pseudo-type".into())))?;
    let timezone = map
        .get("timezone")
        .and_then(Value::as_str)
        .ok_or_else(|| Error::Driver(Driver::Other("malformed TIME pseudo-type".into())))?;

    let offset = parse_offset(timezone)?;
    let nanos = (epoch * 1_000_000_000f64).round() as i128;
    let dt = OffsetDateTime::from_unix_timestamp_nanos(nanos)
        .map_err(|e| Error::Driver(Driver::Other(e.to_string())))?
        .to_offset(offset);

    // Rendered the same way `proto::DateTime`'s Serialize impl builds the
    // pseudo-type's own fields, just joined into one ISO-8601 string so it
    // survives a trip through a plain `serde_json::Value`.
    let (hours, minutes, _) = offset.as_hms();
    Ok(Value::String(format!(
        "{year:04}-{month:02}-{day:02}T{hour:02}:{minute:02}:{second:02}.{milli:03}{sign}{oh:02}:{om:02}",
        year = dt.year(),
        month = u8::from(dt.month()),
        day = dt.day(),
        hour = dt.hour(),
        minute = dt.minute(),
        second = dt.second(),
        milli = dt.millisecond(),
        sign = if offset.is_negative() { '-' } else { '+' },
        oh = hours.abs(),
        om = minutes.abs(),
    )))
}

fn parse_offset(timezone: &str) -> crate::Result<UtcOffset> {
    if timezone == "Z" {
        return Ok(UtcOffset::UTC);
    }
    let format = format_description::parse("[offset_hour]:[offset_minute]")
        .map_err(|e| Error::Driver(Driver::Other(e.to_string())))?;
    UtcOffset::parse(timezone, &format).map_err(|e| Error::Driver(Driver::Other(e.to_string())))
}

fn decode_binary(map: Map<String, Value>) -> crate::Result<Value> {
    use base64::{engine::general_purpose::STANDARD, Engine as _};

    let data = map
        .get("data")
        .and_then(Value::as_str)
        .ok_or_else(|| Error::Driver(Driver::Other("malformed BINARY pseudo-type".into())))?;
    let bytes = STANDARD
        .decode(data)
        .map_err(|e| Error::Driver(Driver::Other(e.to_string())))?;
    Ok(Value::Array(bytes.into_iter().map(Value::from).collect()))
}

/// `data` is a list of `[key, value]` pairs; `value` is whatever the
/// terminal op on the group produced (an array of rows for a bare
/// `.group()`, a scalar for `.group().count()`/`.group().sum(...)`, etc.),
/// so it's decoded and passed through as-is rather than re-wrapped.
fn decode_grouped_data(map: Map<String, Value>, opts: &Options) -> crate::Result<Value> {
    let data = map
        .get("data")
        .and_then(Value::as_array)
        .ok_or_else(|| Error::Driver(Driver::Other("malformed GROUPED_DATA pseudo-type".into())))?;

    let mut out = Vec::with_capacity(data.len());
    for pair in data {
        let Value::Array(pair) = pair else {
            return Err(Error::Driver(Driver::Other(
                "malformed GROUPED_DATA pseudo-type".into(),
            )));
        };
        if pair.len() != 2 {
            return Err(Error::Driver(Driver::Other(
                "malformed GROUPED_DATA pseudo-type".into(),
            )));
        }
        let key = decode(pair[0].clone(), opts)?;
        let value = decode(pair[1].clone(), opts)?;
        out.push(Value::Array(vec![key, value]));
    }
    Ok(Value::Array(out))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_round_trip() {
        let opts = Options::default();
        let v = serde_json::json!({
            "$reql_type$": "TIME",
            "epoch_time": 1_000_000_000.0,
            "timezone": "+00:00",
        });
        let decoded = decode(v, &opts).unwrap();
        assert_eq!(
            decoded,
            Value::String("2001-09-09T01:46:40.000+00:00".into())
        );
    }

    #[test]
    fn binary_round_trip() {
        let opts = Options::default();
        let v = serde_json::json!({
            "$reql_type$": "BINARY",
            "data": "AP9/",
        });
        let decoded = decode(v, &opts).unwrap();
        assert_eq!(
            decoded,
            Value::Array(vec![0u8.into(), 255u8.into(), 127u8.into()])
        );
    }

    #[test]
    fn grouped_data_keeps_row_array_as_a_single_value() {
        let opts = Options::default();
        let v = serde_json::json!({
            "$reql_type$": "GROUPED_DATA",
            "data": [["a", [1, 2, 3]], ["b", [4]]],
        });
        let decoded = decode(v, &opts).unwrap();
        assert_eq!(
            decoded,
            Value::Array(vec![
                Value::Array(vec!["a".into(), Value::Array(vec![1.into(), 2.into(), 3.into()])]),
                Value::Array(vec!["b".into(), Value::Array(vec![4.into()])]),
            ])
        );
    }

    #[test]
    fn grouped_data_keeps_aggregated_scalar_unwrapped() {
        let opts = Options::default();
        let v = serde_json::json!({
            "$reql_type$": "GROUPED_DATA",
            "data": [["a", 3], ["b", 1]],
        });
        let decoded = decode(v, &opts).unwrap();
        assert_eq!(
            decoded,
            Value::Array(vec![
                Value::Array(vec!["a".into(), 3.into()]),
                Value::Array(vec!["b".into(), 1.into()]),
            ])
        );
    }

    #[test]
    fn idempotent_on_plain_values() {
        let opts = Options::default();
        let v = serde_json::json!({"a": 1, "b": [1, 2, 3]});
        let once = decode(v.clone(), &opts).unwrap();
        let twice = decode(once.clone(), &opts).unwrap();
        assert_eq!(once, twice);
    }
}
