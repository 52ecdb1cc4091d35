// Sample file parser - Two paired x/y series from four-column rows
use crate::domain::chart::Trace;

pub const ADAFRUIT_TRACE: &str = "Adafruit";
pub const TINYGPS_TRACE: &str = "TinyGPS++";

/// Parse the full contents of a sample file into the two error traces.
///
/// Each line is trimmed and split on commas. Only rows with exactly four
/// fields contribute; everything else (short rows, long rows, the empty row
/// after a trailing newline) is skipped whole. Accepted rows append field 0/1
/// to the Adafruit trace and field 2/3 to the TinyGPS++ trace, in file order.
pub fn parse_samples(contents: &str) -> (Trace, Trace) {
    let mut adafruit = Trace::scatter(ADAFRUIT_TRACE);
    let mut tinygps = Trace::scatter(TINYGPS_TRACE);

    for line in contents.split('\n') {
        let fields: Vec<&str> = line.trim().split(',').collect();
        if fields.len() != 4 {
            continue;
        }
        adafruit.push(parse_field(fields[0]), parse_field(fields[1]));
        tinygps.push(parse_field(fields[2]), parse_field(fields[3]));
    }

    (adafruit, tinygps)
}

/// Permissive float conversion: malformed numeric text becomes the NAN
/// sentinel rather than rejecting the row, matching the unit test logs this
/// tool was built to plot.
fn parse_field(field: &str) -> f64 {
    field.trim().parse::<f64>().unwrap_or(f64::NAN)
}
