//! Tab-delimited dataset codec
//!
//! The dataset file is the hand-off to the external integrator: one header
//! comment line, then one record per body with ten tab-separated fields.
//! Field precision is a format contract — consumers may diff output
//! bit-exactly — so the format strings here are load-bearing.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::body::CelestialBody;

/// Header comment line; any reader that skips `#`-prefixed lines can skip it.
pub const DATASET_HEADER: &str = "#Name\tOrbits\tMass(kg)\tDiam(m)\tPerihelion(m)\tAphelion(m)\torbPeriod(days)\trotationalPeriod(hours)\taxialtilt(deg)\torbinclin(deg)";

/// Orbits-reference marker for the central body. An explicit token, never
/// an empty field.
const NULL_ORBIT_MARKER: &str = "NaN";

/// Formats one body as its dataset record (without trailing newline).
///
/// Mass uses 5 significant digits (`{:.4e}`), the length fields 7
/// (`{:.6e}`), periods and angles fixed-point with 2 decimals. The central
/// body writes literal `0` for the orbital fields that do not apply to a
/// fixed mass; its rotation period is real and formatted like any other.
pub fn format_record(body: &CelestialBody) -> String {
    if body.is_central() {
        return format!(
            "{}\t{}\t{:.4e}\t{:.6e}\t0\t0\t0\t{:.2}\t0\t0",
            body.name,
            NULL_ORBIT_MARKER,
            body.mass.to_kg(),
            body.diameter.to_m(),
            body.rotational_period.to_hours(),
        );
    }

    format!(
        "{}\t{}\t{:.4e}\t{:.6e}\t{:.6e}\t{:.6e}\t{:.2}\t{:.2}\t{:.2}\t{:.2}",
        body.name,
        body.orbits.as_deref().unwrap_or(NULL_ORBIT_MARKER),
        body.mass.to_kg(),
        body.diameter.to_m(),
        body.perihelion.to_m(),
        body.aphelion.to_m(),
        body.orbital_period.to_days(),
        body.rotational_period.to_hours(),
        body.axial_tilt_deg,
        body.orbital_inclination_deg,
    )
}

/// Writes the header and every body record, in the order given.
///
/// Callers pass the full population with the central body first. The write
/// is one pass with no partial-record recovery: any I/O failure aborts the
/// run.
pub fn write_dataset<W: Write>(mut out: W, bodies: &[CelestialBody]) -> io::Result<()> {
    writeln!(out, "{}", DATASET_HEADER)?;
    for body in bodies {
        writeln!(out, "{}", format_record(body))?;
    }
    Ok(())
}

/// Writes the dataset to a file through a buffered writer.
pub fn write_dataset_file<P: AsRef<Path>>(path: P, bodies: &[CelestialBody]) -> io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_dataset(&mut writer, bodies)?;
    writer.flush()
}
