//! Text and JSON rendering of calculation reports.
//!
//! Values arrive already computed; this module only formats them.

use std::io::{self, Write};

use trades_core::calculations::beam_band::{BAND_ALLOWANCE_IN, MESH_ALLOWANCE_IN, MESH_WIDTH_IN};
use trades_core::{CalculationReport, TradesError};

/// Title line followed by an `=` rule one character longer than the title.
fn heading<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    writeln!(out, "{title}")?;
    writeln!(out, "{}", "=".repeat(title.len() + 1))
}

/// Write the labeled report for `report`.
pub fn write_text<W: Write>(out: &mut W, report: &CalculationReport) -> io::Result<()> {
    match report {
        CalculationReport::GpsVerify { input, result } => {
            heading(out, "GPS Coordinate Verification")?;
            writeln!(out, "Point 1: {:.6}, {:.6}", input.point1.latitude, input.point1.longitude)?;
            writeln!(out, "Point 2: {:.6}, {:.6}", input.point2.latitude, input.point2.longitude)?;
            writeln!(
                out,
                "Distance: {:.2} meters ({:.2} feet)",
                result.distance_m, result.distance_ft
            )?;
        }
        CalculationReport::Decode { result, .. } => {
            heading(out, "Plus Code Decode")?;
            writeln!(out, "Code: {}", result.full_code)?;
            writeln!(out, "Lat: {:.6}", result.latitude)?;
            writeln!(out, "Lon: {:.6}", result.longitude)?;
            writeln!(out, "https://maps.google.com/?q={},{}", result.latitude, result.longitude)?;
        }
        CalculationReport::BeamWrap { input, result } => {
            heading(out, "Beam Wrap Material Estimation")?;
            writeln!(out, "Beam diameter: {:.2} inches", input.diameter_in)?;
            writeln!(out, "Beam length: {:.2} feet", input.length_ft)?;
            writeln!(out, "Circumference: {:.2} inches", result.circumference_in)?;
            writeln!(out, "Surface area: {:.2} sq ft", result.surface_area_sq_ft)?;
            writeln!(
                out,
                "Material needed (with 10% overlap): {:.2} sq ft",
                result.material_needed_sq_ft
            )?;
        }
        CalculationReport::BeamBand { input, result } => {
            heading(out, "Beam Band & Mesh Estimate")?;
            writeln!(out, "Type: {}", if input.is_angled() { "Angled" } else { "Horizontal" })?;
            writeln!(out, "Circumference: {:.2} inches", input.circumference_in)?;
            writeln!(
                out,
                "Run: {:.2} inches ({} shoes + {:.2} inch boot)",
                result.run_in, input.shoes, input.boot_in
            )?;
            writeln!(out, "Rise: {:.2} inches", input.rise_in)?;
            writeln!(
                out,
                "Beam length: {:.2} inches ({:.2} ft)",
                result.beam_length_in, result.beam_length_ft
            )?;
            writeln!(
                out,
                "Band length: {:.2} inches (circ + {BAND_ALLOWANCE_IN})",
                result.band_length_in
            )?;
            writeln!(out, "Band qty: {}", result.band_qty)?;
            writeln!(
                out,
                "Total band: {:.2} inches ({:.2} ft)",
                result.total_band_in, result.total_band_ft
            )?;
            writeln!(
                out,
                "Mesh length: {:.2} inches (circ + {MESH_ALLOWANCE_IN})",
                result.mesh_length_in
            )?;
            writeln!(out, "Mesh panels: {}", result.mesh_qty)?;
            writeln!(out, "Mesh width: {MESH_WIDTH_IN} inches")?;
            writeln!(
                out,
                "Total mesh: {:.0} sq in ({:.2} sq ft)",
                result.total_mesh_sq_in, result.total_mesh_sq_ft
            )?;
        }
        CalculationReport::RollingOffset { input, result } => {
            heading(out, "Rolling Offset Calculation")?;
            writeln!(out, "Offset: {:.2} inches", input.offset_in)?;
            writeln!(out, "Roll: {:.2} inches", input.roll_in)?;
            writeln!(out, "Travel: {:.2} inches", input.travel_in)?;
            writeln!(out, "True offset: {:.2} inches", result.true_offset_in)?;
            writeln!(out, "Set: {:.2} inches", result.set_in)?;
            writeln!(out, "Diagonal travel: {:.2} inches", result.diagonal_in)?;
        }
        CalculationReport::AngleOffset { input, result } => {
            heading(out, "Angle Offset Calculation")?;
            writeln!(out, "Angle: {:.2} degrees", input.angle_deg)?;
            writeln!(out, "Offset: {:.2} inches", input.offset_in)?;
            writeln!(out, "Travel: {:.4} inches", result.travel_in)?;
            writeln!(out, "Advance: {:.4} inches", result.advance_in)?;
        }
        CalculationReport::Cutback { input, result } => {
            heading(out, "Miter Cutback Calculation")?;
            writeln!(out, "Angle: {:.2} degrees", input.angle_deg)?;
            writeln!(out, "Diameter: {:.2} inches", input.diameter_in)?;
            writeln!(out, "Cutback: {:.4} inches", result.cut_in)?;
        }
        CalculationReport::Calibrate { input, result } => {
            let unit = &input.unit;
            heading(out, "Field Calibration Check")?;
            writeln!(out, "Satellite: {:.2} {unit}", input.satellite)?;
            writeln!(out, "Field: {:.2} {unit}", input.field)?;
            writeln!(out, "Diff: {:+.2} {unit} ({:+.2}%)", result.difference, result.pct_error)?;
            writeln!(out, "{}", if result.calibrated { "CALIBRATED" } else { "ADJUST" })?;
        }
        CalculationReport::Hypotenuse { input, result } => {
            heading(out, "Run/Rise Travel")?;
            writeln!(out, "Run: {:.2} inches", input.run_in)?;
            writeln!(out, "Rise: {:.2} inches", input.rise_in)?;
            writeln!(
                out,
                "Travel: {:.4} inches ({:.4} ft)",
                result.travel_in, result.travel_ft
            )?;
        }
    }
    Ok(())
}

/// Write `report` as pretty-printed JSON.
pub fn write_json<W: Write>(out: &mut W, report: &CalculationReport) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)
}

/// Write an error as `Error: <message>`, plus its JSON form when requested.
pub fn write_error<W: Write>(out: &mut W, error: &TradesError, json: bool) -> io::Result<()> {
    writeln!(out, "Error: {error}")?;
    if json {
        serde_json::to_writer_pretty(&mut *out, error)?;
        writeln!(out)?;
    }
    Ok(())
}
