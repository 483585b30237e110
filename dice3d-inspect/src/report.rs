//! Coloured per-solid report lines
use crossterm::{
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use dice3d_core::SolidReport;
use std::io::{self, Write};

/// Column titles matching [`write_report`].
pub fn write_header<W: Write>(writer: &mut W) -> io::Result<()> {
    writer
        .queue(SetForegroundColor(Color::Yellow))?
        .queue(Print(format!(
            "{:<24} {:>5} {:>9} {:>10} {:>6} {:>10}  {}\n",
            "solid", "faces", "triangles", "degenerate", "inward", "open edges", "status"
        )))?
        .queue(ResetColor)?;
    Ok(())
}

/// One summary line for `report`, followed by the offending face indices when
/// the solid is not valid.
pub fn write_report<W: Write>(
    writer: &mut W,
    label: &str,
    faces: Option<u32>,
    report: &SolidReport,
) -> io::Result<()> {
    let faces = faces.map_or_else(|| "-".to_string(), |f| f.to_string());
    writer.queue(Print(format!(
        "{:<24} {:>5} {:>9} {:>10} {:>6} {:>10}  ",
        label,
        faces,
        report.triangle_count,
        report.degenerate_faces.len(),
        report.inward_faces.len(),
        report.open_edges,
    )))?;

    let (color, status) = if report.is_valid() {
        (Color::Green, "ok")
    } else {
        (Color::Red, "DEFECT")
    };
    writer
        .queue(SetForegroundColor(color))?
        .queue(Print(status))?
        .queue(ResetColor)?
        .queue(Print('\n'))?;

    let details = [
        ("degenerate faces", &report.degenerate_faces),
        ("inward faces", &report.inward_faces),
        ("non-unit normals", &report.non_unit_normals),
    ];
    for (what, indices) in details {
        if !indices.is_empty() {
            writer
                .queue(SetForegroundColor(Color::DarkGrey))?
                .queue(Print(format!("    {}: {:?}\n", what, indices)))?
                .queue(ResetColor)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(report: &SolidReport) -> String {
        let mut out = Vec::new();
        write_report(&mut out, "d20", Some(20), report).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_valid_report_line() {
        let text = render(&SolidReport {
            triangle_count: 20,
            ..SolidReport::default()
        });
        assert!(text.contains("ok"));
        assert!(!text.contains("DEFECT"));
        assert_eq!(text.lines().count(), 1);
    }

    #[test]
    fn test_defect_lists_faces() {
        let text = render(&SolidReport {
            triangle_count: 20,
            degenerate_faces: vec![12, 17],
            open_edges: 5,
            ..SolidReport::default()
        });
        assert!(text.contains("DEFECT"));
        assert!(text.contains("degenerate faces: [12, 17]"));
        assert!(!text.contains("inward faces"));
    }

    #[test]
    fn test_header_names_columns() {
        let mut out = Vec::new();
        write_header(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("open edges"));
    }
}
