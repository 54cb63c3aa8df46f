//! Plain text writers for section coordinates. Both formats write six decimal places per value.

use ncollide2d::na::Point2;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes a whitespace delimited two column file. The first line holds `title`, which for the
/// usual airfoil coordinate readers is the section name.
pub fn write_dat<W: Write>(writer: &mut W, title: &str, points: &[Point2<f64>]) -> std::io::Result<()> {
    writeln!(writer, "{}", title)?;
    for p in points.iter() {
        writeln!(writer, "{:.6} {:.6}", p.x, p.y)?;
    }

    Ok(())
}

/// Writes a comma delimited file with an `x,y` header row
pub fn write_csv<W: Write>(writer: &mut W, points: &[Point2<f64>]) -> std::io::Result<()> {
    writeln!(writer, "x,y")?;
    for p in points.iter() {
        writeln!(writer, "{:.6},{:.6}", p.x, p.y)?;
    }

    Ok(())
}

pub fn export_dat_file<P: AsRef<Path>>(path: P, title: &str, points: &[Point2<f64>]) -> std::io::Result<()> {
    let mut file = BufWriter::new(File::create(path)?);
    write_dat(&mut file, title, points)?;
    file.flush()
}

pub fn export_csv_file<P: AsRef<Path>>(path: P, points: &[Point2<f64>]) -> std::io::Result<()> {
    let mut file = BufWriter::new(File::create(path)?);
    write_csv(&mut file, points)?;
    file.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Point2<f64>> {
        vec![
            Point2::new(1.0, 0.00126),
            Point2::new(0.0, 0.0),
            Point2::new(0.5, -0.0441234567),
        ]
    }

    #[test]
    fn test_write_dat() {
        let mut buffer = Vec::new();
        write_dat(&mut buffer, "NACA 2412", &sample()).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(
            "NACA 2412\n1.000000 0.001260\n0.000000 0.000000\n0.500000 -0.044123\n",
            text
        );
    }

    #[test]
    fn test_write_csv() {
        let mut buffer = Vec::new();
        write_csv(&mut buffer, &sample()).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(
            "x,y\n1.000000,0.001260\n0.000000,0.000000\n0.500000,-0.044123\n",
            text
        );
    }

    #[test]
    fn test_empty_contour_writes_header_only() {
        let mut buffer = Vec::new();
        write_csv(&mut buffer, &[]).unwrap();
        assert_eq!("x,y\n", String::from_utf8(buffer).unwrap());
    }

    #[test]
    fn test_export_files() {
        let dir = std::env::temp_dir();
        let dat = dir.join(format!("naca_rs_export_{}.dat", std::process::id()));
        let csv = dir.join(format!("naca_rs_export_{}.csv", std::process::id()));

        export_dat_file(&dat, "test", &sample()).unwrap();
        export_csv_file(&csv, &sample()).unwrap();

        let dat_text = std::fs::read_to_string(&dat).unwrap();
        let csv_text = std::fs::read_to_string(&csv).unwrap();
        assert_eq!(4, dat_text.lines().count());
        assert!(csv_text.starts_with("x,y\n1.000000,0.001260"));

        std::fs::remove_file(dat).unwrap();
        std::fs::remove_file(csv).unwrap();
    }
}
