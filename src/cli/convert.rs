//! Single-sprite convert command

use std::path::Path;
use std::process::ExitCode;

use super::{EXIT_ERROR, EXIT_SUCCESS};
use crate::codec::encode;
use crate::emit::{render_header, render_table, HeaderFormat, SpriteTable, TableFormat};
use crate::grid::{extract, Region};
use crate::import::load_image;
use crate::output::{convert_output_path, write_header};
use crate::resample::resample;

/// Parse an atlas crop from "left,top,right,bottom".
pub fn parse_region(s: &str) -> Result<Region, String> {
    let parts: Vec<&str> = s.split(',').collect();
    if parts.len() != 4 {
        return Err(format!("expected left,top,right,bottom, got '{}'", s));
    }
    let mut bounds = [0u32; 4];
    for (slot, part) in bounds.iter_mut().zip(&parts) {
        *slot = part
            .trim()
            .parse()
            .map_err(|_| format!("'{}' is not a pixel coordinate", part))?;
    }
    let [left, top, right, bottom] = bounds;
    if left >= right || top >= bottom {
        return Err(format!("region '{}' is empty", s));
    }
    Ok(Region::new(left, top, right, bottom))
}

/// Run the convert command
pub fn run_convert(
    input: &Path,
    width: u32,
    height: u32,
    name: &str,
    output: Option<&Path>,
    label: Option<String>,
    region: Option<Region>,
    placement: &str,
    line_width: usize,
    header: bool,
) -> ExitCode {
    if !crate::config::is_c_identifier(name) {
        eprintln!("Error: '{}' is not a valid C identifier", name);
        return ExitCode::from(EXIT_ERROR);
    }

    let table = match convert_one(input, width, height, name, label, region) {
        Ok(table) => table,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let table_format = TableFormat {
        line_width: line_width.max(1),
        placement: (!placement.is_empty()).then(|| placement.to_string()),
    };
    let text = if header {
        let format = HeaderFormat { banner: None, table: table_format, ..HeaderFormat::default() };
        render_header(std::slice::from_ref(&table), &format)
    } else {
        render_table(&table, &table_format)
    };

    match convert_output_path(name, output) {
        Some(path) => {
            if let Err(e) = write_header(&path, &text) {
                eprintln!("Error: {}", e);
                return ExitCode::from(EXIT_ERROR);
            }
            println!("[OK] {} -> {}", input.display(), path.display());
        }
        None => print!("{}", text),
    }

    ExitCode::from(EXIT_SUCCESS)
}

fn convert_one(
    input: &Path,
    width: u32,
    height: u32,
    name: &str,
    label: Option<String>,
    region: Option<Region>,
) -> Result<SpriteTable, Box<dyn std::error::Error>> {
    let grid = load_image(input)?;
    let grid = extract(&grid, region)?;
    let grid = resample(&grid, width, height)?;
    let codes = encode(&grid);

    let source = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| input.display().to_string());

    Ok(SpriteTable {
        name: name.to_string(),
        label,
        source,
        width: grid.width(),
        height: grid.height(),
        codes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_region_accepts_bounds() {
        let region = parse_region("0, 0, 512, 512").unwrap();
        assert_eq!(region, Region::new(0, 0, 512, 512));
    }

    #[test]
    fn test_parse_region_rejects_wrong_arity() {
        assert!(parse_region("1,2,3").is_err());
        assert!(parse_region("1,2,3,4,5").is_err());
    }

    #[test]
    fn test_parse_region_rejects_empty_bounds() {
        assert!(parse_region("10,0,10,8").is_err());
        assert!(parse_region("0,8,8,8").is_err());
    }

    #[test]
    fn test_parse_region_rejects_garbage() {
        assert!(parse_region("a,b,c,d").is_err());
    }
}
