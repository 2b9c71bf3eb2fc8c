//! Generated-header rendering
//!
//! Turns encoded color-code sequences into C header text: one
//! `const uint16_t name[] PROGMEM = { ... };` table per sprite, grouped
//! into files that start with `#pragma once` and a platform include.
//!
//! Output is a pure function of its inputs. Generated headers are
//! committed and diffed, so identical sprites must render to
//! byte-identical text across runs and machines.

use std::fmt::Write;

/// Codes per line in the rendered array literal.
pub const DEFAULT_LINE_WIDTH: usize = 16;

/// How a table declaration is formatted.
///
/// `placement` is the storage-class annotation between the array
/// brackets and the initializer. On AVR/Teensy targets it is `PROGMEM`
/// (place the table in flash, not RAM); other platforms clear it or
/// substitute their own attribute. It is carried as data so the
/// placement semantic survives even where the keyword does not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableFormat {
    /// Codes per line (default 16)
    pub line_width: usize,
    /// Storage-placement annotation, e.g. `PROGMEM`
    pub placement: Option<String>,
}

impl Default for TableFormat {
    fn default() -> Self {
        Self { line_width: DEFAULT_LINE_WIDTH, placement: Some("PROGMEM".to_string()) }
    }
}

/// One encoded sprite, ready to render.
///
/// `source` and `label` feed generated comments only; correctness of
/// the table depends solely on `name`, `codes`, and the dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteTable {
    /// C identifier for the array
    pub name: String,
    /// Human-readable description, rendered as a leading comment
    pub label: Option<String>,
    /// Source image file name, for the provenance comment
    pub source: String,
    pub width: u32,
    pub height: u32,
    /// Row-major color codes, `width * height` of them
    pub codes: Vec<u16>,
}

/// How a generated header file is assembled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderFormat {
    /// Include emitted after `#pragma once`, e.g. `<Arduino.h>`
    pub include: Option<String>,
    /// Banner comment naming the sprite group
    pub banner: Option<String>,
    pub table: TableFormat,
}

impl Default for HeaderFormat {
    fn default() -> Self {
        Self {
            include: Some("<Arduino.h>".to_string()),
            banner: None,
            table: TableFormat::default(),
        }
    }
}

/// Render one table declaration.
///
/// Exactly `line_width` codes per line except possibly the last, each
/// `0x`-prefixed 4-digit uppercase hex, `", "` between codes on a line,
/// a trailing `,` on every line but the last, two-space indent, closed
/// by `};`.
pub fn render_table(sprite: &SpriteTable, format: &TableFormat) -> String {
    let line_width = format.line_width.max(1);
    let mut out = String::new();

    if let Some(label) = &sprite.label {
        let _ = writeln!(out, "// {}", label);
    }
    let _ = writeln!(out, "// {} - {}x{}", sprite.source, sprite.width, sprite.height);

    match &format.placement {
        Some(placement) => {
            let _ = writeln!(out, "const uint16_t {}[] {} = {{", sprite.name, placement);
        }
        None => {
            let _ = writeln!(out, "const uint16_t {}[] = {{", sprite.name);
        }
    }

    for (i, chunk) in sprite.codes.chunks(line_width).enumerate() {
        let rendered: Vec<String> = chunk.iter().map(|c| format!("0x{:04X}", c)).collect();
        out.push_str("  ");
        out.push_str(&rendered.join(", "));
        if (i + 1) * line_width < sprite.codes.len() {
            out.push(',');
        }
        out.push('\n');
    }

    out.push_str("};\n");
    out
}

/// Render a complete header file containing one or more tables.
pub fn render_header(sprites: &[SpriteTable], format: &HeaderFormat) -> String {
    let mut out = String::from("#pragma once\n");
    if let Some(include) = &format.include {
        let _ = writeln!(out, "#include {}", include);
    }
    out.push('\n');

    if let Some(banner) = &format.banner {
        let rule = "=".repeat(77);
        let _ = writeln!(out, "// {}", rule);
        let _ = writeln!(out, "// {}", banner);
        let _ = writeln!(out, "// {}", rule);
        out.push('\n');
    }

    for (i, sprite) in sprites.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&render_table(sprite, &format.table));
    }
    out
}
