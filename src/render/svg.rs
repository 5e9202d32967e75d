//! Bare SVG chart output
//!
//! The tile canvas alone, with an XML namespace so the file opens on its
//! own. No legend, tooltip, or page chrome; font styling rides on the
//! elements since there is no stylesheet.

use crate::chart::Chart;
use crate::render::{escape, num};
use std::io::{self, Write};

pub fn write<W: Write>(writer: &mut W, chart: &Chart) -> io::Result<()> {
    writeln!(
        writer,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\">",
        num(chart.width),
        num(chart.height)
    )?;

    for tile in &chart.tiles {
        write!(
            writer,
            "<g transform=\"translate({x}, {y})\">\
<rect data-name=\"{name}\" data-category=\"{category}\" data-value=\"{value}\" \
width=\"{w}\" height=\"{h}\" fill=\"{fill}\"/>\
<text font-family=\"sans-serif\" font-size=\"10\">",
            x = num(tile.rect.x0),
            y = num(tile.rect.y0),
            name = escape(&tile.name),
            category = escape(&tile.category),
            value = num(tile.value),
            w = num(tile.rect.width()),
            h = num(tile.rect.height()),
            fill = tile.color,
        )?;
        for (i, line) in tile.label_lines.iter().enumerate() {
            write!(
                writer,
                "<tspan x=\"4\" y=\"{}\">{}</tspan>",
                13 + i * 10,
                escape(line)
            )?;
        }
        writeln!(writer, "</text></g>")?;
    }

    writeln!(writer, "</svg>")
}
