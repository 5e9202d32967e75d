//! Standalone HTML page output
//!
//! Emits the whole chart page: heading, description, tile SVG, legend SVG,
//! and the floating tooltip with its hover script. The script mirrors the
//! [`Tooltip`](crate::tooltip::Tooltip) transitions exactly: show and fill
//! on mouseover, follow the pointer on mousemove, hide on mouseout.

use crate::chart::{Chart, Tile};
use crate::dataset::Dataset;
use crate::legend::{Legend, SWATCH_SIZE};
use crate::render::{escape, num};
use crate::tooltip::POINTER_OFFSET_X;
use std::io::{self, Write};

/// Write the full page for a built chart.
pub fn write<W: Write>(writer: &mut W, chart: &Chart) -> io::Result<()> {
    let body = format!(
        "{}\n{}\n<div id=\"tooltip\"></div>",
        chart_svg(chart),
        legend_svg(&chart.legend)
    );
    let script = HOVER_SCRIPT.replace("{{POINTER_OFFSET}}", &num(POINTER_OFFSET_X));
    write_page(writer, &chart.dataset, &body, &script)
}

/// Write the page shell with no chart in it. Used when the dataset fetch
/// fails: the static heading and description still render, the rest of the
/// page stays blank.
pub fn write_empty<W: Write>(writer: &mut W, dataset: &Dataset) -> io::Result<()> {
    write_page(writer, dataset, "", "")
}

fn write_page<W: Write>(
    writer: &mut W,
    dataset: &Dataset,
    body: &str,
    script: &str,
) -> io::Result<()> {
    write!(
        writer,
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>
        body {{
            margin: 0;
            text-align: center;
            font-family: Arial, Helvetica, sans-serif;
        }}
        #title {{
            font-size: 4.5rem;
            font-weight: 700;
            margin-top: 30px;
            margin-bottom: 10px;
        }}
        #description {{
            font-size: 1.6rem;
            margin-bottom: 24px;
        }}
        #legend {{
            margin: 16px auto;
            padding-block: 10px;
            box-sizing: content-box;
        }}
        #legend text {{
            font-size: 1.5rem;
            font-family: sans-serif;
        }}
        #chart text {{
            font-size: 10px;
            font-family: sans-serif;
        }}
        #tooltip {{
            visibility: hidden;
            position: absolute;
            opacity: 0.9;
            background-color: rgba(255, 255, 204, 0.95);
            padding: 10px;
            border-radius: 2px;
            box-shadow: 1px 1px 10px rgba(128, 128, 128, 0.6);
            font-size: 12px;
            font-family: Arial;
            text-align: center;
        }}
    </style>
</head>
<body>
<main>
    <h1 id="title">{title}</h1>
    <p id="description">{description}</p>
    {body}
</main>
{script}
</body>
</html>
"#,
        title = escape(dataset.title),
        description = escape(dataset.description),
        body = body,
        script = script,
    )
}

// The script reads tile data straight from the rect's data- attributes, so
// tooltip content always matches the markup.
const HOVER_SCRIPT: &str = r#"<script>
    const tooltip = document.getElementById('tooltip');
    document.querySelectorAll('#chart > g').forEach(cell => {
        const tile = cell.querySelector('.tile');
        cell.addEventListener('mouseover', () => {
            tooltip.style.visibility = 'visible';
            tooltip.innerHTML = `Name: ${tile.dataset.name}<br>Category: ${tile.dataset.category}<br>Value: ${tile.dataset.value}`;
            tooltip.setAttribute('data-value', tile.dataset.value);
        });
        cell.addEventListener('mousemove', e => {
            tooltip.style.left = `${e.pageX + {{POINTER_OFFSET}}}px`;
            tooltip.style.top = `${e.pageY - tooltip.offsetHeight / 2}px`;
        });
        cell.addEventListener('mouseout', () => {
            tooltip.style.visibility = 'hidden';
        });
    });
</script>"#;

fn chart_svg(chart: &Chart) -> String {
    let mut cells = String::new();
    for tile in &chart.tiles {
        cells.push_str(&cell_markup(tile));
    }
    format!(
        "<svg id=\"chart\" width=\"{}\" height=\"{}\">\n{}</svg>",
        num(chart.width),
        num(chart.height),
        cells
    )
}

fn cell_markup(tile: &Tile) -> String {
    let mut tspans = String::new();
    for (i, line) in tile.label_lines.iter().enumerate() {
        tspans.push_str(&format!(
            "<tspan x=\"4\" y=\"{}\">{}</tspan>",
            13 + i * 10,
            escape(line)
        ));
    }
    format!(
        "<g transform=\"translate({x}, {y})\">\
<rect class=\"tile\" data-name=\"{name}\" data-category=\"{category}\" data-value=\"{value}\" \
width=\"{w}\" height=\"{h}\" fill=\"{fill}\"></rect>\
<text>{tspans}</text></g>\n",
        x = num(tile.rect.x0),
        y = num(tile.rect.y0),
        name = escape(&tile.name),
        category = escape(&tile.category),
        value = num(tile.value),
        w = num(tile.rect.width()),
        h = num(tile.rect.height()),
        fill = tile.color,
        tspans = tspans,
    )
}

fn legend_svg(legend: &Legend) -> String {
    let mut entries = String::new();
    for entry in &legend.entries {
        entries.push_str(&format!(
            "<g transform=\"translate({x}, {y})\">\
<rect class=\"legend-item\" width=\"{s}\" height=\"{s}\" fill=\"{fill}\"></rect>\
<text x=\"{tx}\" y=\"{ty}\">{label}</text></g>\n",
            x = num(entry.x),
            y = num(entry.y),
            s = num(SWATCH_SIZE),
            fill = entry.color,
            tx = num(SWATCH_SIZE + 3.0),
            ty = num(SWATCH_SIZE - 2.0),
            label = escape(&entry.category),
        ));
    }
    format!(
        "<svg id=\"legend\" width=\"500\" height=\"{}\">\n<g transform=\"translate(60, 0)\">\n{}</g>\n</svg>",
        num(legend.height),
        entries
    )
}
