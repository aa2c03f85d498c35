//! # Table Rendering
//!
//! Plain ASCII tables for the inventory and for sale receipts.
//!
//! ## Receipt Layout
//! ```text
//! +----------+--------+----------+
//! |    Abarrotes El Inge         |
//! +----------+--------+----------+
//! | Venta #1 · 2026-10-19 14:03  |
//! +----------+--------+----------+
//! | Producto | Precio | Cantidad |
//! +----------+--------+----------+
//! | Milk     |   2.50 |        2 |
//! | Eggs     |   3.00 |        1 |
//! +----------+--------+----------+
//! | Total: $8.00                 |
//! +----------+--------+----------+
//! ```
//!
//! Column widths grow to fit the longest cell, so long product names are
//! never cut off.

use punto_core::{Cart, CoreResult, Inventory};

use crate::config::ConsoleConfig;

/// Width of headings and closing rules between screens.
pub const SCREEN_WIDTH: usize = 55;

/// Screen heading such as `----  Registrar Venta  ----`.
pub fn heading(title: &str) -> String {
    format!("{:-^width$}", format!("  {}  ", title), width = SCREEN_WIDTH)
}

/// Closing rule printed when a screen finishes.
pub fn rule() -> String {
    "-".repeat(SCREEN_WIDTH)
}

#[derive(Debug, Clone, Copy)]
enum Align {
    Left,
    Right,
}

/// Column layout plus rows, rendered with `+`, `-` and `|` borders.
struct Table {
    headers: Vec<&'static str>,
    align: Vec<Align>,
    rows: Vec<Vec<String>>,
}

impl Table {
    fn new(columns: &[(&'static str, Align)]) -> Self {
        Table {
            headers: columns.iter().map(|(header, _)| *header).collect(),
            align: columns.iter().map(|(_, align)| *align).collect(),
            rows: Vec::new(),
        }
    }

    fn push(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Column widths fitting every header and cell, widened so that
    /// `spans` (full-width lines) fit as well.
    fn widths(&self, spans: &[&str]) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let inner = Self::inner_width(&widths);
        let needed = spans.iter().map(|s| s.chars().count()).max().unwrap_or(0);
        if needed > inner {
            if let Some(last) = widths.last_mut() {
                *last += needed - inner;
            }
        }
        widths
    }

    /// Characters between `| ` and ` |` on a full-width line.
    fn inner_width(widths: &[usize]) -> usize {
        widths.iter().sum::<usize>() + 3 * widths.len().saturating_sub(1)
    }

    fn border(widths: &[usize]) -> String {
        let mut line = String::from("+");
        for width in widths {
            line.push_str(&"-".repeat(width + 2));
            line.push('+');
        }
        line
    }

    fn row(&self, widths: &[usize], cells: &[String]) -> String {
        let padded: Vec<String> = cells
            .iter()
            .zip(widths)
            .zip(&self.align)
            .map(|((cell, width), align)| match align {
                Align::Left => format!("{:<width$}", cell, width = *width),
                Align::Right => format!("{:>width$}", cell, width = *width),
            })
            .collect();
        format!("| {} |", padded.join(" | "))
    }

    fn span(widths: &[usize], text: &str, centered: bool) -> String {
        let inner = Self::inner_width(widths);
        if centered {
            format!("| {:^inner$} |", text, inner = inner)
        } else {
            format!("| {:<inner$} |", text, inner = inner)
        }
    }

    fn render(&self, title: &[&str], footer: &[&str]) -> String {
        let spans: Vec<&str> = title.iter().chain(footer).copied().collect();
        let widths = self.widths(&spans);
        let border = Self::border(&widths);
        let headers: Vec<String> = self.headers.iter().map(|h| h.to_string()).collect();

        let mut lines = vec![border.clone()];
        for (i, text) in title.iter().enumerate() {
            lines.push(Self::span(&widths, text, i == 0));
            lines.push(border.clone());
        }
        lines.push(self.row(&widths, &headers));
        lines.push(border.clone());
        for row in &self.rows {
            lines.push(self.row(&widths, row));
        }
        lines.push(border.clone());
        for text in footer {
            lines.push(Self::span(&widths, text, false));
            lines.push(border.clone());
        }

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }
}

/// Renders every inventory entry: barcode, name, price and quantity.
pub fn inventory_table(inventory: &Inventory) -> String {
    let mut table = Table::new(&[
        ("Código de barras", Align::Left),
        ("Nombre", Align::Left),
        ("Precio", Align::Right),
        ("Cantidad", Align::Right),
    ]);
    for (barcode, product) in inventory.list() {
        table.push(vec![
            barcode.to_string(),
            product.name().to_string(),
            product.unit_price().to_decimal_string(),
            product.quantity().to_string(),
        ]);
    }
    table.render(&[], &[])
}

/// Renders one sale as a receipt: store banner, sale number and time, the
/// lines, and the total.
pub fn cart_receipt(
    cart: &Cart,
    sale_number: usize,
    config: &ConsoleConfig,
) -> CoreResult<String> {
    let mut table = Table::new(&[
        ("Producto", Align::Left),
        ("Precio", Align::Right),
        ("Cantidad", Align::Right),
    ]);
    for (_, line) in cart.lines() {
        table.push(vec![
            line.name().to_string(),
            line.unit_price().to_decimal_string(),
            line.quantity().to_string(),
        ]);
    }

    let sale_line = format!(
        "Venta #{} · {} UTC",
        sale_number,
        cart.opened_at().format("%Y-%m-%d %H:%M")
    );
    let total_line = format!("Total: {}", config.format_currency(cart.total_price()?));
    Ok(table.render(
        &[config.store_name.as_str(), sale_line.as_str()],
        &[total_line.as_str()],
    ))
}
