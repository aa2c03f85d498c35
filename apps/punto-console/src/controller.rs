//! # Interactive Controller
//!
//! The menu state machine driving a session.
//!
//! ## Screens
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │                         ┌──────────┐                                    │
//! │        ┌───────────────►│   Menu   │◄──────────────┐                    │
//! │        │                └────┬─────┘               │                    │
//! │        │   1 │   2 │   3 │   4 │   5 │       6 / EOF                     │
//! │        │     ▼     ▼     ▼     ▼     ▼             ▼                    │
//! │  AddProduct RemoveProduct ShowInventory RecordSale ListSales   Exit     │
//! │        │          │            │            │          │                │
//! │        └──────────┴────────────┴────────────┴──────────┘                │
//! │                         back to Menu                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Operator mistakes (unparseable numbers, unknown options, unknown
//! barcodes) are reported on the error stream and never end the session.
//! Only a terminal I/O failure escapes [`Console::run`].

use std::io::{BufRead, Write};

use punto_core::{Cart, CoreResult, Money, Product};
use tracing::{debug, info, warn};

use crate::error::{ConsoleError, ConsoleResult};
use crate::prompt::{Continuation, Prompter};
use crate::render;
use crate::state::AppContext;

const MENU: &str = "Menú:
  1) Registrar un nuevo producto
  2) Eliminar un producto
  3) Mostrar productos disponibles
  4) Registrar una venta
  5) Listar ventas recientes
  6) Salir";

/// States of the menu state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Menu,
    AddProduct,
    RemoveProduct,
    ShowInventory,
    RecordSale,
    ListSales,
    Exit,
}

impl Screen {
    /// Maps a menu number to its screen.
    pub fn from_selection(selection: i64) -> Option<Screen> {
        match selection {
            1 => Some(Screen::AddProduct),
            2 => Some(Screen::RemoveProduct),
            3 => Some(Screen::ShowInventory),
            4 => Some(Screen::RecordSale),
            5 => Some(Screen::ListSales),
            6 => Some(Screen::Exit),
            _ => None,
        }
    }

    fn title(self) -> &'static str {
        match self {
            Screen::AddProduct => "Agregar un producto",
            Screen::RemoveProduct => "Eliminar un producto",
            Screen::ShowInventory => "Artículos Disponibles",
            Screen::RecordSale => "Registrar Venta",
            Screen::ListSales => "Ventas Recientes",
            Screen::Menu | Screen::Exit => "Punto de venta",
        }
    }
}

/// One interactive session over a set of streams.
pub struct Console<'a, R, W, E> {
    ctx: &'a mut AppContext,
    prompter: Prompter<R, W, E>,
}

impl<'a, R: BufRead, W: Write, E: Write> Console<'a, R, W, E> {
    pub fn new(ctx: &'a mut AppContext, prompter: Prompter<R, W, E>) -> Self {
        Console { ctx, prompter }
    }

    /// Runs the menu loop until the operator exits or input ends.
    pub fn run(&mut self) -> ConsoleResult<()> {
        if self.ctx.config.clear_screen {
            self.prompter.clear_screen()?;
        }
        let banner = render::heading(&format!(
            "{} v{}",
            Screen::Menu.title(),
            env!("CARGO_PKG_VERSION")
        ));
        writeln!(self.prompter.out(), "{}", banner)?;

        let mut screen = Screen::Menu;
        loop {
            screen = match screen {
                Screen::Menu => self.menu()?,
                Screen::Exit => break,
                other => {
                    debug!(screen = ?other, "Entering screen");
                    let result = self.enter(other);
                    self.finish(result)?
                }
            };
        }

        writeln!(self.prompter.out(), "{}", render::rule())?;
        info!(
            products = self.ctx.inventory.len(),
            sales = self.ctx.ledger.len(),
            "Session ended"
        );
        Ok(())
    }

    /// Shows the menu and reads the next selection.
    fn menu(&mut self) -> ConsoleResult<Screen> {
        writeln!(self.prompter.out(), "{}", MENU)?;
        let line = match self.prompter.read_line("Selecciona una opción: ") {
            Ok(line) => line,
            Err(ConsoleError::EndOfInput) => return Ok(Screen::Exit),
            Err(err) => return Err(err),
        };

        let input = line.trim();
        let selection = match input.parse::<i64>() {
            Ok(selection) => selection,
            Err(_) => {
                self.prompter.report(&ConsoleError::parse("la opción del menú", input))?;
                return Ok(Screen::Menu);
            }
        };

        match Screen::from_selection(selection) {
            Some(screen) => Ok(screen),
            None => {
                self.prompter.report(&ConsoleError::InvalidOption { selection })?;
                Ok(Screen::Menu)
            }
        }
    }

    fn enter(&mut self, screen: Screen) -> ConsoleResult<()> {
        if self.ctx.config.clear_screen {
            self.prompter.clear_screen()?;
        }
        writeln!(self.prompter.out(), "{}", render::heading(screen.title()))?;

        match screen {
            Screen::AddProduct => self.add_products()?,
            Screen::RemoveProduct => self.remove_products()?,
            Screen::ShowInventory => self.show_inventory()?,
            Screen::RecordSale => self.record_sale()?,
            Screen::ListSales => self.list_sales()?,
            Screen::Menu | Screen::Exit => {}
        }

        writeln!(self.prompter.out(), "{}", render::rule())?;
        Ok(())
    }

    /// Decides where to go after a screen: back to the menu, or out when
    /// input ended mid-screen.
    fn finish(&mut self, result: ConsoleResult<()>) -> ConsoleResult<Screen> {
        match result {
            Ok(()) => Ok(Screen::Menu),
            Err(ConsoleError::EndOfInput) => Ok(Screen::Exit),
            Err(err) if err.is_recoverable() => {
                self.prompter.report(&err)?;
                Ok(Screen::Menu)
            }
            Err(err) => Err(err),
        }
    }

    fn ask_continue(&mut self, prompt: &str) -> ConsoleResult<Continuation> {
        self.prompter.ask_continue(prompt, &self.ctx.config.affirmative)
    }

    // =========================================================================
    // Screens
    // =========================================================================

    fn add_products(&mut self) -> ConsoleResult<()> {
        loop {
            let name = self.prompter.read_text("Nombre del producto: ")?;
            let price: Money = self.prompter.read_parsed("Precio del producto: ", "precio")?;
            let quantity: i64 = self.prompter.read_parsed("Cantidad del producto: ", "cantidad")?;
            let barcode = self.prompter.read_token("Código de barras: ")?;

            info!(%barcode, %name, price = %price, quantity, "Product registered");
            self.ctx.inventory.add(barcode, Product::new(name, price, quantity));

            if !self.ask_continue("¿Desea agregar otro producto? (s/n): ")?.should_continue() {
                return Ok(());
            }
        }
    }

    fn remove_products(&mut self) -> ConsoleResult<()> {
        loop {
            let barcode = self.prompter.read_token("Código de barras: ")?;
            match self.ctx.inventory.remove_all(&barcode) {
                Some(product) => info!(%barcode, name = product.name(), "Product removed"),
                None => self.prompter.notice(&format!(
                    "no había un producto con código de barras {}",
                    barcode
                ))?,
            }

            if !self.ask_continue("¿Desea eliminar otro producto? (s/n): ")?.should_continue() {
                return Ok(());
            }
        }
    }

    fn show_inventory(&mut self) -> ConsoleResult<()> {
        let table = render::inventory_table(&self.ctx.inventory);
        write!(self.prompter.out(), "{}", table)?;
        Ok(())
    }

    /// Collects sale lines until the operator stops, then records the cart.
    ///
    /// Lines already sold are recorded even when input ends mid-sale, since
    /// their stock has been deducted; the session then exits.
    fn record_sale(&mut self) -> ConsoleResult<()> {
        let mut cart = Cart::new();
        let input_ended = loop {
            match self.collect_line(&mut cart) {
                Ok(Continuation::Continue) => {}
                Ok(Continuation::Stop) => break false,
                Err(ConsoleError::EndOfInput) => break true,
                Err(err) => return Err(err),
            }
        };

        if cart.is_empty() {
            self.prompter.notice("la venta no tiene productos; no se registró")?;
        } else {
            let sale_number = self.ctx.ledger.len() + 1;
            let receipt = render::cart_receipt(&cart, sale_number, &self.ctx.config);
            info!(sale_number, lines = cart.len(), "Sale recorded");
            self.ctx.ledger.append(cart);
            write!(self.prompter.out(), "{}", receipt?)?;
        }

        if input_ended {
            return Err(ConsoleError::EndOfInput);
        }
        Ok(())
    }

    /// Reads one barcode and quantity, sells the line and asks whether to go on.
    fn collect_line(&mut self, cart: &mut Cart) -> ConsoleResult<Continuation> {
        let barcode = self.prompter.read_token("Código de barras: ")?;
        let quantity: i64 = self.prompter.read_parsed("Cantidad: ", "cantidad")?;

        if let Err(err) = self.sell_line(cart, &barcode, quantity) {
            warn!(%barcode, "Sale line rejected: {}", err);
            self.prompter.report(&ConsoleError::from(err))?;
        }

        self.ask_continue("¿Desea agregar otro producto? (s/n): ")
    }

    /// Moves `quantity` units of `barcode` from the inventory into the cart,
    /// freezing the inventory's name and price on the sale line.
    ///
    /// Either both the cart and the inventory change, or neither does.
    fn sell_line(&mut self, cart: &mut Cart, barcode: &str, quantity: i64) -> CoreResult<()> {
        let line = self.ctx.inventory.get(barcode)?.with_quantity(quantity);
        let mut staged = cart.clone();
        staged.add(barcode, line)?;
        self.ctx.inventory.remove_by_quantity(barcode, quantity)?;
        *cart = staged;
        Ok(())
    }

    fn list_sales(&mut self) -> ConsoleResult<()> {
        if self.ctx.ledger.is_empty() {
            writeln!(self.prompter.out(), "No hay ventas registradas.")?;
            return Ok(());
        }

        for (i, cart) in self.ctx.ledger.all().iter().enumerate() {
            let receipt = render::cart_receipt(cart, i + 1, &self.ctx.config)?;
            writeln!(self.prompter.out(), "{}", receipt)?;
        }
        let total = self.ctx.config.format_currency(self.ctx.ledger.grand_total()?);
        writeln!(self.prompter.out(), "Total vendido: {}", total)?;
        Ok(())
    }
}
