pub mod render;

use anyhow::{anyhow, bail, Result};
use serde::Serialize;
use std::io::Write;
use tender_core::{Session, SessionError};

pub const HELP: &str = "\
commands:
  search <text>     find offers, e.g. `search cheap and fast padang food`
  add <n> [qty]     put offer #n of the current results in the cart
  buy <n>           buy offer #n right away
  cart              show the cart
  remove <n>        drop line #n from the cart
  checkout          pay for everything in the cart
  history           list previous searches
  help              this text
  quit              leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Search(String),
    Add { card: usize, quantity: u32 },
    Buy(usize),
    Cart,
    Remove(usize),
    Checkout,
    History,
    Help,
    Quit,
}

impl Command {
    /// Parses one input line. Blank lines yield `None`.
    pub fn parse(line: &str) -> Result<Option<Command>> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };
        let mut args = rest.split_whitespace();
        let cmd = match word.to_lowercase().as_str() {
            "search" | "s" => Command::Search(rest.to_string()),
            "add" => {
                let card = position(args.next(), "add")?;
                let quantity = match args.next() {
                    Some(q) => q.parse().map_err(|_| anyhow!("quantity must be a whole number, got {q:?}"))?,
                    None => 1,
                };
                Command::Add { card, quantity }
            }
            "buy" => Command::Buy(position(args.next(), "buy")?),
            "remove" | "rm" => Command::Remove(position(args.next(), "remove")?),
            "cart" => Command::Cart,
            "checkout" => Command::Checkout,
            "history" => Command::History,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            other => bail!("unknown command {other:?}, try `help`"),
        };
        Ok(Some(cmd))
    }
}

/// 1-based number as typed by the user.
fn position(arg: Option<&str>, cmd: &str) -> Result<usize> {
    let arg = arg.ok_or_else(|| anyhow!("usage: {cmd} <n>"))?;
    match arg.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => bail!("{cmd}: expected a number from 1, got {arg:?}"),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Line-oriented front-end over one [`Session`].
pub struct Shell {
    session: Session,
    json: bool,
}

impl Shell {
    pub fn new(session: Session, json: bool) -> Self {
        Self { session, json }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Parses and runs one line. Session refusals are printed as warnings; only
    /// write failures are returned as errors.
    pub fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> Result<Flow> {
        match Command::parse(line) {
            Ok(Some(cmd)) => self.execute(cmd, out),
            Ok(None) => Ok(Flow::Continue),
            Err(e) => {
                writeln!(out, "error: {e}")?;
                Ok(Flow::Continue)
            }
        }
    }

    pub fn execute<W: Write>(&mut self, cmd: Command, out: &mut W) -> Result<Flow> {
        match cmd {
            Command::Search(text) => match self.session.search(&text) {
                Ok(results) => self.show(out, &results, render::results(&results))?,
                Err(e) => warn(out, &e)?,
            },
            Command::Add { card, quantity } => match self.offer_item(card) {
                Some(item) => match self.session.add_to_cart(&item, quantity) {
                    Ok(cart) => {
                        let text = format!("{item} added to cart ({} items)", cart.count);
                        self.show(out, &cart, text)?
                    }
                    Err(e) => warn(out, &e)?,
                },
                None => writeln!(out, "warning: no offer #{card} on screen")?,
            },
            Command::Buy(card) => match self.offer_item(card) {
                Some(item) => match self.session.buy_now(&item) {
                    Ok(receipt) => self.show(out, &receipt, render::purchase(&receipt))?,
                    Err(e) => warn(out, &e)?,
                },
                None => writeln!(out, "warning: no offer #{card} on screen")?,
            },
            Command::Cart => {
                let cart = self.session.cart();
                self.show(out, &cart, render::cart(&cart))?
            }
            Command::Remove(line) => {
                // line 0 can't be typed; map it past the end so it stays a no-op
                let cart = self.session.remove_from_cart(line.checked_sub(1).unwrap_or(usize::MAX));
                self.show(out, &cart, render::cart(&cart))?
            }
            Command::Checkout => match self.session.checkout() {
                Ok(receipt) => self.show(out, &receipt, render::checkout(&receipt))?,
                Err(e) => warn(out, &e)?,
            },
            Command::History => {
                let history = self.session.history();
                self.show(out, &history, render::history(&history))?
            }
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    /// Item name of card `card` (1-based) in the active results.
    fn offer_item(&self, card: usize) -> Option<String> {
        let active = self.session.active()?;
        active.results.get(card.checked_sub(1)?).map(|o| o.product.item.clone())
    }

    fn show<W: Write, T: Serialize>(&self, out: &mut W, value: &T, text: String) -> Result<()> {
        if self.json {
            writeln!(out, "{}", serde_json::to_string(value)?)?;
        } else {
            writeln!(out, "{text}")?;
        }
        Ok(())
    }
}

fn warn<W: Write>(out: &mut W, err: &SessionError) -> Result<()> {
    writeln!(out, "warning: {err}")?;
    Ok(())
}
