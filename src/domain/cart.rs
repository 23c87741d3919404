use super::catalog::MenuItem;

/// A cart entry pairing a menu item with a quantity.
///
/// The line id is the menu item id, so a cart holds at most one line per item.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub line_id: String,
    pub name: String,
    pub price: f64,
    pub quantity: u32,
}

impl CartLine {
    pub fn new(line_id: impl Into<String>, name: impl Into<String>, price: f64, quantity: u32) -> Self {
        Self {
            line_id: line_id.into(),
            name: name.into(),
            price,
            quantity,
        }
    }

    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

/// What a cart mutation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartChange {
    Added,
    Incremented,
    QuantitySet,
    Removed,
    Unchanged,
}

fn add_quantity(line: &CartLine, extra: u32) -> Result<u32, String> {
    line.quantity
        .checked_add(extra)
        .ok_or_else(|| format!("Line {} cannot hold more than {} items", line.line_id, u32::MAX))
}

/// Ordered line items owned by one checkout session.
#[derive(Debug, Clone, PartialEq)]
pub struct Cart {
    pub id: String,
    pub lines: Vec<CartLine>,
}

/// Payload for opening a cart, empty or pre-seeded.
#[derive(Debug, Clone, Default)]
pub struct CartCreate {
    pub lines: Vec<CartLine>,
}

impl Cart {
    /// Builds a cart from seed lines, merging duplicates.
    ///
    /// # Errors
    /// Rejects any seed line with a zero quantity, or duplicates whose
    /// combined quantity overflows.
    pub fn from_lines(id: impl Into<String>, seed: Vec<CartLine>) -> Result<Self, String> {
        let mut cart = Self { id: id.into(), lines: Vec::with_capacity(seed.len()) };
        for line in seed {
            if line.quantity < 1 {
                return Err(format!("Line {} has quantity 0", line.line_id));
            }
            match cart.line_mut(&line.line_id) {
                Some(existing) => existing.quantity = add_quantity(existing, line.quantity)?,
                None => cart.lines.push(line),
            }
        }
        Ok(cart)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn line(&self, line_id: &str) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.line_id == line_id)
    }

    fn line_mut(&mut self, line_id: &str) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|line| line.line_id == line_id)
    }

    /// Adds the item with quantity 1, or increments its line.
    ///
    /// # Errors
    /// Rejects an increment past the largest representable quantity. The cart is left as it was.
    pub fn add_or_increment(&mut self, item: &MenuItem) -> Result<CartChange, String> {
        if let Some(line) = self.line_mut(&item.id) {
            line.quantity = add_quantity(line, 1)?;
            return Ok(CartChange::Incremented);
        }
        self.lines.push(CartLine::new(&item.id, &item.name, item.price, 1));
        Ok(CartChange::Added)
    }

    /// Sets a line's quantity. A quantity below 1 removes the line.
    pub fn set_quantity(&mut self, line_id: &str, quantity: u32) -> CartChange {
        if quantity < 1 {
            return self.remove(line_id);
        }
        match self.line_mut(line_id) {
            Some(line) if line.quantity == quantity => CartChange::Unchanged,
            Some(line) => {
                line.quantity = quantity;
                CartChange::QuantitySet
            }
            None => CartChange::Unchanged,
        }
    }

    pub fn remove(&mut self, line_id: &str) -> CartChange {
        let before = self.lines.len();
        self.lines.retain(|line| line.line_id != line_id);
        if self.lines.len() < before {
            CartChange::Removed
        } else {
            CartChange::Unchanged
        }
    }
}
