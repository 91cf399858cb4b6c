//! Shopping cart kept in the browser for the lifetime of the session.

use crate::model::product::ProductDto;

#[derive(Clone, Debug, PartialEq)]
pub struct CartLine {
    pub product_id: i32,
    pub name: String,
    pub image: Option<String>,
    /// Unit price in the smallest currency unit.
    pub price: i64,
    pub quantity: u32,
}

impl CartLine {
    pub fn subtotal(&self) -> i64 {
        self.price * i64::from(self.quantity)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Adds `quantity` of a product, merging with an existing line for the same product.
    pub fn add(&mut self, product: &ProductDto, quantity: u32) {
        if quantity == 0 {
            return;
        }

        match self.lines.iter_mut().find(|l| l.product_id == product.id) {
            Some(line) => line.quantity += quantity,
            None => self.lines.push(CartLine {
                product_id: product.id,
                name: product.name.clone(),
                image: product.image.clone(),
                price: product.price,
                quantity,
            }),
        }
    }

    /// Sets the quantity of a line; zero removes it.
    pub fn set_quantity(&mut self, product_id: i32, quantity: u32) {
        if quantity == 0 {
            self.remove(product_id);
        } else if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product_id) {
            line.quantity = quantity;
        }
    }

    pub fn remove(&mut self, product_id: i32) {
        self.lines.retain(|l| l.product_id != product_id);
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Total number of items across all lines.
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    pub fn total(&self) -> i64 {
        self.lines.iter().map(CartLine::subtotal).sum()
    }
}

/// Formats an amount in the smallest currency unit with thousands separators, e.g. `250.000 ₫`.
pub fn format_price(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    let sign = if amount < 0 { "-" } else { "" };
    format!("{}{} ₫", sign, grouped)
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn product(id: i32, price: i64) -> ProductDto {
        ProductDto {
            id,
            category_id: 1,
            name: format!("Product {}", id),
            description: None,
            price,
            image: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn add_merges_lines_of_same_product() {
        let mut cart = Cart::default();
        cart.add(&product(1, 100), 1);
        cart.add(&product(1, 100), 2);
        cart.add(&product(2, 50), 1);

        assert_eq!(cart.lines().len(), 2);
        assert_eq!(cart.item_count(), 4);
        assert_eq!(cart.total(), 350);
    }

    #[test]
    fn zero_quantity_removes_line() {
        let mut cart = Cart::default();
        cart.add(&product(1, 100), 1);

        cart.set_quantity(1, 0);

        assert!(cart.is_empty());
    }

    #[test]
    fn set_quantity_updates_total() {
        let mut cart = Cart::default();
        cart.add(&product(3, 20), 1);

        cart.set_quantity(3, 5);

        assert_eq!(cart.total(), 100);
    }

    #[test]
    fn formats_price_with_separators() {
        assert_eq!(format_price(0), "0 ₫");
        assert_eq!(format_price(999), "999 ₫");
        assert_eq!(format_price(250000), "250.000 ₫");
        assert_eq!(format_price(1234567), "1.234.567 ₫");
    }
}
