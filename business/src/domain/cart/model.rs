use std::collections::HashSet;

use crate::domain::catalog::model::Product;
use crate::domain::shared::value_objects::ProductId;

/// One product's entry in the cart.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub id: ProductId,
    pub title: String,
    pub price: f64,
    pub image_url: String,
    pub amount: u32,
}

impl CartLine {
    /// A fresh line for a product that was not in the cart yet.
    pub fn from_product(product: Product) -> Self {
        Self {
            id: product.id,
            title: product.title,
            price: product.price,
            image_url: product.image_url,
            amount: 1,
        }
    }

    pub fn subtotal(&self) -> f64 {
        self.price * f64::from(self.amount)
    }
}

/// Ordered list of cart lines, at most one per product.
///
/// Lines keep the order in which their products were first added.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Constructor for a snapshot read back from storage.
    ///
    /// Lines with a zero amount and repeated product ids are dropped; the
    /// first occurrence of an id wins.
    pub fn from_repository(lines: Vec<CartLine>) -> Self {
        let mut seen = HashSet::new();
        let lines = lines
            .into_iter()
            .filter(|line| line.amount > 0 && seen.insert(line.id))
            .collect();
        Self { lines }
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn find(&self, product_id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.id == product_id)
    }

    /// Sum of the amounts of every line.
    pub fn total_items(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.amount)).sum()
    }

    pub fn total_price(&self) -> f64 {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    /// Adds one unit to an existing line. Returns false when the product is
    /// not in the cart.
    pub fn increment(&mut self, product_id: ProductId) -> bool {
        match self.lines.iter_mut().find(|line| line.id == product_id) {
            Some(line) => {
                line.amount = line.amount.saturating_add(1);
                true
            }
            None => false,
        }
    }

    /// Appends a line at the end. Returns false, leaving the cart untouched,
    /// when a line for the same product already exists.
    pub fn append(&mut self, line: CartLine) -> bool {
        if line.amount == 0 || self.find(line.id).is_some() {
            return false;
        }
        self.lines.push(line);
        true
    }

    /// Sets the amount of an existing line to exactly `amount`.
    pub fn set_amount(&mut self, product_id: ProductId, amount: u32) -> bool {
        if amount == 0 {
            return false;
        }
        match self.lines.iter_mut().find(|line| line.id == product_id) {
            Some(line) => {
                line.amount = amount;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, product_id: ProductId) -> Option<CartLine> {
        let index = self.lines.iter().position(|line| line.id == product_id)?;
        Some(self.lines.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn line(id: u64, title: &str, amount: u32) -> CartLine {
        CartLine {
            id: ProductId::new(id),
            title: title.to_string(),
            price: 179.9,
            image_url: format!("https://images.example.com/{}.jpg", id),
            amount,
        }
    }

    fn ids(cart: &Cart) -> Vec<u64> {
        cart.lines().iter().map(|l| l.id.value()).collect()
    }

    #[test]
    fn should_start_empty() {
        let cart = Cart::new();

        assert!(cart.is_empty());
        assert_eq!(cart.total_items(), 0);
    }

    #[test]
    fn should_create_line_with_amount_one_from_product() {
        let product = Product {
            id: ProductId::new(1),
            title: "Tênis de Caminhada Leve Confortável".to_string(),
            price: 179.9,
            image_url: "https://images.example.com/1.jpg".to_string(),
        };

        let line = CartLine::from_product(product);

        assert_eq!(line.amount, 1);
        assert_eq!(line.title, "Tênis de Caminhada Leve Confortável");
    }

    #[test]
    fn should_append_new_line_at_the_end() {
        let mut cart = Cart::from_repository(vec![line(1, "Shoe", 1)]);

        assert!(cart.append(line(2, "Sneaker", 1)));

        assert_eq!(ids(&cart), vec![1, 2]);
    }

    #[test]
    fn should_refuse_duplicate_line() {
        let mut cart = Cart::from_repository(vec![line(1, "Shoe", 3)]);

        assert!(!cart.append(line(1, "Shoe", 1)));

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.find(ProductId::new(1)).unwrap().amount, 3);
    }

    #[test]
    fn should_increment_existing_line() {
        let mut cart = Cart::from_repository(vec![line(1, "Shoe", 1)]);

        assert!(cart.increment(ProductId::new(1)));

        assert_eq!(cart.find(ProductId::new(1)).unwrap().amount, 2);
    }

    #[test]
    fn should_not_increment_missing_line() {
        let mut cart = Cart::new();

        assert!(!cart.increment(ProductId::new(9)));
        assert!(cart.is_empty());
    }

    #[test]
    fn should_set_amount_absolutely() {
        let mut cart = Cart::from_repository(vec![line(1, "Shoe", 4)]);

        assert!(cart.set_amount(ProductId::new(1), 2));

        assert_eq!(cart.find(ProductId::new(1)).unwrap().amount, 2);
    }

    #[test]
    fn should_reject_zero_amount() {
        let mut cart = Cart::from_repository(vec![line(1, "Shoe", 4)]);

        assert!(!cart.set_amount(ProductId::new(1), 0));

        assert_eq!(cart.find(ProductId::new(1)).unwrap().amount, 4);
    }

    #[test]
    fn should_remove_line_and_keep_order_of_the_rest() {
        let mut cart = Cart::from_repository(vec![
            line(1, "Shoe", 1),
            line(2, "Sneaker", 2),
            line(3, "Boot", 1),
        ]);

        let removed = cart.remove(ProductId::new(2));

        assert_eq!(removed.unwrap().title, "Sneaker");
        assert_eq!(ids(&cart), vec![1, 3]);
    }

    #[test]
    fn should_return_none_when_removing_missing_line() {
        let mut cart = Cart::from_repository(vec![line(1, "Shoe", 1)]);

        assert!(cart.remove(ProductId::new(2)).is_none());
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn should_sum_amounts_and_prices() {
        let cart = Cart::from_repository(vec![line(1, "Shoe", 2), line(2, "Sneaker", 3)]);

        assert_eq!(cart.total_items(), 5);
        assert!((cart.total_price() - 179.9 * 5.0).abs() < 1e-9);
    }

    #[test]
    fn should_drop_duplicates_and_empty_lines_from_snapshot() {
        let cart = Cart::from_repository(vec![
            line(1, "Shoe", 1),
            line(2, "Sneaker", 0),
            line(1, "Shoe again", 5),
            line(3, "Boot", 2),
        ]);

        assert_eq!(ids(&cart), vec![1, 3]);
        assert_eq!(cart.find(ProductId::new(1)).unwrap().title, "Shoe");
    }

    proptest! {
        #[test]
        fn snapshot_lines_are_unique_and_keep_first_seen_order(
            raw in proptest::collection::vec((0u64..20, 0u32..5), 0..40)
        ) {
            let lines: Vec<CartLine> = raw
                .iter()
                .map(|(id, amount)| line(*id, "Item", *amount))
                .collect();

            let cart = Cart::from_repository(lines);

            let mut expected = Vec::new();
            for (id, amount) in &raw {
                if *amount > 0 && !expected.contains(id) {
                    expected.push(*id);
                }
            }
            prop_assert_eq!(ids(&cart), expected);
        }
    }
}
