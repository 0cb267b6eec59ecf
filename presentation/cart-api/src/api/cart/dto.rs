use poem_openapi::Object;

use business::domain::cart::model::{Cart, CartLine};

use crate::api::notice::Notice;

#[derive(Debug, Clone, Object)]
pub struct UpdateAmountRequest {
    /// Desired quantity; zero or negative values are ignored
    pub amount: i64,
}

#[derive(Debug, Clone, Object)]
pub struct CartLineResponse {
    /// Product identifier
    pub id: u64,
    /// Product title
    pub title: String,
    /// Unit price
    pub price: f64,
    /// Product image URL
    pub image: String,
    /// Quantity in the cart
    pub amount: u32,
    /// Unit price times amount
    pub subtotal: f64,
}

impl From<CartLine> for CartLineResponse {
    fn from(line: CartLine) -> Self {
        Self {
            subtotal: line.subtotal(),
            id: line.id.value(),
            title: line.title,
            price: line.price,
            image: line.image_url,
            amount: line.amount,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CartResponse {
    /// Cart lines in the order they were first added
    pub items: Vec<CartLineResponse>,
    /// Sum of all amounts
    pub total_items: u64,
    /// Sum of all subtotals
    pub total_price: f64,
}

impl From<Cart> for CartResponse {
    fn from(cart: Cart) -> Self {
        let total_items = cart.total_items();
        let total_price = cart.total_price();
        Self {
            items: cart.lines().iter().cloned().map(Into::into).collect(),
            total_items,
            total_price,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CartMutationResponse {
    /// Cart after the operation
    pub cart: CartResponse,
    /// Message to show the shopper, when there is one
    #[oai(skip_serializing_if_is_none)]
    pub notice: Option<Notice>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::shared::value_objects::ProductId;

    #[test]
    fn should_expose_lines_in_cart_order_with_totals() {
        let cart = Cart::from_repository(vec![
            CartLine {
                id: ProductId::new(3),
                title: "Boot".to_string(),
                price: 100.0,
                image_url: "https://example.com/3.jpg".to_string(),
                amount: 2,
            },
            CartLine {
                id: ProductId::new(1),
                title: "Shoe".to_string(),
                price: 50.0,
                image_url: "https://example.com/1.jpg".to_string(),
                amount: 1,
            },
        ]);

        let response = CartResponse::from(cart);

        let ids: Vec<u64> = response.items.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![3, 1]);
        assert_eq!(response.items[0].subtotal, 200.0);
        assert_eq!(response.items[1].image, "https://example.com/1.jpg");
        assert_eq!(response.total_items, 3);
        assert_eq!(response.total_price, 250.0);
    }
}
