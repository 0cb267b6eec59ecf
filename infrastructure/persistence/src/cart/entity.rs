use serde::{Deserialize, Serialize};

use business::domain::cart::model::{Cart, CartLine};
use business::domain::shared::value_objects::ProductId;

/// Stored shape of a cart line, matching the catalog's product record plus
/// the chosen amount.
#[derive(Debug, Serialize, Deserialize)]
pub struct CartLineEntity {
    pub id: u64,
    pub title: String,
    pub price: f64,
    pub image: String,
    pub amount: u32,
}

impl CartLineEntity {
    pub fn into_domain(self) -> CartLine {
        CartLine {
            id: ProductId::new(self.id),
            title: self.title,
            price: self.price,
            image_url: self.image,
            amount: self.amount,
        }
    }
}

impl From<&CartLine> for CartLineEntity {
    fn from(line: &CartLine) -> Self {
        Self {
            id: line.id.value(),
            title: line.title.clone(),
            price: line.price,
            image: line.image_url.clone(),
            amount: line.amount,
        }
    }
}

/// Serializes the cart as a JSON array of lines, in cart order.
pub fn serialize_cart(cart: &Cart) -> Result<String, serde_json::Error> {
    let entities: Vec<CartLineEntity> = cart.lines().iter().map(CartLineEntity::from).collect();
    serde_json::to_string(&entities)
}

pub fn deserialize_cart(raw: &str) -> Result<Cart, serde_json::Error> {
    let entities: Vec<CartLineEntity> = serde_json::from_str(raw)?;
    Ok(Cart::from_repository(
        entities.into_iter().map(|e| e.into_domain()).collect(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn should_read_snapshot_written_by_the_storefront() {
        let raw = r#"[
            {"id":1,"title":"Tênis de Caminhada Leve Confortável","price":179.9,"image":"https://example.com/tenis1.jpg","amount":2},
            {"id":3,"title":"Tênis Adidas Duramo Lite 2.0","price":219.9,"image":"https://example.com/tenis3.jpg","amount":1}
        ]"#;

        let cart = deserialize_cart(raw).unwrap();

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.lines()[0].id, ProductId::new(1));
        assert_eq!(cart.lines()[0].amount, 2);
        assert_eq!(cart.lines()[1].image_url, "https://example.com/tenis3.jpg");
    }

    #[test]
    fn should_write_image_field_name() {
        let cart = Cart::from_repository(vec![CartLine {
            id: ProductId::new(5),
            title: "Shoe".to_string(),
            price: 99.5,
            image_url: "https://example.com/5.jpg".to_string(),
            amount: 1,
        }]);

        let raw = serialize_cart(&cart).unwrap();

        assert_eq!(
            raw,
            r#"[{"id":5,"title":"Shoe","price":99.5,"image":"https://example.com/5.jpg","amount":1}]"#
        );
    }

    #[test]
    fn should_reject_snapshot_that_is_not_a_list() {
        assert!(deserialize_cart(r#"{"id":1}"#).is_err());
    }

    fn cart_line() -> impl Strategy<Value = CartLine> {
        (any::<u64>(), ".{0,24}", 0.0f64..100_000.0, "[a-z0-9/:.]{0,32}", 1u32..1_000).prop_map(
            |(id, title, price, image_url, amount)| CartLine {
                id: ProductId::new(id),
                title,
                price,
                image_url,
                amount,
            },
        )
    }

    proptest! {
        #[test]
        fn snapshot_survives_a_restart(lines in proptest::collection::vec(cart_line(), 0..12)) {
            let cart = Cart::from_repository(lines);

            let raw = serialize_cart(&cart).unwrap();
            let restored = deserialize_cart(&raw).unwrap();

            prop_assert_eq!(restored, cart);
        }
    }
}
