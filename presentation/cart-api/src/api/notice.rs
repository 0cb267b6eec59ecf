use poem_openapi::{Enum, Object};

use business::domain::cart::errors::CartError;

/// Cart operation a notice refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartOperation {
    Add,
    Remove,
    UpdateAmount,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Enum)]
#[oai(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Error,
}

/// Toast-style message for the shopper.
#[derive(Debug, Clone, PartialEq, Object)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }

    pub fn removed(title: &str) -> Self {
        Self::success(format!("Item {} removed successfully!", title))
    }

    /// Every failed operation yields exactly one notice. Stock problems are
    /// called out; anything else gets the operation's generic message.
    pub fn for_failure(operation: CartOperation, error: &CartError) -> Self {
        match (operation, error) {
            (_, CartError::StockExceeded) => Self::error("Requested quantity is out of stock"),
            (CartOperation::Add, _) => Self::error("Failed to add product"),
            (CartOperation::Remove, _) => Self::error("Failed to remove product"),
            (CartOperation::UpdateAmount, _) => Self::error("Failed to change product quantity"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::catalog::errors::CatalogError;
    use business::domain::errors::RepositoryError;

    #[test]
    fn should_name_removed_item() {
        let notice = Notice::removed("Shoe");

        assert_eq!(notice.kind, NoticeKind::Success);
        assert!(notice.text.contains("Shoe"));
    }

    #[test]
    fn should_report_stock_for_every_operation() {
        for operation in [CartOperation::Add, CartOperation::UpdateAmount] {
            let notice = Notice::for_failure(operation, &CartError::StockExceeded);
            assert_eq!(notice, Notice::error("Requested quantity is out of stock"));
        }
    }

    #[test]
    fn should_use_generic_add_message_for_upstream_failures() {
        let notice = Notice::for_failure(
            CartOperation::Add,
            &CartError::Catalog(CatalogError::NotFound),
        );

        assert_eq!(notice, Notice::error("Failed to add product"));
    }

    #[test]
    fn should_use_generic_remove_message_for_missing_line() {
        let notice = Notice::for_failure(CartOperation::Remove, &CartError::ProductNotInCart);

        assert_eq!(notice, Notice::error("Failed to remove product"));
    }

    #[test]
    fn should_use_generic_quantity_message_for_storage_failures() {
        let notice = Notice::for_failure(
            CartOperation::UpdateAmount,
            &CartError::Repository(RepositoryError::Persistence),
        );

        assert_eq!(notice, Notice::error("Failed to change product quantity"));
    }
}
