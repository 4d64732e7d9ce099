use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartLineItem;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::update_quantity::{
    UpdateCartQuantityParams, UpdateCartQuantityUseCase,
};
use crate::domain::logger::Logger;

pub struct UpdateCartQuantityUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateCartQuantityUseCase for UpdateCartQuantityUseCaseImpl {
    async fn execute(
        &self,
        params: UpdateCartQuantityParams,
    ) -> Result<Option<CartLineItem>, CartError> {
        self.logger.info(&format!(
            "Setting quantity of product {} to {} for customer {}",
            params.product_id, params.quantity, params.customer_id
        ));

        let existing = self
            .repository
            .find_item(&params.customer_id, params.product_id)
            .await?
            .ok_or(CartError::ItemNotFound)?;

        // Removing the last unit removes the line item entirely.
        if params.quantity == 0 {
            self.repository
                .remove_item(&params.customer_id, params.product_id)
                .await?;
            self.logger.info(&format!(
                "Removed product {} from cart of customer {}",
                params.product_id, params.customer_id
            ));
            return Ok(None);
        }

        let updated = CartLineItem::from_repository(existing.product, params.quantity);
        self.repository
            .save_item(&params.customer_id, &updated)
            .await?;

        Ok(Some(updated))
    }
}
