use std::sync::Arc;

use catalog::catalog_service::CatalogServiceHttp;
use catalog::client::CatalogClient;
use logger::TracingLogger;
use persistence::cart::repository::CartRepositoryLocalStorage;

use business::application::cart::add_product::AddProductUseCaseImpl;
use business::application::cart::get_cart::GetCartUseCaseImpl;
use business::application::cart::remove_product::RemoveProductUseCaseImpl;
use business::application::cart::store::CartStore;
use business::application::cart::update_amount::UpdateProductAmountUseCaseImpl;

use crate::config::app_config::AppConfig;
use crate::config::storage_config;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub cart_api: crate::api::cart::routes::CartApi,
}

impl DependencyContainer {
    pub async fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let local_storage = storage_config::init_local_storage(&config.storage).await?;
        let cart_repository = Arc::new(CartRepositoryLocalStorage::new(
            local_storage,
            config.storage.key.clone(),
        ));

        let catalog_client =
            CatalogClient::new(config.catalog.base_url.clone(), config.catalog.timeout);
        let catalog_service = Arc::new(CatalogServiceHttp::new(catalog_client));

        // Cart state, restored from the last snapshot
        let store = Arc::new(CartStore::load(cart_repository, logger.clone()).await?);

        // Cart use cases
        let get_cart_use_case = Arc::new(GetCartUseCaseImpl {
            store: store.clone(),
        });
        let add_product_use_case = Arc::new(AddProductUseCaseImpl {
            store: store.clone(),
            catalog: catalog_service.clone(),
            logger: logger.clone(),
        });
        let remove_product_use_case = Arc::new(RemoveProductUseCaseImpl {
            store: store.clone(),
            logger: logger.clone(),
        });
        let update_amount_use_case = Arc::new(UpdateProductAmountUseCaseImpl {
            store,
            catalog: catalog_service,
            logger,
        });

        let cart_api = crate::api::cart::routes::CartApi::new(
            get_cart_use_case,
            add_product_use_case,
            remove_product_use_case,
            update_amount_use_case,
        );

        Ok(Self {
            health_api,
            cart_api,
        })
    }
}
