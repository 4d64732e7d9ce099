use std::sync::Arc;

use logger::TracingLogger;
use persistence::cart::repository::CartRepositoryPostgres;
use persistence::catalog::repository::ProductCatalogInMemory;
use persistence::customer::repository::CustomerRepositoryPostgres;
use persistence::industry::repository::IndustryRepositoryPostgres;
use persistence::order::repository::OrderRepositoryPostgres;
use persistence::pickup::repository::PickupRequestRepositoryPostgres;

use geocoding::client::OpenCageClient;
use geocoding::location_resolver::LocationResolverOpenCage;
use payments::simulated_processor::PaymentProcessorSimulated;

use business::application::cart::add_item::AddCartItemUseCaseImpl;
use business::application::cart::clear::ClearCartUseCaseImpl;
use business::application::cart::get_summary::GetCartSummaryUseCaseImpl;
use business::application::cart::remove_item::RemoveCartItemUseCaseImpl;
use business::application::cart::update_quantity::UpdateCartQuantityUseCaseImpl;
use business::application::catalog::get_by_id::GetProductByIdUseCaseImpl;
use business::application::catalog::search::SearchProductsUseCaseImpl;
use business::application::customer::register::RegisterCustomerUseCaseImpl;
use business::application::customer::update_profile::UpdateCustomerProfileUseCaseImpl;
use business::application::industry::register::RegisterIndustryUseCaseImpl;
use business::application::industry::update_profile::UpdateIndustryProfileUseCaseImpl;
use business::application::order::get_all::GetAllOrdersUseCaseImpl;
use business::application::order::get_by_id::GetOrderByIdUseCaseImpl;
use business::application::order::place::PlaceOrderUseCaseImpl;
use business::application::order::update_status::UpdateOrderStatusUseCaseImpl;
use business::application::pickup::cancel::CancelPickupRequestUseCaseImpl;
use business::application::pickup::create::CreatePickupRequestUseCaseImpl;
use business::application::pickup::get_all::GetAllPickupRequestsUseCaseImpl;
use business::application::pickup::update_status::UpdatePickupStatusUseCaseImpl;

use crate::config::geocoding_config::GeocodingConfig;
use crate::config::payments_config::PaymentsConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub catalog_api: crate::api::catalog::routes::CatalogApi,
    pub cart_api: crate::api::cart::routes::CartApi,
    pub order_api: crate::api::order::routes::OrderApi,
    pub customer_api: crate::api::customer::routes::CustomerApi,
    pub industry_api: crate::api::industry::routes::IndustryApi,
    pub pickup_api: crate::api::pickup::routes::PickupApi,
}

impl DependencyContainer {
    pub async fn new(pool: sqlx::PgPool) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let catalog = Arc::new(ProductCatalogInMemory::new());
        let cart_repository = Arc::new(CartRepositoryPostgres::new(pool.clone()));
        let order_repository = Arc::new(OrderRepositoryPostgres::new(pool.clone()));
        let customer_repository = Arc::new(CustomerRepositoryPostgres::new(pool.clone()));
        let industry_repository = Arc::new(IndustryRepositoryPostgres::new(pool.clone()));
        let pickup_repository = Arc::new(PickupRequestRepositoryPostgres::new(pool));

        let geocoding_config = GeocodingConfig::from_env();
        let location_resolver = Arc::new(LocationResolverOpenCage::new(OpenCageClient::new(
            geocoding_config.api_key,
        )));

        let payments_config = PaymentsConfig::from_env();
        let payment_processor = Arc::new(PaymentProcessorSimulated::new(
            payments_config.processing_delay,
            payments_config.decline_rate,
        ));

        // Catalog use cases
        let search_use_case = Arc::new(SearchProductsUseCaseImpl {
            catalog: catalog.clone(),
            logger: logger.clone(),
        });
        let get_product_use_case = Arc::new(GetProductByIdUseCaseImpl {
            catalog: catalog.clone(),
            logger: logger.clone(),
        });

        // Cart use cases
        let add_cart_item_use_case = Arc::new(AddCartItemUseCaseImpl {
            catalog,
            repository: cart_repository.clone(),
            logger: logger.clone(),
        });
        let update_cart_quantity_use_case = Arc::new(UpdateCartQuantityUseCaseImpl {
            repository: cart_repository.clone(),
            logger: logger.clone(),
        });
        let remove_cart_item_use_case = Arc::new(RemoveCartItemUseCaseImpl {
            repository: cart_repository.clone(),
            logger: logger.clone(),
        });
        let get_cart_summary_use_case = Arc::new(GetCartSummaryUseCaseImpl {
            repository: cart_repository.clone(),
            logger: logger.clone(),
        });
        let clear_cart_use_case = Arc::new(ClearCartUseCaseImpl {
            repository: cart_repository.clone(),
            logger: logger.clone(),
        });

        // Order use cases
        let place_order_use_case = Arc::new(PlaceOrderUseCaseImpl {
            cart_repository,
            order_repository: order_repository.clone(),
            payments: payment_processor,
            logger: logger.clone(),
        });
        let get_all_orders_use_case = Arc::new(GetAllOrdersUseCaseImpl {
            repository: order_repository.clone(),
            logger: logger.clone(),
        });
        let get_order_use_case = Arc::new(GetOrderByIdUseCaseImpl {
            repository: order_repository.clone(),
            logger: logger.clone(),
        });
        let update_order_status_use_case = Arc::new(UpdateOrderStatusUseCaseImpl {
            repository: order_repository,
            logger: logger.clone(),
        });

        // Customer use cases
        let register_customer_use_case = Arc::new(RegisterCustomerUseCaseImpl {
            repository: customer_repository.clone(),
            location_resolver: location_resolver.clone(),
            logger: logger.clone(),
        });
        let update_customer_profile_use_case = Arc::new(UpdateCustomerProfileUseCaseImpl {
            repository: customer_repository,
            logger: logger.clone(),
        });

        // Industry use cases
        let register_industry_use_case = Arc::new(RegisterIndustryUseCaseImpl {
            repository: industry_repository.clone(),
            location_resolver,
            logger: logger.clone(),
        });
        let update_industry_profile_use_case = Arc::new(UpdateIndustryProfileUseCaseImpl {
            repository: industry_repository.clone(),
            logger: logger.clone(),
        });

        // Pickup request use cases
        let create_pickup_use_case = Arc::new(CreatePickupRequestUseCaseImpl {
            repository: pickup_repository.clone(),
            industry_repository,
            logger: logger.clone(),
        });
        let get_all_pickups_use_case = Arc::new(GetAllPickupRequestsUseCaseImpl {
            repository: pickup_repository.clone(),
            logger: logger.clone(),
        });
        let cancel_pickup_use_case = Arc::new(CancelPickupRequestUseCaseImpl {
            repository: pickup_repository.clone(),
            logger: logger.clone(),
        });
        let update_pickup_status_use_case = Arc::new(UpdatePickupStatusUseCaseImpl {
            repository: pickup_repository,
            logger,
        });

        let catalog_api =
            crate::api::catalog::routes::CatalogApi::new(search_use_case, get_product_use_case);
        let cart_api = crate::api::cart::routes::CartApi::new(
            add_cart_item_use_case,
            update_cart_quantity_use_case,
            remove_cart_item_use_case,
            get_cart_summary_use_case,
            clear_cart_use_case,
        );
        let order_api = crate::api::order::routes::OrderApi::new(
            place_order_use_case,
            get_all_orders_use_case,
            get_order_use_case,
            update_order_status_use_case,
        );
        let customer_api = crate::api::customer::routes::CustomerApi::new(
            register_customer_use_case,
            update_customer_profile_use_case,
        );
        let industry_api = crate::api::industry::routes::IndustryApi::new(
            register_industry_use_case,
            update_industry_profile_use_case,
        );
        let pickup_api = crate::api::pickup::routes::PickupApi::new(
            create_pickup_use_case,
            get_all_pickups_use_case,
            cancel_pickup_use_case,
            update_pickup_status_use_case,
        );

        Ok(Self {
            health_api,
            catalog_api,
            cart_api,
            order_api,
            customer_api,
            industry_api,
            pickup_api,
        })
    }
}
