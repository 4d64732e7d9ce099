use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, param::Query, payload::Json};

use business::domain::catalog::model::ProductCategory;
use business::domain::catalog::use_cases::get_by_id::GetProductByIdUseCase;
use business::domain::catalog::use_cases::search::{SearchProductsParams, SearchProductsUseCase};

use crate::api::catalog::dto::ProductResponse;
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct CatalogApi {
    search_use_case: Arc<dyn SearchProductsUseCase>,
    get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
}

impl CatalogApi {
    pub fn new(
        search_use_case: Arc<dyn SearchProductsUseCase>,
        get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
    ) -> Self {
        Self {
            search_use_case,
            get_by_id_use_case,
        }
    }
}

/// Product catalog API
///
/// Read-only endpoints over the static product catalog.
#[OpenApi]
impl CatalogApi {
    /// List products
    ///
    /// Returns the catalog, optionally narrowed by a search term (matched
    /// against name and description) and a category.
    #[oai(path = "/products", method = "get", tag = "ApiTags::Products")]
    async fn search(
        &self,
        search: Query<Option<String>>,
        category: Query<Option<String>>,
    ) -> SearchProductsResponse {
        let category = match &category.0 {
            Some(raw) => match raw.parse::<ProductCategory>() {
                Ok(parsed) => Some(parsed),
                Err(_) => {
                    return SearchProductsResponse::BadRequest(Json(ErrorResponse {
                        name: "ValidationError".to_string(),
                        message: "catalog.unknown_category".to_string(),
                    }));
                }
            },
            None => None,
        };

        match self
            .search_use_case
            .execute(SearchProductsParams {
                term: search.0,
                category,
            })
            .await
        {
            Ok(products) => {
                let responses: Vec<ProductResponse> =
                    products.into_iter().map(|p| p.into()).collect();
                SearchProductsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                SearchProductsResponse::InternalError(json)
            }
        }
    }

    /// Get a product
    ///
    /// Returns the full detail for one catalog entry.
    #[oai(path = "/products/:id", method = "get", tag = "ApiTags::Products")]
    async fn get_by_id(&self, id: Path<u32>) -> GetProductResponse {
        match self.get_by_id_use_case.execute(id.0).await {
            Ok(product) => GetProductResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetProductResponse::NotFound(json),
                    _ => GetProductResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum SearchProductsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ProductResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
