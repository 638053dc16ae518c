//! Create Product Handler

use std::sync::Arc;

use salvo::{http::header::LOCATION, oapi::extract::JsonBody, prelude::*};
use tracing::info;

use crate::{
    extensions::*,
    products::{
        errors::into_status_error,
        models::{ProductRequest, ProductResponse},
    },
    state::State,
};

/// Create Product Handler
///
/// Any `id` in the body is ignored; the store assigns the next one.
#[endpoint(
    tags("products"),
    summary = "Create Product",
    responses(
        (status_code = StatusCode::CREATED, description = "Product created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Malformed body"),
        (status_code = StatusCode::UNPROCESSABLE_ENTITY, description = "Invalid product"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<ProductRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ProductResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let product = state
        .app
        .products
        .create_product(json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/{}", product.id), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    info!(product_id = %product.id, sku = %product.sku, "created product");

    Ok(Json(product.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use roaster_app::domain::products::{
        MockProductsService, ProductsServiceError, data::NewProduct, records::ProductRecord,
        validation,
    };

    use crate::test_helpers::{make_product, products_service};

    use super::*;

    fn make_service(repo: MockProductsService) -> Service {
        products_service(repo, Router::new().post(handler))
    }

    fn latte() -> NewProduct {
        NewProduct {
            name: "Latte".to_owned(),
            description: "Frothy milky coffee".to_owned(),
            price: 2.45,
            sku: "frothy-milky-coffee".to_owned(),
        }
    }

    #[tokio::test]
    async fn test_create_product_success() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_create_product()
            .once()
            .withf(|new| *new == latte())
            .return_once(|_| Ok(make_product(3)));

        repo.expect_list_products().never();
        repo.expect_update_product().never();

        let mut res = TestClient::post("http://example.com/")
            .json(&json!({
                "id": 42,
                "name": "Latte",
                "desc": "Frothy milky coffee",
                "price": 2.45,
                "sku": "frothy-milky-coffee",
            }))
            .send(&make_service(repo))
            .await;

        let body: ProductResponse = res.take_json().await?;
        let location = res.headers().get("location").and_then(|v| v.to_str().ok());

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(location, Some("/3"));
        assert_eq!(body.id, 3);

        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_malformed_json_returns_400() {
        let mut repo = MockProductsService::new();

        repo.expect_create_product().never();
        repo.expect_list_products().never();
        repo.expect_update_product().never();

        let res = TestClient::post("http://example.com/")
            .raw_json("{\"name\": \"Latte\",")
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
    }

    #[tokio::test]
    async fn test_create_product_type_mismatch_returns_400() {
        let mut repo = MockProductsService::new();

        repo.expect_create_product().never();
        repo.expect_list_products().never();
        repo.expect_update_product().never();

        let res = TestClient::post("http://example.com/")
            .json(&json!({ "name": "Latte", "price": "cheap" }))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
    }

    #[tokio::test]
    async fn test_create_invalid_product_returns_422() -> TestResult {
        let invalid = NewProduct {
            name: "ab".to_owned(),
            ..latte()
        };

        let errors = validation::validate(&ProductRecord {
            name: invalid.name.clone(),
            ..make_product(3)
        })
        .err()
        .ok_or("short name should fail validation")?;

        let mut repo = MockProductsService::new();

        repo.expect_create_product()
            .once()
            .withf(move |new| *new == invalid)
            .return_once(move |_| Err(ProductsServiceError::Invalid(errors)));

        repo.expect_list_products().never();
        repo.expect_update_product().never();

        let res = TestClient::post("http://example.com/")
            .json(&json!({
                "name": "ab",
                "desc": "Frothy milky coffee",
                "price": 2.45,
                "sku": "frothy-milky-coffee",
            }))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNPROCESSABLE_ENTITY));

        Ok(())
    }
}
