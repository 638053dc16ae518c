//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*};

use roaster_app::{
    context::AppContext,
    domain::products::{MockProductsService, records::ProductRecord},
};

use crate::state::State;

pub(crate) fn make_product(id: u64) -> ProductRecord {
    ProductRecord {
        id: id.into(),
        name: "Latte".to_owned(),
        description: "Frothy milky coffee".to_owned(),
        price: 2.45,
        sku: "frothy-milky-coffee".to_owned(),
        created_at: None,
        updated_at: None,
        deleted_at: None,
    }
}

pub(crate) fn state_with_products(products: MockProductsService) -> Arc<State> {
    State::from_app_context(AppContext::new(Arc::new(products)))
}

pub(crate) fn products_service(products: MockProductsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_products(products)))
            .push(route),
    )
}
