use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

/// Body of a 404 or 500 response.
#[derive(ToSchema)]
pub struct ErrorDoc { pub error: String }

/// Body of a rejected write.
#[derive(ToSchema)]
pub struct ErrorsDoc { pub errors: Vec<String> }

#[derive(ToSchema)]
pub struct RestaurantSummaryDoc { pub id: i32, pub name: String, pub address: String }

#[derive(ToSchema)]
pub struct PizzaSummaryDoc { pub id: i32, pub name: String, pub ingredients: String }

#[derive(ToSchema)]
pub struct RestaurantPizzaEntryDoc { pub id: i32, pub price: i32, pub pizza: PizzaSummaryDoc }

#[derive(ToSchema)]
pub struct RestaurantDetailDoc {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub restaurant_pizzas: Vec<RestaurantPizzaEntryDoc>,
}

#[derive(ToSchema)]
pub struct RestaurantPizzaCreatedDoc {
    pub id: i32,
    pub price: i32,
    pub restaurant_id: i32,
    pub pizza_id: i32,
    pub pizza: PizzaSummaryDoc,
    pub restaurant: RestaurantSummaryDoc,
}

/// Name is trimmed and needs 3+ characters, address 5+.
#[derive(ToSchema)]
pub struct NewRestaurantDoc { pub name: String, pub address: String }

/// Name and ingredients are trimmed and need 4+ characters each.
#[derive(ToSchema)]
pub struct NewPizzaDoc { pub name: String, pub ingredients: String }

#[derive(ToSchema)]
pub struct NewRestaurantPizzaDoc {
    pub pizza_id: i32,
    pub restaurant_id: i32,
    /// 1 to 30 inclusive
    pub price: i32,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::restaurants::list,
        crate::routes::restaurants::get,
        crate::routes::restaurants::create,
        crate::routes::restaurants::delete,
        crate::routes::pizzas::list,
        crate::routes::pizzas::create,
        crate::routes::pizzas::delete,
        crate::routes::restaurant_pizzas::create,
    ),
    components(
        schemas(
            HealthResponse,
            ErrorDoc,
            ErrorsDoc,
            RestaurantSummaryDoc,
            PizzaSummaryDoc,
            RestaurantPizzaEntryDoc,
            RestaurantDetailDoc,
            RestaurantPizzaCreatedDoc,
            NewRestaurantDoc,
            NewPizzaDoc,
            NewRestaurantPizzaDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "restaurants"),
        (name = "pizzas"),
        (name = "restaurant_pizzas")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();
        for expected in ["/health", "/restaurants", "/restaurants/{id}", "/pizzas", "/pizzas/{id}", "/restaurant_pizzas"] {
            assert!(paths.contains(&expected), "missing {expected}");
        }
    }
}
