use poem_openapi::Tags;

#[derive(Debug, Tags)]
pub enum ApiTags {
    Health,
    Products,
    Cart,
    Orders,
    Customers,
    Industries,
    PickupRequests,
}
