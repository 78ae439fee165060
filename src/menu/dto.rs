use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct DailyMealRequest {
    pub title: String,
    pub dish_1: Option<Uuid>,
    pub dish_2: Option<Uuid>,
    pub dish_3: Option<Uuid>,
    pub dish_4: Option<Uuid>,
    pub dish_5: Option<Uuid>,
}

impl DailyMealRequest {
    pub fn dish_slots(&self) -> [Option<Uuid>; 5] {
        [
            self.dish_1,
            self.dish_2,
            self.dish_3,
            self.dish_4,
            self.dish_5,
        ]
    }
}

#[derive(Debug, Deserialize)]
pub struct MenuRequest {
    pub title: String,
    pub description: String,
    pub category_id: Option<Uuid>,
    #[serde(default)]
    pub price_custom: bool,
    pub price_daily: Decimal,
    /// Only honored when `price_custom` is set; otherwise derived.
    #[serde(default)]
    pub price_weekly: Decimal,
    #[serde(default)]
    pub price_monthly: Decimal,
    pub day_1: Uuid,
    pub day_2: Uuid,
    pub day_3: Uuid,
    pub day_4: Uuid,
    pub day_5: Uuid,
    pub day_6: Uuid,
    pub day_7: Uuid,
}

impl MenuRequest {
    pub fn day_slots(&self) -> [Uuid; 7] {
        [
            self.day_1, self.day_2, self.day_3, self.day_4, self.day_5, self.day_6, self.day_7,
        ]
    }
}
