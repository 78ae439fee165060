//! All admin resource configurations, built once at startup and stored in
//! application state. Nothing registers itself globally; whoever needs the
//! configuration gets it from here.

use crate::admin::config::{AdminFilter, AdminResource};

#[derive(Debug)]
pub struct AdminRegistry {
    resources: Vec<AdminResource>,
}

impl Default for AdminRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl AdminRegistry {
    pub fn new() -> Self {
        let resources = vec![
            AdminResource {
                name: "category",
                list_display: &["title", "slug"],
                list_filters: &[],
                search_fields: &["title", "description"],
                readonly_fields: &["slug"],
                edit_locked_fields: &[],
            },
            AdminResource {
                name: "ingredient",
                list_display: &["title", "slug"],
                list_filters: &[],
                search_fields: &["title"],
                readonly_fields: &["slug"],
                edit_locked_fields: &[],
            },
            AdminResource {
                name: "dish",
                list_display: &["title", "calories", "meal_of_the_day", "slug"],
                list_filters: &[
                    AdminFilter::Choice {
                        field: "meal_of_the_day",
                    },
                    AdminFilter::NumericSlider { field: "calories" },
                    AdminFilter::Related {
                        field: "ingredients",
                    },
                ],
                search_fields: &["title"],
                readonly_fields: &["slug"],
                edit_locked_fields: &[],
            },
            AdminResource {
                name: "daily_meal",
                list_display: &[
                    "title", "dish_1", "dish_2", "dish_3", "dish_4", "dish_5", "calories",
                ],
                list_filters: &[AdminFilter::NumericSlider { field: "calories" }],
                search_fields: &["title"],
                readonly_fields: &["calories"],
                edit_locked_fields: &[],
            },
            AdminResource {
                name: "menu",
                list_display: &[
                    "title",
                    "category",
                    "price_daily",
                    "price_weekly",
                    "price_monthly",
                    "calories_daily",
                ],
                list_filters: &[
                    AdminFilter::Related { field: "category" },
                    AdminFilter::NumericSlider {
                        field: "calories_daily",
                    },
                    AdminFilter::Choice {
                        field: "price_custom",
                    },
                ],
                search_fields: &["title", "description"],
                readonly_fields: &["slug", "calories_daily"],
                edit_locked_fields: &[],
            },
            AdminResource {
                name: "profile",
                list_display: &["first_name", "last_name", "email", "phone"],
                list_filters: &[],
                search_fields: &["first_name", "last_name", "email"],
                readonly_fields: &[],
                edit_locked_fields: &[],
            },
            AdminResource {
                name: "delivery_schedule",
                list_display: &[
                    "delivery_vendor",
                    "delivery_days_per_week",
                    "price_per_delivery",
                ],
                list_filters: &[],
                search_fields: &["delivery_vendor"],
                readonly_fields: &[],
                edit_locked_fields: &[],
            },
            AdminResource {
                name: "subscription",
                list_display: &[
                    "menu",
                    "days",
                    "weekdays_only",
                    "delivery_schedule",
                    "price_menu",
                    "price_delivery",
                    "price_total",
                ],
                list_filters: &[
                    AdminFilter::Related { field: "menu" },
                    AdminFilter::NumericSlider {
                        field: "price_total",
                    },
                    AdminFilter::Related {
                        field: "delivery_vendor",
                    },
                    AdminFilter::NumericSlider {
                        field: "menu_calories_daily",
                    },
                ],
                search_fields: &["menu_title", "menu_description"],
                readonly_fields: &["price_menu", "price_delivery", "price_total"],
                edit_locked_fields: &["menu", "days", "weekdays_only"],
            },
            AdminResource {
                name: "order",
                list_display: &[
                    "profile",
                    "subscription",
                    "data_start",
                    "data_end",
                    "price",
                    "status",
                    "created_at",
                ],
                list_filters: &[
                    AdminFilter::Choice { field: "status" },
                    AdminFilter::NumericSlider { field: "price" },
                    AdminFilter::DateRange {
                        field: "created_at",
                    },
                    AdminFilter::DateRange { field: "data_end" },
                    AdminFilter::Related {
                        field: "delivery_vendor",
                    },
                ],
                search_fields: &["profile_first_name", "profile_last_name"],
                readonly_fields: &["price"],
                edit_locked_fields: &["profile", "subscription", "data_start", "data_end"],
            },
        ];
        Self { resources }
    }

    pub fn all(&self) -> &[AdminResource] {
        &self.resources
    }

    pub fn get(&self, name: &str) -> Option<&AdminResource> {
        self.resources.iter().find(|r| r.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_managed_entity_is_registered() {
        let registry = AdminRegistry::new();
        for name in [
            "category",
            "ingredient",
            "dish",
            "daily_meal",
            "menu",
            "profile",
            "delivery_schedule",
            "subscription",
            "order",
        ] {
            assert!(registry.get(name).is_some(), "missing resource {name}");
        }
        assert!(registry.get("nonexistent").is_none());
    }

    #[test]
    fn subscription_locks_identity_fields_on_edit() {
        let registry = AdminRegistry::new();
        let sub = registry.get("subscription").unwrap();
        let create = sub.readonly_for(false);
        assert_eq!(create, vec!["price_menu", "price_delivery", "price_total"]);
        let edit = sub.readonly_for(true);
        assert!(edit.starts_with(&["menu", "days", "weekdays_only"]));
        assert!(edit.ends_with(&["price_menu", "price_delivery", "price_total"]));
    }

    #[test]
    fn order_locks_parties_and_period_on_edit() {
        let registry = AdminRegistry::new();
        let order = registry.get("order").unwrap();
        assert_eq!(order.readonly_for(false), vec!["price"]);
        assert_eq!(
            order.readonly_for(true),
            vec!["profile", "subscription", "data_start", "data_end", "price"]
        );
    }

    #[test]
    fn subscription_filters_include_both_sliders() {
        let registry = AdminRegistry::new();
        let sub = registry.get("subscription").unwrap();
        assert!(sub.list_filters.contains(&AdminFilter::NumericSlider {
            field: "price_total"
        }));
        assert!(sub.list_filters.contains(&AdminFilter::NumericSlider {
            field: "menu_calories_daily"
        }));
    }
}
