//! Declarative description of how each entity is managed: list columns,
//! filter widgets, searchable fields and which fields an editor may touch.
//! Consumed by the admin list endpoints here and by the rendering frontend
//! via `/admin/resources`.

use serde::Serialize;

/// A list-view filter widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AdminFilter {
    /// Filter by equality on a (possibly related) foreign-key field.
    Related { field: &'static str },
    /// Numeric range filter rendered as a slider; min/max query params.
    NumericSlider { field: &'static str },
    /// Fixed choice set (enum-valued column).
    Choice { field: &'static str },
    /// Date range filter; after/before query params.
    DateRange { field: &'static str },
}

/// Admin configuration for one entity.
#[derive(Debug, Clone, Serialize)]
pub struct AdminResource {
    pub name: &'static str,
    pub list_display: &'static [&'static str],
    pub list_filters: &'static [AdminFilter],
    pub search_fields: &'static [&'static str],
    /// Never editable, created or not (derived/computed columns).
    pub readonly_fields: &'static [&'static str],
    /// Additionally frozen once the record exists.
    pub edit_locked_fields: &'static [&'static str],
}

impl AdminResource {
    /// The full read-only field set for a form: computed fields always, plus
    /// the identity fields when an existing record is being edited.
    pub fn readonly_for(&self, editing: bool) -> Vec<&'static str> {
        let mut fields: Vec<&'static str> = Vec::new();
        if editing {
            fields.extend_from_slice(self.edit_locked_fields);
        }
        fields.extend_from_slice(self.readonly_fields);
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESOURCE: AdminResource = AdminResource {
        name: "subscription",
        list_display: &["menu", "days"],
        list_filters: &[AdminFilter::NumericSlider {
            field: "price_total",
        }],
        search_fields: &["menu_title"],
        readonly_fields: &["price_menu", "price_delivery", "price_total"],
        edit_locked_fields: &["menu", "days", "weekdays_only"],
    };

    #[test]
    fn create_form_only_locks_computed_fields() {
        assert_eq!(
            RESOURCE.readonly_for(false),
            vec!["price_menu", "price_delivery", "price_total"]
        );
    }

    #[test]
    fn edit_form_also_locks_identity_fields() {
        assert_eq!(
            RESOURCE.readonly_for(true),
            vec![
                "menu",
                "days",
                "weekdays_only",
                "price_menu",
                "price_delivery",
                "price_total"
            ]
        );
    }

    #[test]
    fn filters_serialize_with_kind_tag() {
        let v = serde_json::to_value(&RESOURCE.list_filters[0]).unwrap();
        assert_eq!(v["kind"], "numeric_slider");
        assert_eq!(v["field"], "price_total");
    }
}
