//! Canned ThoughtSpot API responses for testing

#![allow(dead_code)] // Not every test file uses every fixture

pub const LIVEBOARD_GUID: &str = "d084c256-e284-4fc4-b80c-111cb606449a";
pub const LIVEBOARD_NAME: &str = "Sales Performance";

pub const VIZ_REVENUE: &str = "4b64be48-6a29-4d28-9d2e-5c1f2e1d0a11";
pub const VIZ_UNITS: &str = "a7e3b9f0-1c2d-4e5f-8a9b-0c1d2e3f4a5b";

/// `metadata/search` hit for the sample liveboard
pub fn search_hit_json() -> serde_json::Value {
    serde_json::json!([
        {
            "metadata_id": LIVEBOARD_GUID,
            "metadata_name": LIVEBOARD_NAME,
            "metadata_type": "LIVEBOARD",
            "dependent_objects": null,
            "incomplete_objects": null,
            "metadata_detail": null,
            "metadata_header": {"id": LIVEBOARD_GUID, "name": LIVEBOARD_NAME},
            "visualization_headers": null
        }
    ])
}

/// `metadata/liveboard/sql` for the sample liveboard
pub fn liveboard_sql_json() -> serde_json::Value {
    serde_json::json!({
        "metadata_id": LIVEBOARD_GUID,
        "metadata_name": LIVEBOARD_NAME,
        "metadata_type": "LIVEBOARD",
        "sql_queries": [
            {
                "metadata_id": VIZ_REVENUE,
                "metadata_name": "Revenue by region",
                "sql_query": "select region, sum(revenue) from sales group by region"
            },
            {
                "metadata_id": VIZ_UNITS,
                "metadata_name": "Units sold",
                "sql_query": "select product, count(*) from sales where year = 2023 group by product"
            }
        ]
    })
}
