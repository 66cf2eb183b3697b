#![allow(dead_code)]

mod responder;

pub use responder::{dead_relay, Responder};

pub const BIOGEN: &str = r#"{
    "cik": 875045,
    "taxonomy": "dei",
    "tag": "EntityCommonStockSharesOutstanding",
    "entityName": "BIOGEN INC.",
    "units": {
        "shares": [
            { "end": "2019-01-31", "val": 197229050, "fy": 2018, "fp": "FY", "form": "10-K" },
            { "end": "2021-01-29", "val": 153145808, "fy": 2020, "fp": "FY", "form": "10-K" },
            { "end": "2021-04-23", "val": 150207598, "fy": 2021, "fp": "Q1", "form": "10-Q" },
            { "end": "2022-01-28", "val": 146532901, "fy": 2021, "fp": "FY", "form": "10-K" },
            { "end": "2023-01-31", "val": 144588523, "fy": 2022, "fp": "FY", "form": "10-K" },
            { "end": "2024-01-26", "val": 145257051, "fy": 2023, "fp": "FY", "form": "10-K" }
        ]
    }
}"#;
