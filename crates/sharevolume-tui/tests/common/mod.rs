#![allow(dead_code)]

// the HTTP responder is shared with the data layer's tests
#[path = "../../../sharevolume-spider/tests/common/responder.rs"]
mod responder;

pub use responder::{dead_relay, Responder};

pub const ACME: &str = r#"{
    "entityName": "ACME CORP",
    "units": { "shares": [
        { "val": 100, "fy": 2021 },
        { "val": 300, "fy": 2022 },
        { "val": 50, "fy": 2019 }
    ]}
}"#;

pub const SNAPSHOT: &str =
    r#"{"entityName":"BIOGEN INC.","max":{"val":146532901,"fy":2021},"min":{"val":144588523,"fy":2023}}"#;
