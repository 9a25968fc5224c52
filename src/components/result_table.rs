use dioxus::prelude::*;

use super::AssessmentRow;
use crate::api::{AssessmentRecord, COLUMN_HEADERS};

#[derive(Props, PartialEq, Clone)]
pub struct ResultTableProps {
    records: Vec<AssessmentRecord>,
}

/// One row per record, in the order the API returned them
#[component]
pub fn ResultTable(props: ResultTableProps) -> Element {
    rsx! {
        div { class: "results-wrapper",
            table { class: "results-table",
                thead {
                    tr {
                        for header in COLUMN_HEADERS {
                            th { "{header}" }
                        }
                    }
                }
                tbody {
                    {props.records.iter().enumerate().map(|(index, record)| {
                        rsx! {
                            AssessmentRow {
                                key: "{index}",
                                record: record.clone()
                            }
                        }
                    })}
                }
            }
        }
    }
}
