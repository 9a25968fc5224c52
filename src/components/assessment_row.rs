use dioxus::prelude::*;

use crate::api::AssessmentRecord;

#[derive(Props, PartialEq, Clone)]
pub struct AssessmentRowProps {
    record: AssessmentRecord,
}

#[component]
pub fn AssessmentRow(props: AssessmentRowProps) -> Element {
    let [name, duration, test_type, remote_testing, _] = props.record.columns();
    let link = props.record.link();

    rsx! {
        tr { class: "assessment-row",
            td { class: "assessment-name", "{name}" }
            td { "{duration}" }
            td { "{test_type}" }
            td { "{remote_testing}" }
            td {
                a {
                    class: "assessment-link",
                    href: "{link.href}",
                    target: link.target,
                    rel: link.rel,
                    "{link.label}"
                }
            }
        }
    }
}
