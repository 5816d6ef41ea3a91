//! PDF document definitions for the act and roster downloads.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendering is delegated to the browser-global `pdfMake` script loaded by the
//! page shell. This module only builds its JSON document definition and hands
//! it over; the helper's output is not inspected.

#[cfg(test)]
#[path = "pdf_test.rs"]
mod pdf_test;

use serde_json::{Value, json};

use crate::net::types::{Committee, Enrollment, Member};
use crate::state::members::CommitteeRoster;

const STRIPE_COLOR: &str = "#dee2e6";
const SIGNATURE_LINE: &str = "________________________________";

#[derive(Debug, thiserror::Error)]
pub enum PdfError {
    #[error("document serialization failed: {0}")]
    Serialize(String),
    #[error("pdf helper failed: {0}")]
    Helper(String),
    #[error("not available on server")]
    Unavailable,
}

/// Act (ato de ocorrência) for one committee: composition, admitted
/// enrollments and signature lines.
#[must_use]
pub fn build_act_document(committee: &Committee, roster: &CommitteeRoster, enrollments: &[Enrollment]) -> Value {
    let mut composition = Vec::new();
    if let Some(president) = &roster.president {
        composition.push(json!(format!("{}: {}", capitalize(&roster.president_label()), president.nome)));
    }
    if !roster.relators.is_empty() {
        composition.push(json!(format!("{}: {}", capitalize(&roster.relators_label()), join_names(&roster.relators))));
    }
    if !roster.specialists.is_empty() {
        composition.push(json!(format!("{}: {}", roster.specialists_label(), join_names(&roster.specialists))));
    }
    if !roster.jurists.is_empty() {
        composition.push(json!(format!("{}: {}", roster.jurists_label(), join_names(&roster.jurists))));
    }

    let mut enrollment_rows = vec![json!([
        { "text": "#", "style": "header" },
        { "text": "Nome", "style": "header" },
        { "text": "Matrícula", "style": "header" },
    ])];
    enrollment_rows.extend(enrollments.iter().enumerate().map(|(i, e)| {
        json!([(i + 1).to_string(), e.nome, e.matricula.clone().unwrap_or_default()])
    }));

    let signatures: Vec<Value> = roster
        .president
        .iter()
        .chain(roster.relators.iter())
        .map(signature_block)
        .collect();

    json!({
        "pageMargins": [30, 30],
        "content": [
            { "text": "Ato de ocorrência", "style": "title" },
            { "text": committee.committee_name, "style": "subtitle" },
            { "text": "Composição da comissão", "style": "section" },
            { "ul": composition },
            { "text": roster.members_heading(), "style": "section" },
            member_table(&roster.members),
            { "text": format!("{} inscrições admitidas", enrollments.len()), "style": "section" },
            {
                "table": { "headerRows": 1, "widths": ["auto", "*", "auto"], "body": enrollment_rows },
                "layout": "lightHorizontalLines",
                "style": "table"
            },
            { "columns": signatures, "marginTop": 40 }
        ],
        "styles": {
            "title": { "fontSize": 16, "bold": true, "alignment": "center" },
            "subtitle": { "fontSize": 13, "alignment": "center", "margin": [0, 4, 0, 12] },
            "section": { "bold": true, "margin": [0, 12, 0, 4] },
            "table": { "margin": [0, 10] },
            "header": { "bold": true }
        }
    })
}

/// Roster sheet: president and relators side by side, then a striped list
/// of rank-and-file members.
#[must_use]
pub fn build_roster_document(roster: &CommitteeRoster) -> Value {
    let president_name = roster.president.as_ref().map(|p| p.nome.clone()).unwrap_or_default();
    json!({
        "pageMargins": [30, 30],
        "content": [
            {
                "marginBottom": 20,
                "columns": [
                    [
                        { "text": president_name, "alignment": "center", "bold": true },
                        { "text": capitalize(&roster.president_label()), "alignment": "center" }
                    ],
                    [
                        { "text": join_names(&roster.relators), "alignment": "center", "bold": true },
                        { "text": capitalize(&roster.relators_label()), "alignment": "center" }
                    ]
                ]
            },
            { "text": roster.members_heading(), "style": { "bold": true } },
            member_table(&roster.members)
        ],
        "styles": {
            "table": { "margin": [0, 10] }
        }
    })
}

fn member_table(members: &[Member]) -> Value {
    let body: Vec<Value> = members
        .iter()
        .enumerate()
        .map(|(i, m)| {
            if i % 2 == 0 {
                json!([{ "text": m.nome, "fillColor": STRIPE_COLOR }])
            } else {
                json!([m.nome])
            }
        })
        .collect();
    if body.is_empty() {
        return json!({ "text": "" });
    }
    json!({ "table": { "widths": ["*"], "body": body }, "style": "table" })
}

fn signature_block(member: &Member) -> Value {
    json!({
        "stack": [
            { "text": SIGNATURE_LINE, "alignment": "center" },
            { "text": member.nome, "alignment": "center", "bold": true },
            { "text": capitalize(&member.funcao.as_str().to_lowercase()), "alignment": "center" }
        ]
    })
}

fn join_names(members: &[Member]) -> String {
    members.iter().map(|m| m.nome.as_str()).collect::<Vec<_>>().join(", ")
}

/// Upper-case the first character, leaving the rest untouched.
#[must_use]
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    chars
        .next()
        .map(|first| first.to_uppercase().chain(chars).collect())
        .unwrap_or_default()
}

#[cfg(feature = "hydrate")]
mod js {
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen]
    extern "C" {
        pub type PdfDocument;

        #[wasm_bindgen(catch, js_namespace = pdfMake, js_name = createPdf)]
        pub fn create_pdf(definition: &JsValue) -> Result<PdfDocument, JsValue>;

        #[wasm_bindgen(method, catch)]
        pub fn open(this: &PdfDocument) -> Result<(), JsValue>;
    }
}

/// Hand `definition` to `pdfMake` and open the result in a new tab.
///
/// A `"currentPage/pageCount"` footer is attached on the JS side since
/// pdfmake only accepts it as a function.
///
/// # Errors
///
/// Returns an error if the definition cannot be converted or the helper throws.
pub fn open_pdf(definition: &Value) -> Result<(), PdfError> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsValue;

        let raw = serde_json::to_string(definition).map_err(|e| PdfError::Serialize(e.to_string()))?;
        let value = js_sys::JSON::parse(&raw).map_err(|e| PdfError::Serialize(format!("{e:?}")))?;
        let footer = js_sys::Function::new_with_args(
            "currentPage, pageCount",
            "return { text: currentPage + '/' + pageCount, alignment: 'center' };",
        );
        js_sys::Reflect::set(&value, &JsValue::from_str("footer"), &footer)
            .map_err(|e| PdfError::Helper(format!("{e:?}")))?;
        let document = js::create_pdf(&value).map_err(|e| PdfError::Helper(format!("{e:?}")))?;
        document.open().map_err(|e| PdfError::Helper(format!("{e:?}")))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = definition;
        Err(PdfError::Unavailable)
    }
}
