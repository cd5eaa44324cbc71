use portal_core::entities::Case;
use portal_core::enums::{CaseStatus, Language};
use portal_core::i18n::{status_label, t};
use portal_core::responses::CaseListResponse;
use portal_store::CaseFilter;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::limit::effective_limit;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::{output, output_rows};

pub fn run(
    status: Option<&str>,
    search: Option<&str>,
    limit: Option<u32>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let limit = effective_limit(limit, flags.limit, ctx.config.general.default_limit);
    let filter = CaseFilter {
        status: status
            .map(|value| parse_enum::<CaseStatus>(value, "status"))
            .transpose()?,
        search: search.map(String::from),
    };

    let store = ctx.cases()?;
    let matched = store.filter(&filter);
    let total = u32::try_from(matched.len())?;
    let cases = matched
        .into_iter()
        .take(usize::try_from(limit)?)
        .cloned()
        .collect::<Vec<_>>();

    if flags.format == OutputFormat::Table {
        let language = ctx.language();
        if cases.is_empty() {
            println!("{}", t("noRequests", language));
            return Ok(());
        }
        let headers = table_headers(language);
        let header_refs = headers.iter().map(String::as_str).collect::<Vec<_>>();
        output_rows(&header_refs, &table_rows(&cases, language));
        return Ok(());
    }

    output(&CaseListResponse { cases, total }, flags.format)
}

fn table_headers(language: Language) -> Vec<String> {
    ["caseNumber", "serviceType", "status", "submissionDate", "estimatedPrice"]
        .into_iter()
        .map(|key| t(key, language).to_string())
        .collect()
}

fn table_rows(cases: &[Case], language: Language) -> Vec<Vec<String>> {
    cases
        .iter()
        .map(|case| {
            let service = match language {
                Language::Ar => case.service_name_ar.clone(),
                Language::En => case.service_type.clone(),
            };
            let currency = if case.currency == "QAR" {
                t("qar", language)
            } else {
                case.currency.as_str()
            };
            vec![
                case.case_number.clone(),
                service,
                status_label(case.status, language).to_string(),
                case.submission_date.to_string(),
                format!("{} {currency}", case.estimated_price),
            ]
        })
        .collect()
}
