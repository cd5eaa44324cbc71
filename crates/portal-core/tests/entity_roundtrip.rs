//! Serde roundtrip and JsonSchema validation tests for all entity types.

use chrono::{NaiveDate, Utc};
use schemars::schema_for;
use portal_core::entities::*;
use portal_core::enums::*;
use portal_core::responses::*;
use pretty_assertions::assert_eq;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            // Serde roundtrip
            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            // Schema validation
            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

fn sample_document() -> UploadedDocument {
    UploadedDocument {
        id: "doc-9c1e4a7b".into(),
        name: "salary-certificate.pdf".into(),
        mime_type: "application/pdf".into(),
        size: 245_760,
        url: "/data/portal/uploads/salary-certificate.pdf".into(),
        uploaded_at: Utc::now(),
    }
}

fn sample_message(role: MessageRole, content: &str) -> ChatMessage {
    ChatMessage {
        id: "msg-3b7f0d21".into(),
        role,
        content: content.into(),
        timestamp: Utc::now(),
        attachments: vec![],
    }
}

fn sample_case() -> Case {
    let now = Utc::now();
    Case {
        id: "cas-a3f8b2c1".into(),
        case_number: "MSDF-2024-004512".into(),
        service_type: "social-assistance".into(),
        service_name_ar: "المساعدة الاجتماعية".into(),
        submission_date: NaiveDate::from_ymd_opt(2024, 11, 3).unwrap(),
        status: CaseStatus::UnderReview,
        estimated_price: 150.0,
        currency: "QAR".into(),
        user_id: "user-1".into(),
        documents: vec![sample_document()],
        messages: vec![sample_message(MessageRole::User, "أحتاج مساعدة")],
        status_history: vec![
            StatusUpdate {
                status: CaseStatus::New,
                timestamp: now,
                note: Some("تم استلام الطلب".into()),
            },
            StatusUpdate {
                status: CaseStatus::UnderReview,
                timestamp: now,
                note: None,
            },
        ],
    }
}

fn sample_user() -> User {
    User {
        id: "usr-5d2e8f10".into(),
        qid: "28763400123".into(),
        email: "citizen@example.qa".into(),
        name_ar: "أحمد محمد".into(),
        name_en: Some("Ahmed Mohammed".into()),
        phone: None,
    }
}

roundtrip_and_validate!(case_roundtrip, Case, sample_case());

roundtrip_and_validate!(
    status_update_roundtrip,
    StatusUpdate,
    StatusUpdate {
        status: CaseStatus::Approved,
        timestamp: Utc::now(),
        note: Some("Documents verified".into()),
    }
);

roundtrip_and_validate!(document_roundtrip, UploadedDocument, sample_document());

roundtrip_and_validate!(
    message_with_attachment_roundtrip,
    ChatMessage,
    ChatMessage {
        attachments: vec![sample_document()],
        ..sample_message(MessageRole::User, "attached my ID")
    }
);

roundtrip_and_validate!(user_roundtrip, User, sample_user());

roundtrip_and_validate!(
    service_roundtrip,
    Service,
    Service {
        id: "social-assistance".into(),
        name_ar: "المساعدة الاجتماعية".into(),
        name_en: "Social Assistance".into(),
        description_ar: "دعم مالي للأسر".into(),
        description_en: "Financial support for families".into(),
        icon: "HandHeart".into(),
        category: "social".into(),
        base_price: 0.0,
        estimated_days: 14,
        required_documents: vec!["ID Card".into(), "Salary Certificate".into()],
    }
);

roundtrip_and_validate!(
    step_roundtrip,
    Step,
    Step {
        step: "١".into(),
        step_en: "1".into(),
        title_ar: "تحدث مع المساعد".into(),
        title_en: "Talk to the assistant".into(),
        desc_ar: "اشرح طلبك".into(),
        desc_en: "Describe your request".into(),
        icon: "MessageSquare".into(),
        color: "primary".into(),
    }
);

roundtrip_and_validate!(
    chat_session_record_roundtrip,
    ChatSessionRecord,
    ChatSessionRecord {
        session_id: "4f1c1d7e-0c55-4a53-9a3e-6d2b7f0e9a11".into(),
        state: ConversationState::AwaitingDocuments,
        messages: vec![
            sample_message(MessageRole::User, "Family support"),
            sample_message(MessageRole::Agent, "Please attach the required documents"),
        ],
        document_history: vec![sample_document()],
    }
);

roundtrip_and_validate!(
    case_list_response_roundtrip,
    CaseListResponse,
    CaseListResponse {
        cases: vec![sample_case()],
        total: 1,
    }
);

roundtrip_and_validate!(
    chat_exchange_response_roundtrip,
    ChatExchangeResponse,
    ChatExchangeResponse {
        session_id: "4f1c1d7e-0c55-4a53-9a3e-6d2b7f0e9a11".into(),
        state: ConversationState::Completed,
        stage: UiStage::Complete,
        messages: vec![sample_message(MessageRole::Agent, "Your request has been submitted")],
        document_history: vec![],
        greeting: None,
    }
);

roundtrip_and_validate!(
    auth_status_response_roundtrip,
    AuthStatusResponse,
    AuthStatusResponse {
        authenticated: true,
        user: Some(sample_user()),
        has_token: true,
        token_source: Some("file".into()),
    }
);

roundtrip_and_validate!(
    action_response_roundtrip,
    ActionResponse,
    ActionResponse {
        ok: true,
        detail: "logged out".into(),
    }
);

#[test]
fn case_json_uses_camel_case_keys() {
    let value = serde_json::to_value(sample_case()).unwrap();
    for key in [
        "caseNumber",
        "serviceType",
        "serviceNameAr",
        "submissionDate",
        "estimatedPrice",
        "userId",
        "statusHistory",
    ] {
        assert!(value.get(key).is_some(), "missing {key}");
    }
    assert_eq!(value["status"], "under_review");
    assert_eq!(value["submissionDate"], "2024-11-03");
}

#[test]
fn sample_case_is_consistent() {
    let case = sample_case();
    assert!(case.is_consistent());
    assert_eq!(case.latest_status(), Some(CaseStatus::UnderReview));
}

#[test]
fn case_search_matches_number_and_service_name() {
    let case = sample_case();
    assert!(case.matches_search("msdf-2024"));
    assert!(case.matches_search("004512"));
    assert!(case.matches_search("الاجتماعية"));
    assert!(!case.matches_search("housing"));
}

#[test]
fn conversation_state_uses_server_names() {
    let record = ChatSessionRecord {
        state: ConversationState::AwaitingServiceSelection,
        ..ChatSessionRecord::default()
    };
    let value = serde_json::to_value(record).unwrap();
    assert_eq!(value["state"], "AwaitingServiceSelection");
}
