//! Arabic/English label table.
//!
//! Keys mirror the web portal's translation ids so status labels and column
//! headers read the same in both front-ends. Unknown keys render as the key
//! itself.

use crate::enums::{CaseStatus, Language};

/// `(key, ar, en)`
const TRANSLATIONS: &[(&str, &str, &str)] = &[
    // Status labels
    ("statusNew", "جديد", "New"),
    ("statusUnderReview", "قيد المراجعة", "Under Review"),
    ("statusApproved", "تمت الموافقة", "Approved"),
    ("statusRejected", "مرفوض", "Rejected"),
    ("statusCompleted", "مكتمل", "Completed"),
    // Chat
    (
        "welcomeMessage",
        "مرحبًا بك في بوابة الخدمات الإلكترونية! كيف يمكنني مساعدتك اليوم؟",
        "Welcome to the E-Services Portal! How can I help you today?",
    ),
    ("uploadDocuments", "يرجى إرفاق المستندات المطلوبة", "Please attach the required documents"),
    ("chatHistory", "سجل المحادثة", "Chat History"),
    // Dashboard
    ("caseNumber", "رقم الطلب", "Case Number"),
    ("serviceType", "نوع الخدمة", "Service Type"),
    ("submissionDate", "تاريخ التقديم", "Submission Date"),
    ("status", "الحالة", "Status"),
    ("estimatedPrice", "السعر التقديري", "Estimated Price"),
    ("allStatuses", "جميع الحالات", "All Statuses"),
    ("noRequests", "لا توجد طلبات", "No requests found"),
    // Case details
    ("caseDetails", "تفاصيل الطلب", "Case Details"),
    ("uploadedDocuments", "المستندات المرفوعة", "Uploaded Documents"),
    ("statusTimeline", "مراحل الطلب", "Status Timeline"),
    // Auth
    ("qatarId", "الرقم الشخصي", "Qatar ID"),
    ("email", "البريد الإلكتروني", "Email"),
    ("login", "تسجيل الدخول", "Login"),
    ("logout", "تسجيل الخروج", "Logout"),
    // Common
    ("qar", "ر.ق", "QAR"),
    ("error", "حدث خطأ", "An error occurred"),
    ("success", "تم بنجاح", "Success"),
];

const GREETING_AR: &str = "مرحبًا بك في بوابة الخدمات الإلكترونية! كيف يمكنني مساعدتك اليوم؟ يمكنني مساعدتك في:\n\n• المساعدة الاجتماعية\n• دعم الأسرة\n• رعاية كبار السن\n• خدمات ذوي الإعاقة\n• الدعم السكني\n• المساعدة الطارئة";
const GREETING_EN: &str = "Welcome to the E-Services Portal! How can I help you today? I can assist you with:\n\n• Social Assistance\n• Family Support\n• Elder Care\n• Disability Services\n• Housing Support\n• Emergency Aid";

/// Note attached to the first history entry of every new case.
pub const CASE_RECEIVED_NOTE: &str = "تم استلام الطلب";

fn lookup(key: &str, lang: Language) -> Option<&'static str> {
    TRANSLATIONS
        .iter()
        .find(|(k, _, _)| *k == key)
        .map(|&(_, ar, en)| match lang {
            Language::Ar => ar,
            Language::En => en,
        })
}

/// Look up `key` in `lang`, falling back to the key.
#[must_use]
pub fn t(key: &str, lang: Language) -> &str {
    lookup(key, lang).unwrap_or(key)
}

#[must_use]
pub fn status_label(status: CaseStatus, lang: Language) -> &'static str {
    let key = status.label_key();
    lookup(key, lang).unwrap_or(key)
}

/// Agent welcome shown before the first exchange.
#[must_use]
pub const fn greeting(lang: Language) -> &'static str {
    match lang {
        Language::Ar => GREETING_AR,
        Language::En => GREETING_EN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_status_has_both_labels() {
        for status in CaseStatus::ALL {
            assert_ne!(status_label(status, Language::Ar), status.label_key());
            assert_ne!(status_label(status, Language::En), status.label_key());
        }
        assert_eq!(status_label(CaseStatus::UnderReview, Language::En), "Under Review");
        assert_eq!(status_label(CaseStatus::New, Language::Ar), "جديد");
    }

    #[test]
    fn unknown_key_falls_back_to_key() {
        assert_eq!(t("noSuchKey", Language::En), "noSuchKey");
    }

    #[test]
    fn greeting_is_localized() {
        assert!(greeting(Language::En).starts_with("Welcome"));
        assert!(greeting(Language::Ar).starts_with("مرحبًا"));
    }

    #[test]
    fn keys_are_unique() {
        let mut keys: Vec<&str> = TRANSLATIONS.iter().map(|(k, _, _)| *k).collect();
        keys.sort_unstable();
        let before = keys.len();
        keys.dedup();
        assert_eq!(before, keys.len());
    }
}
