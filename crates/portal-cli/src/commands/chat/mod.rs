mod reset;
mod send;
mod show;

use portal_core::entities::ChatSessionRecord;
use portal_core::enums::Language;
use portal_core::i18n;
use portal_core::responses::ChatExchangeResponse;

use crate::cli::subcommands::ChatCommands;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::{output, output_rows};

/// Handle `portal chat <subcommand>`.
pub async fn handle(
    action: &ChatCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ChatCommands::Send { text, attach } => {
            send::run(text.as_deref().unwrap_or_default(), attach, ctx, flags).await
        }
        ChatCommands::Show => show::run(ctx, flags),
        ChatCommands::Reset => reset::run(ctx, flags),
    }
}

fn exchange_response(record: ChatSessionRecord, language: Language) -> ChatExchangeResponse {
    ChatExchangeResponse {
        greeting: record
            .messages
            .is_empty()
            .then(|| i18n::greeting(language).to_string()),
        session_id: record.session_id,
        stage: record.state.ui_stage(),
        state: record.state,
        messages: record.messages,
        document_history: record.document_history,
    }
}

/// Table mode prints a transcript; other formats print the response as-is.
fn print_exchange(response: &ChatExchangeResponse, flags: &GlobalFlags) -> anyhow::Result<()> {
    if flags.format != OutputFormat::Table {
        return output(response, flags.format);
    }

    if let Some(greeting) = &response.greeting {
        println!("{greeting}\n");
    }
    output_rows(&["role", "time", "message"], &transcript_rows(response));
    println!("\nstage: {}  session: {}", response.stage, response.session_id);
    Ok(())
}

fn transcript_rows(response: &ChatExchangeResponse) -> Vec<Vec<String>> {
    response
        .messages
        .iter()
        .map(|message| {
            let mut text = message.content.replace('\n', " ");
            for document in &message.attachments {
                text.push_str(&format!(" [{} {}]", document.name, document.display_size()));
            }
            vec![
                message.role.to_string(),
                message.timestamp.format("%H:%M").to_string(),
                text,
            ]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use portal_core::entities::{ChatMessage, ChatSessionRecord};
    use portal_core::enums::{ConversationState, Language, MessageRole, UiStage};
    use pretty_assertions::assert_eq;

    use super::{exchange_response, transcript_rows};

    fn sample_message(role: MessageRole, content: &str) -> ChatMessage {
        serde_json::from_value(serde_json::json!({
            "id": "msg-00000001",
            "role": role,
            "content": content,
            "timestamp": "2026-03-01T09:30:00Z",
        }))
        .expect("message json")
    }

    #[test]
    fn empty_session_carries_greeting() {
        let response = exchange_response(
            ChatSessionRecord {
                session_id: "abc".into(),
                ..ChatSessionRecord::default()
            },
            Language::En,
        );

        assert!(response.greeting.as_deref().is_some_and(|g| g.starts_with("Welcome")));
        assert_eq!(response.stage, UiStage::Greeting);
    }

    #[test]
    fn stage_follows_server_state() {
        let response = exchange_response(
            ChatSessionRecord {
                session_id: "abc".into(),
                state: ConversationState::Completed,
                messages: vec![sample_message(MessageRole::User, "hello")],
                document_history: Vec::new(),
            },
            Language::Ar,
        );

        assert_eq!(response.greeting, None);
        assert_eq!(response.stage, UiStage::Complete);
    }

    #[test]
    fn transcript_flattens_multiline_content() {
        let response = exchange_response(
            ChatSessionRecord {
                session_id: "abc".into(),
                state: ConversationState::default(),
                messages: vec![sample_message(MessageRole::Agent, "line one\nline two")],
                document_history: Vec::new(),
            },
            Language::En,
        );

        assert_eq!(
            transcript_rows(&response),
            vec![vec![
                "agent".to_string(),
                "09:30".to_string(),
                "line one line two".to_string()
            ]]
        );
    }
}
